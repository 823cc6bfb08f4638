//! Query handlers for the token bridge relayer contract.

use cosmwasm_std::{Addr, Deps, StdError, StdResult, Uint128};

use crate::msg::{
    AcceptedTokenResponse, AcceptedTokensResponse, ConfigResponse, ImplementationResponse,
    IsAcceptedTokenResponse, MaxNativeSwapAmountResponse, OwnershipResponse,
    RegisteredContractResponse, RelayerFeeResponse, SwapAmountResponse, SwapRateResponse,
};
use crate::state::{
    AcceptedToken, ACCEPTED_TOKENS, ACCEPTED_TOKEN_LIST, CONFIG, IMPLEMENTATION,
    INITIALIZED_IMPLEMENTATIONS, MAX_NATIVE_SWAP_AMOUNTS, OWNERSHIP, REGISTERED_CONTRACTS,
    SWAP_RATES,
};
use crate::swap::{relayer_fee, SwapParams};

// ============================================================================
// Core Queries
// ============================================================================

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        chain_id: config.chain_id,
        token_bridge: config.token_bridge,
        native_denom: config.native_denom,
        native_decimals: config.native_decimals,
        wrapped_native_token: config.wrapped_native_token,
        address_prefix: config.address_prefix,
        swap_rate_precision: config.swap_rate_precision,
        relayer_fee_precision: config.relayer_fee_precision,
        paused: config.paused,
        unwrap_native: config.unwrap_native,
    })
}

pub fn query_ownership(deps: Deps) -> StdResult<OwnershipResponse> {
    let ownership = OWNERSHIP.load(deps.storage)?;
    Ok(OwnershipResponse {
        owner: ownership.owner,
        pending_owner: ownership.pending_owner,
        owner_assistant: ownership.owner_assistant,
    })
}

/// Query the latest code id the contract was upgraded to, and optionally
/// whether `code_id` has already been used.
pub fn query_implementation(deps: Deps, code_id: Option<u64>) -> StdResult<ImplementationResponse> {
    let initialized = code_id
        .map(|id| -> StdResult<bool> {
            Ok(INITIALIZED_IMPLEMENTATIONS
                .may_load(deps.storage, id)?
                .unwrap_or(false))
        })
        .transpose()?;

    Ok(ImplementationResponse {
        current: IMPLEMENTATION.may_load(deps.storage)?,
        initialized,
    })
}

// ============================================================================
// Registry Queries
// ============================================================================

pub fn query_registered_contract(
    deps: Deps,
    chain_id: u16,
) -> StdResult<Option<RegisteredContractResponse>> {
    Ok(REGISTERED_CONTRACTS
        .may_load(deps.storage, chain_id)?
        .map(|identity| RegisteredContractResponse {
            chain_id,
            contract_address: identity.to_vec().into(),
        }))
}

/// Accepted tokens in registration order.
pub fn query_accepted_tokens(deps: Deps) -> StdResult<AcceptedTokensResponse> {
    let tokens = ACCEPTED_TOKEN_LIST
        .may_load(deps.storage)?
        .unwrap_or_default()
        .into_iter()
        .map(|token| {
            let accepted = ACCEPTED_TOKENS.load(deps.storage, &token)?;
            Ok(AcceptedTokenResponse {
                token,
                decimals: accepted.decimals,
            })
        })
        .collect::<StdResult<Vec<_>>>()?;

    Ok(AcceptedTokensResponse { tokens })
}

pub fn query_is_accepted_token(deps: Deps, token: String) -> StdResult<IsAcceptedTokenResponse> {
    let accepted = match deps.api.addr_validate(&token) {
        Ok(addr) => ACCEPTED_TOKENS.has(deps.storage, &addr),
        Err(_) => false,
    };
    Ok(IsAcceptedTokenResponse { accepted })
}

// ============================================================================
// Fee & Swap Queries
// ============================================================================

pub fn query_relayer_fee(deps: Deps, chain_id: u16, token: String) -> StdResult<RelayerFeeResponse> {
    let token = deps.api.addr_validate(&token)?;
    Ok(RelayerFeeResponse {
        fee: relayer_fee(deps.storage, chain_id, &token)?,
    })
}

pub fn query_native_swap_rate(deps: Deps, token: String) -> StdResult<SwapRateResponse> {
    let token = deps.api.addr_validate(&token)?;
    Ok(SwapRateResponse {
        swap_rate: SWAP_RATES.may_load(deps.storage, &token)?.unwrap_or_default(),
    })
}

pub fn query_max_native_swap_amount(
    deps: Deps,
    token: String,
) -> StdResult<MaxNativeSwapAmountResponse> {
    let token = deps.api.addr_validate(&token)?;
    Ok(MaxNativeSwapAmountResponse {
        max_amount: MAX_NATIVE_SWAP_AMOUNTS
            .may_load(deps.storage, &token)?
            .unwrap_or_default(),
    })
}

/// Largest token amount a redemption may swap. Zero when the token cannot be
/// swapped.
pub fn query_max_swap_amount_in(deps: Deps, token: String) -> StdResult<SwapAmountResponse> {
    let amount = match load_swap_params(deps, &token)? {
        Some(params) => params
            .max_swap_amount_in()
            .map_err(|e| StdError::generic_err(e.to_string()))?,
        None => Uint128::zero(),
    };
    Ok(SwapAmountResponse { amount })
}

/// Native gas paid for swapping `to_native_amount` tokens, before capping.
pub fn query_native_swap_amount_out(
    deps: Deps,
    token: String,
    to_native_amount: Uint128,
) -> StdResult<SwapAmountResponse> {
    let amount = match load_swap_params(deps, &token)? {
        Some(params) => params
            .native_amount_out(to_native_amount)
            .map_err(|e| StdError::generic_err(e.to_string()))?,
        None => Uint128::zero(),
    };
    Ok(SwapAmountResponse { amount })
}

fn load_swap_params(deps: Deps, token: &str) -> StdResult<Option<SwapParams>> {
    let token: Addr = deps.api.addr_validate(token)?;
    let AcceptedToken { decimals } = ACCEPTED_TOKENS
        .may_load(deps.storage, &token)?
        .ok_or_else(|| StdError::generic_err(format!("Token not accepted: {}", token)))?;
    let config = CONFIG.load(deps.storage)?;
    SwapParams::load(deps.storage, &config, &token, decimals)
}
