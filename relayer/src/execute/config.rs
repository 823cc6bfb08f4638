//! Registry and fee configuration handlers.
//!
//! This module handles:
//! - Counterpart contract registration
//! - Token registration
//! - Relayer fees and fee precision
//! - Native swap rates, precision, and caps

use cosmwasm_std::{Addr, Binary, Deps, DepsMut, MessageInfo, Response, Uint128};
use cw20::{Cw20QueryMsg, TokenInfoResponse};

use crate::address_codec::{bytes32_to_hex, is_zero_identity, parse_identity};
use crate::error::ContractError;
use crate::execute::{assert_owner, assert_owner_or_assistant, assert_this_chain};
use crate::state::{
    AcceptedToken, ACCEPTED_TOKENS, ACCEPTED_TOKEN_LIST, CONFIG, MAX_NATIVE_SWAP_AMOUNTS,
    REGISTERED_CONTRACTS, RELAYER_FEES, SWAP_RATES,
};
use crate::swap::validate_relayer_fee;

// ============================================================================
// Counterpart Registry
// ============================================================================

/// Register the trusted relayer contract on `chain_id`.
///
/// Re-registering a chain replaces its identity.
pub fn execute_register_contract(
    deps: DepsMut,
    info: MessageInfo,
    chain_id: u16,
    contract_address: Binary,
) -> Result<Response, ContractError> {
    assert_owner(deps.storage, &info.sender)?;
    let config = CONFIG.load(deps.storage)?;

    if chain_id == 0 || chain_id == config.chain_id {
        return Err(ContractError::InvalidChainId { chain_id });
    }

    let identity = parse_identity(&contract_address).map_err(|e| {
        ContractError::InvalidContractAddress {
            reason: e.to_string(),
        }
    })?;
    if is_zero_identity(&identity) {
        return Err(ContractError::InvalidContractAddress {
            reason: "zero address".to_string(),
        });
    }

    REGISTERED_CONTRACTS.save(deps.storage, chain_id, &identity)?;

    Ok(Response::new()
        .add_attribute("action", "register_contract")
        .add_attribute("chain_id", chain_id.to_string())
        .add_attribute("contract_address", bytes32_to_hex(&identity)))
}

// ============================================================================
// Token Registry
// ============================================================================

/// Accept a CW20 token. Acceptance is permanent.
pub fn execute_register_token(
    deps: DepsMut,
    info: MessageInfo,
    chain_id: u16,
    token: String,
) -> Result<Response, ContractError> {
    assert_owner(deps.storage, &info.sender)?;
    let config = CONFIG.load(deps.storage)?;
    assert_this_chain(&config, chain_id)?;

    if token.is_empty() {
        return Err(ContractError::InvalidToken);
    }
    let token_addr = deps
        .api
        .addr_validate(&token)
        .map_err(|_| ContractError::InvalidToken)?;

    if ACCEPTED_TOKENS.has(deps.storage, &token_addr) {
        return Err(ContractError::TokenAlreadyRegistered { token });
    }

    let token_info: TokenInfoResponse = deps
        .querier
        .query_wasm_smart(&token_addr, &Cw20QueryMsg::TokenInfo {})?;

    ACCEPTED_TOKENS.save(
        deps.storage,
        &token_addr,
        &AcceptedToken {
            decimals: token_info.decimals,
        },
    )?;
    let mut accepted = ACCEPTED_TOKEN_LIST
        .may_load(deps.storage)?
        .unwrap_or_default();
    accepted.push(token_addr.clone());
    ACCEPTED_TOKEN_LIST.save(deps.storage, &accepted)?;

    Ok(Response::new()
        .add_attribute("action", "register_token")
        .add_attribute("token", token_addr)
        .add_attribute("decimals", token_info.decimals.to_string()))
}

/// Resolve an accepted token, failing with `TokenNotAccepted` otherwise.
pub(crate) fn load_accepted_token(
    deps: Deps,
    token: &str,
) -> Result<(Addr, AcceptedToken), ContractError> {
    let not_accepted = || ContractError::TokenNotAccepted {
        token: token.to_string(),
    };
    let token_addr = deps.api.addr_validate(token).map_err(|_| not_accepted())?;
    let accepted = ACCEPTED_TOKENS
        .may_load(deps.storage, &token_addr)?
        .ok_or_else(not_accepted)?;
    Ok((token_addr, accepted))
}

// ============================================================================
// Relayer Fees
// ============================================================================

/// Set the relayer fee for transfers of `token` to `chain_id`.
pub fn execute_update_relayer_fee(
    deps: DepsMut,
    info: MessageInfo,
    chain_id: u16,
    token: String,
    fee: Uint128,
) -> Result<Response, ContractError> {
    assert_owner_or_assistant(deps.storage, &info.sender)?;
    let config = CONFIG.load(deps.storage)?;

    if chain_id != config.chain_id && !REGISTERED_CONTRACTS.has(deps.storage, chain_id) {
        return Err(ContractError::ContractNotRegistered { chain_id });
    }

    let (token_addr, accepted) = load_accepted_token(deps.as_ref(), &token)?;
    validate_relayer_fee(fee, accepted.decimals)?;

    RELAYER_FEES.save(deps.storage, (chain_id, &token_addr), &fee)?;

    Ok(Response::new()
        .add_attribute("action", "update_relayer_fee")
        .add_attribute("chain_id", chain_id.to_string())
        .add_attribute("token", token_addr)
        .add_attribute("fee", fee.to_string()))
}

pub fn execute_update_relayer_fee_precision(
    deps: DepsMut,
    info: MessageInfo,
    chain_id: u16,
    precision: Uint128,
) -> Result<Response, ContractError> {
    assert_owner(deps.storage, &info.sender)?;
    let mut config = CONFIG.load(deps.storage)?;
    assert_this_chain(&config, chain_id)?;

    if precision.is_zero() {
        return Err(ContractError::PrecisionMustBePositive);
    }

    config.relayer_fee_precision = precision;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "update_relayer_fee_precision")
        .add_attribute("precision", precision.to_string()))
}

// ============================================================================
// Native Swaps
// ============================================================================

pub fn execute_update_native_swap_rate(
    deps: DepsMut,
    info: MessageInfo,
    chain_id: u16,
    token: String,
    swap_rate: Uint128,
) -> Result<Response, ContractError> {
    assert_owner_or_assistant(deps.storage, &info.sender)?;
    let config = CONFIG.load(deps.storage)?;
    assert_this_chain(&config, chain_id)?;

    let (token_addr, _) = load_accepted_token(deps.as_ref(), &token)?;
    if swap_rate.is_zero() {
        return Err(ContractError::SwapRateMustBeNonzero);
    }

    SWAP_RATES.save(deps.storage, &token_addr, &swap_rate)?;

    Ok(Response::new()
        .add_attribute("action", "update_native_swap_rate")
        .add_attribute("token", token_addr)
        .add_attribute("swap_rate", swap_rate.to_string()))
}

/// Set the denominator shared by every token's swap rate.
pub fn execute_update_native_swap_rate_precision(
    deps: DepsMut,
    info: MessageInfo,
    chain_id: u16,
    precision: Uint128,
) -> Result<Response, ContractError> {
    assert_owner(deps.storage, &info.sender)?;
    let mut config = CONFIG.load(deps.storage)?;
    assert_this_chain(&config, chain_id)?;

    if precision.is_zero() {
        return Err(ContractError::PrecisionMustBePositive);
    }

    config.swap_rate_precision = precision;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "update_native_swap_rate_precision")
        .add_attribute("precision", precision.to_string()))
}

/// Cap the native gas a single redemption of `token` may pay out. Zero
/// disables swaps for the token.
pub fn execute_update_max_native_swap_amount(
    deps: DepsMut,
    info: MessageInfo,
    chain_id: u16,
    token: String,
    max_amount: Uint128,
) -> Result<Response, ContractError> {
    assert_owner_or_assistant(deps.storage, &info.sender)?;
    let config = CONFIG.load(deps.storage)?;
    assert_this_chain(&config, chain_id)?;

    let (token_addr, _) = load_accepted_token(deps.as_ref(), &token)?;
    if !max_amount.is_zero() && config.wrapped_native_token.as_ref() == Some(&token_addr) {
        return Err(ContractError::SwapsNotAllowedForNativeToken);
    }

    MAX_NATIVE_SWAP_AMOUNTS.save(deps.storage, &token_addr, &max_amount)?;

    Ok(Response::new()
        .add_attribute("action", "update_max_native_swap_amount")
        .add_attribute("token", token_addr)
        .add_attribute("max_amount", max_amount.to_string()))
}
