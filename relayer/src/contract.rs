//! Token Bridge Relayer Contract - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::{get_contract_version, set_contract_version};

use crate::error::ContractError;
use crate::execute::{
    execute_cancel_ownership_transfer_request, execute_complete_transfer_with_relay,
    execute_confirm_ownership_transfer_request, execute_receive, execute_redeem_own_transfer,
    execute_register_contract, execute_register_token, execute_set_pause_for_transfers,
    execute_submit_ownership_transfer_request, execute_update_max_native_swap_amount,
    execute_update_native_swap_rate, execute_update_native_swap_rate_precision,
    execute_update_owner_assistant, execute_update_relayer_fee,
    execute_update_relayer_fee_precision, execute_update_unwrap_native, execute_upgrade,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_accepted_tokens, query_config, query_implementation, query_is_accepted_token,
    query_max_native_swap_amount, query_max_swap_amount_in, query_native_swap_amount_out,
    query_native_swap_rate, query_ownership, query_registered_contract, query_relayer_fee,
};
use crate::state::{
    Config, Ownership, ACCEPTED_TOKEN_LIST, CONFIG, CONTRACT_NAME, CONTRACT_VERSION,
    IMPLEMENTATION, INITIALIZED_IMPLEMENTATIONS, OWNERSHIP,
};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if msg.chain_id == 0 {
        return Err(ContractError::InvalidChainId { chain_id: 0 });
    }
    if msg.swap_rate_precision.is_zero() || msg.relayer_fee_precision.is_zero() {
        return Err(ContractError::PrecisionMustBePositive);
    }
    if msg.native_denom.is_empty() {
        return Err(ContractError::InvalidFunds {
            reason: "native denom must not be empty".to_string(),
        });
    }
    if msg.address_prefix.is_empty() {
        return Err(ContractError::InvalidAddress {
            reason: "address prefix must not be empty".to_string(),
        });
    }

    let token_bridge = deps.api.addr_validate(&msg.token_bridge)?;
    let owner_assistant = deps.api.addr_validate(&msg.owner_assistant)?;
    let wrapped_native_token = msg
        .wrapped_native_token
        .map(|token| deps.api.addr_validate(&token))
        .transpose()?;

    let config = Config {
        chain_id: msg.chain_id,
        token_bridge,
        native_denom: msg.native_denom,
        native_decimals: msg.native_decimals,
        wrapped_native_token,
        address_prefix: msg.address_prefix,
        swap_rate_precision: msg.swap_rate_precision,
        relayer_fee_precision: msg.relayer_fee_precision,
        paused: false,
        unwrap_native: msg.unwrap_native,
    };
    CONFIG.save(deps.storage, &config)?;

    OWNERSHIP.save(
        deps.storage,
        &Ownership {
            owner: info.sender.clone(),
            pending_owner: None,
            owner_assistant: owner_assistant.clone(),
        },
    )?;

    ACCEPTED_TOKEN_LIST.save(deps.storage, &vec![])?;

    // The running code can never be upgraded to again
    let code_id = deps
        .querier
        .query_wasm_contract_info(&env.contract.address)?
        .code_id;
    INITIALIZED_IMPLEMENTATIONS.save(deps.storage, code_id, &true)?;
    IMPLEMENTATION.save(deps.storage, &code_id)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", info.sender)
        .add_attribute("owner_assistant", owner_assistant)
        .add_attribute("chain_id", config.chain_id.to_string())
        .add_attribute("code_id", code_id.to_string())
        .add_attribute("token_bridge", config.token_bridge)
        .add_attribute("native_denom", config.native_denom))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // Transfers
        ExecuteMsg::Receive(wrapper) => execute_receive(deps, info, wrapper),
        ExecuteMsg::CompleteTransferWithRelay { vaa } => {
            execute_complete_transfer_with_relay(deps, env, info, vaa)
        }
        ExecuteMsg::RedeemOwnTransfer { vaa } => execute_redeem_own_transfer(deps, env, info, vaa),

        // Ownership
        ExecuteMsg::SubmitOwnershipTransferRequest {
            chain_id,
            new_owner,
        } => execute_submit_ownership_transfer_request(deps, info, chain_id, new_owner),
        ExecuteMsg::ConfirmOwnershipTransferRequest {} => {
            execute_confirm_ownership_transfer_request(deps, info)
        }
        ExecuteMsg::CancelOwnershipTransferRequest { chain_id } => {
            execute_cancel_ownership_transfer_request(deps, info, chain_id)
        }
        ExecuteMsg::UpdateOwnerAssistant {
            chain_id,
            new_assistant,
        } => execute_update_owner_assistant(deps, info, chain_id, new_assistant),
        ExecuteMsg::Upgrade {
            chain_id,
            new_code_id,
        } => execute_upgrade(deps, env, info, chain_id, new_code_id),

        // Registry
        ExecuteMsg::RegisterContract {
            chain_id,
            contract_address,
        } => execute_register_contract(deps, info, chain_id, contract_address),
        ExecuteMsg::RegisterToken { chain_id, token } => {
            execute_register_token(deps, info, chain_id, token)
        }

        // Fees & swaps
        ExecuteMsg::UpdateRelayerFee {
            chain_id,
            token,
            fee,
        } => execute_update_relayer_fee(deps, info, chain_id, token, fee),
        ExecuteMsg::UpdateRelayerFeePrecision {
            chain_id,
            precision,
        } => execute_update_relayer_fee_precision(deps, info, chain_id, precision),
        ExecuteMsg::UpdateNativeSwapRate {
            chain_id,
            token,
            swap_rate,
        } => execute_update_native_swap_rate(deps, info, chain_id, token, swap_rate),
        ExecuteMsg::UpdateNativeSwapRatePrecision {
            chain_id,
            precision,
        } => execute_update_native_swap_rate_precision(deps, info, chain_id, precision),
        ExecuteMsg::UpdateMaxNativeSwapAmount {
            chain_id,
            token,
            max_amount,
        } => execute_update_max_native_swap_amount(deps, info, chain_id, token, max_amount),

        // Admin
        ExecuteMsg::SetPauseForTransfers { chain_id, paused } => {
            execute_set_pause_for_transfers(deps, info, chain_id, paused)
        }
        ExecuteMsg::UpdateUnwrapNative { chain_id, unwrap } => {
            execute_update_unwrap_native(deps, info, chain_id, unwrap)
        }
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::Ownership {} => to_json_binary(&query_ownership(deps)?),
        QueryMsg::RegisteredContract { chain_id } => {
            to_json_binary(&query_registered_contract(deps, chain_id)?)
        }
        QueryMsg::AcceptedTokens {} => to_json_binary(&query_accepted_tokens(deps)?),
        QueryMsg::IsAcceptedToken { token } => {
            to_json_binary(&query_is_accepted_token(deps, token)?)
        }
        QueryMsg::RelayerFee { chain_id, token } => {
            to_json_binary(&query_relayer_fee(deps, chain_id, token)?)
        }
        QueryMsg::NativeSwapRate { token } => to_json_binary(&query_native_swap_rate(deps, token)?),
        QueryMsg::MaxNativeSwapAmount { token } => {
            to_json_binary(&query_max_native_swap_amount(deps, token)?)
        }
        QueryMsg::MaxSwapAmountIn { token } => {
            to_json_binary(&query_max_swap_amount_in(deps, token)?)
        }
        QueryMsg::NativeSwapAmountOut {
            token,
            to_native_amount,
        } => to_json_binary(&query_native_swap_amount_out(deps, token, to_native_amount)?),
        QueryMsg::Implementation { code_id } => {
            to_json_binary(&query_implementation(deps, code_id)?)
        }
    }
}

// ============================================================================
// Migrate
// ============================================================================

/// Runs on every upgrade. Storage is left untouched; only the recorded
/// contract version moves forward.
#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    let stored = get_contract_version(deps.storage)?;
    if stored.contract != CONTRACT_NAME {
        return Err(ContractError::InvalidMigration {
            contract: stored.contract,
            expected: CONTRACT_NAME.to_string(),
        });
    }

    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("from_version", stored.version)
        .add_attribute("version", CONTRACT_VERSION))
}
