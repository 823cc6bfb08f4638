//! Admin operations handlers.
//!
//! This module handles:
//! - Ownership transfer (submit/confirm/cancel)
//! - Owner assistant rotation
//! - Pause and unwrap flags
//! - Code upgrades
//!
//! It also hosts the authorization guards shared by every governance handler.

use cosmwasm_std::{to_json_binary, Addr, DepsMut, Env, MessageInfo, Response, Storage, WasmMsg};

use crate::error::ContractError;
use crate::msg::MigrateMsg;
use crate::state::{
    Config, Ownership, CONFIG, IMPLEMENTATION, INITIALIZED_IMPLEMENTATIONS, OWNERSHIP,
};

// ============================================================================
// Guards
// ============================================================================

pub(crate) fn assert_owner(storage: &dyn Storage, sender: &Addr) -> Result<Ownership, ContractError> {
    let ownership = OWNERSHIP.load(storage)?;
    if *sender != ownership.owner {
        return Err(ContractError::OwnerOnly);
    }
    Ok(ownership)
}

pub(crate) fn assert_owner_or_assistant(
    storage: &dyn Storage,
    sender: &Addr,
) -> Result<(), ContractError> {
    let ownership = OWNERSHIP.load(storage)?;
    if *sender != ownership.owner && *sender != ownership.owner_assistant {
        return Err(ContractError::OwnerOrAssistantOnly);
    }
    Ok(())
}

pub(crate) fn assert_this_chain(config: &Config, chain_id: u16) -> Result<(), ContractError> {
    if chain_id != config.chain_id {
        return Err(ContractError::WrongChain {
            expected: config.chain_id,
            got: chain_id,
        });
    }
    Ok(())
}

// ============================================================================
// Ownership Transfer
// ============================================================================

/// Nominate a new owner. Takes effect once the nominee confirms.
pub fn execute_submit_ownership_transfer_request(
    deps: DepsMut,
    info: MessageInfo,
    chain_id: u16,
    new_owner: String,
) -> Result<Response, ContractError> {
    let mut ownership = assert_owner(deps.storage, &info.sender)?;
    let config = CONFIG.load(deps.storage)?;
    assert_this_chain(&config, chain_id)?;

    if new_owner.is_empty() {
        return Err(ContractError::InvalidAddress {
            reason: "new owner cannot be empty".to_string(),
        });
    }
    let new_owner_addr = deps.api.addr_validate(&new_owner)?;

    ownership.pending_owner = Some(new_owner_addr.clone());
    OWNERSHIP.save(deps.storage, &ownership)?;

    Ok(Response::new()
        .add_attribute("action", "submit_ownership_transfer_request")
        .add_attribute("pending_owner", new_owner_addr))
}

/// Accept a pending ownership nomination.
pub fn execute_confirm_ownership_transfer_request(
    deps: DepsMut,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let mut ownership = OWNERSHIP.load(deps.storage)?;
    if ownership.pending_owner.as_ref() != Some(&info.sender) {
        return Err(ContractError::NotPendingOwner);
    }

    let previous_owner = ownership.owner;
    ownership.owner = info.sender.clone();
    ownership.pending_owner = None;
    OWNERSHIP.save(deps.storage, &ownership)?;

    Ok(Response::new()
        .add_attribute("action", "confirm_ownership_transfer_request")
        .add_attribute("previous_owner", previous_owner)
        .add_attribute("new_owner", info.sender))
}

/// Withdraw a pending ownership nomination.
pub fn execute_cancel_ownership_transfer_request(
    deps: DepsMut,
    info: MessageInfo,
    chain_id: u16,
) -> Result<Response, ContractError> {
    let mut ownership = assert_owner(deps.storage, &info.sender)?;
    let config = CONFIG.load(deps.storage)?;
    assert_this_chain(&config, chain_id)?;

    ownership.pending_owner = None;
    OWNERSHIP.save(deps.storage, &ownership)?;

    Ok(Response::new().add_attribute("action", "cancel_ownership_transfer_request"))
}

/// Replace the owner assistant.
pub fn execute_update_owner_assistant(
    deps: DepsMut,
    info: MessageInfo,
    chain_id: u16,
    new_assistant: String,
) -> Result<Response, ContractError> {
    let mut ownership = assert_owner(deps.storage, &info.sender)?;
    let config = CONFIG.load(deps.storage)?;
    assert_this_chain(&config, chain_id)?;

    if new_assistant.is_empty() {
        return Err(ContractError::InvalidAddress {
            reason: "owner assistant cannot be empty".to_string(),
        });
    }
    let assistant_addr = deps.api.addr_validate(&new_assistant)?;

    ownership.owner_assistant = assistant_addr.clone();
    OWNERSHIP.save(deps.storage, &ownership)?;

    Ok(Response::new()
        .add_attribute("action", "update_owner_assistant")
        .add_attribute("owner_assistant", assistant_addr))
}

// ============================================================================
// Flags
// ============================================================================

/// Pause or resume outbound transfers and relayed redemptions.
pub fn execute_set_pause_for_transfers(
    deps: DepsMut,
    info: MessageInfo,
    chain_id: u16,
    paused: bool,
) -> Result<Response, ContractError> {
    assert_owner(deps.storage, &info.sender)?;
    let mut config = CONFIG.load(deps.storage)?;
    assert_this_chain(&config, chain_id)?;

    config.paused = paused;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "set_pause_for_transfers")
        .add_attribute("paused", paused.to_string()))
}

pub fn execute_update_unwrap_native(
    deps: DepsMut,
    info: MessageInfo,
    chain_id: u16,
    unwrap: bool,
) -> Result<Response, ContractError> {
    assert_owner(deps.storage, &info.sender)?;
    let mut config = CONFIG.load(deps.storage)?;
    assert_this_chain(&config, chain_id)?;

    config.unwrap_native = unwrap;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "update_unwrap_native")
        .add_attribute("unwrap_native", unwrap.to_string()))
}

// ============================================================================
// Upgrade
// ============================================================================

/// Migrate this contract to `new_code_id`.
///
/// Storage is untouched; only the code bound to the contract address changes.
/// Each code id can be upgraded to once. The contract must be its own wasm
/// admin for the migrate message to be accepted.
pub fn execute_upgrade(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    chain_id: u16,
    new_code_id: u64,
) -> Result<Response, ContractError> {
    assert_owner(deps.storage, &info.sender)?;
    let config = CONFIG.load(deps.storage)?;
    assert_this_chain(&config, chain_id)?;

    if new_code_id == 0
        || INITIALIZED_IMPLEMENTATIONS
            .may_load(deps.storage, new_code_id)?
            .unwrap_or(false)
    {
        return Err(ContractError::InvalidImplementation {
            code_id: new_code_id,
        });
    }

    INITIALIZED_IMPLEMENTATIONS.save(deps.storage, new_code_id, &true)?;
    IMPLEMENTATION.save(deps.storage, &new_code_id)?;

    let migrate = WasmMsg::Migrate {
        contract_addr: env.contract.address.to_string(),
        new_code_id,
        msg: to_json_binary(&MigrateMsg {})?,
    };

    Ok(Response::new()
        .add_message(migrate)
        .add_attribute("action", "upgrade")
        .add_attribute("new_code_id", new_code_id.to_string()))
}
