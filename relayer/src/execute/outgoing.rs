//! Outbound transfer handler.
//!
//! Users send a CW20 token to this contract with a `TransferTokensWithRelay`
//! hook. The contract forwards the wire-representable part of the amount to
//! the token bridge together with a [`TransferWithRelay`] payload addressed to
//! the counterpart relayer on the target chain.

use cosmwasm_std::{from_json, to_json_binary, Binary, DepsMut, MessageInfo, Response, Uint128, WasmMsg};
use cw20::{Cw20ExecuteMsg, Cw20ReceiveMsg};

use common::TokenBridgeReceiveMsg;

use crate::address_codec::{bytes32_to_hex, is_zero_identity, parse_identity};
use crate::error::ContractError;
use crate::execute::load_accepted_token;
use crate::msg::ReceiveMsg;
use crate::normalize::{normalize_amount, truncate_to_wire};
use crate::payload::TransferWithRelay;
use crate::state::{CONFIG, REGISTERED_CONTRACTS};
use crate::swap::relayer_fee;

/// Handle the CW20 receive hook.
pub fn execute_receive(
    deps: DepsMut,
    info: MessageInfo,
    wrapper: Cw20ReceiveMsg,
) -> Result<Response, ContractError> {
    let msg: ReceiveMsg = from_json(&wrapper.msg)?;

    match msg {
        ReceiveMsg::TransferTokensWithRelay {
            target_chain,
            target_recipient,
            to_native_token_amount,
            batch_id,
        } => execute_transfer_tokens_with_relay(
            deps,
            info,
            wrapper.sender,
            wrapper.amount,
            target_chain,
            target_recipient,
            to_native_token_amount,
            batch_id,
        ),
    }
}

#[allow(clippy::too_many_arguments)]
fn execute_transfer_tokens_with_relay(
    deps: DepsMut,
    info: MessageInfo,
    sender: String,
    amount: Uint128,
    target_chain: u16,
    target_recipient: Binary,
    to_native_token_amount: Uint128,
    batch_id: u32,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if config.paused {
        return Err(ContractError::Paused);
    }

    // The token contract itself calls the hook
    let (token, accepted) = load_accepted_token(deps.as_ref(), info.sender.as_str())?;

    let counterpart = REGISTERED_CONTRACTS
        .may_load(deps.storage, target_chain)?
        .ok_or(ContractError::ContractNotRegistered {
            chain_id: target_chain,
        })?;

    let recipient = parse_identity(&target_recipient).map_err(|e| {
        ContractError::InvalidRecipient {
            reason: e.to_string(),
        }
    })?;
    if is_zero_identity(&recipient) {
        return Err(ContractError::InvalidRecipient {
            reason: "zero address".to_string(),
        });
    }

    let fee = relayer_fee(deps.storage, target_chain, &token)?;
    let normalized_amount = normalize_amount(amount, accepted.decimals);
    let normalized_fee = normalize_amount(fee, accepted.decimals);
    let normalized_to_native = normalize_amount(to_native_token_amount, accepted.decimals);

    let required = normalized_fee.checked_add(normalized_to_native)?;
    if normalized_amount <= required {
        return Err(ContractError::InsufficientAmount {
            amount: normalized_amount,
            required,
        });
    }

    let sendable = truncate_to_wire(amount, accepted.decimals)?;
    let dust = amount.checked_sub(sendable)?;

    let payload = TransferWithRelay {
        target_relayer_fee: normalized_fee,
        to_native_token_amount: normalized_to_native,
        target_recipient: recipient,
    };

    let hook = TokenBridgeReceiveMsg::InitiateTransferWithPayload {
        recipient_chain: target_chain,
        recipient: counterpart.to_vec().into(),
        payload: payload.encode(),
        nonce: batch_id,
    };

    let mut response = Response::new().add_message(WasmMsg::Execute {
        contract_addr: token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Send {
            contract: config.token_bridge.to_string(),
            amount: sendable,
            msg: to_json_binary(&hook)?,
        })?,
        funds: vec![],
    });

    if !dust.is_zero() {
        response = response.add_message(WasmMsg::Execute {
            contract_addr: token.to_string(),
            msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
                recipient: sender.clone(),
                amount: dust,
            })?,
            funds: vec![],
        });
    }

    Ok(response
        .add_attribute("action", "transfer_tokens_with_relay")
        .add_attribute("sender", sender)
        .add_attribute("token", token)
        .add_attribute("amount", sendable.to_string())
        .add_attribute("dust_refund", dust.to_string())
        .add_attribute("target_chain", target_chain.to_string())
        .add_attribute("target_recipient", bytes32_to_hex(&recipient))
        .add_attribute("relayer_fee", normalized_fee.to_string())
        .add_attribute("to_native_token_amount", normalized_to_native.to_string())
        .add_attribute("batch_id", batch_id.to_string()))
}
