//! Inbound redemption handlers.
//!
//! A transfer sent by a counterpart relayer arrives at the token bridge
//! addressed to this contract. Redeeming it releases the tokens here, after
//! which they are split between the recipient and the relayer that submitted
//! the message. Everything happens in one atomic response: the bridge release
//! is the first message, the payouts follow it.

use cosmwasm_std::{
    to_json_binary, Addr, BankMsg, Binary, Coin, CosmosMsg, Deps, DepsMut, Env, MessageInfo,
    Response, Uint128, WasmMsg,
};
use cw20::Cw20ExecuteMsg;

use common::{TokenBridgeExecuteMsg, TokenBridgeQueryMsg, TransferInfoResponse};

use crate::address_codec::{identity_to_local_address, parse_identity};
use crate::error::ContractError;
use crate::execute::load_accepted_token;
use crate::normalize::denormalize_amount;
use crate::payload::{keccak256, TransferWithRelay};
use crate::state::{AcceptedToken, Config, CONFIG, REGISTERED_CONTRACTS};
use crate::swap::{quote_redemption, SwapParams};

/// A verified transfer with all amounts in local token units.
struct VerifiedTransfer {
    token: Addr,
    recipient: Addr,
    amount: Uint128,
    relayer_fee: Uint128,
    to_native_token_amount: Uint128,
    decimals: u8,
    sender_chain: u16,
}

// ============================================================================
// Entry Points
// ============================================================================

/// Redeem a transfer as a relayer.
///
/// When the caller is the transfer's own recipient this behaves exactly like
/// [`execute_redeem_own_transfer`].
pub fn execute_complete_transfer_with_relay(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    vaa: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let transfer = verify_transfer(deps.as_ref(), &env, &config, &vaa)?;

    if info.sender == transfer.recipient {
        return redeem_own(&config, info, vaa, transfer);
    }

    if config.paused {
        return Err(ContractError::Paused);
    }

    let provided = native_funds(&config, &info)?;

    let swap = SwapParams::load(deps.storage, &config, &transfer.token, transfer.decimals)?;
    let quote = quote_redemption(
        transfer.amount,
        transfer.relayer_fee,
        transfer.to_native_token_amount,
        swap.as_ref(),
    )?;

    if provided < quote.native_amount_out {
        return Err(ContractError::InsufficientNativeFunds {
            expected: quote.native_amount_out,
            got: provided,
        });
    }
    let refund = provided - quote.native_amount_out;

    let mut messages = vec![complete_transfer_msg(&config, &info.sender, &vaa)?];
    if !quote.recipient_amount.is_zero() {
        messages.push(cw20_transfer_msg(
            &transfer.token,
            &transfer.recipient,
            quote.recipient_amount,
        )?);
    }
    if !quote.relayer_amount.is_zero() {
        messages.push(cw20_transfer_msg(
            &transfer.token,
            &info.sender,
            quote.relayer_amount,
        )?);
    }
    if !quote.native_amount_out.is_zero() {
        messages.push(native_transfer_msg(
            &config,
            &transfer.recipient,
            quote.native_amount_out,
        ));
    }
    if !refund.is_zero() {
        messages.push(native_transfer_msg(&config, &info.sender, refund));
    }

    Ok(Response::new()
        .add_messages(messages)
        .add_attribute("action", "complete_transfer_with_relay")
        .add_attribute("vaa_hash", hex::encode(keccak256(&vaa)))
        .add_attribute("relayer", info.sender)
        .add_attribute("recipient", transfer.recipient)
        .add_attribute("token", transfer.token)
        .add_attribute("sender_chain", transfer.sender_chain.to_string())
        .add_attribute("amount", transfer.amount.to_string())
        .add_attribute("recipient_amount", quote.recipient_amount.to_string())
        .add_attribute("relayer_fee", transfer.relayer_fee.to_string())
        .add_attribute(
            "to_native_token_amount",
            quote.to_native_token_amount.to_string(),
        )
        .add_attribute("native_amount_out", quote.native_amount_out.to_string())
        .add_attribute("native_refund", refund.to_string()))
}

/// Redeem a transfer as its recipient: no fee, no swap, allowed while paused.
pub fn execute_redeem_own_transfer(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    vaa: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let transfer = verify_transfer(deps.as_ref(), &env, &config, &vaa)?;

    if info.sender != transfer.recipient {
        return Err(ContractError::InvalidRecipient {
            reason: "caller is not the transfer recipient".to_string(),
        });
    }

    redeem_own(&config, info, vaa, transfer)
}

fn redeem_own(
    config: &Config,
    info: MessageInfo,
    vaa: Binary,
    transfer: VerifiedTransfer,
) -> Result<Response, ContractError> {
    if !info.funds.is_empty() {
        return Err(ContractError::InvalidFunds {
            reason: "self redemption does not accept funds".to_string(),
        });
    }

    let mut messages = vec![complete_transfer_msg(config, &info.sender, &vaa)?];
    if !transfer.amount.is_zero() {
        messages.push(cw20_transfer_msg(
            &transfer.token,
            &transfer.recipient,
            transfer.amount,
        )?);
    }

    Ok(Response::new()
        .add_messages(messages)
        .add_attribute("action", "redeem_own_transfer")
        .add_attribute("vaa_hash", hex::encode(keccak256(&vaa)))
        .add_attribute("recipient", transfer.recipient)
        .add_attribute("token", transfer.token)
        .add_attribute("sender_chain", transfer.sender_chain.to_string())
        .add_attribute("amount", transfer.amount.to_string()))
}

// ============================================================================
// Verification
// ============================================================================

/// Ask the token bridge to verify `vaa`, then check that it was sent by a
/// registered counterpart to this contract and carries a valid payload.
fn verify_transfer(
    deps: Deps,
    env: &Env,
    config: &Config,
    vaa: &Binary,
) -> Result<VerifiedTransfer, ContractError> {
    let info: TransferInfoResponse = deps.querier.query_wasm_smart(
        &config.token_bridge,
        &TokenBridgeQueryMsg::TransferInfo { vaa: vaa.clone() },
    )?;

    if info.recipient != env.contract.address.as_str() {
        return Err(ContractError::InvalidTransferRecipient);
    }
    if info.recipient_chain != config.chain_id {
        return Err(ContractError::WrongChain {
            expected: config.chain_id,
            got: info.recipient_chain,
        });
    }

    let unregistered = ContractError::UnregisteredSender {
        chain_id: info.sender_chain,
    };
    let registered = REGISTERED_CONTRACTS.may_load(deps.storage, info.sender_chain)?;
    match (registered, parse_identity(&info.sender)) {
        (Some(expected), Ok(sender)) if expected == sender => {}
        _ => return Err(unregistered),
    }

    let payload = TransferWithRelay::decode(info.payload.as_slice())?;
    let (token, AcceptedToken { decimals }) = load_accepted_token(deps, &info.token_address)?;

    let recipient = identity_to_local_address(&payload.target_recipient, &config.address_prefix)
        .and_then(|addr| deps.api.addr_validate(&addr))
        .map_err(|e| ContractError::InvalidRecipient {
            reason: e.to_string(),
        })?;

    Ok(VerifiedTransfer {
        token,
        recipient,
        amount: denormalize_amount(info.amount, decimals)?,
        relayer_fee: denormalize_amount(payload.target_relayer_fee, decimals)?,
        to_native_token_amount: denormalize_amount(payload.to_native_token_amount, decimals)?,
        decimals,
        sender_chain: info.sender_chain,
    })
}

/// Native gas attached by the relayer. Only `native_denom` is accepted.
fn native_funds(config: &Config, info: &MessageInfo) -> Result<Uint128, ContractError> {
    match info.funds.as_slice() {
        [] => Ok(Uint128::zero()),
        [coin] if coin.denom == config.native_denom => Ok(coin.amount),
        _ => Err(ContractError::InvalidFunds {
            reason: format!("only {} is accepted", config.native_denom),
        }),
    }
}

// ============================================================================
// Messages
// ============================================================================

fn complete_transfer_msg(
    config: &Config,
    relayer: &Addr,
    vaa: &Binary,
) -> Result<CosmosMsg, ContractError> {
    Ok(WasmMsg::Execute {
        contract_addr: config.token_bridge.to_string(),
        msg: to_json_binary(&TokenBridgeExecuteMsg::CompleteTransferWithPayload {
            data: vaa.clone(),
            relayer: relayer.to_string(),
        })?,
        funds: vec![],
    }
    .into())
}

fn cw20_transfer_msg(
    token: &Addr,
    recipient: &Addr,
    amount: Uint128,
) -> Result<CosmosMsg, ContractError> {
    Ok(WasmMsg::Execute {
        contract_addr: token.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
            recipient: recipient.to_string(),
            amount,
        })?,
        funds: vec![],
    }
    .into())
}

fn native_transfer_msg(config: &Config, recipient: &Addr, amount: Uint128) -> CosmosMsg {
    BankMsg::Send {
        to_address: recipient.to_string(),
        amount: vec![Coin {
            denom: config.native_denom.clone(),
            amount,
        }],
    }
    .into()
}
