//! Token bridge interface.
//!
//! The token bridge verifies cross-chain messages, protects against replay and
//! holds custody of bridged tokens. The relayer contract only ever talks to it
//! through the messages below.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Binary, Uint128};

/// Execute messages accepted by the token bridge.
#[cw_serde]
pub enum TokenBridgeExecuteMsg {
    /// CW20 receive hook. The inner message is a [`TokenBridgeReceiveMsg`].
    Receive(cw20::Cw20ReceiveMsg),

    /// Redeem a verified transfer-with-payload message.
    ///
    /// Only the transfer's recipient may redeem. The bridge releases the
    /// denormalized amount of the local token to the caller.
    CompleteTransferWithPayload {
        /// Signed transfer message
        data: Binary,
        /// Address that submitted the message (informational)
        relayer: String,
    },
}

/// CW20 hook messages accepted by the token bridge.
#[cw_serde]
pub enum TokenBridgeReceiveMsg {
    /// Lock the sent tokens and publish a transfer message with an attached
    /// payload addressed to `recipient` on `recipient_chain`.
    InitiateTransferWithPayload {
        recipient_chain: u16,
        /// 32-byte recipient identity on the target chain
        recipient: Binary,
        payload: Binary,
        nonce: u32,
    },
}

/// Query messages answered by the token bridge.
#[cw_serde]
#[derive(QueryResponses)]
pub enum TokenBridgeQueryMsg {
    /// Verify a transfer message and return its decoded contents.
    #[returns(TransferInfoResponse)]
    TransferInfo { vaa: Binary },
}

/// Decoded transfer-with-payload message.
#[cw_serde]
pub struct TransferInfoResponse {
    /// Transferred amount in wire precision (8 decimals)
    pub amount: Uint128,
    /// Local token contract address
    pub token_address: String,
    /// Chain the transfer was sent from
    pub sender_chain: u16,
    /// 32-byte identity of the contract that sent the transfer
    pub sender: Binary,
    /// Chain the transfer is addressed to
    pub recipient_chain: u16,
    /// Local address allowed to redeem the transfer
    pub recipient: String,
    /// Application payload
    pub payload: Binary,
}
