//! Common - Shared Types for the Token Bridge Relayer Contracts
//!
//! This package describes the interface of the token bridge that carries
//! relayed transfers: the custody contract that escrows tokens on the way out
//! and releases them once a verified transfer message is redeemed.

pub mod token_bridge;

pub use token_bridge::{
    TokenBridgeExecuteMsg, TokenBridgeQueryMsg, TokenBridgeReceiveMsg, TransferInfoResponse,
};
