//! Token Bridge Relayer Contract
//!
//! Relays CW20 transfers between chains on top of a token bridge. A user
//! sending tokens attaches a relayer fee and, optionally, an amount to swap
//! for native gas on the target chain. The counterpart relayer contract on
//! the target chain redeems the transfer, pays the relayer that submitted it,
//! and hands the rest to the recipient.
//!
//! # Outgoing Flow
//! 1. User sends a CW20 to this contract with `TransferTokensWithRelay`
//! 2. The contract normalizes amounts to 8 decimals and refunds the dust
//! 3. Tokens and a 97-byte relay payload go to the token bridge
//!
//! # Incoming Flow
//! 1. A relayer calls `CompleteTransferWithRelay` with the transfer message,
//!    attaching native gas for the recipient's swap
//! 2. The token bridge verifies the message and releases the tokens here
//! 3. The relayer receives its fee plus the swapped tokens, the recipient
//!    receives the rest plus native gas
//!
//! # Governance
//! - Two-step ownership transfer and an owner assistant for fee/rate updates
//! - Every governance message names the chain it targets
//! - Transfers can be paused; recipients can always redeem their own transfers
//! - Upgrades migrate the contract to a new code id, never reusing one

pub mod address_codec;
pub mod contract;
pub mod error;
mod execute;
pub mod msg;
pub mod normalize;
pub mod payload;
mod query;
pub mod state;
pub mod swap;

pub use crate::error::ContractError;
pub use crate::normalize::{denormalize_amount, normalize_amount};
pub use crate::payload::{keccak256, TransferWithRelay};
