//! Error types for the token bridge relayer contract.

use cosmwasm_std::{DivideByZeroError, OverflowError, StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Overflow(#[from] OverflowError),

    #[error("{0}")]
    DivideByZero(#[from] DivideByZeroError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized: only owner can perform this action")]
    OwnerOnly,

    #[error("Unauthorized: only owner or owner assistant can perform this action")]
    OwnerOrAssistantOnly,

    #[error("Unauthorized: caller is not the pending owner")]
    NotPendingOwner,

    // ========================================================================
    // Routing & Identity Errors
    // ========================================================================

    #[error("Wrong chain: expected {expected}, got {got}")]
    WrongChain { expected: u16, got: u16 },

    #[error("Invalid chain ID: {chain_id}")]
    InvalidChainId { chain_id: u16 },

    #[error("Invalid contract address: {reason}")]
    InvalidContractAddress { reason: String },

    #[error("Contract not registered for chain {chain_id}")]
    ContractNotRegistered { chain_id: u16 },

    #[error("Unregistered sender from chain {chain_id}")]
    UnregisteredSender { chain_id: u16 },

    #[error("Invalid address: {reason}")]
    InvalidAddress { reason: String },

    #[error("Invalid recipient: {reason}")]
    InvalidRecipient { reason: String },

    #[error("Transfer is not addressed to this contract")]
    InvalidTransferRecipient,

    // ========================================================================
    // Token Errors
    // ========================================================================

    #[error("Invalid token: zero address")]
    InvalidToken,

    #[error("Token already registered: {token}")]
    TokenAlreadyRegistered { token: String },

    #[error("Token not accepted: {token}")]
    TokenNotAccepted { token: String },

    #[error("Swaps are not allowed for the native token")]
    SwapsNotAllowedForNativeToken,

    // ========================================================================
    // Numeric & Config Errors
    // ========================================================================

    #[error("Invalid relayer fee: normalizes to zero")]
    InvalidRelayerFee,

    #[error("Swap rate must be nonzero")]
    SwapRateMustBeNonzero,

    #[error("Precision must be positive")]
    PrecisionMustBePositive,

    #[error("Invalid implementation: code id {code_id}")]
    InvalidImplementation { code_id: u64 },

    #[error("Cannot migrate from {contract} to {expected}")]
    InvalidMigration { contract: String, expected: String },

    // ========================================================================
    // Transfer Errors
    // ========================================================================

    #[error("Transfers are paused")]
    Paused,

    #[error("Insufficient amount: {amount} must be greater than relayer fee plus swap amount {required}")]
    InsufficientAmount { amount: Uint128, required: Uint128 },

    #[error("Insufficient native funds: expected {expected}, got {got}")]
    InsufficientNativeFunds { expected: Uint128, got: Uint128 },

    #[error("Invalid funds: {reason}")]
    InvalidFunds { reason: String },

    #[error("Invalid payload: {reason}")]
    InvalidPayload { reason: String },
}
