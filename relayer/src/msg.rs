//! Message types for the token bridge relayer contract
//!
//! This module defines all messages for instantiation, execution, and queries.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128};

// ============================================================================
// Instantiate & Migrate
// ============================================================================

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message
///
/// The sender becomes the owner.
#[cw_serde]
pub struct InstantiateMsg {
    /// This chain's identifier (nonzero)
    pub chain_id: u16,
    /// Token bridge contract address
    pub token_bridge: String,
    /// Bank denom of the native gas token (e.g. "uluna")
    pub native_denom: String,
    /// Decimals of the native gas token
    pub native_decimals: u8,
    /// CW20 wrapping the native gas token, if any
    pub wrapped_native_token: Option<String>,
    /// Bech32 prefix of local accounts (e.g. "terra")
    pub address_prefix: String,
    /// Initial owner assistant
    pub owner_assistant: String,
    /// Swap rate precision (nonzero)
    pub swap_rate_precision: Uint128,
    /// Relayer fee precision (nonzero)
    pub relayer_fee_precision: Uint128,
    /// Whether wrapped native tokens are unwrapped on redemption
    pub unwrap_native: bool,
}

// ============================================================================
// Execute Messages
// ============================================================================

/// Execute messages
///
/// Every governance message carries the chain it is meant for and fails with
/// `WrongChain` when that is not this chain.
#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Transfers
    // ========================================================================
    /// Send CW20 tokens with relay (called via CW20 send)
    Receive(cw20::Cw20ReceiveMsg),

    /// Redeem a transfer on behalf of its recipient, earning the relayer fee.
    ///
    /// Authorization: Anyone. Native funds attached pay for the recipient's
    /// native swap; the excess is refunded. When called by the recipient the
    /// transfer is redeemed without fee or swap.
    CompleteTransferWithRelay { vaa: Binary },

    /// Redeem a transfer as its recipient: no fee, no swap, allowed while
    /// paused.
    RedeemOwnTransfer { vaa: Binary },

    // ========================================================================
    // Ownership
    // ========================================================================
    /// Nominate a new owner
    ///
    /// Authorization: Owner only
    SubmitOwnershipTransferRequest { chain_id: u16, new_owner: String },

    /// Accept ownership
    ///
    /// Authorization: Pending owner only
    ConfirmOwnershipTransferRequest {},

    /// Withdraw a pending ownership nomination
    ///
    /// Authorization: Owner only
    CancelOwnershipTransferRequest { chain_id: u16 },

    /// Replace the owner assistant
    ///
    /// Authorization: Owner only
    UpdateOwnerAssistant { chain_id: u16, new_assistant: String },

    /// Migrate the contract to a new code id
    ///
    /// Authorization: Owner only. The contract must be its own wasm admin.
    Upgrade { chain_id: u16, new_code_id: u64 },

    // ========================================================================
    // Registry
    // ========================================================================
    /// Register (or replace) the trusted relayer contract on another chain
    ///
    /// Authorization: Owner only
    RegisterContract {
        chain_id: u16,
        /// 32-byte contract identity
        contract_address: Binary,
    },

    /// Accept a CW20 token for relaying
    ///
    /// Authorization: Owner only
    RegisterToken { chain_id: u16, token: String },

    // ========================================================================
    // Fees & Swaps
    // ========================================================================
    /// Set the relayer fee (token units) for transfers of `token` to `chain_id`
    ///
    /// Authorization: Owner or assistant
    UpdateRelayerFee {
        chain_id: u16,
        token: String,
        fee: Uint128,
    },

    /// Authorization: Owner only
    UpdateRelayerFeePrecision { chain_id: u16, precision: Uint128 },

    /// Authorization: Owner or assistant
    UpdateNativeSwapRate {
        chain_id: u16,
        token: String,
        swap_rate: Uint128,
    },

    /// Authorization: Owner only
    UpdateNativeSwapRatePrecision { chain_id: u16, precision: Uint128 },

    /// Authorization: Owner or assistant
    UpdateMaxNativeSwapAmount {
        chain_id: u16,
        token: String,
        max_amount: Uint128,
    },

    // ========================================================================
    // Admin
    // ========================================================================
    /// Pause or resume outbound transfers and relayed redemptions
    ///
    /// Authorization: Owner only
    SetPauseForTransfers { chain_id: u16, paused: bool },

    /// Authorization: Owner only
    UpdateUnwrapNative { chain_id: u16, unwrap: bool },
}

/// CW20 receive hook message
#[cw_serde]
pub enum ReceiveMsg {
    /// Bridge the sent tokens to `target_recipient` on `target_chain`
    TransferTokensWithRelay {
        target_chain: u16,
        /// 32-byte recipient identity on the target chain
        target_recipient: Binary,
        /// Amount (token units) to swap for native gas on the target chain
        to_native_token_amount: Uint128,
        batch_id: u32,
    },
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(ConfigResponse)]
    Config {},

    #[returns(OwnershipResponse)]
    Ownership {},

    /// Registered contract for a chain (None if unregistered)
    #[returns(Option<RegisteredContractResponse>)]
    RegisteredContract { chain_id: u16 },

    /// Accepted tokens in registration order
    #[returns(AcceptedTokensResponse)]
    AcceptedTokens {},

    #[returns(IsAcceptedTokenResponse)]
    IsAcceptedToken { token: String },

    #[returns(RelayerFeeResponse)]
    RelayerFee { chain_id: u16, token: String },

    #[returns(SwapRateResponse)]
    NativeSwapRate { token: String },

    #[returns(MaxNativeSwapAmountResponse)]
    MaxNativeSwapAmount { token: String },

    /// Largest token amount a redemption may swap
    #[returns(SwapAmountResponse)]
    MaxSwapAmountIn { token: String },

    /// Native gas paid for swapping `to_native_amount` tokens (before capping)
    #[returns(SwapAmountResponse)]
    NativeSwapAmountOut {
        token: String,
        to_native_amount: Uint128,
    },

    /// Latest code id upgraded to, and whether a code id was already used
    #[returns(ImplementationResponse)]
    Implementation { code_id: Option<u64> },
}

// ============================================================================
// Response Types
// ============================================================================

#[cw_serde]
pub struct ConfigResponse {
    pub chain_id: u16,
    pub token_bridge: Addr,
    pub native_denom: String,
    pub native_decimals: u8,
    pub wrapped_native_token: Option<Addr>,
    pub address_prefix: String,
    pub swap_rate_precision: Uint128,
    pub relayer_fee_precision: Uint128,
    pub paused: bool,
    pub unwrap_native: bool,
}

#[cw_serde]
pub struct OwnershipResponse {
    pub owner: Addr,
    pub pending_owner: Option<Addr>,
    pub owner_assistant: Addr,
}

#[cw_serde]
pub struct RegisteredContractResponse {
    pub chain_id: u16,
    pub contract_address: Binary,
}

#[cw_serde]
pub struct AcceptedTokenResponse {
    pub token: Addr,
    pub decimals: u8,
}

#[cw_serde]
pub struct AcceptedTokensResponse {
    pub tokens: Vec<AcceptedTokenResponse>,
}

#[cw_serde]
pub struct IsAcceptedTokenResponse {
    pub accepted: bool,
}

#[cw_serde]
pub struct RelayerFeeResponse {
    pub fee: Uint128,
}

#[cw_serde]
pub struct SwapRateResponse {
    pub swap_rate: Uint128,
}

#[cw_serde]
pub struct MaxNativeSwapAmountResponse {
    pub max_amount: Uint128,
}

#[cw_serde]
pub struct SwapAmountResponse {
    pub amount: Uint128,
}

#[cw_serde]
pub struct ImplementationResponse {
    pub current: Option<u64>,
    pub initialized: Option<bool>,
}
