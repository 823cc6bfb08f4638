//! State definitions for the token bridge relayer contract.
//!
//! Every item lives under its own fixed namespace, so a code migration never
//! reinterprets existing bytes. Nothing here is keyed by code layout.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};
use cw_storage_plus::{Item, Map};

// ============================================================================
// Core Configuration
// ============================================================================

/// Contract configuration
#[cw_serde]
pub struct Config {
    /// This chain's identifier
    pub chain_id: u16,
    /// Token bridge that verifies transfers and holds custody
    pub token_bridge: Addr,
    /// Bank denom of the native gas token
    pub native_denom: String,
    /// Decimals of the native gas token
    pub native_decimals: u8,
    /// CW20 representation of the native gas token, if any
    pub wrapped_native_token: Option<Addr>,
    /// Bech32 prefix of local accounts
    pub address_prefix: String,
    /// Shared denominator of every token's swap rate
    pub swap_rate_precision: Uint128,
    /// Relayer fee precision. Informational: relayer fees are stored in
    /// token units and no fee arithmetic scales by it.
    pub relayer_fee_precision: Uint128,
    /// Whether outbound transfers and relayed redemptions are paused
    pub paused: bool,
    /// Whether wrapped native tokens are unwrapped on redemption. Reserved:
    /// redemptions always pay out the CW20 itself.
    pub unwrap_native: bool,
}

/// Ownership roles
#[cw_serde]
pub struct Ownership {
    pub owner: Addr,
    /// Set by a transfer request, cleared on confirmation or cancellation
    pub pending_owner: Option<Addr>,
    /// May update fees, swap rates and swap caps, but not governance
    pub owner_assistant: Addr,
}

/// Accepted token record
#[cw_serde]
pub struct AcceptedToken {
    /// CW20 decimals, cached at registration
    pub decimals: u8,
}

// ============================================================================
// Constants
// ============================================================================

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:token-bridge-relayer";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

// ============================================================================
// Storage
// ============================================================================

pub const CONFIG: Item<Config> = Item::new("config");

pub const OWNERSHIP: Item<Ownership> = Item::new("ownership");

/// Trusted relayer contract per remote chain
/// Key: chain id, Value: 32-byte identity
pub const REGISTERED_CONTRACTS: Map<u16, [u8; 32]> = Map::new("registered_contracts");

/// Accepted token membership
pub const ACCEPTED_TOKENS: Map<&Addr, AcceptedToken> = Map::new("accepted_tokens");

/// Accepted tokens in registration order (append-only)
pub const ACCEPTED_TOKEN_LIST: Item<Vec<Addr>> = Item::new("accepted_token_list");

/// Swap rate per token, scaled by `Config::swap_rate_precision`
pub const SWAP_RATES: Map<&Addr, Uint128> = Map::new("swap_rates");

/// Maximum native gas payout per redemption, per token
pub const MAX_NATIVE_SWAP_AMOUNTS: Map<&Addr, Uint128> = Map::new("max_native_swap_amounts");

/// Relayer fee in token units
/// Key: (target chain id, token)
pub const RELAYER_FEES: Map<(u16, &Addr), Uint128> = Map::new("relayer_fees");

/// Code ids that have been upgraded to
pub const INITIALIZED_IMPLEMENTATIONS: Map<u64, bool> = Map::new("initialized_implementations");

/// Code id of the latest upgrade
pub const IMPLEMENTATION: Item<u64> = Item::new("implementation");
