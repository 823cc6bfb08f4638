//! Fee & Swap Engine
//!
//! Computes what a relayer earns for delivering a transfer and how much of
//! the transfer is converted into native gas for the recipient.
//!
//! ## Swap Rates
//!
//! A token's swap rate is the price of one whole token in whole native gas
//! units, scaled by the global swap rate precision:
//!
//! | Quantity            | Formula                                              |
//! |---------------------|------------------------------------------------------|
//! | Native amount out   | `to_native * rate * 10^nd / (precision * 10^td)`     |
//! | Max swap amount in  | `max_native * precision * 10^td / (rate * 10^nd)`    |
//!
//! where `td` is the token's decimals and `nd` the native token's decimals.

use cosmwasm_std::{Addr, StdError, StdResult, Storage, Uint128, Uint256};

use crate::error::ContractError;
use crate::normalize::normalize_amount;
use crate::state::{Config, MAX_NATIVE_SWAP_AMOUNTS, RELAYER_FEES, SWAP_RATES};

// ============================================================================
// Relayer Fees
// ============================================================================

/// Relayer fee for delivering `token` to `chain_id` (zero when unset).
pub fn relayer_fee(storage: &dyn Storage, chain_id: u16, token: &Addr) -> StdResult<Uint128> {
    Ok(RELAYER_FEES
        .may_load(storage, (chain_id, token))?
        .unwrap_or_default())
}

/// A nonzero fee must survive normalization, otherwise the relayer would be
/// paid nothing.
pub fn validate_relayer_fee(fee: Uint128, token_decimals: u8) -> Result<(), ContractError> {
    if !fee.is_zero() && normalize_amount(fee, token_decimals).is_zero() {
        return Err(ContractError::InvalidRelayerFee);
    }
    Ok(())
}

// ============================================================================
// Native Swaps
// ============================================================================

/// Everything needed to price a native swap for one token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SwapParams {
    pub swap_rate: Uint128,
    pub swap_rate_precision: Uint128,
    pub max_native_swap_amount: Uint128,
    pub token_decimals: u8,
    pub native_decimals: u8,
}

impl SwapParams {
    /// Load swap parameters for `token`.
    ///
    /// Returns `None` when the token cannot be swapped: it has no swap rate
    /// or it is the wrapped native token itself.
    pub fn load(
        storage: &dyn Storage,
        config: &Config,
        token: &Addr,
        token_decimals: u8,
    ) -> StdResult<Option<Self>> {
        if config.wrapped_native_token.as_ref() == Some(token) {
            return Ok(None);
        }
        let swap_rate = SWAP_RATES.may_load(storage, token)?.unwrap_or_default();
        if swap_rate.is_zero() {
            return Ok(None);
        }
        Ok(Some(Self {
            swap_rate,
            swap_rate_precision: config.swap_rate_precision,
            max_native_swap_amount: MAX_NATIVE_SWAP_AMOUNTS
                .may_load(storage, token)?
                .unwrap_or_default(),
            token_decimals,
            native_decimals: config.native_decimals,
        }))
    }

    /// Largest token amount that may be swapped, saturating at `Uint128::MAX`.
    pub fn max_swap_amount_in(&self) -> Result<Uint128, ContractError> {
        let numerator = Uint256::from(self.max_native_swap_amount)
            .checked_mul(Uint256::from(self.swap_rate_precision))?;

        let amount = if self.token_decimals >= self.native_decimals {
            numerator
                .checked_mul(pow10(self.token_decimals - self.native_decimals)?)?
                .checked_div(Uint256::from(self.swap_rate))?
        } else {
            let denominator = Uint256::from(self.swap_rate)
                .checked_mul(pow10(self.native_decimals - self.token_decimals)?)?;
            numerator.checked_div(denominator)?
        };

        Ok(Uint128::try_from(amount).unwrap_or(Uint128::MAX))
    }

    /// Native gas paid out for swapping `to_native_amount` tokens.
    pub fn native_amount_out(&self, to_native_amount: Uint128) -> Result<Uint128, ContractError> {
        let numerator =
            Uint256::from(to_native_amount).checked_mul(Uint256::from(self.swap_rate))?;

        let amount = if self.token_decimals >= self.native_decimals {
            let denominator = Uint256::from(self.swap_rate_precision)
                .checked_mul(pow10(self.token_decimals - self.native_decimals)?)?;
            numerator.checked_div(denominator)?
        } else {
            numerator
                .checked_mul(pow10(self.native_decimals - self.token_decimals)?)?
                .checked_div(Uint256::from(self.swap_rate_precision))?
        };

        Uint128::try_from(amount)
            .map_err(|_| StdError::generic_err("native swap amount exceeds 128 bits").into())
    }
}

/// How a redeemed transfer is split.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedemptionQuote {
    /// Tokens delivered to the recipient
    pub recipient_amount: Uint128,
    /// Tokens delivered to the relayer (fee plus swapped tokens)
    pub relayer_amount: Uint128,
    /// Tokens actually swapped after capping
    pub to_native_token_amount: Uint128,
    /// Native gas the relayer pays to the recipient
    pub native_amount_out: Uint128,
}

/// Split a redeemed `amount` between recipient and relayer.
///
/// All inputs are in local token units. The requested swap is capped by the
/// token's max swap amount and dropped entirely when it would pay out no
/// native gas.
pub fn quote_redemption(
    amount: Uint128,
    relayer_fee: Uint128,
    requested_to_native: Uint128,
    swap: Option<&SwapParams>,
) -> Result<RedemptionQuote, ContractError> {
    if relayer_fee.checked_add(requested_to_native)? > amount {
        return Err(ContractError::InvalidPayload {
            reason: "relayer fee and swap amount exceed transfer amount".to_string(),
        });
    }

    let (to_native_token_amount, native_amount_out) = match swap {
        Some(params) if !requested_to_native.is_zero() => {
            let capped = requested_to_native.min(params.max_swap_amount_in()?);
            let native_out = params.native_amount_out(capped)?;
            if native_out.is_zero() {
                (Uint128::zero(), Uint128::zero())
            } else {
                (capped, native_out)
            }
        }
        _ => (Uint128::zero(), Uint128::zero()),
    };

    let relayer_amount = relayer_fee + to_native_token_amount;
    Ok(RedemptionQuote {
        recipient_amount: amount - relayer_amount,
        relayer_amount,
        to_native_token_amount,
        native_amount_out,
    })
}

fn pow10(exp: u8) -> Result<Uint256, ContractError> {
    Ok(Uint256::from(10u128).checked_pow(exp as u32)?)
}
