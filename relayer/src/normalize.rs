//! Amount normalization between token decimals and wire precision.
//!
//! Cross-chain amount fields carry at most 8 decimals. Tokens with more
//! decimals lose their low-order digits on the way out; tokens with 8 or
//! fewer are passed through unchanged.

use cosmwasm_std::{OverflowError, Uint128};

/// Decimals of every amount field in a transfer message
pub const WIRE_DECIMALS: u8 = 8;

/// Scale `amount` from `decimals` down to wire precision (truncating).
pub fn normalize_amount(amount: Uint128, decimals: u8) -> Uint128 {
    if decimals <= WIRE_DECIMALS {
        return amount;
    }
    match Uint128::new(10).checked_pow((decimals - WIRE_DECIMALS) as u32) {
        Ok(divisor) => amount / divisor,
        // 10^39 and above exceed any u128 amount
        Err(_) => Uint128::zero(),
    }
}

/// Scale a wire-precision `amount` back up to `decimals`.
pub fn denormalize_amount(amount: Uint128, decimals: u8) -> Result<Uint128, OverflowError> {
    if decimals <= WIRE_DECIMALS || amount.is_zero() {
        return Ok(amount);
    }
    let multiplier = Uint128::new(10).checked_pow((decimals - WIRE_DECIMALS) as u32)?;
    amount.checked_mul(multiplier)
}

/// Drop the digits that do not survive normalization.
pub fn truncate_to_wire(amount: Uint128, decimals: u8) -> Result<Uint128, OverflowError> {
    denormalize_amount(normalize_amount(amount, decimals), decimals)
}
