//! Transfer-with-relay payload codec.
//!
//! Attached to every outbound token transfer and decoded again on the target
//! chain. Amount fields use wire precision (8 decimals).
//!
//! # Byte Layout (97 bytes total)
//! - Byte 0:       payload id (1)
//! - Bytes 1-32:   target relayer fee (uint256, big-endian)
//! - Bytes 33-64:  to native token amount (uint256, big-endian)
//! - Bytes 65-96:  target recipient (32 bytes)

use cosmwasm_std::{Binary, Uint128};
use tiny_keccak::{Hasher, Keccak};

use crate::error::ContractError;

pub const TRANSFER_WITH_RELAY_PAYLOAD_ID: u8 = 1;

pub const TRANSFER_WITH_RELAY_LENGTH: usize = 97;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferWithRelay {
    /// Relayer fee in wire precision
    pub target_relayer_fee: Uint128,
    /// Amount to swap for native gas, in wire precision
    pub to_native_token_amount: Uint128,
    /// Recipient identity on the target chain
    pub target_recipient: [u8; 32],
}

impl TransferWithRelay {
    pub fn encode(&self) -> Binary {
        let mut data = [0u8; TRANSFER_WITH_RELAY_LENGTH];
        data[0] = TRANSFER_WITH_RELAY_PAYLOAD_ID;

        // uint256 words: u128 goes into the low 16 bytes
        data[1 + 16..33].copy_from_slice(&self.target_relayer_fee.u128().to_be_bytes());
        data[33 + 16..65].copy_from_slice(&self.to_native_token_amount.u128().to_be_bytes());
        data[65..97].copy_from_slice(&self.target_recipient);

        Binary::from(data.to_vec())
    }

    pub fn decode(payload: &[u8]) -> Result<Self, ContractError> {
        if payload.len() != TRANSFER_WITH_RELAY_LENGTH {
            return Err(ContractError::InvalidPayload {
                reason: format!(
                    "expected {} bytes, got {}",
                    TRANSFER_WITH_RELAY_LENGTH,
                    payload.len()
                ),
            });
        }
        if payload[0] != TRANSFER_WITH_RELAY_PAYLOAD_ID {
            return Err(ContractError::InvalidPayload {
                reason: format!("unknown payload id {}", payload[0]),
            });
        }

        let mut target_recipient = [0u8; 32];
        target_recipient.copy_from_slice(&payload[65..97]);

        Ok(Self {
            target_relayer_fee: read_u256_word(&payload[1..33])?,
            to_native_token_amount: read_u256_word(&payload[33..65])?,
            target_recipient,
        })
    }
}

/// Compute keccak256 hash of arbitrary data
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// Read a big-endian uint256 word that must fit in a u128.
fn read_u256_word(word: &[u8]) -> Result<Uint128, ContractError> {
    if word[..16].iter().any(|b| *b != 0) {
        return Err(ContractError::InvalidPayload {
            reason: "amount exceeds 128 bits".to_string(),
        });
    }
    let mut low = [0u8; 16];
    low.copy_from_slice(&word[16..32]);
    Ok(Uint128::new(u128::from_be_bytes(low)))
}
