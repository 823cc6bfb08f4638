//! 32-byte cross-chain identities.
//!
//! Counterpart contracts and transfer recipients travel as 32-byte
//! identities. A 20-byte local account is encoded like an EVM address: its
//! raw bech32 bytes right-aligned, the first 12 bytes zero. 32-byte accounts
//! (contracts) fill the identity as-is.
//!
//! ```text
//! | zero padding (12 bytes) | raw account (20 bytes) |
//! |           raw account (32 bytes)                 |
//! ```

use cosmwasm_std::{Binary, StdError, StdResult};

/// Length of every cross-chain identity
pub const IDENTITY_LENGTH: usize = 32;

const PADDING_LENGTH: usize = 12;

/// Parse a 32-byte identity from binary input.
pub fn parse_identity(bytes: &Binary) -> StdResult<[u8; 32]> {
    bytes.to_vec().try_into().map_err(|_| {
        StdError::generic_err(format!(
            "Invalid identity length: expected {} bytes, got {}",
            IDENTITY_LENGTH,
            bytes.len()
        ))
    })
}

/// Whether an identity is all zeros.
pub fn is_zero_identity(identity: &[u8; 32]) -> bool {
    identity.iter().all(|b| *b == 0)
}

/// Decode a local account from its 32-byte identity.
///
/// Padded identities carry a 20-byte account; anything else is a 32-byte
/// account (e.g. a contract) and is encoded whole.
pub fn identity_to_local_address(identity: &[u8; 32], hrp: &str) -> StdResult<String> {
    if identity[..PADDING_LENGTH].iter().all(|b| *b == 0) {
        encode_bech32(&identity[PADDING_LENGTH..], hrp)
    } else {
        encode_bech32(identity, hrp)
    }
}

/// Encode a local bech32 account (20 or 32 bytes) as a 32-byte identity.
pub fn local_address_to_identity(addr: &str) -> StdResult<[u8; 32]> {
    let raw = decode_bech32(addr)?;
    let mut identity = [0u8; 32];
    match raw.len() {
        20 => identity[PADDING_LENGTH..].copy_from_slice(&raw),
        IDENTITY_LENGTH => identity.copy_from_slice(&raw),
        len => {
            return Err(StdError::generic_err(format!(
                "Invalid address length: expected 20 or 32 bytes, got {}",
                len
            )))
        }
    }
    Ok(identity)
}

/// Convert a 32-byte identity to a hex string (for attributes)
pub fn bytes32_to_hex(bytes: &[u8; 32]) -> String {
    format!("0x{}", hex::encode(bytes))
}

// ============================================================================
// Bech32
// ============================================================================

/// Decode a bech32 account address to its raw 20 bytes
pub fn decode_bech32_address(addr: &str) -> StdResult<[u8; 20]> {
    let bytes = decode_bech32(addr)?;
    bytes.try_into().map_err(|bytes: Vec<u8>| {
        StdError::generic_err(format!(
            "Invalid address length: expected 20 bytes, got {}",
            bytes.len()
        ))
    })
}

/// Encode raw 20 bytes to a bech32 address with given prefix
pub fn encode_bech32_address(bytes: &[u8; 20], hrp: &str) -> StdResult<String> {
    encode_bech32(bytes, hrp)
}

/// Decode any bech32 string to its raw bytes, verifying the checksum
fn decode_bech32(addr: &str) -> StdResult<Vec<u8>> {
    // Format: hrp + "1" + base32_data + checksum
    let (hrp, data_part) = addr
        .rsplit_once('1')
        .ok_or_else(|| StdError::generic_err("Invalid bech32 format"))?;

    if hrp.is_empty() {
        return Err(StdError::generic_err("Missing bech32 prefix"));
    }
    if data_part.len() < 7 {
        return Err(StdError::generic_err("Bech32 data too short"));
    }

    let decoded = decode_bech32_data(data_part)?;
    let (payload, checksum) = decoded.split_at(decoded.len() - 6);
    if compute_bech32_checksum(hrp, payload) != checksum {
        return Err(StdError::generic_err("Invalid bech32 checksum"));
    }

    convert_bits(payload, 5, 8, false)
}

fn encode_bech32(bytes: &[u8], hrp: &str) -> StdResult<String> {
    if hrp.is_empty() {
        return Err(StdError::generic_err("Missing bech32 prefix"));
    }
    let data5 = convert_bits(bytes, 8, 5, true)?;
    let checksum = compute_bech32_checksum(hrp, &data5);

    Ok(format!(
        "{}1{}{}",
        hrp,
        encode_bech32_data(&data5),
        encode_bech32_data(&checksum)
    ))
}

/// Convert bits between different group sizes
fn convert_bits(data: &[u8], from_bits: u32, to_bits: u32, pad: bool) -> StdResult<Vec<u8>> {
    let mut acc: u32 = 0;
    let mut bits: u32 = 0;
    let mut result = Vec::new();
    let max_v = (1u32 << to_bits) - 1;

    for &value in data {
        acc = (acc << from_bits) | value as u32;
        bits += from_bits;

        while bits >= to_bits {
            bits -= to_bits;
            result.push(((acc >> bits) & max_v) as u8);
        }
    }

    if pad && bits > 0 {
        result.push(((acc << (to_bits - bits)) & max_v) as u8);
    } else if !pad && (bits >= from_bits || ((acc << (to_bits - bits)) & max_v) != 0) {
        return Err(StdError::generic_err("Invalid padding"));
    }

    Ok(result)
}

const BECH32_CHARSET: &[u8] = b"qpzry9x8gf2tvdw0s3jn54khce6mua7l";

fn decode_bech32_data(data: &str) -> StdResult<Vec<u8>> {
    data.chars()
        .map(|c| {
            BECH32_CHARSET
                .iter()
                .position(|&x| x as char == c)
                .map(|idx| idx as u8)
                .ok_or_else(|| StdError::generic_err(format!("Invalid bech32 character: {}", c)))
        })
        .collect()
}

fn encode_bech32_data(data: &[u8]) -> String {
    data.iter()
        .map(|&b| BECH32_CHARSET[b as usize] as char)
        .collect()
}

fn compute_bech32_checksum(hrp: &str, data: &[u8]) -> Vec<u8> {
    let mut values = expand_hrp(hrp);
    values.extend_from_slice(data);
    values.extend_from_slice(&[0, 0, 0, 0, 0, 0]);

    let polymod = bech32_polymod(&values) ^ 1;

    (0..6)
        .map(|i| ((polymod >> (5 * (5 - i))) & 31) as u8)
        .collect()
}

fn expand_hrp(hrp: &str) -> Vec<u8> {
    let mut result = Vec::with_capacity(hrp.len() * 2 + 1);
    result.extend(hrp.bytes().map(|c| c >> 5));
    result.push(0);
    result.extend(hrp.bytes().map(|c| c & 31));
    result
}

fn bech32_polymod(values: &[u8]) -> u32 {
    const GENERATOR: [u32; 5] = [
        0x3b6a_57b2,
        0x2650_8e6d,
        0x1ea1_19fa,
        0x3d42_33dd,
        0x2a14_62b3,
    ];

    let mut chk: u32 = 1;
    for &v in values {
        let top = chk >> 25;
        chk = ((chk & 0x01ff_ffff) << 5) ^ (v as u32);
        for (i, gen) in GENERATOR.iter().enumerate() {
            if (top >> i) & 1 == 1 {
                chk ^= gen;
            }
        }
    }
    chk
}
