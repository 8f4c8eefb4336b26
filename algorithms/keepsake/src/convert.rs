//! Bit/byte conversion utilities.
//!
//! The common currency for every higher component: lossless conversions
//! between bit arrays, byte buffers, hex, base64, and UTF-8 text. Bit
//! arrays are `0`/`1` byte sequences packed LSB-first within each byte,
//! the addressing the zero-knowledge circuit uses.

#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};
#[cfg(feature = "std")]
use std::{string::String, vec::Vec};

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine as _;

use crate::types::CryptoError;

// =============================================================================
// BIT ARRAYS
// =============================================================================

/// Explode bytes into a bit array, LSB-first within each byte.
///
/// `bytes_to_bits(&[0x01])` yields `[1, 0, 0, 0, 0, 0, 0, 0]`.
#[must_use]
pub fn bytes_to_bits(bytes: &[u8]) -> Vec<u8> {
    let mut bits = Vec::with_capacity(bytes.len() * 8);
    for byte in bytes {
        for shift in 0..8 {
            bits.push((byte >> shift) & 1);
        }
    }
    bits
}

/// Pack a bit array back into bytes, LSB-first within each byte.
///
/// A trailing partial byte is zero-filled in its unset (high) positions, so
/// the round trip through [`bytes_to_bits`] is lossless only for bit counts
/// that are multiples of 8.
///
/// # Errors
/// Returns [`CryptoError::InvalidBitValue`] if any element is not 0 or 1.
pub fn bits_to_bytes(bits: &[u8]) -> Result<Vec<u8>, CryptoError> {
    ensure_bits(bits)?;
    let mut bytes = Vec::new();
    bytes.resize(bits.len().div_ceil(8), 0u8);
    for (i, &bit) in bits.iter().enumerate() {
        bytes[i / 8] |= bit << (i % 8);
    }
    Ok(bytes)
}

/// Validate that every element of a bit array is 0 or 1.
///
/// # Errors
/// Returns [`CryptoError::InvalidBitValue`] on the first offending element.
pub fn ensure_bits(bits: &[u8]) -> Result<(), CryptoError> {
    match bits.iter().find(|&&bit| bit > 1) {
        Some(&value) => Err(CryptoError::InvalidBitValue { value }),
        None => Ok(()),
    }
}

// =============================================================================
// BINARY STRINGS
// =============================================================================

/// Parse a `'0'`/`'1'` string into a bit array.
///
/// # Errors
/// Returns [`CryptoError::InvalidBinaryString`] on the first character
/// outside `[01]`.
pub fn bits_from_binary(text: &str) -> Result<Vec<u8>, CryptoError> {
    text.chars()
        .map(|c| match c {
            '0' => Ok(0),
            '1' => Ok(1),
            found => Err(CryptoError::InvalidBinaryString { found }),
        })
        .collect()
}

/// Render a bit array as a `'0'`/`'1'` string.
///
/// # Errors
/// Returns [`CryptoError::InvalidBitValue`] if any element is not 0 or 1.
pub fn bits_to_binary(bits: &[u8]) -> Result<String, CryptoError> {
    ensure_bits(bits)?;
    Ok(bits.iter().map(|&bit| if bit == 1 { '1' } else { '0' }).collect())
}

// =============================================================================
// TEXT ENCODINGS
// =============================================================================

/// Encode bytes as lowercase hex.
#[must_use]
pub fn encode_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}

/// Decode a hex string. A leading `0x` prefix is accepted, matching the
/// ABI-encoded inputs the signing paths hash.
///
/// # Errors
/// Returns [`CryptoError::InvalidHexString`] on malformed input.
pub fn decode_hex(text: &str) -> Result<Vec<u8>, CryptoError> {
    let stripped = text.strip_prefix("0x").unwrap_or(text);
    hex::decode(stripped).map_err(|_| CryptoError::InvalidHexString)
}

/// Encode bytes as standard-alphabet base64.
#[must_use]
pub fn encode_base64(bytes: &[u8]) -> String {
    BASE64.encode(bytes)
}

/// Decode standard-alphabet base64.
///
/// # Errors
/// Returns [`CryptoError::InvalidBase64`] on malformed input.
pub fn decode_base64(text: &str) -> Result<Vec<u8>, CryptoError> {
    BASE64.decode(text).map_err(|_| CryptoError::InvalidBase64)
}

/// Explode UTF-8 text into a bit array over its byte representation.
#[must_use]
pub fn str_to_bits(text: &str) -> Vec<u8> {
    bytes_to_bits(text.as_bytes())
}
