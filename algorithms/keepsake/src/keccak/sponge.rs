//! Keccak-256 sponge: padding, absorb, squeeze.
//!
//! Padding is the bare Keccak `10*1` rule — the Ethereum `keccak256`
//! convention, NOT the NIST SHA3 `0x06` domain suffix. This matches the
//! on-chain hashes the signing paths must reproduce and is pinned by the
//! repository test vectors; do not "fix" it.

#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};
#[cfg(feature = "std")]
use std::{string::String, vec::Vec};

use crate::convert;
use crate::keccak::constants::{DIGEST_SIZE, LANE_COUNT, RATE_BITS, RATE_BYTES};
use crate::keccak::permutation::keccak_f;
use crate::types::CryptoError;

// =============================================================================
// BYTE-ORIENTED PATH
// =============================================================================

/// Keccak-256 of a byte message.
#[must_use]
pub fn hash(message: &[u8]) -> [u8; DIGEST_SIZE] {
    let padded = pad_bytes(message);
    let mut lanes = [0u64; LANE_COUNT];
    for block in padded.chunks_exact(RATE_BYTES) {
        absorb_block(&mut lanes, block);
    }
    squeeze(&lanes)
}

/// Bare `10*1` padding at byte granularity: `0x01` into the first free
/// byte, `0x80` into the last byte of the block. When one byte remains the
/// two coincide as `0x81`; a full extra block is never needed here because
/// a whole byte always has room for both boundary bits.
fn pad_bytes(message: &[u8]) -> Vec<u8> {
    let padded_len = (message.len() / RATE_BYTES + 1) * RATE_BYTES;
    let mut buf = Vec::with_capacity(padded_len);
    buf.extend_from_slice(message);
    buf.resize(padded_len, 0);
    buf[message.len()] ^= 0x01;
    buf[padded_len - 1] ^= 0x80;
    buf
}

/// XOR one 136-byte block into the first 17 lanes and permute.
fn absorb_block(lanes: &mut [u64; LANE_COUNT], block: &[u8]) {
    for (i, chunk) in block.chunks_exact(8).enumerate() {
        let mut lane = [0u8; 8];
        lane.copy_from_slice(chunk);
        lanes[i] ^= u64::from_le_bytes(lane);
    }
    keccak_f(lanes);
}

/// Emit the first 32 bytes of the state. Keccak-256 needs only one rate
/// block, so no further permutation is required.
fn squeeze(lanes: &[u64; LANE_COUNT]) -> [u8; DIGEST_SIZE] {
    let mut digest = [0u8; DIGEST_SIZE];
    for (i, chunk) in digest.chunks_exact_mut(8).enumerate() {
        chunk.copy_from_slice(&lanes[i].to_le_bytes());
    }
    digest
}

// =============================================================================
// BIT-GRANULAR PATH
// =============================================================================

/// Keccak-256 of a bit array (LSB-first within each byte), any length
/// including non-multiples of 8. Returns the 256 digest bits in the same
/// packing, so for byte-aligned input this equals
/// `convert::bytes_to_bits(hash(message))`.
///
/// # Errors
/// Returns [`CryptoError::InvalidBitValue`] if any element is not 0 or 1.
pub fn hash_bits(bits: &[u8]) -> Result<Vec<u8>, CryptoError> {
    convert::ensure_bits(bits)?;
    let padded = pad_bits(bits);
    let mut lanes = [0u64; LANE_COUNT];
    for block in padded.chunks_exact(RATE_BITS) {
        for (i, &bit) in block.iter().enumerate() {
            lanes[i / 64] ^= u64::from(bit) << (i % 64);
        }
        keccak_f(&mut lanes);
    }

    let mut digest = Vec::with_capacity(8 * DIGEST_SIZE);
    for b in 0..8 * DIGEST_SIZE {
        digest.push(((lanes[b / 64] >> (b % 64)) & 1) as u8);
    }
    Ok(digest)
}

/// Keccak-256 of a `'0'`/`'1'` string, returned as a 256-character binary
/// string. Agrees with [`hash_bits`] on the same bit sequence.
///
/// # Errors
/// Returns [`CryptoError::InvalidBinaryString`] on characters outside
/// `[01]`.
pub fn hash_binary_string(text: &str) -> Result<String, CryptoError> {
    let bits = convert::bits_from_binary(text)?;
    let digest = hash_bits(&bits)?;
    convert::bits_to_binary(&digest)
}

/// Bit-granular `10*1` padding: a `1`, then zeros, then a final `1`,
/// bringing the total to a rate multiple. When only one bit position
/// remains in the block, the zeros run through a full extra rate block so
/// both boundary `1` bits fit.
fn pad_bits(bits: &[u8]) -> Vec<u8> {
    let mut padded = Vec::with_capacity((bits.len() / RATE_BITS + 2) * RATE_BITS);
    padded.extend_from_slice(bits);
    padded.push(1);
    while padded.len() % RATE_BITS != RATE_BITS - 1 {
        padded.push(0);
    }
    padded.push(1);
    padded
}
