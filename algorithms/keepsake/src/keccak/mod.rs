//! Keccak-256 (Ethereum convention) over bytes, bit arrays, and binary
//! strings.
//!
//! The bit-granular entry points exist because an accompanying
//! zero-knowledge circuit computes the same function at the bit level:
//! partial-byte messages must be addressable and hashable, which ordinary
//! crypto libraries do not offer.

pub mod constants;
pub mod permutation;
pub mod sponge;
pub mod state;

pub use constants::DIGEST_SIZE;
pub use sponge::{hash, hash_binary_string, hash_bits};

use crate::types::{CryptoError, Message};

/// Keccak-256 of a caller-tagged message ([`Message::Bytes`], hex text, or
/// plain text). The encoding is explicit; the engine never sniffs strings.
///
/// # Errors
/// Returns [`CryptoError::InvalidHexString`] when hex text cannot be
/// decoded.
pub fn hash_message(message: &Message<'_>) -> Result<[u8; DIGEST_SIZE], CryptoError> {
    Ok(hash(&message.to_bytes()?))
}
