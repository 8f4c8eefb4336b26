//! The JSON envelope the estate scripts produce and consume.
//!
//! `{ algorithm, iv, authTag, ciphertext, timestamp }` with base64 payload
//! fields. The core stays pure: the timestamp is caller-supplied and the
//! envelope is just data; serialization happens at the caller with
//! `serde_json` or any other serde format.

#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};
#[cfg(feature = "std")]
use std::{string::String, vec::Vec};

use serde::{Deserialize, Serialize};

use crate::convert;
use crate::gcm::{self, TAG_SIZE};
use crate::types::{Algorithm, CryptoError};

/// A sealed payload: everything the opener needs except the key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SealedEnvelope {
    /// AEAD algorithm the payload was sealed under.
    pub algorithm: Algorithm,
    /// Base64 IV, any length (12 bytes is the GCM fast path).
    pub iv: String,
    /// Base64 16-byte authentication tag.
    pub auth_tag: String,
    /// Base64 ciphertext.
    pub ciphertext: String,
    /// Seconds since the Unix epoch at sealing time, caller-supplied.
    pub timestamp: u64,
}

/// Seal `plaintext` into an envelope.
///
/// The key length must match the algorithm; `aad` is authenticated but not
/// stored (both sides must agree on it out of band).
///
/// # Errors
/// Returns [`CryptoError::InvalidKeySize`] when the key does not match the
/// algorithm's required length.
pub fn seal(
    plaintext: &[u8],
    key: &[u8],
    iv: &[u8],
    aad: &[u8],
    algorithm: Algorithm,
    timestamp: u64,
) -> Result<SealedEnvelope, CryptoError> {
    if key.len() != algorithm.key_len() {
        return Err(CryptoError::InvalidKeySize { len: key.len() });
    }
    let (ciphertext, tag) = gcm::encrypt(plaintext, key, iv, aad)?;
    Ok(SealedEnvelope {
        algorithm,
        iv: convert::encode_base64(iv),
        auth_tag: convert::encode_base64(&tag),
        ciphertext: convert::encode_base64(&ciphertext),
        timestamp,
    })
}

/// Verify and decrypt an envelope.
///
/// # Errors
/// Returns [`CryptoError::InvalidKeySize`] when the key does not match the
/// envelope's algorithm, [`CryptoError::InvalidBase64`] on malformed
/// payload fields, [`CryptoError::InvalidIvOrAuthTagSize`] when the
/// decoded tag is not 16 bytes, and [`CryptoError::AuthenticationFailure`]
/// when the payload has been tampered with.
pub fn open(envelope: &SealedEnvelope, key: &[u8], aad: &[u8]) -> Result<Vec<u8>, CryptoError> {
    if key.len() != envelope.algorithm.key_len() {
        return Err(CryptoError::InvalidKeySize { len: key.len() });
    }
    let iv = convert::decode_base64(&envelope.iv)?;
    let tag = convert::decode_base64(&envelope.auth_tag)?;
    if tag.len() != TAG_SIZE {
        return Err(CryptoError::InvalidIvOrAuthTagSize { len: tag.len() });
    }
    let ciphertext = convert::decode_base64(&envelope.ciphertext)?;
    gcm::decrypt(&ciphertext, key, &iv, &tag, aad)
}
