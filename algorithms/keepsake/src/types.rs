//! Shared types used across the Keepsake library.

use core::fmt;
#[cfg(feature = "std")]
use std::error;

#[cfg(not(feature = "std"))]
use alloc::{
    string::{String, ToString},
    vec::Vec,
};
#[cfg(feature = "std")]
use std::{
    string::{String, ToString},
    vec::Vec,
};

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Failures surfaced by the primitive engine.
///
/// Every failure is local, pure, and immediate: no retries, no partial
/// results, no fallback. Error text never contains key material, plaintext,
/// or tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CryptoError {
    /// AES key length is not 16, 24, or 32 bytes.
    InvalidKeySize {
        /// Length of the rejected key, in bytes.
        len: usize,
    },
    /// A fixed-size 16-byte block was required and the input is not one.
    InvalidBlockSize {
        /// Length of the rejected block, in bytes.
        len: usize,
    },
    /// Authentication tag is not exactly 16 bytes, or an IV field was
    /// malformed at the envelope boundary.
    InvalidIvOrAuthTagSize {
        /// Length of the rejected IV or tag, in bytes.
        len: usize,
    },
    /// Recomputed GCM tag does not match the supplied tag. No plaintext is
    /// released on this path.
    AuthenticationFailure,
    /// Bit-level hashing received an element other than 0 or 1.
    InvalidBitValue {
        /// The offending value.
        value: u8,
    },
    /// Binary-string hashing received a character outside `[01]`.
    InvalidBinaryString {
        /// The offending character.
        found: char,
    },
    /// Hex input could not be decoded.
    InvalidHexString,
    /// Base64 input could not be decoded.
    InvalidBase64,
    /// The requested cipher or mode is not implemented by this engine.
    UnsupportedAlgorithm {
        /// The requested algorithm name.
        name: String,
    },
}

impl fmt::Display for CryptoError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidKeySize { len } => {
                write!(f, "invalid key size: {len} bytes (expected 16, 24, or 32)")
            }
            Self::InvalidBlockSize { len } => {
                write!(f, "invalid block size: {len} bytes (expected exactly 16)")
            }
            Self::InvalidIvOrAuthTagSize { len } => {
                write!(f, "invalid IV or auth tag size: {len} bytes")
            }
            Self::AuthenticationFailure => {
                write!(f, "authentication tag mismatch: data is corrupted or tampered")
            }
            Self::InvalidBitValue { value } => {
                write!(f, "bit arrays may only contain 0 or 1, got {value}")
            }
            Self::InvalidBinaryString { found } => {
                write!(f, "binary strings may only contain '0' or '1', got {found:?}")
            }
            Self::InvalidHexString => write!(f, "malformed hex string"),
            Self::InvalidBase64 => write!(f, "malformed base64 string"),
            Self::UnsupportedAlgorithm { name } => {
                write!(f, "unsupported algorithm '{name}'")
            }
        }
    }
}

#[cfg(feature = "std")]
impl error::Error for CryptoError {}

// =============================================================================
// ALGORITHM SELECTION
// =============================================================================

/// The closed set of AEAD algorithms this engine implements.
///
/// Wire names (`"aes-256-gcm"`, ...) are resolved to a variant once at the
/// boundary; the core never dispatches on strings. Names outside the set,
/// including `"chacha20-poly1305"` which callers delegate to a standard
/// library, fail with [`CryptoError::UnsupportedAlgorithm`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// AES-GCM with a 128-bit key (10 rounds).
    Aes128Gcm,
    /// AES-GCM with a 192-bit key (12 rounds).
    Aes192Gcm,
    /// AES-GCM with a 256-bit key (14 rounds).
    Aes256Gcm,
}

impl Algorithm {
    /// Resolve a wire name to an algorithm.
    ///
    /// # Errors
    /// Returns [`CryptoError::UnsupportedAlgorithm`] for any name outside
    /// the implemented set.
    pub fn from_name(name: &str) -> Result<Self, CryptoError> {
        match name {
            "aes-128-gcm" => Ok(Self::Aes128Gcm),
            "aes-192-gcm" => Ok(Self::Aes192Gcm),
            "aes-256-gcm" => Ok(Self::Aes256Gcm),
            other => Err(CryptoError::UnsupportedAlgorithm {
                name: other.to_string(),
            }),
        }
    }

    /// The wire name of this algorithm.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Aes128Gcm => "aes-128-gcm",
            Self::Aes192Gcm => "aes-192-gcm",
            Self::Aes256Gcm => "aes-256-gcm",
        }
    }

    /// Required key length in bytes.
    #[must_use]
    pub const fn key_len(self) -> usize {
        match self {
            Self::Aes128Gcm => 16,
            Self::Aes192Gcm => 24,
            Self::Aes256Gcm => 32,
        }
    }
}

impl Serialize for Algorithm {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

struct AlgorithmVisitor;

impl Visitor<'_> for AlgorithmVisitor {
    type Value = Algorithm;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("an algorithm name such as \"aes-256-gcm\"")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Algorithm, E> {
        Algorithm::from_name(value).map_err(|_| E::invalid_value(de::Unexpected::Str(value), &self))
    }
}

impl<'de> Deserialize<'de> for Algorithm {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_str(AlgorithmVisitor)
    }
}

// =============================================================================
// TAGGED MESSAGE INPUT
// =============================================================================

/// Explicit, caller-resolved message encoding for the hashing entry points.
///
/// Replaces runtime string sniffing: a hex string and plain text that
/// happens to start with `0x` are distinguished by the caller, never by
/// the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message<'a> {
    /// Raw bytes, hashed as-is.
    Bytes(&'a [u8]),
    /// Hex text (an optional `0x` prefix is accepted), decoded before hashing.
    HexText(&'a str),
    /// Plain UTF-8 text, hashed over its byte representation.
    PlainText(&'a str),
}

impl Message<'_> {
    /// Resolve the message to the bytes that will be hashed.
    ///
    /// # Errors
    /// Returns [`CryptoError::InvalidHexString`] when a [`Message::HexText`]
    /// payload cannot be decoded.
    pub fn to_bytes(&self) -> Result<Vec<u8>, CryptoError> {
        match self {
            Self::Bytes(bytes) => Ok(bytes.to_vec()),
            Self::HexText(text) => crate::convert::decode_hex(text),
            Self::PlainText(text) => Ok(text.as_bytes().to_vec()),
        }
    }
}
