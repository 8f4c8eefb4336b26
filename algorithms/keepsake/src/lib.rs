#![cfg_attr(not(feature = "std"), no_std)]

//! # Keepsake
//!
//! From-scratch cryptographic primitive engine for sealing digital-estate
//! payloads: a multi-variant AES block cipher with CTR and GCM modes
//! (including NIST SP 800-38D arbitrary-length-IV handling) and a full
//! Keccak-256 sponge supporting byte-aligned and bit-granular messages.
//!
//! The engine exists to mirror a zero-knowledge circuit that computes the
//! same functions at the bit level, so every component is bit-exact against
//! the standards and exposes the partial-byte entry points ordinary crypto
//! libraries omit.

//! # Usage
//! ```rust
//! use keepsake::{open, seal, Algorithm};
//!
//! // 1. Seal a payload into the JSON envelope the estate scripts exchange.
//! let key = [0x2b_u8; 32];
//! let iv = [0x07_u8; 12];
//! let envelope = seal(b"the deed", &key, &iv, b"", Algorithm::Aes256Gcm, 0)?;
//!
//! // 2. Open it again; tampering fails closed.
//! let plaintext = open(&envelope, &key, b"")?;
//! assert_eq!(plaintext, b"the deed");
//!
//! // 3. Ethereum-convention Keccak-256 (no SHA3 domain suffix).
//! let digest = keepsake::keccak::hash(b"Hello World");
//! assert_eq!(digest.len(), 32);
//! # Ok::<(), keepsake::CryptoError>(())
//! ```

// =============================================================================
// MODULES
// =============================================================================

#[cfg(not(feature = "std"))]
extern crate alloc;

pub mod aes;
pub mod convert;
pub mod envelope;
pub mod gcm;
pub mod keccak;
pub mod types;

// =============================================================================
// EXPORTS
// =============================================================================

pub use envelope::{open, seal, SealedEnvelope};
pub use types::{Algorithm, CryptoError, Message};
