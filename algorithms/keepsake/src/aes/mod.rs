//! AES block cipher (FIPS-197), encryption direction only.
//!
//! Supports 128/192/256-bit keys. No block-decryption routine exists:
//! CTR and GCM are encryption-direction-only constructions, and nothing
//! else in the engine inverts a block.

pub mod block;
pub mod constants;
pub mod key_schedule;

pub use block::encrypt_block;
pub use key_schedule::RoundKeys;

/// AES block size in bytes.
pub const BLOCK_SIZE: usize = 16;
