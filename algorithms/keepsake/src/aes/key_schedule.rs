//! Rijndael key expansion.

use crate::aes::constants::{RCON, SBOX};
use crate::aes::BLOCK_SIZE;
use crate::types::CryptoError;

/// Maximum number of round keys (AES-256: 14 rounds + 1).
const MAX_ROUND_KEYS: usize = 15;

/// Maximum number of expanded 4-byte words (AES-256: 4 * 15).
const MAX_WORDS: usize = 60;

/// The expanded round-key schedule for one cipher key.
///
/// Expansion is deterministic and side-effect free: expanding the same key
/// twice yields identical schedules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundKeys {
    keys: [[u8; BLOCK_SIZE]; MAX_ROUND_KEYS],
    rounds: usize,
}

impl RoundKeys {
    /// Expand a 16/24/32-byte cipher key into `rounds + 1` round keys
    /// (10/12/14 rounds respectively).
    ///
    /// Every 4-byte word at a key-size-aligned boundary is rotated,
    /// substituted through the S-box, and XORed with the round constant;
    /// the 256-bit variant applies an extra SubWord (no rotation) halfway
    /// between boundaries. Each word is XORed with the word `key length`
    /// bytes earlier.
    ///
    /// # Errors
    /// Returns [`CryptoError::InvalidKeySize`] for any other key length.
    pub fn expand(key: &[u8]) -> Result<Self, CryptoError> {
        let nk = match key.len() {
            16 => 4,
            24 => 6,
            32 => 8,
            len => return Err(CryptoError::InvalidKeySize { len }),
        };
        let rounds = nk + 6;
        let total_words = 4 * (rounds + 1);

        let mut w = [[0u8; 4]; MAX_WORDS];
        for (i, word) in w.iter_mut().take(nk).enumerate() {
            word.copy_from_slice(&key[4 * i..4 * i + 4]);
        }

        for i in nk..total_words {
            let mut temp = w[i - 1];
            if i % nk == 0 {
                temp.rotate_left(1);
                for byte in &mut temp {
                    *byte = SBOX[*byte as usize];
                }
                temp[0] ^= RCON[i / nk - 1];
            } else if nk > 6 && i % nk == 4 {
                for byte in &mut temp {
                    *byte = SBOX[*byte as usize];
                }
            }
            for j in 0..4 {
                w[i][j] = w[i - nk][j] ^ temp[j];
            }
        }

        let mut keys = [[0u8; BLOCK_SIZE]; MAX_ROUND_KEYS];
        for (r, round_key) in keys.iter_mut().take(rounds + 1).enumerate() {
            for c in 0..4 {
                round_key[4 * c..4 * c + 4].copy_from_slice(&w[4 * r + c]);
            }
        }

        Ok(Self { keys, rounds })
    }

    /// Number of cipher rounds for this key size (10, 12, or 14).
    #[must_use]
    pub const fn rounds(&self) -> usize {
        self.rounds
    }

    /// The 16-byte round key for `round` (0 ..= rounds).
    ///
    /// # Panics
    /// Panics if `round` exceeds the number of rounds.
    #[must_use]
    pub fn round_key(&self, round: usize) -> &[u8; BLOCK_SIZE] {
        assert!(round <= self.rounds, "round {round} out of range");
        &self.keys[round]
    }
}
