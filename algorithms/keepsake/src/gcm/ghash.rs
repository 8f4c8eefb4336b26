//! GHASH, the GF(2^128) polynomial-evaluation MAC inside GCM.

use crate::gcm::gf128;

/// Running GHASH computation under a fixed hash subkey `H`.
///
/// Folds 16-byte blocks as `state = (state ^ block) * H`. Each call to
/// [`Ghash::update`] zero-pads its own final partial block, which gives the
/// independent AAD / ciphertext padding NIST SP 800-38D requires when the
/// segments are fed one `update` apiece.
#[derive(Debug, Clone)]
pub struct Ghash {
    h: [u8; 16],
    state: [u8; 16],
}

impl Ghash {
    /// Start a GHASH computation under the subkey `h` (`AES_K(0^128)`).
    #[must_use]
    pub const fn new(h: [u8; 16]) -> Self {
        Self { h, state: [0u8; 16] }
    }

    /// Fold one data segment, zero-padded to the 128-bit boundary.
    pub fn update(&mut self, data: &[u8]) {
        for chunk in data.chunks(16) {
            let mut block = [0u8; 16];
            block[..chunk.len()].copy_from_slice(chunk);
            self.fold(&block);
        }
    }

    /// Fold the mandatory length block (two 64-bit big-endian bit counts)
    /// and return the digest. The lengths are folded even when both
    /// segments are empty.
    #[must_use]
    pub fn finalize(mut self, first_bits: u64, second_bits: u64) -> [u8; 16] {
        let mut block = [0u8; 16];
        block[..8].copy_from_slice(&first_bits.to_be_bytes());
        block[8..].copy_from_slice(&second_bits.to_be_bytes());
        self.fold(&block);
        self.state
    }

    fn fold(&mut self, block: &[u8; 16]) {
        for (s, b) in self.state.iter_mut().zip(block.iter()) {
            *s ^= b;
        }
        self.state = gf128::multiply(&self.state, &self.h);
    }
}
