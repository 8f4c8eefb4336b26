//! Counter-mode keystream generation.

use crate::aes::block::encrypt_with_schedule;
use crate::aes::{RoundKeys, BLOCK_SIZE};

/// Increment the low 32 bits of a counter block, big-endian, wrapping on
/// overflow. The upper 96 bits never change.
pub fn inc32(block: &mut [u8; BLOCK_SIZE]) {
    let counter = u32::from_be_bytes([block[12], block[13], block[14], block[15]]);
    block[12..].copy_from_slice(&counter.wrapping_add(1).to_be_bytes());
}

/// XOR `data` in place with the keystream produced by encrypting
/// successive counter blocks.
///
/// The first block of keystream comes from `counter` as passed in; the
/// counter is then [`inc32`]-incremented per block. A final partial block
/// consumes only as many keystream bytes as it needs. On return `counter`
/// holds the next unused counter block.
pub(crate) fn apply_keystream(keys: &RoundKeys, counter: &mut [u8; BLOCK_SIZE], data: &mut [u8]) {
    for chunk in data.chunks_mut(BLOCK_SIZE) {
        let keystream = encrypt_with_schedule(counter, keys);
        for (byte, k) in chunk.iter_mut().zip(keystream.iter()) {
            *byte ^= k;
        }
        inc32(counter);
    }
}
