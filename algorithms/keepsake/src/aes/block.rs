//! Single-block AES encryption.
//!
//! State layout is column-major (`state[row + 4 * col]`), which is exactly
//! the byte order of the input block, so loading and storing are copies.

use crate::aes::constants::{MUL2, MUL3, SBOX};
use crate::aes::key_schedule::RoundKeys;
use crate::aes::BLOCK_SIZE;
use crate::types::CryptoError;

/// Encrypt one 16-byte block under the given key.
///
/// Runs the key schedule once, then AddRoundKey(0), `rounds - 1` full
/// rounds (SubBytes, ShiftRows, MixColumns, AddRoundKey), and the final
/// round without MixColumns, per FIPS-197.
///
/// # Errors
/// Returns [`CryptoError::InvalidBlockSize`] if `plaintext` is not exactly
/// 16 bytes, or [`CryptoError::InvalidKeySize`] for a bad key length.
pub fn encrypt_block(plaintext: &[u8], key: &[u8]) -> Result<[u8; BLOCK_SIZE], CryptoError> {
    if plaintext.len() != BLOCK_SIZE {
        return Err(CryptoError::InvalidBlockSize {
            len: plaintext.len(),
        });
    }
    let keys = RoundKeys::expand(key)?;
    let mut block = [0u8; BLOCK_SIZE];
    block.copy_from_slice(plaintext);
    Ok(encrypt_with_schedule(&block, &keys))
}

/// Encrypt one block with an already-expanded schedule.
///
/// The CTR/GCM loops call this so the schedule is expanded once per
/// message, not once per block.
pub(crate) fn encrypt_with_schedule(block: &[u8; BLOCK_SIZE], keys: &RoundKeys) -> [u8; BLOCK_SIZE] {
    let mut s = *block;

    add_round_key(&mut s, keys.round_key(0));

    for round in 1..keys.rounds() {
        sub_bytes(&mut s);
        shift_rows(&mut s);
        mix_columns(&mut s);
        add_round_key(&mut s, keys.round_key(round));
    }

    // Final round omits MixColumns.
    sub_bytes(&mut s);
    shift_rows(&mut s);
    add_round_key(&mut s, keys.round_key(keys.rounds()));

    s
}

/// SubBytes: replace each byte with its S-box value.
fn sub_bytes(s: &mut [u8; BLOCK_SIZE]) {
    for byte in s.iter_mut() {
        *byte = SBOX[*byte as usize];
    }
}

/// ShiftRows: cyclically shift row `i` left by `i` positions.
fn shift_rows(s: &mut [u8; BLOCK_SIZE]) {
    // Row 1: shift left 1
    let tmp = s[1];
    s[1] = s[5];
    s[5] = s[9];
    s[9] = s[13];
    s[13] = tmp;
    // Row 2: shift left 2
    s.swap(2, 10);
    s.swap(6, 14);
    // Row 3: shift left 3
    let tmp = s[15];
    s[15] = s[11];
    s[11] = s[7];
    s[7] = s[3];
    s[3] = tmp;
}

/// MixColumns: multiply each column by the MDS matrix
/// `[2 3 1 1; 1 2 3 1; 1 1 2 3; 3 1 1 2]` in GF(2^8).
fn mix_columns(s: &mut [u8; BLOCK_SIZE]) {
    for col in 0..4 {
        let base = 4 * col;
        let c = [s[base], s[base + 1], s[base + 2], s[base + 3]];
        s[base] = MUL2[c[0] as usize] ^ MUL3[c[1] as usize] ^ c[2] ^ c[3];
        s[base + 1] = c[0] ^ MUL2[c[1] as usize] ^ MUL3[c[2] as usize] ^ c[3];
        s[base + 2] = c[0] ^ c[1] ^ MUL2[c[2] as usize] ^ MUL3[c[3] as usize];
        s[base + 3] = MUL3[c[0] as usize] ^ c[1] ^ c[2] ^ MUL2[c[3] as usize];
    }
}

/// AddRoundKey: XOR the state with one round key.
fn add_round_key(s: &mut [u8; BLOCK_SIZE], round_key: &[u8; BLOCK_SIZE]) {
    for (byte, k) in s.iter_mut().zip(round_key.iter()) {
        *byte ^= k;
    }
}
