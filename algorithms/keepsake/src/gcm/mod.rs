//! AES-GCM authenticated encryption (NIST SP 800-38D).
//!
//! Counter-mode encryption plus GHASH authentication, with both the
//! standard 96-bit-IV fast path and the general GHASH-derived path for
//! arbitrary IV lengths (length 0 included). Decryption recomputes the tag
//! before any plaintext is returned and fails closed on mismatch.

pub mod ctr;
pub mod gf128;
pub mod ghash;

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
#[cfg(feature = "std")]
use std::vec::Vec;

use subtle::ConstantTimeEq;

use crate::aes::block::encrypt_with_schedule;
use crate::aes::{RoundKeys, BLOCK_SIZE};
use crate::gcm::ghash::Ghash;
use crate::types::CryptoError;

/// GCM authentication tag size in bytes.
pub const TAG_SIZE: usize = 16;

/// Encrypt and authenticate `plaintext` under `key` and `iv`, binding
/// `aad` into the tag without encrypting it.
///
/// Returns the ciphertext (same length as the plaintext) and the 16-byte
/// tag. Empty plaintext, empty AAD, and an IV of any length (including 0)
/// are all valid.
///
/// # Errors
/// Returns [`CryptoError::InvalidKeySize`] if the key is not 16, 24, or
/// 32 bytes.
pub fn encrypt(
    plaintext: &[u8],
    key: &[u8],
    iv: &[u8],
    aad: &[u8],
) -> Result<(Vec<u8>, [u8; TAG_SIZE]), CryptoError> {
    let keys = RoundKeys::expand(key)?;
    let h = encrypt_with_schedule(&[0u8; BLOCK_SIZE], &keys);
    let j0 = j0_from_subkey(&h, iv);

    let mut ciphertext = plaintext.to_vec();
    let mut counter = j0;
    ctr::inc32(&mut counter);
    ctr::apply_keystream(&keys, &mut counter, &mut ciphertext);

    let tag = compute_tag(&keys, &h, &j0, aad, &ciphertext);
    Ok((ciphertext, tag))
}

/// Verify `tag` and decrypt `ciphertext`.
///
/// The expected tag is recomputed from the supplied ciphertext, IV, and
/// AAD and compared in constant time; no plaintext is released unless the
/// comparison succeeds.
///
/// # Errors
/// Returns [`CryptoError::InvalidIvOrAuthTagSize`] if the tag is not
/// exactly 16 bytes, [`CryptoError::InvalidKeySize`] for a bad key, and
/// [`CryptoError::AuthenticationFailure`] when the tag does not match.
pub fn decrypt(
    ciphertext: &[u8],
    key: &[u8],
    iv: &[u8],
    tag: &[u8],
    aad: &[u8],
) -> Result<Vec<u8>, CryptoError> {
    if tag.len() != TAG_SIZE {
        return Err(CryptoError::InvalidIvOrAuthTagSize { len: tag.len() });
    }
    let keys = RoundKeys::expand(key)?;
    let h = encrypt_with_schedule(&[0u8; BLOCK_SIZE], &keys);
    let j0 = j0_from_subkey(&h, iv);

    let expected = compute_tag(&keys, &h, &j0, aad, ciphertext);
    if !bool::from(expected[..].ct_eq(tag)) {
        return Err(CryptoError::AuthenticationFailure);
    }

    let mut plaintext = ciphertext.to_vec();
    let mut counter = j0;
    ctr::inc32(&mut counter);
    ctr::apply_keystream(&keys, &mut counter, &mut plaintext);
    Ok(plaintext)
}

/// Derive the pre-increment base counter block `J0` for a key/IV pair.
///
/// Exposed so circuit-vector generation can pin the IV handling: a
/// 12-byte IV takes the `IV || 0x00000001` fast path, every other length
/// takes the GHASH derivation of SP 800-38D §7.1.
///
/// # Errors
/// Returns [`CryptoError::InvalidKeySize`] for a bad key length.
pub fn derive_j0(key: &[u8], iv: &[u8]) -> Result<[u8; BLOCK_SIZE], CryptoError> {
    let keys = RoundKeys::expand(key)?;
    let h = encrypt_with_schedule(&[0u8; BLOCK_SIZE], &keys);
    Ok(j0_from_subkey(&h, iv))
}

/// Raw counter-mode encryption, without authentication.
///
/// The first keystream block encrypts `counter` exactly as given; later
/// blocks increment its low 32 bits. Decryption is the same operation.
///
/// # Errors
/// Returns [`CryptoError::InvalidKeySize`] for a bad key length and
/// [`CryptoError::InvalidBlockSize`] if `counter` is not 16 bytes.
pub fn ctr_encrypt(data: &[u8], key: &[u8], counter: &[u8]) -> Result<Vec<u8>, CryptoError> {
    let keys = RoundKeys::expand(key)?;
    if counter.len() != BLOCK_SIZE {
        return Err(CryptoError::InvalidBlockSize { len: counter.len() });
    }
    let mut block = [0u8; BLOCK_SIZE];
    block.copy_from_slice(counter);

    let mut out = data.to_vec();
    ctr::apply_keystream(&keys, &mut block, &mut out);
    Ok(out)
}

/// `J0` from the precomputed hash subkey.
fn j0_from_subkey(h: &[u8; BLOCK_SIZE], iv: &[u8]) -> [u8; BLOCK_SIZE] {
    if iv.len() == 12 {
        let mut j0 = [0u8; BLOCK_SIZE];
        j0[..12].copy_from_slice(iv);
        j0[15] = 1;
        return j0;
    }
    // General path: GHASH over the zero-padded IV followed by a length
    // block of [0]_64 || [bitlen(IV)]_64.
    let mut g = Ghash::new(*h);
    g.update(iv);
    g.finalize(0, (iv.len() as u64) * 8)
}

/// `T = GHASH_H(AAD, C, lengths) ^ AES_K(J0)`. Note J0 itself, not the
/// incremented counter.
fn compute_tag(
    keys: &RoundKeys,
    h: &[u8; BLOCK_SIZE],
    j0: &[u8; BLOCK_SIZE],
    aad: &[u8],
    ciphertext: &[u8],
) -> [u8; TAG_SIZE] {
    let mut g = Ghash::new(*h);
    g.update(aad);
    g.update(ciphertext);
    let s = g.finalize((aad.len() as u64) * 8, (ciphertext.len() as u64) * 8);

    let masked = encrypt_with_schedule(j0, keys);
    let mut tag = [0u8; TAG_SIZE];
    for (t, (m, si)) in tag.iter_mut().zip(masked.iter().zip(s.iter())) {
        *t = m ^ si;
    }
    tag
}
