//! Keccak-256 Behavior Tests
//!
//! Bit/byte equivalence, sponge boundary conditions, sub-byte messages,
//! and byte-for-byte parity against the `sha3` crate's `Keccak256`.

#![allow(clippy::pedantic, clippy::nursery)]
#![allow(clippy::unwrap_used)]

use sha3::{Digest, Keccak256};

use keepsake::keccak::{self, constants, state};
use keepsake::types::CryptoError;
use keepsake::{convert, Message};

fn reference_hash(input: &[u8]) -> Vec<u8> {
    Keccak256::digest(input).to_vec()
}

// =============================================================================
// REFERENCE PARITY & BOUNDARIES
// =============================================================================

#[test]
fn test_parity_with_reference_across_sizes() {
    // Rate is 136 bytes; 135/136/137 exercise the padding boundary.
    let sizes = [0usize, 1, 8, 55, 56, 64, 134, 135, 136, 137, 200, 271, 272, 273, 1000];

    for size in sizes {
        let input: Vec<u8> = (0..size).map(|i| (i % 251) as u8).collect();
        let ours = keccak::hash(&input);
        assert_eq!(
            ours.to_vec(),
            reference_hash(&input),
            "digest mismatch at {size} bytes"
        );
    }
}

#[test]
fn test_hello_world_regression() {
    // Repository regression: must equal a standard keccak256 of the same
    // UTF-8 bytes (bare 10*1 padding, no SHA3 domain suffix).
    let digest = keccak::hash(b"Hello World");
    assert_eq!(
        hex::encode(digest),
        "592fa743889fc7f92ac2a37bb1f5ba1daf2a5c84741ca0e0061d243a2e6707ba"
    );
    assert_eq!(digest.to_vec(), reference_hash(b"Hello World"));
}

// =============================================================================
// BIT / BYTE EQUIVALENCE
// =============================================================================

#[test]
fn test_bit_path_equals_byte_path_on_aligned_input() {
    let messages: [&[u8]; 5] = [b"", b"a", b"Hello World", &[0xFF; 136], &[0x5A; 137]];

    for message in messages {
        let byte_digest = keccak::hash(message);
        let bit_digest = keccak::hash_bits(&convert::bytes_to_bits(message)).unwrap();
        assert_eq!(
            bit_digest,
            convert::bytes_to_bits(&byte_digest),
            "bit path diverged on {}-byte message",
            message.len()
        );
    }
}

#[test]
fn test_binary_string_path_agrees_with_bit_path() {
    let bits = convert::bytes_to_bits(b"estate");
    let text = convert::bits_to_binary(&bits).unwrap();

    let from_bits = keccak::hash_bits(&bits).unwrap();
    let from_text = keccak::hash_binary_string(&text).unwrap();

    assert_eq!(from_text.len(), 256);
    assert_eq!(from_text, convert::bits_to_binary(&from_bits).unwrap());
}

#[test]
fn test_sub_byte_messages_are_hashable() {
    // Lengths that no byte-oriented library accepts. Pinned by determinism
    // and by disagreement with every aligned neighbor.
    for bit_len in [1usize, 2, 5, 7, 9, 13, 1087, 1088, 1089] {
        let bits: Vec<u8> = (0..bit_len).map(|i| (i % 2) as u8).collect();
        let first = keccak::hash_bits(&bits).unwrap();
        let second = keccak::hash_bits(&bits).unwrap();
        assert_eq!(first, second, "bit path must be deterministic");
        assert_eq!(first.len(), 256);
    }

    // A 5-bit message is not the same as its zero-filled byte.
    let five_bits = keccak::hash_bits(&[1, 0, 1, 1, 0]).unwrap();
    let one_byte = keccak::hash_bits(&convert::bytes_to_bits(&[0b0000_1101])).unwrap();
    assert_ne!(five_bits, one_byte);
}

#[test]
fn test_invalid_bits_and_binary_strings_are_rejected() {
    assert_eq!(
        keccak::hash_bits(&[0, 1, 2]),
        Err(CryptoError::InvalidBitValue { value: 2 })
    );
    assert_eq!(
        keccak::hash_binary_string("0102"),
        Err(CryptoError::InvalidBinaryString { found: '2' })
    );
}

// =============================================================================
// TAGGED MESSAGE INPUT
// =============================================================================

#[test]
fn test_message_encodings_are_explicit() {
    let as_bytes = keccak::hash_message(&Message::Bytes(b"0xdead")).unwrap();
    let as_text = keccak::hash_message(&Message::PlainText("0xdead")).unwrap();
    let as_hex = keccak::hash_message(&Message::HexText("0xdead")).unwrap();

    // Plain text and raw bytes agree; hex is a different message entirely.
    assert_eq!(as_bytes, as_text);
    assert_ne!(as_bytes, as_hex);
    assert_eq!(as_hex.to_vec(), reference_hash(&[0xde, 0xad]));

    assert_eq!(
        keccak::hash_message(&Message::HexText("0xzz")),
        Err(CryptoError::InvalidHexString)
    );
}

// =============================================================================
// STATE CONVERSIONS
// =============================================================================

#[test]
fn test_state_views_are_mutually_convertible() {
    let mut bytes = [0u8; constants::STATE_BYTES];
    for (i, byte) in bytes.iter_mut().enumerate() {
        *byte = (i * 31 % 256) as u8;
    }

    let lanes = state::bytes_to_lanes(&bytes);
    let bits = state::lanes_to_bits(&lanes);

    assert_eq!(state::lanes_to_bytes(&lanes), bytes);
    assert_eq!(state::bits_to_lanes(&bits), lanes);
    assert_eq!(
        bits.to_vec(),
        convert::bytes_to_bits(&bytes),
        "state bit order must match the converter's LSB-first packing"
    );
}
