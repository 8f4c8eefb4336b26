//! Generator for circuit reference vectors
//!
//! Emits the JSON reference values the zero-knowledge circuit's arithmetic
//! constraints must match bit-for-bit: Keccak digests over byte-aligned and
//! sub-byte messages, AES single-block outputs, raw CTR keystream, and the
//! J0 counter bases for both IV paths.
#![allow(clippy::unwrap_used)]
use keepsake::{convert, gcm, keccak};
use serde_json::json;

fn main() {
    let mut vectors = Vec::new();

    // =========================================================================
    // 1. KECCAK, BYTE-ALIGNED
    // =========================================================================

    for (name, input) in [
        ("keccak_empty", &b""[..]),
        ("keccak_hello_world", &b"Hello World"[..]),
        ("keccak_rate_block", &[0x41u8; 136][..]),
    ] {
        vectors.push(json!({
            "name": name,
            "input": hex::encode(input),
            "digest": hex::encode(keccak::hash(input)),
        }));
    }

    // =========================================================================
    // 2. KECCAK, BIT-GRANULAR
    // =========================================================================

    // Sub-byte messages the circuit addresses directly.
    for bit_len in [1usize, 5, 7, 13] {
        let bits: Vec<u8> = (0..bit_len).map(|i| (i % 2) as u8).collect();
        let digest = keccak::hash_bits(&bits).unwrap();
        vectors.push(json!({
            "name": format!("keccak_bits_{bit_len}"),
            "input_bits": convert::bits_to_binary(&bits).unwrap(),
            "digest_bits": convert::bits_to_binary(&digest).unwrap(),
        }));
    }

    // =========================================================================
    // 3. AES BLOCK & CTR KEYSTREAM
    // =========================================================================

    let key = hex::decode("000102030405060708090a0b0c0d0e0f").unwrap();
    let block = hex::decode("00112233445566778899aabbccddeeff").unwrap();
    vectors.push(json!({
        "name": "aes128_block",
        "key": hex::encode(&key),
        "plaintext": hex::encode(&block),
        "ciphertext": hex::encode(keepsake::aes::encrypt_block(&block, &key).unwrap()),
    }));

    // Two keystream blocks: CTR over zeros is the keystream itself.
    let counter = hex::decode("00000000000000000000000000000002").unwrap();
    let keystream = gcm::ctr_encrypt(&[0u8; 32], &key, &counter).unwrap();
    vectors.push(json!({
        "name": "aes128_ctr_keystream",
        "key": hex::encode(&key),
        "counter": hex::encode(&counter),
        "keystream": hex::encode(&keystream),
    }));

    // =========================================================================
    // 4. J0 DERIVATION (BOTH PATHS)
    // =========================================================================

    for iv_len in [8usize, 12, 20] {
        let iv: Vec<u8> = (0..iv_len).map(|i| i as u8).collect();
        vectors.push(json!({
            "name": format!("gcm_j0_iv{iv_len}"),
            "key": hex::encode(&key),
            "iv": hex::encode(&iv),
            "j0": hex::encode(gcm::derive_j0(&key, &iv).unwrap()),
        }));
    }

    let output = json!({ "vectors": vectors });
    println!("{}", serde_json::to_string_pretty(&output).unwrap());
}
