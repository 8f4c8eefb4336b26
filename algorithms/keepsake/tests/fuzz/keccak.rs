use bolero::check;

use keepsake::{convert, keccak};

#[test]
fn fuzz_bit_byte_equivalence() {
    check!().with_type::<Vec<u8>>().for_each(|data| {
        // =====================================================================
        // BASELINE (BYTE PATH)
        // =====================================================================
        let byte_digest = keccak::hash(data);

        // =====================================================================
        // BIT PATH
        // =====================================================================
        let bits = convert::bytes_to_bits(data);
        let bit_digest = keccak::hash_bits(&bits)
            .unwrap_or_else(|e| panic!("converter output must be valid bits: {e}"));
        assert_eq!(
            bit_digest,
            convert::bytes_to_bits(&byte_digest),
            "bit and byte paths diverged at {} bytes",
            data.len()
        );

        // =====================================================================
        // BINARY-STRING PATH
        // =====================================================================
        let text = convert::bits_to_binary(&bits)
            .unwrap_or_else(|e| panic!("converter output must render: {e}"));
        let text_digest = keccak::hash_binary_string(&text)
            .unwrap_or_else(|e| panic!("binary string must parse: {e}"));
        assert_eq!(
            convert::bits_from_binary(&text_digest).ok().as_deref(),
            Some(&bit_digest[..]),
            "binary-string path diverged"
        );
    });
}
