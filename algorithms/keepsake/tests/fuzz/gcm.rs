use bolero::check;

use keepsake::gcm;
use keepsake::types::CryptoError;

#[test]
fn fuzz_gcm_round_trip() {
    check!()
        .with_type::<(Vec<u8>, Vec<u8>, Vec<u8>)>()
        .for_each(|(plaintext, aad, iv)| {
            let key = [0x6Bu8; 32];

            // =============================================================
            // ROUND TRIP (arbitrary plaintext, AAD, and IV length)
            // =============================================================
            let (ciphertext, tag) = gcm::encrypt(plaintext, &key, iv, aad)
                .unwrap_or_else(|e| panic!("encrypt must accept any input shape: {e}"));
            assert_eq!(ciphertext.len(), plaintext.len());

            let opened = gcm::decrypt(&ciphertext, &key, iv, &tag, aad)
                .unwrap_or_else(|e| panic!("decrypt must accept its own output: {e}"));
            assert_eq!(&opened, plaintext, "round trip mismatch");

            // =============================================================
            // NEGATIVE TESTS (CORRUPTION)
            // =============================================================

            // 1. Ciphertext corruption
            if !ciphertext.is_empty() {
                let mut corrupted = ciphertext.clone();
                corrupted[0] ^= 0x01;
                assert_eq!(
                    gcm::decrypt(&corrupted, &key, iv, &tag, aad),
                    Err(CryptoError::AuthenticationFailure),
                    "corrupted ciphertext must be rejected"
                );
            }

            // 2. Tag corruption
            let mut bad_tag = tag;
            bad_tag[15] ^= 0x80;
            assert_eq!(
                gcm::decrypt(&ciphertext, &key, iv, &bad_tag, aad),
                Err(CryptoError::AuthenticationFailure),
                "corrupted tag must be rejected"
            );
        });
}
