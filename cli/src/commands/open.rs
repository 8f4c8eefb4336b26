//! Open Command
//!
//! Verifies and decrypts a JSON envelope produced by `seal`.

use anyhow::{Context, Result};
use keepsake::{convert, SealedEnvelope};
use std::io::Write;
use std::path::Path;

/// Open an envelope file and print or write the plaintext.
pub fn open_envelope(input: &Path, key_b64: &str, aad: &str, output: Option<&Path>) -> Result<()> {
    let key = convert::decode_base64(key_b64).context("key is not valid base64")?;

    let file = std::fs::File::open(input)
        .with_context(|| format!("Failed to open: {}", input.display()))?;
    let envelope: SealedEnvelope =
        serde_json::from_reader(std::io::BufReader::new(file)).context("malformed envelope")?;

    let plaintext =
        keepsake::open(&envelope, &key, aad.as_bytes()).map_err(|e| anyhow::anyhow!("{e}"))?;

    match output {
        Some(path) => std::fs::write(path, &plaintext)
            .with_context(|| format!("Failed to write: {}", path.display()))?,
        None => std::io::stdout().write_all(&plaintext)?,
    }

    Ok(())
}
