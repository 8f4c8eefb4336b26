//! Seal Command
//!
//! Encrypts a file into the JSON envelope the estate scripts exchange.

use anyhow::{Context, Result};
use keepsake::{convert, Algorithm};
use rand::prelude::*;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

/// Seal `input` under a base64 key and print or write the JSON envelope.
pub fn seal_file(
    input: &Path,
    key_b64: &str,
    iv_b64: Option<&str>,
    aad: &str,
    algorithm: &str,
    output: Option<&Path>,
) -> Result<()> {
    let algorithm = Algorithm::from_name(algorithm).map_err(|e| anyhow::anyhow!("{e}"))?;
    let key = convert::decode_base64(key_b64).context("key is not valid base64")?;

    let iv = match iv_b64 {
        Some(text) => convert::decode_base64(text).context("IV is not valid base64")?,
        None => {
            let mut fresh = vec![0u8; 12];
            rand::rng().fill(&mut fresh[..]);
            fresh
        }
    };

    let plaintext = std::fs::read(input)
        .with_context(|| format!("Failed to read: {}", input.display()))?;

    let timestamp = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);

    let envelope = keepsake::seal(&plaintext, &key, &iv, aad.as_bytes(), algorithm, timestamp)
        .map_err(|e| anyhow::anyhow!("{e}"))?;

    let json = serde_json::to_string_pretty(&envelope)?;
    match output {
        Some(path) => std::fs::write(path, json)
            .with_context(|| format!("Failed to write: {}", path.display()))?,
        None => println!("{json}"),
    }

    Ok(())
}
