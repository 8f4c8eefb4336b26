//! Hash Command
//!
//! Keccak-256 file hashing, parallelized over files via Rayon.

use anyhow::{Context, Result};
use rayon::prelude::*;
use std::path::PathBuf;
use std::sync::Mutex;

/// Hash files (Rayon parallelizes across files).
pub fn hash_files(files: &[PathBuf]) -> Result<()> {
    let results = Mutex::new(Vec::with_capacity(files.len()));
    let errors = Mutex::new(Vec::new());

    files.par_iter().for_each(|file_path| {
        let result = (|| -> Result<String> {
            let data = std::fs::read(file_path)
                .with_context(|| format!("Failed to read: {}", file_path.display()))?;
            Ok(hex::encode(keepsake::keccak::hash(&data)))
        })();

        match result {
            Ok(hex_digest) => {
                results.lock().unwrap().push((file_path.clone(), hex_digest));
            }
            Err(e) => {
                errors.lock().unwrap().push((file_path.clone(), e));
            }
        }
    });

    // Print in original order
    let mut results = results.into_inner().unwrap();
    results.sort_by_key(|(path, _)| files.iter().position(|p| p == path).unwrap_or(usize::MAX));

    for (file_path, hex_digest) in results {
        println!("{}  {}", hex_digest, file_path.display());
    }

    let errors = errors.into_inner().unwrap();
    for (file_path, error) in &errors {
        eprintln!("Error: {}: {}", file_path.display(), error);
    }

    if !errors.is_empty() {
        anyhow::bail!("Failed to hash {} file(s)", errors.len());
    }

    Ok(())
}
