//! Keepsake CLI
//!
//! Seal estate payloads into JSON envelopes, open them again, and hash
//! files with Keccak-256.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use commands::{hash_files, open_envelope, seal_file};
use std::path::PathBuf;

// =============================================================================
// CLI DEFINITION
// =============================================================================

#[derive(Parser)]
#[command(name = "keepsake")]
#[command(about = "Seal, open, and hash digital-estate payloads", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Encrypt a file into a JSON envelope (AES-GCM)
    Seal {
        /// File to seal
        #[arg(value_name = "FILE")]
        input: PathBuf,

        /// Base64 key (16, 24, or 32 bytes decoded)
        #[arg(short, long)]
        key: String,

        /// Base64 IV; a fresh 12-byte IV is generated when omitted
        #[arg(long)]
        iv: Option<String>,

        /// Additional authenticated data (UTF-8)
        #[arg(long, default_value = "")]
        aad: String,

        /// AEAD algorithm
        #[arg(short, long, default_value = "aes-256-gcm")]
        algorithm: String,

        /// Write the envelope here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Decrypt a JSON envelope produced by `seal`
    Open {
        /// Envelope file
        #[arg(value_name = "ENVELOPE")]
        input: PathBuf,

        /// Base64 key
        #[arg(short, long)]
        key: String,

        /// Additional authenticated data (UTF-8), must match `seal`
        #[arg(long, default_value = "")]
        aad: String,

        /// Write the plaintext here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Keccak-256 files (Ethereum convention)
    Hash {
        /// Files to hash
        #[arg(value_name = "FILE")]
        files: Vec<PathBuf>,
    },
}

// =============================================================================
// ENTRY POINT
// =============================================================================

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Seal {
            input,
            key,
            iv,
            aad,
            algorithm,
            output,
        } => seal_file(&input, &key, iv.as_deref(), &aad, &algorithm, output.as_deref()),
        Commands::Open {
            input,
            key,
            aad,
            output,
        } => open_envelope(&input, &key, &aad, output.as_deref()),
        Commands::Hash { files } => {
            if files.is_empty() {
                eprintln!("Error: No files specified");
                eprintln!("Usage: keepsake hash [FILE]... or keepsake --help");
                std::process::exit(1);
            }
            hash_files(&files)
        }
    }
}
