// src/bin/file_cipher.rs
//! Encrypt a file, then decrypt it again with the same session key
//!
//! Usage: file-cipher [INPUT] [ENCRYPTED] [DECRYPTED]

use anyhow::{Context, Result};
use cbc_file_cipher::{load_config, Session};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const DEFAULT_INPUT: &str = "input.txt";
const DEFAULT_ENCRYPTED: &str = "encrypted.enc";
const DEFAULT_DECRYPTED: &str = "decrypted.txt";

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);
    let input = args.next().unwrap_or_else(|| DEFAULT_INPUT.to_owned());
    let encrypted = args.next().unwrap_or_else(|| DEFAULT_ENCRYPTED.to_owned());
    let decrypted = args.next().unwrap_or_else(|| DEFAULT_DECRYPTED.to_owned());

    let config = load_config();
    let session = Session::start(config).context("failed to start session")?;

    let plain_len = session
        .encrypt_file(&input, &encrypted)
        .inspect_err(|e| log_records(e))
        .with_context(|| format!("encrypting {input}"))?;
    info!(bytes = plain_len, "{input} → {encrypted}");

    let out_len = session
        .decrypt_file(&encrypted, &decrypted)
        .inspect_err(|e| log_records(e))
        .with_context(|| format!("decrypting {encrypted}"))?;
    info!(bytes = out_len, "{encrypted} → {decrypted}");

    Ok(())
}

fn log_records(err: &cbc_file_cipher::CoreError) {
    if let Some(records) = err.records() {
        for record in records {
            error!(%record, "provider diagnostic");
        }
    }
}
