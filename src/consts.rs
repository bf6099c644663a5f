// src/consts.rs
//! Shared constants — cipher geometry and defaults

/// AES-256 key length in bytes
pub const KEY_LEN: usize = 32;

/// CBC initialization vector length in bytes
pub const IV_LEN: usize = 16;

/// AES block size in bytes
pub const BLOCK_SIZE: usize = 16;

/// Default transfer unit for chunked reads
// Deliberately unrelated to KEY_LEN
pub const DEFAULT_CHUNK_SIZE: usize = 4096;

/// Default location of the raw key dump
pub const DEFAULT_KEY_FILE: &str = "saved_key.key";

/// Default config file name when `CBC_CIPHER_CONFIG` is unset
pub const DEFAULT_CONFIG_FILE: &str = "cipher-config.toml";

/// Env var pointing at the config file
pub const CONFIG_ENV: &str = "CBC_CIPHER_CONFIG";

/// Env var overriding `cipher.chunk_size`
pub const CHUNK_SIZE_ENV: &str = "CBC_CIPHER_CHUNK_SIZE";

/// Number of BLAKE3 hex chars used for a key fingerprint
pub const FINGERPRINT_LEN_HEX: usize = 16;
