// src/config/defaults.rs
use std::path::PathBuf;

use crate::config::app::{CipherConfig, KeyFileConfig};
use crate::consts::{DEFAULT_CHUNK_SIZE, DEFAULT_KEY_FILE, KEY_LEN};
use crate::enums::IvSource;

pub fn default_cipher() -> CipherConfig {
    CipherConfig {
        key_length: KEY_LEN,
        chunk_size: DEFAULT_CHUNK_SIZE,
        iv_source: IvSource::Provider,
    }
}

pub fn default_key_file() -> KeyFileConfig {
    KeyFileConfig {
        enabled: false,
        path: PathBuf::from(DEFAULT_KEY_FILE),
    }
}
