// src/config/app.rs
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use serde::Deserialize;
use tracing::{debug, warn};

use super::defaults::*;
use crate::consts::{CHUNK_SIZE_ENV, CONFIG_ENV, DEFAULT_CONFIG_FILE};
use crate::core::cipher::CipherSettings;
use crate::enums::{CipherAlgorithm, IvSource};
use crate::error::{CoreError, Result};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default = "default_cipher")]
    pub cipher: CipherConfig,
    #[serde(default = "default_key_file")]
    pub key_file: KeyFileConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CipherConfig {
    /// Key length in bytes; has to match the cipher
    pub key_length: usize,
    /// Transfer unit for chunked reads
    pub chunk_size: usize,
    pub iv_source: IvSource,
}

impl Default for CipherConfig {
    fn default() -> Self {
        default_cipher()
    }
}

/// Optional raw key dump, only honoured with the `key-file` feature
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KeyFileConfig {
    pub enabled: bool,
    pub path: PathBuf,
}

impl Default for KeyFileConfig {
    fn default() -> Self {
        default_key_file()
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            cipher: default_cipher(),
            key_file: default_key_file(),
        }
    }
}

impl Config {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let conf: Config = toml::from_str(content)?;
        conf.validate()?;
        Ok(conf)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Config::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<()> {
        let expected = CipherAlgorithm::default().key_len();
        if self.cipher.key_length != expected {
            return Err(CoreError::Config(format!(
                "key_length must be {expected} bytes for AES-256-CBC, got {}",
                self.cipher.key_length
            )));
        }
        if self.cipher.chunk_size == 0 {
            return Err(CoreError::Config("chunk_size must be at least 1 byte".into()));
        }
        Ok(())
    }

    pub fn cipher_settings(&self) -> CipherSettings {
        CipherSettings {
            algorithm: CipherAlgorithm::default(),
            chunk_size: self.cipher.chunk_size,
            iv_source: self.cipher.iv_source,
        }
    }

    fn apply_env_overrides(&mut self) -> Result<()> {
        if let Ok(raw) = std::env::var(CHUNK_SIZE_ENV) {
            self.cipher.chunk_size = raw.trim().parse().map_err(|_| {
                CoreError::Config(format!("{CHUNK_SIZE_ENV} is not a byte count: {raw:?}"))
            })?;
        }
        self.validate()
    }
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Read config from `CBC_CIPHER_CONFIG` (or the default file) plus env overrides
pub fn load_uncached() -> Result<Config> {
    let config_path = std::env::var(CONFIG_ENV).unwrap_or_else(|_| DEFAULT_CONFIG_FILE.to_string());

    let mut conf = if Path::new(&config_path).exists() {
        debug!(path = %config_path, "loading config");
        Config::from_path(&config_path)?
    } else {
        debug!(path = %config_path, "config file not found — using built-in defaults");
        Config::default()
    };

    conf.apply_env_overrides()?;
    Ok(conf)
}

/// Load config once — falls back to defaults if it is missing or invalid
pub fn load() -> &'static Config {
    CONFIG.get_or_init(|| {
        load_uncached().unwrap_or_else(|e| {
            warn!(error = %e, "unusable config — using built-in defaults");
            Config::default()
        })
    })
}
