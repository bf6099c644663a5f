// src/session.rs
//! One key, one engine, many files
//!
//! A session owns its key for its whole lifetime; the key is only lent
//! out read-only to each transform and wiped when the session drops.

use std::path::Path;

use tracing::info;

use crate::aliases::SymmetricKey;
use crate::config::Config;
use crate::core::cipher::CipherEngine;
use crate::core::file;
use crate::error::Result;
use crate::key_ops::{generate_key, key_fingerprint};

pub struct Session {
    key: SymmetricKey,
    engine: CipherEngine,
}

impl Session {
    /// Generate a fresh session key.
    ///
    /// With the `key-file` feature and `key_file.enabled`, the key is
    /// also dumped to `key_file.path`.
    pub fn start(config: &Config) -> Result<Self> {
        config.validate()?;
        let engine = CipherEngine::from_config(config)?;
        let key = generate_key()?;

        #[cfg(feature = "key-file")]
        {
            if config.key_file.enabled {
                crate::key_ops::save_key(&config.key_file.path, &key)?;
            }
        }

        info!(fingerprint = %key_fingerprint(&key), "session started");
        Ok(Session { key, engine })
    }

    /// Pick up a key previously written by [`Session::start`]
    #[cfg(feature = "key-file")]
    pub fn resume(config: &Config) -> Result<Self> {
        config.validate()?;
        let engine = CipherEngine::from_config(config)?;
        let key = crate::key_ops::load_key(&config.key_file.path)?;
        info!(fingerprint = %key_fingerprint(&key), "session resumed from key file");
        Ok(Session { key, engine })
    }

    /// Use a key the caller already holds
    pub fn with_key(config: &Config, key: SymmetricKey) -> Result<Self> {
        config.validate()?;
        let engine = CipherEngine::from_config(config)?;
        Ok(Session { key, engine })
    }

    pub fn key(&self) -> &SymmetricKey {
        &self.key
    }

    pub fn engine(&self) -> &CipherEngine {
        &self.engine
    }

    pub fn fingerprint(&self) -> String {
        key_fingerprint(&self.key)
    }

    pub fn encrypt_file<P: AsRef<Path>, Q: AsRef<Path>>(&self, input: P, output: Q) -> Result<u64> {
        file::encrypt_file(&self.engine, &self.key, input, output)
    }

    pub fn decrypt_file<P: AsRef<Path>, Q: AsRef<Path>>(&self, input: P, output: Q) -> Result<u64> {
        file::decrypt_file(&self.engine, &self.key, input, output)
    }
}
