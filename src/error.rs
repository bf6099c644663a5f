// src/error.rs
//! Public error type for the entire crate

use std::path::PathBuf;

use thiserror::Error;

use crate::core::report::ErrorRecords;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("key generation failed: {records}")]
    KeyGenerationFailure { records: ErrorRecords },

    #[error("IV generation failed: {records}")]
    IvGenerationFailure { records: ErrorRecords },

    #[error("no key available — generate or load one first")]
    KeyMissing,

    #[error("key must be {expected} bytes, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },

    #[error("cannot open {}: {source}", path.display())]
    StreamOpenFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cipher context init failed: {records}")]
    ContextInitFailure { records: ErrorRecords },

    #[error("cipher update failed: {records}")]
    UpdateFailure { records: ErrorRecords },

    #[error("cipher finalize failed (wrong key or corrupted ciphertext?): {records}")]
    FinalizeFailure { records: ErrorRecords },

    #[error("ciphertext envelope too short: expected a {expected}-byte IV, got {actual}")]
    TruncatedEnvelope { expected: usize, actual: usize },

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CoreError {
    /// Provider diagnostics attached to this failure, if any
    pub fn records(&self) -> Option<&ErrorRecords> {
        match self {
            CoreError::KeyGenerationFailure { records }
            | CoreError::IvGenerationFailure { records }
            | CoreError::ContextInitFailure { records }
            | CoreError::UpdateFailure { records }
            | CoreError::FinalizeFailure { records } => Some(records),
            _ => None,
        }
    }
}

impl From<toml::de::Error> for CoreError {
    fn from(err: toml::de::Error) -> Self {
        CoreError::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, CoreError>;
