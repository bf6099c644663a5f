// src/lib.rs
//! cbc-file-cipher — AES-256-CBC file encryption over byte streams
//!
//! Features:
//! - Provider-random 256-bit keys in zero-on-drop buffers
//! - Chunked streaming transform with a scoped cipher context
//! - Fresh IV per encryption, stored in front of the ciphertext
//! - Provider diagnostics drained into structured records

pub mod aliases;
pub mod config;
pub mod consts;
pub mod core;
pub mod enums;
pub mod error;
pub mod key_ops;
pub mod session;

// Re-export everything users need at the crate root
pub use aliases::{CypherText, InitVector, PlainText, SecureConversionsExt, SymmetricKey};
pub use config::{load as load_config, Config};
pub use crate::core::{
    decrypt_file, drain_errors, encrypt_file, open_stream, seal_stream, CipherEngine,
    CipherSettings, ErrorRecord, ErrorRecords,
};
pub use enums::{CipherAlgorithm, Direction, IvSource};
pub use error::{CoreError, Result as CoreResult};
pub use key_ops::{generate_key, key_fingerprint, key_representations, KeyRepr};
pub use session::Session;
