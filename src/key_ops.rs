// src/key_ops.rs
//! Key generation and representation utilities
//!
//! Keys are filled straight from the provider CSPRNG and live in a
//! zero-on-drop secure-gate buffer. Persisting a key is behind the
//! `key-file` feature and off by default.

use base64::engine::general_purpose::{STANDARD, URL_SAFE_NO_PAD};
use base64::Engine;
use tracing::{debug, warn};

use crate::aliases::{SecureConversionsExt, SymmetricKey};
use crate::consts::{FINGERPRINT_LEN_HEX, KEY_LEN};
use crate::core::report::ErrorRecords;
use crate::error::{CoreError, Result};

/// Generate a new random 256-bit key
///
/// Every byte of the buffer comes from `RAND_bytes`; the request size is
/// the buffer's own length, never a pointer or type size.
pub fn generate_key() -> Result<SymmetricKey> {
    let mut key = SymmetricKey::new([0u8; KEY_LEN]);
    let buf = key.expose_secret_mut();
    openssl::rand::rand_bytes(buf).map_err(|stack| {
        let records = ErrorRecords::collect(&stack);
        warn!(count = records.len(), "provider CSPRNG refused key request");
        CoreError::KeyGenerationFailure { records }
    })?;
    debug!(fingerprint = %key_fingerprint(&key), "generated session key");
    Ok(key)
}

/// Build a key from raw bytes (e.g. read back from a key file)
pub fn key_from_slice(bytes: &[u8]) -> Result<SymmetricKey> {
    if bytes.len() != KEY_LEN {
        return Err(CoreError::InvalidKeyLength {
            expected: KEY_LEN,
            actual: bytes.len(),
        });
    }
    // Copy straight into the zero-on-drop buffer, no stack array in between
    let mut key = SymmetricKey::new([0u8; KEY_LEN]);
    key.expose_secret_mut().copy_from_slice(bytes);
    Ok(key)
}

/// Multiple string representations of a key for export/display
#[derive(Debug, Clone)]
pub struct KeyRepr {
    pub hex: String,
    pub base64: String,
    pub base64url_no_pad: String,
}

pub fn key_representations(key: &SymmetricKey) -> KeyRepr {
    KeyRepr {
        hex: key.expose_secret().to_hex(),
        base64: STANDARD.encode(key.expose_secret()),
        base64url_no_pad: URL_SAFE_NO_PAD.encode(key.expose_secret()),
    }
}

/// Short BLAKE3 digest of the key, safe to put in logs
pub fn key_fingerprint(key: &SymmetricKey) -> String {
    let mut hex = blake3::hash(key.expose_secret()).to_hex().to_string();
    hex.truncate(FINGERPRINT_LEN_HEX);
    hex
}

#[cfg(feature = "key-file")]
pub use self::key_file::{load_key, save_key};

#[cfg(feature = "key-file")]
mod key_file {
    use std::fs;
    use std::io::ErrorKind;
    use std::path::Path;

    use tracing::info;

    use super::{key_fingerprint, key_from_slice};
    use crate::aliases::{RawKeyBytes, SymmetricKey};
    use crate::error::{CoreError, Result};

    /// Dump the raw key bytes — no header, no metadata
    pub fn save_key<P: AsRef<Path>>(path: P, key: &SymmetricKey) -> Result<()> {
        fs::write(path.as_ref(), key.expose_secret())?;
        info!(
            path = %path.as_ref().display(),
            fingerprint = %key_fingerprint(key),
            "key written to disk"
        );
        Ok(())
    }

    /// Read a raw key dump back
    pub fn load_key<P: AsRef<Path>>(path: P) -> Result<SymmetricKey> {
        let bytes = match fs::read(path.as_ref()) {
            Ok(bytes) => RawKeyBytes::new(bytes),
            Err(e) if e.kind() == ErrorKind::NotFound => return Err(CoreError::KeyMissing),
            Err(e) => return Err(CoreError::Io(e)),
        };
        if bytes.expose_secret().is_empty() {
            return Err(CoreError::KeyMissing);
        }
        key_from_slice(bytes.expose_secret().as_slice())
    }
}
