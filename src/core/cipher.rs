// src/core/cipher.rs
//! AES-256-CBC streaming transform
//!
//! Works on any `Read`/`Write` pair. The cipher context lives for exactly
//! one transform call and is freed when `CipherContext` drops, whichever
//! way the call exits. Output is only handed to the writer once finalize
//! has succeeded, so a failed call never leaves partial output behind.

use std::io::{ErrorKind, Read, Write};

use openssl::symm::Crypter;
use rand::RngCore;
use tracing::{debug, trace, warn};
use zeroize::Zeroizing;

use crate::aliases::{CypherText, InitVector, PlainText, SymmetricKey};
use crate::config::Config;
use crate::consts::{DEFAULT_CHUNK_SIZE, IV_LEN};
use crate::core::report::ErrorRecords;
use crate::enums::{CipherAlgorithm, Direction, IvSource};
use crate::error::{CoreError, Result};

/// Engine knobs — chunk size is independent of key length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CipherSettings {
    pub algorithm: CipherAlgorithm,
    pub chunk_size: usize,
    pub iv_source: IvSource,
}

impl Default for CipherSettings {
    fn default() -> Self {
        CipherSettings {
            algorithm: CipherAlgorithm::default(),
            chunk_size: DEFAULT_CHUNK_SIZE,
            iv_source: IvSource::default(),
        }
    }
}

/// One provider cipher context, bound to a single transform call
struct CipherContext {
    crypter: Crypter,
    direction: Direction,
    block_size: usize,
}

impl CipherContext {
    fn acquire(
        algorithm: CipherAlgorithm,
        direction: Direction,
        key: &SymmetricKey,
        iv: &InitVector,
    ) -> Result<Self> {
        let cipher = algorithm.cipher();
        let mut crypter = Crypter::new(
            cipher,
            direction.mode(),
            &key.expose_secret()[..],
            Some(&iv.expose_secret()[..]),
        )
        .map_err(|stack| {
            let records = ErrorRecords::collect(&stack);
            warn!(%direction, count = records.len(), "cipher context init failed");
            CoreError::ContextInitFailure { records }
        })?;
        crypter.pad(true);
        trace!(%direction, "cipher context acquired");
        Ok(CipherContext {
            crypter,
            direction,
            block_size: cipher.block_size(),
        })
    }

    /// Feed one chunk, appending whatever the provider emits to `out`
    fn update(&mut self, chunk: &[u8], out: &mut Vec<u8>) -> Result<usize> {
        let start = out.len();
        // Provider may flush a held-back block on top of this chunk
        out.resize(start + chunk.len() + self.block_size, 0);
        match self.crypter.update(chunk, &mut out[start..]) {
            Ok(written) => {
                out.truncate(start + written);
                Ok(written)
            }
            Err(stack) => {
                out.truncate(start);
                let records = ErrorRecords::collect(&stack);
                warn!(direction = %self.direction, count = records.len(), "cipher update failed");
                Err(CoreError::UpdateFailure { records })
            }
        }
    }

    /// Emit (encrypt) or strip and check (decrypt) the padding block.
    /// Consumes the context so it can only run once.
    fn finalize(mut self, out: &mut Vec<u8>) -> Result<usize> {
        let start = out.len();
        out.resize(start + self.block_size, 0);
        match self.crypter.finalize(&mut out[start..]) {
            Ok(written) => {
                out.truncate(start + written);
                Ok(written)
            }
            Err(stack) => {
                out.truncate(start);
                let records = ErrorRecords::collect(&stack);
                warn!(direction = %self.direction, count = records.len(), "cipher finalize failed");
                Err(CoreError::FinalizeFailure { records })
            }
        }
    }
}

impl Drop for CipherContext {
    fn drop(&mut self) {
        trace!(direction = %self.direction, "cipher context released");
    }
}

/// Drives chunked AES-256-CBC transforms
#[derive(Debug, Clone)]
pub struct CipherEngine {
    settings: CipherSettings,
}

impl CipherEngine {
    pub fn new(settings: CipherSettings) -> Result<Self> {
        if settings.chunk_size == 0 {
            return Err(CoreError::Config("chunk_size must be at least 1 byte".into()));
        }
        Ok(CipherEngine { settings })
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        CipherEngine::new(config.cipher_settings())
    }

    pub fn settings(&self) -> &CipherSettings {
        &self.settings
    }

    /// Fresh IV from the configured CSPRNG
    pub fn generate_iv(&self) -> Result<InitVector> {
        let mut iv = InitVector::new([0u8; IV_LEN]);
        match self.settings.iv_source {
            IvSource::Provider => {
                openssl::rand::rand_bytes(iv.expose_secret_mut()).map_err(|stack| {
                    CoreError::IvGenerationFailure {
                        records: ErrorRecords::collect(&stack),
                    }
                })?;
            }
            IvSource::System => rand::rng().fill_bytes(iv.expose_secret_mut()),
        }
        Ok(iv)
    }

    /// Run the whole transform, then write the result to `output`.
    ///
    /// Returns the number of bytes written.
    pub fn transform<R, W>(
        &self,
        direction: Direction,
        key: &SymmetricKey,
        iv: &InitVector,
        input: R,
        mut output: W,
    ) -> Result<u64>
    where
        R: Read,
        W: Write,
    {
        let out = self.transform_to_vec(direction, key, iv, input, None)?;
        output.write_all(&out)?;
        output.flush()?;
        Ok(out.len() as u64)
    }

    /// Core loop: init, chunked update, single finalize.
    ///
    /// `size_hint` is the input length when the caller knows it; it only
    /// pre-sizes the output buffer.
    pub fn transform_to_vec<R: Read>(
        &self,
        direction: Direction,
        key: &SymmetricKey,
        iv: &InitVector,
        mut input: R,
        size_hint: Option<usize>,
    ) -> Result<Vec<u8>> {
        let mut ctx = CipherContext::acquire(self.settings.algorithm, direction, key, iv)?;

        let mut out = Vec::with_capacity(size_hint.unwrap_or(0) + ctx.block_size);
        // Wiped on drop, whichever way the loop exits
        let mut chunk = Zeroizing::new(vec![0u8; self.settings.chunk_size]);
        let mut consumed = 0usize;

        loop {
            let n = read_chunk(&mut input, &mut chunk)?;
            if n == 0 {
                break;
            }
            consumed += n;
            ctx.update(&chunk[..n], &mut out)?;
        }

        ctx.finalize(&mut out)?;

        debug!(
            %direction,
            bytes_in = consumed,
            bytes_out = out.len(),
            chunk_size = self.settings.chunk_size,
            "transform complete"
        );
        Ok(out)
    }

    /// Encrypt an in-memory buffer
    pub fn encrypt_to_vec(
        &self,
        plaintext: &[u8],
        key: &SymmetricKey,
        iv: &InitVector,
    ) -> Result<CypherText> {
        let out = self.transform_to_vec(
            Direction::Encrypt,
            key,
            iv,
            plaintext,
            Some(plaintext.len()),
        )?;
        Ok(CypherText::new(out))
    }

    /// Decrypt an in-memory buffer
    pub fn decrypt_to_vec(
        &self,
        ciphertext: &[u8],
        key: &SymmetricKey,
        iv: &InitVector,
    ) -> Result<PlainText> {
        let out = self.transform_to_vec(
            Direction::Decrypt,
            key,
            iv,
            ciphertext,
            Some(ciphertext.len()),
        )?;
        Ok(PlainText::new(out))
    }
}

/// Fill `buf` from `reader`, stopping early only at EOF
fn read_chunk<R: Read>(reader: &mut R, buf: &mut [u8]) -> std::io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}
