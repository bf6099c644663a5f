// src/core/file.rs
//! IV-prefixed envelope over streams and files
//!
//! Layout: `IV (16 bytes) || AES-256-CBC ciphertext`. A fresh IV is drawn
//! for every seal, so the same plaintext never produces the same output
//! twice under one key.

use std::fs::File;
use std::io::{BufReader, ErrorKind, Read, Write};
use std::path::Path;

use tracing::info;

use crate::aliases::{InitVector, SymmetricKey};
use crate::consts::IV_LEN;
use crate::core::cipher::CipherEngine;
use crate::enums::Direction;
use crate::error::{CoreError, Result};

/// Encrypt `reader` and write `IV || ciphertext` to `writer`.
///
/// Nothing reaches `writer` unless the whole transform succeeded.
/// Returns the number of plaintext bytes consumed.
pub fn seal_stream<R: Read, W: Write>(
    engine: &CipherEngine,
    key: &SymmetricKey,
    reader: R,
    mut writer: W,
) -> Result<u64> {
    let iv = engine.generate_iv()?;
    let mut counted = CountingReader::new(reader);
    let ciphertext = engine.transform_to_vec(Direction::Encrypt, key, &iv, &mut counted, None)?;
    writer.write_all(iv.expose_secret())?;
    writer.write_all(&ciphertext)?;
    writer.flush()?;
    Ok(counted.count)
}

/// Read the IV header, decrypt the rest and write the plaintext.
///
/// Returns the number of plaintext bytes written.
pub fn open_stream<R: Read, W: Write>(
    engine: &CipherEngine,
    key: &SymmetricKey,
    mut reader: R,
    writer: W,
) -> Result<u64> {
    let iv = read_iv(&mut reader)?;
    engine.transform(Direction::Decrypt, key, &iv, reader, writer)
}

/// Encrypt a file on disk
///
/// The output file is only created once encryption has succeeded.
/// Returns the plaintext size in bytes.
pub fn encrypt_file<P: AsRef<Path>, Q: AsRef<Path>>(
    engine: &CipherEngine,
    key: &SymmetricKey,
    input_path: P,
    output_path: Q,
) -> Result<u64> {
    let (input, size) = open_input(input_path.as_ref())?;
    let iv = engine.generate_iv()?;
    let mut counted = CountingReader::new(input);
    let ciphertext = engine.transform_to_vec(Direction::Encrypt, key, &iv, &mut counted, size)?;

    let mut output = create_output(output_path.as_ref())?;
    output.write_all(iv.expose_secret())?;
    output.write_all(&ciphertext)?;
    output.flush()?;

    info!(
        input = %input_path.as_ref().display(),
        output = %output_path.as_ref().display(),
        "encryption completed"
    );
    Ok(counted.count)
}

/// Decrypt a file produced by [`encrypt_file`]
///
/// Returns the plaintext size in bytes.
pub fn decrypt_file<P: AsRef<Path>, Q: AsRef<Path>>(
    engine: &CipherEngine,
    key: &SymmetricKey,
    input_path: P,
    output_path: Q,
) -> Result<u64> {
    let (mut input, size) = open_input(input_path.as_ref())?;
    let iv = read_iv(&mut input)?;
    let body_len = size.map(|s| s.saturating_sub(IV_LEN));
    let plaintext = engine.transform_to_vec(Direction::Decrypt, key, &iv, input, body_len)?;

    let mut output = create_output(output_path.as_ref())?;
    output.write_all(&plaintext)?;
    output.flush()?;

    info!(
        input = %input_path.as_ref().display(),
        output = %output_path.as_ref().display(),
        "decryption completed"
    );
    Ok(plaintext.len() as u64)
}

fn read_iv<R: Read>(reader: &mut R) -> Result<InitVector> {
    let mut iv = InitVector::new([0u8; IV_LEN]);
    let buf = iv.expose_secret_mut();
    let mut filled = 0;
    while filled < IV_LEN {
        match reader.read(&mut buf[filled..]) {
            Ok(0) => {
                return Err(CoreError::TruncatedEnvelope {
                    expected: IV_LEN,
                    actual: filled,
                })
            }
            Ok(n) => filled += n,
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => return Err(CoreError::Io(e)),
        }
    }
    Ok(iv)
}

fn open_input(path: &Path) -> Result<(BufReader<File>, Option<usize>)> {
    let file = File::open(path).map_err(|source| CoreError::StreamOpenFailure {
        path: path.to_path_buf(),
        source,
    })?;
    let size = file
        .metadata()
        .ok()
        .and_then(|m| usize::try_from(m.len()).ok());
    Ok((BufReader::new(file), size))
}

fn create_output(path: &Path) -> Result<File> {
    File::create(path).map_err(|source| CoreError::StreamOpenFailure {
        path: path.to_path_buf(),
        source,
    })
}

/// Counts bytes pulled through it
struct CountingReader<R> {
    inner: R,
    count: u64,
}

impl<R> CountingReader<R> {
    fn new(inner: R) -> Self {
        CountingReader { inner, count: 0 }
    }
}

impl<R: Read> Read for CountingReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let n = self.inner.read(buf)?;
        self.count += n as u64;
        Ok(n)
    }
}
