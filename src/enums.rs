// src/enums.rs
//! Public enum types used throughout the crate
//!
//! Central location for the user-visible choices: transform direction,
//! IV source and cipher algorithm.

use std::fmt;

use openssl::symm::{Cipher, Mode};
use serde::{Deserialize, Serialize};

/// Which way a transform runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Encrypt,
    Decrypt,
}

impl Direction {
    pub(crate) fn mode(self) -> Mode {
        match self {
            Direction::Encrypt => Mode::Encrypt,
            Direction::Decrypt => Mode::Decrypt,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Encrypt => f.write_str("encrypt"),
            Direction::Decrypt => f.write_str("decrypt"),
        }
    }
}

/// CSPRNG used to produce initialization vectors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum IvSource {
    /// OpenSSL `RAND_bytes`
    #[default]
    Provider,
    /// `rand`'s thread-local CSPRNG
    System,
}

/// Supported cipher algorithms
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[non_exhaustive]
pub enum CipherAlgorithm {
    #[default]
    Aes256Cbc,
}

impl CipherAlgorithm {
    pub(crate) fn cipher(self) -> Cipher {
        match self {
            CipherAlgorithm::Aes256Cbc => Cipher::aes_256_cbc(),
        }
    }

    /// Key length the provider expects, in bytes
    pub fn key_len(self) -> usize {
        self.cipher().key_len()
    }

    /// Block size used for padding and buffer headroom
    pub fn block_size(self) -> usize {
        self.cipher().block_size()
    }
}
