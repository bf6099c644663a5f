// src/config/mod.rs
//! Configuration system for cbc-file-cipher
//!
//! Central, lazy-loaded global config with TOML + env overrides.

pub use app::{load, load_uncached, CipherConfig, Config, KeyFileConfig};

mod app;
mod defaults;
