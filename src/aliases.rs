// src/aliases.rs
//! Re-exports secure-gate's ergonomic secret types
//!
//! These are the canonical secret types used throughout cbc-file-cipher.

pub use secure_gate::{dynamic_alias, fixed_alias, SecureConversionsExt};

// Fixed-size secrets
fixed_alias!(SymmetricKey, 32); // 256-bit AES key, zeroized on drop
fixed_alias!(InitVector, 16); // CBC initialization vector, one per encryption

// Dynamic secrets
dynamic_alias!(PlainText, Vec<u8>);
dynamic_alias!(CypherText, Vec<u8>);
dynamic_alias!(RawKeyBytes, Vec<u8>); // key file contents before length check
