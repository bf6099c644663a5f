// tests/core/session.rs
use std::fs;

use cbc_file_cipher::{Config, Session, SymmetricKey};
use tempfile::tempdir;

use crate::common::incrementing;

#[test]
fn test_session_encrypts_and_decrypts_files() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("input.txt");
    let enc = dir.path().join("encrypted.enc");
    let dec = dir.path().join("decrypted.txt");
    fs::write(&input, incrementing(5_000)).unwrap();

    let session = Session::start(&Config::default()).unwrap();
    session.encrypt_file(&input, &enc).unwrap();
    session.decrypt_file(&enc, &dec).unwrap();

    assert_eq!(fs::read(&dec).unwrap(), incrementing(5_000));
    assert_eq!(session.fingerprint().len(), 16);
}

#[test]
fn test_separate_sessions_have_separate_keys() {
    let a = Session::start(&Config::default()).unwrap();
    let b = Session::start(&Config::default()).unwrap();
    assert_ne!(a.key().expose_secret(), b.key().expose_secret());
}

#[test]
fn test_session_with_caller_key_interoperates() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("in");
    let enc = dir.path().join("in.enc");
    let dec = dir.path().join("in.dec");
    fs::write(&input, b"shared key payload").unwrap();

    let writer = Session::with_key(&Config::default(), SymmetricKey::new([9; 32])).unwrap();
    writer.encrypt_file(&input, &enc).unwrap();

    let reader = Session::with_key(&Config::default(), SymmetricKey::new([9; 32])).unwrap();
    reader.decrypt_file(&enc, &dec).unwrap();
    assert_eq!(fs::read(&dec).unwrap(), b"shared key payload");
}

#[test]
fn test_session_rejects_invalid_config() {
    let mut config = Config::default();
    config.cipher.chunk_size = 0;
    assert!(Session::start(&config).is_err());
}
