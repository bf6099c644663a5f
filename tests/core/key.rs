// tests/core/key.rs
use cbc_file_cipher::key_ops::{key_from_slice, key_representations};
use cbc_file_cipher::{generate_key, key_fingerprint, CoreError, SymmetricKey};

#[test]
fn test_generate_key_is_random_and_32_bytes() {
    let key1 = generate_key().unwrap();
    let key2 = generate_key().unwrap();
    assert_eq!(key1.expose_secret().len(), 32);
    assert_ne!(
        key1.expose_secret().as_slice(),
        key2.expose_secret().as_slice()
    );

    // Statistical distinctness: matching positions should be rare (~1/256 each)
    let same = key1
        .expose_secret()
        .iter()
        .zip(key2.expose_secret().iter())
        .filter(|(a, b)| a == b)
        .count();
    assert!(same < 8, "{same} of 32 bytes coincide");
}

#[test]
fn test_generate_key_fills_every_byte() {
    // A partially filled buffer would leave a zero tail
    let keys: Vec<SymmetricKey> = (0..16).map(|_| generate_key().unwrap()).collect();
    for pos in 0..32 {
        assert!(
            keys.iter().any(|k| k.expose_secret()[pos] != 0),
            "byte {pos} was zero in every key"
        );
    }
}

#[test]
fn test_key_representations_are_correct_and_consistent() {
    let key = SymmetricKey::new([0x42; 32]);
    let repr = key_representations(&key);

    assert_eq!(
        repr.hex,
        "4242424242424242424242424242424242424242424242424242424242424242"
    );
    assert_eq!(repr.base64, "QkJCQkJCQkJCQkJCQkJCQkJCQkJCQkJCQkJCQkJCQkI=");
    assert_eq!(
        repr.base64url_no_pad,
        "QkJCQkJCQkJCQkJCQkJCQkJCQkJCQkJCQkJCQkJCQkI"
    );
}

#[test]
fn test_fingerprint_is_short_stable_and_key_specific() {
    let a = SymmetricKey::new([0x01; 32]);
    let b = SymmetricKey::new([0x02; 32]);

    let fp = key_fingerprint(&a);
    assert_eq!(fp.len(), 16);
    assert!(fp.chars().all(|c| c.is_ascii_hexdigit()));
    assert_eq!(fp, key_fingerprint(&SymmetricKey::new([0x01; 32])));
    assert_ne!(fp, key_fingerprint(&b));
}

#[test]
fn test_key_from_slice_checks_length() {
    let bytes: Vec<u8> = (0..32).collect();
    let key = key_from_slice(&bytes).unwrap();
    assert_eq!(key.expose_secret().as_slice(), bytes.as_slice());
    assert!(matches!(
        key_from_slice(&[7u8; 31]),
        Err(CoreError::InvalidKeyLength {
            expected: 32,
            actual: 31
        })
    ));
    assert!(matches!(
        key_from_slice(&[]),
        Err(CoreError::InvalidKeyLength { actual: 0, .. })
    ));
}
