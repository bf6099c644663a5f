// tests/core/report.rs
use cbc_file_cipher::{drain_errors, CoreError, ErrorRecord, ErrorRecords};

use crate::common::{engine, fixed_iv, fixed_key};

fn record(reason: &str) -> ErrorRecord {
    ErrorRecord {
        library: "digital envelope routines".into(),
        reason: reason.into(),
        file: "crypto/evp/evp_enc.c".into(),
        function: "EVP_DecryptFinal_ex".into(),
        line: 612,
        code: 0x1c800064,
    }
}

#[test]
fn test_drain_errors_is_empty_when_nothing_queued() {
    assert!(drain_errors().is_empty());
    // Draining twice is harmless
    assert!(drain_errors().is_empty());
}

#[test]
fn test_record_display_matches_colon_layout() {
    assert_eq!(
        record("bad decrypt").to_string(),
        "digital envelope routines:bad decrypt:crypto/evp/evp_enc.c:EVP_DecryptFinal_ex:612"
    );
}

#[test]
fn test_records_display_one_line_each_in_order() {
    let records = ErrorRecords::from(vec![record("first"), record("second")]);
    let text = records.to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].contains(":first:"));
    assert!(lines[1].contains(":second:"));
    assert_eq!(ErrorRecords::default().to_string(), "no provider diagnostics");
}

#[test]
fn test_failure_records_describe_the_provider_error() {
    let engine = engine(16);
    let Err(err) = engine.decrypt_to_vec(&[0u8; 20], &fixed_key(3), &fixed_iv(4)) else {
        panic!("garbage ciphertext decrypted");
    };
    let records = match err {
        CoreError::FinalizeFailure { records } => records,
        other => panic!("expected FinalizeFailure, got {other}"),
    };
    let first = records.iter().next().unwrap();
    assert!(!first.reason.is_empty());
    assert!(!first.file.is_empty());
    assert_ne!(first.code, 0);
    assert!(drain_errors().is_empty());
}
