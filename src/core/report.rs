// src/core/report.rs
//! Provider diagnostics → structured records
//!
//! OpenSSL keeps a thread-local queue of errors. Anything left in it leaks
//! into the next unrelated failure, so every failing step drains it here
//! before returning.

use std::fmt;

use openssl::error::{Error as ProviderError, ErrorStack};

/// One entry popped from the provider's error queue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorRecord {
    pub library: String,
    pub reason: String,
    pub file: String,
    pub function: String,
    pub line: u32,
    pub code: u64,
}

impl From<&ProviderError> for ErrorRecord {
    fn from(err: &ProviderError) -> Self {
        ErrorRecord {
            library: err.library().unwrap_or("unknown").to_owned(),
            reason: err.reason().unwrap_or("unknown").to_owned(),
            file: err.file().to_string(),
            function: err
                .function()
                .map(|f| f.to_string())
                .unwrap_or_else(|| "unknown".to_owned()),
            line: err.line(),
            code: u64::from(err.code()),
        }
    }
}

impl fmt::Display for ErrorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}:{}:{}:{}",
            self.library, self.reason, self.file, self.function, self.line
        )
    }
}

/// Records in the order the provider queue yielded them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorRecords(Vec<ErrorRecord>);

impl ErrorRecords {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ErrorRecord> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<ErrorRecord> {
        self.0
    }

    /// Stack handed back by a failing provider call, plus whatever is still queued
    pub(crate) fn collect(stack: &ErrorStack) -> Self {
        let mut records = ErrorRecords::from(stack);
        records.0.extend(drain_errors().0);
        records
    }
}

impl From<&ErrorStack> for ErrorRecords {
    fn from(stack: &ErrorStack) -> Self {
        ErrorRecords(stack.errors().iter().map(ErrorRecord::from).collect())
    }
}

impl From<Vec<ErrorRecord>> for ErrorRecords {
    fn from(records: Vec<ErrorRecord>) -> Self {
        ErrorRecords(records)
    }
}

impl IntoIterator for ErrorRecords {
    type Item = ErrorRecord;
    type IntoIter = std::vec::IntoIter<ErrorRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a ErrorRecords {
    type Item = &'a ErrorRecord;
    type IntoIter = std::slice::Iter<'a, ErrorRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for ErrorRecords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("no provider diagnostics");
        }
        for (i, record) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{record}")?;
        }
        Ok(())
    }
}

/// Pop every queued provider error on this thread, clearing the queue
pub fn drain_errors() -> ErrorRecords {
    ErrorRecords::from(&ErrorStack::get())
}
