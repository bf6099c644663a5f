// src/core/mod.rs
pub mod cipher;
pub mod file;
pub mod report;

pub use cipher::*;
pub use file::*;
pub use report::*;
