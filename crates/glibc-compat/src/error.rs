//! Error types for glibc-compat.
//!
//! The ABI wrappers themselves never construct errors; everything here
//! belongs to the typed Rust surface layered on top of them.

use std::ffi::c_int;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CompatError>;

#[derive(Error, Debug)]
pub enum CompatError {
    #[error("fcntl command {cmd} failed on fd {fd}: {source}")]
    Fcntl {
        fd: c_int,
        cmd: c_int,
        source: std::io::Error,
    },

    #[error("symbol {symbol}@{version} not present in the loaded runtime")]
    MissingVersion { symbol: String, version: String },
}

impl CompatError {
    /// The raw errno carried by a failed forwarded call, if any.
    pub fn raw_os_error(&self) -> Option<i32> {
        match self {
            CompatError::Fcntl { source, .. } => source.raw_os_error(),
            CompatError::MissingVersion { .. } => None,
        }
    }
}
