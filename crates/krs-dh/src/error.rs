//! Error types for the DH module.

use thiserror::Error;

/// Errors that can occur during DH operations.
#[derive(Debug, Error)]
pub enum DhError {
    /// No standard group exists for the requested prime size.
    #[error("unsupported DH prime size: {0} bits")]
    UnsupportedSize(u32),

    /// Kernel call error.
    #[error("sys error: {0}")]
    Sys(#[from] krs_sys::SysError),
}

/// Result type for DH operations.
pub type Result<T> = std::result::Result<T, DhError>;
