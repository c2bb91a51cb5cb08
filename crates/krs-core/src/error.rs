//! Error types for krs core.

use thiserror::Error;

/// Errors raised while interpreting key store values.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The token does not name a supported key type.
    #[error("unsupported key type: {0:?}")]
    InvalidKeyType(String),

    /// A permission string was not exactly 24 characters long.
    #[error("invalid permission text length: expected 24, got {0}")]
    InvalidPermissionLength(usize),

    /// A mask had bits set in the reserved positions of a lane.
    #[error("reserved permission bits set: {0:#010x}")]
    ReservedPermissionBits(u32),

    /// The kernel's attribute string did not have the expected shape.
    #[error("malformed key description: {0}")]
    MalformedDescription(String),
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
