//! Error types for the client.

use krs_core::CoreError;
use krs_dh::DhError;
use krs_sys::{Errno, SysError};
use thiserror::Error;

/// Errors that can occur during client operations.
#[derive(Debug, Error)]
pub enum KrsError {
    /// A value could not be encoded or parsed.
    #[error("invalid value: {0}")]
    Core(#[from] CoreError),

    /// Kernel call error.
    #[error("sys error: {0}")]
    Sys(#[from] SysError),

    /// DH error.
    #[error("dh error: {0}")]
    Dh(#[from] DhError),

    /// The payload was already handed to the kernel or scrubbed.
    #[error("payload already consumed")]
    PayloadAlreadyConsumed,
}

/// The broad class of a [`KrsError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Bad input: key type token, permission text, reserved bits, DH size,
    /// or a string the kernel can't take.
    InvalidArgument,
    PayloadAlreadyConsumed,
    /// A kernel reply did not match the buffer sized for it.
    UnexpectedSize,
    /// The kernel refused the request.
    Kernel,
}

impl KrsError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            KrsError::Core(_) => ErrorKind::InvalidArgument,
            KrsError::PayloadAlreadyConsumed => ErrorKind::PayloadAlreadyConsumed,
            KrsError::Sys(e) | KrsError::Dh(DhError::Sys(e)) => sys_kind(e),
            KrsError::Dh(DhError::UnsupportedSize(_)) => ErrorKind::InvalidArgument,
        }
    }

    /// The kernel error code, if the kernel refused the request.
    pub fn errno(&self) -> Option<Errno> {
        match self {
            KrsError::Sys(e) | KrsError::Dh(DhError::Sys(e)) => e.errno(),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.errno() == Some(Errno::ENOKEY)
    }

    pub fn is_permission_denied(&self) -> bool {
        self.errno() == Some(Errno::EACCES)
    }

    pub fn is_expired(&self) -> bool {
        self.errno() == Some(Errno::EKEYEXPIRED)
    }

    pub fn is_revoked(&self) -> bool {
        self.errno() == Some(Errno::EKEYREVOKED)
    }
}

fn sys_kind(e: &SysError) -> ErrorKind {
    match e {
        SysError::Kernel(_) => ErrorKind::Kernel,
        SysError::UnexpectedSize { .. } => ErrorKind::UnexpectedSize,
        SysError::InvalidArgument(_) | SysError::Core(_) => ErrorKind::InvalidArgument,
    }
}

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, KrsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        let err: KrsError = CoreError::InvalidPermissionLength(3).into();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);

        let err: KrsError = DhError::UnsupportedSize(1024).into();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);

        let err: KrsError = SysError::UnexpectedSize {
            capacity: 8,
            reported: 12,
        }
        .into();
        assert_eq!(err.kind(), ErrorKind::UnexpectedSize);

        let err: KrsError = DhError::Sys(SysError::Kernel(Errno::EACCES)).into();
        assert_eq!(err.kind(), ErrorKind::Kernel);
        assert!(err.is_permission_denied());

        assert_eq!(
            KrsError::PayloadAlreadyConsumed.kind(),
            ErrorKind::PayloadAlreadyConsumed
        );
    }

    #[test]
    fn test_errno_only_for_kernel_errors() {
        let err: KrsError = SysError::Kernel(Errno::ENOKEY).into();
        assert!(err.is_not_found());
        assert!(!err.is_expired());
        assert_eq!(KrsError::PayloadAlreadyConsumed.errno(), None);
    }
}
