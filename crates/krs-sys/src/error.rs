//! Error types for the kernel call boundary.

use std::fmt;
use std::io;

use thiserror::Error;

/// A raw error code returned by the kernel.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Errno(pub i32);

impl Errno {
    pub const ENOENT: Self = Self(libc::ENOENT);
    pub const EACCES: Self = Self(libc::EACCES);
    pub const EINVAL: Self = Self(libc::EINVAL);
    pub const ENOTDIR: Self = Self(libc::ENOTDIR);
    pub const EDEADLK: Self = Self(libc::EDEADLK);
    pub const EOPNOTSUPP: Self = Self(libc::EOPNOTSUPP);
    pub const EOVERFLOW: Self = Self(libc::EOVERFLOW);
    pub const EDQUOT: Self = Self(libc::EDQUOT);
    pub const ENOKEY: Self = Self(libc::ENOKEY);
    pub const EKEYEXPIRED: Self = Self(libc::EKEYEXPIRED);
    pub const EKEYREVOKED: Self = Self(libc::EKEYREVOKED);

    /// The calling thread's last error code.
    pub fn last() -> Self {
        Self(io::Error::last_os_error().raw_os_error().unwrap_or(0))
    }

    pub const fn code(self) -> i32 {
        self.0
    }
}

impl fmt::Debug for Errno {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Errno({})", self.0)
    }
}

impl fmt::Display for Errno {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", io::Error::from_raw_os_error(self.0))
    }
}

/// Errors that can occur at the kernel call boundary.
#[derive(Debug, Error)]
pub enum SysError {
    /// The kernel rejected the request.
    #[error("kernel error: {0}")]
    Kernel(Errno),

    /// A buffer transfer got a size reply it can't reconcile.
    #[error("unexpected size: buffer of {capacity} bytes, kernel reported {reported}")]
    UnexpectedSize { capacity: usize, reported: usize },

    /// An argument can't be passed to the kernel.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A kernel reply could not be interpreted.
    #[error("core error: {0}")]
    Core(#[from] krs_core::CoreError),
}

impl SysError {
    /// The kernel error code, if this is a kernel error.
    pub fn errno(&self) -> Option<Errno> {
        match self {
            SysError::Kernel(errno) => Some(*errno),
            _ => None,
        }
    }

    /// The key (or keyring) does not exist, or no longer exists.
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

impl From<Errno> for SysError {
    fn from(errno: Errno) -> Self {
        SysError::Kernel(errno)
    }
}

/// Result type for kernel calls.
pub type Result<T> = std::result::Result<T, SysError>;
