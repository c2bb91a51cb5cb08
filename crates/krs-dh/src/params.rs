//! DH parameter handles.

use serde::{Deserialize, Serialize};

use krs_core::{DhComputeParams, KeyHandle};
use krs_sys::KeyCtl;

use crate::error::Result;

/// Handles for one DH computation, plus the expected result size.
///
/// The keys behind the handles stay in the kernel; only the handles travel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DhParameters {
    pub private_key: KeyHandle,
    pub prime: KeyHandle,
    pub base: KeyHandle,
    /// Result buffer size in bytes, normally the prime's length.
    pub size: usize,
}

impl DhParameters {
    pub fn new(private_key: KeyHandle, prime: KeyHandle, base: KeyHandle, size: usize) -> Self {
        Self {
            private_key,
            prime,
            base,
            size,
        }
    }

    /// The parameter block passed to the kernel.
    pub fn handles(&self) -> DhComputeParams {
        DhComputeParams::new(self.private_key, self.prime, self.base)
    }
}

/// A keyring holding the prime and generator of one standard group.
///
/// The caller owns all three handles and releases them with
/// [`DhKeySet::release`] or individually.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DhKeySet {
    pub keyring: KeyHandle,
    pub prime: KeyHandle,
    pub base: KeyHandle,
}

impl DhKeySet {
    /// Parameters for computing with `private_key` against this group's
    /// generator, i.e. deriving the public value.
    pub fn public_parameters(&self, private_key: KeyHandle, size: usize) -> DhParameters {
        DhParameters::new(private_key, self.prime, self.base, size)
    }

    /// Revoke the prime, the base and the keyring.
    ///
    /// Every handle is attempted; the first error is returned.
    pub fn release<K: KeyCtl>(&self, ctl: &K) -> Result<()> {
        let mut first = None;
        for id in [self.prime, self.base, self.keyring] {
            if let Err(e) = ctl.revoke(id) {
                tracing::warn!(key = %id, error = %e, "failed to revoke DH key set member");
                first.get_or_insert(e);
            }
        }
        match first {
            Some(e) => Err(e.into()),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handles_preserve_order() {
        let params = DhParameters::new(
            KeyHandle::new(7),
            KeyHandle::new(8),
            KeyHandle::new(9),
            192,
        );
        let block = params.handles();
        assert_eq!(block.private, KeyHandle::new(7));
        assert_eq!(block.prime, KeyHandle::new(8));
        assert_eq!(block.base, KeyHandle::new(9));
    }

    #[test]
    fn test_public_parameters() {
        let set = DhKeySet {
            keyring: KeyHandle::new(1),
            prime: KeyHandle::new(2),
            base: KeyHandle::new(3),
        };
        let params = set.public_parameters(KeyHandle::new(4), 256);
        let expected = DhParameters::new(
            KeyHandle::new(4),
            KeyHandle::new(2),
            KeyHandle::new(3),
            256,
        );
        assert_eq!(params, expected);
    }
}
