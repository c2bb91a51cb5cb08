//! KeyCtl trait: the narrow interface to the kernel key retention service.
//!
//! Every method is a single kernel request. Nothing is cached: the key
//! namespace is shared with every other process and can change between two
//! calls (expiry, revocation by another actor).

use krs_core::{DhComputeParams, KeyHandle, KeyPermissions, KeyType};

use crate::error::Result;

/// The kernel call surface used by the client.
///
/// Implementations are [`LinuxKeyCtl`](crate::LinuxKeyCtl), which issues
/// the real system calls, and [`MemoryKeyCtl`](crate::MemoryKeyCtl), which
/// emulates them for tests.
///
/// # Buffer replies
///
/// `describe`, `read` and `dh_compute` copy as much of the reply as fits in
/// `buffer` and return the full length of the reply. A return value larger
/// than `buffer.len()` therefore means the buffer was too small. Passing an
/// empty buffer only asks for the length.
pub trait KeyCtl: Send + Sync {
    // ─────────────────────────────────────────────────────────────────────────
    // Creation and lookup
    // ─────────────────────────────────────────────────────────────────────────

    /// Create a key in `keyring`, or update the payload of a matching one.
    fn add_key(
        &self,
        key_type: KeyType,
        description: &str,
        payload: &[u8],
        keyring: KeyHandle,
    ) -> Result<KeyHandle>;

    /// Search `keyring` and its descendants for a key of the given type and
    /// description. When found and `destination` is not
    /// [`KeyHandle::NONE`], link the key there.
    fn search(
        &self,
        keyring: KeyHandle,
        key_type: KeyType,
        description: &str,
        destination: KeyHandle,
    ) -> Result<KeyHandle>;

    /// Resolve a well-known alias to the real keyring id.
    fn get_keyring_id(&self, id: KeyHandle, create: bool) -> Result<KeyHandle>;

    // ─────────────────────────────────────────────────────────────────────────
    // Buffer replies
    // ─────────────────────────────────────────────────────────────────────────

    /// The `type;uid;gid;perm;description` string, NUL terminated.
    fn describe(&self, id: KeyHandle, buffer: &mut [u8]) -> Result<usize>;

    /// The payload of a key; for a keyring, the linked handles as native
    /// endian 32-bit integers.
    fn read(&self, id: KeyHandle, buffer: &mut [u8]) -> Result<usize>;

    /// Compute `base ^ private mod prime` from three resident keys.
    fn dh_compute(&self, params: &DhComputeParams, buffer: &mut [u8]) -> Result<usize>;

    // ─────────────────────────────────────────────────────────────────────────
    // Mutation
    // ─────────────────────────────────────────────────────────────────────────

    fn update(&self, id: KeyHandle, payload: &[u8]) -> Result<()>;

    fn set_perm(&self, id: KeyHandle, perm: KeyPermissions) -> Result<()>;

    /// Set the expiry in seconds from now; zero clears it.
    fn set_timeout(&self, id: KeyHandle, seconds: u32) -> Result<()>;

    fn link(&self, id: KeyHandle, keyring: KeyHandle) -> Result<()>;

    fn unlink(&self, id: KeyHandle, keyring: KeyHandle) -> Result<()>;

    /// Unlink everything from a keyring.
    fn clear(&self, keyring: KeyHandle) -> Result<()>;

    // ─────────────────────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────────────────────

    /// Mark a key unusable. It stays linked until garbage collected.
    fn revoke(&self, id: KeyHandle) -> Result<()>;

    /// Mark a key invalid and have it removed from all keyrings promptly.
    fn invalidate(&self, id: KeyHandle) -> Result<()>;
}

impl<K: KeyCtl + ?Sized> KeyCtl for &K {
    fn add_key(
        &self,
        key_type: KeyType,
        description: &str,
        payload: &[u8],
        keyring: KeyHandle,
    ) -> Result<KeyHandle> {
        (**self).add_key(key_type, description, payload, keyring)
    }

    fn search(
        &self,
        keyring: KeyHandle,
        key_type: KeyType,
        description: &str,
        destination: KeyHandle,
    ) -> Result<KeyHandle> {
        (**self).search(keyring, key_type, description, destination)
    }

    fn get_keyring_id(&self, id: KeyHandle, create: bool) -> Result<KeyHandle> {
        (**self).get_keyring_id(id, create)
    }

    fn describe(&self, id: KeyHandle, buffer: &mut [u8]) -> Result<usize> {
        (**self).describe(id, buffer)
    }

    fn read(&self, id: KeyHandle, buffer: &mut [u8]) -> Result<usize> {
        (**self).read(id, buffer)
    }

    fn dh_compute(&self, params: &DhComputeParams, buffer: &mut [u8]) -> Result<usize> {
        (**self).dh_compute(params, buffer)
    }

    fn update(&self, id: KeyHandle, payload: &[u8]) -> Result<()> {
        (**self).update(id, payload)
    }

    fn set_perm(&self, id: KeyHandle, perm: KeyPermissions) -> Result<()> {
        (**self).set_perm(id, perm)
    }

    fn set_timeout(&self, id: KeyHandle, seconds: u32) -> Result<()> {
        (**self).set_timeout(id, seconds)
    }

    fn link(&self, id: KeyHandle, keyring: KeyHandle) -> Result<()> {
        (**self).link(id, keyring)
    }

    fn unlink(&self, id: KeyHandle, keyring: KeyHandle) -> Result<()> {
        (**self).unlink(id, keyring)
    }

    fn clear(&self, keyring: KeyHandle) -> Result<()> {
        (**self).clear(keyring)
    }

    fn revoke(&self, id: KeyHandle) -> Result<()> {
        (**self).revoke(id)
    }

    fn invalidate(&self, id: KeyHandle) -> Result<()> {
        (**self).invalidate(id)
    }
}
