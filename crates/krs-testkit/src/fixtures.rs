//! Test fixtures and helpers.
//!
//! Common setup code for client tests, over either backend.

use rand::{Rng, RngCore};

use krs::{KeyCtl, KeyHandle, KeyStore, KeyType, MemoryKeyCtl, SecurePayload};

/// A client over the in-memory backend.
pub struct MemoryFixture {
    pub store: KeyStore<MemoryKeyCtl>,
}

impl MemoryFixture {
    /// Create a new fixture whose keys are owned by uid/gid 1000.
    pub fn new() -> Self {
        Self {
            store: KeyStore::new(MemoryKeyCtl::with_owner(1000, 1000)),
        }
    }

    /// The backend, for clock control.
    pub fn ctl(&self) -> &MemoryKeyCtl {
        self.store.ctl()
    }
}

impl Default for MemoryFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// A description no other test run will pick.
pub fn unique_name(prefix: &str) -> String {
    format!("{prefix}-{:016x}", rand::thread_rng().gen::<u64>())
}

/// Add a user key with a copy of `bytes` as its payload.
pub fn add_user_key<K: KeyCtl>(
    store: &KeyStore<K>,
    keyring: KeyHandle,
    name: &str,
    bytes: &[u8],
) -> krs::Result<KeyHandle> {
    let mut buf = bytes.to_vec();
    let mut payload = SecurePayload::new(&mut buf);
    store.add(keyring, KeyType::User, name, Some(&mut payload))
}

/// Add an empty keyring.
pub fn add_keyring<K: KeyCtl>(
    store: &KeyStore<K>,
    keyring: KeyHandle,
    name: &str,
) -> krs::Result<KeyHandle> {
    store.add(keyring, KeyType::Keyring, name, None)
}

/// Add a user key holding a random DH private exponent of `len` bytes.
pub fn add_private_exponent<K: KeyCtl>(
    store: &KeyStore<K>,
    keyring: KeyHandle,
    name: &str,
    len: usize,
) -> krs::Result<KeyHandle> {
    let mut exponent = vec![0u8; len];
    rand::thread_rng().fill_bytes(&mut exponent);
    if let Some(first) = exponent.first_mut() {
        *first |= 0x80;
    }
    add_user_key(store, keyring, name, &exponent)
}

/// Revoke every handle, ignoring failures; for test cleanup.
pub fn revoke_all<K: KeyCtl>(store: &KeyStore<K>, ids: &[KeyHandle]) {
    for &id in ids {
        if let Err(e) = store.revoke(id) {
            tracing::debug!(key = %id, error = %e, "cleanup revoke failed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unique_names_differ() {
        let a = unique_name("krs-test");
        let b = unique_name("krs-test");
        assert_ne!(a, b);
        assert!(a.starts_with("krs-test-"));
        assert_eq!(a.len(), "krs-test-".len() + 16);
    }

    #[test]
    fn test_fixture_keys() {
        let fixture = MemoryFixture::new();
        let ring = add_keyring(&fixture.store, KeyHandle::SESSION_KEYRING, "ring").unwrap();
        let key = add_user_key(&fixture.store, ring, "k", b"payload").unwrap();

        assert_eq!(fixture.store.read(ring).unwrap(), vec![key]);
        assert_eq!(fixture.store.read_payload(key).unwrap(), b"payload");
        assert_eq!(fixture.store.describe(key).unwrap().uid, 1000);
    }

    #[test]
    fn test_private_exponent_has_top_bit() {
        let fixture = MemoryFixture::new();
        let id =
            add_private_exponent(&fixture.store, KeyHandle::SESSION_KEYRING, "x", 24).unwrap();
        let exponent = fixture.store.read_payload(id).unwrap();
        assert_eq!(exponent.len(), 24);
        assert!(exponent[0] & 0x80 != 0);
    }

    #[test]
    fn test_revoke_all_ignores_failures() {
        let fixture = MemoryFixture::new();
        let key = add_user_key(&fixture.store, KeyHandle::SESSION_KEYRING, "k", b"x").unwrap();
        revoke_all(&fixture.store, &[key, KeyHandle::new(9999), key]);
        assert!(fixture.store.describe(key).unwrap_err().is_revoked());
    }
}
