//! The key store client.
//!
//! [`KeyStore`] wraps a [`KeyCtl`] backend with typed operations: payloads go
//! in as [`SecurePayload`]s, replies of unknown length are fetched with the
//! transfer helpers, and descriptions come back parsed.

use krs_core::{CoreError, Description, KeyHandle, KeyPermissions, KeyType};
use krs_dh::{DhKeySet, DhParameters, PrimeSize};
use krs_sys::{transfer, KeyCtl};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::payload::SecurePayload;

/// Configuration for the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// First buffer size tried when reading keyrings and payloads.
    pub read_capacity: usize,
    /// First buffer size tried when describing a key.
    pub describe_capacity: usize,
    /// Keyring that receives generated DH key sets.
    pub dh_keyring: KeyHandle,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            read_capacity: 64,
            describe_capacity: 256,
            dh_keyring: KeyHandle::SESSION_KEYRING,
        }
    }
}

/// Typed access to the kernel key retention service.
///
/// The client holds no key state of its own: every method is one kernel
/// request (two for replies that outgrow the first buffer), and the answer
/// reflects the namespace at that moment.
pub struct KeyStore<K: KeyCtl> {
    ctl: K,
    config: ClientConfig,
}

#[cfg(target_os = "linux")]
impl KeyStore<krs_sys::LinuxKeyCtl> {
    /// A client for the running kernel with the default configuration.
    pub fn linux() -> Self {
        Self::new(krs_sys::LinuxKeyCtl::new())
    }
}

impl<K: KeyCtl> KeyStore<K> {
    pub fn new(ctl: K) -> Self {
        Self::with_config(ctl, ClientConfig::default())
    }

    pub fn with_config(ctl: K, config: ClientConfig) -> Self {
        Self { ctl, config }
    }

    /// The backend.
    pub fn ctl(&self) -> &K {
        &self.ctl
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Keys and keyrings
    // ─────────────────────────────────────────────────────────────────────────

    /// Add a key to `keyring`.
    ///
    /// A user key consumes `payload`; a keyring leaves it untouched. Adding a
    /// user key whose description already exists in `keyring` updates it.
    pub fn add(
        &self,
        keyring: KeyHandle,
        key_type: KeyType,
        name: &str,
        payload: Option<&mut SecurePayload<'_>>,
    ) -> Result<KeyHandle> {
        let bytes: &[u8] = match (key_type, payload) {
            (KeyType::User, Some(payload)) => payload.consume()?,
            _ => &[],
        };
        let id = self.ctl.add_key(key_type, name, bytes, keyring)?;
        tracing::debug!(%keyring, %key_type, name, key = %id, "added key");
        Ok(id)
    }

    /// Replace the payload of a user key.
    pub fn update(&self, id: KeyHandle, payload: &mut SecurePayload<'_>) -> Result<()> {
        let bytes = payload.consume()?;
        self.ctl.update(id, bytes)?;
        tracing::debug!(key = %id, "updated key");
        Ok(())
    }

    /// Fetch and parse the attributes of a key.
    pub fn describe(&self, id: KeyHandle) -> Result<Description> {
        let mut raw = transfer::fetch_with_capacity(self.config.describe_capacity, |buf| {
            self.ctl.describe(id, buf)
        })?;
        if raw.last() == Some(&0) {
            raw.pop();
        }
        let text = String::from_utf8(raw).map_err(|e| {
            CoreError::MalformedDescription(format!("description of {id} is not UTF-8: {e}"))
        })?;
        Ok(text.parse::<Description>()?)
    }

    /// The handles linked into a keyring, in link order.
    pub fn read(&self, keyring: KeyHandle) -> Result<Vec<KeyHandle>> {
        let raw = transfer::fetch_with_capacity(self.config.read_capacity, |buf| {
            self.ctl.read(keyring, buf)
        })?;
        Ok(raw
            .chunks_exact(4)
            .map(|c| KeyHandle::new(i32::from_ne_bytes([c[0], c[1], c[2], c[3]])))
            .collect())
    }

    /// The payload of a user key.
    pub fn read_payload(&self, id: KeyHandle) -> Result<Vec<u8>> {
        let payload = transfer::fetch_with_capacity(self.config.read_capacity, |buf| {
            self.ctl.read(id, buf)
        })?;
        Ok(payload)
    }

    /// Search `keyring` recursively. When found and `destination` is not
    /// [`KeyHandle::NONE`], the key is also linked into `destination`.
    pub fn search(
        &self,
        keyring: KeyHandle,
        key_type: KeyType,
        name: &str,
        destination: KeyHandle,
    ) -> Result<KeyHandle> {
        let id = self.ctl.search(keyring, key_type, name, destination)?;
        tracing::debug!(%keyring, %key_type, name, key = %id, "found key");
        Ok(id)
    }

    /// Resolve a well-known keyring alias to its real handle.
    pub fn keyring_id(&self, special: KeyHandle, create: bool) -> Result<KeyHandle> {
        Ok(self.ctl.get_keyring_id(special, create)?)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Attributes and links
    // ─────────────────────────────────────────────────────────────────────────

    pub fn set_permission(&self, id: KeyHandle, perm: KeyPermissions) -> Result<()> {
        Ok(self.ctl.set_perm(id, perm)?)
    }

    /// Expire the key `seconds` from now; zero removes the expiry.
    pub fn set_timeout(&self, id: KeyHandle, seconds: u32) -> Result<()> {
        Ok(self.ctl.set_timeout(id, seconds)?)
    }

    pub fn link(&self, id: KeyHandle, keyring: KeyHandle) -> Result<()> {
        Ok(self.ctl.link(id, keyring)?)
    }

    pub fn unlink(&self, id: KeyHandle, keyring: KeyHandle) -> Result<()> {
        Ok(self.ctl.unlink(id, keyring)?)
    }

    /// Unlink everything from a keyring.
    pub fn clear(&self, keyring: KeyHandle) -> Result<()> {
        Ok(self.ctl.clear(keyring)?)
    }

    pub fn revoke(&self, id: KeyHandle) -> Result<()> {
        Ok(self.ctl.revoke(id)?)
    }

    pub fn invalidate(&self, id: KeyHandle) -> Result<()> {
        Ok(self.ctl.invalidate(id)?)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Diffie-Hellman
    // ─────────────────────────────────────────────────────────────────────────

    /// Compute `base ^ private mod prime` in the kernel.
    pub fn compute_dh(
        &self,
        private_key: KeyHandle,
        prime: KeyHandle,
        base: KeyHandle,
    ) -> Result<Vec<u8>> {
        Ok(krs_dh::compute_shared(&self.ctl, private_key, prime, base)?)
    }

    /// Like [`compute_dh`](Self::compute_dh) with a known result size.
    pub fn compute_dh_fixed(&self, params: &DhParameters) -> Result<Vec<u8>> {
        Ok(krs_dh::compute_fixed(&self.ctl, params)?)
    }

    /// Load the standard group with a `bits`-bit prime into a new keyring
    /// below the configured DH keyring.
    pub fn generate_dh_key_set(&self, bits: u32) -> Result<DhKeySet> {
        let size = PrimeSize::from_bits(bits)?;
        Ok(krs_dh::generate_parameter_key_set(
            &self.ctl,
            size,
            self.config.dh_keyring,
        )?)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::error::{ErrorKind, KrsError};
    use krs_sys::{Errno, MemoryKeyCtl};
    use rand::RngCore;

    const SESSION: KeyHandle = KeyHandle::SESSION_KEYRING;

    fn store() -> KeyStore<MemoryKeyCtl> {
        KeyStore::new(MemoryKeyCtl::with_owner(1000, 1000))
    }

    fn add_user(
        store: &KeyStore<MemoryKeyCtl>,
        keyring: KeyHandle,
        name: &str,
        bytes: &[u8],
    ) -> KeyHandle {
        let mut buf = bytes.to_vec();
        let mut payload = SecurePayload::new(&mut buf);
        store
            .add(keyring, KeyType::User, name, Some(&mut payload))
            .unwrap()
    }

    fn add_keyring(store: &KeyStore<MemoryKeyCtl>, keyring: KeyHandle, name: &str) -> KeyHandle {
        store.add(keyring, KeyType::Keyring, name, None).unwrap()
    }

    #[test]
    fn test_config_defaults_fill_missing_fields() {
        let config: ClientConfig = serde_json::from_str(r#"{"read_capacity": 16}"#).unwrap();
        assert_eq!(config.read_capacity, 16);
        assert_eq!(config.describe_capacity, 256);
        assert_eq!(config.dh_keyring, SESSION);
    }

    #[test]
    fn test_add_and_describe() {
        let store = store();
        let id = add_user(&store, SESSION, "alpha", b"secret");

        let desc = store.describe(id).unwrap();
        assert_eq!(desc.key_type, KeyType::User);
        assert_eq!(desc.uid, 1000);
        assert_eq!(desc.gid, 1000);
        assert_eq!(desc.permissions.bits(), 0x3f01_0000);
        assert_eq!(desc.name, "alpha");
    }

    #[test]
    fn test_add_consumes_payload() {
        let store = store();
        let mut buf = *b"once";
        let mut payload = SecurePayload::new(&mut buf);
        store
            .add(SESSION, KeyType::User, "first", Some(&mut payload))
            .unwrap();
        assert!(payload.is_consumed());

        let err = store
            .add(SESSION, KeyType::User, "second", Some(&mut payload))
            .unwrap_err();
        assert!(matches!(err, KrsError::PayloadAlreadyConsumed));
        assert_eq!(err.kind(), ErrorKind::PayloadAlreadyConsumed);
        assert!(store
            .search(SESSION, KeyType::User, "second", KeyHandle::NONE)
            .unwrap_err()
            .is_not_found());
    }

    #[test]
    fn test_keyring_ignores_payload() {
        let store = store();
        let mut buf = *b"unused";
        let mut payload = SecurePayload::new(&mut buf);
        store
            .add(SESSION, KeyType::Keyring, "ring", Some(&mut payload))
            .unwrap();
        assert!(!payload.is_consumed());
    }

    #[test]
    fn test_update_grows_payload() {
        let store = store();
        let id = add_user(&store, SESSION, "grow", &[1, 2, 3, 4, 5]);
        assert_eq!(store.read_payload(id).unwrap().len(), 5);

        let mut buf = [1u8, 2, 3, 4, 5, 6];
        let mut payload = SecurePayload::new(&mut buf);
        store.update(id, &mut payload).unwrap();
        assert_eq!(store.read_payload(id).unwrap(), vec![1, 2, 3, 4, 5, 6]);

        assert!(matches!(
            store.update(id, &mut payload),
            Err(KrsError::PayloadAlreadyConsumed)
        ));
    }

    #[test]
    fn test_read_regrows_past_capacity() {
        let store = KeyStore::with_config(
            MemoryKeyCtl::new(),
            ClientConfig {
                read_capacity: 8,
                ..ClientConfig::default()
            },
        );
        let ring = add_keyring(&store, SESSION, "many");
        let ids: Vec<KeyHandle> = (0..20)
            .map(|i| add_user(&store, ring, &format!("k{i}"), b"x"))
            .collect();
        assert_eq!(store.read(ring).unwrap(), ids);

        let big = vec![0x5au8; 1000];
        let id = add_user(&store, SESSION, "big", &big);
        assert_eq!(store.read_payload(id).unwrap(), big);
    }

    #[test]
    fn test_empty_keyring() {
        let store = store();
        let ring = add_keyring(&store, SESSION, "empty");
        assert!(store.read(ring).unwrap().is_empty());
    }

    #[test]
    fn test_describe_name_with_separator() {
        let store = store();
        let id = add_user(&store, SESSION, "a;b;c", b"x");
        assert_eq!(store.describe(id).unwrap().name, "a;b;c");
    }

    #[test]
    fn test_describe_small_capacity() {
        let store = KeyStore::with_config(
            MemoryKeyCtl::new(),
            ClientConfig {
                describe_capacity: 4,
                ..ClientConfig::default()
            },
        );
        let name = "a-rather-long-description-for-a-key";
        let id = add_user(&store, SESSION, name, b"x");
        assert_eq!(store.describe(id).unwrap().name, name);
    }

    #[test]
    fn test_permission_round_trip() {
        let store = store();
        let id = add_user(&store, SESSION, "perm", b"x");
        let perm = KeyPermissions::new(0x3f21_1705).unwrap();
        store.set_permission(id, perm).unwrap();

        let desc = store.describe(id).unwrap();
        assert_eq!(desc.permissions, perm);
        assert_eq!(desc.permissions.to_string(), "alswrva----v-l-wrv---w-v");
    }

    #[test]
    fn test_permission_denied() {
        let store = store();
        let id = add_user(&store, SESSION, "locked", b"x");
        store.set_permission(id, KeyPermissions::POS_VIEW).unwrap();

        let err = store.read_payload(id).unwrap_err();
        assert!(err.is_permission_denied());
        assert_eq!(err.kind(), ErrorKind::Kernel);
        // The regrow path does not turn kernel errors into size errors.
        assert_ne!(err.kind(), ErrorKind::UnexpectedSize);
    }

    #[test]
    fn test_search_and_link_destination() {
        let store = store();
        let outer = add_keyring(&store, SESSION, "outer");
        let inner = add_keyring(&store, outer, "inner");
        let key = add_user(&store, inner, "nested", b"x");
        let dest = add_keyring(&store, SESSION, "dest");

        let found = store
            .search(SESSION, KeyType::User, "nested", KeyHandle::NONE)
            .unwrap();
        assert_eq!(found, key);
        assert!(store.read(dest).unwrap().is_empty());

        store.search(SESSION, KeyType::User, "nested", dest).unwrap();
        assert_eq!(store.read(dest).unwrap(), vec![key]);
    }

    #[test]
    fn test_timeout() {
        let store = store();
        let id = add_user(&store, SESSION, "short", b"x");
        store.set_timeout(id, 2).unwrap();
        assert!(store.describe(id).is_ok());

        store.ctl().advance(Duration::from_secs(3));
        let err = store.describe(id).unwrap_err();
        assert!(err.is_expired());
    }

    #[test]
    fn test_link_unlink_clear() {
        let store = store();
        let ring = add_keyring(&store, SESSION, "ring");
        let key = add_user(&store, SESSION, "shared", b"x");

        store.link(key, ring).unwrap();
        assert_eq!(store.read(ring).unwrap(), vec![key]);
        store.unlink(key, ring).unwrap();
        assert!(store.read(ring).unwrap().is_empty());

        store.link(key, ring).unwrap();
        store.clear(ring).unwrap();
        assert!(store.read(ring).unwrap().is_empty());
        // Still reachable from the session keyring.
        assert!(store.describe(key).is_ok());
    }

    #[test]
    fn test_revoke_and_invalidate() {
        let store = store();
        let a = add_user(&store, SESSION, "a", b"x");
        let b = add_user(&store, SESSION, "b", b"x");

        store.revoke(a).unwrap();
        assert!(store.describe(a).unwrap_err().is_revoked());

        store.invalidate(b).unwrap();
        assert!(store.describe(b).unwrap_err().is_not_found());

        let session = store.keyring_id(SESSION, false).unwrap();
        assert_eq!(store.read(session).unwrap(), vec![a]);
    }

    #[test]
    fn test_keyring_id() {
        let store = store();
        assert!(store
            .keyring_id(KeyHandle::USER_KEYRING, false)
            .unwrap_err()
            .is_not_found());
        let id = store.keyring_id(KeyHandle::USER_KEYRING, true).unwrap();
        assert!(!id.is_special());
        assert_eq!(store.describe(id).unwrap().key_type, KeyType::Keyring);
    }

    #[test]
    fn test_empty_description_is_rejected() {
        let store = store();
        let err = store
            .add(SESSION, KeyType::Keyring, "", None)
            .unwrap_err();
        assert_eq!(err.errno(), Some(Errno::EINVAL));
    }

    #[test]
    fn test_dh_key_set() {
        let store = store();
        let set = store.generate_dh_key_set(1536).unwrap();
        assert_eq!(store.read_payload(set.prime).unwrap().len(), 192);

        let session = store.keyring_id(SESSION, false).unwrap();
        assert_eq!(store.read(session).unwrap(), vec![set.keyring]);
        let mut members = store.read(set.keyring).unwrap();
        members.sort();
        let mut expected = vec![set.prime, set.base];
        expected.sort();
        assert_eq!(members, expected);

        // Each handle is revoked on its own.
        store.revoke(set.prime).unwrap();
        assert!(store.describe(set.base).is_ok());
        store.revoke(set.base).unwrap();
        assert!(store.describe(set.keyring).is_ok());
        store.revoke(set.keyring).unwrap();
        assert!(store.describe(set.keyring).unwrap_err().is_revoked());
    }

    #[test]
    fn test_dh_unsupported_size() {
        let store = store();
        let err = store.generate_dh_key_set(1024).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
        assert!(store.ctl().is_empty());
    }

    #[test]
    fn test_dh_exchange() {
        let store = store();
        let set = store.generate_dh_key_set(2048).unwrap();

        let private = |name: &str| {
            let mut exponent = vec![0u8; 32];
            rand::thread_rng().fill_bytes(&mut exponent);
            exponent[0] |= 0x01;
            add_user(&store, SESSION, name, &exponent)
        };
        let a = private("alice");
        let b = private("bob");

        let public_a = store.compute_dh(a, set.prime, set.base).unwrap();
        let public_b = store
            .compute_dh_fixed(&set.public_parameters(b, 256))
            .unwrap();
        let public_a = add_user(&store, SESSION, "alice-public", &public_a);
        let public_b = add_user(&store, SESSION, "bob-public", &public_b);

        let shared_a = store.compute_dh(a, set.prime, public_b).unwrap();
        let shared_b = store.compute_dh(b, set.prime, public_a).unwrap();
        assert_eq!(shared_a.len(), 256);
        assert_eq!(hex::encode(shared_a), hex::encode(shared_b));
    }
}
