//! In-memory implementation of the KeyCtl trait.
//!
//! This is primarily for testing. It follows the kernel's observable
//! behaviour closely enough for the client to be exercised without a key
//! retention service: default permissions, owner/possessor checks,
//! add-or-update of user keys, recursive search, expiry, revocation,
//! invalidation and DH computation.
//!
//! The caller is treated as the owner and possessor of every key, so the
//! effective permission for a key is its possessor lane OR its user lane.

use std::collections::{HashMap, HashSet};
use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::{Duration, Instant};

use num_bigint::BigUint;

use krs_core::{DhComputeParams, KeyHandle, KeyPermissions, KeyType, Lane, Permission};

use crate::error::{Errno, Result, SysError};
use crate::traits::KeyCtl;

/// Permissions a freshly added key or keyring gets.
const DEFAULT_PERM: u32 = 0x3f01_0000;

/// Upper bound on a user key payload.
const MAX_USER_PAYLOAD: usize = 32767;

/// In-memory key store.
///
/// Keys live only as long as the value. Calls serialize on one Mutex.
pub struct MemoryKeyCtl {
    inner: Mutex<MemoryKeyCtlInner>,
}

struct MemoryKeyCtlInner {
    /// Next serial to hand out.
    next_id: i32,

    /// Live keys indexed by serial.
    keys: HashMap<KeyHandle, StoredKey>,

    /// Well-known alias -> real keyring.
    specials: HashMap<KeyHandle, KeyHandle>,

    /// Added to the wall clock, to let tests fast-forward expiry.
    clock_offset: Duration,

    uid: u32,
    gid: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum KeyState {
    Active,
    Revoked,
}

struct StoredKey {
    key_type: KeyType,
    description: String,
    uid: u32,
    gid: u32,
    perm: KeyPermissions,
    payload: Vec<u8>,
    /// Linked handles, for keyrings.
    links: Vec<KeyHandle>,
    expires_at: Option<Instant>,
    state: KeyState,
}

impl StoredKey {
    fn new(key_type: KeyType, description: &str, uid: u32, gid: u32) -> Self {
        Self {
            key_type,
            description: description.to_string(),
            uid,
            gid,
            perm: KeyPermissions::from_bits_truncate(DEFAULT_PERM),
            payload: Vec::new(),
            links: Vec::new(),
            expires_at: None,
            state: KeyState::Active,
        }
    }

    fn effective(&self) -> Permission {
        self.perm.lane(Lane::Possessor) | self.perm.lane(Lane::User)
    }

    fn is_keyring(&self) -> bool {
        self.key_type == KeyType::Keyring
    }

    fn is_expired(&self, now: Instant) -> bool {
        self.expires_at.is_some_and(|at| now >= at)
    }
}

impl MemoryKeyCtl {
    /// Create a new empty store owned by uid/gid 0.
    pub fn new() -> Self {
        Self::with_owner(0, 0)
    }

    /// Create a new empty store whose keys are owned by `uid`/`gid`.
    pub fn with_owner(uid: u32, gid: u32) -> Self {
        Self {
            inner: Mutex::new(MemoryKeyCtlInner {
                next_id: 1,
                keys: HashMap::new(),
                specials: HashMap::new(),
                clock_offset: Duration::ZERO,
                uid,
                gid,
            }),
        }
    }

    /// Move the store's clock forward.
    pub fn advance(&self, by: Duration) {
        self.lock().clock_offset += by;
    }

    /// Number of keys that still exist (including revoked and expired ones).
    pub fn len(&self) -> usize {
        self.lock().keys.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn lock(&self) -> MutexGuard<'_, MemoryKeyCtlInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MemoryKeyCtl {
    fn default() -> Self {
        Self::new()
    }
}

fn denied() -> SysError {
    SysError::Kernel(Errno::EACCES)
}

fn copy_reply(reply: &[u8], buffer: &mut [u8]) -> usize {
    let n = reply.len().min(buffer.len());
    buffer[..n].copy_from_slice(&reply[..n]);
    reply.len()
}

impl MemoryKeyCtlInner {
    fn now(&self) -> Instant {
        Instant::now() + self.clock_offset
    }

    fn allocate(&mut self, key: StoredKey) -> KeyHandle {
        let id = KeyHandle::new(self.next_id);
        self.next_id += 1;
        self.keys.insert(id, key);
        id
    }

    /// Map aliases to real serials, creating default keyrings on demand.
    fn resolve(&mut self, id: KeyHandle, create: bool) -> Result<KeyHandle> {
        if !id.is_special() {
            return Ok(id);
        }
        if let Some(&real) = self.specials.get(&id) {
            return Ok(real);
        }
        if !create {
            return Err(SysError::Kernel(Errno::ENOKEY));
        }
        let name = match id {
            KeyHandle::THREAD_KEYRING => "_tid".to_string(),
            KeyHandle::PROCESS_KEYRING => "_pid".to_string(),
            KeyHandle::SESSION_KEYRING => "_ses".to_string(),
            KeyHandle::USER_KEYRING => format!("_uid.{}", self.uid),
            KeyHandle::USER_SESSION_KEYRING => format!("_uid_ses.{}", self.uid),
            _ => return Err(SysError::Kernel(Errno::EINVAL)),
        };
        let mut keyring = StoredKey::new(KeyType::Keyring, &name, self.uid, self.gid);
        keyring.perm = KeyPermissions::POS_ALL | KeyPermissions::USR_ALL;
        let real = self.allocate(keyring);
        self.specials.insert(id, real);
        Ok(real)
    }

    /// Look up a usable key: present, not revoked, not expired.
    fn usable(&self, id: KeyHandle) -> Result<&StoredKey> {
        let key = self.keys.get(&id).ok_or(SysError::Kernel(Errno::ENOKEY))?;
        if key.state == KeyState::Revoked {
            return Err(SysError::Kernel(Errno::EKEYREVOKED));
        }
        if key.is_expired(self.now()) {
            return Err(SysError::Kernel(Errno::EKEYEXPIRED));
        }
        Ok(key)
    }

    fn check(&self, id: KeyHandle, need: Permission) -> Result<&StoredKey> {
        let key = self.usable(id)?;
        if !key.effective().contains(need) {
            return Err(denied());
        }
        Ok(key)
    }

    fn writable_keyring(&self, id: KeyHandle) -> Result<&StoredKey> {
        let keyring = self.check(id, Permission::WRITE)?;
        if !keyring.is_keyring() {
            return Err(SysError::Kernel(Errno::ENOTDIR));
        }
        Ok(keyring)
    }

    fn keys_mut(&mut self, id: KeyHandle) -> Result<&mut StoredKey> {
        self.keys
            .get_mut(&id)
            .ok_or(SysError::Kernel(Errno::ENOKEY))
    }

    fn link_into(&mut self, id: KeyHandle, keyring: KeyHandle) -> Result<()> {
        self.check(id, Permission::LINK)?;
        self.writable_keyring(keyring)?;
        if id == keyring || self.reaches(id, keyring) {
            return Err(SysError::Kernel(Errno::EDEADLK));
        }
        let (key_type, description) = {
            let key = self.usable(id)?;
            (key.key_type, key.description.clone())
        };
        // A link to a key of the same type and description is displaced.
        let displaced: Vec<KeyHandle> = self
            .usable(keyring)?
            .links
            .iter()
            .copied()
            .filter(|&linked| {
                linked != id
                    && self.keys.get(&linked).is_some_and(|k| {
                        k.key_type == key_type && k.description == description
                    })
            })
            .collect();
        let ring = self.keys_mut(keyring)?;
        ring.links.retain(|linked| !displaced.contains(linked));
        if !ring.links.contains(&id) {
            ring.links.push(id);
        }
        Ok(())
    }

    /// Whether `to` is reachable from keyring `from` through links.
    fn reaches(&self, from: KeyHandle, to: KeyHandle) -> bool {
        let mut seen = HashSet::new();
        let mut stack = vec![from];
        while let Some(current) = stack.pop() {
            if !seen.insert(current) {
                continue;
            }
            if let Some(key) = self.keys.get(&current) {
                for &child in &key.links {
                    if child == to {
                        return true;
                    }
                    stack.push(child);
                }
            }
        }
        false
    }

    /// Depth-first search for a searchable, usable key below `keyring`.
    fn find(&self, keyring: KeyHandle, key_type: KeyType, description: &str) -> Option<KeyHandle> {
        let mut seen = HashSet::new();
        let mut stack = vec![keyring];
        while let Some(current) = stack.pop() {
            if !seen.insert(current) {
                continue;
            }
            let Ok(ring) = self.check(current, Permission::SEARCH) else {
                continue;
            };
            for &child in &ring.links {
                let Ok(key) = self.check(child, Permission::SEARCH) else {
                    continue;
                };
                if key.key_type == key_type && key.description == description {
                    return Some(child);
                }
            }
            for &child in ring.links.iter().rev() {
                if self.keys.get(&child).is_some_and(StoredKey::is_keyring) {
                    stack.push(child);
                }
            }
        }
        None
    }

    fn remove(&mut self, id: KeyHandle) {
        self.keys.remove(&id);
        self.specials.retain(|_, real| *real != id);
        for key in self.keys.values_mut() {
            key.links.retain(|&linked| linked != id);
        }
    }

    fn payload_number(&self, id: KeyHandle) -> Result<BigUint> {
        let key = self.check(id, Permission::READ)?;
        if key.key_type != KeyType::User {
            return Err(SysError::Kernel(Errno::EINVAL));
        }
        Ok(BigUint::from_bytes_be(&key.payload))
    }
}

impl KeyCtl for MemoryKeyCtl {
    fn add_key(
        &self,
        key_type: KeyType,
        description: &str,
        payload: &[u8],
        keyring: KeyHandle,
    ) -> Result<KeyHandle> {
        if description.is_empty() {
            return Err(SysError::Kernel(Errno::EINVAL));
        }
        match key_type {
            KeyType::Keyring if !payload.is_empty() => {
                return Err(SysError::Kernel(Errno::EINVAL));
            }
            KeyType::User if payload.is_empty() || payload.len() > MAX_USER_PAYLOAD => {
                return Err(SysError::Kernel(Errno::EINVAL));
            }
            _ => {}
        }

        let mut inner = self.lock();
        let keyring = inner.resolve(keyring, true)?;
        inner.writable_keyring(keyring)?;

        // A live user key with the same description in this keyring is
        // updated. Revoked or expired ones are displaced by a new key.
        if key_type == KeyType::User {
            let existing = inner
                .usable(keyring)?
                .links
                .iter()
                .copied()
                .find(|&linked| {
                    inner
                        .usable(linked)
                        .is_ok_and(|k| k.key_type == key_type && k.description == description)
                });
            if let Some(id) = existing {
                inner.check(id, Permission::WRITE)?;
                inner.keys_mut(id)?.payload = payload.to_vec();
                return Ok(id);
            }
        }

        let (uid, gid) = (inner.uid, inner.gid);
        let mut key = StoredKey::new(key_type, description, uid, gid);
        key.payload = payload.to_vec();
        let id = inner.allocate(key);
        if let Err(e) = inner.link_into(id, keyring) {
            inner.remove(id);
            return Err(e);
        }
        Ok(id)
    }

    fn search(
        &self,
        keyring: KeyHandle,
        key_type: KeyType,
        description: &str,
        destination: KeyHandle,
    ) -> Result<KeyHandle> {
        let mut inner = self.lock();
        let keyring = inner.resolve(keyring, true)?;
        inner.check(keyring, Permission::SEARCH)?;
        let found = inner
            .find(keyring, key_type, description)
            .ok_or(SysError::Kernel(Errno::ENOKEY))?;
        if !destination.is_none() {
            let destination = inner.resolve(destination, true)?;
            inner.link_into(found, destination)?;
        }
        Ok(found)
    }

    fn get_keyring_id(&self, id: KeyHandle, create: bool) -> Result<KeyHandle> {
        let mut inner = self.lock();
        let real = inner.resolve(id, create)?;
        inner.usable(real)?;
        Ok(real)
    }

    fn describe(&self, id: KeyHandle, buffer: &mut [u8]) -> Result<usize> {
        let mut inner = self.lock();
        let id = inner.resolve(id, true)?;
        let key = inner.check(id, Permission::VIEW)?;
        let text = format!(
            "{};{};{};{:08x};{}\0",
            key.key_type,
            key.uid,
            key.gid,
            key.perm.bits(),
            key.description
        );
        Ok(copy_reply(text.as_bytes(), buffer))
    }

    fn read(&self, id: KeyHandle, buffer: &mut [u8]) -> Result<usize> {
        let mut inner = self.lock();
        let id = inner.resolve(id, true)?;
        let key = inner.check(id, Permission::READ)?;
        if key.is_keyring() {
            let bytes: Vec<u8> = key
                .links
                .iter()
                .flat_map(|linked| linked.id().to_ne_bytes())
                .collect();
            Ok(copy_reply(&bytes, buffer))
        } else {
            Ok(copy_reply(&key.payload, buffer))
        }
    }

    fn dh_compute(&self, params: &DhComputeParams, buffer: &mut [u8]) -> Result<usize> {
        let inner = self.lock();
        let private = inner.payload_number(params.private)?;
        let prime_len = inner.check(params.prime, Permission::READ)?.payload.len();
        let prime = inner.payload_number(params.prime)?;
        let base = inner.payload_number(params.base)?;
        if prime == BigUint::from(0u32) {
            return Err(SysError::Kernel(Errno::EINVAL));
        }

        if buffer.is_empty() {
            return Ok(prime_len);
        }
        if buffer.len() < prime_len {
            return Err(SysError::Kernel(Errno::EOVERFLOW));
        }

        // Left-pad to the length of the prime, like the kernel does.
        let value = base.modpow(&private, &prime).to_bytes_be();
        let mut result = vec![0u8; prime_len];
        result[prime_len - value.len()..].copy_from_slice(&value);
        Ok(copy_reply(&result, buffer))
    }

    fn update(&self, id: KeyHandle, payload: &[u8]) -> Result<()> {
        let mut inner = self.lock();
        let id = inner.resolve(id, true)?;
        let key = inner.check(id, Permission::WRITE)?;
        if key.is_keyring() {
            return Err(SysError::Kernel(Errno::EOPNOTSUPP));
        }
        if payload.is_empty() || payload.len() > MAX_USER_PAYLOAD {
            return Err(SysError::Kernel(Errno::EINVAL));
        }
        inner.keys_mut(id)?.payload = payload.to_vec();
        Ok(())
    }

    fn set_perm(&self, id: KeyHandle, perm: KeyPermissions) -> Result<()> {
        let mut inner = self.lock();
        let id = inner.resolve(id, true)?;
        let owner = inner.uid;
        // Needs setattr on a live key, and only the owner may change it.
        let key = inner.check(id, Permission::SETATTR)?;
        if key.uid != owner {
            return Err(denied());
        }
        inner.keys_mut(id)?.perm = perm;
        Ok(())
    }

    fn set_timeout(&self, id: KeyHandle, seconds: u32) -> Result<()> {
        let mut inner = self.lock();
        let id = inner.resolve(id, true)?;
        inner.check(id, Permission::SETATTR)?;
        let expires_at = (seconds > 0).then(|| inner.now() + Duration::from_secs(seconds.into()));
        inner.keys_mut(id)?.expires_at = expires_at;
        Ok(())
    }

    fn link(&self, id: KeyHandle, keyring: KeyHandle) -> Result<()> {
        let mut inner = self.lock();
        let id = inner.resolve(id, true)?;
        let keyring = inner.resolve(keyring, true)?;
        inner.link_into(id, keyring)
    }

    fn unlink(&self, id: KeyHandle, keyring: KeyHandle) -> Result<()> {
        let mut inner = self.lock();
        let id = inner.resolve(id, true)?;
        let keyring = inner.resolve(keyring, true)?;
        inner.writable_keyring(keyring)?;
        let ring = inner.keys_mut(keyring)?;
        let before = ring.links.len();
        ring.links.retain(|&linked| linked != id);
        if ring.links.len() == before {
            return Err(SysError::Kernel(Errno::ENOENT));
        }
        Ok(())
    }

    fn clear(&self, keyring: KeyHandle) -> Result<()> {
        let mut inner = self.lock();
        let keyring = inner.resolve(keyring, true)?;
        inner.writable_keyring(keyring)?;
        inner.keys_mut(keyring)?.links.clear();
        Ok(())
    }

    fn revoke(&self, id: KeyHandle) -> Result<()> {
        let mut inner = self.lock();
        let id = inner.resolve(id, true)?;
        let effective = inner.usable(id)?.effective();
        if !effective.contains(Permission::WRITE) && !effective.contains(Permission::SETATTR) {
            return Err(denied());
        }
        inner.keys_mut(id)?.state = KeyState::Revoked;
        Ok(())
    }

    fn invalidate(&self, id: KeyHandle) -> Result<()> {
        let mut inner = self.lock();
        let id = inner.resolve(id, true)?;
        inner.check(id, Permission::SEARCH)?;
        inner.remove(id);
        Ok(())
    }
}
