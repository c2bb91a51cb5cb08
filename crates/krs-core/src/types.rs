//! Strong type definitions for key store values.
//!
//! Handles and key types are newtypes/enums so that a keyring id can't be
//! mixed up with a uid or a payload length at compile time.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};
use crate::perm::KeyPermissions;

/// Kernel identifier of a key or keyring.
///
/// Handles are allocated by the kernel and never reused after removal.
/// Negative values are the well-known aliases for the caller's default
/// keyrings.
#[repr(transparent)]
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyHandle(pub i32);

impl KeyHandle {
    /// "No keyring", used where a destination keyring is optional.
    pub const NONE: Self = Self(0);
    pub const THREAD_KEYRING: Self = Self(-1);
    pub const PROCESS_KEYRING: Self = Self(-2);
    pub const SESSION_KEYRING: Self = Self(-3);
    pub const USER_KEYRING: Self = Self(-4);
    pub const USER_SESSION_KEYRING: Self = Self(-5);
    pub const GROUP_KEYRING: Self = Self(-6);
    pub const REQKEY_AUTH_KEY: Self = Self(-7);
    pub const REQUESTOR_KEYRING: Self = Self(-8);

    pub const fn new(id: i32) -> Self {
        Self(id)
    }

    pub const fn id(self) -> i32 {
        self.0
    }

    /// Whether this is one of the well-known alias values.
    pub const fn is_special(self) -> bool {
        self.0 < 0 && self.0 >= Self::REQUESTOR_KEYRING.0
    }

    pub const fn is_none(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Debug for KeyHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyHandle({})", self.0)
    }
}

impl fmt::Display for KeyHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for KeyHandle {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl From<KeyHandle> for i32 {
    fn from(handle: KeyHandle) -> Self {
        handle.0
    }
}

/// The key types this client handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "&'static str", try_from = "String")]
pub enum KeyType {
    /// A keyring; its payload is the list of linked handles.
    Keyring,
    /// A user-defined blob of up to 32 KiB.
    User,
}

impl KeyType {
    /// The kernel's token for this type.
    pub const fn as_str(self) -> &'static str {
        match self {
            KeyType::Keyring => "keyring",
            KeyType::User => "user",
        }
    }
}

impl fmt::Display for KeyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KeyType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "keyring" => Ok(KeyType::Keyring),
            "user" => Ok(KeyType::User),
            other => Err(CoreError::InvalidKeyType(other.to_string())),
        }
    }
}

impl From<KeyType> for &'static str {
    fn from(t: KeyType) -> Self {
        t.as_str()
    }
}

impl TryFrom<String> for KeyType {
    type Error = CoreError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

/// Attributes of a key, as reported by the kernel at one point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Description {
    pub key_type: KeyType,
    pub uid: u32,
    pub gid: u32,
    pub permissions: KeyPermissions,
    /// The description string the key was created with.
    pub name: String,
}

impl FromStr for Description {
    type Err = CoreError;

    /// Parse the kernel's `type;uid;gid;perm;description` string.
    ///
    /// The description is the remainder after the fourth separator and may
    /// itself contain `;`.
    fn from_str(s: &str) -> Result<Self> {
        let mut parts = s.splitn(5, ';');
        let mut next = |field: &str| {
            parts
                .next()
                .ok_or_else(|| CoreError::MalformedDescription(format!("missing {field} in {s:?}")))
        };

        let key_type: KeyType = next("type")?.parse()?;
        let uid = parse_field(next("uid")?, "uid", 10)?;
        let gid = parse_field(next("gid")?, "gid", 10)?;
        let perm = parse_field(next("permissions")?, "permissions", 16)?;
        let name = next("description")?.to_string();

        Ok(Self {
            key_type,
            uid,
            gid,
            permissions: KeyPermissions::new(perm)?,
            name,
        })
    }
}

fn parse_field(value: &str, field: &str, radix: u32) -> Result<u32> {
    u32::from_str_radix(value, radix)
        .map_err(|e| CoreError::MalformedDescription(format!("{field} {value:?}: {e}")))
}

/// The three key handles the kernel needs for a DH computation.
///
/// Layout matches `struct keyctl_dh_params`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DhComputeParams {
    /// Key holding the local private exponent.
    pub private: KeyHandle,
    /// Key holding the prime modulus.
    pub prime: KeyHandle,
    /// Key holding the generator or the peer's public value.
    pub base: KeyHandle,
}

impl DhComputeParams {
    pub const fn new(private: KeyHandle, prime: KeyHandle, base: KeyHandle) -> Self {
        Self {
            private,
            prime,
            base,
        }
    }
}
