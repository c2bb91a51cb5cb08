//! # krs Core
//!
//! Pure types for the krs key retention client: key handles, key types,
//! attribute descriptions and the permission mask codec.
//!
//! This crate performs no system calls. Everything here is computation over
//! values the kernel hands back or expects.
//!
//! ## Key Types
//!
//! - [`KeyHandle`] - Opaque kernel identifier of a key or keyring
//! - [`KeyType`] - The supported key types (`keyring`, `user`)
//! - [`Description`] - Parsed snapshot of a key's attributes
//! - [`KeyPermissions`] - The packed 32-bit permission mask
//!
//! ## Permission Text
//!
//! The kernel packs permissions into four 8-bit lanes of which only the low
//! six bits are used. Tools print them as 24 characters. See [`perm`].

pub mod error;
pub mod perm;
pub mod types;

pub use error::{CoreError, Result};
pub use perm::{KeyPermissions, Lane, Permission, LANES, PERMISSION_TEXT_LEN};
pub use types::{Description, DhComputeParams, KeyHandle, KeyType};
