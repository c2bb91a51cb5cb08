//! # krs
//!
//! A client for the Linux kernel key retention service: keys and keyrings,
//! their permissions and lifetimes, and Diffie-Hellman computed inside the
//! kernel.
//!
//! ## Overview
//!
//! The kernel holds named keys addressed by integer handles and organised
//! into keyrings. This crate provides:
//!
//! - **Key management**: add, update, search, link, revoke and invalidate
//! - **Attributes**: parsed descriptions and the 24-character permission text
//! - **Secret hand-off**: [`SecurePayload`] passes bytes to the kernel once and
//!   scrubs the caller's buffer
//! - **DH**: standard groups loaded into keyrings and computed by the kernel
//!
//! ## Key Concepts
//!
//! - **Handle**: opaque kernel id; negative values name the caller's default
//!   keyrings
//! - **Possessor**: a caller that reaches a key through its own keyrings
//! - **No caching**: other processes share the namespace, so every query goes
//!   to the kernel
//!
//! ## Usage
//!
//! ```rust,no_run
//! use krs::{KeyHandle, KeyStore, KeyType, SecurePayload};
//!
//! let store = KeyStore::linux();
//!
//! let mut secret = *b"hunter2";
//! let mut payload = SecurePayload::new(&mut secret);
//! let id = store
//!     .add(KeyHandle::SESSION_KEYRING, KeyType::User, "example", Some(&mut payload))
//!     .unwrap();
//!
//! let desc = store.describe(id).unwrap();
//! println!("{} {}", desc.permissions, desc.name);
//!
//! store.set_timeout(id, 60).unwrap();
//! ```
//!
//! ## Re-exports
//!
//! This crate re-exports the component crates for convenience:
//!
//! - `krs::core` - Handles, key types, descriptions and permissions
//! - `krs::sys` - The kernel call boundary and its backends
//! - `krs::dh` - DH groups and kernel-side computation

pub mod client;
pub mod error;
pub mod payload;

// Re-export component crates
pub use krs_core as core;
pub use krs_dh as dh;
pub use krs_sys as sys;

// Re-export main types for convenience
pub use client::{ClientConfig, KeyStore};
pub use error::{ErrorKind, KrsError, Result};
pub use payload::SecurePayload;

// Re-export commonly used component types
pub use krs_core::{Description, KeyHandle, KeyPermissions, KeyType, Lane, Permission};
pub use krs_dh::{DhKeySet, DhParameters, PrimeSize};
pub use krs_sys::{Errno, KeyCtl, MemoryKeyCtl};
#[cfg(target_os = "linux")]
pub use krs_sys::LinuxKeyCtl;
