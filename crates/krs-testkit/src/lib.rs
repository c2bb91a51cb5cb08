//! # krs Testkit
//!
//! Testing utilities for the krs key retention client.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Oracle**: a wrapper around `keyctl(1)` that inspects the kernel key
//!   store independently of the client
//! - **Vectors**: known permission masks, texts and descriptions
//! - **Generators**: Proptest strategies for property-based testing
//! - **Fixtures**: clients over the in-memory backend and key helpers
//!
//! ## Kernel Tests
//!
//! The tests under `tests/` talk to the running kernel. They skip, with a
//! log line, when `keyctl` is missing or no session keyring is reachable:
//!
//! ```rust,no_run
//! use krs_testkit::oracle::KeyctlOracle;
//!
//! let Some(oracle) = KeyctlOracle::probe() else {
//!     return;
//! };
//! let perm = oracle.permissions(krs::KeyHandle::SESSION_KEYRING).unwrap();
//! println!("{perm}");
//! ```
//!
//! ## Property Testing
//!
//! Use the generators with proptest:
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use krs_testkit::generators::permissions;
//!
//! proptest! {
//!     #[test]
//!     fn text_round_trips(perm in permissions()) {
//!         prop_assert_eq!(perm.encode().parse::<krs::KeyPermissions>().unwrap(), perm);
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use krs::KeyHandle;
//! use krs_testkit::fixtures::{add_user_key, MemoryFixture};
//!
//! let fixture = MemoryFixture::new();
//! let id = add_user_key(&fixture.store, KeyHandle::SESSION_KEYRING, "k", b"v").unwrap();
//! assert_eq!(fixture.store.read_payload(id).unwrap(), b"v");
//! ```

pub mod fixtures;
pub mod generators;
pub mod oracle;
pub mod vectors;

pub use fixtures::{unique_name, MemoryFixture};
pub use oracle::KeyctlOracle;
