//! # krs Sys
//!
//! The kernel call boundary for the krs key retention client. Provides a
//! trait-based interface to the key retention service with a Linux system
//! call implementation and an in-memory implementation.
//!
//! ## Overview
//!
//! All kernel access goes through the [`KeyCtl`] trait, so the client is
//! backend-agnostic. The production implementation is [`LinuxKeyCtl`];
//! [`MemoryKeyCtl`] emulates the kernel for tests.
//!
//! ## Key Types
//!
//! - [`KeyCtl`] - One method per kernel request
//! - [`LinuxKeyCtl`] - `keyctl(2)`/`add_key(2)` backend
//! - [`MemoryKeyCtl`] - In-memory backend for tests
//! - [`transfer`] - Two-phase fetches for replies of unknown length
//!
//! ## Usage
//!
//! ```rust,no_run
//! use krs_core::{KeyHandle, KeyType};
//! use krs_sys::{KeyCtl, LinuxKeyCtl, transfer};
//!
//! let ctl = LinuxKeyCtl::new();
//! let id = ctl
//!     .add_key(KeyType::User, "example", b"secret", KeyHandle::SESSION_KEYRING)
//!     .unwrap();
//! let payload = transfer::fetch_with_capacity(64, |buf| ctl.read(id, buf)).unwrap();
//! assert_eq!(payload, b"secret");
//! ```
//!
//! ## Design Notes
//!
//! - **No caching**: every call reaches the kernel; the namespace is shared.
//! - **Buffer replies**: the full reply length is returned even when the
//!   buffer is too small, which is what the transfer helpers build on.
//! - **Errors**: kernel failures keep their errno in [`SysError::Kernel`].

pub mod error;
#[cfg(target_os = "linux")]
pub mod linux;
pub mod memory;
pub mod traits;
pub mod transfer;

pub use error::{Errno, Result, SysError};
#[cfg(target_os = "linux")]
pub use linux::LinuxKeyCtl;
pub use memory::MemoryKeyCtl;
pub use traits::KeyCtl;
