//! # krs DH
//!
//! Diffie-Hellman through the kernel key retention service.
//!
//! ## Overview
//!
//! The kernel can compute `base ^ private mod prime` from three keys it
//! already holds, so neither the private exponent nor the shared secret has
//! to be assembled in user space from separate pieces. This crate loads the
//! standard groups into keyrings and drives the computation.
//!
//! ## Key Concepts
//!
//! - **Group**: one of the RFC 3526 MODP groups, selected by [`PrimeSize`]
//! - **Key set**: a keyring holding a group's prime and generator ([`DhKeySet`])
//! - **Parameters**: the three handles of one computation ([`DhParameters`])
//!
//! ## Usage
//!
//! ```rust,no_run
//! use krs_core::{KeyHandle, KeyType};
//! use krs_dh::{compute_shared, generate_parameter_key_set, PrimeSize};
//! use krs_sys::{KeyCtl, LinuxKeyCtl};
//!
//! let ctl = LinuxKeyCtl::new();
//! let set = generate_parameter_key_set(&ctl, PrimeSize::Bits2048, KeyHandle::SESSION_KEYRING)
//!     .unwrap();
//! let private = ctl
//!     .add_key(KeyType::User, "private", &[0x5a; 32], KeyHandle::SESSION_KEYRING)
//!     .unwrap();
//! let public = compute_shared(&ctl, private, set.prime, set.base).unwrap();
//! assert_eq!(public.len(), 256);
//! set.release(&ctl).unwrap();
//! ```

pub mod error;
pub mod exchange;
pub mod groups;
pub mod params;
mod tables;

pub use error::{DhError, Result};
pub use exchange::{compute_fixed, compute_shared, generate_parameter_key_set, key_set_name};
pub use groups::{PrimeSize, GENERATOR};
pub use params::{DhKeySet, DhParameters};
