//! Linux implementation of the KeyCtl trait.
//!
//! This is the production backend. Every method is one `keyctl(2)` or
//! `add_key(2)` system call; the calls block until the kernel answers.

use std::ffi::CString;
use std::ptr;

use krs_core::{DhComputeParams, KeyHandle, KeyPermissions, KeyType};

use crate::error::{Errno, Result, SysError};
use crate::traits::KeyCtl;

/// `keyctl(2)` command codes used by this crate.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    GetKeyringId = 0,
    Update = 2,
    Revoke = 3,
    SetPerm = 5,
    Describe = 6,
    Clear = 7,
    Link = 8,
    Unlink = 9,
    Search = 10,
    Read = 11,
    SetTimeout = 15,
    Invalidate = 21,
    DhCompute = 23,
}

/// The kernel key retention service, reached through system calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinuxKeyCtl;

impl LinuxKeyCtl {
    pub const fn new() -> Self {
        Self
    }
}

/// Issue a `keyctl(2)` call with four word arguments.
fn keyctl(command: Command, args: [libc::c_ulong; 4]) -> Result<libc::c_long> {
    // SAFETY: keyctl only dereferences the pointer arguments the individual
    // commands define; callers pass pointers that are valid for the lengths
    // they pass alongside them, or null with a zero length.
    let ret = unsafe {
        libc::syscall(
            libc::SYS_keyctl,
            command as libc::c_int,
            args[0],
            args[1],
            args[2],
            args[3],
        )
    };
    if ret < 0 {
        let errno = Errno::last();
        tracing::debug!(?command, %errno, "keyctl failed");
        return Err(SysError::Kernel(errno));
    }
    Ok(ret)
}

fn handle_arg(id: KeyHandle) -> libc::c_ulong {
    id.id() as libc::c_ulong
}

fn buffer_args(buffer: &mut [u8]) -> (libc::c_ulong, libc::c_ulong) {
    if buffer.is_empty() {
        (0, 0)
    } else {
        (
            buffer.as_mut_ptr() as libc::c_ulong,
            buffer.len() as libc::c_ulong,
        )
    }
}

fn c_string(value: &str, what: &str) -> Result<CString> {
    CString::new(value)
        .map_err(|_| SysError::InvalidArgument(format!("{what} contains a NUL byte: {value:?}")))
}

fn to_handle(ret: libc::c_long) -> KeyHandle {
    KeyHandle::new(ret as i32)
}

fn to_len(ret: libc::c_long) -> usize {
    ret as usize
}

impl KeyCtl for LinuxKeyCtl {
    fn add_key(
        &self,
        key_type: KeyType,
        description: &str,
        payload: &[u8],
        keyring: KeyHandle,
    ) -> Result<KeyHandle> {
        let key_type_c = c_string(key_type.as_str(), "key type")?;
        let description_c = c_string(description, "description")?;
        let payload_ptr = if payload.is_empty() {
            ptr::null()
        } else {
            payload.as_ptr()
        };

        tracing::debug!(%key_type, description, %keyring, len = payload.len(), "add_key");

        // SAFETY: both strings are NUL terminated and outlive the call; the
        // payload pointer is valid for `payload.len()` bytes or null.
        let ret = unsafe {
            libc::syscall(
                libc::SYS_add_key,
                key_type_c.as_ptr(),
                description_c.as_ptr(),
                payload_ptr,
                payload.len(),
                handle_arg(keyring),
            )
        };
        if ret < 0 {
            let errno = Errno::last();
            tracing::debug!(%errno, "add_key failed");
            return Err(SysError::Kernel(errno));
        }
        Ok(to_handle(ret))
    }

    fn search(
        &self,
        keyring: KeyHandle,
        key_type: KeyType,
        description: &str,
        destination: KeyHandle,
    ) -> Result<KeyHandle> {
        let key_type_c = c_string(key_type.as_str(), "key type")?;
        let description_c = c_string(description, "description")?;
        tracing::debug!(%keyring, %key_type, description, %destination, "keyctl search");
        let ret = keyctl(
            Command::Search,
            [
                handle_arg(keyring),
                key_type_c.as_ptr() as libc::c_ulong,
                description_c.as_ptr() as libc::c_ulong,
                handle_arg(destination),
            ],
        )?;
        Ok(to_handle(ret))
    }

    fn get_keyring_id(&self, id: KeyHandle, create: bool) -> Result<KeyHandle> {
        let ret = keyctl(
            Command::GetKeyringId,
            [handle_arg(id), libc::c_ulong::from(create), 0, 0],
        )?;
        Ok(to_handle(ret))
    }

    fn describe(&self, id: KeyHandle, buffer: &mut [u8]) -> Result<usize> {
        let (ptr, len) = buffer_args(buffer);
        let ret = keyctl(Command::Describe, [handle_arg(id), ptr, len, 0])?;
        Ok(to_len(ret))
    }

    fn read(&self, id: KeyHandle, buffer: &mut [u8]) -> Result<usize> {
        let (ptr, len) = buffer_args(buffer);
        let ret = keyctl(Command::Read, [handle_arg(id), ptr, len, 0])?;
        Ok(to_len(ret))
    }

    fn dh_compute(&self, params: &DhComputeParams, buffer: &mut [u8]) -> Result<usize> {
        let (ptr, len) = buffer_args(buffer);
        tracing::debug!(
            private = %params.private,
            prime = %params.prime,
            base = %params.base,
            len,
            "keyctl dh_compute"
        );
        // The fourth argument is the optional KDF parameter block.
        let ret = keyctl(
            Command::DhCompute,
            [params as *const DhComputeParams as libc::c_ulong, ptr, len, 0],
        )?;
        Ok(to_len(ret))
    }

    fn update(&self, id: KeyHandle, payload: &[u8]) -> Result<()> {
        tracing::debug!(key = %id, len = payload.len(), "keyctl update");
        let ptr = if payload.is_empty() {
            0
        } else {
            payload.as_ptr() as libc::c_ulong
        };
        keyctl(
            Command::Update,
            [handle_arg(id), ptr, payload.len() as libc::c_ulong, 0],
        )?;
        Ok(())
    }

    fn set_perm(&self, id: KeyHandle, perm: KeyPermissions) -> Result<()> {
        tracing::debug!(key = %id, perm = %perm, "keyctl setperm");
        keyctl(
            Command::SetPerm,
            [handle_arg(id), libc::c_ulong::from(perm.bits()), 0, 0],
        )?;
        Ok(())
    }

    fn set_timeout(&self, id: KeyHandle, seconds: u32) -> Result<()> {
        tracing::debug!(key = %id, seconds, "keyctl set_timeout");
        keyctl(
            Command::SetTimeout,
            [handle_arg(id), libc::c_ulong::from(seconds), 0, 0],
        )?;
        Ok(())
    }

    fn link(&self, id: KeyHandle, keyring: KeyHandle) -> Result<()> {
        tracing::debug!(key = %id, %keyring, "keyctl link");
        keyctl(Command::Link, [handle_arg(id), handle_arg(keyring), 0, 0])?;
        Ok(())
    }

    fn unlink(&self, id: KeyHandle, keyring: KeyHandle) -> Result<()> {
        tracing::debug!(key = %id, %keyring, "keyctl unlink");
        keyctl(Command::Unlink, [handle_arg(id), handle_arg(keyring), 0, 0])?;
        Ok(())
    }

    fn clear(&self, keyring: KeyHandle) -> Result<()> {
        tracing::debug!(%keyring, "keyctl clear");
        keyctl(Command::Clear, [handle_arg(keyring), 0, 0, 0])?;
        Ok(())
    }

    fn revoke(&self, id: KeyHandle) -> Result<()> {
        tracing::debug!(key = %id, "keyctl revoke");
        keyctl(Command::Revoke, [handle_arg(id), 0, 0, 0])?;
        Ok(())
    }

    fn invalidate(&self, id: KeyHandle) -> Result<()> {
        tracing::debug!(key = %id, "keyctl invalidate");
        keyctl(Command::Invalidate, [handle_arg(id), 0, 0, 0])?;
        Ok(())
    }
}
