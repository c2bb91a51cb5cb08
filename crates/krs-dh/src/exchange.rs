//! Kernel-side DH computation.
//!
//! The arithmetic runs in the kernel; these functions only pass handles and
//! buffers. With `public_x = compute_shared(private_x, prime, generator)`,
//! both sides arrive at the same secret:
//!
//! ```text
//! compute_shared(private_a, prime, public_b) == compute_shared(private_b, prime, public_a)
//! ```

use krs_core::{DhComputeParams, KeyHandle, KeyType};
use krs_sys::{transfer, KeyCtl, SysError};

use crate::error::Result;
use crate::groups::PrimeSize;
use crate::params::{DhKeySet, DhParameters};

/// Description of the keyring created for a parameter key set.
pub fn key_set_name(size: PrimeSize) -> String {
    format!("krs-dh-{}", size.bits())
}

/// Compute `base ^ private mod prime`, probing the result size first.
pub fn compute_shared<K: KeyCtl>(
    ctl: &K,
    private_key: KeyHandle,
    prime: KeyHandle,
    base: KeyHandle,
) -> Result<Vec<u8>> {
    let params = DhComputeParams::new(private_key, prime, base);
    tracing::debug!(private = %private_key, %prime, %base, "computing DH value");
    let value = transfer::fetch_probed(|buf| ctl.dh_compute(&params, buf))?;
    Ok(value)
}

/// Compute with a caller-chosen buffer size and a single kernel request.
pub fn compute_fixed<K: KeyCtl>(ctl: &K, params: &DhParameters) -> Result<Vec<u8>> {
    let mut buffer = vec![0u8; params.size];
    tracing::debug!(
        private = %params.private_key,
        prime = %params.prime,
        base = %params.base,
        size = params.size,
        "computing DH value with fixed size"
    );
    let written = ctl.dh_compute(&params.handles(), &mut buffer)?;
    if written > buffer.len() {
        buffer.fill(0);
        return Err(SysError::UnexpectedSize {
            capacity: params.size,
            reported: written,
        }
        .into());
    }
    buffer.truncate(written);
    Ok(buffer)
}

/// Load a standard group into a fresh keyring below `parent`.
///
/// If adding the prime or the generator fails, the new keyring is
/// invalidated before the error is returned.
pub fn generate_parameter_key_set<K: KeyCtl>(
    ctl: &K,
    size: PrimeSize,
    parent: KeyHandle,
) -> Result<DhKeySet> {
    let keyring = ctl.add_key(KeyType::Keyring, &key_set_name(size), &[], parent)?;

    let members = ctl
        .add_key(KeyType::User, "prime", size.prime(), keyring)
        .and_then(|prime| {
            let base = ctl.add_key(KeyType::User, "base", size.generator(), keyring)?;
            Ok((prime, base))
        });

    match members {
        Ok((prime, base)) => {
            tracing::debug!(bits = size.bits(), %keyring, %prime, %base, "created DH key set");
            Ok(DhKeySet {
                keyring,
                prime,
                base,
            })
        }
        Err(e) => {
            if let Err(cleanup) = ctl.invalidate(keyring) {
                tracing::warn!(
                    %keyring,
                    error = %cleanup,
                    "failed to invalidate partial DH key set"
                );
            }
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DhError;
    use krs_core::KeyPermissions;
    use krs_sys::MemoryKeyCtl;
    use rand::RngCore;

    const SESSION: KeyHandle = KeyHandle::SESSION_KEYRING;

    fn private_key(ctl: &MemoryKeyCtl, name: &str) -> KeyHandle {
        let mut exponent = [0u8; 32];
        rand::thread_rng().fill_bytes(&mut exponent);
        exponent[0] |= 0x80;
        ctl.add_key(KeyType::User, name, &exponent, SESSION).unwrap()
    }

    fn public_key(ctl: &MemoryKeyCtl, name: &str, value: &[u8]) -> KeyHandle {
        ctl.add_key(KeyType::User, name, value, SESSION).unwrap()
    }

    #[test]
    fn test_key_set_layout() {
        let ctl = MemoryKeyCtl::new();
        let set = generate_parameter_key_set(&ctl, PrimeSize::Bits1536, SESSION).unwrap();

        let mut buf = vec![0u8; 512];
        let n = ctl.read(set.prime, &mut buf).unwrap();
        assert_eq!(n, 192);
        assert_eq!(&buf[..n], PrimeSize::Bits1536.prime());

        let n = ctl.read(set.base, &mut buf).unwrap();
        assert_eq!(&buf[..n], &[2]);

        let n = ctl.read(set.keyring, &mut buf).unwrap();
        assert_eq!(n, 8);

        let n = ctl.describe(set.keyring, &mut buf).unwrap();
        let text = std::str::from_utf8(&buf[..n - 1]).unwrap();
        assert!(text.ends_with(";krs-dh-1536"), "{text}");
    }

    #[test]
    fn test_shared_secret_agrees() {
        let ctl = MemoryKeyCtl::new();
        let set = generate_parameter_key_set(&ctl, PrimeSize::Bits1536, SESSION).unwrap();
        let a = private_key(&ctl, "alice");
        let b = private_key(&ctl, "bob");

        let public_a = compute_shared(&ctl, a, set.prime, set.base).unwrap();
        let public_b = compute_shared(&ctl, b, set.prime, set.base).unwrap();
        assert_eq!(public_a.len(), 192);
        assert_ne!(public_a, public_b);

        let public_a = public_key(&ctl, "alice-public", &public_a);
        let public_b = public_key(&ctl, "bob-public", &public_b);
        let secret_a = compute_shared(&ctl, a, set.prime, public_b).unwrap();
        let secret_b = compute_shared(&ctl, b, set.prime, public_a).unwrap();
        assert_eq!(hex::encode(&secret_a), hex::encode(&secret_b));
    }

    #[test]
    fn test_fixed_matches_probed() {
        let ctl = MemoryKeyCtl::new();
        let set = generate_parameter_key_set(&ctl, PrimeSize::Bits2048, SESSION).unwrap();
        let private = private_key(&ctl, "x");

        let probed = compute_shared(&ctl, private, set.prime, set.base).unwrap();
        let fixed = compute_fixed(&ctl, &set.public_parameters(private, 256)).unwrap();
        assert_eq!(probed, fixed);
    }

    #[test]
    fn test_fixed_buffer_too_small() {
        let ctl = MemoryKeyCtl::new();
        let set = generate_parameter_key_set(&ctl, PrimeSize::Bits1536, SESSION).unwrap();
        let private = private_key(&ctl, "x");

        let err = compute_fixed(&ctl, &set.public_parameters(private, 64)).unwrap_err();
        match err {
            DhError::Sys(e) => assert_eq!(e.errno(), Some(krs_sys::Errno::EOVERFLOW)),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_missing_key_is_kernel_error() {
        let ctl = MemoryKeyCtl::new();
        let err = compute_shared(&ctl, KeyHandle::new(90), KeyHandle::new(91), KeyHandle::new(92))
            .unwrap_err();
        match err {
            DhError::Sys(e) => assert!(e.is_not_found()),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    /// Delegates to the memory backend but refuses to add the generator.
    struct RefuseBase(MemoryKeyCtl);

    impl KeyCtl for RefuseBase {
        fn add_key(
            &self,
            key_type: KeyType,
            description: &str,
            payload: &[u8],
            keyring: KeyHandle,
        ) -> krs_sys::Result<KeyHandle> {
            if description == "base" {
                return Err(SysError::Kernel(krs_sys::Errno::EDQUOT));
            }
            self.0.add_key(key_type, description, payload, keyring)
        }

        fn search(
            &self,
            keyring: KeyHandle,
            key_type: KeyType,
            description: &str,
            destination: KeyHandle,
        ) -> krs_sys::Result<KeyHandle> {
            self.0.search(keyring, key_type, description, destination)
        }

        fn get_keyring_id(&self, id: KeyHandle, create: bool) -> krs_sys::Result<KeyHandle> {
            self.0.get_keyring_id(id, create)
        }

        fn describe(&self, id: KeyHandle, buffer: &mut [u8]) -> krs_sys::Result<usize> {
            self.0.describe(id, buffer)
        }

        fn read(&self, id: KeyHandle, buffer: &mut [u8]) -> krs_sys::Result<usize> {
            self.0.read(id, buffer)
        }

        fn dh_compute(
            &self,
            params: &DhComputeParams,
            buffer: &mut [u8],
        ) -> krs_sys::Result<usize> {
            self.0.dh_compute(params, buffer)
        }

        fn update(&self, id: KeyHandle, payload: &[u8]) -> krs_sys::Result<()> {
            self.0.update(id, payload)
        }

        fn set_perm(&self, id: KeyHandle, perm: KeyPermissions) -> krs_sys::Result<()> {
            self.0.set_perm(id, perm)
        }

        fn set_timeout(&self, id: KeyHandle, seconds: u32) -> krs_sys::Result<()> {
            self.0.set_timeout(id, seconds)
        }

        fn link(&self, id: KeyHandle, keyring: KeyHandle) -> krs_sys::Result<()> {
            self.0.link(id, keyring)
        }

        fn unlink(&self, id: KeyHandle, keyring: KeyHandle) -> krs_sys::Result<()> {
            self.0.unlink(id, keyring)
        }

        fn clear(&self, keyring: KeyHandle) -> krs_sys::Result<()> {
            self.0.clear(keyring)
        }

        fn revoke(&self, id: KeyHandle) -> krs_sys::Result<()> {
            self.0.revoke(id)
        }

        fn invalidate(&self, id: KeyHandle) -> krs_sys::Result<()> {
            self.0.invalidate(id)
        }
    }

    #[test]
    fn test_partial_key_set_is_invalidated() {
        let ctl = RefuseBase(MemoryKeyCtl::new());
        let session = ctl.get_keyring_id(SESSION, true).unwrap();

        let err = generate_parameter_key_set(&ctl, PrimeSize::Bits1536, session).unwrap_err();
        assert!(matches!(err, DhError::Sys(ref e) if e.errno() == Some(krs_sys::Errno::EDQUOT)));

        // The keyring is gone from the session; only the orphaned prime is left.
        let mut buf = [0u8; 64];
        assert_eq!(ctl.read(session, &mut buf).unwrap(), 0);
        let err = ctl
            .search(session, KeyType::Keyring, &key_set_name(PrimeSize::Bits1536), KeyHandle::NONE)
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_release_revokes_all_members() {
        let ctl = MemoryKeyCtl::new();
        let set = generate_parameter_key_set(&ctl, PrimeSize::Bits1536, SESSION).unwrap();
        set.release(&ctl).unwrap();

        let mut buf = [0u8; 8];
        for id in [set.keyring, set.prime, set.base] {
            assert!(ctl.describe(id, &mut buf).unwrap_err().is_revoked());
        }
        assert!(set.release(&ctl).is_err());
    }
}
