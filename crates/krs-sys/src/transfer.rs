//! Two-phase transfers for kernel replies of unknown length.
//!
//! The kernel answers buffer requests with the full length of the reply and
//! copies only what fits. Two ways of using that are provided:
//!
//! - [`fetch_with_capacity`]: start with a guess and regrow once if the reply
//!   is longer. Used for keyring contents, payloads and descriptions.
//! - [`fetch_probed`]: ask for the length with an empty buffer first, then
//!   fetch into a buffer of exactly that size. Used for DH results.
//!
//! Neither retries anything beyond that single second call. Kernel errors are
//! returned as they are; only a size reply that contradicts the buffer just
//! sized for it is reported as [`SysError::UnexpectedSize`].

use crate::error::{Result, SysError};

/// Fetch a reply using an initial capacity guess.
///
/// `call` fills the buffer it is given and returns the full reply length.
pub fn fetch_with_capacity<F>(capacity: usize, mut call: F) -> Result<Vec<u8>>
where
    F: FnMut(&mut [u8]) -> Result<usize>,
{
    let mut buffer = vec![0u8; capacity];
    let needed = call(&mut buffer)?;
    if needed <= buffer.len() {
        buffer.truncate(needed);
        return Ok(buffer);
    }

    tracing::trace!(capacity, needed, "regrowing transfer buffer");
    buffer.fill(0);
    buffer.resize(needed, 0);

    let reported = call(&mut buffer)?;
    if reported > buffer.len() {
        // The reply grew again between the two calls.
        buffer.fill(0);
        return Err(SysError::UnexpectedSize {
            capacity: buffer.len(),
            reported,
        });
    }
    buffer.truncate(reported);
    Ok(buffer)
}

/// Fetch a reply by probing its length first.
pub fn fetch_probed<F>(mut call: F) -> Result<Vec<u8>>
where
    F: FnMut(&mut [u8]) -> Result<usize>,
{
    let mut probe: [u8; 0] = [];
    let size = call(&mut probe)?;
    let mut buffer = vec![0u8; size];
    let written = call(&mut buffer)?;
    if written > size {
        buffer.fill(0);
        return Err(SysError::UnexpectedSize {
            capacity: size,
            reported: written,
        });
    }
    buffer.truncate(written);
    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Errno;
    use proptest::prelude::*;

    /// A reply source that copies `reply` like the kernel does.
    fn copy_reply(reply: &[u8], buffer: &mut [u8]) -> usize {
        let n = reply.len().min(buffer.len());
        buffer[..n].copy_from_slice(&reply[..n]);
        reply.len()
    }

    #[test]
    fn test_fits_first_time() {
        let reply = b"user;0;0;3f010000;name\0".to_vec();
        let mut calls = 0;
        let out = fetch_with_capacity(64, |buf| {
            calls += 1;
            Ok(copy_reply(&reply, buf))
        })
        .unwrap();
        assert_eq!(out, reply);
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_regrows_once() {
        let reply: Vec<u8> = (0..200u8).collect();
        let mut sizes = Vec::new();
        let out = fetch_with_capacity(64, |buf| {
            sizes.push(buf.len());
            Ok(copy_reply(&reply, buf))
        })
        .unwrap();
        assert_eq!(out, reply);
        assert_eq!(sizes, vec![64, 200]);
    }

    #[test]
    fn test_reply_grew_between_calls() {
        let mut len = 100;
        let err = fetch_with_capacity(16, |buf| {
            let reply = vec![7u8; len];
            len += 4;
            Ok(copy_reply(&reply, buf))
        })
        .unwrap_err();
        assert!(matches!(
            err,
            SysError::UnexpectedSize {
                capacity: 100,
                reported: 104
            }
        ));
    }

    #[test]
    fn test_kernel_error_is_not_a_size_error() {
        let err = fetch_with_capacity(64, |_| Err(SysError::Kernel(Errno::EACCES))).unwrap_err();
        assert!(err.is_permission_denied());
    }

    #[test]
    fn test_empty_reply() {
        let out = fetch_with_capacity(64, |_| Ok(0)).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_probe_then_fetch() {
        let reply = vec![0xabu8; 192];
        let mut sizes = Vec::new();
        let out = fetch_probed(|buf| {
            sizes.push(buf.len());
            Ok(copy_reply(&reply, buf))
        })
        .unwrap();
        assert_eq!(out, reply);
        assert_eq!(sizes, vec![0, 192]);
    }

    #[test]
    fn test_probe_size_changed() {
        let mut len = 32;
        let err = fetch_probed(|buf| {
            let reply = vec![1u8; len];
            len *= 2;
            Ok(copy_reply(&reply, buf))
        })
        .unwrap_err();
        assert!(matches!(
            err,
            SysError::UnexpectedSize {
                capacity: 32,
                reported: 64
            }
        ));
    }

    proptest! {
        #[test]
        fn prop_capacity_guess_returns_whole_reply(
            reply in proptest::collection::vec(any::<u8>(), 0..512),
            capacity in 0usize..256,
        ) {
            let mut calls = 0;
            let out = fetch_with_capacity(capacity, |buf| {
                calls += 1;
                Ok(copy_reply(&reply, buf))
            })
            .unwrap();
            prop_assert_eq!(&out, &reply);
            prop_assert_eq!(calls, if reply.len() <= capacity { 1 } else { 2 });
        }

        #[test]
        fn prop_probe_returns_whole_reply(reply in proptest::collection::vec(any::<u8>(), 0..512)) {
            let out = fetch_probed(|buf| Ok(copy_reply(&reply, buf))).unwrap();
            prop_assert_eq!(out, reply);
        }
    }
}
