//! Single-use secret payloads.
//!
//! A [`SecurePayload`] borrows the caller's buffer, lets the client hand it
//! to the kernel once, and overwrites it afterwards. The wrapper never copies
//! the bytes.

use std::fmt;

use crate::error::{KrsError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PayloadState {
    Fresh,
    Consumed,
}

/// Secret bytes that may be passed to the kernel exactly once.
///
/// Once consumed, the contents can no longer be read through the wrapper.
/// The buffer is scrubbed when the wrapper is dropped unless
/// [`overwrite`](SecurePayload::overwrite) already did it.
pub struct SecurePayload<'a> {
    data: &'a mut [u8],
    state: PayloadState,
    scrubbed: bool,
}

impl<'a> SecurePayload<'a> {
    pub fn new(data: &'a mut [u8]) -> Self {
        Self {
            data,
            state: PayloadState::Fresh,
            scrubbed: false,
        }
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn is_consumed(&self) -> bool {
        self.state == PayloadState::Consumed
    }

    /// Take the bytes for the kernel hand-off.
    pub(crate) fn consume(&mut self) -> Result<&[u8]> {
        if self.state == PayloadState::Consumed {
            return Err(KrsError::PayloadAlreadyConsumed);
        }
        self.state = PayloadState::Consumed;
        Ok(&*self.data)
    }

    /// Mark the payload consumed and fill byte `i` with `i mod 256`.
    ///
    /// Returns the wrapping sum of the bytes written. The value only
    /// reflects the fill pattern and says nothing about the old contents.
    pub fn overwrite(&mut self) -> u8 {
        self.state = PayloadState::Consumed;
        self.scrubbed = true;
        let mut sum = 0u8;
        for (i, byte) in self.data.iter_mut().enumerate() {
            let value = i as u8;
            *byte = value;
            sum = sum.wrapping_add(value);
        }
        sum
    }
}

impl Drop for SecurePayload<'_> {
    fn drop(&mut self) {
        if !self.scrubbed {
            self.overwrite();
        }
    }
}

impl fmt::Debug for SecurePayload<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecurePayload")
            .field("len", &self.data.len())
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_consume_once() {
        let mut buf = *b"secret";
        let mut payload = SecurePayload::new(&mut buf);
        assert!(!payload.is_consumed());
        assert_eq!(payload.consume().unwrap(), b"secret");
        assert!(payload.is_consumed());
        assert!(matches!(
            payload.consume(),
            Err(KrsError::PayloadAlreadyConsumed)
        ));
    }

    #[test]
    fn test_overwrite_then_consume_fails() {
        let mut buf = [0xaau8; 4];
        let mut payload = SecurePayload::new(&mut buf);
        assert_eq!(payload.overwrite(), 6);
        assert!(payload.consume().is_err());
        drop(payload);
        assert_eq!(buf, [0, 1, 2, 3]);
    }

    #[test]
    fn test_drop_scrubs_unconsumed() {
        let mut buf = [0xffu8; 3];
        drop(SecurePayload::new(&mut buf));
        assert_eq!(buf, [0, 1, 2]);
    }

    #[test]
    fn test_drop_scrubs_after_consume() {
        let mut buf = *b"key!";
        {
            let mut payload = SecurePayload::new(&mut buf);
            payload.consume().unwrap();
        }
        assert_eq!(buf, [0, 1, 2, 3]);
    }

    #[test]
    fn test_overwrite_wraps_past_256() {
        let mut buf = vec![0u8; 300];
        let mut payload = SecurePayload::new(&mut buf);
        let sum = payload.overwrite();
        drop(payload);
        assert_eq!(buf[255], 255);
        assert_eq!(buf[256], 0);
        assert_eq!(buf[299], 43);
        let expected = (0..300u32).map(|i| i % 256).sum::<u32>() % 256;
        assert_eq!(u32::from(sum), expected);
    }

    #[test]
    fn test_empty_payload() {
        let mut buf: [u8; 0] = [];
        let mut payload = SecurePayload::new(&mut buf);
        assert!(payload.is_empty());
        assert_eq!(payload.overwrite(), 0);
    }

    #[test]
    fn test_debug_hides_contents() {
        let mut buf = *b"hunter2";
        let payload = SecurePayload::new(&mut buf);
        let text = format!("{payload:?}");
        assert!(!text.contains("hunter2"));
        assert!(text.contains("len: 7"));
    }

    proptest! {
        #[test]
        fn prop_overwrite_pattern(mut data in proptest::collection::vec(any::<u8>(), 0..1024)) {
            let len = data.len();
            let mut payload = SecurePayload::new(&mut data);
            let sum = payload.overwrite();
            prop_assert_eq!(payload.len(), len);
            drop(payload);

            let mut expected = 0u8;
            for (i, &byte) in data.iter().enumerate() {
                prop_assert_eq!(byte, (i % 256) as u8);
                expected = expected.wrapping_add(byte);
            }
            prop_assert_eq!(sum, expected);
        }

        #[test]
        fn prop_second_consume_fails(mut data in proptest::collection::vec(any::<u8>(), 1..64)) {
            let original = data.clone();
            let mut payload = SecurePayload::new(&mut data);
            prop_assert_eq!(payload.consume().unwrap(), original.as_slice());
            prop_assert!(payload.consume().is_err());
        }
    }
}
