//! Proptest generators for property-based testing.

use proptest::prelude::*;

use krs_core::{KeyHandle, KeyPermissions, KeyType, Lane, Permission, PERMISSION_TEXT_LEN};

/// Generate a mask with no reserved bits set.
pub fn permissions() -> impl Strategy<Value = KeyPermissions> {
    any::<u32>().prop_map(KeyPermissions::from_bits_truncate)
}

/// Generate a raw mask that may carry reserved bits.
pub fn raw_mask() -> impl Strategy<Value = u32> {
    any::<u32>()
}

/// Generate the flags of one lane.
pub fn lane_flags() -> impl Strategy<Value = Permission> {
    (0u8..=0x3f).prop_map(Permission::from_bits_truncate)
}

/// Generate a lane.
pub fn lane() -> impl Strategy<Value = Lane> {
    prop_oneof![
        Just(Lane::Possessor),
        Just(Lane::User),
        Just(Lane::Group),
        Just(Lane::Other),
    ]
}

/// Generate a 24-character permission text with arbitrary set markers.
///
/// Any character other than `-` sets a flag, so the markers need not be
/// the canonical letters.
pub fn permission_text() -> impl Strategy<Value = String> {
    proptest::collection::vec(
        prop_oneof![Just('-'), Just('a'), Just('x'), Just('*'), Just('v')],
        PERMISSION_TEXT_LEN,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

/// Generate a text of the wrong length.
pub fn bad_permission_text() -> impl Strategy<Value = String> {
    (0usize..64)
        .prop_filter("must not be the valid length", |len| {
            *len != PERMISSION_TEXT_LEN
        })
        .prop_map(|len| "-".repeat(len))
}

/// Generate a key type.
pub fn key_type() -> impl Strategy<Value = KeyType> {
    prop_oneof![Just(KeyType::Keyring), Just(KeyType::User)]
}

/// Generate a positive (non-alias) key handle.
pub fn key_handle() -> impl Strategy<Value = KeyHandle> {
    (1i32..=i32::MAX).prop_map(KeyHandle::new)
}

/// Generate user key payload bytes of at most `max_len` bytes (at least one).
pub fn payload(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 1..=max_len.max(1))
}

/// Generate a key description.
pub fn key_name() -> impl Strategy<Value = String> {
    "[a-z][a-z0-9;:_-]{0,31}".prop_map(String::from)
}
