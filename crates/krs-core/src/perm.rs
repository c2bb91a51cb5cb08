//! Permission masks and their textual form.
//!
//! The kernel stores permissions as a 32-bit value split into four 8-bit
//! lanes: possessor, user, group and other, most significant first. Each lane
//! only uses its low six bits:
//!
//! | bit  | flag    | marker |
//! |------|---------|--------|
//! | 0x20 | setattr | `a`    |
//! | 0x10 | link    | `l`    |
//! | 0x08 | search  | `s`    |
//! | 0x04 | write   | `w`    |
//! | 0x02 | read    | `r`    |
//! | 0x01 | view    | `v`    |
//!
//! The two top bits of every lane are reserved and always zero. The textual
//! form drops them, leaving 24 characters, for example
//! `alswrv-----v------------` for `0x3f010000`.

use std::fmt;
use std::ops::{BitOr, BitOrAssign};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Length of the textual permission form.
pub const PERMISSION_TEXT_LEN: usize = 24;

/// Character meaning "flag clear" in the textual form.
const FILLER: char = '-';

/// Markers for the six flags of a lane, left to right (setattr first).
const MARKERS: [char; 6] = ['a', 'l', 's', 'w', 'r', 'v'];

/// Meaningful bits per lane.
const LANE_WIDTH: u32 = 6;

/// Reserved bits on top of every lane.
const RESERVED_WIDTH: u32 = 2;

/// One of the four "who" classes of a permission mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Lane {
    /// A process that possesses the key (reached it through its keyrings).
    Possessor,
    /// The key's owner.
    User,
    /// Members of the key's group.
    Group,
    /// Everyone else.
    Other,
}

/// Position of a lane inside the packed mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LaneLayout {
    pub lane: Lane,
    /// Bit offset of the lane's lowest flag.
    pub offset: u32,
    /// Number of flag bits.
    pub width: u32,
    /// Number of reserved bits directly above the flags.
    pub reserved: u32,
}

impl LaneLayout {
    const fn new(lane: Lane, offset: u32) -> Self {
        Self {
            lane,
            offset,
            width: LANE_WIDTH,
            reserved: RESERVED_WIDTH,
        }
    }

    /// Bits carrying flags for this lane.
    pub const fn mask(&self) -> u32 {
        ((1 << self.width) - 1) << self.offset
    }

    /// Bits that must stay zero for this lane.
    pub const fn reserved_mask(&self) -> u32 {
        ((1 << self.reserved) - 1) << (self.offset + self.width)
    }
}

/// The lane table, in textual order (most significant lane first).
pub const LANES: [LaneLayout; 4] = [
    LaneLayout::new(Lane::Possessor, 24),
    LaneLayout::new(Lane::User, 16),
    LaneLayout::new(Lane::Group, 8),
    LaneLayout::new(Lane::Other, 0),
];

const fn reserved_bits() -> u32 {
    let mut mask = 0;
    let mut i = 0;
    while i < LANES.len() {
        mask |= LANES[i].reserved_mask();
        i += 1;
    }
    mask
}

impl Lane {
    /// Layout entry for this lane.
    pub const fn layout(self) -> LaneLayout {
        match self {
            Lane::Possessor => LANES[0],
            Lane::User => LANES[1],
            Lane::Group => LANES[2],
            Lane::Other => LANES[3],
        }
    }
}

/// The six flags of a single lane.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Permission(u8);

impl Permission {
    pub const NONE: Self = Self(0x00);
    pub const VIEW: Self = Self(0x01);
    pub const READ: Self = Self(0x02);
    pub const WRITE: Self = Self(0x04);
    pub const SEARCH: Self = Self(0x08);
    pub const LINK: Self = Self(0x10);
    pub const SETATTR: Self = Self(0x20);
    pub const ALL: Self = Self(0x3f);

    /// Build from raw lane bits, dropping the reserved ones.
    pub const fn from_bits_truncate(bits: u8) -> Self {
        Self(bits & Self::ALL.0)
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Permission {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl fmt::Debug for Permission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Permission({:#04x})", self.0)
    }
}

/// A packed kernel permission mask.
///
/// Values built through [`KeyPermissions::new`], the flag constants or
/// [`KeyPermissions::decode`] never carry reserved bits.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct KeyPermissions(u32);

impl KeyPermissions {
    pub const POS_VIEW: Self = Self(0x0100_0000);
    pub const POS_READ: Self = Self(0x0200_0000);
    pub const POS_WRITE: Self = Self(0x0400_0000);
    pub const POS_SEARCH: Self = Self(0x0800_0000);
    pub const POS_LINK: Self = Self(0x1000_0000);
    pub const POS_SETATTR: Self = Self(0x2000_0000);
    pub const POS_ALL: Self = Self(0x3f00_0000);

    pub const USR_VIEW: Self = Self(0x0001_0000);
    pub const USR_READ: Self = Self(0x0002_0000);
    pub const USR_WRITE: Self = Self(0x0004_0000);
    pub const USR_SEARCH: Self = Self(0x0008_0000);
    pub const USR_LINK: Self = Self(0x0010_0000);
    pub const USR_SETATTR: Self = Self(0x0020_0000);
    pub const USR_ALL: Self = Self(0x003f_0000);

    pub const GRP_VIEW: Self = Self(0x0000_0100);
    pub const GRP_READ: Self = Self(0x0000_0200);
    pub const GRP_WRITE: Self = Self(0x0000_0400);
    pub const GRP_SEARCH: Self = Self(0x0000_0800);
    pub const GRP_LINK: Self = Self(0x0000_1000);
    pub const GRP_SETATTR: Self = Self(0x0000_2000);
    pub const GRP_ALL: Self = Self(0x0000_3f00);

    pub const OTH_VIEW: Self = Self(0x0000_0001);
    pub const OTH_READ: Self = Self(0x0000_0002);
    pub const OTH_WRITE: Self = Self(0x0000_0004);
    pub const OTH_SEARCH: Self = Self(0x0000_0008);
    pub const OTH_LINK: Self = Self(0x0000_0010);
    pub const OTH_SETATTR: Self = Self(0x0000_0020);
    pub const OTH_ALL: Self = Self(0x0000_003f);

    /// No permissions at all.
    pub const EMPTY: Self = Self(0);

    /// Reserved bits of all four lanes.
    pub const RESERVED_MASK: u32 = reserved_bits();

    /// Create from a raw mask, rejecting reserved bits.
    pub fn new(bits: u32) -> Result<Self> {
        if bits & Self::RESERVED_MASK != 0 {
            return Err(CoreError::ReservedPermissionBits(bits));
        }
        Ok(Self(bits))
    }

    /// Create from a raw mask, clearing reserved bits.
    pub const fn from_bits_truncate(bits: u32) -> Self {
        Self(bits & !Self::RESERVED_MASK)
    }

    /// Get the raw mask.
    pub const fn bits(self) -> u32 {
        self.0
    }

    /// The flags of one lane.
    pub const fn lane(self, lane: Lane) -> Permission {
        let layout = lane.layout();
        Permission::from_bits_truncate((self.0 >> layout.offset) as u8)
    }

    /// Add flags to one lane.
    pub const fn with(self, lane: Lane, perm: Permission) -> Self {
        Self(self.0 | ((perm.bits() as u32) << lane.layout().offset))
    }

    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Parse the 24-character textual form.
    ///
    /// `-` clears a flag, any other character sets it. Characters are
    /// consumed from the right; after each lane the bit weight skips the two
    /// reserved bits.
    pub fn decode(text: &str) -> Result<Self> {
        let count = text.chars().count();
        if count != PERMISSION_TEXT_LEN {
            return Err(CoreError::InvalidPermissionLength(count));
        }

        let mut bits: u64 = 0;
        let mut weight: u64 = 1;
        for (consumed, c) in text.chars().rev().enumerate() {
            if c != FILLER {
                bits |= weight;
            }
            weight <<= 1;
            if (consumed + 1) % LANE_WIDTH as usize == 0 {
                weight <<= RESERVED_WIDTH;
            }
        }

        Ok(Self(bits as u32))
    }

    /// Render the 24-character textual form, as `keyctl describe` prints it.
    ///
    /// Reserved bits have no textual representation and are ignored.
    pub fn encode(self) -> String {
        let mut text = String::with_capacity(PERMISSION_TEXT_LEN);
        for layout in LANES {
            let lane = self.lane(layout.lane).bits();
            for (i, marker) in MARKERS.iter().enumerate() {
                let bit = 1u8 << (LANE_WIDTH as usize - 1 - i);
                text.push(if lane & bit != 0 { *marker } else { FILLER });
            }
        }
        text
    }
}

impl BitOr for KeyPermissions {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl BitOrAssign for KeyPermissions {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl fmt::Debug for KeyPermissions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "KeyPermissions({:#010x} {})", self.0, self.encode())
    }
}

impl fmt::Display for KeyPermissions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl fmt::LowerHex for KeyPermissions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(&self.0, f)
    }
}

impl FromStr for KeyPermissions {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        Self::decode(s)
    }
}

impl From<KeyPermissions> for String {
    fn from(perm: KeyPermissions) -> Self {
        perm.encode()
    }
}

impl TryFrom<String> for KeyPermissions {
    type Error = CoreError;

    fn try_from(s: String) -> Result<Self> {
        Self::decode(&s)
    }
}

impl TryFrom<u32> for KeyPermissions {
    type Error = CoreError;

    fn try_from(bits: u32) -> Result<Self> {
        Self::new(bits)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_lane_table_covers_all_bits() {
        let mut seen = 0u32;
        for layout in LANES {
            assert_eq!(seen & (layout.mask() | layout.reserved_mask()), 0);
            seen |= layout.mask() | layout.reserved_mask();
        }
        assert_eq!(seen, u32::MAX);
        assert_eq!(KeyPermissions::RESERVED_MASK, 0xc0c0_c0c0);
    }

    #[test]
    fn test_decode_default_user_key() {
        let perm = KeyPermissions::decode("alswrv-----v------------").unwrap();
        assert_eq!(perm.bits(), 0x3f01_0000);
        assert_eq!(perm, KeyPermissions::POS_ALL | KeyPermissions::USR_VIEW);
    }

    #[test]
    fn test_decode_mixed_lanes() {
        let perm = KeyPermissions::decode("alswrva----v-l-wrv---w-v").unwrap();
        assert_eq!(perm.bits(), 0x3f21_1705);
    }

    #[test]
    fn test_decode_accepts_any_marker() {
        let perm = KeyPermissions::decode("xxxxxx------------------").unwrap();
        assert_eq!(perm, KeyPermissions::POS_ALL);
    }

    #[test]
    fn test_decode_rejects_wrong_length() {
        assert!(matches!(
            KeyPermissions::decode("alswrv"),
            Err(CoreError::InvalidPermissionLength(6))
        ));
        assert!(matches!(
            KeyPermissions::decode(&"-".repeat(25)),
            Err(CoreError::InvalidPermissionLength(25))
        ));
    }

    #[test]
    fn test_encode_matches_keyctl_rendering() {
        let perm = KeyPermissions::new(0x3f21_1705).unwrap();
        assert_eq!(perm.encode(), "alswrva----v-l-wrv---w-v");
        assert_eq!(KeyPermissions::EMPTY.to_string(), "-".repeat(24));
    }

    #[test]
    fn test_new_rejects_reserved_bits() {
        assert!(matches!(
            KeyPermissions::new(0x4000_0000),
            Err(CoreError::ReservedPermissionBits(0x4000_0000))
        ));
        assert_eq!(KeyPermissions::from_bits_truncate(0xffff_ffff).bits(), 0x3f3f_3f3f);
    }

    #[test]
    fn test_lane_builder() {
        let perm = KeyPermissions::EMPTY
            .with(Lane::Possessor, Permission::ALL)
            .with(Lane::User, Permission::VIEW | Permission::READ);
        assert_eq!(perm.bits(), 0x3f03_0000);
        assert_eq!(perm.lane(Lane::User), Permission::VIEW | Permission::READ);
        assert!(perm.lane(Lane::Other).is_empty());
        assert!(perm.contains(KeyPermissions::USR_READ));
        assert!(!perm.contains(KeyPermissions::GRP_VIEW));
    }

    #[test]
    fn test_serde_uses_text() {
        let perm = KeyPermissions::POS_ALL | KeyPermissions::USR_VIEW;
        let json = serde_json::to_string(&perm).unwrap();
        assert_eq!(json, "\"alswrv-----v------------\"");
        let back: KeyPermissions = serde_json::from_str(&json).unwrap();
        assert_eq!(back, perm);
    }

    proptest! {
        #[test]
        fn test_decode_inverts_encode(raw in any::<u32>()) {
            let perm = KeyPermissions::from_bits_truncate(raw);
            prop_assert_eq!(KeyPermissions::decode(&perm.encode()).unwrap(), perm);
        }

        #[test]
        fn test_decode_never_sets_reserved_bits(text in "[-x]{24}") {
            let perm = KeyPermissions::decode(&text).unwrap();
            prop_assert_eq!(perm.bits() & KeyPermissions::RESERVED_MASK, 0);
        }
    }
}
