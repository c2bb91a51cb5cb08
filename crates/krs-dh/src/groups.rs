//! Standard DH groups.
//!
//! The supported groups are the MODP groups of RFC 3526. All of them use the
//! generator 2.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{DhError, Result};
use crate::tables;

/// Generator shared by all supported groups, as a big-endian payload.
pub const GENERATOR: [u8; 1] = [2];

/// Size of a supported DH prime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "u32", try_from = "u32")]
pub enum PrimeSize {
    Bits1536,
    Bits2048,
    Bits3072,
    Bits4096,
    Bits6144,
    Bits8192,
}

impl PrimeSize {
    /// All supported sizes, smallest first.
    pub const ALL: [PrimeSize; 6] = [
        PrimeSize::Bits1536,
        PrimeSize::Bits2048,
        PrimeSize::Bits3072,
        PrimeSize::Bits4096,
        PrimeSize::Bits6144,
        PrimeSize::Bits8192,
    ];

    /// Look up a group by its prime size in bits.
    pub fn from_bits(bits: u32) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|size| size.bits() == bits)
            .ok_or(DhError::UnsupportedSize(bits))
    }

    pub const fn bits(self) -> u32 {
        match self {
            PrimeSize::Bits1536 => 1536,
            PrimeSize::Bits2048 => 2048,
            PrimeSize::Bits3072 => 3072,
            PrimeSize::Bits4096 => 4096,
            PrimeSize::Bits6144 => 6144,
            PrimeSize::Bits8192 => 8192,
        }
    }

    /// Length of the prime, and of every result in this group, in bytes.
    pub const fn byte_len(self) -> usize {
        self.bits() as usize / 8
    }

    /// The big-endian prime.
    pub fn prime(self) -> &'static [u8] {
        match self {
            PrimeSize::Bits1536 => &tables::MODP_1536,
            PrimeSize::Bits2048 => &tables::MODP_2048,
            PrimeSize::Bits3072 => &tables::MODP_3072,
            PrimeSize::Bits4096 => &tables::MODP_4096,
            PrimeSize::Bits6144 => &tables::MODP_6144,
            PrimeSize::Bits8192 => &tables::MODP_8192,
        }
    }

    /// The big-endian generator.
    pub fn generator(self) -> &'static [u8] {
        &GENERATOR
    }
}

impl fmt::Display for PrimeSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.bits())
    }
}

impl From<PrimeSize> for u32 {
    fn from(size: PrimeSize) -> Self {
        size.bits()
    }
}

impl TryFrom<u32> for PrimeSize {
    type Error = DhError;

    fn try_from(bits: u32) -> Result<Self> {
        Self::from_bits(bits)
    }
}
