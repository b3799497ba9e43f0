// libport100/src/types.rs
//! Identifier and version newtypes shared across the crate.

use crate::Error;
use derive_more::{From, Into};
use std::convert::TryFrom;
use std::fmt;

/// IDm - Newtype Pattern (8 バイト)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Idm([u8; 8]);

impl Idm {
    /// Wrap raw IDm bytes.
    pub fn from_bytes(bytes: [u8; 8]) -> Self {
        Self(bytes)
    }

    /// Raw IDm bytes.
    pub fn as_bytes(&self) -> &[u8; 8] {
        &self.0
    }

    /// Lowercase hex without separators.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for Idm {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        <[u8; 8]>::try_from(bytes)
            .map(Self)
            .map_err(|_| Error::InvalidLength {
                expected: 8,
                actual: bytes.len(),
            })
    }
}

impl fmt::Display for Idm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", crate::utils::Hex(self.as_bytes()))
    }
}

/// PMm - Newtype Pattern (8 バイト)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pmm([u8; 8]);

impl Pmm {
    /// Wrap raw PMm bytes.
    pub fn from_bytes(bytes: [u8; 8]) -> Self {
        Self(bytes)
    }

    /// Raw PMm bytes.
    pub fn as_bytes(&self) -> &[u8; 8] {
        &self.0
    }

    /// IC code (ROM type, IC type) carried in the first two bytes.
    pub fn ic_code(&self) -> [u8; 2] {
        [self.0[0], self.0[1]]
    }
}

impl TryFrom<&[u8]> for Pmm {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        <[u8; 8]>::try_from(bytes)
            .map(Self)
            .map_err(|_| Error::InvalidLength {
                expected: 8,
                actual: bytes.len(),
            })
    }
}

impl fmt::Display for Pmm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", crate::utils::Hex(self.as_bytes()))
    }
}

/// SystemCode (u16). Type F carries it big-endian on the air.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, From, Into)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SystemCode(u16);

impl SystemCode {
    /// Wildcard accepted by every card during sensing.
    pub const ANY: Self = Self(0xffff);
    /// Common area system code.
    pub const COMMON: Self = Self(0xfe00);

    /// Wrap a raw system code.
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Raw system code.
    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// Wire order (big-endian) bytes.
    pub fn to_be_bytes(&self) -> [u8; 2] {
        self.0.to_be_bytes()
    }

    /// Build from wire order (big-endian) bytes.
    pub fn from_be_bytes(bytes: [u8; 2]) -> Self {
        Self(u16::from_be_bytes(bytes))
    }
}

/// Firmware or package-data version as reported by the chipset (LE16).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, From, Into)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FirmwareVersion(u16);

impl FirmwareVersion {
    /// Wrap a raw BCD-style version word, e.g. `0x0110` for 1.10.
    pub const fn new(raw: u16) -> Self {
        Self(raw)
    }

    /// Build from the little-endian bytes the chipset reports.
    pub fn from_le_bytes(bytes: [u8; 2]) -> Self {
        Self(u16::from_le_bytes(bytes))
    }

    /// Raw version word.
    pub fn as_u16(&self) -> u16 {
        self.0
    }

    /// High byte.
    pub fn major(&self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Low byte.
    pub fn minor(&self) -> u8 {
        (self.0 & 0xff) as u8
    }
}

// BCD-style rendering used by the vendor tools: 0x0110 -> "1.10"
impl fmt::Display for FirmwareVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:x}.{:02x}", self.major(), self.minor())
    }
}

/// DeviceType
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeviceType {
    /// RC-S380/S
    RcS380S,
    /// RC-S380/P
    #[default]
    RcS380P,
}

impl DeviceType {
    /// Map a USB product id to a reader model.
    pub fn from_product_id(pid: u16) -> Option<Self> {
        match pid {
            0x06c1 => Some(Self::RcS380S),
            0x06c3 => Some(Self::RcS380P),
            _ => None,
        }
    }

    /// USB product id of the model.
    pub fn product_id(&self) -> u16 {
        match self {
            Self::RcS380S => 0x06c1,
            Self::RcS380P => 0x06c3,
        }
    }
}
