// libport100/src/protocol/responses/status.rs
//! Status byte of configuration commands.

use std::fmt;

/// Status byte returned by the chipset for configuration commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StatusCode {
    /// Command accepted.
    Success,
    /// Invalid parameter.
    ParameterError,
    /// PB error.
    PbError,
    /// RF collision avoidance failed.
    RfcaError,
    /// Temperature out of range.
    TemperatureError,
    /// Password error.
    PwdError,
    /// Receive error.
    ReceiveError,
    /// Command type not supported.
    CommandTypeError,
    /// Value outside the documented range; the raw byte is kept. Build
    /// codes with `From<u8>` so documented values get their own variant.
    Unknown(u8),
}

const NAMES: [&str; 8] = [
    "SUCCESS",
    "PARAMETER_ERROR",
    "PB_ERROR",
    "RFCA_ERROR",
    "TEMPERATURE_ERROR",
    "PWD_ERROR",
    "RECEIVE_ERROR",
    "COMMANDTYPE_ERROR",
];

impl StatusCode {
    /// Raw status byte.
    pub fn as_u8(&self) -> u8 {
        match self {
            Self::Success => 0,
            Self::ParameterError => 1,
            Self::PbError => 2,
            Self::RfcaError => 3,
            Self::TemperatureError => 4,
            Self::PwdError => 5,
            Self::ReceiveError => 6,
            Self::CommandTypeError => 7,
            Self::Unknown(raw) => *raw,
        }
    }

    /// Symbolic name, `None` for `Unknown`.
    pub fn name(&self) -> Option<&'static str> {
        match self {
            Self::Unknown(_) => None,
            _ => NAMES.get(usize::from(self.as_u8())).copied(),
        }
    }

    /// True for `Success`.
    pub fn is_success(&self) -> bool {
        *self == Self::Success
    }
}

impl From<u8> for StatusCode {
    fn from(raw: u8) -> Self {
        match raw {
            0 => Self::Success,
            1 => Self::ParameterError,
            2 => Self::PbError,
            3 => Self::RfcaError,
            4 => Self::TemperatureError,
            5 => Self::PwdError,
            6 => Self::ReceiveError,
            7 => Self::CommandTypeError,
            other => Self::Unknown(other),
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.name() {
            Some(name) => write!(f, "{} ({:#04x})", name, self.as_u8()),
            None => write!(f, "UNKNOWN STATUS ERROR {:#04x}", self.as_u8()),
        }
    }
}
