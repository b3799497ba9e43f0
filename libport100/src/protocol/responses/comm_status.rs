// libport100/src/protocol/responses/comm_status.rs
//! InCommRF communication status word.

use derive_more::{From, Into};
use std::fmt;

/// 32-bit communication status word returned by InCommRF. Zero means the
/// RF exchange succeeded; every other value is a set of error flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, From, Into)]
pub struct CommunicationStatus(u32);

impl CommunicationStatus {
    /// Protocol error.
    pub const PROTOCOL: u32 = 0x0000_0001;
    /// Parity error.
    pub const PARITY: u32 = 0x0000_0002;
    /// CRC error.
    pub const CRC: u32 = 0x0000_0004;
    /// Collision detected.
    pub const COLLISION: u32 = 0x0000_0008;
    /// Receive buffer overflow.
    pub const OVERFLOW: u32 = 0x0000_0010;
    /// Temperature out of range.
    pub const TEMPERATURE: u32 = 0x0000_0040;
    /// No answer within the timeout.
    pub const RECEIVE_TIMEOUT: u32 = 0x0000_0080;
    /// Crypto1 error.
    pub const CRYPTO1: u32 = 0x0000_0100;
    /// RF collision avoidance failed.
    pub const RFCA: u32 = 0x0000_0200;
    /// RF field is off.
    pub const RF_OFF: u32 = 0x0000_0400;
    /// Transmit timed out.
    pub const TRANSMIT_TIMEOUT: u32 = 0x0000_0800;
    /// Received length error.
    pub const RECEIVE_LENGTH: u32 = 0x8000_0000;

    const FLAGS: [(u32, &'static str); 12] = [
        (Self::PROTOCOL, "PROTOCOL_ERROR"),
        (Self::PARITY, "PARITY_ERROR"),
        (Self::CRC, "CRC_ERROR"),
        (Self::COLLISION, "COLLISION_ERROR"),
        (Self::OVERFLOW, "OVERFLOW_ERROR"),
        (Self::TEMPERATURE, "TEMPERATURE_ERROR"),
        (Self::RECEIVE_TIMEOUT, "RECEIVE_TIMEOUT_ERROR"),
        (Self::CRYPTO1, "CRYPTO1_ERROR"),
        (Self::RFCA, "RFCA_ERROR"),
        (Self::RF_OFF, "RF_OFF_ERROR"),
        (Self::TRANSMIT_TIMEOUT, "TRANSMIT_TIMEOUT_ERROR"),
        (Self::RECEIVE_LENGTH, "RECEIVE_LENGTH_ERROR"),
    ];

    /// Wrap a raw status word.
    pub const fn new(bits: u32) -> Self {
        Self(bits)
    }

    /// Raw status word.
    pub fn bits(&self) -> u32 {
        self.0
    }

    /// True for a zero status word.
    pub fn is_success(&self) -> bool {
        self.0 == 0
    }

    /// True when every bit of `flag` is set.
    pub fn contains(&self, flag: u32) -> bool {
        self.0 & flag == flag
    }

    /// No card answered within the RF timeout.
    pub fn is_receive_timeout(&self) -> bool {
        self.contains(Self::RECEIVE_TIMEOUT)
    }

    /// Names of the known flags set in this word, lowest bit first.
    pub fn flag_names(&self) -> Vec<&'static str> {
        Self::FLAGS
            .iter()
            .filter(|(flag, _)| self.contains(*flag))
            .map(|(_, name)| *name)
            .collect()
    }

    /// Bits not covered by a named flag.
    pub fn unknown_bits(&self) -> u32 {
        Self::FLAGS.iter().fold(self.0, |rest, (flag, _)| rest & !flag)
    }
}

impl fmt::Display for CommunicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_success() {
            return f.write_str("NO_ERROR");
        }
        let mut parts: Vec<String> = self.flag_names().iter().map(|s| s.to_string()).collect();
        if self.unknown_bits() != 0 {
            parts.push(format!("{:#010x}", self.unknown_bits()));
        }
        write!(f, "{}", parts.join("|"))
    }
}
