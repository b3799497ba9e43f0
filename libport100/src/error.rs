// libport100/src/error.rs
//! Crate error types.

use thiserror::Error;

use crate::protocol::{CommunicationStatus, StatusCode};

/// Which checksum-protected region of a Data frame failed verification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChecksumRegion {
    /// The LE16 length field and its checksum.
    Length,
    /// The payload and its checksum.
    Payload,
}

impl std::fmt::Display for ChecksumRegion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Length => f.write_str("length"),
            Self::Payload => f.write_str("payload"),
        }
    }
}

/// フレーム層のエラー (Data frame violations).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FrameError {
    /// A checksum byte does not cancel its region.
    #[error("{region} checksum mismatch: expected {expected:#04x}, got {actual:#04x}")]
    ChecksumMismatch {
        /// Region that failed.
        region: ChecksumRegion,
        /// Checksum computed over the received bytes.
        expected: u8,
        /// Checksum byte on the wire.
        actual: u8,
    },

    /// The frame ends before its declared payload and checksum.
    #[error("truncated data frame: expected at least {expected} bytes, got {actual}")]
    Truncated {
        /// Bytes the header promises.
        expected: usize,
        /// Bytes received.
        actual: usize,
    },

    /// Payload longer than the LE16 length field allows.
    #[error("payload too long for a data frame: {0} bytes")]
    PayloadTooLong(usize),
}

/// 共通エラー型 (crate-wide error).
#[derive(Error, Debug)]
pub enum Error {
    /// No supported reader is attached, or no transport was given.
    #[error("device not found")]
    DeviceNotFound,

    /// USB failure other than a timeout.
    #[cfg(feature = "usb")]
    #[error("usb error: {0}")]
    Usb(#[from] rusb::Error),

    /// Transport failure outside rusb.
    #[error("transport error: {0}")]
    Transport(String),

    /// The transport accepted fewer bytes than the frame holds.
    #[error("short write: expected {expected} bytes, wrote {actual}")]
    ShortWrite {
        /// Frame length.
        expected: usize,
        /// Bytes written.
        actual: usize,
    },

    /// Nothing arrived within the read timeout.
    #[error("operation timed out")]
    Timeout,

    /// The chipset or transport was already closed.
    #[error("chipset already closed")]
    Closed,

    /// Malformed Data frame.
    #[error(transparent)]
    Frame(#[from] FrameError),

    /// A result or identifier is shorter than its layout.
    #[error("invalid packet length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Minimum length of the layout.
        expected: usize,
        /// Length received.
        actual: usize,
    },

    /// Non-zero status byte from a configuration command.
    #[error("status error: {0}")]
    Status(StatusCode),

    /// Non-zero InCommRF status word.
    #[error("communication error: {0}")]
    Communication(CommunicationStatus),

    /// Argument rejected before any I/O.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),
}

impl Error {
    /// True when the transport reported that nothing arrived in time.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Timeout)
    }

    /// True for a communication status carrying the receive-timeout bit,
    /// i.e. no card answered the RF request.
    pub fn is_receive_timeout(&self) -> bool {
        matches!(self, Self::Communication(status) if status.is_receive_timeout())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
