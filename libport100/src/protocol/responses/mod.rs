// libport100/src/protocol/responses/mod.rs
//! Decoders for chipset command results.

pub mod comm_status;
pub mod status;

pub use comm_status::CommunicationStatus;
pub use status::StatusCode;

use crate::protocol::parser;
use crate::types::FirmwareVersion;
use crate::{Error, Result};

/// Decode a single status-byte result. Non-zero statuses are errors.
pub fn decode_status(result: &[u8]) -> Result<()> {
    let status = StatusCode::from(parser::byte_at(result, 0)?);
    if !status.is_success() {
        return Err(Error::Status(status));
    }
    Ok(())
}

/// Decode a GetFirmwareVersion / GetPDDataVersion result (LE16).
pub fn decode_version(result: &[u8]) -> Result<FirmwareVersion> {
    Ok(FirmwareVersion::new(parser::le_u16_at(result, 0)?))
}

/// Offset of the RF frame inside an InCommRF result: a 4-byte status word
/// followed by one more header byte.
pub const IN_COMM_RF_DATA_OFFSET: usize = 5;

/// Decode an InCommRF result. A non-zero status word is a communication
/// error; on success the received RF frame is returned.
pub fn decode_in_comm_rf(result: &[u8]) -> Result<Vec<u8>> {
    let status = CommunicationStatus::new(parser::le_u32_at(result, 0)?);
    if !status.is_success() {
        return Err(Error::Communication(status));
    }
    Ok(parser::tail_from(result, IN_COMM_RF_DATA_OFFSET)?.to_vec())
}
