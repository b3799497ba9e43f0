// libport100/src/test_support.rs
//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize the MockTransport scripting every chipset test
//! needs (open handshake, status replies, firmware query) so tests across
//! the crate and the tests/ directory share the same frames.
#![allow(dead_code)]

use crate::constants::ACK_FRAME;
use crate::device::Device;
use crate::protocol::CommandCode;
use crate::protocol::codec::encode_response_frame;
use crate::transport::MockTransport;
use crate::types::{DeviceType, FirmwareVersion};
use crate::{Config, Result};

/// Firmware version reported by `seed_firmware_version` unless told
/// otherwise.
#[doc(hidden)]
pub const MOCK_FIRMWARE_VERSION: FirmwareVersion = FirmwareVersion::new(0x0110);

/// The Ack frame as raw bytes.
#[doc(hidden)]
pub fn ack_frame() -> Vec<u8> {
    ACK_FRAME.to_vec()
}

/// Data frame carrying `D7 <code+1> <results...>`.
#[doc(hidden)]
pub fn response_frame(code: CommandCode, results: &[u8]) -> Vec<u8> {
    match encode_response_frame(code, results) {
        Ok(frame) => frame,
        Err(e) => panic!("response frame for {:?} does not fit: {}", code, e),
    }
}

/// Queue an Ack followed by the response to `code`.
#[doc(hidden)]
pub fn seed_reply(mock: &MockTransport, code: CommandCode, results: &[u8]) {
    mock.push_response(ack_frame());
    mock.push_response(response_frame(code, results));
}

/// Queue an Ack followed by a single status byte answering `code`.
#[doc(hidden)]
pub fn seed_status(mock: &MockTransport, code: CommandCode, status: u8) {
    seed_reply(mock, code, &[status]);
}

/// Queue the replies `Chipset::open` consumes: the drain timeout,
/// SetCommandType and SwitchRF(off) success.
#[doc(hidden)]
pub fn seed_open_handshake(mock: &MockTransport) {
    mock.push_timeout();
    seed_status(mock, CommandCode::SetCommandType, 0x00);
    seed_status(mock, CommandCode::SwitchRf, 0x00);
}

/// Queue an Ack followed by a GetFirmwareVersion reply carrying `version`.
#[doc(hidden)]
pub fn seed_firmware_version(mock: &MockTransport, version: FirmwareVersion) {
    let raw = version.as_u16().to_le_bytes();
    seed_reply(mock, CommandCode::GetFirmwareVersion, &raw);
}

/// Queue the InSetRF / InSetProtocol successes `sense_type_f` consumes
/// before its InCommRF exchange.
#[doc(hidden)]
pub fn seed_sense_setup(mock: &MockTransport) {
    seed_status(mock, CommandCode::InSetRf, 0x00);
    seed_status(mock, CommandCode::InSetProtocol, 0x00);
}

/// InCommRF result: LE32 status word, one header byte, then the RF frame.
#[doc(hidden)]
pub fn in_comm_rf_result(status: u32, frame: &[u8]) -> Vec<u8> {
    let mut result = status.to_le_bytes().to_vec();
    result.push(0x00);
    result.extend_from_slice(frame);
    result
}

/// Open a `Device` over a fresh MockTransport. The returned mock shares
/// state with the one the device owns.
#[doc(hidden)]
pub fn opened_mock_device(device_type: DeviceType) -> Result<(Device, MockTransport)> {
    let mock = MockTransport::new(device_type);
    seed_open_handshake(&mock);
    seed_firmware_version(&mock, MOCK_FIRMWARE_VERSION);
    let device = Device::open_with_config(Box::new(mock.clone()), Config::default())?;
    Ok((device, mock))
}
