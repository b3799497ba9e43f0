// libport100/src/protocol/commands/comm.rs
//! InCommRF argument encoding.

use crate::protocol::parser::le_u16;

/// Convert a host timeout in milliseconds into InCommRF device units
/// (0.1 ms): `min(ceil(ms) * 10, 0xFFFF)`. Zero, negative and NaN inputs
/// disable the timeout (0).
pub fn device_timeout(timeout_ms: f64) -> u16 {
    if timeout_ms.is_nan() || timeout_ms <= 0.0 {
        return 0;
    }
    let units = timeout_ms.ceil() * 10.0;
    if units >= f64::from(u16::MAX) {
        u16::MAX
    } else {
        units as u16
    }
}

/// InCommRF arguments: LE16 device timeout followed by the RF frame.
pub fn encode_in_comm_rf(data: &[u8], timeout_ms: f64) -> Vec<u8> {
    let mut buf = Vec::with_capacity(2 + data.len());
    buf.extend_from_slice(&le_u16(device_timeout(timeout_ms)));
    buf.extend_from_slice(data);
    buf
}
