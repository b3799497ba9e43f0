// fixtures.rs — provides commonly used test payloads/frames

use libport100::types::{Idm, Pmm, SystemCode};

pub fn sample_idm_bytes() -> [u8; 8] {
    [0x01, 0x2e, 0x4c, 0xd2, 0x1a, 0x13, 0x4f, 0x09]
}

pub fn sample_pmm_bytes() -> [u8; 8] {
    [0x03, 0x01, 0x4b, 0x02, 0x4f, 0x49, 0x93, 0xff]
}

pub fn sample_system_code() -> SystemCode {
    SystemCode::new(0x0003)
}

pub fn sample_idm() -> Idm {
    Idm::from_bytes(sample_idm_bytes())
}

pub fn sample_pmm() -> Pmm {
    Pmm::from_bytes(sample_pmm_bytes())
}

/// SENSF_RES as received over RF: length byte, 0x01, IDm, PMm, system code.
pub fn sensf_res_frame() -> Vec<u8> {
    let mut frame = vec![0x14u8, 0x01];
    frame.extend_from_slice(&sample_idm_bytes());
    frame.extend_from_slice(&sample_pmm_bytes());
    frame.extend_from_slice(&sample_system_code().to_be_bytes());
    frame
}

/// SENSF_REQ for any system code, asking for the system code.
pub fn sensf_req_frame() -> Vec<u8> {
    hex::decode("0600ffff0100").unwrap()
}

/// Wire bytes of a SetCommandType(1) request as captured from a RC-S380.
pub fn set_command_type_request() -> Vec<u8> {
    hex::decode("0000ffffff0300fdd62a01ff00").unwrap()
}

/// Wire bytes of a SwitchRF(off) request.
pub fn switch_rf_off_request() -> Vec<u8> {
    hex::decode("0000ffffff0300fdd606002400").unwrap()
}
