#[path = "../common/mod.rs"]
mod common;

use libport100::protocol::responses::{decode_in_comm_rf, decode_status, decode_version};
use libport100::protocol::{CommunicationStatus, StatusCode, decode_sensf_res};
use libport100::Error;

#[test]
fn decode_sensf_res_fixture() {
    let card = decode_sensf_res(&common::fixtures::sensf_res_frame())
        .unwrap()
        .unwrap();
    assert_eq!(card.idm(), &common::fixtures::sample_idm());
    assert_eq!(card.pmm(), &common::fixtures::sample_pmm());
    assert_eq!(card.system_code(), Some(common::fixtures::sample_system_code()));
}

#[test]
fn decode_status_and_version() {
    decode_status(&[0x00]).unwrap();
    match decode_status(&[0x03]) {
        Err(Error::Status(status)) => {
            assert_eq!(status, StatusCode::RfcaError);
            assert_eq!(status.to_string(), "RFCA_ERROR (0x03)");
        }
        other => panic!("unexpected {:?}", other),
    }
    assert_eq!(decode_version(&[0x11, 0x01]).unwrap().to_string(), "1.11");
}

#[test]
fn decode_in_comm_rf_status_word() {
    let err = decode_in_comm_rf(&[0x84, 0x00, 0x00, 0x00, 0x00]).unwrap_err();
    match &err {
        Error::Communication(status) => {
            assert!(status.contains(CommunicationStatus::CRC));
            assert!(status.is_receive_timeout());
        }
        other => panic!("unexpected {:?}", other),
    }
    assert!(err.is_receive_timeout());

    let data = decode_in_comm_rf(&[0, 0, 0, 0, 0, 0x12, 0x34]).unwrap();
    assert_eq!(data, vec![0x12, 0x34]);
}
