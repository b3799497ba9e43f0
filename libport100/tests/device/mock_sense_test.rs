#[path = "../common/mod.rs"]
mod common;

use libport100::protocol::responses::CommunicationStatus;
use libport100::protocol::{BitrateProfile, CommandCode};
use libport100::types::DeviceType;

fn seed_sense_reply(mock: &libport100::transport::MockTransport, status: u32, frame: &[u8]) {
    common::seed_sense_setup(mock);
    common::seed_reply(
        mock,
        CommandCode::InCommRf,
        &common::in_comm_rf_result(status, frame),
    );
}

#[test]
fn sense_returns_card() {
    common::init_logger();
    let (mut dev, mock) = common::opened_mock_device(DeviceType::RcS380P).unwrap();
    seed_sense_reply(&mock, 0, &common::fixtures::sensf_res_frame());

    let card = dev.sense_type_f(BitrateProfile::F212).unwrap().unwrap();
    assert_eq!(card.idm(), &common::fixtures::sample_idm());
    assert_eq!(card.pmm(), &common::fixtures::sample_pmm());
    assert_eq!(card.system_code(), Some(common::fixtures::sample_system_code()));
    assert_eq!(card.sensf_res()[0], 0x01);
}

#[test]
fn sense_no_card_then_card() {
    let (mut dev, mock) = common::opened_mock_device(DeviceType::RcS380P).unwrap();

    seed_sense_reply(&mock, CommunicationStatus::RECEIVE_TIMEOUT, &[]);
    assert!(dev.sense_type_f(BitrateProfile::F212).unwrap().is_none());

    seed_sense_reply(&mock, 0, &common::fixtures::sensf_res_frame());
    assert!(dev.sense_type_f(BitrateProfile::F212).unwrap().is_some());
}

#[test]
fn sense_without_system_code() {
    let (mut dev, mock) = common::opened_mock_device(DeviceType::RcS380P).unwrap();
    let mut frame = common::fixtures::sensf_res_frame();
    frame.truncate(18);
    frame[0] = 18;
    seed_sense_reply(&mock, 0, &frame);

    let card = dev.sense_type_f(BitrateProfile::F424).unwrap().unwrap();
    assert_eq!(card.system_code(), None);
}

#[test]
fn sense_transport_failure_is_error() {
    let (mut dev, mock) = common::opened_mock_device(DeviceType::RcS380P).unwrap();
    common::seed_sense_setup(&mock);
    mock.push_error(libport100::Error::Transport("cable pulled".into()));
    assert!(dev.sense_type_f(BitrateProfile::F212).is_err());
}
