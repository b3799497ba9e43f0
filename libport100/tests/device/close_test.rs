#[path = "../common/mod.rs"]
mod common;

use libport100::protocol::CommandCode;
use libport100::types::DeviceType;
use libport100::Error;

#[test]
fn close_twice_writes_rf_off_and_ack_once() {
    let (mut dev, mock) = common::opened_mock_device(DeviceType::RcS380P).unwrap();
    common::seed_status(&mock, CommandCode::SwitchRf, 0x00);
    let before = mock.written().len();

    dev.close().unwrap();
    dev.close().unwrap();

    let written = mock.written();
    assert_eq!(written.len(), before + 2);
    assert_eq!(written[before], common::fixtures::switch_rf_off_request());
    assert_eq!(written[before + 1], common::ack_frame());
    assert_eq!(mock.close_calls(), 1);
}

#[test]
fn commands_after_close_fail() {
    let (mut dev, mock) = common::opened_mock_device(DeviceType::RcS380P).unwrap();
    common::seed_status(&mock, CommandCode::SwitchRf, 0x00);
    dev.close().unwrap();

    assert!(matches!(
        dev.chipset().get_firmware_version(None),
        Err(Error::Closed)
    ));
    assert!(matches!(
        dev.sense_type_f(libport100::protocol::BitrateProfile::F212),
        Err(Error::Closed)
    ));
}

#[test]
fn drop_closes_device() {
    let (dev, mock) = common::opened_mock_device(DeviceType::RcS380P).unwrap();
    common::seed_status(&mock, CommandCode::SwitchRf, 0x00);
    drop(dev);
    assert!(mock.is_closed());
    assert_eq!(mock.written().last(), Some(&common::ack_frame()));
}
