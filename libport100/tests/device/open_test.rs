#[path = "../common/mod.rs"]
mod common;

use libport100::protocol::CommandCode;
use libport100::transport::MockTransport;
use libport100::types::{DeviceType, FirmwareVersion};
use libport100::{Config, Device, DeviceBuilder, Error};

#[test]
fn open_discards_stale_input_and_labels_chipset() {
    common::init_logger();
    let mock = MockTransport::new(DeviceType::RcS380S);
    // Leftovers from an interrupted session.
    mock.push_response(common::ack_frame());
    mock.push_response(common::response_frame(CommandCode::InCommRf, &[0x80, 0, 0, 0, 0]));
    common::seed_open_handshake(&mock);
    common::seed_firmware_version(&mock, FirmwareVersion::new(0x0111));

    let device = Device::open(Box::new(mock.clone())).unwrap();
    assert_eq!(device.chipset_name(), "NFC Port-100 v1.11");
    assert_eq!(device.firmware_version().major(), 1);
    assert_eq!(device.device_type().unwrap(), DeviceType::RcS380S);

    let written = mock.written();
    assert_eq!(written[0], common::ack_frame());
    assert_eq!(written[1], common::fixtures::set_command_type_request());
    assert_eq!(written[2], common::fixtures::switch_rf_off_request());
    assert_eq!(mock.pending_replies(), 0);
}

#[test]
fn open_with_custom_config() {
    let mock = MockTransport::new(DeviceType::RcS380P);
    common::seed_open_handshake(&mock);
    common::seed_firmware_version(&mock, common::MOCK_FIRMWARE_VERSION);

    let config = Config::default().with_drain_timeout_ms(5).with_read_timeout_ms(300);
    let device = DeviceBuilder::new()
        .with_transport(Box::new(mock.clone()))
        .with_config(config)
        .open()
        .unwrap();
    assert_eq!(device.config(), &config);

    let timeouts = mock.read_timeouts();
    assert_eq!(timeouts[0], 5);
    assert!(timeouts[1..].iter().all(|&t| t == 300));
}

#[test]
fn open_fails_when_command_type_rejected() {
    let mock = MockTransport::new(DeviceType::RcS380P);
    mock.push_timeout();
    common::seed_status(&mock, CommandCode::SetCommandType, 0x07);

    match Device::open(Box::new(mock.clone())) {
        Err(Error::Status(status)) => assert_eq!(status.name(), Some("COMMANDTYPE_ERROR")),
        Err(e) => panic!("unexpected error {:?}", e),
        Ok(_) => panic!("open should fail"),
    }
    assert!(mock.is_closed());
}

#[test]
fn raw_chipset_access() {
    let (mut device, mock) = common::opened_mock_device(DeviceType::RcS380P).unwrap();
    common::seed_reply(&mock, CommandCode::GetPdDataVersion, &[0x00, 0x01]);
    let version = device.chipset().get_pd_data_version().unwrap().unwrap();
    assert_eq!(version.to_string(), "1.00");

    common::seed_reply(&mock, CommandCode::GetProperty, &[0xaa]);
    let raw = device.chipset().send_command(CommandCode::GetProperty, &[]).unwrap();
    assert_eq!(raw, Some(vec![0xaa]));
}
