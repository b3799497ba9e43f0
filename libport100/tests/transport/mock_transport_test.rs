#[path = "../common/mod.rs"]
mod common;

use libport100::transport::{MockTransport, Transport};
use libport100::types::DeviceType;

#[test]
fn mock_records_and_replays() {
    let mut m = MockTransport::new(DeviceType::RcS380P);
    common::seed_status(&m, libport100::protocol::CommandCode::SwitchRf, 0x00);

    m.write(&common::fixtures::switch_rf_off_request()).unwrap();
    assert_eq!(m.read(100).unwrap(), common::ack_frame());
    assert_eq!(&m.read(100).unwrap()[8..10], &[0xd7, 0x07]);
    assert!(m.read(100).unwrap_err().is_timeout());
    assert_eq!(m.written(), vec![common::fixtures::switch_rf_off_request()]);
}

#[test]
fn boxed_transport_delegates() {
    let probe = MockTransport::new(DeviceType::RcS380S);
    let mut boxed: Box<dyn Transport> = Box::new(probe.clone());
    boxed.write(&[0x01]).unwrap();
    assert_eq!(boxed.device_type().unwrap(), DeviceType::RcS380S);
    boxed.close().unwrap();
    assert!(probe.is_closed());
}
