#[path = "../common/mod.rs"]
mod common;

use libport100::transport::{MockTransport, Transport};
use libport100::types::DeviceType;
use libport100::Error;

#[test]
fn read_failure_and_recovery() {
    let mut m = MockTransport::new(DeviceType::RcS380P);
    m.push_error(Error::ShortWrite {
        expected: 10,
        actual: 4,
    });
    m.push_response(common::ack_frame());

    match m.read(100) {
        Err(e @ Error::ShortWrite { .. }) => assert!(!e.is_timeout()),
        other => panic!("unexpected {:?}", other),
    }
    assert_eq!(m.read(100).unwrap(), common::ack_frame());
}

#[test]
fn closed_transport_rejects_io() {
    let mut m = MockTransport::new(DeviceType::RcS380P);
    m.close().unwrap();
    assert!(matches!(m.write(&[0x00]), Err(Error::Closed)));
    assert!(matches!(m.read(10), Err(Error::Closed)));
}
