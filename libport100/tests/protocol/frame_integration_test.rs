#[path = "../common/mod.rs"]
mod common;

use libport100::constants::{ACK_FRAME, ERR_FRAME};
use libport100::protocol::{Frame, FrameKind};
use libport100::{Error, FrameError};

#[test]
fn captured_request_frames() {
    assert_eq!(
        Frame::encode(&[0xd6, 0x2a, 0x01]).unwrap(),
        common::fixtures::set_command_type_request()
    );
    assert_eq!(
        Frame::encode(&[0xd6, 0x06, 0x00]).unwrap(),
        common::fixtures::switch_rf_off_request()
    );
}

#[test]
fn classify_control_frames() {
    assert_eq!(Frame::decode(&ACK_FRAME).unwrap().kind(), FrameKind::Ack);
    assert_eq!(Frame::decode(&ERR_FRAME).unwrap().kind(), FrameKind::Err);
    // A trailing byte makes the Ack unrecognizable.
    assert_eq!(
        Frame::decode(&[0x00, 0x00, 0xff, 0x00, 0xff, 0x00, 0x00]).unwrap().kind(),
        FrameKind::Unknown
    );
}

#[test]
fn boundary_payload_lengths() {
    for len in [0usize, 1, 255, 256, 0xffff] {
        let payload: Vec<u8> = (0..len).map(|i| (i % 251) as u8).collect();
        let bytes = Frame::encode(&payload).unwrap();
        assert_eq!(bytes.len(), len + 10);
        let frame = Frame::decode(&bytes).unwrap();
        assert_eq!(frame.payload(), Some(&payload[..]));
    }
    assert!(matches!(
        Frame::encode(&vec![0u8; 0x10000]),
        Err(Error::Frame(FrameError::PayloadTooLong(0x10000)))
    ));
}

#[test]
fn corrupt_length_checksum() {
    let mut bytes = common::fixtures::set_command_type_request();
    bytes[7] = 0x00;
    assert!(matches!(
        Frame::decode(&bytes),
        Err(Error::Frame(FrameError::ChecksumMismatch { .. }))
    ));
}
