#[path = "../common/mod.rs"]
mod common;

use libport100::protocol::{checksum, verify};

#[test]
fn checksum_examples() {
    assert_eq!(checksum(&[0x01, 0x18]), 0xe7);
    assert_eq!(checksum(&[0x03, 0x00]), 0xfd);
    assert_eq!(checksum(&[]), 0x00);
    assert_eq!(checksum(&[0xd6, 0x2a, 0x01]), 0xff);
}

#[test]
fn verify_accepts_appended_checksum() {
    let mut bytes = vec![0xd6, 0x06, 0x00];
    bytes.push(checksum(&bytes));
    assert!(verify(&bytes));
    bytes[0] ^= 0x01;
    assert!(!verify(&bytes));
}
