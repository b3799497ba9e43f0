#![cfg(feature = "usb")]

#[path = "common.rs"]
mod common;

use libport100::protocol::BitrateProfile;
use libport100::Result;
use serial_test::serial;

// These tests require a real RC-S380 connected. They are marked `#[ignore]`
// so CI does not attempt to run them. Run manually with:
//
// cargo test -p libport100 --test hardware --features usb -- --ignored

#[test]
#[ignore]
#[serial]
fn open_and_read_firmware() -> Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();
    if let Some(mut device) = common::open_device()? {
        assert!(device.chipset_name().starts_with("NFC Port-100 v"));
        device.close()?;
    }
    Ok(())
}

#[test]
#[ignore]
#[serial]
fn sense_212f_without_card() -> Result<()> {
    let _ = env_logger::builder().is_test(true).try_init();
    if let Some(mut device) = common::open_device()? {
        // With no card on the reader the sense just finds nothing.
        let card = device.sense_type_f(BitrateProfile::F212)?;
        if let Some(card) = card {
            println!("IDm {} PMm {}", card.idm(), card.pmm());
        }
        device.close()?;
    }
    Ok(())
}
