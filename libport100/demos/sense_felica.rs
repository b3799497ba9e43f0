#![cfg(feature = "usb")]

//! Sense one FeliCa card at 212 kbps and print its IDm / PMm.
//!
//! Usage:
//!   RUST_LOG=debug cargo run -p libport100 --example sense_felica --features usb

use anyhow::Context;
use libport100::protocol::BitrateProfile;
use libport100::transport::UsbTransport;
use libport100::{Config, Device};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = Config::default();
    let transport = UsbTransport::open()
        .context("no RC-S380 reader found")?
        .with_write_timeout_ms(config.write_timeout_ms);
    let mut device =
        Device::open_with_config(Box::new(transport), config).context("opening chipset")?;
    println!(
        "Opened {} ({:?})",
        device.chipset_name(),
        device.device_type()?
    );

    let sensed = device.sense_type_f(BitrateProfile::F212);
    // Always switch RF off, even when sensing failed.
    let closed = device.close();

    match sensed? {
        Some(card) => {
            println!("IDm: {}", card.idm());
            println!("PMm: {}", card.pmm());
            if let Some(sc) = card.system_code() {
                println!("System code: {:04X}", sc.as_u16());
            }
        }
        None => println!("No card found"),
    }
    closed?;
    Ok(())
}
