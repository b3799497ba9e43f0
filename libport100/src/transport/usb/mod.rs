// libport100/src/transport/usb/mod.rs
//! rusb bulk transport (feature `usb`).

use std::time::Duration;

use log::{debug, warn};
use rusb::{Context, DeviceHandle, UsbContext};

use crate::config::DEFAULT_WRITE_TIMEOUT_MS;
use crate::constants::{MAX_READ_LEN, SONY_VENDOR_ID};
use crate::transport::traits::Transport;
use crate::types::DeviceType;
use crate::{Error, Result};

mod descriptor;
use descriptor::{BulkEndpoints, find_bulk_endpoints};

/// Bulk transport for RC-S380 readers, backed by rusb. Feature-gated
/// behind `--features usb`.
pub struct UsbTransport {
    handle: Option<DeviceHandle<Context>>,
    device_type: DeviceType,
    endpoints: BulkEndpoints,
    write_timeout_ms: u64,
}

impl UsbTransport {
    /// Open the first RC-S380 found on the bus.
    pub fn open() -> Result<Self> {
        Self::open_matching(|_| true)
    }

    /// Open the first RC-S380 whose device type satisfies `select`.
    pub fn open_matching(select: impl Fn(DeviceType) -> bool) -> Result<Self> {
        let ctx = Context::new()?;
        for device in ctx.devices()?.iter() {
            let dd = device.device_descriptor()?;
            if dd.vendor_id() != SONY_VENDOR_ID {
                continue;
            }
            let Some(device_type) = DeviceType::from_product_id(dd.product_id()) else {
                continue;
            };
            if !select(device_type) {
                continue;
            }

            let endpoints = find_bulk_endpoints(&device).ok_or_else(|| {
                Error::Transport(format!("{:?} exposes no bulk endpoint pair", device_type))
            })?;

            let mut handle = device.open()?;
            // Linux may bind a kernel driver to the reader; detach it so the
            // interface can be claimed. A failed detach surfaces at claim time.
            if let Ok(true) = handle.kernel_driver_active(endpoints.interface) {
                if let Err(e) = handle.detach_kernel_driver(endpoints.interface) {
                    warn!("detach_kernel_driver({}) failed: {}", endpoints.interface, e);
                }
            }
            handle.claim_interface(endpoints.interface)?;
            debug!(
                "opened {:?} on bus {} addr {} (in={:#04x} out={:#04x})",
                device_type,
                device.bus_number(),
                device.address(),
                endpoints.in_ep,
                endpoints.out_ep
            );

            return Ok(UsbTransport {
                handle: Some(handle),
                device_type,
                endpoints,
                write_timeout_ms: DEFAULT_WRITE_TIMEOUT_MS,
            });
        }

        Err(Error::DeviceNotFound)
    }

    /// Override the bulk write timeout.
    pub fn with_write_timeout_ms(mut self, ms: u64) -> Self {
        self.write_timeout_ms = ms;
        self
    }

    fn handle(&self) -> Result<&DeviceHandle<Context>> {
        self.handle.as_ref().ok_or(Error::Closed)
    }
}

fn map_usb_error(e: rusb::Error) -> Error {
    match e {
        rusb::Error::Timeout => Error::Timeout,
        other => Error::Usb(other),
    }
}

impl Transport for UsbTransport {
    fn write(&mut self, data: &[u8]) -> Result<()> {
        let timeout = Duration::from_millis(self.write_timeout_ms);
        let written = self
            .handle()?
            .write_bulk(self.endpoints.out_ep, data, timeout)
            .map_err(map_usb_error)?;
        if written != data.len() {
            return Err(Error::ShortWrite {
                expected: data.len(),
                actual: written,
            });
        }
        Ok(())
    }

    fn read(&mut self, timeout_ms: u64) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; MAX_READ_LEN];
        let n = self
            .handle()?
            .read_bulk(self.endpoints.in_ep, &mut buf, Duration::from_millis(timeout_ms))
            .map_err(map_usb_error)?;
        buf.truncate(n);
        Ok(buf)
    }

    fn device_type(&self) -> Result<DeviceType> {
        Ok(self.device_type)
    }

    fn close(&mut self) -> Result<()> {
        if let Some(mut handle) = self.handle.take() {
            handle.release_interface(self.endpoints.interface)?;
        }
        Ok(())
    }
}

impl Drop for UsbTransport {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            warn!("releasing usb interface failed: {}", e);
        }
    }
}
