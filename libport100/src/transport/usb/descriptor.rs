// libport100/src/transport/usb/descriptor.rs

use rusb::{Device, Direction, TransferType, UsbContext};

/// Bulk endpoint pair and the interface that carries it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BulkEndpoints {
    /// Interface number to claim.
    pub interface: u8,
    /// Bulk IN endpoint address.
    pub in_ep: u8,
    /// Bulk OUT endpoint address.
    pub out_ep: u8,
}

/// Inspect the active configuration and return the first interface that
/// exposes both a bulk IN and a bulk OUT endpoint.
pub fn find_bulk_endpoints<C: UsbContext>(device: &Device<C>) -> Option<BulkEndpoints> {
    let config = device
        .active_config_descriptor()
        .or_else(|_| device.config_descriptor(0))
        .ok()?;

    for interface in config.interfaces() {
        for desc in interface.descriptors() {
            let mut in_ep = None;
            let mut out_ep = None;
            for ep in desc.endpoint_descriptors() {
                if ep.transfer_type() != TransferType::Bulk {
                    continue;
                }
                match ep.direction() {
                    Direction::In if in_ep.is_none() => in_ep = Some(ep.address()),
                    Direction::Out if out_ep.is_none() => out_ep = Some(ep.address()),
                    _ => {}
                }
            }
            if let (Some(in_ep), Some(out_ep)) = (in_ep, out_ep) {
                return Some(BulkEndpoints {
                    interface: desc.interface_number(),
                    in_ep,
                    out_ep,
                });
            }
        }
    }

    None
}
