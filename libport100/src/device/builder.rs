// libport100/src/device/builder.rs
//! Builder for `Device`.

use crate::config::Config;
use crate::device::handle::Device;
use crate::transport::Transport;
use crate::{Error, Result};

/// Helper to construct a Device with optional configuration.
#[derive(Default)]
pub struct DeviceBuilder {
    transport: Option<Box<dyn Transport>>,
    config: Config,
}

impl DeviceBuilder {
    /// Empty builder with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Provide an already-created transport instance (e.g. MockTransport
    /// or UsbTransport).
    pub fn with_transport(mut self, transport: Box<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Use `config` instead of the defaults.
    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Consume the builder and open the device.
    /// Requires a transport to be provided; otherwise returns DeviceNotFound.
    pub fn open(self) -> Result<Device> {
        match self.transport {
            Some(t) => Device::open_with_config(t, self.config),
            None => Err(Error::DeviceNotFound),
        }
    }
}
