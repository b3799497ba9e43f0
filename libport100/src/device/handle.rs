// libport100/src/device/handle.rs
//! Opened reader handle with Type F sensing.

use log::{debug, info, warn};

use crate::card::Card;
use crate::config::Config;
use crate::device::chipset::Chipset;
use crate::protocol::sensf::{SensfRequest, decode_sensf_res};
use crate::protocol::{BitrateProfile, ProtocolParameters};
use crate::transport::Transport;
use crate::types::{DeviceType, FirmwareVersion};
use crate::utils::Hex;
use crate::{Error, Result};

/// Name reported by every Port-100 chipset.
pub const CHIPSET_NAME: &str = "NFC Port-100";

/// An opened Port-100 reader.
///
/// Wraps the chipset with the firmware version read at open time and the
/// Type F sensing sequence.
pub struct Device {
    chipset: Chipset,
    firmware_version: FirmwareVersion,
    chipset_name: String,
}

impl Device {
    /// Open the chipset over `transport` with the default configuration.
    pub fn open(transport: Box<dyn Transport>) -> Result<Self> {
        Self::open_with_config(transport, Config::default())
    }

    /// Open the chipset and read its firmware version. An out-of-step
    /// version reply leaves the version at 0; transport failures abort the
    /// open.
    pub fn open_with_config(transport: Box<dyn Transport>, config: Config) -> Result<Self> {
        let mut chipset = Chipset::open(transport, config)?;

        let firmware_version = match chipset.get_firmware_version(None)? {
            Some(version) => version,
            None => {
                warn!("firmware version unavailable, reporting 0.00");
                FirmwareVersion::new(0)
            }
        };

        let chipset_name = format!("{} v{}", CHIPSET_NAME, firmware_version);
        info!("chipset is a {}", chipset_name);

        Ok(Self {
            chipset,
            firmware_version,
            chipset_name,
        })
    }

    /// Label of the form `NFC Port-100 v1.10`.
    pub fn chipset_name(&self) -> &str {
        &self.chipset_name
    }

    /// Firmware version read at open; 0 when the chipset did not answer in step.
    pub fn firmware_version(&self) -> FirmwareVersion {
        self.firmware_version
    }

    /// Reader model reported by the transport.
    pub fn device_type(&self) -> Result<DeviceType> {
        self.chipset.device_type()
    }

    /// Session configuration.
    pub fn config(&self) -> &Config {
        self.chipset.config()
    }

    /// Raw command access for operations outside the sensing sequence.
    pub fn chipset(&mut self) -> &mut Chipset {
        &mut self.chipset
    }

    /// Look for one Type F card at `profile` (212F or 424F).
    ///
    /// `Ok(None)` means no card answered, or the answer was not a
    /// SENSF_RES. Transport and status failures are errors.
    pub fn sense_type_f(&mut self, profile: BitrateProfile) -> Result<Option<Card>> {
        if !profile.is_type_f() {
            return Err(Error::InvalidParameter(format!(
                "{} is not a Type F bitrate",
                profile
            )));
        }
        debug!("polling for NFC-F technology at {}", profile);

        let config = *self.chipset.config();
        self.chipset.in_set_rf(profile, None)?;
        let params =
            ProtocolParameters::defaults().initial_guard_time(config.sense_initial_guard_time);
        self.chipset.in_set_protocol(&params)?;

        let sensf_req = SensfRequest::default().encode();
        debug!("send SENSF_REQ {}", Hex(&sensf_req));

        let frame = match self.chipset.in_comm_rf(&sensf_req, config.sense_timeout_ms) {
            Ok(Some(frame)) => frame,
            Ok(None) => return Ok(None),
            Err(e) if e.is_receive_timeout() => return Ok(None),
            Err(Error::Communication(status)) => {
                debug!("SENSF_REQ failed: {}", status);
                return Ok(None);
            }
            Err(e) => return Err(e),
        };

        debug!("rcvd SENSF_RES {}", Hex(&frame));
        decode_sensf_res(&frame)
    }

    /// Switch RF off and release the transport. Safe to call more than
    /// once; dropping the device closes it too.
    pub fn close(&mut self) -> Result<()> {
        self.chipset.close()
    }
}
