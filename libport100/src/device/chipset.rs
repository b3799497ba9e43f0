// libport100/src/device/chipset.rs
//! Port-100 command channel.

use log::{debug, error, warn};

use crate::config::Config;
use crate::protocol::responses::{decode_in_comm_rf, decode_status, decode_version};
use crate::protocol::{BitrateProfile, Command, CommandCode, Frame, ProtocolParameters};
use crate::transport::Transport;
use crate::types::{DeviceType, FirmwareVersion};
use crate::utils::Hex;
use crate::{Error, Result};

/// GetFirmwareVersion options the chipset accepts besides "none".
const FIRMWARE_OPTIONS: [u8; 3] = [60, 61, 0x80];

/// Port-100 command channel.
///
/// Owns the transport for the whole connection. Every command is one
/// synchronous round trip: write the request frame, read the Ack, read the
/// Data frame carrying the response.
pub struct Chipset {
    transport: Box<dyn Transport>,
    config: Config,
    closed: bool,
}

impl Chipset {
    /// Take ownership of `transport` and bring the chipset into a known
    /// state: abort any transaction left over from a previous session,
    /// discard stale input, select the host command set and switch RF off.
    ///
    /// On failure the transport is released before the error is returned.
    pub fn open(transport: Box<dyn Transport>, config: Config) -> Result<Self> {
        let mut chipset = Self {
            transport,
            config,
            closed: false,
        };
        // On error `chipset` is dropped here, which runs `close`.
        chipset.normalize()?;
        Ok(chipset)
    }

    fn normalize(&mut self) -> Result<()> {
        self.write_raw(Frame::ack().as_bytes())?;
        self.drain()?;
        self.set_command_type(self.config.command_type)?;
        self.switch_rf(false)?;
        Ok(())
    }

    // Discard everything the chipset still has queued. A read timeout is the
    // expected end of the loop; any other failure aborts the open.
    fn drain(&mut self) -> Result<()> {
        loop {
            match self.transport.read(self.config.drain_timeout_ms) {
                Ok(garbage) => debug!("cleared garbage {}", Hex(&garbage)),
                Err(Error::Timeout) => return Ok(()),
                Err(e) => return Err(e),
            }
        }
    }

    /// Session configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Reader model reported by the transport.
    pub fn device_type(&self) -> Result<DeviceType> {
        self.transport.device_type()
    }

    /// True once `close` ran.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    fn write_raw(&mut self, bytes: &[u8]) -> Result<()> {
        debug!(">>>> {}", Hex(bytes));
        self.transport.write(bytes)
    }

    fn read_frame(&mut self) -> Result<Frame> {
        let raw = self.transport.read(self.config.read_timeout_ms)?;
        debug!("<<<< {}", Hex(&raw));
        Frame::decode(&raw)
    }

    /// One command round trip.
    ///
    /// Returns `Ok(None)` when the chipset answers out of step (no Ack, no
    /// Data frame, or a response for another opcode). Transport failures and
    /// checksum violations are errors.
    pub fn send_command(&mut self, code: CommandCode, args: &[u8]) -> Result<Option<Vec<u8>>> {
        if self.closed {
            return Err(Error::Closed);
        }

        let request = Frame::request(&code.request(args))?;
        self.write_raw(request.as_bytes())?;

        let ack = self.read_frame()?;
        if !ack.is_ack() {
            error!("expected ACK but got {:?}", ack.kind());
            return Ok(None);
        }

        let rsp = self.read_frame()?;
        let Some(payload) = rsp.payload() else {
            error!("expected DATA but got {:?}", rsp.kind());
            return Ok(None);
        };

        match code.strip_response(payload) {
            Some(result) => Ok(Some(result.to_vec())),
            None => {
                error!(
                    "expected rsp code D7{:02X} but got {}",
                    code.response_code(),
                    Hex(&payload[..payload.len().min(2)])
                );
                Ok(None)
            }
        }
    }

    /// Send a typed command.
    pub fn execute(&mut self, cmd: &Command) -> Result<Option<Vec<u8>>> {
        self.send_command(cmd.code(), &cmd.encode_args())
    }

    fn execute_status(&mut self, cmd: &Command) -> Result<()> {
        match self.execute(cmd)? {
            Some(result) => decode_status(&result),
            None => {
                warn!("{:?}: no response, status unknown", cmd.code());
                Ok(())
            }
        }
    }

    /// Select the chipset command set.
    pub fn set_command_type(&mut self, command_type: u8) -> Result<()> {
        self.execute_status(&Command::SetCommandType(command_type))
    }

    /// Switch the RF field on or off.
    pub fn switch_rf(&mut self, on: bool) -> Result<()> {
        self.execute_status(&Command::SwitchRf(on))
    }

    /// Query the firmware version. `option` selects an alternate firmware
    /// block and must be one of 60, 61 or 0x80.
    pub fn get_firmware_version(&mut self, option: Option<u8>) -> Result<Option<FirmwareVersion>> {
        if let Some(opt) = option {
            if !FIRMWARE_OPTIONS.contains(&opt) {
                return Err(Error::InvalidParameter(format!(
                    "firmware version option {:#04x}",
                    opt
                )));
            }
        }

        let Some(result) = self.execute(&Command::GetFirmwareVersion(option))? else {
            return Ok(None);
        };
        let version = decode_version(&result)?;
        debug!("firmware version {}", version);
        Ok(Some(version))
    }

    /// Query the package data format version.
    pub fn get_pd_data_version(&mut self) -> Result<Option<FirmwareVersion>> {
        let Some(result) = self.execute(&Command::GetPdDataVersion)? else {
            return Ok(None);
        };
        let version = decode_version(&result)?;
        debug!("package data format {}", version);
        Ok(Some(version))
    }

    /// Configure the RF front end. `recv` defaults to `send`.
    pub fn in_set_rf(&mut self, send: BitrateProfile, recv: Option<BitrateProfile>) -> Result<()> {
        let recv = recv.unwrap_or(send);
        self.execute_status(&Command::InSetRf { send, recv })
    }

    /// `in_set_rf` with profiles given by name (`"212F"`, `"106A"`, ...).
    pub fn in_set_rf_named(&mut self, send: &str, recv: Option<&str>) -> Result<()> {
        let send: BitrateProfile = send.parse()?;
        let recv = recv.map(str::parse::<BitrateProfile>).transpose()?;
        self.in_set_rf(send, recv)
    }

    /// Apply the set fields of `params`.
    pub fn in_set_protocol(&mut self, params: &ProtocolParameters) -> Result<()> {
        self.execute_status(&Command::InSetProtocol(*params))
    }

    /// Exchange an RF frame with a card. `timeout_ms` bounds the wait for
    /// the card's answer; a non-zero communication status is returned as
    /// `Error::Communication`.
    pub fn in_comm_rf(&mut self, data: &[u8], timeout_ms: f64) -> Result<Option<Vec<u8>>> {
        let cmd = Command::InCommRf {
            data: data.to_vec(),
            timeout_ms,
        };
        match self.execute(&cmd)? {
            Some(result) => decode_in_comm_rf(&result).map(Some),
            None => Ok(None),
        }
    }

    /// Switch RF off, abort any pending transaction and release the
    /// transport. Only the first call has side effects; every step runs
    /// even when an earlier one fails, and the first error is returned.
    pub fn close(&mut self) -> Result<()> {
        if self.closed {
            return Ok(());
        }
        let rf_off = self.switch_rf(false);
        self.closed = true;

        let ack = self.write_raw(Frame::ack().as_bytes());
        let release = self.transport.close();
        rf_off.and(ack).and(release)
    }
}

impl Drop for Chipset {
    fn drop(&mut self) {
        if let Err(e) = self.close() {
            warn!("closing chipset failed: {}", e);
        }
    }
}
