// libport100/src/protocol/commands/mod.rs
//! Chipset opcodes and typed commands.

pub mod comm;
pub mod protocol_params;
pub mod rf;

pub use comm::{device_timeout, encode_in_comm_rf};
pub use protocol_params::ProtocolParameters;
pub use rf::{BitrateProfile, encode_in_set_rf};

use crate::constants::{CMD_PREFIX_DEVICE, CMD_PREFIX_HOST};

/// Chipset opcodes. The response to opcode `n` carries `n + 1`.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CommandCode {
    /// Initiator: configure RF bit rates.
    InSetRf = 0x00,
    /// Initiator: set protocol parameters.
    InSetProtocol = 0x02,
    /// Initiator: exchange an RF frame with a card.
    InCommRf = 0x04,
    /// Switch the RF field.
    SwitchRf = 0x06,
    /// Flash maintenance.
    MaintainFlash = 0x10,
    /// Reset the chipset.
    ResetDevice = 0x12,
    /// Firmware version query.
    GetFirmwareVersion = 0x20,
    /// Package data version query.
    GetPdDataVersion = 0x22,
    /// Read a chipset property.
    GetProperty = 0x24,
    /// Initiator: read protocol parameters.
    InGetProtocol = 0x26,
    /// Query supported command types.
    GetCommandType = 0x28,
    /// Select the command set.
    SetCommandType = 0x2a,
    /// Initiator: set RF control table.
    InSetRct = 0x30,
    /// Initiator: read RF control table.
    InGetRct = 0x32,
    /// Read package data.
    GetPdData = 0x34,
    /// Read chipset registers.
    ReadRegister = 0x36,
    /// Target: configure RF.
    TgSetRf = 0x40,
    /// Target: set protocol parameters.
    TgSetProtocol = 0x42,
    /// Target: automatic response settings.
    TgSetAuto = 0x44,
    /// Target: switch RF off.
    TgSetRfOff = 0x46,
    /// Target: exchange an RF frame.
    TgCommRf = 0x48,
    /// Target: read protocol parameters.
    TgGetProtocol = 0x50,
    /// Target: set RF control table.
    TgSetRct = 0x60,
    /// Target: read RF control table.
    TgGetRct = 0x62,
    /// Self diagnosis.
    Diagnose = 0xf0,
}

impl CommandCode {
    /// Request opcode.
    pub fn opcode(self) -> u8 {
        self as u8
    }

    /// Opcode the chipset answers with.
    pub fn response_code(self) -> u8 {
        self.opcode().wrapping_add(1)
    }

    /// Request payload: `D6 <opcode> <args...>`.
    pub fn request(self, args: &[u8]) -> Vec<u8> {
        let mut buf = Vec::with_capacity(2 + args.len());
        buf.push(CMD_PREFIX_HOST);
        buf.push(self.opcode());
        buf.extend_from_slice(args);
        buf
    }

    /// Strip the `D7 <opcode+1>` header from a response payload. `None` when
    /// the payload answers a different command.
    pub fn strip_response<'a>(self, payload: &'a [u8]) -> Option<&'a [u8]> {
        match payload {
            [CMD_PREFIX_DEVICE, code, rest @ ..] if *code == self.response_code() => Some(rest),
            _ => None,
        }
    }
}

/// Typed chipset operations. Each variant carries its arguments and knows
/// how to encode them; new operations are added here together with an
/// encoder in `protocol::commands::<name>.rs`.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Select a command set.
    SetCommandType(u8),
    /// RF field on (`true`) or off.
    SwitchRf(bool),
    /// Firmware version, optionally of an alternate block.
    GetFirmwareVersion(Option<u8>),
    /// Package data version.
    GetPdDataVersion,
    /// RF bit rates for sending and receiving.
    InSetRf {
        /// Transmit profile.
        send: BitrateProfile,
        /// Receive profile.
        recv: BitrateProfile,
    },
    /// Protocol parameter updates.
    InSetProtocol(ProtocolParameters),
    /// Send `data` over RF and wait up to `timeout_ms` for the answer.
    InCommRf {
        /// RF frame to send.
        data: Vec<u8>,
        /// Card answer timeout (ms).
        timeout_ms: f64,
    },
}

impl Command {
    /// Opcode of this command.
    pub fn code(&self) -> CommandCode {
        match self {
            Self::SetCommandType(_) => CommandCode::SetCommandType,
            Self::SwitchRf(_) => CommandCode::SwitchRf,
            Self::GetFirmwareVersion(_) => CommandCode::GetFirmwareVersion,
            Self::GetPdDataVersion => CommandCode::GetPdDataVersion,
            Self::InSetRf { .. } => CommandCode::InSetRf,
            Self::InSetProtocol(_) => CommandCode::InSetProtocol,
            Self::InCommRf { .. } => CommandCode::InCommRf,
        }
    }

    /// Encode the command arguments (without the `D6 <opcode>` header).
    pub fn encode_args(&self) -> Vec<u8> {
        match self {
            Self::SetCommandType(command_type) => vec![*command_type],
            Self::SwitchRf(on) => vec![u8::from(*on)],
            Self::GetFirmwareVersion(option) => option.iter().copied().collect(),
            Self::GetPdDataVersion => Vec::new(),
            Self::InSetRf { send, recv } => encode_in_set_rf(*send, *recv),
            Self::InSetProtocol(params) => params.encode(),
            Self::InCommRf { data, timeout_ms } => encode_in_comm_rf(data, *timeout_ms),
        }
    }

    /// Full request payload: `D6 <opcode> <args...>`.
    pub fn encode(&self) -> Vec<u8> {
        self.code().request(&self.encode_args())
    }
}
