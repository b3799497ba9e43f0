// libport100/src/prelude.rs
//! Common imports: `use libport100::prelude::*;`.

pub use crate::card::Card;
pub use crate::config::Config;
pub use crate::device::{Chipset, Device, DeviceBuilder};
pub use crate::protocol::{
    BitrateProfile, Command, CommandCode, CommunicationStatus, Frame, FrameKind,
    ProtocolParameters, StatusCode,
};
pub use crate::transport::Transport;
pub use crate::{DeviceType, Error, FirmwareVersion, FrameError, Idm, Pmm, Result, SystemCode};

pub use crate::utils::{Hex, bytes_to_hex, bytes_to_hex_spaced};
