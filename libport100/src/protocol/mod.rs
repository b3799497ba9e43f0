// libport100/src/protocol/mod.rs
//! Port-100 wire protocol: framing, commands, responses and Type F sensing frames.

pub mod checksum;
pub mod codec;
pub mod commands;
pub mod frame;
pub mod parser;
pub mod responses;
pub mod sensf;

pub use checksum::{checksum, verify};
pub use commands::*;
pub use frame::{Frame, FrameKind};
pub use responses::*;
pub use sensf::{SensfRequest, decode_sensf_res};
