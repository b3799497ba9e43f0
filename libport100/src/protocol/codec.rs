// libport100/src/protocol/codec.rs
//! Whole-frame encoders built on `Frame` and `CommandCode`.

use crate::Result;

use super::Frame;
use super::commands::{Command, CommandCode};

/// Encode an opcode and its arguments into a full wire frame.
pub fn encode_request_frame(code: CommandCode, args: &[u8]) -> Result<Vec<u8>> {
    Frame::encode(&code.request(args))
}

/// Encode a typed Command into a full wire frame.
pub fn encode_command_frame(cmd: &Command) -> Result<Vec<u8>> {
    encode_request_frame(cmd.code(), &cmd.encode_args())
}

/// Build the wire frame the chipset sends in answer to `code`. Primarily
/// useful for tests and simulators.
pub fn encode_response_frame(code: CommandCode, results: &[u8]) -> Result<Vec<u8>> {
    let mut payload = Vec::with_capacity(2 + results.len());
    payload.push(crate::constants::CMD_PREFIX_DEVICE);
    payload.push(code.response_code());
    payload.extend_from_slice(results);
    Frame::encode(&payload)
}
