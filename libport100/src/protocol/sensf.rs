// libport100/src/protocol/sensf.rs
//! Type F sensing frames (SENSF_REQ / SENSF_RES).

use crate::card::Card;
use crate::protocol::parser;
use crate::types::{Idm, Pmm, SystemCode};
use crate::Result;

/// Polling command code carried in SENSF_REQ.
pub const SENSF_REQ_CODE: u8 = 0x00;

/// Response code carried in SENSF_RES.
pub const SENSF_RES_CODE: u8 = 0x01;

/// Shortest valid SENSF_RES frame: LEN, code, IDm(8), PMm(8).
pub const SENSF_RES_MIN_LEN: usize = 18;

/// Request code asking cards to append their system code.
pub const REQUEST_SYSTEM_CODE: u8 = 0x01;

/// SENSF_REQ parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SensfRequest {
    /// System code to poll for; `SystemCode::ANY` matches every card.
    pub system_code: SystemCode,
    /// What the card appends to its answer (1 = system code).
    pub request_code: u8,
    /// Number of time slots minus one.
    pub time_slot: u8,
}

impl Default for SensfRequest {
    fn default() -> Self {
        Self {
            system_code: SystemCode::ANY,
            request_code: REQUEST_SYSTEM_CODE,
            time_slot: 0,
        }
    }
}

impl SensfRequest {
    /// Encode as an RF frame: a length byte (counting itself) followed by
    /// `00 <system code BE> <request code> <time slot>`.
    pub fn encode(&self) -> Vec<u8> {
        let sc = self.system_code.to_be_bytes();
        let body = [SENSF_REQ_CODE, sc[0], sc[1], self.request_code, self.time_slot];
        let mut frame = Vec::with_capacity(body.len() + 1);
        frame.push((body.len() + 1) as u8);
        frame.extend_from_slice(&body);
        frame
    }
}

/// Interpret an RF frame received in answer to SENSF_REQ.
///
/// The frame must be at least 18 bytes, its length byte must equal the
/// frame length and its response code must be 0x01. Anything else is not
/// a SENSF_RES and yields `None`.
pub fn decode_sensf_res(frame: &[u8]) -> Result<Option<Card>> {
    if frame.len() < SENSF_RES_MIN_LEN
        || usize::from(frame[0]) != frame.len()
        || frame[1] != SENSF_RES_CODE
    {
        return Ok(None);
    }

    let res = &frame[1..];
    let idm = Idm::try_from(parser::slice_at(res, 1, 8)?)?;
    let pmm = Pmm::try_from(parser::slice_at(res, 9, 8)?)?;
    let system_code = parser::slice_at(res, 17, 2)
        .ok()
        .map(|b| SystemCode::from_be_bytes([b[0], b[1]]));

    Ok(Some(Card::new(idm, pmm, system_code, res.to_vec())))
}
