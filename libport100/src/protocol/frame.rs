// libport100/src/protocol/frame.rs
//! Ack / Err / Data frame encoding and classification.

use crate::constants::{
    ACK_FRAME, DATA_MARKER, DATA_PREAMBLE, ERR_FRAME, LENGTH_OFFSET, MAX_PAYLOAD_LEN,
    PAYLOAD_OFFSET, POSTAMBLE,
};
use crate::error::{ChecksumRegion, FrameError};
use crate::protocol::checksum::{checksum, verify};
use crate::protocol::parser::le_u16;
use crate::Result;

/// Classification of a frame received from (or sent to) the chipset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameKind {
    /// Acknowledge frame.
    Ack,
    /// Error frame.
    Err,
    /// Checksummed data frame.
    Data,
    /// Anything else.
    Unknown,
}

/// Port-100 wire frame.
///
/// Data frames use the extended layout:
/// `[00 00 FF FF FF] [len LE16] [LCS] [payload...] [DCS] [00]`
/// where LCS cancels the sum of the length field and DCS cancels the sum
/// of the payload. Ack and Err are fixed byte strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    bytes: Vec<u8>,
    kind: FrameKind,
}

impl Frame {
    /// Encode a payload into the full on-wire Data frame.
    pub fn encode(payload: &[u8]) -> Result<Vec<u8>> {
        if payload.len() > MAX_PAYLOAD_LEN {
            return Err(FrameError::PayloadTooLong(payload.len()).into());
        }

        let len = le_u16(payload.len() as u16);
        let mut out = Vec::with_capacity(PAYLOAD_OFFSET + payload.len() + 2);
        out.extend_from_slice(&DATA_PREAMBLE);
        out.extend_from_slice(&len);
        out.push(checksum(&len));
        out.extend_from_slice(payload);
        out.push(checksum(payload));
        out.push(POSTAMBLE);
        Ok(out)
    }

    /// Build an outgoing Data frame around a request payload.
    pub fn request(payload: &[u8]) -> Result<Self> {
        Ok(Self {
            bytes: Self::encode(payload)?,
            kind: FrameKind::Data,
        })
    }

    /// The Ack frame.
    pub fn ack() -> Self {
        Self {
            bytes: ACK_FRAME.to_vec(),
            kind: FrameKind::Ack,
        }
    }

    /// Classify received bytes. Ack and Err must match their constants
    /// exactly; anything carrying the `FF FF` marker at offset 3 is a Data
    /// frame and has both checksums verified.
    pub fn decode(raw: &[u8]) -> Result<Self> {
        let kind = if raw == ACK_FRAME {
            FrameKind::Ack
        } else if raw == ERR_FRAME {
            FrameKind::Err
        } else if raw.get(3..5) == Some(&DATA_MARKER[..]) {
            check_data_frame(raw)?;
            FrameKind::Data
        } else {
            FrameKind::Unknown
        };

        Ok(Self {
            bytes: raw.to_vec(),
            kind,
        })
    }

    /// Classification of this frame.
    pub fn kind(&self) -> FrameKind {
        self.kind
    }

    /// True for the Ack frame.
    pub fn is_ack(&self) -> bool {
        self.kind == FrameKind::Ack
    }

    /// True for a verified Data frame.
    pub fn is_data(&self) -> bool {
        self.kind == FrameKind::Data
    }

    /// Wire bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consume the frame, returning its wire bytes.
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Payload of a Data frame; `None` for every other kind.
    pub fn payload(&self) -> Option<&[u8]> {
        if !self.is_data() {
            return None;
        }
        let len = data_len(&self.bytes);
        self.bytes.get(PAYLOAD_OFFSET..PAYLOAD_OFFSET + len)
    }
}

fn data_len(raw: &[u8]) -> usize {
    u16::from_le_bytes([raw[LENGTH_OFFSET], raw[LENGTH_OFFSET + 1]]) as usize
}

fn check_data_frame(raw: &[u8]) -> std::result::Result<(), FrameError> {
    if raw.len() < PAYLOAD_OFFSET {
        return Err(FrameError::Truncated {
            expected: PAYLOAD_OFFSET,
            actual: raw.len(),
        });
    }

    let length_region = &raw[LENGTH_OFFSET..PAYLOAD_OFFSET];
    if !verify(length_region) {
        return Err(FrameError::ChecksumMismatch {
            region: ChecksumRegion::Length,
            expected: checksum(&length_region[..2]),
            actual: length_region[2],
        });
    }

    let len = data_len(raw);
    let end = PAYLOAD_OFFSET + len;
    if raw.len() < end + 1 {
        return Err(FrameError::Truncated {
            expected: end + 1,
            actual: raw.len(),
        });
    }

    let payload_region = &raw[PAYLOAD_OFFSET..=end];
    if !verify(payload_region) {
        return Err(FrameError::ChecksumMismatch {
            region: ChecksumRegion::Payload,
            expected: checksum(&payload_region[..len]),
            actual: payload_region[len],
        });
    }

    Ok(())
}
