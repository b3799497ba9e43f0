// libport100/src/constants.rs
//! Wire-level constants of the Port-100 framing protocol.

/// Leading bytes of an extended (Data) frame.
pub const DATA_PREAMBLE: [u8; 5] = [0x00, 0x00, 0xFF, 0xFF, 0xFF];

/// Marker that follows the preamble of an extended (Data) frame.
pub const DATA_MARKER: [u8; 2] = [0xFF, 0xFF];

/// Acknowledge frame, sent by both sides.
pub const ACK_FRAME: [u8; 6] = [0x00, 0x00, 0xFF, 0x00, 0xFF, 0x00];

/// Error frame reported by the chipset.
pub const ERR_FRAME: [u8; 5] = [0x00, 0x00, 0xFF, 0xFF, 0xFF];

/// Trailing byte of a Data frame.
pub const POSTAMBLE: u8 = 0x00;

/// Offset of the LE16 length field inside a Data frame.
pub const LENGTH_OFFSET: usize = 5;

/// Offset of the first payload byte inside a Data frame.
pub const PAYLOAD_OFFSET: usize = 8;

/// Largest payload a Data frame can carry.
pub const MAX_PAYLOAD_LEN: usize = u16::MAX as usize;

/// Host -> chipset command prefix.
pub const CMD_PREFIX_HOST: u8 = 0xD6;

/// Chipset -> host response prefix.
pub const CMD_PREFIX_DEVICE: u8 = 0xD7;

/// Sony USB vendor id.
pub const SONY_VENDOR_ID: u16 = 0x054c;

/// Largest bulk-in transfer the chipset produces (256 payload + framing).
pub const MAX_READ_LEN: usize = 256 + 11;
