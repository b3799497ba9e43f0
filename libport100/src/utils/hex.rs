//! Hexadecimal helpers for wire traces and identifiers.

use std::fmt;

/// Lazily formats a byte slice as lowercase hex separated by single spaces.
///
/// Used in log statements so the string is only built when the record is
/// actually emitted: `debug!(">>>> {}", Hex(&frame))`.
#[derive(Clone, Copy)]
pub struct Hex<'a>(pub &'a [u8]);

impl fmt::Display for Hex<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut iter = self.0.iter();
        if let Some(first) = iter.next() {
            write!(f, "{:02x}", first)?;
            for b in iter {
                write!(f, " {:02x}", b)?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for Hex<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self)
    }
}

/// Lowercase hex without separators: `&[0xde, 0xad]` -> `"dead"`.
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    bytes.iter().map(|b| format!("{:02x}", b)).collect()
}

/// Lowercase hex with a single space between bytes: `"de ad"`.
pub fn bytes_to_hex_spaced(bytes: &[u8]) -> String {
    Hex(bytes).to_string()
}
