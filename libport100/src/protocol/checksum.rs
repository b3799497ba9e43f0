// libport100/src/protocol/checksum.rs
//! Frame checksums.

/// Compute the two's-complement checksum of `bytes`: the unique byte `c`
/// with `sum(bytes) + c ≡ 0 (mod 256)`. Used for both the length field and
/// the payload of a Data frame.
pub fn checksum(bytes: &[u8]) -> u8 {
    0u8.wrapping_sub(sum(bytes))
}

/// Verify a range that already ends with its checksum byte.
pub fn verify(bytes_with_checksum: &[u8]) -> bool {
    sum(bytes_with_checksum) == 0
}

fn sum(bytes: &[u8]) -> u8 {
    bytes.iter().fold(0u8, |acc, &b| acc.wrapping_add(b))
}
