//! EBML variable-length integer (VINT) decoding.
//!
//! The position of the first set bit in the lead byte signals the field width:
//! - 1xxxxxxx: 1 byte (7 bits of data)
//! - 01xxxxxx xxxxxxxx: 2 bytes (14 bits)
//! - 001xxxxx xxxxxxxx xxxxxxxx: 3 bytes (21 bits)
//! - etc.
//!
//! Element IDs keep the marker bits, element sizes drop them.

use crate::bits::read_uint_be;

/// Maximum VINT length in bytes.
pub const MAX_VINT_LENGTH: usize = 8;

/// Size reported for elements whose size field has every data bit set.
pub const UNKNOWN_SIZE: u64 = 0x7FFF_FFFF_FFFF_FFFF;

/// Width in bytes of the VINT starting with `lead`.
///
/// A zero lead byte yields 9, which every caller must reject.
pub fn decode_varint_length(lead: u8) -> usize {
    lead.leading_zeros() as usize + 1
}

/// Decode an element ID of `length` bytes, marker bits included.
pub fn decode_id(bytes: &[u8], length: usize) -> Option<u64> {
    if length == 0 || length > MAX_VINT_LENGTH || bytes.len() < length {
        return None;
    }
    read_uint_be(&bytes[..length])
}

/// The all-ones data pattern reserved for "unknown size" at a given width.
pub fn unknown_size_marker(length: usize) -> Option<u64> {
    match length {
        1..=MAX_VINT_LENGTH => Some((1u64 << (7 * length)) - 1),
        _ => None,
    }
}

/// Decode an element size of `length` bytes with the marker bit stripped.
///
/// The reserved all-ones pattern is normalized to [`UNKNOWN_SIZE`].
pub fn decode_size(bytes: &[u8], length: usize) -> Option<u64> {
    if length == 0 || length > MAX_VINT_LENGTH || bytes.len() < length {
        return None;
    }
    let lead = u64::from(bytes[0]).checked_sub(1u64 << (8 - length))?;
    let value = bytes[1..length]
        .iter()
        .fold(lead, |acc, &b| (acc << 8) | u64::from(b));

    if Some(value) == unknown_size_marker(length) {
        Some(UNKNOWN_SIZE)
    } else {
        Some(value)
    }
}

/// Smallest width able to carry `value` without colliding with the
/// unknown-size pattern.
pub fn size_length(value: u64) -> usize {
    (1..MAX_VINT_LENGTH)
        .find(|&len| value < (1u64 << (7 * len)) - 1)
        .unwrap_or(MAX_VINT_LENGTH)
}

/// Encode `value` as an element size of exactly `length` bytes.
///
/// Returns `None` if the value does not fit in `length` bytes.
pub fn encode_size_with_length(value: u64, length: usize) -> Option<Vec<u8>> {
    let marker = unknown_size_marker(length)?;
    if value > marker {
        return None;
    }
    let mut bytes = value.to_be_bytes()[8 - length..].to_vec();
    bytes[0] |= 0x80 >> (length - 1);
    Some(bytes)
}

/// Write an element header (ID plus minimal-width size) to a vector.
///
/// Returns the number of bytes written, or `None` without touching `output`
/// when `size` is at or above the 8-byte unknown-size pattern.
pub fn write_element_header(output: &mut Vec<u8>, id: u32, size: u64) -> Option<usize> {
    let length = size_length(size);
    if unknown_size_marker(length) == Some(size) {
        return None;
    }
    let size_bytes = encode_size_with_length(size, length)?;

    let id_bytes = id.to_be_bytes();
    let start = id_bytes.iter().position(|&b| b != 0).unwrap_or(3);
    output.extend_from_slice(&id_bytes[start..]);
    output.extend_from_slice(&size_bytes);
    Some(id_bytes.len() - start + size_bytes.len())
}

/// Write an element header whose size field is the 1-byte unknown-size marker.
pub fn write_unknown_size_header(output: &mut Vec<u8>, id: u32) {
    let id_bytes = id.to_be_bytes();
    let start = id_bytes.iter().position(|&b| b != 0).unwrap_or(3);
    output.extend_from_slice(&id_bytes[start..]);
    output.push(0xFF);
}
