/*
# Bits Reader Module

 Provides bounded big-endian integer readers over byte slices. EBML stores every
 unsigned integer payload, element ID and element size big-endian in 1 to 8 bytes,
 so all readers here refuse empty input and input wider than a `u64`.

 Key components:
 - `read_uint_be()`: whole-slice big-endian unsigned integer
*/

/// Widest integer payload representable in a `u64`.
pub const MAX_UINT_BYTES: usize = 8;

/// Read a big-endian unsigned integer spanning the whole of `data`.
///
/// Returns `None` when `data` is empty or longer than 8 bytes.
pub fn read_uint_be(data: &[u8]) -> Option<u64> {
    if data.is_empty() || data.len() > MAX_UINT_BYTES {
        return None;
    }
    Some(data.iter().fold(0u64, |acc, &b| (acc << 8) | u64::from(b)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_uint_be_widths() {
        assert_eq!(read_uint_be(&[0x2A]), Some(42));
        assert_eq!(read_uint_be(&[0x0F, 0x42, 0x40]), Some(1_000_000));
        assert_eq!(read_uint_be(&[0x1A, 0x45, 0xDF, 0xA3]), Some(0x1A45DFA3));
        assert_eq!(read_uint_be(&[0xFF; 8]), Some(u64::MAX));
    }

    #[test]
    fn test_read_uint_be_rejects_bad_lengths() {
        assert_eq!(read_uint_be(&[]), None);
        assert_eq!(read_uint_be(&[0u8; 9]), None);
    }
}
