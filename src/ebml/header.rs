use crate::errors::EbmlError;

use super::vint::{decode_id, decode_size, decode_varint_length, MAX_VINT_LENGTH};

/// One decoded EBML element header.
///
/// The payload view borrows from the span the header was decoded from and
/// never outlives a single parse call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementHeader<'a> {
    /// Element ID, marker bits included. Only the low 32 bits are kept.
    pub id: u32,
    /// Declared payload size, or [`super::UNKNOWN_SIZE`].
    pub size: u64,
    /// Offset of the payload from the start of the decoded span.
    pub payload_offset: usize,
    /// Payload bytes available in the span, at most `size` of them.
    pub payload: &'a [u8],
}

impl ElementHeader<'_> {
    /// Bytes occupied by the ID and size fields.
    pub fn header_len(&self) -> u64 {
        self.payload_offset as u64
    }

    /// Whether the declared payload is entirely inside the decoded span.
    pub fn payload_complete(&self) -> bool {
        self.payload.len() as u64 == self.size
    }
}

/// Read one length-prefixed field starting at `pos`, checking it fits.
fn field_length(span: &[u8], pos: usize) -> Result<usize, EbmlError> {
    let lead = *span.get(pos).ok_or(EbmlError::Truncated {
        needed: pos as u64 + 1,
        available: span.len() as u64,
    })?;
    let length = decode_varint_length(lead);
    if length > MAX_VINT_LENGTH {
        return Err(EbmlError::InvalidLength { length });
    }
    if pos + length > span.len() {
        return Err(EbmlError::Truncated {
            needed: (pos + length) as u64,
            available: span.len() as u64,
        });
    }
    Ok(length)
}

/// Decode one element header from the start of `span`.
///
/// On success returns the header and the element's full span, i.e. ID bytes +
/// size bytes + declared payload size. Leaf elements are skipped by that full
/// span; containers consume only `header_len()` so their children get walked.
/// The full span may exceed `span.len()`; callers check before consuming.
pub fn decode_one_header(span: &[u8]) -> Result<(ElementHeader<'_>, u64), EbmlError> {
    if span.is_empty() {
        return Err(EbmlError::Empty);
    }

    let id_len = field_length(span, 0)?;
    let id = decode_id(span, id_len).ok_or(EbmlError::InvalidLength { length: id_len })?;

    let size_len = field_length(span, id_len)?;
    let size = decode_size(&span[id_len..], size_len)
        .ok_or(EbmlError::InvalidLength { length: size_len })?;

    let payload_offset = id_len + size_len;
    let available = (span.len() - payload_offset) as u64;
    let payload_len = size.min(available) as usize;

    let header = ElementHeader {
        id: id as u32,
        size,
        payload_offset,
        payload: &span[payload_offset..payload_offset + payload_len],
    };
    let full_span = (payload_offset as u64).saturating_add(size);
    Ok((header, full_span))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ebml::UNKNOWN_SIZE;

    #[test]
    fn test_decode_leaf_header() {
        // TimecodeScale = 1_000_000
        let data = [0x2A, 0xD7, 0xB1, 0x83, 0x0F, 0x42, 0x40, 0xEE];
        let (header, full) = decode_one_header(&data).expect("header");
        assert_eq!(header.id, 0x2AD7B1);
        assert_eq!(header.size, 3);
        assert_eq!(header.payload_offset, 4);
        assert_eq!(header.payload, &[0x0F, 0x42, 0x40]);
        assert!(header.payload_complete());
        assert_eq!(full, 7);
    }

    #[test]
    fn test_decode_partial_payload() {
        let data = [0xB3, 0x84, 0x00, 0x01];
        let (header, full) = decode_one_header(&data).expect("header");
        assert_eq!(header.size, 4);
        assert_eq!(header.payload, &[0x00, 0x01]);
        assert!(!header.payload_complete());
        assert_eq!(full, 6);
    }

    #[test]
    fn test_decode_unknown_size_container() {
        let data = [0x18, 0x53, 0x80, 0x67, 0xFF];
        let (header, full) = decode_one_header(&data).expect("header");
        assert_eq!(header.id, 0x18538067);
        assert_eq!(header.size, UNKNOWN_SIZE);
        assert_eq!(header.header_len(), 5);
        assert!(header.payload.is_empty());
        assert_eq!(full, 5 + UNKNOWN_SIZE);
    }

    #[test]
    fn test_decode_truncated_fields() {
        assert_eq!(decode_one_header(&[]), Err(EbmlError::Empty));
        // ID needs 4 bytes
        assert_eq!(
            decode_one_header(&[0x1A, 0x45]),
            Err(EbmlError::Truncated {
                needed: 4,
                available: 2
            })
        );
        // ID present, size field missing
        assert_eq!(
            decode_one_header(&[0xBB]),
            Err(EbmlError::Truncated {
                needed: 2,
                available: 1
            })
        );
        // Size field claims 2 bytes, only 1 present
        assert!(matches!(
            decode_one_header(&[0xBB, 0x40]),
            Err(EbmlError::Truncated { .. })
        ));
    }

    #[test]
    fn test_decode_rejects_zero_lead_byte() {
        assert_eq!(
            decode_one_header(&[0x00, 0x81, 0x00]),
            Err(EbmlError::InvalidLength { length: 9 })
        );
        assert_eq!(
            decode_one_header(&[0xBB, 0x00, 0x00]),
            Err(EbmlError::InvalidLength { length: 9 })
        );
    }
}
