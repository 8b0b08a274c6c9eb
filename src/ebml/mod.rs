//! EBML (Extensible Binary Meta Language) decoding primitives.
//!
//! EBML is the binary format underlying Matroska/WebM. Every element is an
//! ID, a size and a payload, with ID and size stored as variable-length integers.

pub mod header;
pub mod ids;
pub mod span;
pub mod vint;

pub use header::{decode_one_header, ElementHeader};
pub use span::ByteSpan;
pub use vint::{
    decode_id, decode_size, decode_varint_length, unknown_size_marker, write_element_header,
    write_unknown_size_header, MAX_VINT_LENGTH, UNKNOWN_SIZE,
};
