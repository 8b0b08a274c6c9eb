pub mod reader;
pub use reader::{read_uint_be, MAX_UINT_BYTES};
