pub mod bits;
pub use bits::reader::read_uint_be;

pub mod ebml;
pub use ebml::{decode_one_header, ElementHeader, UNKNOWN_SIZE};

pub mod matroska;
pub use matroska::{
    CuePointEntry, CueTrackPosition, ParserResult, ParserState, ParserStatus, SeekIndex,
};

pub mod streams;
pub use streams::{
    build_seek_index, build_seek_index_from_path, ByteAdapter, ChunkAdapter, ScanOptions,
};

pub mod errors;
pub use errors::{EbmlError, IndexError, MkvIndexError, MkvIndexResult, StreamError};

use std::path::Path;

/// Build the seek index of a local Matroska/WebM file with default options.
pub fn extract_seek_index<P: AsRef<Path>>(path: P) -> MkvIndexResult<SeekIndex> {
    build_seek_index_from_path(path, &ScanOptions::default())
}
