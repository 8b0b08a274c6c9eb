use log::{debug, info};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;

use crate::errors::{IndexError, MkvIndexResult, StreamError};
use crate::matroska::{ParserResult, ParserState, SeekIndex};

use super::adapter::ChunkAdapter;

/// Bytes read from the source per parser step (8KB)
pub const DEFAULT_CHUNK_SIZE: usize = 8192;

/// Tunables for driving a parser from a reader
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanOptions {
    /// Bytes read per step
    pub chunk_size: usize,
    /// Give up after reading this many bytes without completing the index
    pub max_bytes: Option<u64>,
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            max_bytes: None,
        }
    }
}

impl ScanOptions {
    pub fn with_chunk_size(chunk_size: usize) -> Self {
        Self {
            chunk_size,
            ..Self::default()
        }
    }
}

/// Feed `reader` to a fresh parser chunk by chunk until the index is complete.
///
/// Consumed bytes are discarded from the buffer once they exceed one chunk so
/// memory stays bounded by the largest leaf element plus a chunk.
pub fn build_seek_index<R: Read>(
    reader: &mut R,
    options: &ScanOptions,
) -> MkvIndexResult<SeekIndex> {
    if options.chunk_size == 0 {
        return Err(StreamError::new("chunk size must be non-zero").into());
    }

    let mut parser = ParserState::new();
    let mut adapter = ChunkAdapter::new();
    let mut chunk = vec![0u8; options.chunk_size];
    let mut bytes_read = 0u64;

    loop {
        match parser.step(&adapter) {
            ParserResult::Done => {
                let index = parser.take_index();
                parser.release();
                info!(
                    "seek index complete: {} cue points after {} bytes in {} chunks",
                    index.len(),
                    bytes_read,
                    adapter.chunk_count()
                );
                return Ok(index);
            }
            ParserResult::NotSupported => {
                return Err(IndexError::new("input is not an EBML/Matroska stream").into());
            }
            res @ (ParserResult::ErrorParam | ParserResult::Error) => {
                return Err(IndexError::new(format!("parser failed with {:?}", res)).into());
            }
            ParserResult::Ok | ParserResult::InsufficientData => {}
        }

        if parser.is_stalled() {
            return Err(IndexError::new(format!(
                "malformed element header after {} consumed bytes",
                parser.total_consumed()
            ))
            .into());
        }

        let consumed = parser.resume_offset();
        if consumed >= options.chunk_size {
            adapter.flush(consumed);
            parser.on_flush(consumed);
            debug!("flushed {} consumed bytes", consumed);
        }

        if let Some(limit) = options.max_bytes {
            if bytes_read >= limit {
                return Err(StreamError::new(format!(
                    "no cluster or end of cues within the first {} bytes",
                    limit
                ))
                .into());
            }
        }

        let n = match reader.read(&mut chunk) {
            Ok(n) => n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e.into()),
        };
        if n == 0 {
            return Err(StreamError::new(format!(
                "input ended after {} bytes before the first cluster or end of cues",
                bytes_read
            ))
            .into());
        }
        bytes_read += n as u64;
        adapter.push(&chunk[..n]);
    }
}

/// Open a local file and build its seek index.
pub fn build_seek_index_from_path<P: AsRef<Path>>(
    path: P,
    options: &ScanOptions,
) -> MkvIndexResult<SeekIndex> {
    let mut file = File::open(path)?;
    build_seek_index(&mut file, options)
}
