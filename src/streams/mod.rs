pub mod adapter;
pub mod chunk_reader;
pub use adapter::{ByteAdapter, ChunkAdapter};
pub use chunk_reader::{
    build_seek_index, build_seek_index_from_path, ScanOptions, DEFAULT_CHUNK_SIZE,
};
