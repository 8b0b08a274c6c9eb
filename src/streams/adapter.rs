/// Byte buffering collaborator the parser reads from.
///
/// The parser only ever maps and unmaps views; discarding consumed bytes is
/// left to the owner of the buffer.
pub trait ByteAdapter {
    /// Bytes currently buffered and not yet discarded.
    fn available(&self) -> usize;
    /// Read-only contiguous view of up to `len` bytes from the read position.
    fn map(&self, len: usize) -> &[u8];
    /// Called once the most recent view is no longer used.
    fn unmap(&self) {}
}

impl ByteAdapter for [u8] {
    fn available(&self) -> usize {
        self.len()
    }
    fn map(&self, len: usize) -> &[u8] {
        &self[..len.min(self.len())]
    }
}

impl ByteAdapter for Vec<u8> {
    fn available(&self) -> usize {
        self.len()
    }
    fn map(&self, len: usize) -> &[u8] {
        ByteAdapter::map(self.as_slice(), len)
    }
}

/// In-memory adapter that accumulates arbitrarily sized input chunks
#[derive(Debug, Default)]
pub struct ChunkAdapter {
    buffer: Vec<u8>,
    flushed: u64,
    pushed_chunks: u64,
}

impl ChunkAdapter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a chunk at the end of the buffered bytes.
    pub fn push(&mut self, chunk: &[u8]) {
        self.buffer.extend_from_slice(chunk);
        self.pushed_chunks += 1;
    }

    /// Discard up to `n` bytes from the front, returning how many were dropped.
    pub fn flush(&mut self, n: usize) -> usize {
        let n = n.min(self.buffer.len());
        self.buffer.drain(..n);
        self.flushed += n as u64;
        n
    }

    /// Total bytes discarded since creation.
    pub fn total_flushed(&self) -> u64 {
        self.flushed
    }

    pub fn chunk_count(&self) -> u64 {
        self.pushed_chunks
    }
}

impl ByteAdapter for ChunkAdapter {
    fn available(&self) -> usize {
        self.buffer.len()
    }
    fn map(&self, len: usize) -> &[u8] {
        ByteAdapter::map(self.buffer.as_slice(), len)
    }
}
