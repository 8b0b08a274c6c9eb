/// Bounds-checked read cursor over a borrowed byte view.
///
/// Only the integer cursor outlives a parse call; the view itself is tied to
/// the lifetime of the buffer it was mapped from.
#[derive(Debug, Clone, Copy)]
pub struct ByteSpan<'a> {
    data: &'a [u8],
    cursor: usize,
}

impl<'a> ByteSpan<'a> {
    /// Create a span positioned at `cursor`, clamped to the end of `data`.
    pub fn new(data: &'a [u8], cursor: usize) -> Self {
        Self {
            data,
            cursor: cursor.min(data.len()),
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Bytes between the cursor and the end of the view.
    pub fn remaining(&self) -> usize {
        self.data.len() - self.cursor
    }

    /// The unread part of the view.
    pub fn rest(&self) -> &'a [u8] {
        &self.data[self.cursor..]
    }

    /// Advance the cursor by `n` bytes. Fails without moving if `n` exceeds
    /// the remaining length.
    pub fn advance(&mut self, n: u64) -> bool {
        match usize::try_from(n) {
            Ok(n) if n <= self.remaining() => {
                self.cursor += n;
                true
            }
            _ => false,
        }
    }
}
