use bytes::BytesMut;

/// Growable byte buffer with a hard capacity limit.
///
/// Used to stage partially received protocol fragments. Growth is permitted up to `max` bytes,
/// appending past it is an error and leaves the buffer untouched.
#[derive(Debug)]
pub struct Buffer {
    bytes: BytesMut,
    max: usize,
}

/// Appending would grow [`Buffer`] past its maximum capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferOverflow;

impl Buffer {
    /// Create new [`Buffer`] which allocates `initial` bytes upfront and never grows past `max`.
    ///
    /// `initial` larger than `max` is clamped to `max`.
    pub fn new(initial: usize, max: usize) -> Self {
        Self {
            bytes: BytesMut::with_capacity(initial.min(max)),
            max,
        }
    }

    /// Append `src` to the buffer.
    pub fn append(&mut self, src: &[u8]) -> Result<(), BufferOverflow> {
        if src.len() > self.max - self.bytes.len() {
            return Err(BufferOverflow);
        }
        self.bytes.extend_from_slice(src);
        Ok(())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    #[inline]
    pub fn max(&self) -> usize {
        self.max
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        &self.bytes
    }

    /// Clear the logical length, allocated capacity is retained.
    pub fn clear(&mut self) {
        self.bytes.clear();
    }
}

impl std::error::Error for BufferOverflow {}

impl std::fmt::Display for BufferOverflow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("buffer capacity exceeded")
    }
}
