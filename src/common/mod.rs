//! Shared parsing primitives.
//!
//! - [`ParseResult`] outcome of a chunked parse step
//! - [`Buffer`] growable byte buffer with a hard capacity limit
mod buffer;

pub use buffer::{Buffer, BufferOverflow};

#[derive(Debug)]
pub enum ParseResult<T, E> {
    /// Bytes is not sufficient for parsing, more IO read is required.
    Pending,
    /// Parse success.
    Ok(T),
    /// Parse failed.
    Err(E),
}

impl<T, E> ParseResult<T, E> {
    /// Returns `true` if the parse result is [`Pending`].
    ///
    /// [`Pending`]: ParseResult::Pending
    #[inline]
    pub const fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }
}
