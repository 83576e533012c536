//! HTTP Message Body.
//!
//! - [`Body`] response body handle, borrowed from the session
//! - [`BodyDecoder`] framing state machine
//! - [`ChunkedDecoder`] chunked transfer coding decoder
use bytes::{Bytes, BytesMut};
use std::io;

use crate::io::{Stream, StreamClient};

mod chunked;
mod decoder;
mod error;

pub use chunked::ChunkedDecoder;
pub use decoder::{BodyDecoder, Coding};
pub use error::BodyError;


/// Response body.
///
/// Body bytes are read lazily from the connection. Dropping the body before it is complete is
/// allowed, the remaining bytes are discarded on the next send.
pub struct Body<'a, IO> {
    decoder: &'a mut BodyDecoder,
    client: &'a mut StreamClient<IO>,
}

impl<'a, IO> Body<'a, IO> {
    pub(crate) fn new(decoder: &'a mut BodyDecoder, client: &'a mut StreamClient<IO>) -> Self {
        Self { decoder, client }
    }

    /// Returns `true` if the whole body has been read.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.decoder.is_end()
    }
}

impl<IO: Stream> Body<'_, IO> {
    /// Read at most `max` body bytes.
    ///
    /// Blocks until at least one byte is available, returns `Ok(None)` once the body is complete.
    pub fn read_chunk(&mut self, max: usize) -> Result<Option<Bytes>, BodyError> {
        Ok(self
            .decoder
            .read_chunk(self.client, max)?
            .map(BytesMut::freeze))
    }

    /// Read the next available body bytes, without size limit.
    #[inline]
    pub fn next_chunk(&mut self) -> Result<Option<Bytes>, BodyError> {
        self.read_chunk(usize::MAX)
    }

    /// Read the rest of the body into a single buffer.
    pub fn read_all(&mut self) -> Result<Bytes, BodyError> {
        let Some(first) = self.next_chunk()? else {
            return Ok(Bytes::new());
        };
        let Some(second) = self.next_chunk()? else {
            return Ok(first);
        };

        let mut buffer = BytesMut::with_capacity(first.len() + second.len());
        buffer.extend_from_slice(&first);
        buffer.extend_from_slice(&second);
        while let Some(chunk) = self.next_chunk()? {
            buffer.extend_from_slice(&chunk);
        }
        Ok(buffer.freeze())
    }

    /// Read the rest of the body as UTF-8 string.
    pub fn read_string(&mut self) -> Result<String, BodyError> {
        let bytes = self.read_all()?;
        String::from_utf8(bytes.into()).map_err(|_| BodyError::InvalidUtf8)
    }

    /// Read and discard the rest of the body, returns the number of discarded bytes.
    pub fn discard(&mut self) -> Result<u64, BodyError> {
        self.decoder.drain(self.client)
    }
}

impl<IO: Stream> io::Read for Body<'_, IO> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if buf.is_empty() {
            return Ok(0);
        }
        match self.read_chunk(buf.len())? {
            Some(chunk) => {
                buf[..chunk.len()].copy_from_slice(&chunk);
                Ok(chunk.len())
            }
            None => Ok(0),
        }
    }
}

impl<IO: Stream> Iterator for Body<'_, IO> {
    type Item = Result<Bytes, BodyError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_chunk().transpose()
    }
}

impl<IO> std::fmt::Debug for Body<'_, IO> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("Body")
            .field("coding", self.decoder.coding())
            .field("is_end", &self.decoder.is_end())
            .finish()
    }
}
