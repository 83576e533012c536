use bytes::BytesMut;

use super::{BodyError, ChunkedDecoder};
use crate::common::ParseResult;
use crate::http::Method;
use crate::io::{Stream, StreamClient};
use crate::log::trace;
use crate::response::Parts;

/// Message body decoder.
///
/// Reads exactly the bytes that belong to one response body, bytes past the body end are pushed
/// back to the [`StreamClient`] for the next response.
#[derive(Debug, Default)]
pub struct BodyDecoder {
    coding: Coding,
    /// undecoded chunked bytes
    raw: BytesMut,
    /// decoded bytes that did not fit the last caller limit
    decoded: BytesMut,
}

/// Body framing.
#[derive(Clone, Debug, Default)]
pub enum Coding {
    /// No body, or the body is fully read.
    #[default]
    Empty,
    /// Remaining bytes of a `Content-Length` body.
    ContentLength(u64),
    Chunked(ChunkedDecoder),
}

impl BodyDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select the framing of the response described by `parts`, answering a `method` request.
    ///
    /// Responses to `HEAD`, and `1xx`, `204` and `304` responses never carry a body. A response
    /// with neither chunked coding nor `Content-Length` is treated as empty.
    pub fn init(&mut self, parts: &Parts, method: Method) {
        let status = parts.status.as_u16();
        let no_body = method == Method::HEAD
            || parts.status.is_informational()
            || status == 204
            || status == 304;

        self.coding = if no_body {
            Coding::Empty
        } else if parts.encoding.is_chunked() {
            Coding::Chunked(ChunkedDecoder::new())
        } else {
            match parts.content_length {
                Some(len) if len > 0 => Coding::ContentLength(len),
                _ => Coding::Empty,
            }
        };
        self.raw.clear();
        self.decoded.clear();
    }

    #[inline]
    pub fn coding(&self) -> &Coding {
        &self.coding
    }

    /// Returns `true` if the whole body has been returned to the caller.
    #[inline]
    pub fn is_end(&self) -> bool {
        matches!(self.coding, Coding::Empty) && self.decoded.is_empty()
    }

    /// Read at most `max` decoded body bytes, blocking until at least one is available.
    ///
    /// Returns `Ok(None)` once the body is complete. A `max` of zero is treated as one.
    pub fn read_chunk<IO: Stream>(
        &mut self,
        client: &mut StreamClient<IO>,
        max: usize,
    ) -> Result<Option<BytesMut>, BodyError> {
        let max = max.max(1);

        if !self.decoded.is_empty() {
            let len = max.min(self.decoded.len());
            return Ok(Some(self.decoded.split_to(len)));
        }

        match &mut self.coding {
            Coding::Empty => Ok(None),
            Coding::ContentLength(remaining) => {
                let mut bytes = match client.read() {
                    Ok(ok) => ok,
                    Err(source) => {
                        return Err(BodyError::Truncated {
                            remaining: Some(*remaining),
                            source,
                        });
                    }
                };

                let len = max_len(max, *remaining, bytes.len());
                let chunk = bytes.split_to(len);
                client.unread(bytes);

                *remaining -= len as u64;
                if *remaining == 0 {
                    trace!("content-length body complete");
                    self.coding = Coding::Empty;
                }
                Ok(Some(chunk))
            }
            Coding::Chunked(decoder) => loop {
                match decoder.decode(&mut self.raw) {
                    ParseResult::Ok(Some(mut chunk)) => {
                        if chunk.len() > max {
                            self.decoded = chunk.split_off(max);
                        }
                        return Ok(Some(chunk));
                    }
                    ParseResult::Ok(None) => {
                        trace!("chunked body complete");
                        client.unread(self.raw.split());
                        self.coding = Coding::Empty;
                        return Ok(None);
                    }
                    ParseResult::Pending => match client.read() {
                        Ok(bytes) => self.raw.unsplit(bytes),
                        Err(source) => {
                            return Err(BodyError::Truncated {
                                remaining: None,
                                source,
                            });
                        }
                    },
                    ParseResult::Err(err) => return Err(err),
                }
            },
        }
    }

    /// Read and discard the rest of the body, returns the number of discarded bytes.
    pub fn drain<IO: Stream>(&mut self, client: &mut StreamClient<IO>) -> Result<u64, BodyError> {
        let mut discarded = 0u64;
        while let Some(chunk) = self.read_chunk(client, usize::MAX)? {
            discarded += chunk.len() as u64;
        }
        Ok(discarded)
    }
}

fn max_len(max: usize, remaining: u64, available: usize) -> usize {
    let remaining = usize::try_from(remaining).unwrap_or(usize::MAX);
    max.min(remaining).min(available)
}
