use bytes::BytesMut;
use std::num::NonZeroU64;

use super::BodyError;
use crate::common::ParseResult;

const MAX_CHUNKED_SIZE: u64 = u64::MAX >> 1;

/// Maximum length of a chunk size line or a trailer field line.
const MAX_LINE_SIZE: usize = 4 * 1024;

/// Chunked transfer coding decoder.
///
/// Tolerates input split at any position, bytes that do not form a complete syntax element are
/// left in the buffer for the next call.
#[derive(Clone, Debug)]
pub struct ChunkedDecoder {
    phase: Phase,
}

#[derive(Clone, Debug)]
enum Phase {
    /// chunk size line
    Header,
    Chunk(NonZeroU64),
    /// CRLF after chunk data
    ChunkEnd,
    Trailer,
    Eof,
}

impl Default for ChunkedDecoder {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl ChunkedDecoder {
    pub fn new() -> Self {
        Self {
            phase: Phase::Header,
        }
    }

    /// Returns `true` if the final chunk and trailer section are consumed.
    pub fn is_eof(&self) -> bool {
        matches!(self.phase, Phase::Eof)
    }

    /// Decode the next payload from `buffer`, advancing it past consumed bytes.
    ///
    /// Returns `Ok(Some(payload))` for decoded bytes, `Ok(None)` once the final chunk and trailer
    /// section are consumed, or `Pending` if more bytes are required. Bytes following the final
    /// chunk are left in `buffer`.
    pub fn decode(&mut self, buffer: &mut BytesMut) -> ParseResult<Option<BytesMut>, BodyError> {
        use ParseResult as Result;

        loop {
            match &mut self.phase {
                Phase::Header => {
                    let Some(line) = split_line(buffer) else {
                        return pending_line(buffer);
                    };

                    let digits_len = line
                        .iter()
                        .position(|e| !e.is_ascii_hexdigit())
                        .unwrap_or(line.len());

                    // extension / CRLF delimiter
                    if !matches!(line.get(digits_len), Some(b';' | b' ' | b'\t' | b'\r' | b'\n')) {
                        return Result::Err(BodyError::InvalidChunked);
                    }

                    let Some(chunk_len) = parse_hex(&line[..digits_len]) else {
                        return Result::Err(BodyError::InvalidChunked);
                    };
                    if chunk_len > MAX_CHUNKED_SIZE {
                        return Result::Err(BodyError::ChunkTooLarge);
                    }

                    self.phase = match NonZeroU64::new(chunk_len) {
                        Some(len) => Phase::Chunk(len),
                        None => Phase::Trailer,
                    };
                }
                Phase::Chunk(remaining_mut) => {
                    if buffer.is_empty() {
                        return Result::Pending;
                    }

                    let remaining = remaining_mut.get();
                    match remaining
                        .checked_sub(buffer.len() as u64)
                        .and_then(NonZeroU64::new)
                    {
                        // buffer contains partial of the expected chunk
                        Some(leftover) => {
                            *remaining_mut = leftover;
                            return Result::Ok(Some(buffer.split()));
                        }
                        // buffer contains exact or larger than expected chunk
                        None => {
                            #[allow(
                                clippy::cast_possible_truncation,
                                reason = "remaining <= buffer.len() which is usize"
                            )]
                            let remaining = remaining as usize;
                            self.phase = Phase::ChunkEnd;
                            return Result::Ok(Some(buffer.split_to(remaining)));
                        }
                    }
                }
                Phase::ChunkEnd => {
                    let crlf = match (buffer.first(), buffer.get(1)) {
                        (Some(b'\n'), _) => 1,
                        (Some(b'\r'), Some(b'\n')) => 2,
                        (None, _) | (Some(b'\r'), None) => return Result::Pending,
                        _ => return Result::Err(BodyError::InvalidChunked),
                    };
                    let _ = buffer.split_to(crlf);
                    self.phase = Phase::Header;
                }
                Phase::Trailer => {
                    let Some(line) = split_line(buffer) else {
                        return pending_line(buffer);
                    };
                    // trailer fields are discarded
                    if matches!(&line[..], b"\r\n" | b"\n") {
                        self.phase = Phase::Eof;
                        return Result::Ok(None);
                    }
                }
                Phase::Eof => return Result::Ok(None),
            }
        }
    }
}

fn split_line(buffer: &mut BytesMut) -> Option<BytesMut> {
    let lf = buffer.iter().position(|&e| e == b'\n')?;
    Some(buffer.split_to(lf + 1))
}

fn pending_line<T>(buffer: &BytesMut) -> ParseResult<T, BodyError> {
    if buffer.len() > MAX_LINE_SIZE {
        ParseResult::Err(BodyError::InvalidChunked)
    } else {
        ParseResult::Pending
    }
}

fn parse_hex(digits: &[u8]) -> Option<u64> {
    if digits.is_empty() || digits.len() > 16 {
        return None;
    }
    digits.iter().try_fold(0u64, |acc, &digit| {
        let value = char::from(digit).to_digit(16)?;
        acc.checked_mul(16)?.checked_add(u64::from(value))
    })
}
