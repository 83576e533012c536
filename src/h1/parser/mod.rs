//! HTTP/1.1 Response Parser.
//!
//! [`Parser::parse`] works on chunked bytes, given any length of bytes, the parser consumes
//! complete lines and stages partial ones in its buffers. If the header block is not yet
//! terminated, it returns [`ParseResult::Pending`] and expects the next bytes read from the
//! stream on the next call.
//!
//! Once the empty line terminating the header block is found, it returns
//! [`ParseResult::Ok`] with the bytes that follow it, which belong to the message body.
//!
//! [`ParseResult::Pending`]: crate::common::ParseResult::Pending
//! [`ParseResult::Ok`]: crate::common::ParseResult::Ok
use bytes::BytesMut;

use super::ParseError;
use crate::common::{Buffer, ParseResult};
use crate::headers::standard::{CONTENT_ENCODING, CONTENT_LENGTH, TRANSFER_ENCODING};
use crate::http::{StatusCode, Version};
use crate::response::Parts;

#[cfg(test)]
mod test;

/// Parser progress within a response head.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum State {
    StatusLine,
    Headers,
    Complete,
}

/// Response head parser.
#[derive(Debug)]
pub struct Parser {
    state: State,
    status_line: Buffer,
    headers: Buffer,
    /// Offset of the header line being received within `headers`.
    line_start: usize,
}

impl Parser {
    /// Create new [`Parser`] staging the status line and the header block in given buffers.
    ///
    /// Each buffer maximum is the size limit of the respective protocol fragment.
    pub fn new(status_line: Buffer, headers: Buffer) -> Self {
        Self {
            state: State::StatusLine,
            status_line,
            headers,
            line_start: 0,
        }
    }

    #[inline]
    pub fn state(&self) -> State {
        self.state
    }

    /// Prepare for a new response, buffers capacity is retained.
    pub fn reset(&mut self) {
        self.state = State::StatusLine;
        self.status_line.clear();
        self.headers.clear();
        self.line_start = 0;
    }

    /// Consume `bytes` into `parts`.
    ///
    /// Returns `Ok(rest)` when the header block is complete, where `rest` is the bytes not
    /// consumed, or `Pending` if all bytes are consumed and more is required.
    pub fn parse(&mut self, bytes: BytesMut, parts: &mut Parts) -> ParseResult<BytesMut, ParseError> {
        match self.advance(bytes, parts) {
            Ok(Some(rest)) => ParseResult::Ok(rest),
            Ok(None) => ParseResult::Pending,
            Err(err) => ParseResult::Err(err),
        }
    }

    fn advance(
        &mut self,
        mut bytes: BytesMut,
        parts: &mut Parts,
    ) -> Result<Option<BytesMut>, ParseError> {
        loop {
            match self.state {
                State::StatusLine => {
                    let Some(line) = split_line(&mut bytes) else {
                        self.status_line
                            .append(&bytes)
                            .map_err(ParseError::status_line_overflow)?;
                        return Ok(None);
                    };
                    self.status_line
                        .append(&line)
                        .map_err(ParseError::status_line_overflow)?;

                    parse_status_line(trim_line(self.status_line.as_slice())?, parts)?;
                    self.state = State::Headers;
                }
                State::Headers => {
                    let Some(line) = split_line(&mut bytes) else {
                        self.headers
                            .append(&bytes)
                            .map_err(ParseError::headers_overflow)?;
                        return Ok(None);
                    };
                    self.headers
                        .append(&line)
                        .map_err(ParseError::headers_overflow)?;

                    let line = trim_line(&self.headers.as_slice()[self.line_start..])?;
                    self.line_start = self.headers.len();

                    if line.is_empty() {
                        resolve_framing(parts)?;
                        self.state = State::Complete;
                    } else {
                        let (name, value) = parse_header_line(line)?;
                        parts.headers.add(name, value);
                    }
                }
                State::Complete => return Ok(Some(bytes)),
            }
        }
    }
}

/// Split a line including its `\n` terminator.
fn split_line(bytes: &mut BytesMut) -> Option<BytesMut> {
    let lf = bytes.iter().position(|&e| e == b'\n')?;
    Some(bytes.split_to(lf + 1))
}

/// Strip `\r\n` or bare `\n` terminator.
fn trim_line(line: &[u8]) -> Result<&[u8], ParseError> {
    let line = line.strip_suffix(b"\n").unwrap_or(line);
    let line = line.strip_suffix(b"\r").unwrap_or(line);
    if line.contains(&b'\r') {
        return Err(ParseError::InvalidSeparator);
    }
    Ok(line)
}

// ===== Status Line =====

fn parse_status_line(line: &[u8], parts: &mut Parts) -> Result<(), ParseError> {
    let Some(sp) = line.iter().position(|&e| e == b' ') else {
        return Err(ParseError::InvalidStatusLine);
    };
    let (version, rest) = (&line[..sp], &line[sp + 1..]);

    parts.version = Version::from_bytes(version).ok_or(ParseError::UnsupportedVersion)?;

    // reason phrase may be empty, and its preceding space may be omitted
    let (code, reason) = match rest.iter().position(|&e| e == b' ') {
        Some(sp) => (&rest[..sp], &rest[sp + 1..]),
        None => (rest, &b""[..]),
    };

    parts.status = StatusCode::from_bytes(code).ok_or(ParseError::InvalidStatusCode)?;
    parts.reason.push_str(&String::from_utf8_lossy(reason));

    Ok(())
}

// ===== Header =====

fn parse_header_line(line: &[u8]) -> Result<(String, String), ParseError> {
    let Some(colon) = line.iter().position(|&e| e == b':') else {
        return Err(ParseError::InvalidHeader);
    };

    let name = line[..colon].trim_ascii();
    if name.is_empty() {
        return Err(ParseError::InvalidHeader);
    }
    let Ok(name) = std::str::from_utf8(name) else {
        return Err(ParseError::InvalidHeader);
    };

    let value = String::from_utf8_lossy(line[colon + 1..].trim_ascii());

    Ok((name.to_owned(), value.into_owned()))
}

/// Derive body framing from the complete header block.
fn resolve_framing(parts: &mut Parts) -> Result<(), ParseError> {
    let mut chunked = false;
    for coding in list_values(parts.headers.get_all(TRANSFER_ENCODING)) {
        // TODO: support compressed transfer-codings
        if !coding.eq_ignore_ascii_case("chunked") {
            return Err(ParseError::UnknownCodings);
        }
        chunked = true;
    }

    let mut content_length = None;
    for value in parts.headers.get_all(CONTENT_LENGTH) {
        let len = parse_content_length(value)?;
        match content_length {
            Some(prev) if prev != len => return Err(ParseError::InvalidContentLength),
            _ => content_length = Some(len),
        }
    }

    parts.encoding.chunked = chunked;
    parts.content_length = if chunked { None } else { content_length };
    parts.encoding.content.extend(
        list_values(parts.headers.get_all(CONTENT_ENCODING))
            .filter(|e| !e.eq_ignore_ascii_case("identity"))
            .map(str::to_owned),
    );

    Ok(())
}

fn list_values<'a>(values: impl Iterator<Item = &'a str>) -> impl Iterator<Item = &'a str> {
    values
        .flat_map(|e| e.split(','))
        .map(str::trim)
        .filter(|e| !e.is_empty())
}

fn parse_content_length(value: &str) -> Result<u64, ParseError> {
    if value.is_empty() || !value.bytes().all(|e| e.is_ascii_digit()) {
        return Err(ParseError::InvalidContentLength);
    }
    value.parse().map_err(|_| ParseError::InvalidContentLength)
}
