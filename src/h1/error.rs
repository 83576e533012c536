use crate::common::BufferOverflow;

/// HTTP response parsing error.
///
/// The connection is left at an undefined position in the byte stream, it must not be reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// Status line is larger than the status line buffer.
    StatusLineTooLong,
    /// Header block is larger than the header buffer.
    HeadersTooLarge,
    /// Line contains stray `\r`.
    InvalidSeparator,
    /// Status line is not `version SP code SP reason`.
    InvalidStatusLine,
    /// Unsupported protocol version.
    UnsupportedVersion,
    /// Status code is not exactly three digits.
    InvalidStatusCode,
    /// Header line without colon or with empty name.
    InvalidHeader,
    /// Non numeric or conflicting `Content-Length` value.
    InvalidContentLength,
    /// Unknown or unsupported `Transfer-Encoding` codings.
    UnknownCodings,
}

impl ParseError {
    const fn message(&self) -> &'static str {
        match self {
            Self::StatusLineTooLong => "status line too long",
            Self::HeadersTooLarge => "header block too large",
            Self::InvalidSeparator => "invalid separator",
            Self::InvalidStatusLine => "invalid status line",
            Self::UnsupportedVersion => "unsupported version",
            Self::InvalidStatusCode => "invalid status code",
            Self::InvalidHeader => "invalid header",
            Self::InvalidContentLength => "invalid content length",
            Self::UnknownCodings => "unknown or unsupported transfer codings",
        }
    }

    pub(crate) fn status_line_overflow(_: BufferOverflow) -> Self {
        Self::StatusLineTooLong
    }

    pub(crate) fn headers_overflow(_: BufferOverflow) -> Self {
        Self::HeadersTooLarge
    }
}

impl std::error::Error for ParseError {}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.message())
    }
}
