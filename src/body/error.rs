use std::{fmt, io};

/// Message body reading error.
#[derive(Debug)]
pub enum BodyError {
    /// Stream ended or failed before the body was complete.
    ///
    /// `remaining` is the number of missing bytes for `Content-Length` framing, and `None` for
    /// chunked framing.
    Truncated {
        remaining: Option<u64>,
        source: io::Error,
    },
    /// Server error where chunked format is invalid.
    InvalidChunked,
    /// Server error where chunk length is too large.
    ChunkTooLarge,
    /// Body is not valid UTF-8.
    InvalidUtf8,
}

impl BodyError {
    /// Returns `true` if the body was cut short.
    #[inline]
    pub fn is_truncated(&self) -> bool {
        matches!(self, Self::Truncated { .. })
    }
}

impl std::error::Error for BodyError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Truncated { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl fmt::Display for BodyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Truncated {
                remaining: Some(remaining),
                source,
            } => write!(f, "message body truncated, {remaining} bytes missing: {source}"),
            Self::Truncated {
                remaining: None,
                source,
            } => write!(f, "chunked message body truncated: {source}"),
            Self::InvalidChunked => f.write_str("invalid chunked format"),
            Self::ChunkTooLarge => f.write_str("chunk too large"),
            Self::InvalidUtf8 => f.write_str("message body is not valid utf-8"),
        }
    }
}

impl From<BodyError> for io::Error {
    fn from(value: BodyError) -> Self {
        let kind = match &value {
            BodyError::Truncated { .. } => io::ErrorKind::UnexpectedEof,
            _ => io::ErrorKind::InvalidData,
        };
        io::Error::new(kind, value)
    }
}
