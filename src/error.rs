use std::{fmt, io};

use crate::body::BodyError;
use crate::h1::ParseError;

/// Client error.
#[derive(Debug)]
pub enum Error {
    /// Connection failure, including read and write timeouts.
    Io(io::Error),
    /// Malformed or oversized response head.
    ///
    /// The connection is in an unknown state afterwards and should be discarded.
    Parse(ParseError),
    /// Failure while reading a message body.
    Body(BodyError),
    /// Request could not be built, e.g: the payload file could not be opened.
    Build(io::Error),
}

impl Error {
    /// Returns `true` if the error is caused by a read or write timeout.
    pub fn is_timeout(&self) -> bool {
        let err = match self {
            Self::Io(err) => err,
            Self::Body(BodyError::Truncated { source, .. }) => source,
            _ => return false,
        };
        matches!(
            err.kind(),
            io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut
        )
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) | Self::Build(err) => Some(err),
            Self::Parse(err) => Some(err),
            Self::Body(err) => Some(err),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "connection error: {err}"),
            Self::Parse(err) => write!(f, "invalid response: {err}"),
            Self::Body(err) => write!(f, "body error: {err}"),
            Self::Build(err) => write!(f, "failed to build request: {err}"),
        }
    }
}

impl From<io::Error> for Error {
    #[inline]
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<ParseError> for Error {
    #[inline]
    fn from(value: ParseError) -> Self {
        Self::Parse(value)
    }
}

impl From<BodyError> for Error {
    #[inline]
    fn from(value: BodyError) -> Self {
        Self::Body(value)
    }
}
