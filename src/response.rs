//! HTTP Response.
use crate::body::Body;
use crate::headers::HeaderMap;
use crate::headers::standard::CONTENT_TYPE;
use crate::http::{StatusCode, Version};

/// HTTP Response Parts.
///
/// Owned by the [`Session`] and cleared, not reallocated, between exchanges.
///
/// [`Session`]: crate::Session
#[derive(Debug, Default, PartialEq, Eq)]
pub struct Parts {
    pub version: Version,
    pub status: StatusCode,
    pub reason: String,
    pub headers: HeaderMap,
    /// Declared body length, `None` when chunked or absent.
    pub content_length: Option<u64>,
    pub encoding: Encoding,
}

impl Parts {
    pub(crate) fn with_capacity(headers: usize) -> Self {
        Self {
            headers: HeaderMap::with_capacity(headers),
            ..Default::default()
        }
    }

    /// Returns the first `Content-Type` value.
    #[inline]
    pub fn content_type(&self) -> Option<&str> {
        self.headers.get(CONTENT_TYPE)
    }

    pub(crate) fn clear(&mut self) {
        self.version = Version::default();
        self.status = StatusCode::default();
        self.reason.clear();
        self.headers.clear();
        self.content_length = None;
        self.encoding.clear();
    }
}

/// Body framing and content codings of a response.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Encoding {
    pub(crate) chunked: bool,
    pub(crate) content: Vec<String>,
}

impl Encoding {
    /// Returns `true` if the body is framed with chunked transfer coding.
    #[inline]
    pub fn is_chunked(&self) -> bool {
        self.chunked
    }

    /// Returns the `Content-Encoding` codings in the order they were applied, e.g: `["gzip"]`.
    ///
    /// The body is exposed as received, codings are not decoded.
    #[inline]
    pub fn content_codings(&self) -> &[String] {
        &self.content
    }

    pub(crate) fn clear(&mut self) {
        self.chunked = false;
        self.content.clear();
    }
}

/// HTTP Response.
///
/// Borrows the [`Session`] it was received on, the next request can be sent once the response is
/// dropped. Body bytes left unread at that point are discarded by the next send.
///
/// [`Session`]: crate::Session
pub struct Response<'a, IO> {
    parts: &'a Parts,
    body: Body<'a, IO>,
}

impl<'a, IO> Response<'a, IO> {
    pub(crate) fn new(parts: &'a Parts, body: Body<'a, IO>) -> Self {
        Self { parts, body }
    }

    #[inline]
    pub fn parts(&self) -> &Parts {
        self.parts
    }

    #[inline]
    pub fn version(&self) -> Version {
        self.parts.version
    }

    #[inline]
    pub fn status(&self) -> StatusCode {
        self.parts.status
    }

    /// Returns the reason phrase as sent by the server, e.g: `"Not Found"`.
    #[inline]
    pub fn reason(&self) -> &str {
        &self.parts.reason
    }

    #[inline]
    pub fn headers(&self) -> &HeaderMap {
        &self.parts.headers
    }

    #[inline]
    pub fn content_length(&self) -> Option<u64> {
        self.parts.content_length
    }

    #[inline]
    pub fn content_type(&self) -> Option<&str> {
        self.parts.content_type()
    }

    #[inline]
    pub fn encoding(&self) -> &Encoding {
        &self.parts.encoding
    }

    #[inline]
    pub fn body(&mut self) -> &mut Body<'a, IO> {
        &mut self.body
    }

    #[inline]
    pub fn into_body(self) -> Body<'a, IO> {
        self.body
    }
}

impl<IO> std::fmt::Debug for Response<'_, IO> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("Response")
            .field("version", &self.parts.version)
            .field("status", &self.parts.status)
            .field("headers", &self.parts.headers)
            .field("body", &self.body)
            .finish()
    }
}
