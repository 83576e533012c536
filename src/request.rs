//! HTTP Request.
use bytes::Bytes;
use std::fs::File;
use std::io;
use std::path::Path;

use crate::headers::HeaderMap;
use crate::headers::standard::CONTENT_LENGTH;
use crate::http::{Method, Version};
use crate::io::Stream;
use crate::response::Response;
use crate::{Error, Session};

/// Request message body source.
#[derive(Debug)]
pub enum Payload {
    /// In memory bytes, possibly empty.
    Bytes(Bytes),
    /// Whole file contents, read when the request is sent.
    File(File),
}

impl Default for Payload {
    #[inline]
    fn default() -> Self {
        Self::Bytes(Bytes::new())
    }
}

/// HTTP Request.
///
/// Built fluently and reused across exchanges:
///
/// ```no_run
/// use duta::{Request, Session};
///
/// let mut session = Session::connect("127.0.0.1:8080")?;
/// let mut request = Request::post("/upload");
/// request
///     .header("Content-Type", "text/plain")
///     .content_length(5)
///     .string("hello");
///
/// let mut response = request.send(&mut session)?;
/// let body = response.body().read_string()?;
/// # Ok::<(), duta::Error>(())
/// ```
///
/// Failures while building, such as a file that cannot be opened, are kept on the request and
/// returned every time it is sent, until [`clear`][Request::clear] is called.
#[derive(Debug, Default)]
pub struct Request {
    method: Method,
    path: String,
    version: Version,
    headers: HeaderMap,
    payload: Payload,
    error: Option<io::Error>,
}

macro_rules! methods {
    ($($(#[$doc:meta])* $fn:ident => $method:ident;)*) => {
        impl Request {
            $(
                $(#[$doc])*
                #[inline]
                pub fn $fn(path: impl Into<String>) -> Request {
                    let mut request = Request::new();
                    request.method(Method::$method).path(path);
                    request
                }
            )*
        }
    };
}

methods! {
    /// Create `GET` request.
    get => GET;
    /// Create `HEAD` request.
    head => HEAD;
    /// Create `POST` request.
    post => POST;
    /// Create `PUT` request.
    put => PUT;
    /// Create `DELETE` request.
    delete => DELETE;
    /// Create `CONNECT` request.
    connect => CONNECT;
    /// Create `OPTIONS` request.
    options => OPTIONS;
    /// Create `TRACE` request.
    trace => TRACE;
    /// Create `PATCH` request.
    patch => PATCH;
}

impl Request {
    /// Create new `GET` request with empty path.
    #[inline]
    pub fn new() -> Request {
        Self::default()
    }

    /// Create new request with space for `capacity` headers.
    pub fn with_capacity(capacity: usize) -> Request {
        Request {
            headers: HeaderMap::with_capacity(capacity),
            ..Default::default()
        }
    }

    // ===== Builder =====

    pub fn method(&mut self, method: Method) -> &mut Self {
        self.method = method;
        self
    }

    pub fn path(&mut self, path: impl Into<String>) -> &mut Self {
        self.path = path.into();
        self
    }

    pub fn version(&mut self, version: Version) -> &mut Self {
        self.version = version;
        self
    }

    /// Append a header field, sent verbatim and in insertion order.
    pub fn header(&mut self, name: impl Into<String>, value: impl Into<String>) -> &mut Self {
        self.headers.add(name, value);
        self
    }

    /// Append a header field for each value.
    pub fn headers<I>(&mut self, name: &str, values: I) -> &mut Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        for value in values {
            self.headers.add(name, value);
        }
        self
    }

    /// Append `Content-Length` header.
    pub fn content_length(&mut self, len: u64) -> &mut Self {
        self.headers.add(CONTENT_LENGTH, itoa::Buffer::new().format(len));
        self
    }

    /// Use in memory bytes as message body, replacing previous body.
    pub fn bytes(&mut self, body: impl Into<Bytes>) -> &mut Self {
        self.payload = Payload::Bytes(body.into());
        self
    }

    /// Use string as message body, replacing previous body.
    pub fn string(&mut self, body: impl Into<String>) -> &mut Self {
        self.bytes(body.into())
    }

    /// Use file contents as message body, replacing previous body.
    ///
    /// The file is opened read only. Failure to open it is returned when the request is sent.
    pub fn file(&mut self, path: impl AsRef<Path>) -> &mut Self {
        match File::open(path) {
            Ok(file) => self.payload = Payload::File(file),
            Err(err) => {
                self.payload = Payload::default();
                self.error = Some(err);
            }
        }
        self
    }

    /// Restore the default state for reuse, header capacity is retained.
    pub fn clear(&mut self) -> &mut Self {
        self.method = Method::default();
        self.path.clear();
        self.version = Version::default();
        self.headers.clear();
        self.payload = Payload::default();
        self.error = None;
        self
    }

    // ===== Accessor =====

    #[inline]
    pub fn get_method(&self) -> Method {
        self.method
    }

    #[inline]
    pub fn get_path(&self) -> &str {
        &self.path
    }

    #[inline]
    pub fn get_version(&self) -> Version {
        self.version
    }

    #[inline]
    pub fn get_headers(&self) -> &HeaderMap {
        &self.headers
    }

    #[inline]
    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    #[inline]
    pub(crate) fn payload_mut(&mut self) -> &mut Payload {
        &mut self.payload
    }

    /// Returns the error occurred while building the request, if any.
    #[inline]
    pub fn error(&self) -> Option<&io::Error> {
        self.error.as_ref()
    }

    /// Send the request on given session.
    ///
    /// This is the same as [`Session::send`].
    #[inline]
    pub fn send<'s, IO: Stream>(
        &mut self,
        session: &'s mut Session<IO>,
    ) -> Result<Response<'s, IO>, Error> {
        session.send(self)
    }
}

#[cfg(test)]
mod test {
    use super::{Payload, Request};
    use crate::http::{Method, Version};

    #[test]
    fn request_builder() {
        let mut request = Request::put("/items/1");
        request
            .version(Version::HTTP_10)
            .header("Accept", "*/*")
            .headers("X-Tag", ["a", "b"])
            .string("payload");

        assert_eq!(request.get_method(), Method::PUT);
        assert_eq!(request.get_path(), "/items/1");
        assert_eq!(request.get_version(), Version::HTTP_10);
        assert_eq!(request.get_headers().get_all("x-tag").collect::<Vec<_>>(), ["a", "b"]);
        assert!(matches!(request.payload(), Payload::Bytes(b) if b == "payload"));
        assert!(request.error().is_none());
    }

    #[test]
    fn request_file_error_is_deferred() {
        let mut request = Request::post("/upload");
        request.file("/nonexistent/duta/payload.bin");

        assert!(request.error().is_some());
        assert!(matches!(request.payload(), Payload::Bytes(b) if b.is_empty()));

        request.clear();
        assert!(request.error().is_none());
        assert_eq!(request.get_method(), Method::GET);
        assert!(request.get_path().is_empty());
        assert!(request.get_headers().is_empty());
    }

    #[test]
    fn request_body_replaces_previous() {
        let mut request = Request::new();
        request.file(file!());
        assert!(matches!(request.payload(), Payload::File(_)));

        request.bytes(&b"inline"[..]);
        assert!(matches!(request.payload(), Payload::Bytes(b) if b == &b"inline"[..]));
    }
}
