//! Client session over a single connection.
use std::io;
use std::net::{TcpStream, ToSocketAddrs};

use crate::body::{Body, BodyDecoder};
use crate::common::{Buffer, ParseResult};
use crate::h1::{Parser, Serializer};
use crate::http::{Method, StatusCode};
use crate::io::{Stream, StreamClient};
use crate::log::{debug, info, warning};
use crate::request::Request;
use crate::response::{Parts, Response};
use crate::{Config, Error};

/// HTTP/1.1 client session.
///
/// Sends one request at a time over a persistent connection. The [`Response`] returned by
/// [`send`][Session::send] borrows the session, so the next request can only be sent once the
/// previous response is dropped.
///
/// After an [`Error::Parse`] the connection state is unknown and the session should be discarded.
pub struct Session<IO = TcpStream> {
    client: StreamClient<IO>,
    parser: Parser,
    serializer: Serializer,
    parts: Parts,
    body: BodyDecoder,
    config: Config,
}

impl Session {
    /// Connect to `addr` with default [`Config`].
    #[inline]
    pub fn connect(addr: impl ToSocketAddrs) -> Result<Self, Error> {
        Self::connect_with(addr, Config::new())
    }

    /// Connect to `addr` with given [`Config`].
    pub fn connect_with(addr: impl ToSocketAddrs, config: Config) -> Result<Self, Error> {
        let io = TcpStream::connect(addr)?;
        if let Ok(peer) = io.peer_addr() {
            info!("connected to {peer}");
        }
        Self::with_config(io, config)
    }
}

impl<IO: Stream> Session<IO> {
    /// Create session over an established stream with default [`Config`].
    #[inline]
    pub fn new(io: IO) -> Result<Self, Error> {
        Self::with_config(io, Config::new())
    }

    /// Create session over an established stream with given [`Config`].
    ///
    /// Applies the configured timeouts to the stream.
    pub fn with_config(mut io: IO, config: Config) -> Result<Self, Error> {
        io.set_read_timeout(config.get_read_timeout())?;
        io.set_write_timeout(config.get_write_timeout())?;

        Ok(Self {
            client: StreamClient::new(io, config.get_read_size()),
            parser: Parser::new(
                Buffer::new(config.get_status_line_size(), config.get_max_status_line_size()),
                Buffer::new(config.get_headers_size(), config.get_max_headers_size()),
            ),
            serializer: Serializer::new(config.get_render_size()),
            parts: Parts::with_capacity(config.get_response_headers()),
            body: BodyDecoder::new(),
            config,
        })
    }

    /// Send `request` and read the response head.
    ///
    /// Unread body bytes of the previous response are discarded first. Interim `1xx` responses,
    /// other than `101 Switching Protocols`, are skipped.
    pub fn send(&mut self, request: &mut Request) -> Result<Response<'_, IO>, Error> {
        // the error stays on the request until it is cleared
        if let Some(err) = request.error() {
            return Err(Error::Build(io::Error::new(err.kind(), err.to_string())));
        }

        if !self.body.is_end() {
            let discarded = self.body.drain(&mut self.client)?;
            debug!("discarded {discarded} unread body bytes");
        }

        self.parser.reset();
        self.parts.clear();
        self.serializer.send(request, &mut self.client)?;

        let method = request.get_method();

        loop {
            let bytes = self.client.read()?;

            match self.parser.parse(bytes, &mut self.parts) {
                ParseResult::Ok(rest) => {
                    self.client.unread(rest);

                    let status = self.parts.status;
                    if status.is_informational() && status != StatusCode::SWITCHING_PROTOCOLS {
                        debug!("skipping interim response {status}");
                        self.parser.reset();
                        self.parts.clear();
                        continue;
                    }

                    self.body.init(&self.parts, method);
                    debug!(
                        "{} {} {:?}",
                        self.parts.version, self.parts.status, self.body.coding()
                    );

                    return Ok(Response::new(
                        &self.parts,
                        Body::new(&mut self.body, &mut self.client),
                    ));
                }
                ParseResult::Pending => {}
                ParseResult::Err(err) => {
                    warning!("invalid response head: {err}");
                    return Err(Error::Parse(err));
                }
            }
        }
    }
}

impl<IO> Session<IO> {
    /// Create a request pre-sized with the configured header slots.
    pub fn request(&self, method: Method, path: impl Into<String>) -> Request {
        let mut request = Request::with_capacity(self.config.get_request_headers());
        request.method(method).path(path);
        request
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    #[inline]
    pub fn get_ref(&self) -> &IO {
        self.client.get_ref()
    }

    #[inline]
    pub fn get_mut(&mut self) -> &mut IO {
        self.client.get_mut()
    }

    /// Returns the underlying stream, discarding any buffered bytes.
    #[inline]
    pub fn into_inner(self) -> IO {
        self.client.into_inner()
    }
}

impl<IO> std::fmt::Debug for Session<IO> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("client", &self.client)
            .field("parser", &self.parser.state())
            .field("body", self.body.coding())
            .finish_non_exhaustive()
    }
}
