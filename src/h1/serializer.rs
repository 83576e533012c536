//! HTTP/1.1 Request Serializer.
use bytes::{BufMut, BytesMut};
use std::io::{self, Seek, SeekFrom};

use crate::Error;
use crate::io::{Stream, StreamClient};
use crate::log::debug;
use crate::request::{Payload, Request};

/// Renders requests into a reusable buffer and writes them in a single write.
#[derive(Debug)]
pub struct Serializer {
    buffer: BytesMut,
}

impl Serializer {
    pub fn new(capacity: usize) -> Self {
        Self {
            buffer: BytesMut::with_capacity(capacity),
        }
    }

    /// Render `request` in wire format.
    ///
    /// A file payload is read from its start, as a whole.
    pub fn render(&mut self, request: &mut Request) -> io::Result<&[u8]> {
        let buf = &mut self.buffer;
        buf.clear();

        buf.extend_from_slice(request.get_method().as_bytes());
        buf.extend_from_slice(b" ");
        buf.extend_from_slice(request.get_path().as_bytes());
        buf.extend_from_slice(b" ");
        buf.extend_from_slice(request.get_version().as_str().as_bytes());
        buf.extend_from_slice(b"\r\n");

        for (name, value) in request.get_headers() {
            buf.extend_from_slice(name.as_bytes());
            buf.extend_from_slice(b": ");
            buf.extend_from_slice(value.as_bytes());
            buf.extend_from_slice(b"\r\n");
        }

        buf.extend_from_slice(b"\r\n");

        match request.payload_mut() {
            Payload::Bytes(bytes) => buf.extend_from_slice(bytes),
            // TODO: stream large files in fixed size pieces instead of buffering them whole
            Payload::File(file) => {
                file.seek(SeekFrom::Start(0))?;
                io::copy(file, &mut buf.writer())?;
            }
        }

        Ok(&self.buffer[..])
    }

    /// Render `request` and write it through `client`.
    pub fn send<IO: Stream>(
        &mut self,
        request: &mut Request,
        client: &mut StreamClient<IO>,
    ) -> Result<(), Error> {
        let rendered = self.render(request).map_err(Error::Build)?;
        debug!(
            "{} {} ({} bytes)",
            request.get_method(),
            request.get_path(),
            rendered.len()
        );
        client.write(rendered)?;
        Ok(())
    }
}
