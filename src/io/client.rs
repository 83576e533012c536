use bytes::BytesMut;
use std::{io, mem};

use super::Stream;
use crate::log::trace;

/// Buffered stream client.
///
/// Reads return only newly arrived bytes, unless bytes were pushed back with
/// [`unread`][StreamClient::unread], in which case those are returned first without touching the
/// stream.
pub struct StreamClient<IO> {
    io: IO,
    read_buffer: BytesMut,
    read_size: usize,
    pushback: BytesMut,
}

impl<IO> StreamClient<IO> {
    /// Create new [`StreamClient`], reading at most `read_size` bytes per stream read.
    pub fn new(io: IO, read_size: usize) -> Self {
        let read_size = read_size.max(1);
        Self {
            io,
            read_buffer: BytesMut::with_capacity(read_size),
            read_size,
            pushback: BytesMut::new(),
        }
    }

    /// Prepend `bytes` to the pushback queue.
    ///
    /// The next [`read`][StreamClient::read] returns `bytes` followed by any bytes that were
    /// already queued.
    pub fn unread(&mut self, mut bytes: BytesMut) {
        if bytes.is_empty() {
            return;
        }
        trace!("pushback {} bytes", bytes.len());
        if !self.pushback.is_empty() {
            bytes.unsplit(mem::take(&mut self.pushback));
        }
        self.pushback = bytes;
    }

    /// Returns the number of bytes waiting in the pushback queue.
    #[inline]
    pub fn buffered(&self) -> usize {
        self.pushback.len()
    }

    #[inline]
    pub fn get_ref(&self) -> &IO {
        &self.io
    }

    #[inline]
    pub fn get_mut(&mut self) -> &mut IO {
        &mut self.io
    }

    /// Returns the underlying stream, discarding pushed back bytes.
    #[inline]
    pub fn into_inner(self) -> IO {
        self.io
    }
}

impl<IO: Stream> StreamClient<IO> {
    /// Read the next available bytes.
    ///
    /// Pushed back bytes are returned first. Otherwise blocks until at least one byte arrives or
    /// the read timeout expires. Stream end is reported as [`io::ErrorKind::UnexpectedEof`].
    pub fn read(&mut self) -> io::Result<BytesMut> {
        if !self.pushback.is_empty() {
            return Ok(self.pushback.split());
        }

        // reclaims the allocation when previously returned bytes are already dropped
        self.read_buffer.clear();
        self.read_buffer.resize(self.read_size, 0);

        let read = loop {
            match self.io.read(&mut self.read_buffer) {
                Ok(read) => break read,
                Err(err) if err.kind() == io::ErrorKind::Interrupted => continue,
                Err(err) => {
                    self.read_buffer.clear();
                    return Err(err);
                }
            }
        };

        self.read_buffer.truncate(read);
        if read == 0 {
            return Err(io::ErrorKind::UnexpectedEof.into());
        }

        trace!("read {read} bytes");
        Ok(self.read_buffer.split())
    }

    /// Write the whole `buf`, blocks until written or the write timeout expires.
    pub fn write(&mut self, buf: &[u8]) -> io::Result<()> {
        self.io.write_all(buf)?;
        self.io.flush()
    }
}

impl<IO> std::fmt::Debug for StreamClient<IO> {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("StreamClient")
            .field("read_size", &self.read_size)
            .field("pushback", &self.pushback.len())
            .finish_non_exhaustive()
    }
}
