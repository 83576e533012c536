//! Blocking stream IO.
//!
//! - [`Stream`] bidirectional byte stream with settable read and write timeouts
//! - [`StreamClient`] buffered reads with pushback, and whole buffer writes
mod client;

#[cfg(test)]
pub(crate) mod mock;

#[cfg(test)]
mod test;

pub use client::StreamClient;

use std::io;
use std::net::TcpStream;
use std::time::Duration;

/// Bidirectional byte stream with independently settable read and write timeouts.
///
/// `None` disables the respective timeout, the operation may then block indefinitely.
pub trait Stream: io::Read + io::Write {
    fn set_read_timeout(&mut self, timeout: Option<Duration>) -> io::Result<()>;

    fn set_write_timeout(&mut self, timeout: Option<Duration>) -> io::Result<()>;
}

impl Stream for TcpStream {
    #[inline]
    fn set_read_timeout(&mut self, timeout: Option<Duration>) -> io::Result<()> {
        TcpStream::set_read_timeout(self, timeout)
    }

    #[inline]
    fn set_write_timeout(&mut self, timeout: Option<Duration>) -> io::Result<()> {
        TcpStream::set_write_timeout(self, timeout)
    }
}

#[cfg(unix)]
impl Stream for std::os::unix::net::UnixStream {
    #[inline]
    fn set_read_timeout(&mut self, timeout: Option<Duration>) -> io::Result<()> {
        std::os::unix::net::UnixStream::set_read_timeout(self, timeout)
    }

    #[inline]
    fn set_write_timeout(&mut self, timeout: Option<Duration>) -> io::Result<()> {
        std::os::unix::net::UnixStream::set_write_timeout(self, timeout)
    }
}

impl<S: Stream + ?Sized> Stream for &mut S {
    #[inline]
    fn set_read_timeout(&mut self, timeout: Option<Duration>) -> io::Result<()> {
        S::set_read_timeout(self, timeout)
    }

    #[inline]
    fn set_write_timeout(&mut self, timeout: Option<Duration>) -> io::Result<()> {
        S::set_write_timeout(self, timeout)
    }
}
