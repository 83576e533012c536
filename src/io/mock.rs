//! Scripted in-memory [`Stream`].
use std::collections::VecDeque;
use std::io;
use std::time::Duration;

use super::Stream;

/// Replays scripted reads and records everything written.
///
/// Each scripted read is delivered by at most one `read` call, a read larger than the caller
/// buffer is delivered across several calls. When the script runs out, reads return `Ok(0)`.
#[derive(Debug, Default)]
pub(crate) struct Mock {
    reads: VecDeque<io::Result<Vec<u8>>>,
    pub(crate) written: Vec<u8>,
    pub(crate) read_calls: usize,
    pub(crate) read_timeout: Option<Duration>,
    pub(crate) write_timeout: Option<Duration>,
}

impl Mock {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Script one read.
    pub(crate) fn feed(mut self, bytes: impl AsRef<[u8]>) -> Self {
        self.reads.push_back(Ok(bytes.as_ref().to_vec()));
        self
    }

    /// Script `bytes` to arrive in pieces, split at each of `offsets`.
    pub(crate) fn feed_split(mut self, bytes: impl AsRef<[u8]>, offsets: &[usize]) -> Self {
        let bytes = bytes.as_ref();
        let mut start = 0;
        for &offset in offsets {
            if offset > start && offset < bytes.len() {
                self.reads.push_back(Ok(bytes[start..offset].to_vec()));
                start = offset;
            }
        }
        self.reads.push_back(Ok(bytes[start..].to_vec()));
        self
    }

    /// Script a failed read.
    pub(crate) fn feed_error(mut self, kind: io::ErrorKind) -> Self {
        self.reads.push_back(Err(kind.into()));
        self
    }

    /// Returns `true` if all scripted reads are consumed.
    pub(crate) fn is_drained(&self) -> bool {
        self.reads.is_empty()
    }
}

impl io::Read for Mock {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.read_calls += 1;
        let mut bytes = match self.reads.pop_front() {
            Some(Ok(bytes)) => bytes,
            Some(Err(err)) => return Err(err),
            None => return Ok(0),
        };
        let len = bytes.len().min(buf.len());
        buf[..len].copy_from_slice(&bytes[..len]);
        if len < bytes.len() {
            self.reads.push_front(Ok(bytes.split_off(len)));
        }
        Ok(len)
    }
}

impl io::Write for Mock {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.written.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Stream for Mock {
    fn set_read_timeout(&mut self, timeout: Option<Duration>) -> io::Result<()> {
        self.read_timeout = timeout;
        Ok(())
    }

    fn set_write_timeout(&mut self, timeout: Option<Duration>) -> io::Result<()> {
        self.write_timeout = timeout;
        Ok(())
    }
}
