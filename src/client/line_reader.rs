// src/client/line_reader.rs

use crate::common::{error::HttpError, hal_traits::TcpSocket};
use core::fmt::Debug;
use heapless::Vec;

/// Outcome of a successful [`LineReader::poll_line`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineEvent {
    /// A complete line is available via [`LineReader::line`].
    Line,
    /// The peer closed the connection and no further bytes are queued.
    Closed,
}

/// Incremental line assembly over a polled byte stream.
///
/// Bytes are accumulated across `WouldBlock` polls until a `\n` arrives;
/// the terminator is stripped but a preceding `\r` is kept, so callers see
/// the raw line content up to the newline. A final unterminated line is
/// still delivered when the peer closes mid-line.
#[derive(Debug)]
pub struct LineReader<const N: usize> {
    buf: Vec<u8, N>,
    ready: bool,
}

impl<const N: usize> LineReader<N> {
    pub const fn new() -> Self {
        LineReader {
            buf: Vec::new(),
            ready: false,
        }
    }

    /// Discards any partially assembled line.
    pub fn reset(&mut self) {
        self.buf.clear();
        self.ready = false;
    }

    /// Polls `socket` for the next line.
    ///
    /// Returns `Err(nb::Error::WouldBlock)` while the stream has nothing
    /// buffered but the peer is still connected; the caller is expected to
    /// yield and re-invoke. A previously returned line is discarded on the
    /// next call.
    pub fn poll_line<S: TcpSocket>(
        &mut self,
        socket: &mut S,
    ) -> nb::Result<LineEvent, HttpError<S::Error>> {
        if self.ready {
            self.buf.clear();
            self.ready = false;
        }

        loop {
            match socket.read_byte() {
                Ok(b'\n') => return self.complete(),
                Ok(byte) => {
                    if self.buf.push(byte).is_err() {
                        return Err(nb::Error::Other(HttpError::BufferOverflow {
                            needed: N + 1,
                            got: N,
                        }));
                    }
                }
                Err(nb::Error::WouldBlock) => {
                    if socket.is_connected() {
                        return Err(nb::Error::WouldBlock);
                    }
                    // End-of-stream: peer closed and the queue is drained.
                    if self.buf.is_empty() {
                        return Ok(LineEvent::Closed);
                    }
                    return self.complete();
                }
                Err(nb::Error::Other(e)) => return Err(nb::Error::Other(HttpError::Io(e))),
            }
        }
    }

    /// The most recently completed line, newline stripped.
    ///
    /// Only meaningful after `poll_line` returned `LineEvent::Line`; the
    /// content was UTF-8 validated at completion time.
    pub fn line(&self) -> &str {
        core::str::from_utf8(&self.buf).unwrap_or("")
    }

    fn complete<E: Debug>(&mut self) -> nb::Result<LineEvent, HttpError<E>> {
        if core::str::from_utf8(&self.buf).is_err() {
            return Err(nb::Error::Other(HttpError::InvalidUtf8));
        }
        self.ready = true;
        Ok(LineEvent::Line)
    }
}

impl<const N: usize> Default for LineReader<N> {
    fn default() -> Self {
        Self::new()
    }
}
