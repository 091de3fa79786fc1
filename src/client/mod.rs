// src/client/mod.rs

pub mod line_reader;
pub mod parse;

#[cfg(feature = "alloc")]
pub mod response;

// Re-export the public pieces
pub use line_reader::{LineEvent, LineReader};
pub use parse::ResponseParser;
#[cfg(feature = "alloc")]
pub use response::Response;

use crate::common::{
    error::HttpError,
    hal_traits::{NetTimer, TcpSocket},
    timing,
};
use arrayvec::ArrayString;
use core::fmt::Write;
use core::time::Duration;
use heapless::String;

/// Capacity of the response line buffer in bytes.
pub const MAX_LINE_LEN: usize = 512;
/// Capacity of the formatted request head.
const MAX_REQUEST_LEN: usize = 256;
/// Capacity of the stored host name.
const MAX_HOST_LEN: usize = 64;

/// A minimal streaming HTTP/1.1 client over a polled socket.
///
/// One connection at a time; every exchange asks the server to close the
/// connection afterwards (`Connection: close`), so a fresh request cycle
/// starts with [`reconnect`](HttpClient::reconnect). The response is never
/// buffered whole: it is parsed line by line as bytes arrive, with status,
/// `X-` headers and body records reported through callbacks.
#[derive(Debug)]
pub struct HttpClient<IF>
where
    IF: TcpSocket + NetTimer,
{
    interface: IF,
    host: String<MAX_HOST_LEN>,
    port: u16,
    connected: bool,
    reader: LineReader<MAX_LINE_LEN>,
}

impl<IF> HttpClient<IF>
where
    IF: TcpSocket + NetTimer,
{
    pub fn new(interface: IF) -> Self {
        HttpClient {
            interface,
            host: String::new(),
            port: 0,
            connected: false,
            reader: LineReader::new(),
        }
    }

    /// Consumes the client, returning the underlying interface.
    pub fn free(self) -> IF {
        self.interface
    }

    pub fn is_connected(&self) -> bool {
        self.connected
    }

    /// Establishes a connection and records `host`/`port` for
    /// [`reconnect`](HttpClient::reconnect).
    ///
    /// Returns `false` on failure (refused, timeout, overlong host name);
    /// the client stays disconnected and the caller skips this cycle.
    pub fn connect(&mut self, host: &str, port: u16) -> bool {
        self.host.clear();
        if self.host.push_str(host).is_err() {
            return false;
        }
        self.port = port;
        self.open()
    }

    /// Re-establishes the connection using the previously recorded
    /// host and port.
    pub fn reconnect(&mut self) -> bool {
        self.open()
    }

    fn open(&mut self) -> bool {
        self.connected = false;
        self.reader.reset();
        let Self {
            interface,
            host,
            port,
            ..
        } = self;
        let result = blocking_io(interface, timing::CONNECT_TIMEOUT, |iface| {
            iface.connect(host.as_str(), *port)
        });
        self.connected = result.is_ok();
        self.connected
    }

    /// Issues a request and incrementally parses the response.
    ///
    /// Writes `"<method> <path> HTTP/1.1"` with `Host` and
    /// `Connection: close` headers, then drives the line reader until the
    /// declared body length is exhausted or the peer closes the stream.
    /// `on_header` receives each `X-` response header as a trimmed
    /// (name, value) pair; `on_line` receives each trimmed body line.
    /// Yields between poll attempts and fails with
    /// [`HttpError::Timeout`] once `timeout` elapses.
    ///
    /// Returns the parsed status code, -1 if no status line was seen.
    pub fn query<HF, CF>(
        &mut self,
        method: &str,
        path: &str,
        timeout: Duration,
        mut on_header: HF,
        mut on_line: CF,
    ) -> Result<i32, HttpError<IF::Error>>
    where
        HF: FnMut(&str, &str),
        CF: FnMut(&str),
    {
        if !self.connected {
            return Err(HttpError::NotConnected);
        }

        let mut head = ArrayString::<MAX_REQUEST_LEN>::new();
        write!(
            head,
            "{} {} HTTP/1.1\r\nHost: {}:{}\r\nConnection: close\r\n\r\n",
            method, path, self.host, self.port
        )
        .map_err(|_| HttpError::RequestFormat)?;
        self.send_bytes(head.as_bytes())?;

        let mut parser = ResponseParser::new();
        self.reader.reset();
        let deadline = self.interface.now() + timeout;

        loop {
            match self.reader.poll_line(&mut self.interface) {
                Ok(LineEvent::Line) => {
                    parser.feed_line(self.reader.line(), &mut on_header, &mut on_line);
                    if parser.is_done() {
                        break;
                    }
                }
                Ok(LineEvent::Closed) => {
                    self.connected = false;
                    break;
                }
                Err(nb::Error::WouldBlock) => {
                    if self.interface.now() >= deadline {
                        return Err(HttpError::Timeout);
                    }
                    self.interface.delay_us(timing::POLL_INTERVAL.as_micros() as u32);
                }
                Err(nb::Error::Other(e)) => return Err(e),
            }
        }

        Ok(parser.status())
    }

    /// Posts `body` as plain text and discards the acknowledgment.
    ///
    /// The request carries an exact `Content-Length`; the response is
    /// drained line by line without structured parsing until the peer
    /// closes the stream (fire-and-forget).
    pub fn post(
        &mut self,
        path: &str,
        body: &str,
        timeout: Duration,
    ) -> Result<(), HttpError<IF::Error>> {
        if !self.connected {
            return Err(HttpError::NotConnected);
        }

        let mut head = ArrayString::<MAX_REQUEST_LEN>::new();
        write!(
            head,
            "POST {} HTTP/1.1\r\nHost: {}:{}\r\nConnection: close\r\n\
             Content-Type: text/plain; charset=utf-8\r\nContent-Length: {}\r\n\r\n",
            path,
            self.host,
            self.port,
            body.len()
        )
        .map_err(|_| HttpError::RequestFormat)?;
        self.send_bytes(head.as_bytes())?;
        self.send_bytes(body.as_bytes())?;

        self.reader.reset();
        let deadline = self.interface.now() + timeout;

        loop {
            match self.reader.poll_line(&mut self.interface) {
                Ok(LineEvent::Line) => {} // discarded
                Ok(LineEvent::Closed) => {
                    self.connected = false;
                    return Ok(());
                }
                Err(nb::Error::WouldBlock) => {
                    if self.interface.now() >= deadline {
                        return Err(HttpError::Timeout);
                    }
                    self.interface.delay_us(timing::POLL_INTERVAL.as_micros() as u32);
                }
                Err(nb::Error::Other(e)) => return Err(e),
            }
        }
    }

    /// Closes the connection. Idempotent, safe in any state.
    pub fn stop(&mut self) {
        self.interface.close();
        self.connected = false;
    }

    fn send_bytes(&mut self, bytes: &[u8]) -> Result<(), HttpError<IF::Error>> {
        for byte in bytes {
            blocking_io(&mut self.interface, timing::WRITE_TIMEOUT, |iface| {
                iface.write_byte(*byte)
            })?;
        }
        blocking_io(&mut self.interface, timing::WRITE_TIMEOUT, |iface| iface.flush())
    }
}

/// Executes a non-blocking I/O operation repeatedly until it stops
/// returning `WouldBlock`, yielding between attempts, bounded by `timeout`.
fn blocking_io<IF, FN, T>(
    interface: &mut IF,
    timeout: Duration,
    mut f: FN,
) -> Result<T, HttpError<IF::Error>>
where
    IF: TcpSocket + NetTimer,
    FN: FnMut(&mut IF) -> nb::Result<T, IF::Error>,
{
    let deadline = interface.now() + timeout;

    loop {
        match f(interface) {
            Ok(result) => return Ok(result),
            Err(nb::Error::WouldBlock) => {
                if interface.now() >= deadline {
                    return Err(HttpError::Timeout);
                }
                interface.delay_us(timing::POLL_INTERVAL.as_micros() as u32);
            }
            Err(nb::Error::Other(e)) => return Err(HttpError::Io(e)),
        }
    }
}
