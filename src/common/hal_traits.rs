// src/common/hal_traits.rs

use core::fmt;
use core::fmt::Debug;
use core::ops::{Add, Sub};
use core::time::Duration;

/// A point in time produced by a [`NetTimer`].
///
/// Anything that can be ordered, advanced by a `Duration` and subtracted
/// to yield an elapsed `Duration` qualifies; a blanket impl covers such
/// types automatically.
pub trait NetInstant:
    Copy + PartialOrd + Add<Duration, Output = Self> + Sub<Self, Output = Duration>
{
}

impl<T> NetInstant for T where
    T: Copy + PartialOrd + Add<Duration, Output = T> + Sub<T, Output = Duration>
{
}

/// Abstraction for timer/delay operations required by the polling client.
pub trait NetTimer {
    /// Monotonic timestamp type used for deadlines.
    type Instant: NetInstant;

    /// Returns the current monotonic time.
    fn now(&self) -> Self::Instant;

    /// Delay for at least the specified number of microseconds.
    ///
    /// The client calls this between poll attempts; implementations on a
    /// cooperatively scheduled target should service other duties here.
    fn delay_us(&mut self, us: u32);

    /// Delay for at least the specified number of milliseconds.
    fn delay_ms(&mut self, ms: u32);
}

/// Abstraction for a non-blocking TCP-like byte stream.
///
/// All I/O is polled: an operation that cannot make progress returns
/// `Err(nb::Error::WouldBlock)` and must be re-invoked later.
pub trait TcpSocket {
    /// Associated error type for transport errors.
    type Error: Debug;

    /// Starts or continues establishing a connection to `host:port`.
    ///
    /// Returns `Ok(())` once the connection is up, `Err(nb::Error::WouldBlock)`
    /// while still in progress, or `Err(nb::Error::Other(_))` on failure
    /// (refused, unresolvable host, ...).
    fn connect(&mut self, host: &str, port: u16) -> nb::Result<(), Self::Error>;

    /// Attempts to read a single byte from the stream.
    ///
    /// Implementations must keep returning buffered bytes after the peer has
    /// closed the connection; end-of-stream is the combination of
    /// `WouldBlock` and `is_connected() == false`.
    fn read_byte(&mut self) -> nb::Result<u8, Self::Error>;

    /// Attempts to write a single byte to the stream.
    fn write_byte(&mut self, byte: u8) -> nb::Result<(), Self::Error>;

    /// Attempts to flush the transmit buffer.
    fn flush(&mut self) -> nb::Result<(), Self::Error>;

    /// Whether the peer side of the connection is still open.
    fn is_connected(&self) -> bool;

    /// Closes the connection. Must be safe to call repeatedly.
    fn close(&mut self);
}

/// A fixed-layout status surface sensors can draw their values onto.
///
/// Line indices address rows of the surface; what a "line" maps to is up to
/// the implementation (an OLED row, a terminal line, ...).
pub trait StatusDisplay {
    /// Draws plain text at the given line.
    fn draw_text(&mut self, line: u8, text: &str);

    /// Draws a formatted value at the given line.
    fn draw_value(&mut self, line: u8, args: fmt::Arguments<'_>);

    /// Draws an attention marker (e.g. moisture over threshold).
    fn draw_star(&mut self) {}
}
