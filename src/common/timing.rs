// src/common/timing.rs

use core::time::Duration;

// Default deadlines for the polling client. These are deliberately coarse:
// the reporting cycle runs on the order of minutes, so generous bounds only
// have to catch a peer that stopped responding entirely.

/// Maximum time to wait for a connection to be established.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Maximum time to wait for a single byte to be accepted for transmission.
pub const WRITE_TIMEOUT: Duration = Duration::from_millis(500);

/// Suggested overall deadline for one query exchange (request + response).
pub const RESPONSE_TIMEOUT: Duration = Duration::from_secs(10);

/// Suggested deadline for draining the acknowledgment of a POST.
pub const DRAIN_TIMEOUT: Duration = Duration::from_secs(5);

/// Back-off between poll attempts while the socket reports `WouldBlock`.
/// Keeps the loop from busy-spinning while staying well under the byte
/// arrival rate of any realistic link.
pub const POLL_INTERVAL: Duration = Duration::from_micros(500);
