// src/common/error.rs

/// Errors produced by the client, generic over the socket error type.
#[derive(Debug, thiserror::Error)]
pub enum HttpError<E = ()>
where
    E: core::fmt::Debug,
{
    /// Underlying transport error from the socket implementation.
    #[error("I/O error: {0:?}")]
    Io(E),

    /// Deadline expired while polling the socket.
    #[error("Operation timed out")]
    Timeout,

    /// `query`/`post` was called without an established connection.
    #[error("Not connected")]
    NotConnected,

    /// Buffer provided was too small.
    #[error("Buffer overflow: needed {needed}, got {got}")]
    BufferOverflow { needed: usize, got: usize },

    /// Received a response line that is not valid UTF-8.
    #[error("Invalid UTF-8 in response line")]
    InvalidUtf8,

    /// Request head did not fit the formatting buffer.
    #[error("Request formatting failed")]
    RequestFormat,
}

impl<E: core::fmt::Debug> From<E> for HttpError<E> {
    fn from(e: E) -> Self {
        HttpError::Io(e)
    }
}
