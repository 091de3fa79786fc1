// src/client/response.rs

//! Owned response capture for hosts with an allocator.
//!
//! The streaming callbacks in [`HttpClient::query`] keep the client usable
//! without `alloc`, but test rigs and std hosts usually just want the whole
//! exchange in one value. [`query_response`](HttpClient::query_response)
//! collects it.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::cell::RefCell;
use core::time::Duration;

use crate::client::HttpClient;
use crate::common::error::HttpError;
use crate::common::hal_traits::{NetTimer, TcpSocket};

/// A fully collected HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Response {
    /// Parsed status code, -1 if the reply had no status line.
    pub status: i32,
    /// `X-` headers in arrival order, names and values trimmed.
    pub headers: Vec<(String, String)>,
    /// Trimmed body lines in arrival order.
    pub lines: Vec<String>,
}

impl Response {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Looks up an `X-` header by exact name.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

impl<IF> HttpClient<IF>
where
    IF: TcpSocket + NetTimer,
{
    /// Like [`query`](HttpClient::query), but collects headers and body
    /// lines into an owned [`Response`].
    pub fn query_response(
        &mut self,
        method: &str,
        path: &str,
        timeout: Duration,
    ) -> Result<Response, HttpError<IF::Error>> {
        let headers = RefCell::new(Vec::new());
        let lines = RefCell::new(Vec::new());

        let status = self.query(
            method,
            path,
            timeout,
            |name, value| {
                headers
                    .borrow_mut()
                    .push((name.to_string(), value.to_string()));
            },
            |line| lines.borrow_mut().push(line.to_string()),
        )?;

        Ok(Response {
            status,
            headers: headers.into_inner(),
            lines: lines.into_inner(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_lookup() {
        let response = Response {
            status: 200,
            headers: alloc::vec![
                ("X-Device".to_string(), "witty1".to_string()),
                ("X-Seq".to_string(), "42".to_string()),
            ],
            lines: alloc::vec!["feed".to_string()],
        };

        assert!(response.is_success());
        assert_eq!(response.header("X-Seq"), Some("42"));
        assert_eq!(response.header("X-Missing"), None);
    }

    #[test]
    fn test_no_status_line_is_not_success() {
        let response = Response {
            status: -1,
            ..Response::default()
        };
        assert!(!response.is_success());
    }
}
