// src/client/parse.rs

/// Parsing phase of one HTTP response.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Status line and headers, up to the blank separator line.
    Headers,
    /// Newline-delimited body records.
    Body,
    /// Body length exhausted; further lines are ignored.
    Done,
}

/// Incremental parser for one HTTP response, fed one line at a time.
///
/// The status line is recognized anywhere in the header phase by its
/// `HTTP/` prefix; `X-` prefixed headers are routed to the header callback;
/// all other headers are silently ignored. Body lines are reported trimmed,
/// while length accounting uses the raw (pre-trim) line length plus one for
/// the consumed newline, which matches `Content-Length` exactly for both
/// LF- and CRLF-terminated bodies.
#[derive(Debug)]
pub struct ResponseParser {
    phase: Phase,
    status: i32,
    declared_length: Option<i32>,
    remaining: i32,
}

impl ResponseParser {
    pub const fn new() -> Self {
        ResponseParser {
            phase: Phase::Headers,
            status: -1,
            declared_length: None,
            remaining: 0,
        }
    }

    /// The parsed status code, or -1 if no status line has been seen.
    pub fn status(&self) -> i32 {
        self.status
    }

    pub fn is_done(&self) -> bool {
        self.phase == Phase::Done
    }

    /// Consumes one received line (newline already stripped, otherwise raw).
    ///
    /// Callbacks fire synchronously, in arrival order: `on_header` once per
    /// `X-` header, `on_line` once per body line.
    pub fn feed_line(
        &mut self,
        raw: &str,
        on_header: &mut dyn FnMut(&str, &str),
        on_line: &mut dyn FnMut(&str),
    ) {
        match self.phase {
            Phase::Headers => self.feed_header_line(raw.trim(), on_header),
            Phase::Body => {
                self.remaining -= raw.len() as i32 + 1;
                on_line(raw.trim());
                if self.declared_length.is_some() && self.remaining <= 0 {
                    self.phase = Phase::Done;
                }
            }
            Phase::Done => {}
        }
    }

    fn feed_header_line(&mut self, line: &str, on_header: &mut dyn FnMut(&str, &str)) {
        if line.is_empty() {
            // Blank separator. A declared zero-length body has nothing left
            // to read, so skip straight past the body phase.
            self.phase = if self.declared_length == Some(0) {
                Phase::Done
            } else {
                Phase::Body
            };
            return;
        }

        if line.starts_with("HTTP/") {
            // e.g. "HTTP/1.0 404 Not Found" - three digits after the first space
            if let Some(code_and_reason) = line.split(' ').nth(1) {
                let digits = code_and_reason.get(..3).unwrap_or(code_and_reason);
                if let Ok(code) = digits.parse::<i32>() {
                    self.status = code;
                }
            }
        } else if let Some(value) = line.strip_prefix("Content-Length: ") {
            let length = value.trim().parse::<i32>().unwrap_or(0);
            self.declared_length = Some(length);
            self.remaining = length;
        } else if line.starts_with("X-") {
            // The extensible metadata channel. Does not count against the
            // body length and does not change phase.
            if let Some((name, value)) = line.split_once(':') {
                on_header(name.trim(), value.trim());
            }
        }
        // Unknown headers are dropped without error.
    }
}

impl Default for ResponseParser {
    fn default() -> Self {
        Self::new()
    }
}
