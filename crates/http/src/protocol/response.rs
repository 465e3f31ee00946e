//! HTTP response types.
//!
//! The decoder produces a [`StatusLine`] and then a [`ResponseHead`] once the
//! header block is complete. The client attaches the body and the source host
//! to build the final [`Response`].

use std::borrow::Cow;

use bytes::Bytes;
use http::StatusCode;

use crate::protocol::Headers;

/// The first line of a response, e.g. `HTTP/1.0 200 OK`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub version: String,
    pub status: u16,
    pub message: String,
}

/// Status line plus header block, before any body has been read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseHead {
    status_line: StatusLine,
    headers: Headers,
}

impl ResponseHead {
    pub fn new(status_line: StatusLine, headers: Headers) -> Self {
        Self { status_line, headers }
    }

    pub fn version(&self) -> &str {
        &self.status_line.version
    }

    pub fn status(&self) -> u16 {
        self.status_line.status
    }

    pub fn status_message(&self) -> &str {
        &self.status_line.message
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    version: String,
    status: u16,
    status_message: String,
    headers: Headers,
    body: Bytes,
    source: String,
}

impl Response {
    pub fn from_parts(head: ResponseHead, body: Bytes, source: impl Into<String>) -> Self {
        let ResponseHead { status_line, headers } = head;
        Self {
            version: status_line.version,
            status: status_line.status,
            status_message: status_line.message,
            headers,
            body,
            source: source.into(),
        }
    }

    /// The version token exactly as sent, e.g. `HTTP/1.0`.
    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn status(&self) -> u16 {
        self.status
    }

    /// The typed status code, if the server sent a value in `100..=999`.
    pub fn status_code(&self) -> Option<StatusCode> {
        StatusCode::from_u16(self.status).ok()
    }

    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    /// The body bytes; always empty for `HEAD`.
    pub fn body(&self) -> &Bytes {
        &self.body
    }

    /// The body decoded as UTF-8, with invalid sequences replaced.
    pub fn text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// The host the request was sent to.
    pub fn source(&self) -> &str {
        &self.source
    }
}
