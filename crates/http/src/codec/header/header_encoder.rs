//! HTTP header encoder implementation for serializing HTTP request headers
//!
//! This module writes the request line and header block of a request:
//!
//! ```text
//! <VERB> /<path>[?<query>][#<anchor>] HTTP/<major>.<minor>\r\n
//! Host: <host>\r\n
//! Accept: */*\r\n
//! <caller headers, in insertion order>\r\n
//! [User-Agent: <default agent>\r\n]
//! Connection: close\r\n
//! \r\n
//! ```
//!
//! The default `User-Agent` is only written when the caller supplied no header
//! named `user-agent` in any letter case. `Connection: close` is always sent,
//! which is what lets the payload decoder read the body until the peer closes.
//!
//! An IPv6 literal host is written in brackets in the `Host` header.

use crate::protocol::{Request, SendError};

use bytes::{BufMut, BytesMut};

use http::{Method, Version};
use std::io;
use std::io::{ErrorKind, Write};
use tokio_util::codec::Encoder;
use tracing::error;

/// Initial buffer size allocated for header serialization
const INIT_HEADER_SIZE: usize = 4 * 1024;

/// Encoder for HTTP request headers implementing the [`Encoder`] trait.
#[derive(Debug, Clone)]
pub struct HeaderEncoder {
    version: Version,
    user_agent: String,
}

impl HeaderEncoder {
    pub fn new(version: Version, user_agent: impl Into<String>) -> Self {
        Self { version, user_agent: user_agent.into() }
    }
}

impl<'a> Encoder<(&'a Method, &'a Request)> for HeaderEncoder {
    type Error = SendError;

    /// Encodes the request line and headers into the provided bytes buffer.
    ///
    /// # Errors
    ///
    /// Returns an `Unsupported` io error if the configured version is neither
    /// HTTP/1.0 nor HTTP/1.1.
    fn encode(&mut self, item: (&'a Method, &'a Request), dst: &mut BytesMut) -> Result<(), Self::Error> {
        let (method, request) = item;

        let version = match self.version {
            Version::HTTP_10 => "1.0",
            Version::HTTP_11 => "1.1",
            v => {
                error!(http_version = ?v, "unsupported http version");
                return Err(io::Error::from(ErrorKind::Unsupported).into());
            }
        };

        dst.reserve(INIT_HEADER_SIZE);

        write!(FastWrite(dst), "{} /{}", method.as_str(), request.path())?;
        if !request.query().is_empty() {
            write!(FastWrite(dst), "?{}", request.query())?;
        }
        if !request.anchor().is_empty() {
            write!(FastWrite(dst), "#{}", request.anchor())?;
        }
        write!(FastWrite(dst), " HTTP/{version}\r\n")?;

        // ipv6 literals are stored bare and need their brackets back on the wire
        if request.host().contains(':') {
            write!(FastWrite(dst), "Host: [{}]\r\n", request.host())?;
        } else {
            write!(FastWrite(dst), "Host: {}\r\n", request.host())?;
        }
        dst.put_slice(b"Accept: */*\r\n");

        for (header_name, header_value) in request.headers().iter() {
            dst.put_slice(header_name.as_bytes());
            dst.put_slice(b": ");
            dst.put_slice(header_value.as_bytes());
            dst.put_slice(b"\r\n");
        }

        if !request.headers().contains_ignore_case("user-agent") {
            dst.put_slice(b"User-Agent: ");
            dst.put_slice(self.user_agent.as_bytes());
            dst.put_slice(b"\r\n");
        }

        dst.put_slice(b"Connection: close\r\n\r\n");
        Ok(())
    }
}

/// Fast writer implementation for writing to BytesMut.
///
/// This is an optimization to avoid unnecessary bounds checking when writing
/// to the bytes buffer, since we've already reserved enough space.
struct FastWrite<'a>(&'a mut BytesMut);

impl Write for FastWrite<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.put_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
