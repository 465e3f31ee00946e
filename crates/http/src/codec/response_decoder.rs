//! HTTP response decoder module
//!
//! This module decodes an HTTP response using a streaming approach. It handles
//! the status line, the header block and the payload through a small state
//! machine.
//!
//! # Components
//!
//! - [`ResponseDecoder`]: Main decoder that coordinates the three phases
//! - Status line parsing: Uses [`StatusDecoder`]
//! - Header parsing: Uses [`HeaderDecoder`]
//! - Payload handling: Uses [`PayloadDecoder`], reading until the peer closes
//!
//! # Example
//!
//! ```
//! use micro_http_client::codec::ResponseDecoder;
//! use micro_http_client::protocol::{Message, PayloadItem};
//! use tokio_util::codec::Decoder;
//! use bytes::BytesMut;
//!
//! let mut decoder = ResponseDecoder::new(true);
//! let mut buffer = BytesMut::from("HTTP/1.0 200 OK\r\nContent-Type: text/plain\r\n\r\nhello");
//!
//! let Some(Message::Header(head)) = decoder.decode(&mut buffer).unwrap() else { panic!() };
//! assert_eq!(head.status(), 200);
//!
//! let Some(Message::Payload(PayloadItem::Chunk(body))) = decoder.decode(&mut buffer).unwrap() else { panic!() };
//! assert_eq!(&body[..], b"hello");
//!
//! // the peer closed the connection
//! let Some(Message::Payload(item)) = decoder.decode_eof(&mut buffer).unwrap() else { panic!() };
//! assert!(item.is_eof());
//! ```

use crate::codec::body::PayloadDecoder;
use crate::codec::header::{HeaderDecoder, StatusDecoder};
use crate::protocol::{Message, ParseError, PayloadItem, ResponseHead, StatusLine};
use bytes::BytesMut;
use http::Method;
use tokio_util::codec::Decoder;
use tracing::debug;

/// A decoder for HTTP responses that handles status line, headers and payload
///
/// The decoder operates in three phases:
/// 1. Status parsing: decodes the first line using [`StatusDecoder`]
/// 2. Header parsing: decodes the header block using [`HeaderDecoder`]
/// 3. Payload parsing: yields body chunks until the peer closes, or EOF right
///    away when no body is expected
///
/// # State Machine
///
/// - `status_line == None && payload_decoder == None`: parsing the status line
/// - `status_line == Some(_)`: parsing headers
/// - `payload_decoder == Some(_)`: parsing payload
#[derive(Debug)]
pub struct ResponseDecoder {
    status_decoder: StatusDecoder,
    header_decoder: HeaderDecoder,
    status_line: Option<StatusLine>,
    payload_decoder: Option<PayloadDecoder>,
    expect_body: bool,
}

impl ResponseDecoder {
    /// Creates a new `ResponseDecoder`; with `expect_body == false` the body
    /// is never read.
    pub fn new(expect_body: bool) -> Self {
        Self {
            status_decoder: StatusDecoder,
            header_decoder: HeaderDecoder,
            status_line: None,
            payload_decoder: None,
            expect_body,
        }
    }

    /// Creates a decoder for the response to `method`: every method but `HEAD` expects a body.
    pub fn for_method(method: &Method) -> Self {
        Self::new(method != Method::HEAD)
    }

    fn decode_message(&mut self, src: &mut BytesMut, eof: bool) -> Result<Option<Message<ResponseHead>>, ParseError> {
        // parse payload if have payload_decoder
        if let Some(payload_decoder) = &mut self.payload_decoder {
            let item = if eof { payload_decoder.decode_eof(src)? } else { payload_decoder.decode(src)? };

            let message = match item {
                Some(item @ PayloadItem::Chunk(_)) => Some(Message::Payload(item)),
                Some(item @ PayloadItem::Eof) => {
                    // response finished
                    self.payload_decoder.take();
                    Some(Message::Payload(item))
                }
                None => None,
            };

            return Ok(message);
        }

        if self.status_line.is_none() {
            let status_line = if eof { self.status_decoder.decode_eof(src)? } else { self.status_decoder.decode(src)? };
            match status_line {
                Some(status_line) => {
                    debug!(version = %status_line.version, status = status_line.status, "parsed status line");
                    self.status_line = Some(status_line);
                }
                None => return Ok(None),
            }
        }

        let headers = if eof { self.header_decoder.decode_eof(src)? } else { self.header_decoder.decode(src)? };
        let Some(headers) = headers else {
            return Ok(None);
        };

        let Some(status_line) = self.status_line.take() else {
            return Err(ParseError::invalid_response("header block decoded before status line"));
        };

        debug!(header_count = headers.len(), expect_body = self.expect_body, "parsed response headers");
        self.payload_decoder =
            Some(if self.expect_body { PayloadDecoder::until_close() } else { PayloadDecoder::empty() });

        Ok(Some(Message::Header(ResponseHead::new(status_line, headers))))
    }
}

impl Decoder for ResponseDecoder {
    type Item = Message<ResponseHead>;
    type Error = ParseError;

    /// Attempts to decode the next part of an HTTP response from the provided buffer
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Message::Header(_)))`: Successfully decoded status line and headers
    /// - `Ok(Some(Message::Payload(_)))`: Successfully decoded a payload chunk or EOF
    /// - `Ok(None)`: Need more data to proceed
    /// - `Err(_)`: Encountered a parsing error
    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        self.decode_message(src, false)
    }

    /// Like [`decode`](Self::decode), but the peer has closed: an unfinished
    /// status line or header block is an error, and the payload ends.
    fn decode_eof(&mut self, buf: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        self.decode_message(buf, true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use indoc::indoc;

    fn crlf(str: &str) -> BytesMut {
        BytesMut::from(str.replace('\n', "\r\n").as_str())
    }

    fn expect_header(decoder: &mut ResponseDecoder, src: &mut BytesMut) -> ResponseHead {
        match decoder.decode(src).unwrap() {
            Some(Message::Header(head)) => head,
            other => panic!("expect header, got {other:?}"),
        }
    }

    #[test]
    fn full_response() {
        let mut bytes = crlf(indoc! {r##"
        HTTP/1.0 200 OK
        Content-Type: text/plain

        hello"##});

        let mut decoder = ResponseDecoder::for_method(&Method::GET);
        let head = expect_header(&mut decoder, &mut bytes);

        assert_eq!(head.version(), "HTTP/1.0");
        assert_eq!(head.status(), 200);
        assert_eq!(head.status_message(), "OK");
        assert_eq!(head.headers().get("Content-Type"), Some("text/plain"));

        let message = decoder.decode(&mut bytes).unwrap();
        assert_eq!(message, Some(Message::Payload(PayloadItem::Chunk(Bytes::from_static(b"hello")))));

        assert_eq!(decoder.decode(&mut bytes).unwrap(), None);
        assert_eq!(decoder.decode_eof(&mut bytes).unwrap(), Some(Message::Payload(PayloadItem::Eof)));
    }

    #[test]
    fn head_response_skips_body() {
        let mut bytes = BytesMut::from("HTTP/1.1 200 OK\r\nContent-Length: 5\r\n\r\nhello");

        let mut decoder = ResponseDecoder::for_method(&Method::HEAD);
        expect_header(&mut decoder, &mut bytes);

        assert_eq!(decoder.decode(&mut bytes).unwrap(), Some(Message::Payload(PayloadItem::Eof)));
        assert_eq!(&bytes[..], b"hello");
    }

    #[test]
    fn byte_by_byte() {
        let input = b"HTTP/1.0 302 Found\r\nLocation: /elsewhere\r\n moved\r\n\r\nbody";

        let mut decoder = ResponseDecoder::new(true);
        let mut bytes = BytesMut::new();
        let mut head = None;
        let mut body = Vec::new();

        for byte in input {
            bytes.extend_from_slice(&[*byte]);
            while let Some(message) = decoder.decode(&mut bytes).unwrap() {
                match message {
                    Message::Header(h) => head = Some(h),
                    Message::Payload(PayloadItem::Chunk(chunk)) => body.extend_from_slice(&chunk),
                    Message::Payload(PayloadItem::Eof) => unreachable!("eof before close"),
                }
            }
        }

        let head = head.unwrap();
        assert_eq!(head.status(), 302);
        assert_eq!(head.headers().get("Location"), Some("/elsewheremoved"));
        assert_eq!(body, b"body");
    }

    #[test]
    fn empty_stream_is_invalid() {
        let mut decoder = ResponseDecoder::new(true);
        let result = decoder.decode_eof(&mut BytesMut::new());

        assert!(matches!(result, Err(ParseError::InvalidResponse { .. })));
    }

    #[test]
    fn close_inside_headers_is_invalid() {
        let mut bytes = BytesMut::from("HTTP/1.0 200 OK\r\nContent-Type: text/pl");

        let mut decoder = ResponseDecoder::new(true);
        assert!(decoder.decode(&mut bytes).unwrap().is_none());

        let result = decoder.decode_eof(&mut bytes);
        assert!(matches!(result, Err(ParseError::InvalidResponse { .. })));
    }

    #[test]
    fn bad_version_prefix() {
        let mut bytes = BytesMut::from("NOTHTTP/1.0 200 OK\r\n\r\n");

        let result = ResponseDecoder::new(true).decode(&mut bytes);

        assert!(matches!(result, Err(ParseError::InvalidResponse { .. })));
    }
}
