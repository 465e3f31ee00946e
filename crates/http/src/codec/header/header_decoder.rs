//! HTTP header decoder implementation for parsing HTTP response headers
//!
//! This module decodes the header block that follows the status line. The
//! block ends at the first line consisting of a bare `\r`; any bytes after it
//! are left in the buffer for the payload decoder.
//!
//! # Line Rules
//!
//! Each line has trailing whitespace (including the `\r`) removed, then:
//!
//! 1. A line starting with a space continues the previous header: its
//!    left-trimmed text is appended to that header's value with no separator.
//!    A continuation before any header is a [`ParseError::MalformedHeader`].
//! 2. A line with a colon starts a new header. The name is everything before
//!    the first colon; the value starts after the colon and exactly one more
//!    character (the conventional single space).
//! 3. Any other line is skipped.
//!
//! Duplicate names are kept as separate entries in arrival order.

use bytes::BytesMut;
use tokio_util::codec::Decoder;
use tracing::{error, trace, warn};

use crate::protocol::{Headers, ParseError};

/// Decoder for HTTP response headers implementing the [`Decoder`] trait.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeaderDecoder;

impl Decoder for HeaderDecoder {
    type Item = Headers;
    type Error = ParseError;

    /// Attempts to decode the header block from the provided bytes buffer.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(headers))` once the terminating blank line has been buffered
    /// - `Ok(None)` if more data is needed
    /// - `Err(ParseError::MalformedHeader)` for a continuation without a header
    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        let Some(block_size) = header_block_size(src) else {
            return Ok(None);
        };

        trace!(header_size = block_size, "parsed header block size");
        let block = src.split_to(block_size);
        parse_header_block(&block).map(Some)
    }

    fn decode_eof(&mut self, buf: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        match self.decode(buf)? {
            Some(headers) => Ok(Some(headers)),
            None => {
                error!(remaining = buf.len(), "connection closed inside header block");
                Err(ParseError::invalid_response("incomplete header block"))
            }
        }
    }
}

/// Returns the length of the header block including its terminating `\r\n`
/// line, or `None` if the terminator has not been buffered yet.
fn header_block_size(bytes: &[u8]) -> Option<usize> {
    let mut line_start = 0;
    while let Some(offset) = bytes[line_start..].iter().position(|b| *b == b'\n') {
        let line_end = line_start + offset;
        if &bytes[line_start..line_end] == b"\r" {
            return Some(line_end + 1);
        }
        line_start = line_end + 1;
    }
    None
}

fn parse_header_block(block: &[u8]) -> Result<Headers, ParseError> {
    let mut headers = Headers::new();

    for raw_line in block.split(|b| *b == b'\n') {
        if raw_line == b"\r" {
            break;
        }

        let text = String::from_utf8_lossy(raw_line);
        let line = text.trim_end();

        if line.starts_with(' ') {
            let Some(value) = headers.last_value_mut() else {
                error!(line, "continuation line without a preceding header");
                return Err(ParseError::malformed_header(line));
            };
            value.push_str(line.trim_start());
        } else if let Some(colon) = line.find(':') {
            let name = &line[..colon];
            let after_colon = &line[colon + 1..];
            // skip the single character following the colon
            let value = after_colon.char_indices().nth(1).map_or("", |(index, _)| &after_colon[index..]);
            headers.append(name, value);
        } else if !line.is_empty() {
            warn!(line, "skip header line without colon");
        }
    }

    Ok(headers)
}
