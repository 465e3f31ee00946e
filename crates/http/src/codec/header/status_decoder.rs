//! Decoder for the HTTP response status line.
//!
//! Consumes bytes up to and including the first `\r\n` and splits the line
//! into the version token, the numeric status code and the free-form status
//! message. Everything after the line stays in the buffer for the header
//! decoder.

use bytes::BytesMut;
use tokio_util::codec::Decoder;
use tracing::{error, trace};

use crate::ensure;
use crate::protocol::{ParseError, StatusLine};

const CRLF: &[u8] = b"\r\n";

const VERSION_PREFIX: &str = "HTTP/";

#[derive(Debug, Clone, Copy, Default)]
pub struct StatusDecoder;

impl Decoder for StatusDecoder {
    type Item = StatusLine;
    type Error = ParseError;

    /// Attempts to decode the status line from the provided bytes buffer.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(status_line))` once a full line is buffered and well formed
    /// - `Ok(None)` if no `\r\n` has arrived yet
    /// - `Err(ParseError::InvalidResponse)` if the line is malformed
    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        let Some(line_end) = src.windows(CRLF.len()).position(|window| window == CRLF) else {
            return Ok(None);
        };

        let line = src.split_to(line_end + CRLF.len());
        trace!(line_size = line.len(), "read status line");
        parse_status_line(&line[..line_end]).map(Some)
    }

    fn decode_eof(&mut self, buf: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        match self.decode(buf)? {
            Some(status_line) => Ok(Some(status_line)),
            None => {
                error!(remaining = buf.len(), "connection closed before status line");
                Err(ParseError::invalid_response("connection closed before status line"))
            }
        }
    }
}

/// Splits `<version> <code> <message>` into a [`StatusLine`].
///
/// Leading whitespace is skipped before each token. The code is the run of
/// digits after the version; whatever follows it, trimmed on both sides, is
/// the message.
fn parse_status_line(line: &[u8]) -> Result<StatusLine, ParseError> {
    let text = String::from_utf8_lossy(line);

    let rest = text.trim_start();
    let (version, rest) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));

    let rest = rest.trim_start();
    let digits_end = rest.find(|c: char| !c.is_ascii_digit()).unwrap_or(rest.len());
    let status = rest[..digits_end]
        .parse::<u16>()
        .map_err(|e| ParseError::invalid_response(format!("bad status code in `{text}`: {e}")))?;

    ensure!(
        version.starts_with(VERSION_PREFIX),
        ParseError::invalid_response(format!("version `{version}` does not start with {VERSION_PREFIX}"))
    );

    Ok(StatusLine { version: version.to_string(), status, message: rest[digits_end..].trim().to_string() })
}
