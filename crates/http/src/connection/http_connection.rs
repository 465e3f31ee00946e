use std::io;
use std::io::{Read, Write};

use bytes::{Bytes, BytesMut};
use http::Method;
use tokio_util::codec::{Decoder, Encoder};
use tracing::{debug, error, trace};

use crate::codec::{RequestEncoder, ResponseDecoder};
use crate::protocol::{Message, ParseError, PayloadItem, Request, ResponseHead, SendError};

/// Initial capacity of the read buffer
const READ_BUFFER_SIZE: usize = 8 * 1024;

/// Number of bytes requested from the stream per read
const READ_CHUNK_SIZE: usize = 8 * 1024;

/// A single-exchange HTTP connection over a blocking byte stream
///
/// `HttpConnection` owns the stream for exactly one request/response exchange:
/// - Encoding and writing the request
/// - Reading and decoding the status line and headers
/// - Draining the body until the peer closes, when a body is expected
///
/// Bytes read past the end of one phase stay in the read buffer and are
/// handed to the next one. Dropping the connection closes the stream.
///
/// # Type Parameters
///
/// * `S`: The blocking stream type
#[derive(Debug)]
pub struct HttpConnection<S> {
    stream: S,
    read_buf: BytesMut,
    eof: bool,
}

impl<S> HttpConnection<S>
where
    S: Read + Write,
{
    pub fn new(stream: S) -> Self {
        Self { stream, read_buf: BytesMut::with_capacity(READ_BUFFER_SIZE), eof: false }
    }

    /// Encodes `request` for `method` and writes all of it to the stream.
    ///
    /// # Errors
    ///
    /// Returns `SendError` if encoding or writing fails.
    pub fn send_request(&mut self, encoder: &mut RequestEncoder, method: &Method, request: &Request) -> Result<(), SendError> {
        let mut write_buf = BytesMut::new();
        encoder.encode((method, request), &mut write_buf)?;

        self.stream.write_all(&write_buf).map_err(SendError::io)?;
        self.stream.flush().map_err(SendError::io)?;

        debug!(%method, host = request.host(), request_size = write_buf.len(), "request sent");
        Ok(())
    }

    /// Reads the response head and, if `decoder` expects one, the whole body.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if the response is malformed or reading fails.
    pub fn read_response(&mut self, decoder: &mut ResponseDecoder) -> Result<(ResponseHead, Bytes), ParseError> {
        let head = match self.next_message(decoder)? {
            Some(Message::Header(head)) => head,
            Some(Message::Payload(_)) | None => {
                error!("expect response header but receive payload item");
                return Err(ParseError::invalid_response("missing response header"));
            }
        };

        let mut body = BytesMut::new();
        loop {
            match self.next_message(decoder)? {
                Some(Message::Payload(PayloadItem::Chunk(chunk))) => body.extend_from_slice(&chunk),
                Some(Message::Payload(PayloadItem::Eof)) => break,
                Some(Message::Header(_)) | None => {
                    error!("expect payload item but receive response header");
                    return Err(ParseError::invalid_response("unexpected response header"));
                }
            }
        }

        trace!(body_size = body.len(), "read response body");
        Ok((head, body.freeze()))
    }

    /// Decodes the next message, reading from the stream only when the
    /// buffered bytes are not enough.
    fn next_message<D>(&mut self, decoder: &mut D) -> Result<Option<D::Item>, D::Error>
    where
        D: Decoder,
    {
        loop {
            if self.eof {
                return decoder.decode_eof(&mut self.read_buf);
            }

            if let Some(item) = decoder.decode(&mut self.read_buf)? {
                return Ok(Some(item));
            }

            if self.fill_buf()? == 0 {
                trace!("peer closed the connection");
                self.eof = true;
            }
        }
    }

    /// Reads at least one byte into the read buffer, or returns 0 at end of stream.
    fn fill_buf(&mut self) -> io::Result<usize> {
        let mut chunk = [0u8; READ_CHUNK_SIZE];
        loop {
            match self.stream.read(&mut chunk) {
                Ok(n) => {
                    self.read_buf.extend_from_slice(&chunk[..n]);
                    trace!(read_size = n, "read from connection");
                    return Ok(n);
                }
                Err(e) if e.kind() == io::ErrorKind::Interrupted => {}
                Err(e) => {
                    error!(cause = %e, "read from connection failed");
                    return Err(e);
                }
            }
        }
    }
}
