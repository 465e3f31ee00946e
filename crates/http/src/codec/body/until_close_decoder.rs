//! Decoder for HTTP response bodies delimited by connection close.
//!
//! Neither `Content-Length` nor `Transfer-Encoding` is consulted: every byte
//! the peer sends after the header block belongs to the body, and the body
//! ends when the peer closes the connection. This is only sound because every
//! request is sent with `Connection: close`; a server that keeps the
//! connection open anyway will block the read indefinitely.

use crate::protocol::{ParseError, PayloadItem};
use bytes::BytesMut;
use tokio_util::codec::Decoder;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UntilCloseDecoder;

impl Decoder for UntilCloseDecoder {
    type Item = PayloadItem;
    type Error = ParseError;

    /// Drains whatever is buffered as one chunk.
    ///
    /// # Returns
    /// * `Ok(Some(PayloadItem::Chunk(bytes)))` when the buffer holds data
    /// * `Ok(None)` when the buffer is empty and more data may follow
    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        if src.is_empty() {
            return Ok(None);
        }

        Ok(Some(PayloadItem::Chunk(src.split().freeze())))
    }

    /// Called once the peer has closed: flushes the remaining bytes, then reports EOF.
    fn decode_eof(&mut self, buf: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        match self.decode(buf)? {
            Some(item) => Ok(Some(item)),
            None => Ok(Some(PayloadItem::Eof)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic() {
        let mut buffer: BytesMut = BytesMut::from(&b"hello\r\n\r\nworld"[..]);

        let mut decoder = UntilCloseDecoder;
        let payload = decoder.decode(&mut buffer).unwrap().unwrap();

        assert!(payload.is_chunk());
        assert_eq!(&payload.as_bytes().unwrap()[..], b"hello\r\n\r\nworld");
        assert!(buffer.is_empty());

        assert!(decoder.decode(&mut buffer).unwrap().is_none());
    }

    #[test]
    fn eof_flushes_then_finishes() {
        let mut buffer: BytesMut = BytesMut::from(&b"tail"[..]);

        let mut decoder = UntilCloseDecoder;

        let payload = decoder.decode_eof(&mut buffer).unwrap().unwrap();
        assert_eq!(&payload.as_bytes().unwrap()[..], b"tail");

        let payload = decoder.decode_eof(&mut buffer).unwrap().unwrap();
        assert!(payload.is_eof());
    }
}
