//! Decoder implementation for HTTP response payloads.
//!
//! This module provides a unified decoder for the two body strategies the
//! client needs:
//! - Read until the peer closes the connection
//! - No body at all, for `HEAD`

use crate::codec::body::until_close_decoder::UntilCloseDecoder;
use crate::protocol::{ParseError, PayloadItem};
use bytes::BytesMut;
use tokio_util::codec::Decoder;

/// A unified decoder for handling HTTP response payloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayloadDecoder {
    /// The specific decoding strategy to use
    kind: Kind,
}

/// Enum representing different payload decoding strategies.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Kind {
    /// Decode payload until the connection is closed
    UntilClose(UntilCloseDecoder),

    /// Handle messages with no body
    NoBody,
}

impl PayloadDecoder {
    /// Creates a PayloadDecoder for messages with no body.
    pub fn empty() -> Self {
        Self { kind: Kind::NoBody }
    }

    /// Creates a PayloadDecoder reading until end of stream.
    pub fn until_close() -> Self {
        Self { kind: Kind::UntilClose(UntilCloseDecoder) }
    }

    /// Returns whether this decoder handles messages with no body.
    pub fn is_empty(&self) -> bool {
        matches!(self.kind, Kind::NoBody)
    }
}

/// Delegates to the appropriate decoder based on the payload type.
///
/// A no-body decoder reports EOF immediately, without looking at the buffer,
/// so the connection is never read again.
impl Decoder for PayloadDecoder {
    type Item = PayloadItem;
    type Error = ParseError;

    fn decode(&mut self, src: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        match &mut self.kind {
            Kind::UntilClose(decoder) => decoder.decode(src),
            Kind::NoBody => Ok(Some(PayloadItem::Eof)),
        }
    }

    fn decode_eof(&mut self, buf: &mut BytesMut) -> Result<Option<Self::Item>, Self::Error> {
        match &mut self.kind {
            Kind::UntilClose(decoder) => decoder.decode_eof(buf),
            Kind::NoBody => Ok(Some(PayloadItem::Eof)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_body_ignores_buffered_bytes() {
        let mut buffer = BytesMut::from(&b"unexpected body"[..]);

        let mut decoder = PayloadDecoder::empty();
        assert!(decoder.is_empty());

        let item = decoder.decode(&mut buffer).unwrap().unwrap();
        assert!(item.is_eof());
        assert_eq!(buffer.len(), 15);
    }

    #[test]
    fn until_close_delegates() {
        let mut buffer = BytesMut::from(&b"abc"[..]);

        let mut decoder = PayloadDecoder::until_close();
        assert!(!decoder.is_empty());

        let item = decoder.decode(&mut buffer).unwrap().unwrap();
        assert_eq!(item.as_bytes().map(|b| &b[..]), Some(&b"abc"[..]));
        assert!(decoder.decode_eof(&mut buffer).unwrap().unwrap().is_eof());
    }
}
