use crate::codec::header::HeaderEncoder;
use crate::protocol::{Request, SendError};
use bytes::{BufMut, BytesMut};
use http::{Method, Version};
use tokio_util::codec::Encoder;
use tracing::trace;

/// Encodes a whole request: the header block from [`HeaderEncoder`] followed
/// by the request body, if any.
///
/// No `Content-Length` is derived from the body; callers that send a body add
/// the header themselves.
#[derive(Debug, Clone)]
pub struct RequestEncoder {
    header_encoder: HeaderEncoder,
}

impl RequestEncoder {
    pub fn new(version: Version, user_agent: impl Into<String>) -> Self {
        Self { header_encoder: HeaderEncoder::new(version, user_agent) }
    }
}

impl<'a> Encoder<(&'a Method, &'a Request)> for RequestEncoder {
    type Error = SendError;

    fn encode(&mut self, item: (&'a Method, &'a Request), dst: &mut BytesMut) -> Result<(), Self::Error> {
        let (method, request) = item;
        self.header_encoder.encode((method, request), dst)?;

        let body = request.body();
        if !body.is_empty() {
            dst.put_slice(body);
        }

        trace!(method = %method, request_size = dst.len(), "encoded request");
        Ok(())
    }
}
