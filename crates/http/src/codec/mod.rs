//! HTTP codec module for encoding requests and decoding responses
//!
//! All codecs implement the `tokio_util` [`Encoder`](tokio_util::codec::Encoder)
//! and [`Decoder`](tokio_util::codec::Decoder) traits over a `BytesMut`
//! buffer. They never touch the connection themselves, which keeps them
//! independent of how bytes are read and written.
//!
//! # Architecture
//!
//! - Request handling:
//!   - [`RequestEncoder`]: Encodes the outgoing request
//!   - Request line and headers via [`header::HeaderEncoder`]
//!
//! - Response handling:
//!   - [`ResponseDecoder`]: Decodes the incoming response
//!   - Status line and headers via [`header`] module
//!   - Payload decoding via [`body`] module
//!
//! # Example
//!
//! ```
//! use micro_http_client::codec::{RequestEncoder, ResponseDecoder};
//! use micro_http_client::protocol::Request;
//! use tokio_util::codec::{Decoder, Encoder};
//! use bytes::BytesMut;
//! use http::{Method, Version};
//!
//! // Encode outgoing request
//! let mut encoder = RequestEncoder::new(Version::HTTP_10, "example/1.0");
//! let mut request_buffer = BytesMut::new();
//! encoder.encode((&Method::GET, &Request::new("example.com")), &mut request_buffer).unwrap();
//! assert!(request_buffer.starts_with(b"GET / HTTP/1.0\r\n"));
//!
//! // Decode incoming response
//! let mut decoder = ResponseDecoder::for_method(&Method::GET);
//! let mut response_buffer = BytesMut::from("HTTP/1.0 204 No Content\r\n\r\n");
//! let response = decoder.decode(&mut response_buffer).unwrap();
//! assert!(response.unwrap().is_header());
//! ```

pub mod body;
pub mod header;
mod request_encoder;
mod response_decoder;

pub use request_encoder::RequestEncoder;
pub use response_decoder::ResponseDecoder;
