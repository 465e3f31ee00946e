//! HTTP header processing module for encoding requests and decoding responses
//!
//! # Components
//!
//! - [`HeaderEncoder`]: Encodes the request line and request headers to bytes
//!   - Writes caller headers in insertion order
//!   - Adds `Host`, `Accept`, a default `User-Agent` and `Connection: close`
//!
//! - [`StatusDecoder`]: Decodes the response status line
//!   - Validates the `HTTP/` version prefix and the numeric status code
//!
//! - [`HeaderDecoder`]: Decodes the response header block
//!   - Folds continuation lines into the previous header
//!   - Keeps duplicate headers and their original names

mod header_decoder;
mod header_encoder;
mod status_decoder;

pub use header_decoder::HeaderDecoder;
pub use header_encoder::HeaderEncoder;
pub use status_decoder::StatusDecoder;
