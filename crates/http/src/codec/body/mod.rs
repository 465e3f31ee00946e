//! HTTP body handling module for reading response payloads
//!
//! Responses are framed by connection close only, so there is a single real
//! decoding strategy plus a no-op for `HEAD`.
//!
//! # Components
//!
//! - [`UntilCloseDecoder`]: Collects every byte until the peer closes
//! - [`PayloadDecoder`]: Chooses between reading until close and no body

mod payload_decoder;
mod until_close_decoder;

pub use payload_decoder::PayloadDecoder;
pub use until_close_decoder::UntilCloseDecoder;
