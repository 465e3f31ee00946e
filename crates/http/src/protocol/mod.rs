//! Core HTTP protocol types shared by the codec, the connection and the client.
//!
//! # Components
//!
//! - **Requests** ([`request`]): [`Request`], the caller's description of what to send
//! - **Responses** ([`response`]): [`StatusLine`], [`ResponseHead`] and the final [`Response`]
//! - **Headers** ([`header`]): [`Headers`], an ordered multi-map keeping names as written
//! - **Message Handling** ([`message`]): [`Message`] and [`PayloadItem`] as produced by the decoder
//! - **Error Handling** ([`error`]): one error type per phase, wrapped by [`HttpError`]
//!   - [`ResolveError`]: host/port resolution
//!   - [`ConnectError`]: no endpoint accepted the connection
//!   - [`SendError`]: writing the request
//!   - [`ParseError`]: reading and parsing the response
//!   - [`UriError`]: building a [`Request`] from a uri string

mod message;
pub use message::Message;
pub use message::PayloadItem;

mod header;
pub use header::Headers;

mod request;
pub use request::Request;

mod response;
pub use response::Response;
pub use response::ResponseHead;
pub use response::StatusLine;

mod error;
pub use error::ConnectError;
pub use error::ErrorKind;
pub use error::HttpError;
pub use error::ParseError;
pub use error::ResolveError;
pub use error::SendError;
pub use error::UriError;
