//! A blocking micro HTTP/1.x client
//!
//! This crate sends one HTTP request per connection and reads the response
//! until the server closes the connection. It is built from small pieces that
//! can be used and tested on their own: codecs working on byte buffers, a
//! resolver and a connector behind traits, and a connection type driving the
//! codecs over any `Read + Write` stream.
//!
//! # Features
//!
//! - HTTP/1.0 requests by default, HTTP/1.1 on request
//! - `HEAD`, `GET`, `POST`, `PUT`, `DELETE` and any other method via [`client::Client::send`]
//! - Sequential failover over every resolved address
//! - Response headers kept in arrival order, names as written
//! - Pluggable name resolution and transport
//!
//! # Example
//!
//! ```no_run
//! use micro_http_client::client::Client;
//! use micro_http_client::protocol::Request;
//! use tracing::{Level, info};
//! use tracing_subscriber::FmtSubscriber;
//!
//! let subscriber = FmtSubscriber::builder().with_max_level(Level::INFO).finish();
//! tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");
//!
//! let client = Client::new();
//! let request = Request::from_uri("http://example.com/index.html")?;
//!
//! let response = client.get(&request)?;
//! info!(status = response.status(), body_size = response.body().len(), "got response");
//! for (name, value) in response.headers().iter() {
//!     info!("{name}: {value}");
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Architecture
//!
//! - [`client`]: The facade running the whole exchange
//! - [`connection`]: Resolution, connection establishment and the connection itself
//! - [`codec`]: Request encoding and response decoding
//! - [`protocol`]: Requests, responses, headers and errors
//!
//! # Error Handling
//!
//! Every failure is reported as a [`protocol::HttpError`], whose
//! [`kind`](protocol::HttpError::kind) tells which phase failed:
//!
//! - [`protocol::ResolveError`]: The host could not be resolved
//! - [`protocol::ConnectError`]: No resolved address accepted a connection
//! - [`protocol::SendError`]: Writing the request failed
//! - [`protocol::ParseError`]: The response was malformed or reading it failed
//!
//! # Limitations
//!
//! - No TLS, only the `http` scheme
//! - No keep-alive, redirects, cookies or chunked transfer decoding
//! - The body is always read until the server closes the connection
//! - No timeouts

pub mod client;
pub mod codec;
pub mod connection;
pub mod protocol;

mod utils;
pub(crate) use utils::ensure;
