//! Blocking HTTP client facade.
//!
//! Every call runs the same exchange on a fresh connection: resolve the host,
//! connect to the first endpoint that accepts, send the request with
//! `Connection: close`, read the status line and headers, then read the body
//! until the server closes the connection (except for `HEAD`). The connection
//! is dropped when the call returns, whatever the outcome.
//!
//! # Example
//!
//! ```no_run
//! use micro_http_client::client::Client;
//! use micro_http_client::protocol::Request;
//!
//! let client = Client::new();
//! let request = Request::new("example.com").with_path("/index.html");
//!
//! let response = client.get(&request)?;
//! println!("{} {}", response.status(), response.status_message());
//! # Ok::<(), micro_http_client::protocol::HttpError>(())
//! ```

use bytes::Bytes;
use http::{Method, Version};
use thiserror::Error;
use tracing::{debug, info};

use crate::codec::{RequestEncoder, ResponseDecoder};
use crate::connection::{Connect, HttpConnection, Resolve, SystemResolver, TcpConnector, establish};
use crate::protocol::{HttpError, Request, Response};

/// User agent sent when the request carries no `User-Agent` header of its own
pub const DEFAULT_USER_AGENT: &str = concat!("micro-http-client/", env!("CARGO_PKG_VERSION"));

/// Content type used by [`Client::post_body`] and [`Client::put_body`]
pub const DEFAULT_CONTENT_TYPE: &str = "x-application/octet-stream";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ClientBuildError {
    #[error("unsupported http version {0:?}, expect HTTP/1.0 or HTTP/1.1")]
    UnsupportedVersion(Version),
}

#[derive(Debug)]
pub struct ClientBuilder<R = SystemResolver, C = TcpConnector> {
    version: Version,
    user_agent: String,
    resolver: R,
    connector: C,
}

impl ClientBuilder {
    fn new() -> Self {
        Self {
            version: Version::HTTP_10,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            resolver: SystemResolver::new(),
            connector: TcpConnector::new(),
        }
    }
}

impl<R, C> ClientBuilder<R, C> {
    pub fn version(mut self, version: Version) -> Self {
        self.version = version;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    pub fn resolver<R2: Resolve>(self, resolver: R2) -> ClientBuilder<R2, C> {
        ClientBuilder { version: self.version, user_agent: self.user_agent, resolver, connector: self.connector }
    }

    pub fn connector<C2: Connect>(self, connector: C2) -> ClientBuilder<R, C2> {
        ClientBuilder { version: self.version, user_agent: self.user_agent, resolver: self.resolver, connector }
    }

    /// # Errors
    ///
    /// Returns `ClientBuildError::UnsupportedVersion` for anything but HTTP/1.0 and HTTP/1.1.
    pub fn build(self) -> Result<Client<R, C>, ClientBuildError> {
        if self.version != Version::HTTP_10 && self.version != Version::HTTP_11 {
            return Err(ClientBuildError::UnsupportedVersion(self.version));
        }

        Ok(Client { version: self.version, user_agent: self.user_agent, resolver: self.resolver, connector: self.connector })
    }
}

/// A blocking HTTP/1.x client doing one request per connection.
///
/// The client keeps no state between calls, so `&self` methods can be shared
/// across threads as long as the resolver and the connector are `Sync`.
#[derive(Debug)]
pub struct Client<R = SystemResolver, C = TcpConnector> {
    version: Version,
    user_agent: String,
    resolver: R,
    connector: C,
}

impl Client {
    /// A client using the system resolver, plain TCP and HTTP/1.0.
    pub fn new() -> Self {
        Self {
            version: Version::HTTP_10,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            resolver: SystemResolver::new(),
            connector: TcpConnector::new(),
        }
    }

    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl<R, C> Client<R, C>
where
    R: Resolve,
    C: Connect,
{
    /// Sends a `HEAD` request. The returned response never has a body.
    ///
    /// # Errors
    ///
    /// Returns `HttpError` if any phase of the exchange fails.
    pub fn head(&self, request: &Request) -> Result<Response, HttpError> {
        self.send(&Method::HEAD, request)
    }

    /// # Errors
    ///
    /// Returns `HttpError` if any phase of the exchange fails.
    pub fn get(&self, request: &Request) -> Result<Response, HttpError> {
        self.send(&Method::GET, request)
    }

    /// Sends a `POST` with the request exactly as given, body included.
    ///
    /// # Errors
    ///
    /// Returns `HttpError` if any phase of the exchange fails.
    pub fn post(&self, request: &Request) -> Result<Response, HttpError> {
        self.send(&Method::POST, request)
    }

    /// Sends a `POST` carrying `body` as [`DEFAULT_CONTENT_TYPE`].
    ///
    /// # Errors
    ///
    /// Returns `HttpError` if any phase of the exchange fails.
    pub fn post_body(&self, request: &Request, body: impl Into<Bytes>) -> Result<Response, HttpError> {
        self.post_content(request, DEFAULT_CONTENT_TYPE, body)
    }

    /// Sends a `POST` carrying `body` as `content_type`.
    ///
    /// `request` is left untouched, the body and its headers go on a copy.
    ///
    /// # Errors
    ///
    /// Returns `HttpError` if any phase of the exchange fails.
    pub fn post_content(&self, request: &Request, content_type: &str, body: impl Into<Bytes>) -> Result<Response, HttpError> {
        self.send(&Method::POST, &with_content(request, content_type, body.into()))
    }

    /// # Errors
    ///
    /// Returns `HttpError` if any phase of the exchange fails.
    pub fn put(&self, request: &Request) -> Result<Response, HttpError> {
        self.send(&Method::PUT, request)
    }

    /// Sends a `PUT` carrying `body` as [`DEFAULT_CONTENT_TYPE`].
    ///
    /// # Errors
    ///
    /// Returns `HttpError` if any phase of the exchange fails.
    pub fn put_body(&self, request: &Request, body: impl Into<Bytes>) -> Result<Response, HttpError> {
        self.put_content(request, DEFAULT_CONTENT_TYPE, body)
    }

    /// # Errors
    ///
    /// Returns `HttpError` if any phase of the exchange fails.
    pub fn put_content(&self, request: &Request, content_type: &str, body: impl Into<Bytes>) -> Result<Response, HttpError> {
        self.send(&Method::PUT, &with_content(request, content_type, body.into()))
    }

    /// # Errors
    ///
    /// Returns `HttpError` if any phase of the exchange fails.
    pub fn delete(&self, request: &Request) -> Result<Response, HttpError> {
        self.send(&Method::DELETE, request)
    }

    /// Runs one exchange with an arbitrary method. The body is read for every
    /// method except `HEAD`.
    ///
    /// # Errors
    ///
    /// Returns `HttpError` if any phase of the exchange fails.
    pub fn send(&self, method: &Method, request: &Request) -> Result<Response, HttpError> {
        let endpoints = self.resolver.resolve(request.host(), &request.port().to_string())?;
        debug!(host = request.host(), port = request.port(), endpoints = endpoints.len(), "resolved endpoints");

        let stream = establish(&self.connector, &endpoints)?;
        let mut connection = HttpConnection::new(stream);

        let mut encoder = RequestEncoder::new(self.version, self.user_agent.as_str());
        connection.send_request(&mut encoder, method, request)?;

        let mut decoder = ResponseDecoder::for_method(method);
        let (head, body) = connection.read_response(&mut decoder)?;

        info!(%method, host = request.host(), path = request.path(), status = head.status(), body_size = body.len(), "request finished");
        Ok(Response::from_parts(head, body, request.host()))
    }
}

/// Copies `request` with `body` attached and described by `Content-type` and `Content-Length`.
fn with_content(request: &Request, content_type: &str, body: Bytes) -> Request {
    let content_length = body.len();
    request
        .clone()
        .with_body(body)
        .with_header("Content-type", content_type)
        .with_header("Content-Length", content_length.to_string())
}
