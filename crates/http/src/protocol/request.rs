//! Client request description.
//!
//! A [`Request`] carries everything the serializer needs except the verb: the
//! target host and port, the path/query/anchor triple, caller headers and an
//! optional body. It is built with chained `with_*` mutators that take and
//! return the owned value, each applied in order:
//!
//! ```
//! use micro_http_client::protocol::Request;
//!
//! let request = Request::new("example.com")
//!     .with_port(8080)
//!     .with_path("index.html")
//!     .with_header("X-Trace", "1")
//!     .with_header("X-Trace", "2");
//!
//! assert_eq!(request.headers().get_all("X-Trace").count(), 2);
//! ```

use bytes::Bytes;
use http::Uri;

use crate::protocol::{Headers, UriError};

const DEFAULT_PORT: u16 = 80;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    host: String,
    port: u16,
    path: String,
    query: String,
    anchor: String,
    headers: Headers,
    body: Bytes,
}

impl Request {
    /// Creates a request for `/` on `host`, port 80, without headers or body.
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port: DEFAULT_PORT,
            path: String::new(),
            query: String::new(),
            anchor: String::new(),
            headers: Headers::new(),
            body: Bytes::new(),
        }
    }

    /// Builds a request from an absolute `http://` uri.
    ///
    /// Everything after the first `#` becomes the anchor. The port defaults to
    /// 80 when the uri names none. An IPv6 literal host is stored without its
    /// brackets, so `http://[::1]/` targets host `::1`.
    ///
    /// # Errors
    ///
    /// Returns `UriError` if the uri can't be parsed, has no host, or uses a
    /// scheme other than `http`.
    pub fn from_uri(uri: &str) -> Result<Self, UriError> {
        let (uri, anchor) = uri.split_once('#').unwrap_or((uri, ""));
        let uri: Uri = uri.parse()?;

        match uri.scheme_str() {
            Some(scheme) if scheme.eq_ignore_ascii_case("http") => {}
            scheme => return Err(UriError::UnsupportedScheme { scheme: scheme.map(str::to_string) }),
        }

        let host = uri.host().ok_or(UriError::MissingHost)?;
        let host = host.strip_prefix('[').and_then(|h| h.strip_suffix(']')).unwrap_or(host);

        Ok(Request::new(host)
            .with_port(uri.port_u16().unwrap_or(DEFAULT_PORT))
            .with_path(uri.path())
            .with_query(uri.query().unwrap_or_default())
            .with_anchor(anchor))
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Sets the path. Leading slashes are dropped; the serializer writes exactly one.
    pub fn with_path(mut self, path: impl AsRef<str>) -> Self {
        self.path = path.as_ref().trim_start_matches('/').to_string();
        self
    }

    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = query.into();
        self
    }

    pub fn with_anchor(mut self, anchor: impl Into<String>) -> Self {
        self.anchor = anchor.into();
        self
    }

    /// Appends a header; an existing header with the same name is kept.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.append_header(name, value);
        self
    }

    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.set_body(body);
        self
    }

    pub fn append_header(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.headers.append(name, value);
    }

    pub fn set_body(&mut self, body: impl Into<Bytes>) {
        self.body = body.into();
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// The path without its leading slash.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn anchor(&self) -> &str {
        &self.anchor
    }

    pub fn headers(&self) -> &Headers {
        &self.headers
    }

    pub fn body(&self) -> &Bytes {
        &self.body
    }
}
