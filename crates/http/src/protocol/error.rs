use std::io;
use thiserror::Error;

/// Top-level error returned by every [`Client`](crate::client::Client) call.
///
/// Each variant names the phase that failed; the wrapped error carries the
/// underlying io error or the offending protocol text.
#[derive(Debug, Error)]
pub enum HttpError {
    #[error("resolve error: {source}")]
    ResolveError {
        #[from]
        source: ResolveError,
    },

    #[error("connect error: {source}")]
    ConnectError {
        #[from]
        source: ConnectError,
    },

    #[error("request error: {source}")]
    RequestError {
        #[from]
        source: SendError,
    },

    #[error("response error: {source}")]
    ResponseError {
        #[from]
        source: ParseError,
    },
}

/// Coarse classification of an [`HttpError`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorKind {
    /// host and port could not be turned into any endpoint
    Resolution,
    /// every resolved endpoint refused the connection
    Connection,
    /// reading or writing the connection failed
    Transport,
    /// the status line was absent or malformed
    Protocol,
    /// a continuation line appeared before any header
    MalformedHeader,
}

impl HttpError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            HttpError::ResolveError { .. } => ErrorKind::Resolution,
            HttpError::ConnectError { .. } => ErrorKind::Connection,
            HttpError::RequestError { .. } => ErrorKind::Transport,
            HttpError::ResponseError { source } => match source {
                ParseError::InvalidResponse { .. } => ErrorKind::Protocol,
                ParseError::MalformedHeader { .. } => ErrorKind::MalformedHeader,
                ParseError::Io { .. } => ErrorKind::Transport,
            },
        }
    }
}

#[derive(Error, Debug)]
pub enum ResolveError {
    #[error("invalid port `{port}`, expect a decimal number")]
    InvalidPort { port: String },

    #[error("can't resolve {host}:{port}, cause: {source}")]
    Lookup {
        host: String,
        port: u16,
        #[source]
        source: io::Error,
    },

    #[error("no address found for {host}:{port}")]
    NoAddress { host: String, port: u16 },
}

impl ResolveError {
    pub fn invalid_port<S: ToString>(port: S) -> Self {
        Self::InvalidPort { port: port.to_string() }
    }

    pub fn lookup<S: ToString>(host: S, port: u16, e: io::Error) -> Self {
        Self::Lookup { host: host.to_string(), port, source: e }
    }

    pub fn no_address<S: ToString>(host: S, port: u16) -> Self {
        Self::NoAddress { host: host.to_string(), port }
    }
}

#[derive(Error, Debug)]
pub enum ConnectError {
    #[error("can't connect to any of {attempts} endpoints, last cause: {source}")]
    Exhausted {
        attempts: usize,
        #[source]
        source: io::Error,
    },
}

impl ConnectError {
    pub fn exhausted(attempts: usize, last_error: io::Error) -> Self {
        Self::Exhausted { attempts, source: last_error }
    }

    /// The error reported by the last endpoint that was tried.
    pub fn last_error(&self) -> &io::Error {
        match self {
            ConnectError::Exhausted { source, .. } => source,
        }
    }
}

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("invalid response: {reason}")]
    InvalidResponse { reason: String },

    #[error("malformed header: {line}")]
    MalformedHeader { line: String },

    #[error("io error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },
}

impl ParseError {
    pub fn invalid_response<S: ToString>(str: S) -> Self {
        Self::InvalidResponse { reason: str.to_string() }
    }

    pub fn malformed_header<S: ToString>(line: S) -> Self {
        Self::MalformedHeader { line: line.to_string() }
    }

    pub fn io<E: Into<io::Error>>(e: E) -> Self {
        Self::Io { source: e.into() }
    }
}

#[derive(Error, Debug)]
pub enum SendError {
    #[error("io error: {source}")]
    Io {
        #[from]
        source: io::Error,
    },
}

impl SendError {
    pub fn io<E: Into<io::Error>>(e: E) -> Self {
        Self::Io { source: e.into() }
    }
}

#[derive(Error, Debug)]
pub enum UriError {
    #[error("invalid uri: {source}")]
    Invalid {
        #[from]
        source: http::uri::InvalidUri,
    },

    #[error("unsupported scheme: {scheme:?}")]
    UnsupportedScheme { scheme: Option<String> },

    #[error("uri has no host")]
    MissingHost,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_errors() {
        let error: HttpError = ResolveError::invalid_port("http").into();
        assert_eq!(error.kind(), ErrorKind::Resolution);

        let error: HttpError = ConnectError::exhausted(2, io::Error::from(io::ErrorKind::ConnectionRefused)).into();
        assert_eq!(error.kind(), ErrorKind::Connection);

        let error: HttpError = SendError::io(io::Error::from(io::ErrorKind::BrokenPipe)).into();
        assert_eq!(error.kind(), ErrorKind::Transport);

        let error: HttpError = ParseError::io(io::Error::from(io::ErrorKind::ConnectionReset)).into();
        assert_eq!(error.kind(), ErrorKind::Transport);

        let error: HttpError = ParseError::invalid_response("empty").into();
        assert_eq!(error.kind(), ErrorKind::Protocol);

        let error: HttpError = ParseError::malformed_header(" dangling").into();
        assert_eq!(error.kind(), ErrorKind::MalformedHeader);
    }

    #[test]
    fn connect_error_keeps_last_cause() {
        let error = ConnectError::exhausted(3, io::Error::from(io::ErrorKind::TimedOut));
        assert_eq!(error.last_error().kind(), io::ErrorKind::TimedOut);
        assert!(error.to_string().contains("3 endpoints"));
    }
}
