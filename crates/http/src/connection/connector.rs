//! Connection establishment.
//!
//! [`establish`] walks the resolved endpoints strictly in order and returns
//! the first stream that connects. There is no racing between endpoints and
//! no retry of an endpoint that failed.

use std::io;
use std::io::{Read, Write};
use std::net::{SocketAddr, TcpStream};

use tracing::{debug, warn};

use crate::protocol::ConnectError;

/// Opens a byte stream to a single endpoint.
#[cfg_attr(test, mockall::automock(type Stream = crate::connection::mock::MockStream;))]
pub trait Connect {
    type Stream: Read + Write;

    /// # Errors
    ///
    /// Returns the io error reported by the transport.
    fn connect(&self, endpoint: &SocketAddr) -> io::Result<Self::Stream>;
}

/// Plain TCP connector.
#[derive(Debug, Clone, Default)]
pub struct TcpConnector;

impl TcpConnector {
    pub fn new() -> Self {
        Self
    }
}

impl Connect for TcpConnector {
    type Stream = TcpStream;

    fn connect(&self, endpoint: &SocketAddr) -> io::Result<Self::Stream> {
        TcpStream::connect(endpoint)
    }
}

/// Connects to the first endpoint that accepts, in the given order.
///
/// # Errors
///
/// Returns `ConnectError::Exhausted` carrying the last endpoint's error when
/// none connects. An empty endpoint list fails with `NotFound`.
pub fn establish<C>(connector: &C, endpoints: &[SocketAddr]) -> Result<C::Stream, ConnectError>
where
    C: Connect + ?Sized,
{
    let mut last_error = io::Error::new(io::ErrorKind::NotFound, "host not found");

    for endpoint in endpoints {
        match connector.connect(endpoint) {
            Ok(stream) => {
                debug!(%endpoint, "connected");
                return Ok(stream);
            }
            Err(e) => {
                warn!(%endpoint, cause = %e, "failed to connect");
                last_error = e;
            }
        }
    }

    Err(ConnectError::exhausted(endpoints.len(), last_error))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::mock::MockStream;
    use std::net::TcpListener;

    fn endpoint(port: u16) -> SocketAddr {
        SocketAddr::from(([127, 0, 0, 1], port))
    }

    #[test]
    fn first_success_wins() {
        let mut connector = MockConnect::new();
        connector
            .expect_connect()
            .withf(|addr| addr.port() == 1001)
            .times(1)
            .returning(|_| Err(io::Error::from(io::ErrorKind::ConnectionRefused)));
        connector
            .expect_connect()
            .withf(|addr| addr.port() == 1002)
            .times(1)
            .returning(|_| Ok(MockStream::new(b"from e2".to_vec())));
        connector.expect_connect().withf(|addr| addr.port() == 1003).never();

        let mut stream = establish(&connector, &[endpoint(1001), endpoint(1002), endpoint(1003)]).unwrap();

        let mut content = String::new();
        stream.read_to_string(&mut content).unwrap();
        assert_eq!(content, "from e2");
    }

    #[test]
    fn exhausted_reports_last_error() {
        let mut connector = MockConnect::new();
        connector
            .expect_connect()
            .withf(|addr| addr.port() == 1001)
            .returning(|_| Err(io::Error::from(io::ErrorKind::ConnectionRefused)));
        connector
            .expect_connect()
            .withf(|addr| addr.port() == 1002)
            .returning(|_| Err(io::Error::from(io::ErrorKind::TimedOut)));

        let error = establish(&connector, &[endpoint(1001), endpoint(1002)]).unwrap_err();

        assert_eq!(error.last_error().kind(), io::ErrorKind::TimedOut);
        assert!(matches!(error, ConnectError::Exhausted { attempts: 2, .. }));
    }

    #[test]
    fn no_endpoints() {
        let connector = MockConnect::new();

        let error = establish(&connector, &[]).unwrap_err();

        assert_eq!(error.last_error().kind(), io::ErrorKind::NotFound);
    }

    #[test]
    fn tcp_connect_to_listener() {
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        let stream = establish(&TcpConnector::new(), &[addr]).unwrap();

        assert_eq!(stream.peer_addr().unwrap(), addr);
    }
}
