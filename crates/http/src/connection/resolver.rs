//! Host name resolution.
//!
//! A [`Resolve`] implementation turns a host and a textual port into the
//! ordered list of socket addresses the connector will try. The port is taken
//! literally as a decimal number; service names such as `http` are rejected
//! instead of being looked up.

use std::net::{SocketAddr, ToSocketAddrs};

use tracing::debug;

use crate::ensure;
use crate::protocol::ResolveError;

#[cfg_attr(test, mockall::automock)]
pub trait Resolve {
    /// Resolves `host` and `port` to socket addresses, in preference order.
    ///
    /// # Errors
    ///
    /// Returns `ResolveError` if the port is not numeric, the lookup fails or
    /// yields no address.
    fn resolve(&self, host: &str, port: &str) -> Result<Vec<SocketAddr>, ResolveError>;
}

/// Resolver backed by the operating system, via [`ToSocketAddrs`].
#[derive(Debug, Clone, Default)]
pub struct SystemResolver;

impl SystemResolver {
    pub fn new() -> Self {
        Self
    }
}

impl Resolve for SystemResolver {
    fn resolve(&self, host: &str, port: &str) -> Result<Vec<SocketAddr>, ResolveError> {
        let port = parse_port(port)?;

        let addrs: Vec<SocketAddr> =
            (host, port).to_socket_addrs().map_err(|e| ResolveError::lookup(host, port, e))?.collect();

        ensure!(!addrs.is_empty(), ResolveError::no_address(host, port));

        debug!(host, port, endpoints = ?addrs, "resolved host");
        Ok(addrs)
    }
}

/// Parses a port string made of ASCII digits only.
fn parse_port(port: &str) -> Result<u16, ResolveError> {
    ensure!(!port.is_empty() && port.bytes().all(|b| b.is_ascii_digit()), ResolveError::invalid_port(port));
    port.parse::<u16>().map_err(|_| ResolveError::invalid_port(port))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

    #[test]
    fn numeric_port_only() {
        assert_eq!(parse_port("80").unwrap(), 80);
        assert_eq!(parse_port("08080").unwrap(), 8080);

        for port in ["http", "", "+80", "-1", "65536", " 80"] {
            assert!(matches!(parse_port(port), Err(ResolveError::InvalidPort { .. })), "port {port:?} should be rejected");
        }
    }

    #[test]
    fn resolve_ip_literals() {
        let resolver = SystemResolver::new();

        let addrs = resolver.resolve("127.0.0.1", "8080").unwrap();
        assert_eq!(addrs, vec![SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), 8080)]);

        let addrs = resolver.resolve("::1", "80").unwrap();
        assert_eq!(addrs, vec![SocketAddr::new(IpAddr::V6(Ipv6Addr::LOCALHOST), 80)]);
    }

    #[test]
    fn service_name_is_not_looked_up() {
        let result = SystemResolver::new().resolve("127.0.0.1", "http");

        assert!(matches!(result, Err(ResolveError::InvalidPort { ref port }) if port == "http"));
    }

    #[test]
    fn unknown_host() {
        let result = SystemResolver::new().resolve("host.invalid", "80");

        assert!(matches!(result, Err(ResolveError::Lookup { .. } | ResolveError::NoAddress { .. })));
    }
}
