//! Connection handling module
//!
//! This module gets a request onto the wire and the response back off it,
//! using one fresh connection per exchange.
//!
//! # Components
//!
//! - [`Resolve`] / [`SystemResolver`]: turn a host and port into endpoints
//! - [`Connect`] / [`TcpConnector`]: open a stream to one endpoint
//! - [`establish`]: try endpoints in order until one connects
//! - [`HttpConnection`]: write the request and read the response over a
//!   connected stream, until the peer closes it

mod connector;
mod http_connection;
mod resolver;

#[cfg(test)]
pub(crate) mod mock;

pub use connector::{Connect, TcpConnector, establish};
pub use http_connection::HttpConnection;
pub use resolver::{Resolve, SystemResolver};

#[cfg(test)]
pub(crate) use connector::MockConnect;
#[cfg(test)]
pub(crate) use resolver::MockResolve;
