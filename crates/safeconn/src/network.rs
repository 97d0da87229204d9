//! Core networking abstractions.
//!
//! A [`Conn`] is anything that can report its two endpoints, and an [`Addr`]
//! is an endpoint value that can render itself as an address string and name
//! its network family. Both are read-only capabilities: the transport layer
//! that owns the connection decides when endpoints stop being available.

use std::fmt::Display;
use std::sync::Arc;

/// A network endpoint address.
///
/// The address string is the value's [`Display`] output (for example
/// `"127.0.0.1:8080"`); [`network`](Addr::network) names the transport
/// family (for example `"tcp"` or `"udp"`).
pub trait Addr: Display {
    /// Name of the network family this address belongs to.
    fn network(&self) -> &str;
}

/// A network connection that exposes its local and remote endpoints.
///
/// Either endpoint may be unavailable: a connection that has been torn down,
/// or whose transport stack dropped its endpoint metadata asynchronously,
/// returns `None`. Endpoints are handed out by value, so callers always work
/// on a snapshot that outlives any later teardown.
pub trait Conn {
    /// Endpoint type produced by this connection.
    type Addr: Addr;

    /// Local endpoint, if still available.
    fn local_addr(&self) -> Option<Self::Addr>;

    /// Remote endpoint, if still available.
    fn remote_addr(&self) -> Option<Self::Addr>;
}

impl<A: Addr + ?Sized> Addr for &A {
    fn network(&self) -> &str {
        (**self).network()
    }
}

impl<A: Addr + ?Sized> Addr for Box<A> {
    fn network(&self) -> &str {
        (**self).network()
    }
}

impl<A: Addr + ?Sized> Addr for Arc<A> {
    fn network(&self) -> &str {
        (**self).network()
    }
}

impl<C: Conn + ?Sized> Conn for &C {
    type Addr = C::Addr;

    fn local_addr(&self) -> Option<Self::Addr> {
        (**self).local_addr()
    }

    fn remote_addr(&self) -> Option<Self::Addr> {
        (**self).remote_addr()
    }
}

impl<C: Conn + ?Sized> Conn for &mut C {
    type Addr = C::Addr;

    fn local_addr(&self) -> Option<Self::Addr> {
        (**self).local_addr()
    }

    fn remote_addr(&self) -> Option<Self::Addr> {
        (**self).remote_addr()
    }
}

impl<C: Conn + ?Sized> Conn for Box<C> {
    type Addr = C::Addr;

    fn local_addr(&self) -> Option<Self::Addr> {
        (**self).local_addr()
    }

    fn remote_addr(&self) -> Option<Self::Addr> {
        (**self).remote_addr()
    }
}

impl<C: Conn + ?Sized> Conn for Arc<C> {
    type Addr = C::Addr;

    fn local_addr(&self) -> Option<Self::Addr> {
        (**self).local_addr()
    }

    fn remote_addr(&self) -> Option<Self::Addr> {
        (**self).remote_addr()
    }
}
