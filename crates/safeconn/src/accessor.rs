//! Absence-tolerant endpoint accessors.
//!
//! Some virtualized network stacks release a connection's endpoint metadata
//! very soon after close, racing with anything that logs or records the
//! addresses. Every function here performs the same two-level check (is there
//! a connection, is its endpoint still there) and collapses any absence to
//! the empty string, so call sites never have to repeat it.
//!
//! The endpoint is fetched exactly once per call and only that local snapshot
//! is read afterwards.

use std::fmt;

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::network::{Addr, Conn};

#[derive(Clone, Copy, Debug)]
enum Side {
    Local,
    Remote,
}

impl Side {
    fn as_str(self) -> &'static str {
        match self {
            Side::Local => "local",
            Side::Remote => "remote",
        }
    }
}

/// Fetch one endpoint, applying both presence checks.
fn endpoint<C: Conn + ?Sized>(conn: Option<&C>, side: Side) -> Option<C::Addr> {
    let Some(conn) = conn else {
        trace!(side = side.as_str(), "no connection");
        return None;
    };
    let addr = match side {
        Side::Local => conn.local_addr(),
        Side::Remote => conn.remote_addr(),
    };
    if addr.is_none() {
        trace!(side = side.as_str(), "endpoint unavailable");
    }
    addr
}

/// Returns the connection's local address, or `""` if the connection or its
/// local endpoint is absent.
pub fn local_addr<C: Conn + ?Sized>(conn: Option<&C>) -> String {
    endpoint(conn, Side::Local)
        .map(|addr| addr.to_string())
        .unwrap_or_default()
}

/// Returns the connection's remote address, or `""` if the connection or its
/// remote endpoint is absent.
pub fn remote_addr<C: Conn + ?Sized>(conn: Option<&C>) -> String {
    endpoint(conn, Side::Remote)
        .map(|addr| addr.to_string())
        .unwrap_or_default()
}

/// Returns the connection's network family (e.g. `"tcp"`), or `""` if the
/// connection or its local endpoint is absent.
///
/// The family is always read from the local endpoint. Both ends of a
/// connection share a family, and some stacks only expose it on one side, so
/// the remote endpoint is never consulted, even when the local one is gone.
pub fn network<C: Conn + ?Sized>(conn: Option<&C>) -> String {
    endpoint(conn, Side::Local)
        .map(|addr| addr.network().to_owned())
        .unwrap_or_default()
}

/// The three endpoint strings of a connection, captured together.
///
/// Every field follows the same rules as the matching accessor function;
/// `""` means unknown. Useful for attaching to structured log records.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ConnAddrs {
    pub local: String,
    pub remote: String,
    pub network: String,
}

impl ConnAddrs {
    /// Capture the endpoint strings of `conn`.
    ///
    /// Each endpoint is fetched once. `network` comes from the same local
    /// endpoint snapshot as `local`, so the two can never disagree about
    /// whether the local side was still there.
    pub fn capture<C: Conn + ?Sized>(conn: Option<&C>) -> Self {
        let (local, network) = match endpoint(conn, Side::Local) {
            Some(addr) => (addr.to_string(), addr.network().to_owned()),
            None => Default::default(),
        };
        let remote = endpoint(conn, Side::Remote)
            .map(|addr| addr.to_string())
            .unwrap_or_default();
        Self {
            local,
            remote,
            network,
        }
    }

    /// True when nothing was known about the connection.
    pub fn is_empty(&self) -> bool {
        self.local.is_empty() && self.remote.is_empty() && self.network.is_empty()
    }
}

impl fmt::Display for ConnAddrs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} -> {}", self.network, self.local, self.remote)
    }
}
