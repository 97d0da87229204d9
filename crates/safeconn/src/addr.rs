//! Concrete endpoint type for IP and Unix domain sockets.

use std::fmt;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::network::Addr;

/// An endpoint tagged with its transport family.
///
/// `Display` renders the address the way it is usually logged: `ip:port` for
/// IPv4, `[ip]:port` for IPv6, the filesystem path for a Unix socket, and the
/// empty string for an unnamed Unix socket.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum NetAddr {
    Tcp(SocketAddr),
    Udp(SocketAddr),
    /// `None` for unnamed (autobound or socketpair) sockets.
    Unix(Option<PathBuf>),
}

impl NetAddr {
    /// Build an endpoint from a network name and an address string.
    ///
    /// Accepted networks are `tcp`, `tcp4`, `tcp6`, `udp`, `udp4`, `udp6` and
    /// `unix`. The `4`/`6` suffix restricts the IP family of `address`; the
    /// resulting endpoint still reports the bare family (`"tcp"` or `"udp"`).
    ///
    /// # Example
    /// ```rust
    /// use safeconn::{Addr, NetAddr};
    ///
    /// let addr = NetAddr::parse("tcp4", "127.0.0.1:8080").unwrap();
    /// assert_eq!(addr.network(), "tcp");
    /// assert_eq!(addr.to_string(), "127.0.0.1:8080");
    /// ```
    pub fn parse(network: &str, address: &str) -> Result<Self> {
        let socket = |want_v4: Option<bool>| -> Result<SocketAddr> {
            let sa: SocketAddr = address.parse().map_err(|source| Error::InvalidAddress {
                network: network.to_owned(),
                address: address.to_owned(),
                source,
            })?;
            match want_v4 {
                Some(v4) if v4 != sa.is_ipv4() => Err(Error::FamilyMismatch {
                    network: network.to_owned(),
                    address: address.to_owned(),
                }),
                _ => Ok(sa),
            }
        };

        match network {
            "tcp" => socket(None).map(NetAddr::Tcp),
            "tcp4" => socket(Some(true)).map(NetAddr::Tcp),
            "tcp6" => socket(Some(false)).map(NetAddr::Tcp),
            "udp" => socket(None).map(NetAddr::Udp),
            "udp4" => socket(Some(true)).map(NetAddr::Udp),
            "udp6" => socket(Some(false)).map(NetAddr::Udp),
            "unix" if address.is_empty() => Ok(NetAddr::Unix(None)),
            "unix" => Ok(NetAddr::Unix(Some(PathBuf::from(address)))),
            other => Err(Error::UnknownNetwork(other.to_owned())),
        }
    }

    /// Socket address for IP endpoints.
    pub fn socket_addr(&self) -> Option<SocketAddr> {
        match self {
            NetAddr::Tcp(sa) | NetAddr::Udp(sa) => Some(*sa),
            NetAddr::Unix(_) => None,
        }
    }
}

impl fmt::Display for NetAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NetAddr::Tcp(sa) | NetAddr::Udp(sa) => write!(f, "{}", sa),
            NetAddr::Unix(Some(path)) => write!(f, "{}", path.display()),
            NetAddr::Unix(None) => Ok(()),
        }
    }
}

impl Addr for NetAddr {
    fn network(&self) -> &str {
        match self {
            NetAddr::Tcp(_) => "tcp",
            NetAddr::Udp(_) => "udp",
            NetAddr::Unix(_) => "unix",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ip_networks() {
        let tcp = NetAddr::parse("tcp", "127.0.0.1:8080").unwrap();
        assert_eq!(tcp.network(), "tcp");
        assert_eq!(tcp.to_string(), "127.0.0.1:8080");

        let udp6 = NetAddr::parse("udp6", "[::1]:53").unwrap();
        assert_eq!(udp6.network(), "udp");
        assert_eq!(udp6.to_string(), "[::1]:53");
        assert_eq!(udp6.socket_addr(), Some("[::1]:53".parse().unwrap()));
    }

    #[test]
    fn test_parse_unix() {
        let named = NetAddr::parse("unix", "/run/app.sock").unwrap();
        assert_eq!(named.network(), "unix");
        assert_eq!(named.to_string(), "/run/app.sock");
        assert_eq!(named.socket_addr(), None);

        let unnamed = NetAddr::parse("unix", "").unwrap();
        assert_eq!(unnamed, NetAddr::Unix(None));
        assert_eq!(unnamed.to_string(), "");
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            NetAddr::parse("sctp", "127.0.0.1:1"),
            Err(Error::UnknownNetwork("sctp".to_owned()))
        );
        assert!(matches!(
            NetAddr::parse("tcp", "localhost"),
            Err(Error::InvalidAddress { .. })
        ));
        assert!(matches!(
            NetAddr::parse("tcp4", "[::1]:80"),
            Err(Error::FamilyMismatch { .. })
        ));
        assert!(matches!(
            NetAddr::parse("udp6", "10.0.0.1:53"),
            Err(Error::FamilyMismatch { .. })
        ));
    }

    #[test]
    fn test_error_messages() {
        let err = NetAddr::parse("tcp6", "10.0.0.1:80").unwrap_err();
        assert_eq!(err.to_string(), "address \"10.0.0.1:80\" does not match network tcp6");

        let err = NetAddr::parse("quic", "").unwrap_err();
        assert_eq!(err.to_string(), "unknown network: \"quic\"");
    }
}
