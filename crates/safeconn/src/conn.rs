//! `Conn` implementations for standard library and tokio sockets.
//!
//! Socket address queries fail once the descriptor has been shut down or
//! invalidated by the stack; those failures surface as `None` endpoints.
//!
//! These types also have inherent `local_addr`/`peer_addr` methods returning
//! `io::Result`. Go through the accessor functions, or call
//! `Conn::local_addr(&sock)`, to get the `Conn` behaviour.

use std::net::{TcpStream, UdpSocket};

use crate::addr::NetAddr;
use crate::network::Conn;

impl Conn for TcpStream {
    type Addr = NetAddr;

    fn local_addr(&self) -> Option<NetAddr> {
        TcpStream::local_addr(self).ok().map(NetAddr::Tcp)
    }

    fn remote_addr(&self) -> Option<NetAddr> {
        self.peer_addr().ok().map(NetAddr::Tcp)
    }
}

impl Conn for UdpSocket {
    type Addr = NetAddr;

    fn local_addr(&self) -> Option<NetAddr> {
        UdpSocket::local_addr(self).ok().map(NetAddr::Udp)
    }

    /// `None` until the socket is `connect`ed.
    fn remote_addr(&self) -> Option<NetAddr> {
        self.peer_addr().ok().map(NetAddr::Udp)
    }
}

#[cfg(unix)]
mod unix {
    use std::os::unix::net::{SocketAddr, UnixStream};

    use super::*;

    fn unix_addr(addr: SocketAddr) -> NetAddr {
        NetAddr::Unix(addr.as_pathname().map(|p| p.to_path_buf()))
    }

    impl Conn for UnixStream {
        type Addr = NetAddr;

        fn local_addr(&self) -> Option<NetAddr> {
            UnixStream::local_addr(self).ok().map(unix_addr)
        }

        fn remote_addr(&self) -> Option<NetAddr> {
            self.peer_addr().ok().map(unix_addr)
        }
    }
}

#[cfg(feature = "tokio")]
mod tokio_impls {
    use super::*;

    impl Conn for tokio::net::TcpStream {
        type Addr = NetAddr;

        fn local_addr(&self) -> Option<NetAddr> {
            tokio::net::TcpStream::local_addr(self).ok().map(NetAddr::Tcp)
        }

        fn remote_addr(&self) -> Option<NetAddr> {
            self.peer_addr().ok().map(NetAddr::Tcp)
        }
    }

    impl Conn for tokio::net::UdpSocket {
        type Addr = NetAddr;

        fn local_addr(&self) -> Option<NetAddr> {
            tokio::net::UdpSocket::local_addr(self).ok().map(NetAddr::Udp)
        }

        fn remote_addr(&self) -> Option<NetAddr> {
            self.peer_addr().ok().map(NetAddr::Udp)
        }
    }

    #[cfg(unix)]
    impl Conn for tokio::net::UnixStream {
        type Addr = NetAddr;

        fn local_addr(&self) -> Option<NetAddr> {
            tokio::net::UnixStream::local_addr(self)
                .ok()
                .map(|a| NetAddr::Unix(a.as_pathname().map(|p| p.to_path_buf())))
        }

        fn remote_addr(&self) -> Option<NetAddr> {
            self.peer_addr()
                .ok()
                .map(|a| NetAddr::Unix(a.as_pathname().map(|p| p.to_path_buf())))
        }
    }
}
