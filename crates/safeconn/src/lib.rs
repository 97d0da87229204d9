//! Absence-tolerant accessors for connection endpoint metadata.
//!
//! This crate provides:
//! - `Conn` and `Addr` capability traits for connections and their endpoints
//! - `local_addr`, `remote_addr` and `network` string accessors that never fail
//! - `ConnAddrs`, a one-shot capture of all three strings
//! - `NetAddr` and `Conn` impls for std (and, with the `tokio` feature, tokio) sockets
//!
//! An absent connection, or a connection whose endpoint has already
//! disappeared, yields the empty string.
//!
//! ```rust
//! use std::net::{TcpListener, TcpStream};
//!
//! let listener = TcpListener::bind("127.0.0.1:0").unwrap();
//! let stream = TcpStream::connect(listener.local_addr().unwrap()).unwrap();
//!
//! assert_eq!(safeconn::network(Some(&stream)), "tcp");
//! assert_eq!(
//!     safeconn::remote_addr(Some(&stream)),
//!     listener.local_addr().unwrap().to_string()
//! );
//! assert_eq!(safeconn::local_addr(None::<&TcpStream>), "");
//! ```

pub mod accessor;
pub mod addr;
pub mod conn;
pub mod error;
pub mod network;

pub use accessor::{local_addr, network, remote_addr, ConnAddrs};
pub use addr::NetAddr;
pub use error::{Error, Result};
pub use network::{Addr, Conn};
