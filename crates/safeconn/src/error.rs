//! Error types for the safeconn library.
//!
//! The address accessors never fail. These errors only come out of building a
//! [`NetAddr`](crate::NetAddr) from a network name and an address string.

use std::net::AddrParseError;

use thiserror::Error;

/// Result type alias for the safeconn library.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while constructing an endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Network name is not one of the supported families
    #[error("unknown network: {0:?}")]
    UnknownNetwork(String),

    /// Address string is not a valid socket address
    #[error("invalid {network} address {address:?}: {source}")]
    InvalidAddress {
        network: String,
        address: String,
        #[source]
        source: AddrParseError,
    },

    /// Address is valid but belongs to the other IP family (e.g. IPv6 for "tcp4")
    #[error("address {address:?} does not match network {network}")]
    FamilyMismatch { network: String, address: String },
}
