//! Log drains: sinks that forward log lines to a remote destination.

pub mod tcp;

use std::future::Future;

use thiserror::Error;

pub use tcp::{MAX_CONN_USES, TcpDrain};

/// Errors raised while building or using a drain.
#[derive(Debug, Error)]
pub enum DrainError {
    #[error("invalid drain url {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("invalid drain url scheme: {0}")]
    InvalidScheme(String),

    #[error("drain url {0} must name a host and port")]
    MissingAddress(String),

    #[error("error dialing log drain at {addr} over tcp: {source}")]
    Dial {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("error writing to log drain at {addr}: {source}")]
    Write {
        addr: String,
        #[source]
        source: std::io::Error,
    },
}

/// A destination for log lines.
///
/// Implementations must be safe to call from many tasks at once; each call
/// either delivers the whole line or returns an error.
pub trait LogDrain: Send + Sync {
    /// Forward one message, newline-terminated on the wire.
    fn send(&self, message: &str) -> impl Future<Output = Result<(), DrainError>> + Send;
}

/// Build the drain for `drain_url`. Only `tcp://host:port` is supported.
pub fn from_url(drain_url: &str) -> Result<TcpDrain, DrainError> {
    TcpDrain::new(drain_url)
}
