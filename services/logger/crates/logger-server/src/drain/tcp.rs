//! TCP drain with a pooled, bounded-lifetime connection.
//!
//! The connection is dialed on first use and reused for up to
//! [`MAX_CONN_USES`] sends, after which it is closed and redialed. All sends
//! serialize through one exclusive lock that owns the socket and its use
//! counter together, so concurrent callers never interleave partial writes.

use tokio::io::AsyncWriteExt;
use tokio::net::TcpStream;
use tokio::sync::Mutex;

use super::{DrainError, LogDrain};

/// Number of sends a connection serves before it is recycled.
pub const MAX_CONN_USES: usize = 100;

const SCHEME: &str = "tcp";

enum DrainState {
    Closed,
    Open { conn: TcpStream, uses: usize },
}

/// Forwards log lines to `tcp://host:port`.
pub struct TcpDrain {
    addr: String,
    state: Mutex<DrainState>,
}

impl TcpDrain {
    /// Validate `drain_url` and build a drain. No connection is made yet.
    ///
    /// # Errors
    ///
    /// Fails when the url does not parse, its scheme is not `tcp`, or it
    /// lacks a host or port.
    pub fn new(drain_url: &str) -> Result<Self, DrainError> {
        let url = url::Url::parse(drain_url).map_err(|source| DrainError::InvalidUrl {
            url: drain_url.to_string(),
            source,
        })?;
        if url.scheme() != SCHEME {
            return Err(DrainError::InvalidScheme(url.scheme().to_string()));
        }
        let (Some(host), Some(port)) = (url.host_str(), url.port()) else {
            return Err(DrainError::MissingAddress(drain_url.to_string()));
        };
        Ok(Self {
            addr: format!("{host}:{port}"),
            state: Mutex::new(DrainState::Closed),
        })
    }

    /// Destination as `host:port`.
    #[must_use]
    pub fn addr(&self) -> &str {
        &self.addr
    }

    /// Sends served by the current connection; zero when none is open.
    pub async fn use_count(&self) -> usize {
        match &*self.state.lock().await {
            DrainState::Open { uses, .. } => *uses,
            DrainState::Closed => 0,
        }
    }

    async fn dial(&self) -> Result<TcpStream, DrainError> {
        tracing::debug!(addr = %self.addr, "dialing log drain");
        TcpStream::connect(&self.addr)
            .await
            .map_err(|source| DrainError::Dial {
                addr: self.addr.clone(),
                source,
            })
    }
}

impl LogDrain for TcpDrain {
    async fn send(&self, message: &str) -> Result<(), DrainError> {
        let mut state = self.state.lock().await;

        // Until the write succeeds the drain is Closed, so any early return
        // below forces the next call to dial again.
        let (mut conn, uses) = match std::mem::replace(&mut *state, DrainState::Closed) {
            DrainState::Open { conn, uses } if uses < MAX_CONN_USES => (conn, uses),
            DrainState::Open { mut conn, .. } => {
                tracing::debug!(addr = %self.addr, "recycling log drain connection");
                let _ = conn.shutdown().await;
                drop(conn);
                (self.dial().await?, 0)
            }
            DrainState::Closed => (self.dial().await?, 0),
        };

        let mut line = String::with_capacity(message.len() + 1);
        line.push_str(message);
        line.push('\n');
        conn.write_all(line.as_bytes())
            .await
            .map_err(|source| DrainError::Write {
                addr: self.addr.clone(),
                source,
            })?;

        *state = DrainState::Open {
            conn,
            uses: uses + 1,
        };
        Ok(())
    }
}
