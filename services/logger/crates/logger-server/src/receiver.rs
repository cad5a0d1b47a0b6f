//! UDP log receiver: one syslog-style message per datagram.

use std::future::Future;

use anyhow::{Context, Result};
use tokio::net::UdpSocket;

use crate::drain::LogDrain;

const MAX_DATAGRAM: usize = 64 * 1024;

/// Receive datagrams on `socket` until `shutdown` resolves.
///
/// Every non-empty message is logged and, when `drain` is set, forwarded.
/// A failed forward is logged and the loop keeps going; the drain redials on
/// its next send. Returns the number of messages forwarded successfully.
///
/// # Errors
///
/// Returns an error only if reading from the socket fails.
pub async fn run<D: LogDrain>(
    socket: UdpSocket,
    drain: Option<&D>,
    shutdown: impl Future<Output = ()>,
) -> Result<u64> {
    let mut buf = vec![0u8; MAX_DATAGRAM];
    let mut forwarded = 0u64;
    tokio::pin!(shutdown);

    loop {
        let (len, peer) = tokio::select! {
            () = &mut shutdown => break,
            received = socket.recv_from(&mut buf) => received.context("reading log datagram")?,
        };

        let raw = String::from_utf8_lossy(&buf[..len]);
        let message = raw.trim_end_matches(['\n', '\r', '\0']);
        if message.is_empty() {
            continue;
        }
        tracing::info!(from = %peer, "{message}");

        if let Some(drain) = drain {
            match drain.send(message).await {
                Ok(()) => forwarded += 1,
                Err(e) => tracing::warn!(error = %e, "failed to forward log message"),
            }
        }
    }

    Ok(forwarded)
}
