//! Strata log receiver entry point.
//!
//! Initialises tracing, loads configuration from `STRATA_LOGGER_*`
//! environment variables, binds the UDP listener and forwards every received
//! line to the configured drain until Ctrl-C.

use anyhow::{Context, Result};
use serde::Deserialize;
use strata_common::{key_path, keys};
use tokio::net::UdpSocket;
use tracing_subscriber::EnvFilter;

use strata_logger::{drain, receiver};

/// Receiver configuration loaded from environment variables via `envy`.
///
///   - `STRATA_LOGGER_LISTEN_ADDR` (default `0.0.0.0:514`)
///   - `STRATA_LOGGER_DRAIN_URL`   (optional, `tcp://host:port`)
#[derive(Debug, Deserialize)]
struct Config {
    /// UDP address to receive log datagrams on.
    #[serde(default = "default_listen_addr")]
    listen_addr: String,

    /// Remote drain to forward messages to.
    drain_url: Option<String>,
}

fn default_listen_addr() -> String {
    "0.0.0.0:514".to_string()
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("strata-logger starting");

    let config: Config = envy::prefixed("STRATA_LOGGER_")
        .from_env()
        .context("failed to load config from STRATA_LOGGER_* env vars")?;

    let drain = config
        .drain_url
        .as_deref()
        .map(drain::from_url)
        .transpose()
        .context("invalid STRATA_LOGGER_DRAIN_URL")?;

    match &drain {
        Some(d) => tracing::info!(drain = %d.addr(), "forwarding to drain"),
        None => tracing::info!(
            key = %key_path(keys::LOGS, keys::DRAIN),
            "no drain configured, messages are only logged locally",
        ),
    }

    let socket = UdpSocket::bind(&config.listen_addr)
        .await
        .with_context(|| format!("failed to bind UDP listener on {}", config.listen_addr))?;

    tracing::info!(listen_addr = %config.listen_addr, "log receiver ready");

    let forwarded = receiver::run(socket, drain.as_ref(), shutdown_signal()).await?;

    tracing::info!(forwarded, "strata-logger shut down");
    Ok(())
}

/// Wait for SIGINT (Ctrl-C) for graceful shutdown.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
    tracing::info!("received shutdown signal");
}
