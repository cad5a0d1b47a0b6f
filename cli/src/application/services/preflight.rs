//! Application service: platform pre-flight checks.

use anyhow::Result;
use strata_common::{key_path, keys, namespace};

use crate::application::ports::{ClusterConfig, ProgressReporter};
use crate::domain::error::ConfigError;

/// Verify the cluster keys the platform needs before it is installed or
/// started.
///
/// A missing `domain` is fatal. A missing `sshPrivateKey` only produces a
/// warning on `out`; the platform runs without it.
///
/// # Errors
///
/// Returns [`ConfigError::MissingDomain`] when the platform domain is unset,
/// or the store's own error when it cannot be read.
pub async fn check_required_keys(
    cluster: &impl ClusterConfig,
    out: &dyn ProgressReporter,
) -> Result<()> {
    match cluster.get(&key_path(keys::PLATFORM, keys::DOMAIN)).await? {
        Some(domain) if !domain.is_empty() => {}
        _ => return Err(ConfigError::MissingDomain.into()),
    }

    let platform = namespace(keys::PLATFORM);
    if let Err(e) = cluster.check_config(&platform, keys::SSH_PRIVATE_KEY).await {
        tracing::debug!(error = %e, "optional key missing");
        out.warn(&format!(
            "{e}; interactive runs on cluster hosts are disabled. Set it with:\n\
             stratactl config platform set sshPrivateKey=<path-to-key>"
        ));
    }
    Ok(())
}
