//! Application service: read-only inspection passthroughs.
//!
//! These verbs hand the terminal to the backend; nothing here is batched.

use anyhow::Result;

use crate::application::ports::Backend;
use crate::domain::error::TargetError;

/// Print the status of each target in turn.
///
/// # Errors
///
/// Returns [`TargetError::Empty`] for an empty list, or the first backend
/// failure. Targets after a failure are not queried.
pub async fn status(backend: &impl Backend, targets: &[String]) -> Result<()> {
    ensure_targets(targets)?;
    for target in targets {
        backend.status(target).await?;
    }
    Ok(())
}

/// Print the journal of each target in turn.
///
/// # Errors
///
/// Returns [`TargetError::Empty`] for an empty list, or the first backend
/// failure.
pub async fn journal(backend: &impl Backend, targets: &[String]) -> Result<()> {
    ensure_targets(targets)?;
    for target in targets {
        backend.journal(target).await?;
    }
    Ok(())
}

/// Print the installed units.
///
/// # Errors
///
/// Propagates the backend failure.
pub async fn list_units(backend: &impl Backend) -> Result<()> {
    backend.list_units().await
}

/// Print the registered unit files.
///
/// # Errors
///
/// Propagates the backend failure.
pub async fn list_unit_files(backend: &impl Backend) -> Result<()> {
    backend.list_unit_files().await
}

/// Open a shell on the machine running `target`.
///
/// # Errors
///
/// Propagates the backend failure.
pub async fn ssh(backend: &impl Backend, target: &str) -> Result<()> {
    backend.ssh(target).await
}

fn ensure_targets(targets: &[String]) -> Result<(), TargetError> {
    if targets.is_empty() {
        return Err(TargetError::Empty);
    }
    Ok(())
}
