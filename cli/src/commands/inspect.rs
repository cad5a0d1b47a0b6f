//! `stratactl status|journal|list|list-unit-files|ssh`.

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::application::services::inspect;
use crate::commands::TargetArgs;

/// Arguments for the ssh command.
#[derive(Args)]
pub struct SshArgs {
    /// Component whose machine to open a shell on
    pub target: String,
}

/// Run the status command.
///
/// # Errors
///
/// Returns the first backend failure.
pub async fn status(app: &AppContext, args: &TargetArgs) -> Result<()> {
    inspect::status(app.backend.as_ref(), &args.targets).await
}

/// Run the journal command.
///
/// # Errors
///
/// Returns the first backend failure.
pub async fn journal(app: &AppContext, args: &TargetArgs) -> Result<()> {
    inspect::journal(app.backend.as_ref(), &args.targets).await
}

/// Run the list command.
///
/// # Errors
///
/// Returns the backend failure.
pub async fn list(app: &AppContext) -> Result<()> {
    inspect::list_units(app.backend.as_ref()).await
}

/// Run the list-unit-files command.
///
/// # Errors
///
/// Returns the backend failure.
pub async fn list_unit_files(app: &AppContext) -> Result<()> {
    inspect::list_unit_files(app.backend.as_ref()).await
}

/// Run the ssh command.
///
/// # Errors
///
/// Returns the backend failure.
pub async fn ssh(app: &AppContext, args: &SshArgs) -> Result<()> {
    inspect::ssh(app.backend.as_ref(), &args.target).await
}
