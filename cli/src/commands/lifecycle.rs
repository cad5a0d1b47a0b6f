//! `stratactl install|uninstall|start|stop|restart|scale`.

use anyhow::Result;
use clap::Args;

use crate::app::AppContext;
use crate::commands::TargetArgs;
use crate::domain::target::Targets;

/// Arguments for the scale command.
#[derive(Args)]
pub struct ScaleArgs {
    /// `<component>=<count>` pairs, e.g. `router=3 registry=2`
    #[arg(required = true)]
    pub targets: Vec<String>,
}

/// Run the install command.
///
/// # Errors
///
/// Returns the first failing batch or the pre-flight error.
pub async fn install(app: &AppContext, args: TargetArgs) -> Result<()> {
    let targets = Targets::resolve(args.targets)?;
    let reporter = app.reporter();
    app.orchestrator(&reporter).install(&targets).await?;
    app.output.success("Installed.");
    Ok(())
}

/// Run the uninstall command.
///
/// # Errors
///
/// Returns the first failing batch.
pub async fn uninstall(app: &AppContext, args: TargetArgs) -> Result<()> {
    let targets = Targets::resolve(args.targets)?;
    let reporter = app.reporter();
    app.orchestrator(&reporter).uninstall(&targets).await?;
    app.output.success("Uninstalled.");
    Ok(())
}

/// Run the start command.
///
/// # Errors
///
/// Returns the first failing batch or the pre-flight error.
pub async fn start(app: &AppContext, args: TargetArgs) -> Result<()> {
    let targets = Targets::resolve(args.targets)?;
    let reporter = app.reporter();
    app.orchestrator(&reporter).start(&targets).await?;
    app.output.success("Started.");
    Ok(())
}

/// Run the stop command.
///
/// # Errors
///
/// Returns the first failing batch.
pub async fn stop(app: &AppContext, args: TargetArgs) -> Result<()> {
    let targets = Targets::resolve(args.targets)?;
    let reporter = app.reporter();
    app.orchestrator(&reporter).stop(&targets).await?;
    app.output.success("Stopped.");
    Ok(())
}

/// Run the restart command.
///
/// # Errors
///
/// Returns the stop or start failure.
pub async fn restart(app: &AppContext, args: TargetArgs) -> Result<()> {
    let targets = Targets::resolve(args.targets)?;
    let reporter = app.reporter();
    app.orchestrator(&reporter).restart(&targets).await?;
    app.output.success("Restarted.");
    Ok(())
}

/// Run the scale command.
///
/// # Errors
///
/// Returns a parse or policy error before anything is scaled, or the first
/// backend failure.
pub async fn scale(app: &AppContext, args: &ScaleArgs) -> Result<()> {
    let reporter = app.reporter();
    app.orchestrator(&reporter).scale(&args.targets).await
}
