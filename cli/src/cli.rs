//! CLI argument parsing with clap derive

use anyhow::Result;
use clap::builder::FalseyValueParser;
use clap::{Parser, Subcommand};

use crate::app::{AppContext, AppFlags, OutputFlags};
use crate::commands;

/// Install, run, and scale the Strata platform on a fleet cluster
#[derive(Parser)]
#[command(
    name = "stratactl",
    version,
    propagate_version = true,
    subcommand_required = true,
    arg_required_else_help = true
)]
pub struct Cli {
    /// Reach the cluster through an SSH tunnel to this host
    #[arg(long, global = true, env = "STRATACTL_TUNNEL")]
    pub tunnel: Option<String>,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        value_parser = FalseyValueParser::new()
    )]
    pub no_color: bool,

    /// Log debug diagnostics to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Register components with the cluster
    Install(commands::TargetArgs),

    /// Remove components from the cluster
    Uninstall(commands::TargetArgs),

    /// Start components
    Start(commands::TargetArgs),

    /// Stop components
    Stop(commands::TargetArgs),

    /// Stop, then start components
    Restart(commands::TargetArgs),

    /// Set instance counts, e.g. `router=3`
    Scale(commands::lifecycle::ScaleArgs),

    /// Show component status
    Status(commands::TargetArgs),

    /// Show component logs
    Journal(commands::TargetArgs),

    /// List installed units
    List,

    /// List registered unit files
    ListUnitFiles,

    /// Get, set, or remove cluster configuration
    Config(commands::config::ConfigArgs),

    /// Download the latest unit definitions
    RefreshUnits(commands::refresh_units::RefreshArgs),

    /// Open a shell on the machine running a component
    Ssh(commands::inspect::SshArgs),

    /// Show version
    Version,
}

impl Cli {
    /// Execute the CLI command.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings cannot be loaded or the command fails.
    pub async fn run(self) -> Result<()> {
        let Cli {
            tunnel,
            quiet,
            no_color,
            verbose: _,
            command,
        } = self;

        if matches!(command, Command::Version) {
            commands::version::run();
            return Ok(());
        }

        let app = AppContext::new(AppFlags {
            output: OutputFlags { no_color, quiet },
            tunnel,
        })?;

        match command {
            Command::Install(args) => commands::lifecycle::install(&app, args).await,
            Command::Uninstall(args) => commands::lifecycle::uninstall(&app, args).await,
            Command::Start(args) => commands::lifecycle::start(&app, args).await,
            Command::Stop(args) => commands::lifecycle::stop(&app, args).await,
            Command::Restart(args) => commands::lifecycle::restart(&app, args).await,
            Command::Scale(args) => commands::lifecycle::scale(&app, &args).await,
            Command::Status(args) => commands::inspect::status(&app, &args).await,
            Command::Journal(args) => commands::inspect::journal(&app, &args).await,
            Command::List => commands::inspect::list(&app).await,
            Command::ListUnitFiles => commands::inspect::list_unit_files(&app).await,
            Command::Config(args) => commands::config::run(&app, &args).await,
            Command::RefreshUnits(args) => commands::refresh_units::run(&app, args).await,
            Command::Ssh(args) => commands::inspect::ssh(&app, &args).await,
            Command::Version => Ok(()),
        }
    }
}
