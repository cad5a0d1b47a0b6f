//! Command implementations

pub mod config;
pub mod inspect;
pub mod lifecycle;
pub mod refresh_units;
pub mod version;

use clap::Args;

/// Components a command acts on.
#[derive(Args)]
pub struct TargetArgs {
    /// Component names (`controller`, `router@2`, `router@*`), or one of
    /// `platform`, `stateless-platform`, `swarm`
    #[arg(required = true)]
    pub targets: Vec<String>,
}
