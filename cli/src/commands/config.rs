//! `stratactl config <target> <get|set|rm> <keys>...`.

use anyhow::Result;
use clap::Args;
use std::str::FromStr;

use crate::app::AppContext;
use crate::application::services::cluster_config::{self, ConfigEntry};
use crate::domain::config::ConfigAction;

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    /// Component namespace, e.g. `platform` or `logs`
    pub target: String,

    /// One of `get`, `set`, `rm`
    #[arg(value_parser = ConfigAction::from_str)]
    pub action: ConfigAction,

    /// Keys for `get`/`rm`, `key=value` pairs for `set`
    #[arg(required = true)]
    pub keys: Vec<String>,
}

/// What the terminal shows for one entry.
#[derive(Debug, PartialEq, Eq)]
enum Line {
    Value { key: String, value: String },
    Unset(String),
    Done(String),
}

fn line(action: ConfigAction, entry: ConfigEntry) -> Line {
    match (action, entry.value) {
        (ConfigAction::Get, Some(value)) => Line::Value {
            key: entry.key,
            value,
        },
        (ConfigAction::Get, None) => Line::Unset(entry.key),
        (ConfigAction::Set, value) => {
            Line::Done(format!("Set {} = {}", entry.key, value.unwrap_or_default()))
        }
        (ConfigAction::Rm, _) => Line::Done(format!("Removed {}", entry.key)),
    }
}

/// Run the config command.
///
/// # Errors
///
/// Returns a malformed-argument error or the store failure.
pub async fn run(app: &AppContext, args: &ConfigArgs) -> Result<()> {
    let entries = cluster_config::config(&app.cluster, &args.target, args.action, &args.keys).await?;
    for entry in entries {
        match line(args.action, entry) {
            Line::Value { key, value } => app.output.kv(&key, &value),
            Line::Unset(key) => app.output.warn(&format!("{key} is not set")),
            Line::Done(message) => app.output.success(&message),
        }
    }
    Ok(())
}
