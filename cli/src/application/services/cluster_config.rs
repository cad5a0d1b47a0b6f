//! Application service: `config <target> <get|set|rm> <keys>...`.
//!
//! Keys are relative to the target's namespace: `config platform get domain`
//! reads `/strata/platform/domain`.

use anyhow::Result;
use strata_common::key_path;

use crate::application::ports::ClusterConfig;
use crate::domain::config::{ConfigAction, parse_assignment};
use crate::domain::error::ConfigError;

/// One key touched by a config action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigEntry {
    /// Key as the caller named it, without the namespace.
    pub key: String,
    /// Value read or written; `None` for a missing key or a removal.
    pub value: Option<String>,
}

/// Apply `action` to `keys` under `target`'s namespace.
///
/// For `set`, every argument is parsed as `key=value` before the first write,
/// so a malformed assignment writes nothing. Otherwise keys are processed in
/// order and the first store failure aborts the rest.
///
/// # Errors
///
/// Returns [`ConfigError::MalformedAssignment`] for a bad `set` argument,
/// [`ConfigError::EmptyKey`] for an empty key, or the store error.
pub async fn config(
    cluster: &impl ClusterConfig,
    target: &str,
    action: ConfigAction,
    keys: &[String],
) -> Result<Vec<ConfigEntry>> {
    let mut entries = Vec::with_capacity(keys.len());
    match action {
        ConfigAction::Get => {
            for key in keys {
                let key = checked_key(key)?;
                let value = cluster.get(&key_path(target, key)).await?;
                entries.push(ConfigEntry {
                    key: key.to_string(),
                    value,
                });
            }
        }
        ConfigAction::Set => {
            let assignments = keys
                .iter()
                .map(|arg| parse_assignment(arg))
                .collect::<Result<Vec<_>, _>>()?;
            for (key, value) in assignments {
                cluster.set(&key_path(target, key), value).await?;
                entries.push(ConfigEntry {
                    key: key.to_string(),
                    value: Some(value.to_string()),
                });
            }
        }
        ConfigAction::Rm => {
            for key in keys {
                let key = checked_key(key)?;
                cluster.remove(&key_path(target, key)).await?;
                entries.push(ConfigEntry {
                    key: key.to_string(),
                    value: None,
                });
            }
        }
    }
    Ok(entries)
}

fn checked_key(key: &str) -> Result<&str, ConfigError> {
    if key.is_empty() {
        return Err(ConfigError::EmptyKey);
    }
    Ok(key)
}
