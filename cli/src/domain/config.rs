//! Local settings schema and cluster config verb parsing.
//!
//! Pure functions only: no I/O, no async, no filesystem access.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::error::ConfigError;

// ── Constants ────────────────────────────────────────────────────────────────

/// Default location of downloaded unit definitions.
pub const DEFAULT_UNITS_DIR: &str = "~/.strata/units";

/// Default release tag fetched by `refresh-units`.
pub const DEFAULT_UNITS_TAG: &str = "master";

/// Default unit source; `{tag}` and `{unit}` are substituted per unit.
pub const DEFAULT_UNITS_URL: &str =
    "https://raw.githubusercontent.com/strata-platform/strata/{tag}/units/{unit}.service";

// ── Settings schema ──────────────────────────────────────────────────────────

/// Top-level settings stored in `~/.strata/settings.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct StrataSettings {
    /// Cluster backend and config store access.
    pub backend: BackendSettings,
    /// Unit definition source and destination.
    pub units: UnitSettings,
}

/// How the control tool reaches the cluster.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct BackendSettings {
    /// `fleetctl` binary.
    pub fleetctl: String,
    /// `etcdctl` binary.
    pub etcdctl: String,
    /// SSH tunnel host passed to `fleetctl --tunnel`.
    pub tunnel: Option<String>,
    /// Comma-separated etcd endpoints passed to `etcdctl --peers`.
    pub etcd_peers: Option<String>,
    /// Per-command timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self {
            fleetctl: "fleetctl".to_string(),
            etcdctl: "etcdctl".to_string(),
            tunnel: None,
            etcd_peers: None,
            timeout_secs: 120,
        }
    }
}

/// Where unit definitions come from and where they are written.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct UnitSettings {
    pub dir: String,
    pub tag: String,
    pub url: String,
}

impl Default for UnitSettings {
    fn default() -> Self {
        Self {
            dir: DEFAULT_UNITS_DIR.to_string(),
            tag: DEFAULT_UNITS_TAG.to_string(),
            url: DEFAULT_UNITS_URL.to_string(),
        }
    }
}

// ── Cluster config verb ──────────────────────────────────────────────────────

/// Action of `stratactl config <target> <action> <keys>...`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigAction {
    Get,
    Set,
    Rm,
}

impl FromStr for ConfigAction {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "get" => Ok(Self::Get),
            "set" => Ok(Self::Set),
            "rm" => Ok(Self::Rm),
            other => Err(ConfigError::UnknownAction(other.to_string())),
        }
    }
}

/// Split `key=value`. The value may itself contain `=`.
///
/// # Errors
///
/// Returns [`ConfigError::MalformedAssignment`] when there is no `=` or the
/// key is empty.
pub fn parse_assignment(arg: &str) -> Result<(&str, &str), ConfigError> {
    match arg.split_once('=') {
        Some((key, value)) if !key.is_empty() => Ok((key, value)),
        _ => Err(ConfigError::MalformedAssignment(arg.to_string())),
    }
}

// ── Unit tests ───────────────────────────────────────────────────────────────
