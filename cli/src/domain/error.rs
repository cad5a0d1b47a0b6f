//! Typed domain error enums.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All error types implement `thiserror::Error` and convert to `anyhow::Error`
//! via the `?` operator.

use thiserror::Error;

// ── Target errors ─────────────────────────────────────────────────────────────

/// Errors raised while resolving a caller's target list.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TargetError {
    #[error("No targets given. Name one or more components, or 'platform'.")]
    Empty,
}

// ── Scale errors ──────────────────────────────────────────────────────────────

/// Errors raised before any scale request reaches the backend.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScaleError {
    #[error("Could not parse: {0}")]
    Parse(String),

    #[error("Could not parse: {target} (count out of range)")]
    CountOutOfRange { target: String },

    #[error("cannot scale {0} component")]
    NotScalable(String),
}

// ── Config errors ─────────────────────────────────────────────────────────────

/// Errors related to cluster configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing platform domain, use:\nstratactl config platform set domain=<your-domain>")]
    MissingDomain,

    #[error("Invalid assignment '{0}': expected key=value")]
    MalformedAssignment(String),

    #[error("Config keys must not be empty")]
    EmptyKey,

    #[error("Unknown config action '{0}'. Valid actions: get, set, rm")]
    UnknownAction(String),
}
