//! Port trait definitions for the Application layer.
//!
//! Ports are the interfaces (contracts) that infrastructure must fulfill.
//! This file imports only from `crate::domain`, never from `crate::infra`,
//! `crate::commands`, or `crate::output`.
//!
//! Async ports return `Send` futures so batches can be fanned out and the
//! control-plane warm-up can run on a detached task.

use std::future::Future;
use std::path::{Path, PathBuf};
use std::process::{ExitStatus, Output};

use anyhow::Result;

use crate::domain::StrataSettings;

// ── Progress Reporting Port ───────────────────────────────────────────────────

/// The two output streams threaded through every orchestrator and backend
/// call: progress (`step`, `success`) and diagnostics (`warn`).
pub trait ProgressReporter: Send + Sync {
    /// Emit an in-progress step message.
    fn step(&self, message: &str);
    /// Emit a success message.
    fn success(&self, message: &str);
    /// Emit a diagnostic message.
    fn warn(&self, message: &str);
}

/// Reporter that drops every message.
pub struct DiscardReporter;

impl ProgressReporter for DiscardReporter {
    fn step(&self, _: &str) {}
    fn success(&self, _: &str) {}
    fn warn(&self, _: &str) {}
}

// ── Cluster Backend Port ──────────────────────────────────────────────────────

/// Places and runs units on the cluster.
///
/// Every list-accepting operation treats its targets as one batch: it may
/// act on members concurrently, and its future resolves only once every
/// member has completed or failed. That resolution is the batch barrier.
/// Names ending in `@*` mean "all instances" and are expanded here.
/// `start` must be idempotent for a target that is already running.
pub trait Backend: Send + Sync {
    /// Register unit definitions without starting them.
    fn create(
        &self,
        targets: &[String],
        out: &dyn ProgressReporter,
    ) -> impl Future<Output = Result<()>> + Send;
    /// Activate registered units.
    fn start(
        &self,
        targets: &[String],
        out: &dyn ProgressReporter,
    ) -> impl Future<Output = Result<()>> + Send;
    /// Deactivate running units.
    fn stop(
        &self,
        targets: &[String],
        out: &dyn ProgressReporter,
    ) -> impl Future<Output = Result<()>> + Send;
    /// Unregister unit definitions.
    fn destroy(
        &self,
        targets: &[String],
        out: &dyn ProgressReporter,
    ) -> impl Future<Output = Result<()>> + Send;
    /// Bring `component` to exactly `count` instances.
    fn scale(
        &self,
        component: &str,
        count: u32,
        out: &dyn ProgressReporter,
    ) -> impl Future<Output = Result<()>> + Send;
    /// Print the status of one target.
    fn status(&self, target: &str) -> impl Future<Output = Result<()>> + Send;
    /// Print the journal of one target.
    fn journal(&self, target: &str) -> impl Future<Output = Result<()>> + Send;
    /// Print the installed units.
    fn list_units(&self) -> impl Future<Output = Result<()>> + Send;
    /// Print the registered unit files.
    fn list_unit_files(&self) -> impl Future<Output = Result<()>> + Send;
    /// Open an interactive shell on the machine running `target`.
    fn ssh(&self, target: &str) -> impl Future<Output = Result<()>> + Send;
}

// ── Cluster Configuration Port ────────────────────────────────────────────────

/// Cluster-wide key/value settings. Keys are full paths such as
/// `/strata/platform/domain`.
pub trait ClusterConfig: Send + Sync {
    /// Read a key; `None` when it does not exist.
    fn get(&self, key: &str) -> impl Future<Output = Result<Option<String>>> + Send;
    /// Write a key.
    fn set(&self, key: &str, value: &str) -> impl Future<Output = Result<()>> + Send;
    /// Delete a key.
    fn remove(&self, key: &str) -> impl Future<Output = Result<()>> + Send;

    /// Fail unless `key` exists under `namespace` with a non-empty value.
    fn check_config(
        &self,
        namespace: &str,
        key: &str,
    ) -> impl Future<Output = Result<()>> + Send {
        async move {
            let path = format!("{namespace}{key}");
            match self.get(&path).await? {
                Some(value) if !value.is_empty() => Ok(()),
                _ => anyhow::bail!("{path} is not set"),
            }
        }
    }
}

// ── Unit Definition Port ──────────────────────────────────────────────────────

/// Downloads unit definition files.
pub trait UnitSource: Send + Sync {
    /// Fetch the body at `url`.
    ///
    /// # Errors
    ///
    /// Fails on transport errors and on any status other than 200; the
    /// error names the status.
    fn fetch(&self, url: &str) -> impl Future<Output = Result<Vec<u8>>> + Send;
}

// ── Command Runner Port ───────────────────────────────────────────────────────

/// Abstracts process execution so infrastructure can be swapped or mocked.
pub trait CommandRunner: Send + Sync {
    /// Run a program and capture its output.
    fn run(&self, program: &str, args: &[&str]) -> impl Future<Output = Result<Output>> + Send;
    /// Run a program with inherited stdio and return only its exit status.
    fn run_status(
        &self,
        program: &str,
        args: &[&str],
    ) -> impl Future<Output = Result<ExitStatus>> + Send;
}

// ── Settings and Filesystem Ports ─────────────────────────────────────────────

/// Abstracts loading of the local settings file.
pub trait SettingsStore {
    /// Load settings, falling back to defaults when no file exists.
    fn load(&self) -> Result<StrataSettings>;
    /// Location of the settings file.
    fn path(&self) -> Result<PathBuf>;
}

/// Abstracts raw filesystem writes.
pub trait LocalFs {
    /// Create `path` and all missing parents.
    fn create_dir_all(&self, path: &Path) -> Result<()>;
    /// Write `content` to `path`, replacing any existing file.
    fn write(&self, path: &Path, content: &[u8]) -> Result<()>;
}
