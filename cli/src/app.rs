//! Application context: unified state passed to every command handler.
//!
//! `AppContext` wires the settings file, CLI flags, and the concrete
//! adapters together once per invocation. Command handlers only ever see
//! `&AppContext`.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;

use crate::application::ports::SettingsStore;
use crate::application::services::lifecycle::Orchestrator;
use crate::domain::config::StrataSettings;
use crate::infra::command_runner::TokioCommandRunner;
use crate::infra::config::YamlSettingsStore;
use crate::infra::etcd::EtcdConfig;
use crate::infra::fleet::FleetBackend;
use crate::infra::fs::resolve_path;
use crate::output::{OutputContext, TerminalReporter};

/// Production backend type.
pub type ClusterBackend = FleetBackend<TokioCommandRunner>;

/// Production config store type.
pub type ClusterStore = EtcdConfig<TokioCommandRunner>;

/// Output rendering flags.
pub struct OutputFlags {
    /// Disable ANSI color output.
    pub no_color: bool,
    /// Suppress non-error output.
    pub quiet: bool,
}

/// Flags passed from the top-level CLI to `AppContext::new`.
pub struct AppFlags {
    /// Output rendering options.
    pub output: OutputFlags,
    /// SSH tunnel host; overrides the settings file.
    pub tunnel: Option<String>,
}

/// Unified application context passed to every command handler.
pub struct AppContext {
    /// Terminal output context (colors, quiet mode).
    pub output: OutputContext,
    /// Settings loaded from `~/.strata/settings.yaml`.
    pub settings: StrataSettings,
    /// Cluster backend, shared with detached warm-up tasks.
    pub backend: Arc<ClusterBackend>,
    /// Cluster configuration store.
    pub cluster: ClusterStore,
}

impl AppContext {
    /// Construct an `AppContext` from top-level CLI flags.
    ///
    /// # Errors
    ///
    /// Returns an error if the settings file exists but cannot be parsed, or
    /// the unit directory cannot be resolved.
    pub fn new(flags: AppFlags) -> Result<Self> {
        let settings = YamlSettingsStore.load()?;
        tracing::debug!(?settings, "loaded settings");

        let timeout = Duration::from_secs(settings.backend.timeout_secs);
        let tunnel = flags.tunnel.or_else(|| settings.backend.tunnel.clone());
        let units_dir = resolve_path(&settings.units.dir)?;

        let backend = FleetBackend::new(
            TokioCommandRunner::new(timeout),
            settings.backend.fleetctl.clone(),
            tunnel,
            units_dir,
        );
        let cluster = EtcdConfig::new(
            TokioCommandRunner::new(timeout),
            settings.backend.etcdctl.clone(),
            settings.backend.etcd_peers.clone(),
        );

        Ok(Self {
            output: OutputContext::new(flags.output.no_color, flags.output.quiet),
            settings,
            backend: Arc::new(backend),
            cluster,
        })
    }

    /// Progress reporter writing to this context's terminal.
    #[must_use]
    pub fn reporter(&self) -> TerminalReporter<'_> {
        TerminalReporter::new(&self.output)
    }

    /// Orchestrator over the production backend and config store.
    #[must_use]
    pub fn orchestrator<'a>(
        &'a self,
        reporter: &'a TerminalReporter<'a>,
    ) -> Orchestrator<'a, ClusterBackend, ClusterStore, TerminalReporter<'a>> {
        Orchestrator {
            backend: &self.backend,
            cluster: &self.cluster,
            reporter,
        }
    }

    /// Default destination of `refresh-units`.
    ///
    /// # Errors
    ///
    /// Returns an error if the path starts with `~` and there is no home
    /// directory.
    pub fn units_dir(&self) -> Result<PathBuf> {
        resolve_path(&self.settings.units.dir)
    }
}
