//! Application service: the tiered lifecycle orchestrator.
//!
//! Imports only from `crate::domain` and `crate::application::ports`.
//! All I/O is routed through the injected backend, config store, and
//! reporter.

use std::sync::Arc;

use anyhow::Result;
use tokio::task::JoinHandle;

use crate::application::ports::{Backend, ClusterConfig, DiscardReporter, ProgressReporter};
use crate::application::services::preflight;
use crate::domain::error::TargetError;
use crate::domain::scale::ScaleTarget;
use crate::domain::target::Targets;
use crate::domain::topology::{Batch, Plan, Verb, swarm_batch};

/// Drives lifecycle verbs against a backend.
///
/// Holds no state of its own; construct one per invocation. Independent
/// orchestrators may run concurrently since output goes only to the
/// reporter they were given.
pub struct Orchestrator<'a, B, C, R> {
    pub backend: &'a Arc<B>,
    pub cluster: &'a C,
    pub reporter: &'a R,
}

impl<B, C, R> Orchestrator<'_, B, C, R>
where
    B: Backend + 'static,
    C: ClusterConfig,
    R: ProgressReporter,
{
    /// Register unit definitions.
    ///
    /// # Errors
    ///
    /// Returns the pre-flight error for platform targets, or the first
    /// failing batch.
    pub async fn install(&self, targets: &Targets) -> Result<()> {
        self.dispatch(Verb::Install, targets).await
    }

    /// Unregister unit definitions, tiers in reverse order.
    ///
    /// # Errors
    ///
    /// Returns the first failing batch.
    pub async fn uninstall(&self, targets: &Targets) -> Result<()> {
        self.dispatch(Verb::Uninstall, targets).await
    }

    /// Activate units.
    ///
    /// # Errors
    ///
    /// Returns the pre-flight error for platform targets, or the first
    /// failing batch. Warm-up failures are never returned.
    pub async fn start(&self, targets: &Targets) -> Result<()> {
        self.dispatch(Verb::Start, targets).await
    }

    /// Deactivate units, tiers in reverse order.
    ///
    /// # Errors
    ///
    /// Returns the first failing batch.
    pub async fn stop(&self, targets: &Targets) -> Result<()> {
        self.dispatch(Verb::Stop, targets).await
    }

    /// Stop, then start. Start is never attempted if stop failed.
    ///
    /// # Errors
    ///
    /// Returns the stop error or the start error.
    pub async fn restart(&self, targets: &Targets) -> Result<()> {
        self.stop(targets).await?;
        self.start(targets).await
    }

    /// Scale each `<component>=<count>` target, one after another.
    ///
    /// Every target is parsed and policy-checked before the first backend
    /// call, so a bad target anywhere in the list scales nothing.
    ///
    /// # Errors
    ///
    /// Returns a parse or policy error before any backend call, or the
    /// first backend scale failure.
    pub async fn scale(&self, targets: &[String]) -> Result<()> {
        if targets.is_empty() {
            return Err(TargetError::Empty.into());
        }
        let requests = targets
            .iter()
            .map(|t| ScaleTarget::parse_scalable(t))
            .collect::<Result<Vec<_>, _>>()?;

        for request in &requests {
            self.reporter
                .step(&format!("Scaling {} to {}...", request.component, request.count));
            self.backend
                .scale(&request.component, request.count, self.reporter)
                .await?;
        }
        Ok(())
    }

    async fn dispatch(&self, verb: Verb, targets: &Targets) -> Result<()> {
        match targets {
            Targets::Literal(names) => self.apply(verb, names).await,
            Targets::Topology(topology) => match topology.platform_mode() {
                None => self.apply(verb, &swarm_batch()).await,
                Some(mode) => {
                    if matches!(verb, Verb::Install | Verb::Start) {
                        preflight::check_required_keys(self.cluster, self.reporter).await?;
                    }
                    self.run_plan(&Plan::platform(verb, mode)).await
                }
            },
        }
    }

    async fn run_plan(&self, plan: &Plan) -> Result<()> {
        for stage in &plan.stages {
            if stage.is_empty() {
                continue;
            }
            if let Some(batch) = &stage.warm_up {
                WarmUp::spawn(Arc::clone(self.backend), plan.verb, batch.clone()).detach();
            }
            self.reporter.step(stage.tier.label());
            for batch in &stage.batches {
                tracing::debug!(tier = ?stage.tier, ?batch, "applying batch");
                self.apply(plan.verb, batch).await?;
            }
        }
        Ok(())
    }

    async fn apply(&self, verb: Verb, batch: &[String]) -> Result<()> {
        apply_batch(self.backend.as_ref(), verb, batch, self.reporter).await
    }
}

async fn apply_batch<B: Backend>(
    backend: &B,
    verb: Verb,
    batch: &[String],
    out: &dyn ProgressReporter,
) -> Result<()> {
    match verb {
        Verb::Install => backend.create(batch, out).await,
        Verb::Start => backend.start(batch, out).await,
        Verb::Stop => backend.stop(batch, out).await,
        Verb::Uninstall => backend.destroy(batch, out).await,
    }
}

/// A best-effort batch running detached from the caller's barrier.
///
/// Its output goes to [`DiscardReporter`] and its result is dropped after a
/// debug log line: warm-up failures are never surfaced and its completion is
/// never awaited.
#[must_use = "call detach() to let the warm-up run unobserved"]
pub struct WarmUp {
    handle: JoinHandle<()>,
}

impl WarmUp {
    /// Start `batch` on its own task.
    pub fn spawn<B: Backend + 'static>(backend: Arc<B>, verb: Verb, batch: Batch) -> Self {
        let handle = tokio::spawn(async move {
            if let Err(e) = apply_batch(backend.as_ref(), verb, &batch, &DiscardReporter).await {
                tracing::debug!(error = %e, ?batch, "warm-up batch failed, ignoring");
            }
        });
        Self { handle }
    }

    /// Give up the handle; the batch finishes or fails unobserved.
    pub fn detach(self) {
        drop(self.handle);
    }
}
