//! `Backend` adapter that drives the cluster through the `fleetctl` CLI.
//!
//! Component names map to unit names with the platform prefix
//! (`router@2` -> `strata-router@2.service`). A name ending in `@*` is
//! expanded against the registered unit files before any command runs.

use std::path::PathBuf;

use anyhow::{Context, Result};
use futures_util::future::join_all;
use strata_common::{unit_file_name, unit_name};

use crate::application::ports::{Backend, CommandRunner, ProgressReporter};

/// Per-member fleet operation of a batch.
#[derive(Debug, Clone, Copy)]
enum Op {
    Submit,
    Start,
    Stop,
    Destroy,
}

impl Op {
    fn done(self) -> &'static str {
        match self {
            Self::Submit => "installed",
            Self::Start => "started",
            Self::Stop => "stopped",
            Self::Destroy => "uninstalled",
        }
    }
}

/// Production `Backend`: one `fleetctl` process per batch member.
pub struct FleetBackend<R> {
    runner: R,
    fleetctl: String,
    tunnel: Option<String>,
    units_dir: PathBuf,
}

impl<R: CommandRunner> FleetBackend<R> {
    /// `units_dir` holds the unit files that `create` submits.
    #[must_use]
    pub fn new(runner: R, fleetctl: String, tunnel: Option<String>, units_dir: PathBuf) -> Self {
        Self {
            runner,
            fleetctl,
            tunnel,
            units_dir,
        }
    }

    fn args<'a>(&'a self, rest: &[&'a str]) -> Vec<&'a str> {
        let mut args = Vec::with_capacity(rest.len() + 2);
        if let Some(tunnel) = &self.tunnel {
            args.extend(["--tunnel", tunnel.as_str()]);
        }
        args.extend_from_slice(rest);
        args
    }

    /// Run a fleetctl command and return its stdout, failing on non-zero exit.
    async fn capture(&self, rest: &[&str]) -> Result<String> {
        let args = self.args(rest);
        let output = self.runner.run(&self.fleetctl, &args).await?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!("{} {} failed: {}", self.fleetctl, rest.join(" "), stderr.trim());
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    /// Run a fleetctl command attached to the terminal.
    async fn interactive(&self, rest: &[&str]) -> Result<()> {
        let args = self.args(rest);
        let status = self.runner.run_status(&self.fleetctl, &args).await?;
        if !status.success() {
            anyhow::bail!("{} {} exited with {status}", self.fleetctl, rest.join(" "));
        }
        Ok(())
    }

    /// Registered unit file names.
    async fn unit_files(&self) -> Result<Vec<String>> {
        let out = self
            .capture(&["list-unit-files", "--no-legend", "--fields=unit"])
            .await
            .context("listing unit files")?;
        Ok(out
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect())
    }

    /// Registered instance indices of a template component, ascending.
    async fn instances(&self, component: &str) -> Result<Vec<u32>> {
        let prefix = unit_name(&format!("{component}@"));
        let mut found: Vec<u32> = self
            .unit_files()
            .await?
            .iter()
            .filter_map(|unit| unit.strip_prefix(&prefix)?.strip_suffix(".service")?.parse().ok())
            .collect();
        found.sort_unstable();
        found.dedup();
        Ok(found)
    }

    /// Unit names for `targets`, with every `@*` replaced by the registered
    /// instances of that template.
    async fn expand(&self, targets: &[String], out: &dyn ProgressReporter) -> Result<Vec<String>> {
        if !targets.iter().any(|t| t.ends_with("@*")) {
            return Ok(targets.iter().map(|t| unit_file_name(t)).collect());
        }
        let registered = self.unit_files().await?;
        let mut units = Vec::new();
        for target in targets {
            let Some(template) = target.strip_suffix("@*") else {
                units.push(unit_file_name(target));
                continue;
            };
            let prefix = unit_name(&format!("{template}@"));
            let before = units.len();
            units.extend(
                registered
                    .iter()
                    .filter(|u| u.starts_with(&prefix) && !u.starts_with(&format!("{prefix}.")))
                    .cloned(),
            );
            if units.len() == before {
                out.warn(&format!("No registered units match {target}"));
            }
        }
        Ok(units)
    }

    async fn member(&self, op: Op, unit: &str) -> Result<()> {
        match op {
            Op::Submit => {
                let path = self.units_dir.join(unit).to_string_lossy().into_owned();
                self.capture(&["submit", path.as_str()]).await?;
            }
            // Blocks until the unit reaches its target state; the runner
            // timeout bounds the wait.
            Op::Start => {
                self.capture(&["start", unit]).await?;
            }
            Op::Stop => {
                self.capture(&["stop", unit]).await?;
            }
            Op::Destroy => {
                self.capture(&["destroy", unit]).await?;
            }
        }
        Ok(())
    }

    /// Apply `op` to every unit concurrently. Resolves once all members have
    /// finished and returns the first failure, if any.
    async fn batch(&self, op: Op, targets: &[String], out: &dyn ProgressReporter) -> Result<()> {
        let units = self.expand(targets, out).await?;
        let results = join_all(units.iter().map(|unit| async move {
            let result = self.member(op, unit).await;
            match &result {
                Ok(()) => out.success(&format!("{unit}: {}", op.done())),
                Err(e) => out.warn(&format!("{unit}: {e}")),
            }
            result
        }))
        .await;
        results.into_iter().collect()
    }
}

impl<R: CommandRunner> Backend for FleetBackend<R> {
    async fn create(&self, targets: &[String], out: &dyn ProgressReporter) -> Result<()> {
        self.batch(Op::Submit, targets, out).await
    }

    async fn start(&self, targets: &[String], out: &dyn ProgressReporter) -> Result<()> {
        self.batch(Op::Start, targets, out).await
    }

    async fn stop(&self, targets: &[String], out: &dyn ProgressReporter) -> Result<()> {
        self.batch(Op::Stop, targets, out).await
    }

    async fn destroy(&self, targets: &[String], out: &dyn ProgressReporter) -> Result<()> {
        self.batch(Op::Destroy, targets, out).await
    }

    async fn scale(&self, component: &str, count: u32, out: &dyn ProgressReporter) -> Result<()> {
        let mut existing = self.instances(component).await?;
        let wanted = usize::try_from(count).context("instance count does not fit")?;
        let name = |i: &u32| format!("{component}@{i}");

        if wanted > existing.len() {
            let added: Vec<String> = (1u32..)
                .filter(|i| !existing.contains(i))
                .take(wanted - existing.len())
                .map(|i| name(&i))
                .collect();
            self.create(&added, out).await?;
            self.start(&added, out).await?;
        } else if wanted < existing.len() {
            let removed: Vec<String> = existing.split_off(wanted).iter().map(name).collect();
            self.stop(&removed, out).await?;
            self.destroy(&removed, out).await?;
        } else {
            out.success(&format!("{component} already has {count} instances"));
        }
        Ok(())
    }

    async fn status(&self, target: &str) -> Result<()> {
        let unit = unit_file_name(target);
        self.interactive(&["status", unit.as_str()]).await
    }

    async fn journal(&self, target: &str) -> Result<()> {
        let unit = unit_file_name(target);
        self.interactive(&["journal", unit.as_str()]).await
    }

    async fn list_units(&self) -> Result<()> {
        self.interactive(&["list-units"]).await
    }

    async fn list_unit_files(&self) -> Result<()> {
        self.interactive(&["list-unit-files"]).await
    }

    async fn ssh(&self, target: &str) -> Result<()> {
        let unit = unit_file_name(target);
        self.interactive(&["ssh", unit.as_str()]).await
    }
}
