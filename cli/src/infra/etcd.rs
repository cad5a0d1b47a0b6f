//! `ClusterConfig` adapter over the `etcdctl` CLI.

use anyhow::Result;

use crate::application::ports::{ClusterConfig, CommandRunner};

/// Marker `etcdctl get` prints on stderr for an absent key.
const KEY_NOT_FOUND: &str = "Key not found";

/// Production `ClusterConfig` backed by `etcdctl`.
pub struct EtcdConfig<R> {
    runner: R,
    etcdctl: String,
    peers: Option<String>,
}

impl<R: CommandRunner> EtcdConfig<R> {
    #[must_use]
    pub fn new(runner: R, etcdctl: String, peers: Option<String>) -> Self {
        Self {
            runner,
            etcdctl,
            peers,
        }
    }

    fn args<'a>(&'a self, rest: &[&'a str]) -> Vec<&'a str> {
        let mut args = Vec::with_capacity(rest.len() + 2);
        if let Some(peers) = &self.peers {
            args.extend(["--peers", peers.as_str()]);
        }
        args.extend_from_slice(rest);
        args
    }
}

impl<R: CommandRunner> ClusterConfig for EtcdConfig<R> {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        let output = self.runner.run(&self.etcdctl, &self.args(&["get", key])).await?;
        if output.status.success() {
            let value = String::from_utf8_lossy(&output.stdout);
            return Ok(Some(value.trim_end_matches('\n').to_string()));
        }
        let stderr = String::from_utf8_lossy(&output.stderr);
        if stderr.contains(KEY_NOT_FOUND) {
            return Ok(None);
        }
        anyhow::bail!("{} get {key} failed: {}", self.etcdctl, stderr.trim())
    }

    async fn set(&self, key: &str, value: &str) -> Result<()> {
        let output = self
            .runner
            .run(&self.etcdctl, &self.args(&["set", key, value]))
            .await?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!("{} set {key} failed: {}", self.etcdctl, stderr.trim());
        }
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<()> {
        let output = self.runner.run(&self.etcdctl, &self.args(&["rm", key])).await?;
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            anyhow::bail!("{} rm {key} failed: {}", self.etcdctl, stderr.trim());
        }
        Ok(())
    }
}
