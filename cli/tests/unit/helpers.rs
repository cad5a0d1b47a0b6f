//! Shared test helpers: recording fakes for every application port.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Mutex;

use anyhow::Result;
use strata_cli::application::ports::{Backend, ClusterConfig, ProgressReporter, UnitSource};

// ── Backend ──────────────────────────────────────────────────────────────────

/// One observable moment of a backend call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Begin(&'static str, Vec<String>),
    End(&'static str, Vec<String>),
}

type FailWhen = dyn Fn(&str, &[String]) -> bool + Send + Sync;

/// Backend that records when each batch begins and ends.
///
/// Every batch yields to the scheduler between `Begin` and `End`, so any
/// batch issued before its predecessor resolved would interleave with it.
pub struct RecordingBackend {
    events: Mutex<Vec<Event>>,
    fail_when: Box<FailWhen>,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::failing_when(|_, _| false)
    }

    /// Fail every call for which `pred(op, targets)` holds.
    pub fn failing_when(pred: impl Fn(&str, &[String]) -> bool + Send + Sync + 'static) -> Self {
        Self {
            events: Mutex::new(Vec::new()),
            fail_when: Box::new(pred),
        }
    }

    /// Fail `op` on any batch containing `name`.
    pub fn failing_on(op: &'static str, name: &'static str) -> Self {
        Self::failing_when(move |o, targets| o == op && targets.iter().any(|t| t == name))
    }

    pub fn events(&self) -> Vec<Event> {
        self.events.lock().expect("mutex poisoned").clone()
    }

    /// Batches in the order they began, for one op.
    pub fn batches(&self, op: &str) -> Vec<Vec<String>> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Begin(o, t) if o == op => Some(t),
                _ => None,
            })
            .collect()
    }

    /// Every batch that began, in order, regardless of op.
    pub fn all_batches(&self) -> Vec<(&'static str, Vec<String>)> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                Event::Begin(o, t) => Some((o, t)),
                Event::End(..) => None,
            })
            .collect()
    }

    async fn record(&self, op: &'static str, targets: &[String]) -> Result<()> {
        let targets = targets.to_vec();
        self.events
            .lock()
            .expect("mutex poisoned")
            .push(Event::Begin(op, targets.clone()));
        for _ in 0..3 {
            tokio::task::yield_now().await;
        }
        let fail = (self.fail_when)(op, &targets);
        self.events
            .lock()
            .expect("mutex poisoned")
            .push(Event::End(op, targets.clone()));
        if fail {
            anyhow::bail!("{op} failed for {}", targets.join(","));
        }
        Ok(())
    }
}

impl Backend for RecordingBackend {
    async fn create(&self, targets: &[String], _: &dyn ProgressReporter) -> Result<()> {
        self.record("create", targets).await
    }
    async fn start(&self, targets: &[String], _: &dyn ProgressReporter) -> Result<()> {
        self.record("start", targets).await
    }
    async fn stop(&self, targets: &[String], _: &dyn ProgressReporter) -> Result<()> {
        self.record("stop", targets).await
    }
    async fn destroy(&self, targets: &[String], _: &dyn ProgressReporter) -> Result<()> {
        self.record("destroy", targets).await
    }
    async fn scale(&self, component: &str, count: u32, _: &dyn ProgressReporter) -> Result<()> {
        self.record("scale", &[format!("{component}={count}")]).await
    }
    async fn status(&self, target: &str) -> Result<()> {
        self.record("status", &[target.to_string()]).await
    }
    async fn journal(&self, target: &str) -> Result<()> {
        self.record("journal", &[target.to_string()]).await
    }
    async fn list_units(&self) -> Result<()> {
        self.record("list-units", &[]).await
    }
    async fn list_unit_files(&self) -> Result<()> {
        self.record("list-unit-files", &[]).await
    }
    async fn ssh(&self, target: &str) -> Result<()> {
        self.record("ssh", &[target.to_string()]).await
    }
}

// ── Cluster config ───────────────────────────────────────────────────────────

/// In-memory key/value store.
#[derive(Default)]
pub struct MemoryConfig {
    values: Mutex<HashMap<String, String>>,
}

impl MemoryConfig {
    pub fn with(pairs: &[(&str, &str)]) -> Self {
        let store = Self::default();
        {
            let mut values = store.values.lock().expect("mutex poisoned");
            for (k, v) in pairs {
                values.insert((*k).to_string(), (*v).to_string());
            }
        }
        store
    }

    /// Store with the platform domain set, as required before install/start.
    pub fn with_domain() -> Self {
        Self::with(&[
            ("/strata/platform/domain", "example.com"),
            ("/strata/platform/sshPrivateKey", "/home/core/.ssh/id_rsa"),
        ])
    }

    pub fn value(&self, key: &str) -> Option<String> {
        self.values.lock().expect("mutex poisoned").get(key).cloned()
    }
}

impl ClusterConfig for MemoryConfig {
    async fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.value(key))
    }
    async fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values
            .lock()
            .expect("mutex poisoned")
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
    async fn remove(&self, key: &str) -> Result<()> {
        match self.values.lock().expect("mutex poisoned").remove(key) {
            Some(_) => Ok(()),
            None => anyhow::bail!("Key not found: {key}"),
        }
    }
}

// ── Reporter ─────────────────────────────────────────────────────────────────

/// Reporter that keeps every line, prefixed with its stream.
#[derive(Default)]
pub struct RecordingReporter {
    lines: Mutex<Vec<String>>,
}

impl RecordingReporter {
    pub fn lines(&self) -> Vec<String> {
        self.lines.lock().expect("mutex poisoned").clone()
    }

    pub fn steps(&self) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter_map(|l| l.strip_prefix("step:").map(str::to_string))
            .collect()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.lines()
            .into_iter()
            .filter_map(|l| l.strip_prefix("warn:").map(str::to_string))
            .collect()
    }

    fn push(&self, line: String) {
        self.lines.lock().expect("mutex poisoned").push(line);
    }
}

impl ProgressReporter for RecordingReporter {
    fn step(&self, message: &str) {
        self.push(format!("step:{message}"));
    }
    fn success(&self, message: &str) {
        self.push(format!("ok:{message}"));
    }
    fn warn(&self, message: &str) {
        self.push(format!("warn:{message}"));
    }
}

// ── Unit source ──────────────────────────────────────────────────────────────

/// Serves `body-of-<url>` for every URL, except those containing
/// `fail_fragment`, which fail with `404 Not Found`.
pub struct FakeUnitSource {
    pub fail_fragment: Option<&'static str>,
    pub requested: Mutex<Vec<String>>,
}

impl FakeUnitSource {
    pub fn ok() -> Self {
        Self {
            fail_fragment: None,
            requested: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_on(fragment: &'static str) -> Self {
        Self {
            fail_fragment: Some(fragment),
            requested: Mutex::new(Vec::new()),
        }
    }
}

impl UnitSource for FakeUnitSource {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        self.requested
            .lock()
            .expect("mutex poisoned")
            .push(url.to_string());
        if self.fail_fragment.is_some_and(|f| url.contains(f)) {
            anyhow::bail!("404 Not Found");
        }
        Ok(format!("body-of-{url}").into_bytes())
    }
}

// ── Misc ─────────────────────────────────────────────────────────────────────

pub fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_string()).collect()
}

/// Let detached tasks on the current-thread runtime run to completion.
pub async fn settle() {
    for _ in 0..50 {
        tokio::task::yield_now().await;
    }
}
