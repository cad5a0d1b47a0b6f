//! Platform topology: tiers, batches, and the per-verb plans.
//!
//! A plan is data only. The lifecycle service walks it stage by stage,
//! awaiting every batch before issuing the next one.

/// Component membership profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopologyMode {
    /// Every component.
    Full,
    /// No storage tier, no `database`, no `logger`.
    Stateless,
}

impl TopologyMode {
    /// Whether `component` takes part in this mode.
    #[must_use]
    pub fn includes(self, component: &str) -> bool {
        match self {
            Self::Full => true,
            Self::Stateless => !is_stateful(component),
        }
    }
}

/// Components that hold platform state: `store-*`, `database`, `logger`.
#[must_use]
pub fn is_stateful(component: &str) -> bool {
    let kind = component.split('@').next().unwrap_or(component);
    kind.starts_with("store-") || kind == "database" || kind == "logger"
}

/// Topology tiers in startup order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Tier {
    Storage,
    Logging,
    ControlPlane,
    DataPlane,
    RoutingMesh,
}

impl Tier {
    /// Progress line announced when the tier begins.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Storage => "Storage subsystem...",
            Self::Logging => "Logging subsystem...",
            Self::ControlPlane => "Control plane...",
            Self::DataPlane => "Data plane...",
            Self::RoutingMesh => "Routing mesh...",
        }
    }
}

/// Backend operation a plan applies to each batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Install,
    Start,
    Stop,
    Uninstall,
}

/// Component names acted on concurrently, with one barrier at the end.
pub type Batch = Vec<String>;

/// One tier of a plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stage {
    pub tier: Tier,
    /// Best-effort batch started detached before the foreground batches.
    pub warm_up: Option<Batch>,
    /// Foreground batches, each awaited before the next.
    pub batches: Vec<Batch>,
}

impl Stage {
    fn new(tier: Tier, batches: &[&[&str]]) -> Self {
        Self {
            tier,
            warm_up: None,
            batches: batches.iter().map(|b| batch(b)).collect(),
        }
    }

    fn with_warm_up(mut self, names: &[&str]) -> Self {
        self.warm_up = Some(batch(names));
        self
    }

    /// Drop members excluded by `mode`, then any batch left empty.
    fn restrict(mut self, mode: TopologyMode) -> Self {
        let keep = |b: Batch| -> Option<Batch> {
            let b: Batch = b.into_iter().filter(|c| mode.includes(c)).collect();
            (!b.is_empty()).then_some(b)
        };
        self.warm_up = self.warm_up.and_then(keep);
        self.batches = self.batches.into_iter().filter_map(keep).collect();
        self
    }

    /// True when nothing in the tier runs (stateless storage).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.warm_up.is_none() && self.batches.is_empty()
    }
}

/// Ordered stages for one verb over the whole platform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Plan {
    pub verb: Verb,
    pub stages: Vec<Stage>,
}

impl Plan {
    /// Plan for `verb` over the platform in `mode`.
    ///
    /// Every mode yields the same tiers in the same order; only membership
    /// differs.
    #[must_use]
    pub fn platform(verb: Verb, mode: TopologyMode) -> Self {
        let stages = match verb {
            Verb::Install => install_stages(),
            Verb::Start => start_stages(),
            Verb::Stop | Verb::Uninstall => teardown_stages(),
        };
        Self {
            verb,
            stages: stages.into_iter().map(|s| s.restrict(mode)).collect(),
        }
    }

    /// Tiers in execution order.
    #[must_use]
    pub fn tiers(&self) -> Vec<Tier> {
        self.stages.iter().map(|s| s.tier).collect()
    }

    /// Every foreground batch in execution order.
    pub fn batches(&self) -> impl Iterator<Item = &Batch> {
        self.stages.iter().flat_map(|s| s.batches.iter())
    }
}

/// The swarm shortcut: one small, non-tiered batch for every verb.
#[must_use]
pub fn swarm_batch() -> Batch {
    batch(&["swarm-manager", "swarm-node"])
}

fn batch(names: &[&str]) -> Batch {
    names.iter().map(|n| (*n).to_string()).collect()
}

fn install_stages() -> Vec<Stage> {
    vec![
        Stage::new(
            Tier::Storage,
            &[&[
                "store-daemon",
                "store-monitor",
                "store-metadata",
                "store-volume",
                "store-gateway@1",
            ]],
        ),
        Stage::new(Tier::Logging, &[&["logger", "logspout"]]),
        Stage::new(
            Tier::ControlPlane,
            &[&["database", "registry@1", "controller", "builder"]],
        ),
        Stage::new(Tier::DataPlane, &[&["publisher"]]),
        Stage::new(Tier::RoutingMesh, &[&["router@1", "router@2", "router@3"]]),
    ]
}

fn start_stages() -> Vec<Stage> {
    vec![
        // Gateway comes up before volume so volume mounts find a
        // metadata-backed gateway.
        Stage::new(
            Tier::Storage,
            &[
                &["store-monitor"],
                &["store-daemon"],
                &["store-metadata"],
                &["store-gateway@*"],
                &["store-volume"],
            ],
        ),
        // Logging first so it captures the output of everything after it.
        Stage::new(Tier::Logging, &[&["logger"], &["logspout"]]),
        // The warm-up repeats foreground names; backend start must be
        // idempotent for the same target.
        Stage::new(
            Tier::ControlPlane,
            &[&["database", "registry@*", "controller"], &["builder"]],
        )
        .with_warm_up(&[
            "database",
            "registry@*",
            "controller",
            "builder",
            "publisher",
            "router@*",
        ]),
        Stage::new(Tier::DataPlane, &[&["publisher"]]),
        Stage::new(Tier::RoutingMesh, &[&["router@*"]]),
    ]
}

fn teardown_stages() -> Vec<Stage> {
    vec![
        Stage::new(Tier::RoutingMesh, &[&["router@*"]]),
        Stage::new(Tier::DataPlane, &[&["publisher"]]),
        Stage::new(
            Tier::ControlPlane,
            &[&["controller", "builder", "database", "registry@*"]],
        ),
        Stage::new(Tier::Logging, &[&["logger", "logspout"]]),
        Stage::new(
            Tier::Storage,
            &[
                &["store-volume", "store-gateway@*"],
                &["store-metadata"],
                &["store-daemon"],
                &["store-monitor"],
            ],
        ),
    ]
}
