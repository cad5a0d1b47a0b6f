//! Domain layer: pure business logic, types, and validation.
//!
//! This module has zero imports from `crate::infra`, `crate::commands`,
//! `crate::application`, `tokio`, `std::fs`, `std::process`, or `std::net`.
//! All functions are synchronous and take data in, returning data out.

pub mod config;
pub mod error;
pub mod scale;
pub mod target;
pub mod topology;

pub use config::{ConfigAction, StrataSettings, parse_assignment};
pub use error::{ConfigError, ScaleError, TargetError};
pub use scale::{ScaleTarget, is_scalable};
pub use target::{NamedTopology, Targets};
pub use topology::{Batch, Plan, Stage, Tier, TopologyMode, Verb};
