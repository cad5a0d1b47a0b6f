//! Target lists and the reserved topology keywords.

use crate::domain::error::TargetError;
use crate::domain::topology::TopologyMode;

/// Keyword for every platform component.
pub const PLATFORM: &str = "platform";
/// Keyword for every platform component except `store-*`, `database`, and `logger`.
pub const STATELESS_PLATFORM: &str = "stateless-platform";
/// Keyword for the swarm management units.
pub const SWARM: &str = "swarm";

/// A whole-cluster shortcut that expands to a fixed plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedTopology {
    Platform,
    StatelessPlatform,
    Swarm,
}

impl NamedTopology {
    fn from_keyword(word: &str) -> Option<Self> {
        match word {
            PLATFORM => Some(Self::Platform),
            STATELESS_PLATFORM => Some(Self::StatelessPlatform),
            SWARM => Some(Self::Swarm),
            _ => None,
        }
    }

    /// Topology mode of a platform shortcut; `None` for swarm.
    #[must_use]
    pub fn platform_mode(self) -> Option<TopologyMode> {
        match self {
            Self::Platform => Some(TopologyMode::Full),
            Self::StatelessPlatform => Some(TopologyMode::Stateless),
            Self::Swarm => None,
        }
    }
}

/// What a lifecycle verb acts on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Targets {
    /// Caller-named components, acted on as one batch.
    Literal(Vec<String>),
    /// A reserved keyword naming a whole topology.
    Topology(NamedTopology),
}

impl Targets {
    /// Resolve raw arguments once, at the API boundary.
    ///
    /// Only a list of exactly one reserved keyword selects a topology; a
    /// keyword mixed with other names is treated as a literal name.
    ///
    /// # Errors
    ///
    /// Returns [`TargetError::Empty`] for an empty list.
    pub fn resolve(args: Vec<String>) -> Result<Self, TargetError> {
        match args.as_slice() {
            [] => Err(TargetError::Empty),
            [only] => Ok(NamedTopology::from_keyword(only)
                .map_or_else(|| Self::Literal(args.clone()), Self::Topology)),
            _ => Ok(Self::Literal(args)),
        }
    }
}
