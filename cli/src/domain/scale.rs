//! Scale targets: `<component>=<count>` pairs and the scalability policy.
//!
//! Pure functions only: no I/O, no async.

use std::sync::LazyLock;

use regex::Regex;

use crate::domain::error::ScaleError;

/// Name fragments of the components that may change replica count.
pub const SCALABLE_KINDS: &[&str] = &["router", "registry", "store-gateway"];

#[allow(clippy::expect_used)] // Pattern is a compile-time constant
static SCALE_TARGET: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([a-z-]+)=([0-9]+)$").expect("valid scale pattern"));

/// A parsed scale request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaleTarget {
    pub component: String,
    pub count: u32,
}

impl ScaleTarget {
    /// Parse `"router=3"` into `("router", 3)`.
    ///
    /// # Errors
    ///
    /// Returns [`ScaleError::Parse`] when the target does not match
    /// `<component>=<count>`, or [`ScaleError::CountOutOfRange`] when the
    /// count does not fit.
    pub fn parse(target: &str) -> Result<Self, ScaleError> {
        let caps = SCALE_TARGET
            .captures(target)
            .ok_or_else(|| ScaleError::Parse(target.to_string()))?;
        let count = caps[2]
            .parse::<u32>()
            .map_err(|_| ScaleError::CountOutOfRange {
                target: target.to_string(),
            })?;
        Ok(Self {
            component: caps[1].to_string(),
            count,
        })
    }

    /// Parse and reject components outside [`SCALABLE_KINDS`].
    ///
    /// # Errors
    ///
    /// Returns the parse error, or [`ScaleError::NotScalable`].
    pub fn parse_scalable(target: &str) -> Result<Self, ScaleError> {
        let parsed = Self::parse(target)?;
        if !is_scalable(&parsed.component) {
            return Err(ScaleError::NotScalable(parsed.component));
        }
        Ok(parsed)
    }
}

/// Whether `component` belongs to a kind that can be scaled.
#[must_use]
pub fn is_scalable(component: &str) -> bool {
    SCALABLE_KINDS.iter().any(|kind| component.contains(kind))
}
