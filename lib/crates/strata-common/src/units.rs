//! Catalog of the unit definitions that make up the platform.

/// Prefix shared by every platform unit name.
pub const UNIT_PREFIX: &str = "strata-";

/// Every unit definition the control tool knows how to fetch.
///
/// Names ending in `@` are templates; instances are addressed as
/// `<name><index>` (for example `strata-router@1`).
pub const UNIT_NAMES: &[&str] = &[
    "strata-builder",
    "strata-controller",
    "strata-database",
    "strata-logger",
    "strata-logspout",
    "strata-publisher",
    "strata-registry@",
    "strata-router@",
    "strata-store-daemon",
    "strata-store-gateway@",
    "strata-store-metadata",
    "strata-store-monitor",
    "strata-store-volume",
    "strata-swarm-manager",
    "strata-swarm-node",
];

/// Unit name for a component, e.g. `router@2` -> `strata-router@2`.
#[must_use]
pub fn unit_name(component: &str) -> String {
    format!("{UNIT_PREFIX}{component}")
}

/// Unit file name for a component, e.g. `controller` -> `strata-controller.service`.
#[must_use]
pub fn unit_file_name(component: &str) -> String {
    format!("{}.service", unit_name(component))
}
