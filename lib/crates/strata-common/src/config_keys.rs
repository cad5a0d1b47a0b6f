/// Root of every key strata keeps in the cluster configuration store.
pub const ROOT: &str = "/strata";

/// Well-known keys read by the control tool and the platform services.
pub mod keys {
    /// Component namespace holding platform-wide settings.
    /// Format: /strata/platform/
    pub const PLATFORM: &str = "platform";

    /// Cluster domain under which applications are routed.
    /// Format: /strata/platform/domain
    /// Required before the platform is installed or started.
    pub const DOMAIN: &str = "domain";

    /// Path of the private key used for `run` sessions on cluster hosts.
    /// Format: /strata/platform/sshPrivateKey
    /// Optional; missing only disables interactive runs.
    pub const SSH_PRIVATE_KEY: &str = "sshPrivateKey";

    /// Component namespace holding log settings.
    /// Format: /strata/logs/
    pub const LOGS: &str = "logs";

    /// Remote destination the log receiver forwards to.
    /// Format: /strata/logs/drain
    /// Value: `tcp://host:port`
    pub const DRAIN: &str = "drain";
}

/// Namespace of a component, always slash-terminated: `/strata/<component>/`.
#[must_use]
pub fn namespace(component: &str) -> String {
    format!("{ROOT}/{component}/")
}

/// Full store path of `key` under `component`.
#[must_use]
pub fn key_path(component: &str, key: &str) -> String {
    format!("{}{key}", namespace(component))
}
