/// Concord engine version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Project-level config file looked up in the root directory passed to `ConcordConfig::load`.
pub const PROJECT_CONFIG_FILENAME: &str = "concord.toml";

/// Environment variable holding the tracing filter directives.
pub const LOG_FILTER_ENV: &str = "CONCORD_LOG";
