//! Configuration system for Concord.
//! TOML-based, layered resolution: overrides > env > project > defaults.

pub mod concord_config;
pub mod consensus_config;
pub mod defaults;
pub mod logging_config;

pub use concord_config::{ConcordConfig, ConfigOverrides};
pub use consensus_config::{ConsensusConfig, MissingObjectPolicy};
pub use logging_config::LoggingConfig;
