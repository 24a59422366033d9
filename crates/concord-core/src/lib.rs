//! # concord-core
//!
//! Foundation crate for the Concord ranking consensus engine.
//! Defines the ranking types, errors, config, tracing setup, and constants.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod tracing;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::ConcordConfig;
pub use errors::{ConcordErrorCode, ConfigError, ConsensusError, RankingError};
pub use types::ranking::{ClusterRanking, ObjectId, RankItem, RankingSide};
