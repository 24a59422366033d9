//! Top-level consensus errors.

use super::error_code::{self, ConcordErrorCode};
use super::{ConfigError, RankingError};

/// Errors surfaced by a consensus run.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum ConsensusError {
    #[error("Ranking error: {0}")]
    Ranking(#[from] RankingError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl ConcordErrorCode for ConsensusError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Ranking(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Serialization { .. } => error_code::SERIALIZATION_ERROR,
        }
    }
}
