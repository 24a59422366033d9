//! Ranking validation errors.

use super::error_code::{self, ConcordErrorCode};
use crate::types::{ObjectId, RankingSide};

/// Errors raised while validating and normalizing input rankings.
///
/// All of them are detected before any relation matrix is built.
#[derive(Debug, thiserror::Error)]
pub enum RankingError {
    #[error("Malformed ranking: {reason}")]
    MalformedRanking { reason: String },

    #[error("Invalid ranking {side}: object {object} occupies positions {first} and {second}")]
    InvalidRanking {
        side: RankingSide,
        object: ObjectId,
        first: usize,
        second: usize,
    },

    #[error("Empty universe: both rankings are empty")]
    EmptyUniverse,

    #[error("Incomplete ranking {side}: object {object} is not ranked")]
    IncompleteRanking { side: RankingSide, object: ObjectId },

    #[error("Universe of {size} objects exceeds the configured maximum of {max}")]
    UniverseTooLarge { size: usize, max: usize },
}

impl RankingError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        Self::MalformedRanking {
            reason: reason.into(),
        }
    }

    /// Attribute a malformed-ranking error to one of the two inputs.
    /// Other variants already carry their side, or have none.
    pub fn in_ranking(self, side: RankingSide) -> Self {
        match self {
            Self::MalformedRanking { reason } => Self::MalformedRanking {
                reason: format!("ranking {side}: {reason}"),
            },
            other => other,
        }
    }
}

impl ConcordErrorCode for RankingError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::MalformedRanking { .. } => error_code::MALFORMED_RANKING,
            Self::InvalidRanking { .. } => error_code::INVALID_RANKING,
            Self::EmptyUniverse => error_code::EMPTY_UNIVERSE,
            Self::IncompleteRanking { .. } => error_code::INCOMPLETE_RANKING,
            Self::UniverseTooLarge { .. } => error_code::UNIVERSE_TOO_LARGE,
        }
    }
}
