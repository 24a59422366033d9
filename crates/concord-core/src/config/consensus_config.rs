//! Consensus engine configuration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::defaults;

/// What to do with an object that appears in one ranking but not the other.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MissingObjectPolicy {
    /// Missing objects share one implicit position after every listed item.
    #[default]
    AppendTied,
    /// Missing objects share one implicit position before every listed item.
    PrependTied,
    /// Fail the run with `RankingError::IncompleteRanking`.
    Reject,
}

impl MissingObjectPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AppendTied => "append_tied",
            Self::PrependTied => "prepend_tied",
            Self::Reject => "reject",
        }
    }
}

impl fmt::Display for MissingObjectPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MissingObjectPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "append_tied" | "append" => Ok(Self::AppendTied),
            "prepend_tied" | "prepend" => Ok(Self::PrependTied),
            "reject" => Ok(Self::Reject),
            other => Err(format!("unknown missing-object policy '{other}'")),
        }
    }
}

/// Configuration for the consensus pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ConsensusConfig {
    /// Reject an object listed twice in one ranking. Default: true.
    /// When false, the later position wins.
    pub strict_duplicates: Option<bool>,
    /// Handling of objects missing from one ranking. Default: append_tied.
    pub missing_objects: Option<MissingObjectPolicy>,
    /// Largest universe accepted before building n×n matrices. Default: 4096.
    pub max_objects: Option<usize>,
}

impl ConsensusConfig {
    /// Returns the effective duplicate strictness, defaulting to true.
    pub fn effective_strict_duplicates(&self) -> bool {
        self.strict_duplicates
            .unwrap_or(defaults::DEFAULT_STRICT_DUPLICATES)
    }

    pub fn effective_missing_objects(&self) -> MissingObjectPolicy {
        self.missing_objects.unwrap_or_default()
    }

    /// Returns the effective universe size cap, defaulting to 4096.
    pub fn effective_max_objects(&self) -> usize {
        self.max_objects.unwrap_or(defaults::DEFAULT_MAX_OBJECTS)
    }
}
