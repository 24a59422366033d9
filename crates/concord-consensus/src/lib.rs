//! # concord-consensus
//!
//! Consensus of two cluster rankings in six stages:
//! object collection → position indexing → relation matrices →
//! contradiction core → clustering (connected components) → ordering.
//!
//! The whole computation is a pure function of its two inputs. Every
//! invocation rebuilds its matrices from scratch; nothing is shared between
//! runs, so independent runs may execute in parallel.

pub mod clusters;
pub mod contradiction;
pub mod engine;
pub mod matrix;
pub mod notation;
pub mod ordering;
pub mod positions;
pub mod relation;
pub mod universe;

pub use clusters::{build_clusters, Cluster};
pub use contradiction::{find_contradiction_core, ContradictionAnalysis};
pub use engine::{consensus, ConsensusDiagnostics, ConsensusEngine, ConsensusReport};
pub use matrix::BoolMatrix;
pub use ordering::{order_clusters, ScoredCluster};
pub use positions::PositionMap;
pub use universe::Universe;
