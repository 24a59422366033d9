//! ConsensusEngine: validates input and runs the six-stage pipeline.

use concord_core::config::{ConcordConfig, ConsensusConfig};
use concord_core::{ClusterRanking, ConsensusError, ObjectId, RankingError, RankingSide};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, info_span};

use crate::clusters::build_clusters;
use crate::contradiction::find_contradiction_core;
use crate::notation;
use crate::ordering::{order_clusters, ScoredCluster};
use crate::positions::PositionMap;
use crate::relation::build_relation_matrix;
use crate::universe::Universe;

/// Summary counters for one consensus run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsensusDiagnostics {
    pub universe_size: usize,
    pub contradiction_count: usize,
    pub cluster_count: usize,
    pub largest_cluster: usize,
    /// Objects positioned by the missing-object policy in ranking A.
    pub filled_in_a: usize,
    /// Objects positioned by the missing-object policy in ranking B.
    pub filled_in_b: usize,
}

/// Full result of a consensus run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsensusReport {
    /// The consensus ranking, worst to best.
    pub ranking: ClusterRanking,
    /// Ordered clusters with their scores, parallel to `ranking.items`.
    pub clusters: Vec<ScoredCluster>,
    /// The contradiction core, sorted.
    pub contradictions: Vec<(ObjectId, ObjectId)>,
    pub diagnostics: ConsensusDiagnostics,
}

/// Computes consensus rankings. Stateless apart from its configuration, so a
/// single engine can serve any number of concurrent runs.
#[derive(Debug, Clone, Default)]
pub struct ConsensusEngine {
    config: ConsensusConfig,
}

impl ConsensusEngine {
    pub fn new(config: ConsensusConfig) -> Self {
        Self { config }
    }

    /// Create an engine with default configuration.
    pub fn with_defaults() -> Self {
        Self::default()
    }

    pub fn from_config(config: &ConcordConfig) -> Self {
        Self::new(config.consensus.clone())
    }

    pub fn config(&self) -> &ConsensusConfig {
        &self.config
    }

    /// Run the full pipeline on two rankings.
    ///
    /// All validation happens before any matrix is built; on error nothing
    /// partial is returned.
    pub fn run(
        &self,
        a: &ClusterRanking,
        b: &ClusterRanking,
    ) -> Result<ConsensusReport, ConsensusError> {
        let strict = self.config.effective_strict_duplicates();
        let mut pos_a = PositionMap::build(a, RankingSide::A, strict)?;
        let mut pos_b = PositionMap::build(b, RankingSide::B, strict)?;

        // Stage 1: object collection.
        let universe = Universe::collect(a, b)?;
        let max = self.config.effective_max_objects();
        if universe.len() > max {
            return Err(RankingError::UniverseTooLarge {
                size: universe.len(),
                max,
            }
            .into());
        }

        let span = info_span!("consensus", universe = universe.len());
        let _guard = span.enter();

        // Stage 2: position indexing.
        let policy = self.config.effective_missing_objects();
        pos_a.complete(&universe, policy)?;
        pos_b.complete(&universe, policy)?;
        let ranks_a = pos_a.aligned(&universe)?;
        let ranks_b = pos_b.aligned(&universe)?;

        // Stage 3: relation matrices.
        let y_a = build_relation_matrix(&ranks_a);
        let y_b = build_relation_matrix(&ranks_b);
        debug!(
            ones_a = y_a.count_ones(),
            ones_b = y_b.count_ones(),
            "relation matrices built"
        );

        // Stage 4: contradiction core.
        let analysis = find_contradiction_core(&universe, &y_a, &y_b);
        debug!(pairs = analysis.core.len(), "contradiction core found");

        // Stage 5: clusters.
        let clusters = build_clusters(&universe, &analysis.consensus, &analysis.core);
        debug!(clusters = clusters.len(), "connected components extracted");

        // Stage 6: ordering.
        let ordered = order_clusters(clusters, &ranks_a, &ranks_b);
        let ranking = ClusterRanking::from_clusters(ordered.iter().map(|c| &c.members));

        let diagnostics = ConsensusDiagnostics {
            universe_size: universe.len(),
            contradiction_count: analysis.core.len(),
            cluster_count: ordered.len(),
            largest_cluster: ordered.iter().map(|c| c.members.len()).max().unwrap_or(0),
            filled_in_a: pos_a.filled_count(),
            filled_in_b: pos_b.filled_count(),
        };

        info!(
            universe = diagnostics.universe_size,
            contradictions = diagnostics.contradiction_count,
            clusters = diagnostics.cluster_count,
            largest = diagnostics.largest_cluster,
            "consensus complete"
        );

        Ok(ConsensusReport {
            ranking,
            clusters: ordered,
            contradictions: analysis.core,
            diagnostics,
        })
    }

    /// Run on two rankings in JSON array notation and return the consensus in
    /// the same notation, e.g. `"[1,[2,3],4]"`.
    pub fn run_json(&self, a: &str, b: &str) -> Result<String, ConsensusError> {
        let ranking_a = notation::parse_ranking(a).map_err(|e| e.in_ranking(RankingSide::A))?;
        let ranking_b = notation::parse_ranking(b).map_err(|e| e.in_ranking(RankingSide::B))?;
        let report = self.run(&ranking_a, &ranking_b)?;
        notation::format_ranking(&report.ranking)
    }

    /// Run many independent ranking pairs in parallel.
    ///
    /// Results come back in input order, one per pair; a failing pair does not
    /// affect the others.
    pub fn run_batch(
        &self,
        pairs: &[(ClusterRanking, ClusterRanking)],
    ) -> Vec<Result<ConsensusReport, ConsensusError>> {
        debug!(pairs = pairs.len(), "batch consensus");
        pairs.par_iter().map(|(a, b)| self.run(a, b)).collect()
    }
}

/// Consensus ranking of `a` and `b` with default configuration.
pub fn consensus(a: &ClusterRanking, b: &ClusterRanking) -> Result<ClusterRanking, ConsensusError> {
    ConsensusEngine::with_defaults()
        .run(a, b)
        .map(|report| report.ranking)
}
