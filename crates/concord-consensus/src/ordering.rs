//! Cluster ordering by mean position across both rankings.

use std::cmp::Ordering;

use concord_core::ObjectId;
use serde::{Deserialize, Serialize};

use crate::clusters::Cluster;

/// A cluster with its consensus score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredCluster {
    pub members: Vec<ObjectId>,
    /// Mean over members of `(posA + posB) / 2`. Lower is worse.
    pub score: f64,
}

impl ScoredCluster {
    fn min_member(&self) -> ObjectId {
        self.members[0]
    }
}

/// Mean of `(posA[x] + posB[x]) / 2` over the cluster's members.
///
/// `pos_a` and `pos_b` are aligned to universe order.
pub fn cluster_score(cluster: &Cluster, pos_a: &[usize], pos_b: &[usize]) -> f64 {
    let sum: f64 = cluster
        .indices
        .iter()
        .map(|&i| (pos_a[i] as f64 + pos_b[i] as f64) / 2.0)
        .sum();
    sum / cluster.len() as f64
}

/// Sort clusters worst to best by `(score, smallest member)`.
///
/// The secondary key makes the order total, so the output is reproducible.
pub fn order_clusters(clusters: Vec<Cluster>, pos_a: &[usize], pos_b: &[usize]) -> Vec<ScoredCluster> {
    let mut scored: Vec<ScoredCluster> = clusters
        .into_iter()
        .map(|cluster| ScoredCluster {
            score: cluster_score(&cluster, pos_a, pos_b),
            members: cluster.members,
        })
        .collect();
    scored.sort_by(compare_scored);
    scored
}

fn compare_scored(a: &ScoredCluster, b: &ScoredCluster) -> Ordering {
    a.score
        .total_cmp(&b.score)
        .then_with(|| a.min_member().cmp(&b.min_member()))
}
