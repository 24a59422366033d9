//! Cluster building: connected components over agreement and contradiction edges.

use concord_core::ObjectId;
use petgraph::graph::{NodeIndex, UnGraph};
use petgraph::visit::{Dfs, VisitMap};

use crate::matrix::BoolMatrix;
use crate::universe::Universe;

/// A connected component of the connectivity graph.
///
/// `indices` and `members` are parallel and ascending; because the universe is
/// sorted, universe-index order and object order coincide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cluster {
    pub indices: Vec<usize>,
    pub members: Vec<ObjectId>,
}

impl Cluster {
    /// Smallest member object.
    pub fn min_member(&self) -> ObjectId {
        self.members[0]
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn contains(&self, object: ObjectId) -> bool {
        self.members.binary_search(&object).is_ok()
    }
}

/// Build the undirected connectivity graph over universe indices.
///
/// Edge `(i, j)` exists when both rankings agree `i` and `j` are tied
/// (`AB[i][j] ∧ AB[j][i]`) or when `{i, j}` is a contradiction pair. Node
/// `k` carries the universe object at index `k`.
pub fn connectivity_graph(
    universe: &Universe,
    consensus: &BoolMatrix,
    core: &[(ObjectId, ObjectId)],
) -> UnGraph<ObjectId, ()> {
    let n = universe.len();
    let mut graph = UnGraph::with_capacity(n, n + core.len());
    for &object in universe.objects() {
        graph.add_node(object);
    }

    for i in 0..n {
        for j in consensus.row_ones(i).filter(|&j| j > i) {
            if consensus.get(j, i) {
                graph.add_edge(NodeIndex::new(i), NodeIndex::new(j), ());
            }
        }
    }

    for &(x, y) in core {
        if let (Some(i), Some(j)) = (universe.index_of(x), universe.index_of(y)) {
            graph.update_edge(NodeIndex::new(i), NodeIndex::new(j), ());
        }
    }

    graph
}

/// Partition the universe into clusters.
///
/// Every object lands in exactly one cluster; contradictory pairs always share
/// a cluster; isolated objects form singletons. Clusters are returned in order
/// of their smallest member.
pub fn build_clusters(
    universe: &Universe,
    consensus: &BoolMatrix,
    core: &[(ObjectId, ObjectId)],
) -> Vec<Cluster> {
    let graph = connectivity_graph(universe, consensus, core);

    let mut clusters = Vec::new();
    let mut dfs = Dfs::empty(&graph);
    for start in graph.node_indices() {
        if dfs.discovered.is_visited(&start) {
            continue;
        }
        // `move_to` keeps the discovered set, so each walk yields only new nodes.
        dfs.move_to(start);
        let mut indices = Vec::new();
        while let Some(node) = dfs.next(&graph) {
            indices.push(node.index());
        }
        indices.sort_unstable();
        let members = indices.iter().map(|&i| universe.object(i)).collect();
        clusters.push(Cluster { indices, members });
    }

    clusters
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contradiction::find_contradiction_core;
    use crate::relation::build_relation_matrix;

    fn clusters_for(objects: &[ObjectId], pos_a: &[usize], pos_b: &[usize]) -> Vec<Vec<ObjectId>> {
        let universe = Universe::from_objects(objects.iter().copied());
        let analysis = find_contradiction_core(
            &universe,
            &build_relation_matrix(pos_a),
            &build_relation_matrix(pos_b),
        );
        build_clusters(&universe, &analysis.consensus, &analysis.core)
            .into_iter()
            .map(|c| c.members)
            .collect()
    }

    #[test]
    fn shared_ties_merge() {
        // A = B = [1, [2, 3], 4]
        let clusters = clusters_for(&[1, 2, 3, 4], &[0, 1, 1, 2], &[0, 1, 1, 2]);
        assert_eq!(clusters, vec![vec![1], vec![2, 3], vec![4]]);
    }

    #[test]
    fn tie_in_only_one_ranking_does_not_merge() {
        // A = [[1, 2], 3], B = [1, 2, 3]
        let clusters = clusters_for(&[1, 2, 3], &[0, 0, 1], &[0, 1, 2]);
        assert_eq!(clusters, vec![vec![1], vec![2], vec![3]]);
    }

    #[test]
    fn contradictions_chain_into_one_cluster() {
        // A = [1, 2, 3], B = [3, 2, 1]
        let clusters = clusters_for(&[1, 2, 3], &[0, 1, 2], &[2, 1, 0]);
        assert_eq!(clusters, vec![vec![1, 2, 3]]);
    }

    #[test]
    fn clusters_partition_the_universe() {
        let objects = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let pos_a = [0, 1, 1, 2, 3, 3, 3, 4, 5, 6];
        let pos_b = [0, 0, 1, 1, 1, 2, 3, 5, 4, 5];
        let clusters = clusters_for(&objects, &pos_a, &pos_b);
        let mut seen: Vec<ObjectId> = clusters.iter().flatten().copied().collect();
        seen.sort_unstable();
        assert_eq!(seen, objects);
        assert!(clusters.contains(&vec![8, 9]));
    }

    #[test]
    fn graph_has_one_edge_per_related_pair() {
        let universe = Universe::from_objects([1, 2, 3]);
        let a = build_relation_matrix(&[0, 1, 2]);
        let b = build_relation_matrix(&[2, 1, 0]);
        let analysis = find_contradiction_core(&universe, &a, &b);
        let graph = connectivity_graph(&universe, &analysis.consensus, &analysis.core);
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 3);
    }
}
