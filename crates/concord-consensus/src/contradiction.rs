//! Contradiction core: object pairs the two rankings order inconsistently.

use concord_core::ObjectId;

use crate::matrix::BoolMatrix;
use crate::universe::Universe;

/// Output of the contradiction detector.
#[derive(Debug, Clone)]
pub struct ContradictionAnalysis {
    /// Pairs `(lo, hi)` with `lo < hi`, sorted and deduplicated.
    pub core: Vec<(ObjectId, ObjectId)>,
    /// `A AND B`: both rankings agree the row object is not worse than the column object.
    pub consensus: BoolMatrix,
}

/// Compare two relation matrices over the same universe.
///
/// With `AB = A ∧ B` and `AB' = Aᵀ ∧ Bᵀ`, a pair `(i, j)` is contradictory
/// when `M = AB ∨ AB'` is false in both directions: neither ordering of the
/// pair is jointly affirmed by both rankings.
pub fn find_contradiction_core(
    universe: &Universe,
    a: &BoolMatrix,
    b: &BoolMatrix,
) -> ContradictionAnalysis {
    let consensus = a.and(b);
    let transposed = a.transpose().and(&b.transpose());
    let m = consensus.or(&transposed);

    let n = universe.len();
    let mut core = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            if !m.get(i, j) && !m.get(j, i) {
                let (x, y) = (universe.object(i), universe.object(j));
                core.push((x.min(y), x.max(y)));
            }
        }
    }
    core.sort_unstable();
    core.dedup();

    ContradictionAnalysis { core, consensus }
}
