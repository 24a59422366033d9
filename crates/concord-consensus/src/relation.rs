//! "Not worse than" relation matrices built from position maps.

use crate::matrix::BoolMatrix;

/// Build `Y` with `Y[i][j] = positions[i] >= positions[j]`: object `i` is not
/// worse than object `j`.
///
/// `positions` is laid out in universe order (see `PositionMap::aligned`).
/// The result is reflexive and total: every pair is comparable.
pub fn build_relation_matrix(positions: &[usize]) -> BoolMatrix {
    BoolMatrix::from_fn(positions.len(), |i, j| positions[i] >= positions[j])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_positions_are_not_worse() {
        // [1, [2, 3], 4]
        let y = build_relation_matrix(&[0, 1, 1, 2]);
        assert!(y.get(3, 0));
        assert!(!y.get(0, 3));
        assert!(y.get(1, 2) && y.get(2, 1));
    }

    #[test]
    fn relation_is_reflexive_and_total() {
        let positions = [3, 0, 2, 2, 1];
        let y = build_relation_matrix(&positions);
        for i in 0..positions.len() {
            assert!(y.get(i, i));
            for j in 0..positions.len() {
                assert!(y.get(i, j) || y.get(j, i));
            }
        }
    }
}
