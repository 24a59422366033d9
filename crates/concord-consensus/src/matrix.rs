//! Fixed-size square boolean matrix, bit-packed row-major.

use std::fmt;

const WORD_BITS: usize = u64::BITS as usize;

/// An n×n boolean matrix indexed by universe order.
///
/// Each row occupies `words_per_row` consecutive `u64` words. Padding bits past
/// column `n - 1` are always zero, so word-wise AND/OR keep that invariant.
#[derive(Clone, PartialEq, Eq)]
pub struct BoolMatrix {
    n: usize,
    words_per_row: usize,
    bits: Vec<u64>,
}

impl BoolMatrix {
    /// An all-false n×n matrix.
    pub fn new(n: usize) -> Self {
        let words_per_row = n.div_ceil(WORD_BITS);
        Self {
            n,
            words_per_row,
            bits: vec![0; n * words_per_row],
        }
    }

    /// Build a matrix by evaluating `f(i, j)` for every cell.
    pub fn from_fn(n: usize, mut f: impl FnMut(usize, usize) -> bool) -> Self {
        let mut matrix = Self::new(n);
        for i in 0..n {
            for j in 0..n {
                if f(i, j) {
                    matrix.set(i, j, true);
                }
            }
        }
        matrix
    }

    /// Side length.
    pub fn dim(&self) -> usize {
        self.n
    }

    #[inline]
    fn locate(&self, i: usize, j: usize) -> (usize, u64) {
        debug_assert!(i < self.n && j < self.n, "({i}, {j}) out of bounds for {}", self.n);
        (i * self.words_per_row + j / WORD_BITS, 1u64 << (j % WORD_BITS))
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> bool {
        let (word, mask) = self.locate(i, j);
        self.bits[word] & mask != 0
    }

    #[inline]
    pub fn set(&mut self, i: usize, j: usize, value: bool) {
        let (word, mask) = self.locate(i, j);
        if value {
            self.bits[word] |= mask;
        } else {
            self.bits[word] &= !mask;
        }
    }

    /// Elementwise conjunction.
    pub fn and(&self, other: &BoolMatrix) -> BoolMatrix {
        self.zip_words(other, |a, b| a & b)
    }

    /// Elementwise disjunction.
    pub fn or(&self, other: &BoolMatrix) -> BoolMatrix {
        self.zip_words(other, |a, b| a | b)
    }

    fn zip_words(&self, other: &BoolMatrix, op: impl Fn(u64, u64) -> u64) -> BoolMatrix {
        assert_eq!(self.n, other.n, "matrix dimensions differ");
        BoolMatrix {
            n: self.n,
            words_per_row: self.words_per_row,
            bits: self
                .bits
                .iter()
                .zip(&other.bits)
                .map(|(&a, &b)| op(a, b))
                .collect(),
        }
    }

    pub fn transpose(&self) -> BoolMatrix {
        BoolMatrix::from_fn(self.n, |i, j| self.get(j, i))
    }

    /// Column indices of the true cells in row `i`, ascending.
    pub fn row_ones(&self, i: usize) -> impl Iterator<Item = usize> + '_ {
        let row = &self.bits[i * self.words_per_row..(i + 1) * self.words_per_row];
        row.iter().enumerate().flat_map(|(w, &word)| {
            let mut rest = word;
            std::iter::from_fn(move || {
                if rest == 0 {
                    return None;
                }
                let bit = rest.trailing_zeros() as usize;
                rest &= rest - 1;
                Some(w * WORD_BITS + bit)
            })
        })
    }

    /// Number of true cells.
    pub fn count_ones(&self) -> usize {
        self.bits.iter().map(|w| w.count_ones() as usize).sum()
    }
}

impl fmt::Debug for BoolMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BoolMatrix({}x{})", self.n, self.n)?;
        for i in 0..self.n {
            let row: String = (0..self.n)
                .map(|j| if self.get(i, j) { '1' } else { '0' })
                .collect();
            writeln!(f, "  {row}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_get_across_word_boundary() {
        let mut m = BoolMatrix::new(70);
        m.set(3, 63, true);
        m.set(3, 64, true);
        m.set(69, 69, true);
        assert!(m.get(3, 63) && m.get(3, 64) && m.get(69, 69));
        assert!(!m.get(3, 65));
        assert_eq!(m.count_ones(), 3);

        m.set(3, 64, false);
        assert!(!m.get(3, 64));
    }

    #[test]
    fn and_or_are_elementwise() {
        let a = BoolMatrix::from_fn(3, |i, j| i <= j);
        let b = BoolMatrix::from_fn(3, |i, j| i >= j);
        let both = a.and(&b);
        let either = a.or(&b);
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(both.get(i, j), i == j);
                assert!(either.get(i, j));
            }
        }
    }

    #[test]
    fn transpose_swaps_indices() {
        let a = BoolMatrix::from_fn(5, |i, j| i < j);
        let t = a.transpose();
        assert_eq!(t, BoolMatrix::from_fn(5, |i, j| i > j));
        assert_eq!(t.transpose(), a);
    }

    #[test]
    fn row_ones_lists_columns_in_order() {
        let m = BoolMatrix::from_fn(130, |i, j| i == 1 && (j % 64 == 0 || j == 129));
        assert_eq!(m.row_ones(1).collect::<Vec<_>>(), vec![0, 64, 128, 129]);
        assert_eq!(m.row_ones(0).count(), 0);
    }

    #[test]
    fn empty_matrix_is_valid() {
        let m = BoolMatrix::new(0);
        assert_eq!(m.dim(), 0);
        assert_eq!(m.count_ones(), 0);
    }
}
