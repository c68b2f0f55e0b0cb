//! Sparse sentence vectors
//!
//! A sentence vector stores only its non-zero entries as parallel
//! `indices`/`values` arrays sorted by term index. Vocabulary width is
//! usually far larger than the number of terms in one sentence.

/// Sparse row of the sentence-term matrix
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    /// Term indices, strictly increasing
    pub indices: Vec<u32>,
    /// Non-negative, non-zero weights aligned with `indices`
    pub values: Vec<f64>,
}

impl SparseVector {
    /// Build from unordered pairs; zero weights are dropped.
    pub fn from_pairs(mut pairs: Vec<(u32, f64)>) -> Self {
        pairs.retain(|(_, v)| *v != 0.0);
        pairs.sort_by_key(|(i, _)| *i);
        let (indices, values) = pairs.into_iter().unzip();
        Self { indices, values }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of non-zero entries
    pub fn nnz(&self) -> usize {
        self.indices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Weight at `index` (zero when absent)
    pub fn get(&self, index: u32) -> f64 {
        self.indices
            .binary_search(&index)
            .map(|pos| self.values[pos])
            .unwrap_or(0.0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (u32, f64)> + '_ {
        self.indices.iter().copied().zip(self.values.iter().copied())
    }

    pub fn sum(&self) -> f64 {
        self.values.iter().sum()
    }

    pub fn sum_of_squares(&self) -> f64 {
        self.values.iter().map(|v| v * v).sum()
    }

    /// L2 norm
    pub fn norm(&self) -> f64 {
        self.sum_of_squares().sqrt()
    }

    pub fn dot(&self, other: &SparseVector) -> f64 {
        self.zip_union(other)
            .map(|(_, a, b)| a * b)
            .sum()
    }

    /// Scale every weight in place
    pub fn scale(&mut self, factor: f64) {
        for v in &mut self.values {
            *v *= factor;
        }
    }

    /// Walk the union of non-zero indices of both vectors in ascending
    /// order, yielding `(index, self_weight, other_weight)` with zero for
    /// the side that has no entry.
    pub fn zip_union<'a>(&'a self, other: &'a SparseVector) -> ZipUnion<'a> {
        ZipUnion {
            left: self,
            right: other,
            i: 0,
            j: 0,
        }
    }
}

/// Iterator returned by [`SparseVector::zip_union`]
pub struct ZipUnion<'a> {
    left: &'a SparseVector,
    right: &'a SparseVector,
    i: usize,
    j: usize,
}

impl Iterator for ZipUnion<'_> {
    type Item = (u32, f64, f64);

    fn next(&mut self) -> Option<Self::Item> {
        let l = self.left.indices.get(self.i).copied();
        let r = self.right.indices.get(self.j).copied();
        match (l, r) {
            (None, None) => None,
            (Some(a), Some(b)) if a == b => {
                let item = (a, self.left.values[self.i], self.right.values[self.j]);
                self.i += 1;
                self.j += 1;
                Some(item)
            }
            (Some(a), Some(b)) if a < b => {
                let item = (a, self.left.values[self.i], 0.0);
                self.i += 1;
                Some(item)
            }
            (Some(a), None) => {
                let item = (a, self.left.values[self.i], 0.0);
                self.i += 1;
                Some(item)
            }
            (_, Some(b)) => {
                let item = (b, 0.0, self.right.values[self.j]);
                self.j += 1;
                Some(item)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn v(pairs: &[(u32, f64)]) -> SparseVector {
        SparseVector::from_pairs(pairs.to_vec())
    }

    #[test]
    fn test_from_pairs_sorts_and_drops_zeros() {
        let vec = v(&[(5, 1.0), (2, 3.0), (7, 0.0)]);
        assert_eq!(vec.indices, vec![2, 5]);
        assert_eq!(vec.values, vec![3.0, 1.0]);
        assert_eq!(vec.nnz(), 2);
    }

    #[test]
    fn test_get_and_sum() {
        let vec = v(&[(1, 2.0), (4, 0.5)]);
        assert_eq!(vec.get(1), 2.0);
        assert_eq!(vec.get(3), 0.0);
        assert!((vec.sum() - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_norm_and_dot() {
        let a = v(&[(0, 3.0), (1, 4.0)]);
        let b = v(&[(1, 2.0), (2, 9.0)]);
        assert!((a.norm() - 5.0).abs() < 1e-12);
        assert!((a.dot(&b) - 8.0).abs() < 1e-12);
    }

    #[test]
    fn test_zip_union_order() {
        let a = v(&[(0, 1.0), (3, 2.0)]);
        let b = v(&[(1, 5.0), (3, 7.0), (4, 1.0)]);
        let items: Vec<_> = a.zip_union(&b).collect();
        assert_eq!(
            items,
            vec![(0, 1.0, 0.0), (1, 0.0, 5.0), (3, 2.0, 7.0), (4, 0.0, 1.0)]
        );
    }

    #[test]
    fn test_empty_vector() {
        let e = SparseVector::empty();
        assert!(e.is_empty());
        assert_eq!(e.norm(), 0.0);
        assert_eq!(e.zip_union(&e).count(), 0);
    }
}
