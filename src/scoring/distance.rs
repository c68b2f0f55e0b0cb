//! Pairwise-distance scoring
//!
//! A sentence is scored by its mean distance to the rest of the document:
//! sentences far from everything else carry distinctive content, while
//! near-duplicates of other sentences sink to the bottom.
//!
//! The distance matrix is stored condensed (upper triangle, row-major) and
//! its rows are computed in parallel when the `parallel` feature is on.
//! Row means are always summed in ascending column order, so scores do not
//! depend on the execution schedule.

#[cfg(feature = "parallel")]
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use super::metric::Metric;
use super::ScoreOutput;
use crate::types::ScoreEntry;
use crate::vectorize::{SentenceMatrix, SparseVector};

/// Parameters for distance metrics that take one
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DistanceOptions {
    /// Order of the Minkowski distance
    pub minkowski_p: f64,
}

impl Default for DistanceOptions {
    fn default() -> Self {
        Self { minkowski_p: 2.0 }
    }
}

/// Symmetric sentence-by-sentence distance matrix with a zero diagonal
#[derive(Debug, Clone)]
pub struct DistanceMatrix {
    n: usize,
    /// `d(i, j)` for `i < j`, row-major
    condensed: Vec<f64>,
}

impl DistanceMatrix {
    /// Compute all pairwise distances between rows of `matrix`
    pub fn compute(matrix: &SentenceMatrix, metric: Metric, options: &DistanceOptions) -> Self {
        let n = matrix.num_rows();
        let dim = matrix.num_cols();
        let rows = &matrix.rows;
        let p = options.minkowski_p;

        let upper_row = |i: usize| -> Vec<f64> {
            let u: &SparseVector = &rows[i];
            rows[i + 1..]
                .iter()
                .map(|v| metric.distance(u, v, dim, p))
                .collect()
        };

        #[cfg(feature = "parallel")]
        let upper: Vec<Vec<f64>> = (0..n).into_par_iter().map(upper_row).collect();
        #[cfg(not(feature = "parallel"))]
        let upper: Vec<Vec<f64>> = (0..n).map(upper_row).collect();

        Self {
            n,
            condensed: upper.into_iter().flatten().collect(),
        }
    }

    /// Number of sentences
    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Distance between sentences `i` and `j`
    pub fn get(&self, i: usize, j: usize) -> f64 {
        if i == j {
            return 0.0;
        }
        let (i, j) = if i < j { (i, j) } else { (j, i) };
        self.condensed[self.n * i - i * (i + 1) / 2 + (j - i - 1)]
    }

    /// Full row `i` including the zero diagonal entry
    pub fn row(&self, i: usize) -> impl Iterator<Item = f64> + '_ {
        (0..self.n).map(move |j| self.get(i, j))
    }

    /// NaN-ignoring mean of row `i`.
    ///
    /// The diagonal counts as a defined zero entry, but a sentence whose
    /// distance to every other sentence is undefined gets `NaN`. A
    /// one-sentence matrix scores 0.
    pub fn row_mean(&self, i: usize) -> f64 {
        let (mut sum, mut defined) = (0.0, 0usize);
        for (j, d) in self.row(i).enumerate() {
            if j != i && !d.is_nan() {
                sum += d;
                defined += 1;
            }
        }
        if defined == 0 && self.n > 1 {
            return f64::NAN;
        }
        sum / (defined + 1) as f64
    }
}

/// Score each sentence by its mean distance to all others
pub fn score_distance(
    matrix: &SentenceMatrix,
    metric: Metric,
    options: &DistanceOptions,
) -> ScoreOutput {
    let distances = DistanceMatrix::compute(matrix, metric, options);
    let entries: Vec<ScoreEntry> = (0..distances.len())
        .map(|i| ScoreEntry::new(i, distances.row_mean(i)))
        .collect();

    let output = ScoreOutput::new(entries);
    #[cfg(feature = "tracing")]
    if output.degenerate > 0 {
        tracing::warn!(
            metric = metric.as_str(),
            degenerate = output.degenerate,
            sentences = output.entries.len(),
            "DegenerateScoreWarning: undefined distance scores ranked last"
        );
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vectorize::{build_matrix, TfIdfOptions, Weighting};

    fn count_matrix(rows: &[&[&str]]) -> SentenceMatrix {
        let terms: Vec<Vec<&str>> = rows.iter().map(|r| r.to_vec()).collect();
        build_matrix(&terms, Weighting::Count, &TfIdfOptions::default())
    }

    #[test]
    fn test_matrix_is_symmetric_with_zero_diagonal() {
        let m = count_matrix(&[&["a1", "b1"], &["b1", "c1"], &["c1", "d1", "d1"]]);
        let d = DistanceMatrix::compute(&m, Metric::Euclidean, &DistanceOptions::default());
        assert_eq!(d.len(), 3);
        for i in 0..3 {
            assert_eq!(d.get(i, i), 0.0);
            for j in 0..3 {
                assert_eq!(d.get(i, j), d.get(j, i));
            }
        }
        assert!((d.get(0, 1) - 2f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_row_mean_includes_diagonal() {
        let m = count_matrix(&[&["a1"], &["a1"], &["b1"]]);
        let out = score_distance(&m, Metric::Cityblock, &DistanceOptions::default());
        // rows: [0, 0, 2], [0, 0, 2], [2, 2, 0]
        assert!((out.entries[0].score - 2.0 / 3.0).abs() < 1e-12);
        assert!((out.entries[2].score - 4.0 / 3.0).abs() < 1e-12);
        assert_eq!(out.degenerate, 0);
    }

    #[test]
    fn test_zero_row_cosine_is_degenerate() {
        let m = count_matrix(&[&["a1", "b1"], &[], &["b1"]]);
        let out = score_distance(&m, Metric::Cosine, &DistanceOptions::default());
        assert!(out.entries[0].is_defined());
        assert!(!out.entries[1].is_defined());
        assert!(out.entries[2].is_defined());
        assert_eq!(out.degenerate, 1);
        // sentence 0 ignores its NaN distance to sentence 1
        let d02 = 1.0 - 1.0 / 2f64.sqrt();
        assert!((out.entries[0].score - d02 / 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_single_sentence_scores_zero() {
        let m = count_matrix(&[&["a1"]]);
        let out = score_distance(&m, Metric::Cosine, &DistanceOptions::default());
        assert_eq!(out.entries.len(), 1);
        assert_eq!(out.entries[0].score, 0.0);
    }

    #[test]
    fn test_minkowski_order_applies() {
        let m = count_matrix(&[&["a1"], &["b1"]]);
        let opts = DistanceOptions { minkowski_p: 1.0 };
        let d = DistanceMatrix::compute(&m, Metric::Minkowski, &opts);
        assert!((d.get(0, 1) - 2.0).abs() < 1e-12);
    }
}
