//! Weight-sum scoring
//!
//! A sentence scores the sum of its row. Over tf-idf weights this rewards
//! sentences carrying many rare, document-specific terms. Longer sentences
//! accumulate more weight and are systematically favored; that bias is a
//! known property of the strategy and is not corrected here.

use super::ScoreOutput;
use crate::types::ScoreEntry;
use crate::vectorize::SentenceMatrix;

/// Score each sentence by the sum of its term weights
pub fn score_sum(matrix: &SentenceMatrix) -> ScoreOutput {
    ScoreOutput::new(
        matrix
            .rows
            .iter()
            .enumerate()
            .map(|(i, row)| ScoreEntry::new(i, row.sum()))
            .collect(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vectorize::{build_matrix, TfIdfOptions, Weighting};

    #[test]
    fn test_row_sums() {
        let terms = vec![vec!["ant", "ant", "bee"], vec![], vec!["bee"]];
        let m = build_matrix(&terms, Weighting::Count, &TfIdfOptions::default());
        let out = score_sum(&m);
        let scores: Vec<f64> = out.entries.iter().map(|e| e.score).collect();
        assert_eq!(scores, vec![3.0, 0.0, 1.0]);
        assert_eq!(out.degenerate, 0);
    }

    #[test]
    fn test_rare_terms_score_higher_under_tfidf() {
        // "cat" everywhere, "zebra" once: same length, rarer content wins
        let terms = vec![vec!["cat", "zebra"], vec!["cat", "cat"], vec!["cat"]];
        let m = build_matrix(&terms, Weighting::TfIdf, &TfIdfOptions::default());
        let out = score_sum(&m);
        assert!(out.entries[0].score > out.entries[1].score);
    }
}
