//! Sentence-term matrix construction
//!
//! Turns an ordered sentence sequence into one sparse row per sentence under
//! a weighting scheme. The vocabulary and document frequencies come from the
//! current document only; nothing is retained between calls.
//!
//! # Tf-idf smoothing
//!
//! With `smooth_idf` (the default) the inverse document frequency of a term
//! is `ln((1 + n) / (1 + df)) + 1`, where `n` is the sentence count and `df`
//! the number of sentences containing the term. Without smoothing it is
//! `ln(n / df) + 1`. Either way a term present in every sentence keeps a
//! weight of 1 rather than vanishing.

pub mod sparse;
pub mod vocabulary;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::Tokenizer;
use crate::types::Sentence;

pub use sparse::SparseVector;
pub use vocabulary::Vocabulary;

/// How matrix entries are populated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Weighting {
    /// Raw occurrence count of the term in the sentence
    Count,
    /// Term frequency times in-document inverse document frequency
    TfIdf,
}

/// Row normalization applied after tf-idf weighting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RowNorm {
    None,
    L2,
}

/// Tf-idf tuning knobs
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TfIdfOptions {
    /// Add-one smoothing on document frequency
    pub smooth_idf: bool,
    /// Replace tf with `1 + ln(tf)`
    pub sublinear_tf: bool,
    pub norm: RowNorm,
}

impl Default for TfIdfOptions {
    fn default() -> Self {
        Self {
            smooth_idf: true,
            sublinear_tf: false,
            norm: RowNorm::None,
        }
    }
}

impl TfIdfOptions {
    /// Inverse document frequency for a term seen in `df` of `n` sentences
    pub fn idf(&self, n: usize, df: usize) -> f64 {
        let (n, df) = (n as f64, df as f64);
        if self.smooth_idf {
            ((1.0 + n) / (1.0 + df)).ln() + 1.0
        } else {
            (n / df).ln() + 1.0
        }
    }

    fn tf(&self, count: u32) -> f64 {
        let tf = count as f64;
        if self.sublinear_tf {
            1.0 + tf.ln()
        } else {
            tf
        }
    }
}

/// Sparse sentence-term matrix of one document
#[derive(Debug, Clone)]
pub struct SentenceMatrix {
    /// One row per sentence, in sentence order
    pub rows: Vec<SparseVector>,
    pub vocabulary: Vocabulary,
    pub weighting: Weighting,
}

impl SentenceMatrix {
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    /// Column count (vocabulary size)
    pub fn num_cols(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn row(&self, index: usize) -> &SparseVector {
        &self.rows[index]
    }

    /// Total stored entries
    pub fn nnz(&self) -> usize {
        self.rows.iter().map(SparseVector::nnz).sum()
    }

    /// Rows with no surviving terms
    pub fn empty_rows(&self) -> usize {
        self.rows.iter().filter(|r| r.is_empty()).count()
    }
}

/// Sentence-to-matrix conversion, parameterized by tokenization and
/// stopword policy
#[derive(Debug, Clone, Default)]
pub struct Vectorizer {
    pub tokenizer: Tokenizer,
    pub stopwords: StopwordFilter,
    pub tfidf: TfIdfOptions,
}

impl Vectorizer {
    pub fn new(tokenizer: Tokenizer, stopwords: StopwordFilter) -> Self {
        Self {
            tokenizer,
            stopwords,
            tfidf: TfIdfOptions::default(),
        }
    }

    pub fn with_tfidf(mut self, tfidf: TfIdfOptions) -> Self {
        self.tfidf = tfidf;
        self
    }

    /// Build the matrix for `sentences` under `weighting`
    pub fn vectorize(&self, sentences: &[Sentence], weighting: Weighting) -> SentenceMatrix {
        let sentence_terms: Vec<Vec<String>> = sentences
            .iter()
            .map(|s| self.tokenizer.terms(&s.text, &self.stopwords))
            .collect();
        build_matrix(&sentence_terms, weighting, &self.tfidf)
    }
}

/// Build a matrix from per-sentence term lists
pub fn build_matrix<S: AsRef<str>>(
    sentence_terms: &[Vec<S>],
    weighting: Weighting,
    tfidf: &TfIdfOptions,
) -> SentenceMatrix {
    let vocabulary = Vocabulary::build(sentence_terms);

    let counts: Vec<FxHashMap<u32, u32>> = sentence_terms
        .iter()
        .map(|terms| {
            let mut row: FxHashMap<u32, u32> = FxHashMap::default();
            for term in terms {
                if let Some(col) = vocabulary.get(term.as_ref()) {
                    *row.entry(col).or_insert(0) += 1;
                }
            }
            row
        })
        .collect();

    let rows = match weighting {
        Weighting::Count => counts
            .iter()
            .map(|row| SparseVector::from_pairs(row.iter().map(|(&c, &n)| (c, n as f64)).collect()))
            .collect(),
        Weighting::TfIdf => {
            let mut df = vec![0usize; vocabulary.len()];
            for row in &counts {
                for &col in row.keys() {
                    df[col as usize] += 1;
                }
            }
            let n = sentence_terms.len();
            let idf: Vec<f64> = df.iter().map(|&d| tfidf.idf(n, d)).collect();

            counts
                .iter()
                .map(|row| {
                    let mut vector = SparseVector::from_pairs(
                        row.iter()
                            .map(|(&c, &count)| (c, tfidf.tf(count) * idf[c as usize]))
                            .collect(),
                    );
                    if tfidf.norm == RowNorm::L2 {
                        let norm = vector.norm();
                        if norm > 0.0 {
                            vector.scale(1.0 / norm);
                        }
                    }
                    vector
                })
                .collect()
        }
    };

    SentenceMatrix {
        rows,
        vocabulary,
        weighting,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms(rows: &[&[&str]]) -> Vec<Vec<String>> {
        rows.iter()
            .map(|r| r.iter().map(|t| t.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_count_weighting() {
        let m = build_matrix(
            &terms(&[&["cat", "cat", "sat"], &["dog"]]),
            Weighting::Count,
            &TfIdfOptions::default(),
        );
        assert_eq!(m.num_rows(), 2);
        assert_eq!(m.num_cols(), 3);
        let cat = m.vocabulary.get("cat").unwrap();
        let sat = m.vocabulary.get("sat").unwrap();
        assert_eq!(m.row(0).get(cat), 2.0);
        assert_eq!(m.row(0).get(sat), 1.0);
        assert_eq!(m.row(1).get(cat), 0.0);
    }

    #[test]
    fn test_tfidf_smoothing() {
        // "cat" in both sentences, "dog" in one: n = 2
        let m = build_matrix(
            &terms(&[&["cat", "dog"], &["cat"]]),
            Weighting::TfIdf,
            &TfIdfOptions::default(),
        );
        let cat = m.vocabulary.get("cat").unwrap();
        let dog = m.vocabulary.get("dog").unwrap();
        assert!((m.row(0).get(cat) - 1.0).abs() < 1e-12);
        let expected_dog = (3.0f64 / 2.0).ln() + 1.0;
        assert!((m.row(0).get(dog) - expected_dog).abs() < 1e-12);
        assert!((m.row(1).get(cat) - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_tfidf_unsmoothed_and_sublinear() {
        let opts = TfIdfOptions {
            smooth_idf: false,
            sublinear_tf: true,
            norm: RowNorm::None,
        };
        let m = build_matrix(&terms(&[&["ant", "ant"], &["bee"]]), Weighting::TfIdf, &opts);
        let ant = m.vocabulary.get("ant").unwrap();
        let expected = (1.0 + 2.0f64.ln()) * (2.0f64.ln() + 1.0);
        assert!((m.row(0).get(ant) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_l2_norm_rows() {
        let opts = TfIdfOptions {
            norm: RowNorm::L2,
            ..TfIdfOptions::default()
        };
        let m = build_matrix(
            &terms(&[&["ant", "bee", "bee"], &[]]),
            Weighting::TfIdf,
            &opts,
        );
        assert!((m.row(0).norm() - 1.0).abs() < 1e-12);
        assert!(m.row(1).is_empty());
    }

    #[test]
    fn test_stopword_only_sentence_is_zero_row() {
        let vectorizer = Vectorizer::new(
            Tokenizer::new(),
            StopwordFilter::from_list(["the", "on", "it", "was", "one"]),
        );
        let sentences = Sentence::from_texts(&["The cat sat on the mat. ", "It was the one."]);
        let m = vectorizer.vectorize(&sentences, Weighting::TfIdf);
        assert_eq!(m.num_rows(), 2);
        assert!(!m.row(0).is_empty());
        assert!(m.row(1).is_empty());
        assert_eq!(m.empty_rows(), 1);
    }

    #[test]
    fn test_no_terms_at_all() {
        let m = build_matrix::<String>(&[vec![], vec![]], Weighting::Count, &TfIdfOptions::default());
        assert_eq!(m.num_rows(), 2);
        assert_eq!(m.num_cols(), 0);
        assert_eq!(m.nnz(), 0);
    }
}
