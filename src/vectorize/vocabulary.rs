//! Per-document vocabulary
//!
//! Terms are sorted lexicographically before indices are assigned, so the
//! column layout depends only on the document's term set and never on
//! hash iteration order.

use rustc_hash::{FxHashMap, FxHashSet};

/// Distinct non-stopword terms of one document
#[derive(Debug, Clone, Default)]
pub struct Vocabulary {
    terms: Vec<String>,
    index: FxHashMap<String, u32>,
}

impl Vocabulary {
    /// Build from the term lists of every sentence
    pub fn build<S: AsRef<str>>(sentence_terms: &[Vec<S>]) -> Self {
        let distinct: FxHashSet<&str> = sentence_terms
            .iter()
            .flat_map(|terms| terms.iter().map(|t| t.as_ref()))
            .collect();

        let mut terms: Vec<String> = distinct.into_iter().map(str::to_string).collect();
        terms.sort_unstable();

        let index = terms
            .iter()
            .enumerate()
            .map(|(i, t)| (t.clone(), i as u32))
            .collect();

        Self { terms, index }
    }

    /// Column index of a term
    pub fn get(&self, term: &str) -> Option<u32> {
        self.index.get(term).copied()
    }

    /// Term at a column index
    pub fn term(&self, index: u32) -> Option<&str> {
        self.terms.get(index as usize).map(String::as_str)
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}
