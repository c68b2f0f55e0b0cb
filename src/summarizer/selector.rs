//! Top-k sentence selection with chronological restoration
//!
//! Sentences are ranked by score descending. Undefined (`NaN`) scores rank
//! below every defined score, and ties of any kind go to the lower sentence
//! index, so the ranking is a total order independent of sort stability.
//! The top `length` entries are then put back into document order.

use std::cmp::Ordering;

use crate::types::ScoreEntry;

/// Ranks scored sentences and picks the summary subset
#[derive(Debug, Clone, Copy, Default)]
pub struct SentenceSelector;

impl SentenceSelector {
    pub fn new() -> Self {
        Self
    }

    /// Total ranking order: higher score first, `NaN` last, lower index on ties
    pub fn compare(a: &ScoreEntry, b: &ScoreEntry) -> Ordering {
        let by_score = match (a.is_defined(), b.is_defined()) {
            (true, true) => b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal),
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => Ordering::Equal,
        };
        by_score.then_with(|| a.index.cmp(&b.index))
    }

    /// All entries in ranking order
    pub fn rank(&self, scores: &[ScoreEntry]) -> Vec<ScoreEntry> {
        let mut ranked = scores.to_vec();
        ranked.sort_by(Self::compare);
        ranked
    }

    /// Indices of the top `length` sentences, in document order.
    ///
    /// Returns `min(length, scores.len())` indices.
    pub fn select(&self, scores: &[ScoreEntry], length: usize) -> Vec<usize> {
        let mut chosen: Vec<usize> = self
            .rank(scores)
            .into_iter()
            .take(length)
            .map(|e| e.index)
            .collect();
        chosen.sort_unstable();
        chosen
    }
}
