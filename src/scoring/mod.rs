//! Sentence scoring strategies
//!
//! Two closed-form strategies over the sentence-term matrix:
//! - [`Scoring::Sum`]: row sums of tf-idf weights
//! - [`Scoring::Distance`]: mean pairwise distance over term counts
//!
//! Strategy names are parsed into [`Scoring`] at the boundary, so an
//! unsupported name never reaches the scoring code.

pub mod distance;
pub mod metric;
pub mod sum;

use crate::error::{Result, SummarizeError};
use crate::types::ScoreEntry;
use crate::vectorize::{SentenceMatrix, Weighting};

pub use distance::{score_distance, DistanceMatrix, DistanceOptions};
pub use metric::Metric;
pub use sum::score_sum;

/// Scoring strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scoring {
    /// Weight-sum over tf-idf weights
    Sum,
    /// Pairwise-distance mean over term counts
    Distance(Metric),
}

impl Scoring {
    /// Parse a `(scoring, metric)` pair.
    ///
    /// - `"sum"` selects weight-sum scoring; `metric` is ignored.
    /// - a metric name selects distance scoring with that metric; a `metric`
    ///   naming a different (or unknown) metric is rejected.
    /// - `"distance"` selects distance scoring with `metric`, which must be
    ///   present and supported.
    pub fn parse(scoring: &str, metric: Option<&str>) -> Result<Self> {
        let name = scoring.trim().to_lowercase();
        if name == "sum" {
            return Ok(Scoring::Sum);
        }
        if name == "distance" {
            return match metric.and_then(Metric::parse) {
                Some(m) => Ok(Scoring::Distance(m)),
                None => Err(SummarizeError::UnknownStrategy(format!(
                    "distance (metric: {})",
                    metric.unwrap_or("<none>")
                ))),
            };
        }
        let selected = Metric::parse(&name)
            .ok_or_else(|| SummarizeError::UnknownStrategy(scoring.to_string()))?;
        match metric {
            Some(extra) if Metric::parse(extra) != Some(selected) => {
                Err(SummarizeError::UnknownStrategy(format!(
                    "{} (metric: {extra})",
                    selected.as_str()
                )))
            }
            _ => Ok(Scoring::Distance(selected)),
        }
    }

    /// Weighting scheme the strategy is defined over
    pub fn weighting(&self) -> Weighting {
        match self {
            Scoring::Sum => Weighting::TfIdf,
            Scoring::Distance(_) => Weighting::Count,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Scoring::Sum => "sum",
            Scoring::Distance(metric) => metric.as_str(),
        }
    }

    /// Score every row of `matrix`
    pub fn score(&self, matrix: &SentenceMatrix, options: &DistanceOptions) -> ScoreOutput {
        match self {
            Scoring::Sum => score_sum(matrix),
            Scoring::Distance(metric) => score_distance(matrix, *metric, options),
        }
    }
}

impl std::str::FromStr for Scoring {
    type Err = SummarizeError;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        Scoring::parse(value, None)
    }
}

impl std::fmt::Display for Scoring {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-sentence scores plus the number of undefined ones
#[derive(Debug, Clone, Default)]
pub struct ScoreOutput {
    /// One entry per sentence, in sentence order
    pub entries: Vec<ScoreEntry>,
    /// Entries whose score is `NaN`
    pub degenerate: usize,
}

impl ScoreOutput {
    pub fn new(entries: Vec<ScoreEntry>) -> Self {
        let degenerate = entries.iter().filter(|e| !e.is_defined()).count();
        Self {
            entries,
            degenerate,
        }
    }
}
