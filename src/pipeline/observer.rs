//! Pipeline observer — hooks for logging, profiling, and debugging.
//!
//! Observers receive notifications at stage boundaries without coupling to
//! stage logic. Every hook has a no-op default, so an observer only
//! implements what it cares about.

use std::time::{Duration, Instant};

use crate::scoring::ScoreOutput;
use crate::types::Sentence;
use crate::vectorize::SentenceMatrix;

pub const STAGE_SEGMENT: &str = "segment";
pub const STAGE_VECTORIZE: &str = "vectorize";
pub const STAGE_SCORE: &str = "score";
pub const STAGE_SELECT: &str = "select";
pub const STAGE_ASSEMBLE: &str = "assemble";

/// Stage names in execution order
pub const STAGES: [&str; 5] = [
    STAGE_SEGMENT,
    STAGE_VECTORIZE,
    STAGE_SCORE,
    STAGE_SELECT,
    STAGE_ASSEMBLE,
];

/// Wall-clock timer for one stage
#[derive(Debug, Clone, Copy)]
pub struct StageClock(Instant);

impl StageClock {
    pub fn start() -> Self {
        Self(Instant::now())
    }

    pub fn elapsed(&self) -> Duration {
        self.0.elapsed()
    }
}

/// What a stage reports when it finishes
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StageReport {
    pub elapsed: Duration,
    /// Items produced by the stage (sentences, rows, scores, indices, bytes)
    pub items: Option<usize>,
    /// Non-fatal problems seen by the stage
    pub warnings: usize,
}

impl StageReport {
    pub fn new(elapsed: Duration) -> Self {
        Self {
            elapsed,
            ..Self::default()
        }
    }

    pub fn with_items(mut self, items: usize) -> Self {
        self.items = Some(items);
        self
    }

    pub fn with_warnings(mut self, warnings: usize) -> Self {
        self.warnings = warnings;
        self
    }
}

/// Callbacks at stage boundaries and on intermediate artifacts
pub trait SummaryObserver {
    fn on_stage_start(&mut self, _stage: &'static str) {}

    fn on_stage_end(&mut self, _stage: &'static str, _report: &StageReport) {}

    fn on_sentences(&mut self, _sentences: &[Sentence]) {}

    fn on_matrix(&mut self, _matrix: &SentenceMatrix) {}

    fn on_scores(&mut self, _scores: &ScoreOutput) {}

    fn on_selection(&mut self, _indices: &[usize]) {}
}

/// Observer that ignores everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SummaryObserver for NoopObserver {}

/// Observer that keeps every stage report, in order
#[derive(Debug, Clone, Default)]
pub struct RecordingObserver {
    pub stages: Vec<(&'static str, StageReport)>,
    pub selection: Vec<usize>,
}

impl RecordingObserver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stage names seen so far
    pub fn stage_names(&self) -> Vec<&'static str> {
        self.stages.iter().map(|(name, _)| *name).collect()
    }

    pub fn report(&self, stage: &str) -> Option<&StageReport> {
        self.stages
            .iter()
            .find(|(name, _)| *name == stage)
            .map(|(_, report)| report)
    }
}

impl SummaryObserver for RecordingObserver {
    fn on_stage_end(&mut self, stage: &'static str, report: &StageReport) {
        self.stages.push((stage, report.clone()));
    }

    fn on_selection(&mut self, indices: &[usize]) {
        self.selection = indices.to_vec();
    }
}
