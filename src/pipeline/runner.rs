//! Pipeline runner — orchestrates stage execution and artifact flow.
//!
//! [`Summarizer`] runs segment → vectorize → score → select → assemble,
//! notifying an optional [`SummaryObserver`] at each boundary. It holds only
//! immutable configuration, so one instance can serve concurrent calls.
//!
//! # Static dispatch
//!
//! `Summarizer` is generic over its [`SentenceSegmenter`]; the default
//! [`UnicodeSentenceSegmenter`] is zero-sized.

use std::borrow::Cow;

use crate::config::SummarizerConfig;
use crate::error::{Result, SummarizeError};
use crate::nlp::segmenter::{SentenceSegmenter, UnicodeSentenceSegmenter};
use crate::pipeline::observer::{
    NoopObserver, StageClock, StageReport, SummaryObserver, STAGE_ASSEMBLE, STAGE_SCORE,
    STAGE_SEGMENT, STAGE_SELECT, STAGE_VECTORIZE,
};
use crate::scoring::{ScoreOutput, Scoring};
use crate::summarizer::assembler::assemble;
use crate::summarizer::length::LengthSpec;
use crate::summarizer::selector::SentenceSelector;
use crate::types::{ScoreEntry, Sentence, SummaryReport, SummaryResult};
use crate::vectorize::Vectorizer;

/// Enter a tracing span for a pipeline stage (when the `tracing` feature is
/// enabled). When disabled, this is a no-op and the compiler eliminates it.
macro_rules! trace_stage {
    ($name:expr) => {
        #[cfg(feature = "tracing")]
        let _span = tracing::info_span!("summarize_stage", stage = $name).entered();
    };
}

/// Extractive summarizer
#[derive(Debug, Clone)]
pub struct Summarizer<Seg = UnicodeSentenceSegmenter> {
    config: SummarizerConfig,
    vectorizer: Vectorizer,
    segmenter: Seg,
    selector: SentenceSelector,
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Summarizer {
    /// Summarizer with the default configuration
    pub fn new() -> Self {
        let config = SummarizerConfig::default();
        Self {
            vectorizer: config.vectorizer(),
            config,
            segmenter: UnicodeSentenceSegmenter,
            selector: SentenceSelector::new(),
        }
    }

    /// Summarizer with a validated custom configuration
    pub fn with_config(config: SummarizerConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            vectorizer: config.vectorizer(),
            config,
            segmenter: UnicodeSentenceSegmenter,
            selector: SentenceSelector::new(),
        })
    }
}

impl<Seg> Summarizer<Seg> {
    /// Swap the sentence segmenter
    pub fn with_segmenter<S: SentenceSegmenter>(self, segmenter: S) -> Summarizer<S> {
        Summarizer {
            config: self.config,
            vectorizer: self.vectorizer,
            segmenter,
            selector: self.selector,
        }
    }

    pub fn config(&self) -> &SummarizerConfig {
        &self.config
    }

    pub fn vectorizer(&self) -> &Vectorizer {
        &self.vectorizer
    }
}

impl<Seg: SentenceSegmenter> Summarizer<Seg> {
    /// Split `text` into sentences with the configured segmenter
    pub fn segment(&self, text: &str) -> Vec<Sentence> {
        self.segmenter.segment(text)
    }

    /// Summarize `text` to `length` sentences under `scoring`
    pub fn summarize(
        &self,
        text: &str,
        length: LengthSpec,
        scoring: Scoring,
    ) -> Result<SummaryResult> {
        self.summarize_with_observer(text, length, scoring, &mut NoopObserver)
    }

    /// Same as [`Summarizer::summarize`], reporting to `observer`
    pub fn summarize_with_observer(
        &self,
        text: &str,
        length: LengthSpec,
        scoring: Scoring,
        observer: &mut impl SummaryObserver,
    ) -> Result<SummaryResult> {
        trace_stage!(STAGE_SEGMENT);
        observer.on_stage_start(STAGE_SEGMENT);
        let clock = StageClock::start();
        let sentences = self.segment(text);
        let report = StageReport::new(clock.elapsed()).with_items(sentences.len());
        observer.on_stage_end(STAGE_SEGMENT, &report);

        self.summarize_sentences_with_observer(&sentences, length, scoring, observer)
    }

    /// Summarize pre-segmented sentences.
    ///
    /// Sentences are put in `index` order first, so the slice order does not
    /// matter. Score entries and the selection are keyed by `Sentence::index`.
    pub fn summarize_sentences(
        &self,
        sentences: &[Sentence],
        length: LengthSpec,
        scoring: Scoring,
    ) -> Result<SummaryResult> {
        self.summarize_sentences_with_observer(sentences, length, scoring, &mut NoopObserver)
    }

    /// Same as [`Summarizer::summarize_sentences`], reporting to `observer`
    pub fn summarize_sentences_with_observer(
        &self,
        sentences: &[Sentence],
        length: LengthSpec,
        scoring: Scoring,
        observer: &mut impl SummaryObserver,
    ) -> Result<SummaryResult> {
        if sentences.is_empty() {
            return Err(SummarizeError::EmptyDocument);
        }
        let ordered = document_order(sentences);
        let sentences: &[Sentence] = &ordered;
        observer.on_sentences(sentences);
        let resolved_length = length.resolve(sentences.len(), self.config.rounding)?;

        // Stage 1: Vectorize
        trace_stage!(STAGE_VECTORIZE);
        observer.on_stage_start(STAGE_VECTORIZE);
        let clock = StageClock::start();
        let matrix = self.vectorizer.vectorize(sentences, scoring.weighting());
        let report = StageReport::new(clock.elapsed()).with_items(matrix.num_rows());
        observer.on_stage_end(STAGE_VECTORIZE, &report);
        observer.on_matrix(&matrix);

        // Stage 2: Score
        trace_stage!(STAGE_SCORE);
        observer.on_stage_start(STAGE_SCORE);
        let clock = StageClock::start();
        // entries come back keyed by row position
        let by_row = scoring.score(&matrix, &self.config.distance);
        let scores = ScoreOutput {
            entries: by_row
                .entries
                .iter()
                .map(|e| ScoreEntry::new(sentences[e.index].index, e.score))
                .collect(),
            degenerate: by_row.degenerate,
        };
        let report = StageReport::new(clock.elapsed())
            .with_items(scores.entries.len())
            .with_warnings(scores.degenerate);
        observer.on_stage_end(STAGE_SCORE, &report);
        observer.on_scores(&scores);

        // Stage 3: Select
        trace_stage!(STAGE_SELECT);
        observer.on_stage_start(STAGE_SELECT);
        let clock = StageClock::start();
        let rows = self.selector.select(&by_row.entries, resolved_length);
        let picked: Vec<Sentence> = rows.iter().map(|&row| sentences[row].clone()).collect();
        let selected: Vec<usize> = picked.iter().map(|s| s.index).collect();
        let report = StageReport::new(clock.elapsed()).with_items(selected.len());
        observer.on_stage_end(STAGE_SELECT, &report);
        observer.on_selection(&selected);

        // Stage 4: Assemble
        trace_stage!(STAGE_ASSEMBLE);
        observer.on_stage_start(STAGE_ASSEMBLE);
        let clock = StageClock::start();
        let text = assemble(sentences, &rows);
        let report = StageReport::new(clock.elapsed()).with_items(text.len());
        observer.on_stage_end(STAGE_ASSEMBLE, &report);

        #[cfg(feature = "tracing")]
        tracing::debug!(
            strategy = scoring.name(),
            sentences = sentences.len(),
            vocabulary = matrix.num_cols(),
            selected = selected.len(),
            degenerate = scores.degenerate,
            "summary assembled"
        );

        let report = SummaryReport {
            sentence_count: sentences.len(),
            resolved_length,
            vocabulary_size: matrix.num_cols(),
            degenerate_scores: scores.degenerate,
            strategy: scoring.name().to_string(),
        };
        Ok(SummaryResult {
            sentences: picked,
            text,
            scores: scores.entries,
            report,
        })
    }
}

/// Borrow `sentences` when already in `index` order, otherwise sort a copy.
/// The sort is stable, so duplicate indices keep their slice order.
fn document_order(sentences: &[Sentence]) -> Cow<'_, [Sentence]> {
    if sentences.windows(2).all(|w| w[0].index <= w[1].index) {
        return Cow::Borrowed(sentences);
    }
    let mut owned = sentences.to_vec();
    owned.sort_by_key(|s| s.index);
    Cow::Owned(owned)
}
