//! # rapid_summarizer
//!
//! Extractive text summarization. A document is split into sentences, each
//! sentence becomes a sparse term vector, every sentence gets an importance
//! score, and the best sentences are returned verbatim in document order.
//!
//! Two scoring strategies are available:
//! - **sum**: sum of tf-idf weights per sentence
//! - **distance**: mean pairwise distance to the other sentences over term
//!   counts, under one of the metrics in [`Metric`]
//!
//! ```
//! let text = "Rust is fast. Rust is safe. The weather was nice. Cargo builds Rust code.";
//! let summary = rapid_summarizer::summarize(text, 2.0, "sum", None).unwrap();
//! assert!(!summary.is_empty());
//! ```

pub mod config;
pub mod error;
pub mod nlp;
pub mod pipeline;
pub mod scoring;
pub mod summarizer;
pub mod types;
pub mod vectorize;

pub use config::SummarizerConfig;
pub use error::{Result, SummarizeError};
pub use pipeline::runner::Summarizer;
pub use scoring::{Metric, Scoring};
pub use summarizer::{LengthSpec, RoundingMode};
pub use types::{ScoreEntry, Sentence, SummaryReport, SummaryResult};

/// Summarize `text` with the default configuration.
///
/// - `length_spec`: values below 1 are a fraction of the sentence count,
///   values of 1 or more an absolute sentence count.
/// - `scoring`: `"sum"`, a metric name such as `"cosine"`, or `"distance"`
///   together with `metric`.
///
/// Validation order: the scoring name first, then the document, then the
/// length.
pub fn summarize(
    text: &str,
    length_spec: f64,
    scoring: &str,
    metric: Option<&str>,
) -> Result<String> {
    let scoring = Scoring::parse(scoring, metric)?;
    let summarizer = Summarizer::new();

    let sentences = summarizer.segment(text);
    if sentences.is_empty() {
        return Err(SummarizeError::EmptyDocument);
    }
    let length = LengthSpec::from_raw(length_spec)?;

    summarizer
        .summarize_sentences(&sentences, length, scoring)
        .map(|result| result.text)
}
