//! Error types for the summarization pipeline.

use thiserror::Error;

/// Errors surfaced by a summarization call.
///
/// Every error is detected synchronously before or during the stage that
/// raises it; there is never a partial summary alongside an error.
#[derive(Error, Debug)]
pub enum SummarizeError {
    /// The document produced zero sentences after segmentation.
    #[error("Empty document: no sentences found after segmentation")]
    EmptyDocument,

    /// The raw length specification is non-positive or not a finite number.
    #[error("Invalid length: {value} (expected a positive number)")]
    InvalidLength { value: f64 },

    /// The scoring name matches neither `"sum"` nor a supported metric.
    #[error("Unknown scoring strategy: '{0}'")]
    UnknownStrategy(String),

    /// A configuration value is out of range.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Malformed JSON configuration.
    #[error("Config parse error")]
    Config(#[from] serde_json::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SummarizeError>;
