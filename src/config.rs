//! Summarizer configuration
//!
//! Every field has a default, so a partial JSON document (or `{}`) is a
//! valid configuration.
//!
//! ```json
//! {
//!   "language": "en",
//!   "extra_stopwords": ["lorem"],
//!   "min_token_len": 2,
//!   "tfidf": { "smooth_idf": true, "sublinear_tf": false, "norm": "none" },
//!   "distance": { "minkowski_p": 2.0 },
//!   "rounding": "half_even"
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Result, SummarizeError};
use crate::nlp::stopwords::StopwordFilter;
use crate::nlp::tokenizer::Tokenizer;
use crate::scoring::DistanceOptions;
use crate::summarizer::length::RoundingMode;
use crate::vectorize::{TfIdfOptions, Vectorizer};

/// Tunables for one [`Summarizer`](crate::Summarizer)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SummarizerConfig {
    /// Stopword language (code or English name)
    pub language: String,
    /// Stopwords added on top of the language list
    pub extra_stopwords: Vec<String>,
    /// Minimum term length in characters
    pub min_token_len: usize,
    pub lowercase: bool,
    pub tfidf: TfIdfOptions,
    pub distance: DistanceOptions,
    /// Rounding of fractional lengths
    pub rounding: RoundingMode,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self {
            language: "en".to_string(),
            extra_stopwords: Vec::new(),
            min_token_len: 2,
            lowercase: true,
            tfidf: TfIdfOptions::default(),
            distance: DistanceOptions::default(),
            rounding: RoundingMode::default(),
        }
    }
}

impl SummarizerConfig {
    /// Parse and validate a JSON configuration
    pub fn from_json(json: &str) -> Result<Self> {
        let config: SummarizerConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.min_token_len == 0 {
            return Err(SummarizeError::InvalidConfig(
                "min_token_len must be at least 1".to_string(),
            ));
        }
        let p = self.distance.minkowski_p;
        if !p.is_finite() || p < 1.0 {
            return Err(SummarizeError::InvalidConfig(format!(
                "minkowski_p must be a finite number >= 1, got {p}"
            )));
        }
        Ok(())
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn with_extra_stopwords<I, S>(mut self, words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_stopwords.extend(words.into_iter().map(Into::into));
        self
    }

    pub fn with_min_token_len(mut self, min_token_len: usize) -> Self {
        self.min_token_len = min_token_len;
        self
    }

    pub fn with_tfidf(mut self, tfidf: TfIdfOptions) -> Self {
        self.tfidf = tfidf;
        self
    }

    pub fn with_minkowski_p(mut self, p: f64) -> Self {
        self.distance.minkowski_p = p;
        self
    }

    pub fn with_rounding(mut self, rounding: RoundingMode) -> Self {
        self.rounding = rounding;
        self
    }

    /// Stopword filter for this configuration
    pub fn stopwords(&self) -> StopwordFilter {
        let mut filter = StopwordFilter::new(&self.language);
        filter.add_stopwords(&self.extra_stopwords);
        filter
    }

    pub fn tokenizer(&self) -> Tokenizer {
        Tokenizer::new()
            .with_min_token_len(self.min_token_len)
            .with_lowercase(self.lowercase)
    }

    pub fn vectorizer(&self) -> Vectorizer {
        Vectorizer::new(self.tokenizer(), self.stopwords()).with_tfidf(self.tfidf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vectorize::RowNorm;

    #[test]
    fn test_empty_json_is_default() {
        let config = SummarizerConfig::from_json("{}").unwrap();
        assert_eq!(config, SummarizerConfig::default());
    }

    #[test]
    fn test_partial_json() {
        let json = r#"{
            "language": "de",
            "tfidf": { "norm": "l2" },
            "rounding": "half_away_from_zero"
        }"#;
        let config = SummarizerConfig::from_json(json).unwrap();
        assert_eq!(config.language, "de");
        assert_eq!(config.tfidf.norm, RowNorm::L2);
        assert!(config.tfidf.smooth_idf);
        assert_eq!(config.rounding, RoundingMode::HalfAwayFromZero);
        assert_eq!(config.min_token_len, 2);
    }

    #[test]
    fn test_json_roundtrip() {
        let config = SummarizerConfig::default()
            .with_extra_stopwords(["lorem", "ipsum"])
            .with_minkowski_p(3.0);
        let back = SummarizerConfig::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_validation_errors() {
        let bad_len = SummarizerConfig::default().with_min_token_len(0);
        assert!(matches!(
            bad_len.validate(),
            Err(SummarizeError::InvalidConfig(_))
        ));

        let bad_p = SummarizerConfig::default().with_minkowski_p(0.5);
        assert!(bad_p.validate().is_err());

        assert!(matches!(
            SummarizerConfig::from_json("{ not json"),
            Err(SummarizeError::Config(_))
        ));
        assert!(SummarizerConfig::from_json(r#"{"min_token_len": 0}"#).is_err());
    }

    #[test]
    fn test_extra_stopwords_applied() {
        let config = SummarizerConfig::default().with_extra_stopwords(["lorem"]);
        let filter = config.stopwords();
        assert!(filter.is_stopword("lorem"));
        assert!(filter.is_stopword("the"));
    }
}
