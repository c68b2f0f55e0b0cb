//! Term extraction
//!
//! Splits a sentence into vocabulary terms on Unicode word boundaries
//! (UAX #29). Punctuation-only segments and terms shorter than
//! `min_token_len` characters are discarded.

use unicode_segmentation::UnicodeSegmentation;

use super::stopwords::StopwordFilter;

/// Term tokenizer used by the vectorizer
#[derive(Debug, Clone)]
pub struct Tokenizer {
    /// Minimum term length in characters
    pub min_token_len: usize,
    /// Fold terms to lowercase
    pub lowercase: bool,
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self {
            min_token_len: 2,
            lowercase: true,
        }
    }
}

impl Tokenizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_min_token_len(mut self, min_token_len: usize) -> Self {
        self.min_token_len = min_token_len;
        self
    }

    pub fn with_lowercase(mut self, lowercase: bool) -> Self {
        self.lowercase = lowercase;
        self
    }

    /// All terms of `text` in order of appearance
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        text.unicode_words()
            .filter(|w| w.chars().any(char::is_alphanumeric))
            .filter(|w| w.chars().count() >= self.min_token_len)
            .map(|w| {
                if self.lowercase {
                    w.to_lowercase()
                } else {
                    w.to_string()
                }
            })
            .collect()
    }

    /// Terms of `text` that survive the stopword filter
    pub fn terms(&self, text: &str, stopwords: &StopwordFilter) -> Vec<String> {
        self.tokenize(text)
            .into_iter()
            .filter(|t| !stopwords.is_stopword(t))
            .collect()
    }
}
