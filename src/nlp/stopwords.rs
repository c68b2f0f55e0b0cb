//! Stopword policy for vectorization
//!
//! Stopwords come from the `stop-words` crate per language, optionally
//! extended or pruned by the caller. Terms listed here never enter the
//! document vocabulary.

use rustc_hash::FxHashSet;
use stop_words::{get, LANGUAGE};

/// A set of terms excluded from the vocabulary
#[derive(Debug, Clone)]
pub struct StopwordFilter {
    /// Stopwords, lowercased unless the filter is case-sensitive
    words: FxHashSet<String>,
    case_sensitive: bool,
}

impl Default for StopwordFilter {
    fn default() -> Self {
        Self::new("en")
    }
}

impl StopwordFilter {
    /// Stopwords for a language code or name (`"en"`, `"german"`, ...).
    ///
    /// Unknown languages fall back to English.
    pub fn new(language: &str) -> Self {
        let lang = resolve_language(language).unwrap_or_else(|| {
            #[cfg(feature = "tracing")]
            tracing::debug!(language, "unknown stopword language, using English");
            LANGUAGE::English
        });
        Self {
            words: get(lang).iter().map(|w| w.to_string()).collect(),
            case_sensitive: false,
        }
    }

    /// A filter that keeps every term
    pub fn empty() -> Self {
        Self {
            words: FxHashSet::default(),
            case_sensitive: false,
        }
    }

    /// A filter built from an explicit word list
    pub fn from_list<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut filter = Self::empty();
        filter.add_stopwords(words);
        filter
    }

    /// Match words exactly instead of case-insensitively
    pub fn with_case_sensitive(mut self, case_sensitive: bool) -> Self {
        self.case_sensitive = case_sensitive;
        self
    }

    pub fn add_stopwords<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.words
            .extend(words.into_iter().map(|w| w.as_ref().to_lowercase()));
    }

    pub fn remove_stopwords<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            self.words.remove(&word.as_ref().to_lowercase());
        }
    }

    pub fn is_stopword(&self, word: &str) -> bool {
        if self.case_sensitive {
            self.words.contains(word)
        } else {
            self.words.contains(&word.to_lowercase())
        }
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

fn resolve_language(language: &str) -> Option<LANGUAGE> {
    let lang = match language.trim().to_lowercase().as_str() {
        "en" | "english" => LANGUAGE::English,
        "de" | "german" => LANGUAGE::German,
        "fr" | "french" => LANGUAGE::French,
        "es" | "spanish" => LANGUAGE::Spanish,
        "it" | "italian" => LANGUAGE::Italian,
        "pt" | "portuguese" => LANGUAGE::Portuguese,
        "nl" | "dutch" => LANGUAGE::Dutch,
        "ru" | "russian" => LANGUAGE::Russian,
        "sv" | "swedish" => LANGUAGE::Swedish,
        "no" | "norwegian" => LANGUAGE::Norwegian,
        "da" | "danish" => LANGUAGE::Danish,
        "fi" | "finnish" => LANGUAGE::Finnish,
        "hu" | "hungarian" => LANGUAGE::Hungarian,
        "tr" | "turkish" => LANGUAGE::Turkish,
        "pl" | "polish" => LANGUAGE::Polish,
        "ar" | "arabic" => LANGUAGE::Arabic,
        _ => return None,
    };
    Some(lang)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_defaults() {
        let filter = StopwordFilter::default();
        assert!(filter.is_stopword("the"));
        assert!(filter.is_stopword("The"));
        assert!(filter.is_stopword("and"));
        assert!(!filter.is_stopword("summarization"));
    }

    #[test]
    fn test_unknown_language_falls_back_to_english() {
        let filter = StopwordFilter::new("klingon");
        assert!(filter.is_stopword("the"));
    }

    #[test]
    fn test_from_list_and_edit() {
        let mut filter = StopwordFilter::from_list(["Foo", "bar"]);
        assert!(filter.is_stopword("foo"));
        assert!(filter.is_stopword("BAR"));
        assert_eq!(filter.len(), 2);

        filter.add_stopwords(["baz"]);
        filter.remove_stopwords(["foo"]);
        assert!(filter.is_stopword("baz"));
        assert!(!filter.is_stopword("foo"));
    }

    #[test]
    fn test_empty_keeps_everything() {
        let filter = StopwordFilter::empty();
        assert!(filter.is_empty());
        assert!(!filter.is_stopword("the"));
    }

    #[test]
    fn test_case_sensitive_lookup() {
        let filter = StopwordFilter::from_list(["the"]).with_case_sensitive(true);
        assert!(filter.is_stopword("the"));
        assert!(!filter.is_stopword("The"));
    }

    #[test]
    fn test_german_list() {
        let filter = StopwordFilter::new("german");
        assert!(filter.is_stopword("und"));
    }
}
