//! Core data types shared across pipeline stages.

use serde::Serialize;

/// A sentence of the source document.
///
/// `text` is the exact source substring (trailing whitespace included), so
/// concatenating selected sentences reproduces the source verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Sentence {
    /// Exact text as found in the source
    pub text: String,
    /// 0-based position in the document; the only reassembly key
    pub index: usize,
    /// Byte offset of the first character in the source
    pub start: usize,
    /// Byte offset one past the last character in the source
    pub end: usize,
}

impl Sentence {
    pub fn new(text: impl Into<String>, index: usize, start: usize, end: usize) -> Self {
        Self {
            text: text.into(),
            index,
            start,
            end,
        }
    }

    /// Build sentences from pre-segmented strings.
    ///
    /// Offsets are computed as if the strings were concatenated in order.
    pub fn from_texts<S: AsRef<str>>(texts: &[S]) -> Vec<Sentence> {
        let mut offset = 0;
        texts
            .iter()
            .enumerate()
            .map(|(index, text)| {
                let text = text.as_ref();
                let start = offset;
                offset += text.len();
                Sentence::new(text, index, start, offset)
            })
            .collect()
    }

    /// Text without surrounding whitespace
    pub fn trimmed(&self) -> &str {
        self.text.trim()
    }
}

/// Importance score of one sentence. Higher is more important; `NaN`
/// marks an undefined score.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreEntry {
    pub index: usize,
    pub score: f64,
}

impl ScoreEntry {
    pub fn new(index: usize, score: f64) -> Self {
        Self { index, score }
    }

    /// Whether the score is defined (not `NaN`)
    pub fn is_defined(&self) -> bool {
        !self.score.is_nan()
    }
}

/// Diagnostics collected over one summarization call.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SummaryReport {
    /// Sentences found in the document
    pub sentence_count: usize,
    /// Length after resolution and clamping
    pub resolved_length: usize,
    /// Distinct non-stopword terms
    pub vocabulary_size: usize,
    /// Sentences whose score was undefined
    pub degenerate_scores: usize,
    /// Name of the scoring strategy used
    pub strategy: String,
}

/// Output of a summarization call.
#[derive(Debug, Clone, Serialize)]
pub struct SummaryResult {
    /// Selected sentences in document order
    pub sentences: Vec<Sentence>,
    /// Concatenated summary text
    pub text: String,
    /// Score of every sentence in document order, keyed by `Sentence::index`
    pub scores: Vec<ScoreEntry>,
    pub report: SummaryReport,
}

impl SummaryResult {
    /// Positions of the selected sentences
    pub fn indices(&self) -> Vec<usize> {
        self.sentences.iter().map(|s| s.index).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_texts_offsets() {
        let sentences = Sentence::from_texts(&["One. ", "Two."]);
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[0].start, 0);
        assert_eq!(sentences[0].end, 5);
        assert_eq!(sentences[1].start, 5);
        assert_eq!(sentences[1].index, 1);
        assert_eq!(sentences[0].trimmed(), "One.");
    }

    #[test]
    fn test_score_entry_defined() {
        assert!(ScoreEntry::new(0, 1.5).is_defined());
        assert!(!ScoreEntry::new(1, f64::NAN).is_defined());
    }
}
