//! Sentence segmentation
//!
//! The segmenter is a seam: the pipeline only needs an ordered sequence of
//! [`Sentence`]s whose texts are exact source substrings. The default
//! implementation follows Unicode sentence boundaries (UAX #29).

use unicode_segmentation::UnicodeSegmentation;

use crate::types::Sentence;

/// Splits raw text into an ordered sequence of sentences.
pub trait SentenceSegmenter {
    fn segment(&self, text: &str) -> Vec<Sentence>;
}

/// UAX #29 sentence boundaries.
///
/// Each sentence keeps its trailing whitespace. Whitespace-only segments
/// are dropped and do not consume an index.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnicodeSentenceSegmenter;

impl SentenceSegmenter for UnicodeSentenceSegmenter {
    fn segment(&self, text: &str) -> Vec<Sentence> {
        text.split_sentence_bound_indices()
            .filter(|(_, s)| !s.trim().is_empty())
            .enumerate()
            .map(|(index, (start, s))| Sentence::new(s, index, start, start + s.len()))
            .collect()
    }
}

/// Treats every non-blank line as one sentence.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineSegmenter;

impl SentenceSegmenter for LineSegmenter {
    fn segment(&self, text: &str) -> Vec<Sentence> {
        let mut offset = 0;
        let mut sentences = Vec::new();
        for line in text.split_inclusive('\n') {
            let start = offset;
            offset += line.len();
            if line.trim().is_empty() {
                continue;
            }
            let index = sentences.len();
            sentences.push(Sentence::new(line, index, start, offset));
        }
        sentences
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unicode_segments_keep_whitespace() {
        let text = "A cat sat. A dog ran. It was sunny.";
        let sentences = UnicodeSentenceSegmenter.segment(text);
        assert_eq!(sentences.len(), 3);
        assert_eq!(sentences[0].text, "A cat sat. ");
        assert_eq!(sentences[2].text, "It was sunny.");

        let rebuilt: String = sentences.iter().map(|s| s.text.as_str()).collect();
        assert_eq!(rebuilt, text);
    }

    #[test]
    fn test_offsets_match_source() {
        let text = "First one! Second one? Third.";
        for s in UnicodeSentenceSegmenter.segment(text) {
            assert_eq!(&text[s.start..s.end], s.text);
        }
    }

    #[test]
    fn test_blank_text_has_no_sentences() {
        assert!(UnicodeSentenceSegmenter.segment("").is_empty());
        assert!(UnicodeSentenceSegmenter.segment("   \n\t ").is_empty());
    }

    #[test]
    fn test_indices_are_consecutive() {
        let sentences = UnicodeSentenceSegmenter.segment("One. Two. Three.");
        let indices: Vec<_> = sentences.iter().map(|s| s.index).collect();
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_line_segmenter_skips_blank_lines() {
        let text = "alpha\n\nbeta\ngamma";
        let sentences = LineSegmenter.segment(text);
        assert_eq!(sentences.len(), 3);
        assert_eq!(sentences[0].text, "alpha\n");
        assert_eq!(sentences[1].index, 1);
        assert_eq!(&text[sentences[1].start..sentences[1].end], "beta\n");
        assert_eq!(sentences[2].text, "gamma");
    }
}
