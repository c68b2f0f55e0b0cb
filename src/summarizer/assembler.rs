//! Summary assembly
//!
//! Selected sentences are concatenated verbatim. Sentence texts already
//! carry their trailing punctuation and whitespace, so no separator is
//! inserted and the output consists of exact source substrings.

use crate::types::Sentence;

/// Concatenate the sentences at `indices`, in the order given.
///
/// Indices outside `sentences` are skipped.
pub fn assemble(sentences: &[Sentence], indices: &[usize]) -> String {
    let capacity = indices
        .iter()
        .filter_map(|&i| sentences.get(i))
        .map(|s| s.text.len())
        .sum();
    let mut summary = String::with_capacity(capacity);
    for sentence in indices.iter().filter_map(|&i| sentences.get(i)) {
        summary.push_str(&sentence.text);
    }
    summary
}
