//! Natural Language Processing components
//!
//! Sentence segmentation, term tokenization and stopword filtering.

pub mod segmenter;
pub mod stopwords;
pub mod tokenizer;
