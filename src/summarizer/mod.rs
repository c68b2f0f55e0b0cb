//! Summarization components
//!
//! Length resolution, top-k sentence selection with chronological
//! restoration, and verbatim assembly of the selected sentences.

pub mod assembler;
pub mod length;
pub mod selector;

pub use assembler::assemble;
pub use length::{LengthSpec, RoundingMode};
pub use selector::SentenceSelector;
