//! Staged summarization pipeline
//!
//! [`runner::Summarizer`] threads artifacts through the stages and reports
//! to a [`observer::SummaryObserver`] at each boundary.

pub mod observer;
pub mod runner;
