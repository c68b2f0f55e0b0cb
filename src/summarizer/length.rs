//! Summary length resolution
//!
//! A raw length below 1 is a fraction of the sentence count; anything else
//! is an absolute sentence count (truncated). Fractions are rounded with a
//! fixed [`RoundingMode`], half-to-even by default, so `0.5` over 5
//! sentences selects 2 and `0.5` over 7 selects 4. The result is always
//! clamped into `[0, sentence_count]`.

use serde::{Deserialize, Serialize};

use crate::error::{Result, SummarizeError};

/// Rounding rule for fractional lengths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoundingMode {
    /// Ties go to the even neighbour (banker's rounding)
    #[default]
    HalfEven,
    /// Ties go away from zero (commercial rounding)
    HalfAwayFromZero,
}

impl RoundingMode {
    pub fn round(&self, value: f64) -> f64 {
        match self {
            RoundingMode::HalfEven => value.round_ties_even(),
            RoundingMode::HalfAwayFromZero => value.round(),
        }
    }
}

/// Requested summary length
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LengthSpec {
    /// Fraction of the document's sentences
    Ratio(f64),
    /// Absolute number of sentences
    Sentences(usize),
}

impl LengthSpec {
    /// Interpret a raw caller-supplied number.
    ///
    /// Non-positive or non-finite values are rejected.
    pub fn from_raw(value: f64) -> Result<Self> {
        if !value.is_finite() || value <= 0.0 {
            return Err(SummarizeError::InvalidLength { value });
        }
        if value < 1.0 {
            Ok(LengthSpec::Ratio(value))
        } else {
            Ok(LengthSpec::Sentences(value.trunc() as usize))
        }
    }

    /// Resolve to a sentence count in `[0, sentence_count]`
    pub fn resolve(&self, sentence_count: usize, rounding: RoundingMode) -> Result<usize> {
        match *self {
            LengthSpec::Ratio(ratio) => {
                if !ratio.is_finite() || ratio <= 0.0 {
                    return Err(SummarizeError::InvalidLength { value: ratio });
                }
                let resolved = rounding.round(ratio * sentence_count as f64);
                Ok((resolved.max(0.0) as usize).min(sentence_count))
            }
            LengthSpec::Sentences(0) => Err(SummarizeError::InvalidLength { value: 0.0 }),
            LengthSpec::Sentences(n) => Ok(n.min(sentence_count)),
        }
    }
}

impl TryFrom<f64> for LengthSpec {
    type Error = SummarizeError;

    fn try_from(value: f64) -> Result<Self> {
        LengthSpec::from_raw(value)
    }
}

impl From<usize> for LengthSpec {
    fn from(n: usize) -> Self {
        LengthSpec::Sentences(n)
    }
}
