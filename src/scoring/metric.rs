//! Vector distance metrics over sparse non-negative vectors
//!
//! Real-valued metrics walk the union of non-zero entries; entries that are
//! zero in both vectors contribute nothing. Boolean metrics treat a
//! non-zero weight as "term present" and need the full dimension to count
//! terms absent from both vectors.
//!
//! Boolean metrics (see [`Metric::is_boolean`]) give the same result for
//! any positive counts, so `jaccard` of `[2, 1]` and `[1, 1]` is 0. scipy's
//! `jaccard` counts unequal non-zero entries as dissimilar and would give
//! 0.5 there; the two agree on 0/1 vectors.
//!
//! Undefined results (a zero denominator) are returned as `NaN`, except
//! where the conventional definition fixes a value: `jaccard` of two empty
//! vectors is 0, `yule` without discordant terms is 0, and `canberra`
//! skips 0/0 terms.

use serde::{Deserialize, Serialize};

use crate::vectorize::SparseVector;

/// Supported pairwise distance metrics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Euclidean,
    SqEuclidean,
    Cityblock,
    Chebyshev,
    Minkowski,
    Cosine,
    Correlation,
    BrayCurtis,
    Canberra,
    Jaccard,
    Hamming,
    Dice,
    RogersTanimoto,
    RussellRao,
    SokalMichener,
    SokalSneath,
    Yule,
}

impl Metric {
    /// Every supported metric, in declaration order
    pub const ALL: [Metric; 17] = [
        Metric::Euclidean,
        Metric::SqEuclidean,
        Metric::Cityblock,
        Metric::Chebyshev,
        Metric::Minkowski,
        Metric::Cosine,
        Metric::Correlation,
        Metric::BrayCurtis,
        Metric::Canberra,
        Metric::Jaccard,
        Metric::Hamming,
        Metric::Dice,
        Metric::RogersTanimoto,
        Metric::RussellRao,
        Metric::SokalMichener,
        Metric::SokalSneath,
        Metric::Yule,
    ];

    /// Returns the user-facing name used in requests and error messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Euclidean => "euclidean",
            Self::SqEuclidean => "sqeuclidean",
            Self::Cityblock => "cityblock",
            Self::Chebyshev => "chebyshev",
            Self::Minkowski => "minkowski",
            Self::Cosine => "cosine",
            Self::Correlation => "correlation",
            Self::BrayCurtis => "braycurtis",
            Self::Canberra => "canberra",
            Self::Jaccard => "jaccard",
            Self::Hamming => "hamming",
            Self::Dice => "dice",
            Self::RogersTanimoto => "rogerstanimoto",
            Self::RussellRao => "russellrao",
            Self::SokalMichener => "sokalmichener",
            Self::SokalSneath => "sokalsneath",
            Self::Yule => "yule",
        }
    }

    /// Parse a metric name (case-insensitive; `manhattan` is accepted for
    /// `cityblock`)
    pub fn parse(name: &str) -> Option<Metric> {
        let name = name.trim().to_lowercase();
        if name == "manhattan" {
            return Some(Metric::Cityblock);
        }
        Self::ALL.iter().copied().find(|m| m.as_str() == name)
    }

    /// Whether the metric only looks at term presence
    pub fn is_boolean(&self) -> bool {
        matches!(
            self,
            Self::Jaccard
                | Self::Dice
                | Self::RogersTanimoto
                | Self::RussellRao
                | Self::SokalMichener
                | Self::SokalSneath
                | Self::Yule
        )
    }

    /// Distance between `u` and `v` in a space of `dim` dimensions.
    ///
    /// `p` is the Minkowski order and is ignored by every other metric.
    pub fn distance(&self, u: &SparseVector, v: &SparseVector, dim: usize, p: f64) -> f64 {
        match self {
            Self::Euclidean => squared_euclidean(u, v).sqrt(),
            Self::SqEuclidean => squared_euclidean(u, v),
            Self::Cityblock => u.zip_union(v).map(|(_, a, b)| (a - b).abs()).sum(),
            Self::Chebyshev => u
                .zip_union(v)
                .map(|(_, a, b)| (a - b).abs())
                .fold(0.0, f64::max),
            Self::Minkowski => u
                .zip_union(v)
                .map(|(_, a, b)| (a - b).abs().powf(p))
                .sum::<f64>()
                .powf(1.0 / p),
            Self::Cosine => cosine(u, v),
            Self::Correlation => correlation(u, v, dim),
            Self::BrayCurtis => {
                let (num, den) = u
                    .zip_union(v)
                    .fold((0.0, 0.0), |(n, d), (_, a, b)| (n + (a - b).abs(), d + (a + b).abs()));
                ratio(num, den)
            }
            Self::Canberra => u
                .zip_union(v)
                .map(|(_, a, b)| (a - b).abs() / (a.abs() + b.abs()))
                .sum(),
            Self::Hamming => {
                let unequal = u.zip_union(v).filter(|(_, a, b)| a != b).count();
                ratio(unequal as f64, dim as f64)
            }
            Self::Jaccard
            | Self::Dice
            | Self::RogersTanimoto
            | Self::RussellRao
            | Self::SokalMichener
            | Self::SokalSneath
            | Self::Yule => boolean_distance(*self, PresenceCounts::new(u, v, dim)),
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `num / den`, or `NaN` when the denominator is zero
fn ratio(num: f64, den: f64) -> f64 {
    if den == 0.0 {
        f64::NAN
    } else {
        num / den
    }
}

fn squared_euclidean(u: &SparseVector, v: &SparseVector) -> f64 {
    u.zip_union(v).map(|(_, a, b)| (a - b) * (a - b)).sum()
}

fn cosine(u: &SparseVector, v: &SparseVector) -> f64 {
    let norms = u.norm() * v.norm();
    if norms == 0.0 {
        return f64::NAN;
    }
    1.0 - u.dot(v) / norms
}

/// Cosine distance of the mean-centered vectors, computed without
/// densifying: centering only shifts the sums by `n * mean` terms.
fn correlation(u: &SparseVector, v: &SparseVector, dim: usize) -> f64 {
    if dim == 0 {
        return f64::NAN;
    }
    let n = dim as f64;
    let (su, sv) = (u.sum(), v.sum());
    let (qu, qv) = (u.sum_of_squares(), v.sum_of_squares());

    let var_u = qu - su * su / n;
    let var_v = qv - sv * sv / n;
    if var_u <= f64::EPSILON * qu.max(1.0) || var_v <= f64::EPSILON * qv.max(1.0) {
        return f64::NAN;
    }
    let cov = u.dot(v) - su * sv / n;
    1.0 - cov / (var_u * var_v).sqrt()
}

/// Contingency counts of term presence between two vectors
#[derive(Debug, Clone, Copy, PartialEq)]
struct PresenceCounts {
    /// present in both
    tt: f64,
    /// only in the first
    tf: f64,
    /// only in the second
    ft: f64,
    /// in neither
    ff: f64,
}

impl PresenceCounts {
    fn new(u: &SparseVector, v: &SparseVector, dim: usize) -> Self {
        let (mut tt, mut tf, mut ft) = (0usize, 0usize, 0usize);
        for (_, a, b) in u.zip_union(v) {
            match (a != 0.0, b != 0.0) {
                (true, true) => tt += 1,
                (true, false) => tf += 1,
                (false, true) => ft += 1,
                (false, false) => {}
            }
        }
        let ff = dim.saturating_sub(tt + tf + ft);
        Self {
            tt: tt as f64,
            tf: tf as f64,
            ft: ft as f64,
            ff: ff as f64,
        }
    }

    fn dim(&self) -> f64 {
        self.tt + self.tf + self.ft + self.ff
    }
}

fn boolean_distance(metric: Metric, c: PresenceCounts) -> f64 {
    debug_assert!(metric.is_boolean(), "{metric} is not a boolean metric");
    let discordant = c.tf + c.ft;
    match metric {
        Metric::Jaccard => {
            let den = c.tt + discordant;
            if den == 0.0 {
                0.0
            } else {
                discordant / den
            }
        }
        Metric::Dice => ratio(discordant, 2.0 * c.tt + discordant),
        Metric::RogersTanimoto | Metric::SokalMichener => {
            let r = 2.0 * discordant;
            ratio(r, c.tt + c.ff + r)
        }
        Metric::RussellRao => ratio(c.dim() - c.tt, c.dim()),
        Metric::SokalSneath => {
            let r = 2.0 * discordant;
            ratio(r, c.tt + r)
        }
        Metric::Yule => {
            let half_r = c.tf * c.ft;
            if half_r == 0.0 {
                0.0
            } else {
                2.0 * half_r / (c.tt * c.ff + half_r)
            }
        }
        _ => f64::NAN,
    }
}
