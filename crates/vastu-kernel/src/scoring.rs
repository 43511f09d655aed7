//! Deviation bands, balance scores and weighted composites.
//!
//! Every rule module classifies through `classify_deviation`; the thresholds are not
//! parameters. A module that genuinely needs other bands must add a separately named
//! classifier next to this one.

use crate::cfg::WEIGHT_SUM_EPS;
use crate::error::KernelError;

/// Qualitative verdict for a deviation, best first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Band {
    Excellent,
    Good,
    Moderate,
    Poor,
    Critical,
}

impl Band {
    pub const ALL: [Band; 5] = [
        Band::Excellent,
        Band::Good,
        Band::Moderate,
        Band::Poor,
        Band::Critical,
    ];

    /// Stable lowercase identifier, for keys and serialization.
    pub fn label(self) -> &'static str {
        match self {
            Band::Excellent => "excellent",
            Band::Good => "good",
            Band::Moderate => "moderate",
            Band::Poor => "poor",
            Band::Critical => "critical",
        }
    }
}

/// Step function of `|deviation|`: ≤5 excellent, ≤15 good, ≤30 moderate, ≤50 poor,
/// otherwise (including NaN) critical.
pub fn classify_deviation(deviation: f64) -> Band {
    let d = deviation.abs();
    if d <= 5.0 {
        Band::Excellent
    } else if d <= 15.0 {
        Band::Good
    } else if d <= 30.0 {
        Band::Moderate
    } else if d <= 50.0 {
        Band::Poor
    } else {
        Band::Critical
    }
}

/// Arithmetic mean; 0 for empty input.
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population standard deviation; 0 for fewer than two values.
pub fn standard_deviation(values: &[f64]) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let m = mean(values);
    let var = values.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / values.len() as f64;
    var.sqrt()
}

/// Measured coverage judged against an ideal percentage.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BalanceScore {
    /// `clamp(100 − |deviation|, 0, 100)`: 100 is a perfect match.
    pub normalized_value: f64,
    /// `measured − ideal`, signed (positive means over-built).
    pub deviation: f64,
    pub band: Band,
}

impl BalanceScore {
    pub fn evaluate(measured: f64, ideal: f64) -> Self {
        let deviation = measured - ideal;
        Self {
            normalized_value: (100.0 - deviation.abs()).clamp(0.0, 100.0),
            deviation,
            band: classify_deviation(deviation),
        }
    }
}

/// One term of a composite index.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WeightedScore {
    pub value: f64,
    pub weight: f64,
}

impl WeightedScore {
    #[inline]
    pub fn new(value: f64, weight: f64) -> Self {
        Self { value, weight }
    }
}

/// `Σ weight·value` over terms whose weights are finite, non-negative and sum to 1
/// (within `1e-6`). Order of terms does not matter.
pub fn weighted_composite(scores: &[WeightedScore]) -> Result<f64, KernelError> {
    if let Some(bad) = scores
        .iter()
        .find(|s| !s.weight.is_finite() || s.weight < 0.0)
    {
        return Err(KernelError::weight(format!(
            "weight {} is negative or not finite",
            bad.weight
        )));
    }
    let sum: f64 = scores.iter().map(|s| s.weight).sum();
    if (sum - 1.0).abs() > WEIGHT_SUM_EPS {
        return Err(KernelError::weight(format!("weights sum to {sum}, expected 1")));
    }
    Ok(scores.iter().map(|s| s.value * s.weight).sum())
}
