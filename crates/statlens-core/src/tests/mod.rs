//! Statistical hypothesis testing
//!
//! Correlation analysis, t-tests and the single-sample z-test. Correlation
//! never fails: degenerate input produces [`CorrelationResult::empty`]. The
//! t-tests and the z-test return [`StatsResult`](crate::StatsResult) and
//! reject degenerate input with an error.


use serde::{Deserialize, Serialize};
use std::fmt;

use crate::types::{ConfidenceInterval, StatisticalResult};

/// Alternative hypothesis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Alternative {
    /// observed != expected
    #[default]
    TwoSided,
    /// observed < expected
    Less,
    /// observed > expected
    Greater,
}

impl Alternative {
    pub fn is_one_tailed(self) -> bool {
        !matches!(self, Alternative::TwoSided)
    }
}

/// Which test produced a [`HypothesisTestResult`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TestType {
    #[serde(rename = "welch_t_test")]
    WelchT,
    #[serde(rename = "paired_t_test")]
    PairedT,
    #[serde(rename = "z_test_two_tailed")]
    ZTwoTailed,
    #[serde(rename = "z_test_one_tailed")]
    ZOneTailed,
}

impl fmt::Display for TestType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            TestType::WelchT => "Welch two-sample t-test",
            TestType::PairedT => "Paired t-test",
            TestType::ZTwoTailed => "Two-tailed z-test",
            TestType::ZOneTailed => "One-tailed z-test",
        };
        f.write_str(name)
    }
}

/// Outcome of a t-test or z-test
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HypothesisTestResult {
    /// t or z statistic
    pub test_statistic: f64,
    pub p_value: f64,
    /// Magnitude the statistic has to exceed to reject the null
    pub critical_value: f64,
    pub reject_null: bool,
    /// `(1 - alpha) * 100`
    pub confidence_level: f64,
    pub test_type: TestType,
    /// Cohen's d for t-tests
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub effect_size: Option<f64>,
    /// Degrees of freedom (fractional for Welch)
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub degrees_of_freedom: Option<f64>,
    /// Interval for the mean difference
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub confidence_interval: Option<ConfidenceInterval>,
    /// Total number of observations used
    pub sample_size: usize,
}

/// Kind of correlation coefficient
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorrelationType {
    Pearson,
    Spearman,
}

/// Verbal strength of |r|
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CorrelationStrength {
    VeryWeak,
    Weak,
    Moderate,
    Strong,
    VeryStrong,
}

impl CorrelationStrength {
    /// Classify with the 0.3 / 0.5 / 0.7 / 0.9 thresholds on |r|
    pub fn from_coefficient(r: f64) -> Self {
        let r = r.abs();
        if r >= 0.9 {
            CorrelationStrength::VeryStrong
        } else if r >= 0.7 {
            CorrelationStrength::Strong
        } else if r >= 0.5 {
            CorrelationStrength::Moderate
        } else if r >= 0.3 {
            CorrelationStrength::Weak
        } else {
            CorrelationStrength::VeryWeak
        }
    }
}

/// Sign of the association
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CorrelationDirection {
    Positive,
    Negative,
    None,
}

impl CorrelationDirection {
    pub fn from_coefficient(r: f64) -> Self {
        if r > 0.0 {
            CorrelationDirection::Positive
        } else if r < 0.0 {
            CorrelationDirection::Negative
        } else {
            CorrelationDirection::None
        }
    }
}

/// Correlation coefficient with significance and confidence interval
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorrelationResult {
    #[serde(flatten)]
    pub stats: StatisticalResult,
    pub correlation_type: CorrelationType,
    pub strength: CorrelationStrength,
    pub direction: CorrelationDirection,
}

impl CorrelationResult {
    /// Result returned when fewer than 3 usable pairs remain or either
    /// series has zero variance
    pub fn empty(correlation_type: CorrelationType) -> Self {
        Self {
            stats: StatisticalResult {
                value: 0.0,
                confidence: 0.0,
                p_value: None,
                standard_error: None,
                confidence_interval: None,
                sample_size: 0,
                methodology: "Insufficient data for correlation analysis".into(),
            },
            correlation_type,
            strength: CorrelationStrength::VeryWeak,
            direction: CorrelationDirection::None,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.stats.sample_size == 0
    }

    /// The coefficient itself
    pub fn r(&self) -> f64 {
        self.stats.value
    }
}

/// Keep finite values only
fn filter_finite(data: &[f64]) -> Vec<f64> {
    data.iter().copied().filter(|x| x.is_finite()).collect()
}

/// Pair two slices index by index, dropping pairs with a non-finite member
///
/// Elements past the end of the shorter slice have no partner and are dropped.
fn finite_pairs(x: &[f64], y: &[f64]) -> (Vec<f64>, Vec<f64>) {
    x.iter()
        .zip(y.iter())
        .filter(|(a, b)| a.is_finite() && b.is_finite())
        .map(|(a, b)| (*a, *b))
        .unzip()
}

fn mean(data: &[f64]) -> f64 {
    data.iter().sum::<f64>() / data.len() as f64
}

/// Whether every element equals the first one
///
/// Deviation sums of a constant series are not reliably zero in floating
/// point (`[0.1; 3]` leaves ~1e-33), so constancy is checked on the values.
pub(crate) fn is_constant(data: &[f64]) -> bool {
    match data.split_first() {
        Some((&first, rest)) => rest.iter().all(|&v| v == first),
        None => true,
    }
}

/// Unbiased sample variance (n - 1 denominator)
fn sample_variance(data: &[f64], mean: f64) -> f64 {
    let ss: f64 = data.iter().map(|v| (v - mean) * (v - mean)).sum();
    ss / (data.len() as f64 - 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strength_thresholds() {
        assert_eq!(CorrelationStrength::from_coefficient(0.95), CorrelationStrength::VeryStrong);
        assert_eq!(CorrelationStrength::from_coefficient(-0.9), CorrelationStrength::VeryStrong);
        assert_eq!(CorrelationStrength::from_coefficient(0.75), CorrelationStrength::Strong);
        assert_eq!(CorrelationStrength::from_coefficient(-0.55), CorrelationStrength::Moderate);
        assert_eq!(CorrelationStrength::from_coefficient(0.3), CorrelationStrength::Weak);
        assert_eq!(CorrelationStrength::from_coefficient(0.1), CorrelationStrength::VeryWeak);
    }

    #[test]
    fn test_direction() {
        assert_eq!(CorrelationDirection::from_coefficient(0.2), CorrelationDirection::Positive);
        assert_eq!(CorrelationDirection::from_coefficient(-0.2), CorrelationDirection::Negative);
        assert_eq!(CorrelationDirection::from_coefficient(0.0), CorrelationDirection::None);
    }

    #[test]
    fn test_finite_pairs() {
        let x = vec![1.0, f64::NAN, 3.0, 4.0, 5.0];
        let y = vec![2.0, 3.0, f64::INFINITY, 5.0];
        let (xf, yf) = finite_pairs(&x, &y);
        assert_eq!(xf, vec![1.0, 4.0]);
        assert_eq!(yf, vec![2.0, 5.0]);
    }

    #[test]
    fn test_sample_variance() {
        let data = [10.0, 12.0, 9.0, 11.0, 10.0];
        let m = mean(&data);
        assert!((m - 10.4).abs() < 1e-12);
        assert!((sample_variance(&data, m) - 1.3).abs() < 1e-12);
    }

    #[test]
    fn test_is_constant() {
        assert!(is_constant(&[0.1, 0.1, 0.1]));
        assert!(is_constant(&[7.0]));
        assert!(is_constant(&[]));
        assert!(!is_constant(&[0.1, 0.1, 0.1000000001]));
    }

    #[test]
    fn test_empty_correlation_serializes_without_optionals() {
        let json = serde_json::to_value(CorrelationResult::empty(CorrelationType::Spearman)).unwrap();
        assert_eq!(json["value"], 0.0);
        assert_eq!(json["sampleSize"], 0);
        assert_eq!(json["correlationType"], "spearman");
        assert_eq!(json["strength"], "very_weak");
        assert_eq!(json["direction"], "none");
        assert!(json.get("pValue").is_none());
    }
}
