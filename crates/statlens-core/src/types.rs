use serde::{Deserialize, Serialize};

use crate::errors::{StatsError, StatsResult};

/// Two-sided confidence level, strictly between 0 and 1
///
/// Serialized as a bare number. Deserialization goes through
/// [`ConfidenceLevel::new`], so out-of-range values are rejected.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct ConfidenceLevel(f64);

impl ConfidenceLevel {
    /// 95%, the default everywhere in the engine
    pub const DEFAULT: ConfidenceLevel = ConfidenceLevel(0.95);

    pub fn new(level: f64) -> StatsResult<Self> {
        if level.is_finite() && level > 0.0 && level < 1.0 {
            Ok(Self(level))
        } else {
            Err(StatsError::InvalidConfidenceLevel(level))
        }
    }

    /// Build from a significance level: `level = 1 - alpha`
    ///
    /// # Errors
    /// `InvalidArgument` naming `alpha` unless `0 < alpha < 1`.
    pub fn from_alpha(alpha: f64) -> StatsResult<Self> {
        if !(alpha.is_finite() && alpha > 0.0 && alpha < 1.0) {
            return Err(StatsError::InvalidArgument(format!(
                "alpha must be in (0, 1), got {}",
                alpha
            )));
        }
        Self::new(1.0 - alpha)
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Significance level `1 - level`
    pub fn alpha(self) -> f64 {
        1.0 - self.0
    }

    /// Level expressed in percent, as reported on test results
    pub fn as_percent(self) -> f64 {
        self.0 * 100.0
    }
}

impl Default for ConfidenceLevel {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl TryFrom<f64> for ConfidenceLevel {
    type Error = StatsError;

    fn try_from(level: f64) -> StatsResult<Self> {
        Self::new(level)
    }
}

impl From<ConfidenceLevel> for f64 {
    fn from(level: ConfidenceLevel) -> f64 {
        level.0
    }
}

/// Closed interval `[lower, upper]`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    pub lower: f64,
    pub upper: f64,
}

impl ConfidenceInterval {
    pub fn new(lower: f64, upper: f64) -> Self {
        Self { lower, upper }
    }

    /// Symmetric interval `center ± half_width`
    pub fn around(center: f64, half_width: f64) -> Self {
        Self {
            lower: center - half_width,
            upper: center + half_width,
        }
    }

    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }
}

/// Common shape shared by the estimators
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticalResult {
    /// Point estimate
    pub value: f64,
    /// `(1 - p_value) * 100`, 0 for degenerate input
    pub confidence: f64,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub p_value: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub standard_error: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub confidence_interval: Option<ConfidenceInterval>,
    /// Number of observations actually used
    pub sample_size: usize,
    /// Human readable description of the method
    pub methodology: String,
}

/// Result of a simple (one predictor) least squares fit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegressionResult {
    pub slope: f64,
    pub intercept: f64,
    /// Coefficient of determination
    pub r_squared: f64,
    pub adjusted_r_squared: f64,
    /// Standard error of the slope
    pub standard_error: f64,
    /// t-statistic of the slope against zero
    pub t_statistic: f64,
    /// Two-tailed p-value of the slope
    pub p_value: f64,
    /// Confidence interval of the slope
    pub confidence_interval: ConfidenceInterval,
    /// `y - ŷ` for every observation used in the fit
    pub residuals: Vec<f64>,
    /// Fitted values `ŷ`
    pub predictions: Vec<f64>,
    pub sample_size: usize,
    pub confidence_level: ConfidenceLevel,
}

impl RegressionResult {
    /// Evaluate the fitted line at `x`
    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }

    /// Degrees of freedom of the residuals
    pub fn df(&self) -> usize {
        self.sample_size.saturating_sub(2)
    }
}

/// Options for simple linear regression
#[derive(Debug, Clone, Default)]
pub struct RegressionOptions {
    /// Confidence level for the slope interval (default: 0.95)
    pub confidence_level: ConfidenceLevel,
}
