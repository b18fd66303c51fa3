//! Simple linear regression (one predictor, ordinary least squares)

use tracing::{debug, trace};

use crate::distributions::{t_critical, t_two_tailed_p_value};
use crate::errors::{StatsError, StatsResult};
use crate::tests::is_constant;
use crate::types::{ConfidenceInterval, RegressionOptions, RegressionResult};

/// Fewest usable observations a fit accepts
pub const MIN_OBSERVATIONS: usize = 3;

/// Fit `y = intercept + slope * x` by least squares
///
/// # Arguments
/// * `x` - Predictor values
/// * `y` - Response values (same length as `x`)
/// * `options` - Fitting options
///
/// # Returns
/// * `RegressionResult` with the fitted line, goodness of fit and inference
///   on the slope
///
/// # Errors
/// * `DimensionMismatch` if `x` and `y` differ in length
/// * `InsufficientData` if fewer than 3 finite pairs remain
/// * `InsufficientDataMsg` if the predictor has zero variance
pub fn fit_linear(
    x: &[f64],
    y: &[f64],
    options: &RegressionOptions,
) -> StatsResult<RegressionResult> {
    if x.len() != y.len() {
        return Err(StatsError::DimensionMismatch {
            left: x.len(),
            right: y.len(),
        });
    }

    // Filter out pairs with NaN or infinite values
    let (x_valid, y_valid): (Vec<f64>, Vec<f64>) = x
        .iter()
        .zip(y.iter())
        .filter(|(a, b)| a.is_finite() && b.is_finite())
        .map(|(a, b)| (*a, *b))
        .unzip();

    let n_valid = x_valid.len();
    if n_valid < MIN_OBSERVATIONS {
        debug!(n = n_valid, "regression rejected: too few observations");
        return Err(StatsError::InsufficientData {
            required: MIN_OBSERVATIONS,
            actual: n_valid,
        });
    }

    let n = n_valid as f64;
    let mean_x = x_valid.iter().sum::<f64>() / n;
    let mean_y = y_valid.iter().sum::<f64>() / n;

    let mut ss_xx = 0.0;
    let mut ss_xy = 0.0;
    let mut ss_total = 0.0;
    for (&xi, &yi) in x_valid.iter().zip(y_valid.iter()) {
        let dx = xi - mean_x;
        let dy = yi - mean_y;
        ss_xx += dx * dx;
        ss_xy += dx * dy;
        ss_total += dy * dy;
    }

    if is_constant(&x_valid) {
        debug!(n = n_valid, "regression rejected: constant predictor");
        return Err(StatsError::InsufficientDataMsg(
            "predictor has zero variance, slope is undefined".into(),
        ));
    }

    if is_constant(&y_valid) {
        ss_xy = 0.0;
        ss_total = 0.0;
    }

    let slope = ss_xy / ss_xx;
    let intercept = mean_y - slope * mean_x;

    let predictions: Vec<f64> = x_valid.iter().map(|&xi| intercept + slope * xi).collect();
    let residuals: Vec<f64> = y_valid
        .iter()
        .zip(predictions.iter())
        .map(|(&yi, &fitted)| yi - fitted)
        .collect();
    let ss_residual: f64 = residuals.iter().map(|r| r * r).sum();

    let (r_squared, adjusted_r_squared) = if ss_total == 0.0 {
        (0.0, 0.0)
    } else {
        (
            1.0 - ss_residual / ss_total,
            1.0 - (ss_residual / (n - 2.0)) / (ss_total / (n - 1.0)),
        )
    };

    let df = n - 2.0;
    let mse = ss_residual / df;
    let standard_error = (mse / ss_xx).sqrt();
    let critical_value = t_critical(options.confidence_level, df);

    // A perfect fit leaves no residual variance to test against
    let (t_statistic, p_value) = if standard_error > 0.0 {
        let t = slope / standard_error;
        (t, t_two_tailed_p_value(t, df))
    } else if slope == 0.0 {
        (0.0, 1.0)
    } else {
        (f64::INFINITY.copysign(slope), 0.0)
    };

    trace!(slope, intercept, r_squared, t_statistic, p_value, "linear fit computed");

    Ok(RegressionResult {
        slope,
        intercept,
        r_squared,
        adjusted_r_squared,
        standard_error,
        t_statistic,
        p_value,
        confidence_interval: ConfidenceInterval::around(slope, critical_value * standard_error),
        residuals,
        predictions,
        sample_size: n_valid,
        confidence_level: options.confidence_level,
    })
}
