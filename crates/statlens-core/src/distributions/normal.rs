//! Standard normal distribution
//!
//! Closed-form approximations only: the Abramowitz–Stegun error function and
//! the Beasley–Springer–Moro inverse CDF. Both are accurate well below the
//! precision any reported statistic is rounded to.

use crate::errors::{StatsError, StatsResult};
use crate::types::ConfidenceLevel;

// Abramowitz & Stegun 7.1.26
const ERF_A1: f64 = 0.254829592;
const ERF_A2: f64 = -0.284496736;
const ERF_A3: f64 = 1.421413741;
const ERF_A4: f64 = -1.453152027;
const ERF_A5: f64 = 1.061405429;
const ERF_P: f64 = 0.3275911;

// Beasley–Springer (central region) and Moro (tails)
const BSM_A: [f64; 4] = [
    2.50662823884,
    -18.61500062529,
    41.39119773534,
    -25.44106049637,
];
const BSM_B: [f64; 4] = [
    -8.47351093090,
    23.08336743743,
    -21.06224101826,
    3.13082909833,
];
const BSM_C: [f64; 9] = [
    0.3374754822726147,
    0.9761690190917186,
    0.1607979714918209,
    0.0276438810333863,
    0.0038405729373609,
    0.0003951896511919,
    0.0000321767881768,
    0.0000002888167364,
    0.0000003960315187,
];

fn erf_poly(t: f64) -> f64 {
    ((((ERF_A5 * t + ERF_A4) * t + ERF_A3) * t + ERF_A2) * t + ERF_A1) * t
}

/// Error function
///
/// Rational approximation with maximum absolute error about 1.5e-7.
/// Odd-symmetric by construction: `erf(-x) == -erf(x)` exactly, and
/// `erf(0) == 0` exactly.
pub fn erf(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();

    // The tabulated coefficients sum to 1 + 1e-9; normalize so the origin is exact
    let t = 1.0 / (1.0 + ERF_P * x);
    let y = 1.0 - erf_poly(t) / erf_poly(1.0) * (-x * x).exp();

    sign * y
}

/// Standard normal cumulative distribution function `P(Z <= z)`
pub fn normal_cdf(z: f64) -> f64 {
    0.5 * (1.0 + erf(z / std::f64::consts::SQRT_2))
}

/// Standard normal quantile function
///
/// # Errors
/// `StatsError::InvalidArgument` unless `0 < p < 1`.
pub fn normal_inverse_cdf(p: f64) -> StatsResult<f64> {
    if !(p > 0.0 && p < 1.0) {
        return Err(StatsError::InvalidArgument(format!(
            "normal_inverse_cdf requires p in (0, 1), got {}",
            p
        )));
    }
    Ok(inverse_cdf_in_range(p))
}

/// Quantile for a `p` already known to be inside (0, 1)
pub(crate) fn inverse_cdf_in_range(p: f64) -> f64 {
    let y = p - 0.5;

    if y.abs() < 0.42 {
        let r = y * y;
        let num = ((BSM_A[3] * r + BSM_A[2]) * r + BSM_A[1]) * r + BSM_A[0];
        let den = (((BSM_B[3] * r + BSM_B[2]) * r + BSM_B[1]) * r + BSM_B[0]) * r + 1.0;
        return y * num / den;
    }

    let tail = if y < 0.0 { p } else { 1.0 - p };
    let r = (-tail.ln()).ln();
    let x = BSM_C
        .iter()
        .rev()
        .fold(0.0, |acc, &c| acc * r + c);

    if y < 0.0 {
        -x
    } else {
        x
    }
}

/// Two-sided critical value of the standard normal distribution
///
/// The conventional levels (alpha of 0.01, 0.05 and 0.10) return the
/// tabulated values 2.576, 1.96 and 1.645; anything else goes through
/// [`normal_inverse_cdf`] at `1 - alpha/2`.
pub fn z_critical(level: ConfidenceLevel) -> f64 {
    let alpha = level.alpha();

    if (alpha - 0.01).abs() < 1e-9 {
        2.576
    } else if (alpha - 0.05).abs() < 1e-9 {
        1.96
    } else if (alpha - 0.10).abs() < 1e-9 {
        1.645
    } else {
        inverse_cdf_in_range(1.0 - alpha / 2.0)
    }
}
