//! Probability distribution approximations shared by every estimator
//!
//! - Error function and standard normal CDF / quantile
//! - z and t critical values
//! - Two-tailed t p-values
//! - Fisher z-transform of a correlation coefficient

mod normal;
mod student;

pub use normal::{erf, normal_cdf, normal_inverse_cdf, z_critical};
pub use student::{t_critical, t_two_tailed_p_value, LARGE_SAMPLE_DF};

pub(crate) use normal::inverse_cdf_in_range;

/// Fisher z-transform `0.5 · ln((1 + r)/(1 - r))`
///
/// Infinite for |r| = 1.
pub fn fisher_z(r: f64) -> f64 {
    0.5 * ((1.0 + r) / (1.0 - r)).ln()
}

/// Inverse of [`fisher_z`]: `(e^{2z} - 1)/(e^{2z} + 1)`
pub fn fisher_z_inverse(z: f64) -> f64 {
    // tanh is the same expression without overflowing for large |z|
    z.tanh()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_fisher_round_trip() {
        for &r in &[-0.95, -0.5, 0.0, 0.3, 0.8, 0.99] {
            assert_abs_diff_eq!(fisher_z_inverse(fisher_z(r)), r, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_fisher_limits() {
        assert_eq!(fisher_z(1.0), f64::INFINITY);
        assert_eq!(fisher_z(-1.0), f64::NEG_INFINITY);
        assert_eq!(fisher_z_inverse(f64::INFINITY), 1.0);
        assert_eq!(fisher_z_inverse(f64::NEG_INFINITY), -1.0);
    }
}
