//! Stateless entry point mirroring the historical call surface
//!
//! `StatisticalEngine` has no fields. Construct it once and share it freely;
//! every method is a thin wrapper over the module-level functions.

use crate::distributions;
use crate::errors::StatsResult;
use crate::models::fit_linear;
use crate::readability::{readability_score, ReadabilityMethod, ReadabilityResult};
use crate::tests::correlation::{pearson, spearman, PearsonOptions, SpearmanOptions};
use crate::tests::parametric::{t_test, TTestOptions};
use crate::tests::significance::{z_test, SignificanceOptions};
use crate::tests::{Alternative, CorrelationResult, HypothesisTestResult};
use crate::types::{ConfidenceLevel, RegressionOptions, RegressionResult};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatisticalEngine;

impl StatisticalEngine {
    pub const fn new() -> Self {
        StatisticalEngine
    }

    /// Pearson correlation; never fails, see [`CorrelationResult::empty`]
    pub fn calculate_pearson_correlation(
        &self,
        x: &[f64],
        y: &[f64],
        confidence_level: ConfidenceLevel,
    ) -> CorrelationResult {
        pearson(x, y, &PearsonOptions { confidence_level })
    }

    /// Spearman correlation with the default (min rank) tie handling
    pub fn calculate_spearman_correlation(
        &self,
        x: &[f64],
        y: &[f64],
        confidence_level: ConfidenceLevel,
    ) -> CorrelationResult {
        spearman(
            x,
            y,
            &SpearmanOptions {
                confidence_level,
                ..Default::default()
            },
        )
    }

    pub fn perform_linear_regression(
        &self,
        x: &[f64],
        y: &[f64],
        confidence_level: ConfidenceLevel,
    ) -> StatsResult<RegressionResult> {
        fit_linear(x, y, &RegressionOptions { confidence_level })
    }

    /// Welch t-test, or paired t-test when `paired` is set
    pub fn perform_t_test(
        &self,
        sample1: &[f64],
        sample2: &[f64],
        confidence_level: ConfidenceLevel,
        paired: bool,
    ) -> StatsResult<HypothesisTestResult> {
        t_test(
            sample1,
            sample2,
            &TTestOptions {
                confidence_level,
                paired,
            },
        )
    }

    pub fn test_statistical_significance(
        &self,
        observed: f64,
        expected: f64,
        standard_error: f64,
        alternative: Alternative,
        alpha: f64,
    ) -> StatsResult<HypothesisTestResult> {
        z_test(
            observed,
            expected,
            standard_error,
            &SignificanceOptions { alternative, alpha },
        )
    }

    pub fn calculate_readability_score(
        &self,
        text: &str,
        method: ReadabilityMethod,
    ) -> ReadabilityResult {
        readability_score(text, method)
    }

    pub fn z_critical(&self, confidence_level: ConfidenceLevel) -> f64 {
        distributions::z_critical(confidence_level)
    }

    pub fn t_critical(&self, confidence_level: ConfidenceLevel, df: f64) -> f64 {
        distributions::t_critical(confidence_level, df)
    }
}
