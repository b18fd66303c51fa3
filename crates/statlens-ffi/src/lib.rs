//! C FFI boundary for statlens
//!
//! Every entry point takes plain `#[repr(C)]` values, catches panics from the
//! core crate and reports failures through a [`StatlensError`] out-parameter.
//! Buffers handed to the caller are allocated with `malloc` and released with
//! the matching `statlens_free_*` function.

mod types;

pub use types::*;

use libc::c_char;
use statlens_core::distributions::{normal_cdf, normal_inverse_cdf};
use statlens_core::models::fit_linear;
use statlens_core::readability::readability_score;
use statlens_core::tests::correlation::{
    pearson, spearman, PearsonOptions, SpearmanOptions, TieMethod,
};
use statlens_core::tests::parametric::{t_test, TTestOptions};
use statlens_core::tests::significance::{z_test, SignificanceOptions};
use statlens_core::{
    t_critical, z_critical, ConfidenceLevel, CorrelationResult, HypothesisTestResult,
    RegressionOptions, StatsError, StatsResult,
};
use std::ffi::CStr;
use tracing::warn;
use tracing_subscriber::EnvFilter;

/// Environment variable read by [`statlens_init_logging`]
const LOG_ENV: &str = "STATLENS_LOG";

/// Convert StatsError to ErrorCode
fn error_to_code(err: &StatsError) -> ErrorCode {
    match err {
        StatsError::InsufficientData { .. } => ErrorCode::InsufficientData,
        StatsError::InsufficientDataMsg(_) => ErrorCode::InsufficientData,
        StatsError::DimensionMismatch { .. } => ErrorCode::DimensionMismatch,
        StatsError::InvalidConfidenceLevel(_) => ErrorCode::InvalidConfidenceLevel,
        StatsError::InvalidArgument(_) => ErrorCode::InvalidArgument,
        StatsError::InvalidInput(_) => ErrorCode::InvalidInput,
        StatsError::ZeroVariance(_) => ErrorCode::ZeroVariance,
    }
}

unsafe fn report(out_error: *mut StatlensError, code: ErrorCode, msg: &str) {
    if !out_error.is_null() {
        (*out_error).set(code, msg);
    }
}

/// Run a core call with panic catching, translating failures into `out_error`
unsafe fn guarded<T>(
    out_error: *mut StatlensError,
    operation: &str,
    f: impl FnOnce() -> StatsResult<T>,
) -> Option<T> {
    match std::panic::catch_unwind(std::panic::AssertUnwindSafe(f)) {
        Ok(Ok(value)) => Some(value),
        Ok(Err(err)) => {
            report(out_error, error_to_code(&err), &err.to_string());
            None
        }
        Err(_) => {
            warn!(operation = operation, "panic caught at FFI boundary");
            report(
                out_error,
                ErrorCode::InternalError,
                &format!("Internal panic in {}", operation),
            );
            None
        }
    }
}

/// Allocate a NUL-terminated copy of `s` with malloc
unsafe fn alloc_string(s: &str) -> *mut c_char {
    let len = s.len() + 1;
    let ptr = libc::malloc(len) as *mut c_char;
    if !ptr.is_null() {
        std::ptr::copy_nonoverlapping(s.as_ptr(), ptr as *mut u8, s.len());
        *ptr.add(s.len()) = 0;
    }
    ptr
}

/// Allocate a malloc'd copy of `values`; NULL for an empty slice
unsafe fn alloc_f64_array(values: &[f64]) -> Option<*mut f64> {
    if values.is_empty() {
        return Some(std::ptr::null_mut());
    }
    let ptr = libc::malloc(std::mem::size_of_val(values)) as *mut f64;
    if ptr.is_null() {
        return None;
    }
    std::ptr::copy_nonoverlapping(values.as_ptr(), ptr, values.len());
    Some(ptr)
}

unsafe fn begin(out_error: *mut StatlensError) {
    if !out_error.is_null() {
        *out_error = StatlensError::success();
    }
}

unsafe fn write_correlation(
    result: CorrelationResult,
    out_result: *mut CorrelationResultFFI,
    out_error: *mut StatlensError,
) -> bool {
    let methodology = alloc_string(&result.stats.methodology);
    if methodology.is_null() {
        report(
            out_error,
            ErrorCode::AllocationFailure,
            "Failed to allocate methodology",
        );
        return false;
    }
    let (ci_lower, ci_upper) = result
        .stats
        .confidence_interval
        .map_or((f64::NAN, f64::NAN), |ci| (ci.lower, ci.upper));

    *out_result = CorrelationResultFFI {
        r: result.stats.value,
        p_value: result.stats.p_value.unwrap_or(f64::NAN),
        standard_error: result.stats.standard_error.unwrap_or(f64::NAN),
        ci_lower,
        ci_upper,
        confidence: result.stats.confidence,
        n: result.stats.sample_size,
        correlation_type: result.correlation_type.into(),
        strength: result.strength.into(),
        direction: result.direction.into(),
        methodology,
    };
    true
}

fn test_result_ffi(result: &HypothesisTestResult) -> TestResultFFI {
    let (ci_lower, ci_upper) = result
        .confidence_interval
        .map_or((f64::NAN, f64::NAN), |ci| (ci.lower, ci.upper));
    TestResultFFI {
        statistic: result.test_statistic,
        p_value: result.p_value,
        critical_value: result.critical_value,
        reject_null: result.reject_null,
        confidence_level: result.confidence_level,
        df: result.degrees_of_freedom.unwrap_or(f64::NAN),
        effect_size: result.effect_size.unwrap_or(f64::NAN),
        ci_lower,
        ci_upper,
        n: result.sample_size,
        test_type: result.test_type.into(),
    }
}

// ============================================================================
// Correlation
// ============================================================================

/// Pearson correlation
///
/// NULL entries are skipped together with their partner value. Too few
/// usable pairs or a constant input produce an empty result (`n == 0`),
/// not an error.
///
/// # Safety
/// - `x` and `y` must be valid DataArrays
/// - `out_result` must be a valid pointer
/// - `out_error` can be NULL
#[no_mangle]
pub unsafe extern "C" fn statlens_pearson_cor(
    x: DataArray,
    y: DataArray,
    options: CorrelationOptionsFFI,
    out_result: *mut CorrelationResultFFI,
    out_error: *mut StatlensError,
) -> bool {
    begin(out_error);
    if out_result.is_null() {
        report(out_error, ErrorCode::InvalidInput, "out_result is NULL");
        return false;
    }

    let x_vec = x.to_vec();
    let y_vec = y.to_vec();

    let result = guarded(out_error, "Pearson correlation", || {
        let confidence_level = ConfidenceLevel::new(options.confidence_level)?;
        Ok(pearson(&x_vec, &y_vec, &PearsonOptions { confidence_level }))
    });

    match result {
        Some(result) => write_correlation(result, out_result, out_error),
        None => false,
    }
}

/// Spearman rank correlation
///
/// # Safety
/// - `x` and `y` must be valid DataArrays
/// - `out_result` must be a valid pointer
/// - `out_error` can be NULL
#[no_mangle]
pub unsafe extern "C" fn statlens_spearman_cor(
    x: DataArray,
    y: DataArray,
    options: CorrelationOptionsFFI,
    out_result: *mut CorrelationResultFFI,
    out_error: *mut StatlensError,
) -> bool {
    begin(out_error);
    if out_result.is_null() {
        report(out_error, ErrorCode::InvalidInput, "out_result is NULL");
        return false;
    }

    let x_vec = x.to_vec();
    let y_vec = y.to_vec();

    let result = guarded(out_error, "Spearman correlation", || {
        let opts = SpearmanOptions {
            confidence_level: ConfidenceLevel::new(options.confidence_level)?,
            ties: if options.average_ties {
                TieMethod::Average
            } else {
                TieMethod::Min
            },
        };
        Ok(spearman(&x_vec, &y_vec, &opts))
    });

    match result {
        Some(result) => write_correlation(result, out_result, out_error),
        None => false,
    }
}

/// Free a correlation result's methodology string
///
/// # Safety
/// `result` must be NULL or a result filled by a correlation function
#[no_mangle]
pub unsafe extern "C" fn statlens_free_correlation_result(result: *mut CorrelationResultFFI) {
    if result.is_null() {
        return;
    }
    if !(*result).methodology.is_null() {
        libc::free((*result).methodology as *mut libc::c_void);
        (*result).methodology = std::ptr::null_mut();
    }
}

// ============================================================================
// Regression
// ============================================================================

/// Simple linear regression of `y` on `x`
///
/// # Safety
/// - `x` and `y` must be valid DataArrays
/// - `out_result` must be a valid pointer
/// - `out_error` can be NULL
///
/// # Returns
/// `true` on success, `false` on error (check `out_error` for details)
#[no_mangle]
pub unsafe extern "C" fn statlens_linear_regression(
    x: DataArray,
    y: DataArray,
    confidence_level: f64,
    out_result: *mut RegressionResultFFI,
    out_error: *mut StatlensError,
) -> bool {
    begin(out_error);
    if out_result.is_null() {
        report(out_error, ErrorCode::InvalidInput, "out_result is NULL");
        return false;
    }

    let x_vec = x.to_vec();
    let y_vec = y.to_vec();

    let fit = guarded(out_error, "linear regression", || {
        let opts = RegressionOptions {
            confidence_level: ConfidenceLevel::new(confidence_level)?,
        };
        fit_linear(&x_vec, &y_vec, &opts)
    });
    let Some(fit) = fit else {
        return false;
    };

    let Some(residuals) = alloc_f64_array(&fit.residuals) else {
        report(
            out_error,
            ErrorCode::AllocationFailure,
            "Failed to allocate residuals",
        );
        return false;
    };
    let Some(predictions) = alloc_f64_array(&fit.predictions) else {
        libc::free(residuals as *mut libc::c_void);
        report(
            out_error,
            ErrorCode::AllocationFailure,
            "Failed to allocate predictions",
        );
        return false;
    };

    *out_result = RegressionResultFFI {
        slope: fit.slope,
        intercept: fit.intercept,
        r_squared: fit.r_squared,
        adj_r_squared: fit.adjusted_r_squared,
        standard_error: fit.standard_error,
        t_statistic: fit.t_statistic,
        p_value: fit.p_value,
        ci_lower: fit.confidence_interval.lower,
        ci_upper: fit.confidence_interval.upper,
        confidence_level: fit.confidence_level.value(),
        residuals,
        predictions,
        len: fit.residuals.len(),
    };
    true
}

/// Free the arrays owned by a regression result
///
/// # Safety
/// `result` must be NULL or a result filled by [`statlens_linear_regression`]
#[no_mangle]
pub unsafe extern "C" fn statlens_free_regression_result(result: *mut RegressionResultFFI) {
    if result.is_null() {
        return;
    }
    if !(*result).residuals.is_null() {
        libc::free((*result).residuals as *mut libc::c_void);
        (*result).residuals = std::ptr::null_mut();
    }
    if !(*result).predictions.is_null() {
        libc::free((*result).predictions as *mut libc::c_void);
        (*result).predictions = std::ptr::null_mut();
    }
    (*result).len = 0;
}

// ============================================================================
// Hypothesis tests
// ============================================================================

/// Welch or paired two-sample t-test
///
/// # Safety
/// - `group1` and `group2` must be valid DataArrays
/// - `out_result` must be a valid pointer
/// - `out_error` can be NULL
#[no_mangle]
pub unsafe extern "C" fn statlens_t_test(
    group1: DataArray,
    group2: DataArray,
    options: TTestOptionsFFI,
    out_result: *mut TestResultFFI,
    out_error: *mut StatlensError,
) -> bool {
    begin(out_error);
    if out_result.is_null() {
        report(out_error, ErrorCode::InvalidInput, "out_result is NULL");
        return false;
    }

    let g1 = group1.to_vec();
    let g2 = group2.to_vec();

    let result = guarded(out_error, "t-test", || {
        let opts = TTestOptions {
            confidence_level: ConfidenceLevel::new(options.confidence_level)?,
            paired: options.paired,
        };
        t_test(&g1, &g2, &opts)
    });

    match result {
        Some(result) => {
            *out_result = test_result_ffi(&result);
            true
        }
        None => false,
    }
}

/// z-test of an observed value against an expected one
///
/// # Safety
/// - `out_result` must be a valid pointer
/// - `out_error` can be NULL
#[no_mangle]
pub unsafe extern "C" fn statlens_z_test(
    observed: f64,
    expected: f64,
    standard_error: f64,
    options: ZTestOptionsFFI,
    out_result: *mut TestResultFFI,
    out_error: *mut StatlensError,
) -> bool {
    begin(out_error);
    if out_result.is_null() {
        report(out_error, ErrorCode::InvalidInput, "out_result is NULL");
        return false;
    }

    let opts = SignificanceOptions {
        alternative: options.alternative.into(),
        alpha: options.alpha,
    };
    let result = guarded(out_error, "z-test", || {
        z_test(observed, expected, standard_error, &opts)
    });

    match result {
        Some(result) => {
            *out_result = test_result_ffi(&result);
            true
        }
        None => false,
    }
}

// ============================================================================
// Readability
// ============================================================================

/// Readability score of a NUL-terminated UTF-8 text
///
/// # Safety
/// - `text` must be a valid NUL-terminated string
/// - `out_result` must be a valid pointer
/// - `out_error` can be NULL
#[no_mangle]
pub unsafe extern "C" fn statlens_readability(
    text: *const c_char,
    method: ReadabilityMethodFFI,
    out_result: *mut ReadabilityResultFFI,
    out_error: *mut StatlensError,
) -> bool {
    begin(out_error);
    if out_result.is_null() {
        report(out_error, ErrorCode::InvalidInput, "out_result is NULL");
        return false;
    }
    if text.is_null() {
        report(out_error, ErrorCode::InvalidInput, "text is NULL");
        return false;
    }

    let result = guarded(out_error, "readability", || {
        let text = CStr::from_ptr(text)
            .to_str()
            .map_err(|e| StatsError::InvalidInput(format!("text is not valid UTF-8: {}", e)))?;
        Ok(readability_score(text, method.into()))
    });

    match result {
        Some(result) => {
            *out_result = ReadabilityResultFFI::with_statistics(
                result.score,
                result.confidence,
                result.level,
                &result.statistics,
            );
            true
        }
        None => false,
    }
}

// ============================================================================
// Distribution helpers
// ============================================================================

/// Standard normal CDF
#[no_mangle]
pub extern "C" fn statlens_normal_cdf(z: f64) -> f64 {
    normal_cdf(z)
}

/// Standard normal quantile; NaN unless `0 < p < 1`
#[no_mangle]
pub extern "C" fn statlens_normal_inverse_cdf(p: f64) -> f64 {
    normal_inverse_cdf(p).unwrap_or(f64::NAN)
}

/// Two-sided normal critical value; NaN for an invalid confidence level
#[no_mangle]
pub extern "C" fn statlens_z_critical(confidence_level: f64) -> f64 {
    match ConfidenceLevel::new(confidence_level) {
        Ok(level) => z_critical(level),
        Err(_) => f64::NAN,
    }
}

/// Two-sided t critical value; NaN for an invalid level or `df <= 0`
#[no_mangle]
pub extern "C" fn statlens_t_critical(confidence_level: f64, df: f64) -> f64 {
    if df.is_nan() || df <= 0.0 {
        return f64::NAN;
    }
    match ConfidenceLevel::new(confidence_level) {
        Ok(level) => t_critical(level, df),
        Err(_) => f64::NAN,
    }
}

// ============================================================================
// Library
// ============================================================================

/// Get library version
#[no_mangle]
pub extern "C" fn statlens_version() -> *const c_char {
    concat!(env!("CARGO_PKG_VERSION"), "\0").as_ptr() as *const c_char
}

/// Install a stderr log subscriber filtered by `STATLENS_LOG` (default `warn`)
///
/// Returns `false` if a global subscriber is already installed.
#[no_mangle]
pub extern "C" fn statlens_init_logging() -> bool {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .is_ok()
}
