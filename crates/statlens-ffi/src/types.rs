//! C-compatible types for FFI boundary

use libc::c_char;
use statlens_core::readability::TextStatistics;
use statlens_core::{
    Alternative, CorrelationDirection, CorrelationStrength, CorrelationType, ReadabilityLevel,
    ReadabilityMethod, TestType,
};

/// Error codes for FFI boundary
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    Success = 0,
    InvalidInput = 1,
    InsufficientData = 2,
    DimensionMismatch = 3,
    InvalidConfidenceLevel = 4,
    InvalidArgument = 5,
    ZeroVariance = 6,
    AllocationFailure = 7,
    InternalError = 99,
}

/// Error information for FFI
#[repr(C)]
pub struct StatlensError {
    pub code: ErrorCode,
    pub message: [c_char; 256],
}

impl StatlensError {
    pub fn success() -> Self {
        Self {
            code: ErrorCode::Success,
            message: [0; 256],
        }
    }

    pub fn set(&mut self, code: ErrorCode, msg: &str) {
        self.code = code;
        let bytes = msg.as_bytes();
        let len = bytes.len().min(255);
        for (i, &b) in bytes[..len].iter().enumerate() {
            self.message[i] = b as c_char;
        }
        self.message[len] = 0;
    }
}

/// Array of f64 values with validity mask for NULL handling
#[repr(C)]
pub struct DataArray {
    /// Pointer to data values
    pub data: *const f64,
    /// Validity bitmask: bit i is 1 if data[i] is valid, 0 if NULL
    /// Can be NULL if all values are valid
    pub validity: *const u8,
    /// Number of elements
    pub len: usize,
}

impl DataArray {
    /// Check if index i is valid (not NULL)
    ///
    /// # Safety
    /// Caller must ensure index is within bounds
    pub unsafe fn is_valid(&self, i: usize) -> bool {
        if self.validity.is_null() {
            return true;
        }
        let byte_idx = i / 8;
        let bit_idx = i % 8;
        ((*self.validity.add(byte_idx)) >> bit_idx) & 1 == 1
    }

    /// Convert to Vec<f64>, replacing NULL with NaN
    ///
    /// A NULL data pointer reads as an empty array.
    ///
    /// # Safety
    /// Caller must ensure pointers are valid and len is correct
    pub unsafe fn to_vec(&self) -> Vec<f64> {
        if self.data.is_null() {
            return Vec::new();
        }
        let mut result = Vec::with_capacity(self.len);
        for i in 0..self.len {
            if self.is_valid(i) {
                result.push(*self.data.add(i));
            } else {
                result.push(f64::NAN);
            }
        }
        result
    }
}

/// Correlation options for FFI
#[repr(C)]
pub struct CorrelationOptionsFFI {
    /// Confidence level of the Fisher interval
    pub confidence_level: f64,
    /// Spearman only: average tied ranks instead of sharing the lowest rank
    pub average_ties: bool,
}

impl Default for CorrelationOptionsFFI {
    fn default() -> Self {
        Self {
            confidence_level: 0.95,
            average_ties: false,
        }
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorrelationTypeFFI {
    Pearson = 0,
    Spearman = 1,
}

impl From<CorrelationType> for CorrelationTypeFFI {
    fn from(t: CorrelationType) -> Self {
        match t {
            CorrelationType::Pearson => CorrelationTypeFFI::Pearson,
            CorrelationType::Spearman => CorrelationTypeFFI::Spearman,
        }
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorrelationStrengthFFI {
    VeryWeak = 0,
    Weak = 1,
    Moderate = 2,
    Strong = 3,
    VeryStrong = 4,
}

impl From<CorrelationStrength> for CorrelationStrengthFFI {
    fn from(s: CorrelationStrength) -> Self {
        match s {
            CorrelationStrength::VeryWeak => CorrelationStrengthFFI::VeryWeak,
            CorrelationStrength::Weak => CorrelationStrengthFFI::Weak,
            CorrelationStrength::Moderate => CorrelationStrengthFFI::Moderate,
            CorrelationStrength::Strong => CorrelationStrengthFFI::Strong,
            CorrelationStrength::VeryStrong => CorrelationStrengthFFI::VeryStrong,
        }
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorrelationDirectionFFI {
    None = 0,
    Positive = 1,
    Negative = 2,
}

impl From<CorrelationDirection> for CorrelationDirectionFFI {
    fn from(d: CorrelationDirection) -> Self {
        match d {
            CorrelationDirection::None => CorrelationDirectionFFI::None,
            CorrelationDirection::Positive => CorrelationDirectionFFI::Positive,
            CorrelationDirection::Negative => CorrelationDirectionFFI::Negative,
        }
    }
}

/// Correlation result for FFI
///
/// An empty result (too few pairs, constant input) has `n == 0`.
#[repr(C)]
pub struct CorrelationResultFFI {
    /// Correlation coefficient
    pub r: f64,
    /// p-value (NaN for an empty result)
    pub p_value: f64,
    /// Fisher z standard error (NaN if n <= 3)
    pub standard_error: f64,
    /// Confidence interval lower bound
    pub ci_lower: f64,
    /// Confidence interval upper bound
    pub ci_upper: f64,
    /// (1 - p) * 100
    pub confidence: f64,
    /// Sample size
    pub n: usize,
    pub correlation_type: CorrelationTypeFFI,
    pub strength: CorrelationStrengthFFI,
    pub direction: CorrelationDirectionFFI,
    /// Method description (must be freed)
    pub methodology: *mut c_char,
}

impl Default for CorrelationResultFFI {
    fn default() -> Self {
        Self {
            r: f64::NAN,
            p_value: f64::NAN,
            standard_error: f64::NAN,
            ci_lower: f64::NAN,
            ci_upper: f64::NAN,
            confidence: 0.0,
            n: 0,
            correlation_type: CorrelationTypeFFI::Pearson,
            strength: CorrelationStrengthFFI::VeryWeak,
            direction: CorrelationDirectionFFI::None,
            methodology: std::ptr::null_mut(),
        }
    }
}

/// Simple linear regression result for FFI
#[repr(C)]
pub struct RegressionResultFFI {
    pub slope: f64,
    pub intercept: f64,
    pub r_squared: f64,
    pub adj_r_squared: f64,
    /// Standard error of the slope
    pub standard_error: f64,
    pub t_statistic: f64,
    pub p_value: f64,
    /// Lower bound of the slope confidence interval
    pub ci_lower: f64,
    /// Upper bound of the slope confidence interval
    pub ci_upper: f64,
    pub confidence_level: f64,
    /// Residuals, `len` elements (must be freed)
    pub residuals: *mut f64,
    /// Fitted values, `len` elements (must be freed)
    pub predictions: *mut f64,
    /// Number of observations used
    pub len: usize,
}

impl Default for RegressionResultFFI {
    fn default() -> Self {
        Self {
            slope: f64::NAN,
            intercept: f64::NAN,
            r_squared: f64::NAN,
            adj_r_squared: f64::NAN,
            standard_error: f64::NAN,
            t_statistic: f64::NAN,
            p_value: f64::NAN,
            ci_lower: f64::NAN,
            ci_upper: f64::NAN,
            confidence_level: 0.95,
            residuals: std::ptr::null_mut(),
            predictions: std::ptr::null_mut(),
            len: 0,
        }
    }
}

/// Options for t-test
#[repr(C)]
pub struct TTestOptionsFFI {
    /// Confidence level for the critical value
    pub confidence_level: f64,
    /// Paired t-test instead of Welch
    pub paired: bool,
}

impl Default for TTestOptionsFFI {
    fn default() -> Self {
        Self {
            confidence_level: 0.95,
            paired: false,
        }
    }
}

/// Alternative hypothesis for FFI
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlternativeFFI {
    TwoSided = 0,
    Less = 1,
    Greater = 2,
}

impl From<AlternativeFFI> for Alternative {
    fn from(a: AlternativeFFI) -> Self {
        match a {
            AlternativeFFI::TwoSided => Alternative::TwoSided,
            AlternativeFFI::Less => Alternative::Less,
            AlternativeFFI::Greater => Alternative::Greater,
        }
    }
}

/// Options for z-test
#[repr(C)]
pub struct ZTestOptionsFFI {
    pub alternative: AlternativeFFI,
    /// Significance level
    pub alpha: f64,
}

impl Default for ZTestOptionsFFI {
    fn default() -> Self {
        Self {
            alternative: AlternativeFFI::TwoSided,
            alpha: 0.05,
        }
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TestTypeFFI {
    WelchT = 0,
    PairedT = 1,
    ZTwoTailed = 2,
    ZOneTailed = 3,
}

impl From<TestType> for TestTypeFFI {
    fn from(t: TestType) -> Self {
        match t {
            TestType::WelchT => TestTypeFFI::WelchT,
            TestType::PairedT => TestTypeFFI::PairedT,
            TestType::ZTwoTailed => TestTypeFFI::ZTwoTailed,
            TestType::ZOneTailed => TestTypeFFI::ZOneTailed,
        }
    }
}

/// Hypothesis test result for FFI
#[repr(C)]
pub struct TestResultFFI {
    /// t or z statistic
    pub statistic: f64,
    /// p-value
    pub p_value: f64,
    pub critical_value: f64,
    pub reject_null: bool,
    /// Confidence level in percent
    pub confidence_level: f64,
    /// Degrees of freedom (NaN if not applicable)
    pub df: f64,
    /// Effect size (NaN if not applicable)
    pub effect_size: f64,
    /// Confidence interval lower bound (NaN if not applicable)
    pub ci_lower: f64,
    /// Confidence interval upper bound (NaN if not applicable)
    pub ci_upper: f64,
    /// Total sample size
    pub n: usize,
    pub test_type: TestTypeFFI,
}

impl Default for TestResultFFI {
    fn default() -> Self {
        Self {
            statistic: f64::NAN,
            p_value: f64::NAN,
            critical_value: f64::NAN,
            reject_null: false,
            confidence_level: 95.0,
            df: f64::NAN,
            effect_size: f64::NAN,
            ci_lower: f64::NAN,
            ci_upper: f64::NAN,
            n: 0,
            test_type: TestTypeFFI::WelchT,
        }
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadabilityMethodFFI {
    Flesch = 0,
    GunningFog = 1,
    ColemanLiau = 2,
}

impl From<ReadabilityMethodFFI> for ReadabilityMethod {
    fn from(m: ReadabilityMethodFFI) -> Self {
        match m {
            ReadabilityMethodFFI::Flesch => ReadabilityMethod::Flesch,
            ReadabilityMethodFFI::GunningFog => ReadabilityMethod::GunningFog,
            ReadabilityMethodFFI::ColemanLiau => ReadabilityMethod::ColemanLiau,
        }
    }
}

#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadabilityLevelFFI {
    VeryEasy = 0,
    Easy = 1,
    FairlyEasy = 2,
    Standard = 3,
    FairlyDifficult = 4,
    Difficult = 5,
    VeryDifficult = 6,
    Undetermined = 7,
}

impl From<ReadabilityLevel> for ReadabilityLevelFFI {
    fn from(l: ReadabilityLevel) -> Self {
        match l {
            ReadabilityLevel::VeryEasy => ReadabilityLevelFFI::VeryEasy,
            ReadabilityLevel::Easy => ReadabilityLevelFFI::Easy,
            ReadabilityLevel::FairlyEasy => ReadabilityLevelFFI::FairlyEasy,
            ReadabilityLevel::Standard => ReadabilityLevelFFI::Standard,
            ReadabilityLevel::FairlyDifficult => ReadabilityLevelFFI::FairlyDifficult,
            ReadabilityLevel::Difficult => ReadabilityLevelFFI::Difficult,
            ReadabilityLevel::VeryDifficult => ReadabilityLevelFFI::VeryDifficult,
            ReadabilityLevel::Undetermined => ReadabilityLevelFFI::Undetermined,
        }
    }
}

/// Readability result for FFI
#[repr(C)]
pub struct ReadabilityResultFFI {
    /// Ease score in [0, 100]
    pub score: f64,
    /// Confidence in [0, 100]
    pub confidence: f64,
    pub level: ReadabilityLevelFFI,
    pub sentences: usize,
    pub words: usize,
    pub syllables: usize,
    pub complex_words: usize,
    pub letters: usize,
}

impl ReadabilityResultFFI {
    pub(crate) fn with_statistics(
        score: f64,
        confidence: f64,
        level: ReadabilityLevel,
        stats: &TextStatistics,
    ) -> Self {
        Self {
            score,
            confidence,
            level: level.into(),
            sentences: stats.sentences,
            words: stats.words,
            syllables: stats.syllables,
            complex_words: stats.complex_words,
            letters: stats.letters,
        }
    }
}

impl Default for ReadabilityResultFFI {
    fn default() -> Self {
        Self {
            score: 0.0,
            confidence: 0.0,
            level: ReadabilityLevelFFI::Undetermined,
            sentences: 0,
            words: 0,
            syllables: 0,
            complex_words: 0,
            letters: 0,
        }
    }
}
