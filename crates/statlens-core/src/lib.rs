//! statlens-core: statistical inference engine
//!
//! Correlation analysis, simple linear regression, t-tests and z-tests,
//! text readability scoring, and the distribution approximations they share.
//! Everything is a pure function of its inputs; [`StatisticalEngine`] is a
//! zero-sized facade over the module functions.

pub mod distributions;
pub mod engine;
pub mod errors;
pub mod models;
pub mod readability;
pub mod tests;
pub mod types;

pub use distributions::{t_critical, z_critical};
pub use engine::StatisticalEngine;
pub use errors::{StatsError, StatsResult};
pub use readability::{ReadabilityLevel, ReadabilityMethod, ReadabilityResult};
pub use tests::{
    Alternative, CorrelationDirection, CorrelationResult, CorrelationStrength, CorrelationType,
    HypothesisTestResult, TestType,
};
pub use types::*;
