use thiserror::Error;

/// Errors that can occur during statistical computations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StatsError {
    // Input validation errors
    #[error("Insufficient data: {actual} valid observations (need at least {required})")]
    InsufficientData { required: usize, actual: usize },

    #[error("Insufficient data: {0}")]
    InsufficientDataMsg(String),

    #[error("Dimension mismatch: first sample has {left} elements, second has {right}")]
    DimensionMismatch { left: usize, right: usize },

    #[error("Invalid confidence level: {0} (must be in (0, 1))")]
    InvalidConfidenceLevel(f64),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    // Numerical errors
    #[error("Zero variance: {0}")]
    ZeroVariance(&'static str),
}

/// Result type for statistical operations
pub type StatsResult<T> = Result<T, StatsError>;
