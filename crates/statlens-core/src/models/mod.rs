//! Regression model implementations

mod linear;

pub use linear::{fit_linear, MIN_OBSERVATIONS};
