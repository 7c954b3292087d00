//! Error types for the forecast_sim crate

use thiserror::Error;

/// Custom error types for the forecast_sim crate
#[derive(Debug, Error)]
pub enum ForecastError {
    /// Error from invalid parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Error related to input validation
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// Error from chart math operations
    #[error("Math error: {0}")]
    MathError(String),
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ForecastError>;

impl From<chart_math::MathError> for ForecastError {
    fn from(err: chart_math::MathError) -> Self {
        ForecastError::MathError(err.to_string())
    }
}
