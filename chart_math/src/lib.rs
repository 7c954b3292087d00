//! # Chart Math
//!
//! Numeric building blocks for the steelboard dashboard charts.
//! This crate provides the synthetic series generator used to fabricate
//! demo price history and the trailing moving average drawn as a trend
//! line on the technical charts.

use thiserror::Error;

// Chart modules
pub mod moving_averages;
pub mod series;

/// Errors that can occur in chart-related calculations
#[derive(Error, Debug)]
pub enum MathError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Result type for chart math operations
pub type Result<T> = std::result::Result<T, MathError>;
