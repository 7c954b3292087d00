//! # Steelboard
//!
//! Workspace facade for the steelboard market-analytics core. The heavy
//! lifting lives in the member crates:
//!
//! - [`chart_math`]: synthetic series generation and moving-average
//!   smoothing for the technical charts
//! - [`forecast_sim`]: forecast confidence bands, the what-if sensitivity
//!   model, mock market-refresh ticks, and accuracy metrics
//!
//! ## Example
//!
//! ```
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let series =
//!     steelboard::chart_math::series::generate_series(&mut rng, 41_500.0, 42_100.0, 7).unwrap();
//!
//! // The series always terminates exactly at the quoted price.
//! assert_eq!(series.last(), Some(&42_100.0));
//!
//! let trend = steelboard::chart_math::moving_averages::sma(&series, 3).unwrap();
//! assert_eq!(trend.len(), series.len());
//! ```

pub use chart_math;
pub use forecast_sim;
