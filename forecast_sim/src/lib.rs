//! # Forecast Sim
//!
//! Forecast confidence bands and the what-if sensitivity model behind the
//! steelboard price-prediction page.
//!
//! ## Features
//!
//! - Historical-plus-forecast band generation with horizon-dependent
//!   uncertainty
//! - What-if sensitivity simulation over weighted macro inputs
//!   (currency rate, oil, iron ore, coking coal)
//! - Mock market-refresh ticks for the prices page
//! - Forecast accuracy metrics
//!
//! All generators take an injected random source, so a seeded
//! [`rand::rngs::StdRng`] reproduces a run exactly.
//!
//! ## Quick Start
//!
//! ```
//! use forecast_sim::band::generate_forecast;
//! use forecast_sim::whatif::{default_baseline, default_variables, default_weights};
//! use forecast_sim::whatif::{Algorithm, SensitivityModel};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//!
//! // Seven-day outlook for hot-rolled coil, with a third of the chart
//! // showing realized history.
//! let base = generate_forecast(&mut rng, 42_100.0, 42_800.0, 11, 0.02, true).unwrap();
//!
//! // Stress it: dollar up 10% against baseline.
//! let mut variables = default_variables();
//! if let Some(dollar) = variables.get_mut("dollar") {
//!     dollar.value *= 1.10;
//! }
//!
//! let model = SensitivityModel::new(default_weights(), Algorithm::Hybrid);
//! let stressed = model.simulate(&base, &variables, &default_baseline()).unwrap();
//! assert_eq!(stressed.len(), base.len());
//! ```

pub mod band;
pub mod error;
pub mod market;
pub mod metrics;
pub mod whatif;

// Re-export commonly used types
pub use crate::band::{generate_forecast, rescale_forecast, ForecastPoint};
pub use crate::error::{ForecastError, Result};
pub use crate::market::{refresh_quote, ProductQuote};
pub use crate::whatif::{Algorithm, ModelWeights, SensitivityModel, WhatIfVariable};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
