//! What-if sensitivity model
//!
//! Recomputes a forecast band from slider deltas on macro inputs (currency
//! rate, oil, iron ore, coking coal). Each input's fractional move from its
//! baseline is weighted by the model's sensitivity to that input, and the
//! combined impact rescales every open prediction in the band.

use crate::band::{rescale_forecast, ForecastPoint};
use crate::error::{ForecastError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One adjustable macro input backing a dashboard slider.
///
/// The presentation layer clamps `value` to `[min, max]`; the model
/// tolerates out-of-range values and only rejects non-finite ones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhatIfVariable {
    pub id: String,
    pub name: String,
    pub value: f64,
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub unit: String,
}

impl WhatIfVariable {
    /// Copy of this variable with the slider moved to `value`.
    pub fn with_value(&self, value: f64) -> Self {
        Self {
            value,
            ..self.clone()
        }
    }
}

/// Per-variable sensitivity weights.
///
/// Weights are independent partial sensitivities, not a distribution; they
/// are not required to sum to 1. Each weight must be finite and in [0, 1].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModelWeights(BTreeMap<String, f64>);

impl ModelWeights {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the weight for a variable, replacing any previous value.
    pub fn set(&mut self, id: impl Into<String>, weight: f64) -> Result<()> {
        let id = id.into();
        if !weight.is_finite() || !(0.0..=1.0).contains(&weight) {
            return Err(ForecastError::InvalidParameter(format!(
                "Weight for {} must be within [0, 1], got {}",
                id, weight
            )));
        }
        self.0.insert(id, weight);
        Ok(())
    }

    /// Weight for a variable; ids without a configured weight contribute
    /// nothing to the impact.
    pub fn weight(&self, id: &str) -> f64 {
        self.0.get(id).copied().unwrap_or(0.0)
    }
}

/// Prediction-engine preset selecting how aggressively what-if deltas are
/// amplified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    #[default]
    Hybrid,
    Lstm,
    Linear,
}

impl Algorithm {
    /// Scalar applied to the combined weighted impact.
    pub fn modifier(self) -> f64 {
        match self {
            Algorithm::Hybrid => 1.0,
            Algorithm::Lstm => 1.05,   // more volatile
            Algorithm::Linear => 0.95, // more conservative
        }
    }
}

/// Sensitivity model combining per-variable weights with an algorithm
/// preset. Pure given its inputs; safe to re-run on every slider change
/// against the same base forecast.
#[derive(Debug, Clone, Default)]
pub struct SensitivityModel {
    weights: ModelWeights,
    algorithm: Algorithm,
}

impl SensitivityModel {
    pub fn new(weights: ModelWeights, algorithm: Algorithm) -> Self {
        Self { weights, algorithm }
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn weights(&self) -> &ModelWeights {
        &self.weights
    }

    /// Combined impact factor for the current slider positions.
    ///
    /// Each variable's fractional move from its baseline is weighted and
    /// summed, then amplified by the algorithm preset:
    /// `1 + Σ ((value - baseline) / baseline * weight) * modifier`.
    pub fn impact_factor(
        &self,
        variables: &BTreeMap<String, WhatIfVariable>,
        baseline: &BTreeMap<String, f64>,
    ) -> Result<f64> {
        let mut base_impact = 0.0;

        for (id, variable) in variables {
            let base = baseline.get(id).ok_or_else(|| {
                ForecastError::ValidationError(format!("No baseline value for variable {}", id))
            })?;
            if !base.is_finite() || *base == 0.0 {
                return Err(ForecastError::ValidationError(format!(
                    "Baseline for {} must be finite and non-zero, got {}",
                    id, base
                )));
            }
            if !variable.value.is_finite() {
                return Err(ForecastError::ValidationError(format!(
                    "Value for {} must be finite, got {}",
                    id, variable.value
                )));
            }

            let delta = (variable.value - base) / base;
            base_impact += delta * self.weights.weight(id);
        }

        Ok(1.0 + base_impact * self.algorithm.modifier())
    }

    /// Recompute a forecast band for the current slider positions.
    ///
    /// Every open prediction is rescaled by the impact factor; realized
    /// observations pass through untouched. Point count and label order are
    /// preserved, and the transform is an identity when every variable sits
    /// at its baseline.
    pub fn simulate(
        &self,
        base_forecast: &[ForecastPoint],
        variables: &BTreeMap<String, WhatIfVariable>,
        baseline: &BTreeMap<String, f64>,
    ) -> Result<Vec<ForecastPoint>> {
        let factor = self.impact_factor(variables, baseline)?;
        rescale_forecast(base_forecast, factor)
    }
}

/// Slider catalog for the steel what-if panel, seeded with the dashboard's
/// default market levels.
pub fn default_variables() -> BTreeMap<String, WhatIfVariable> {
    let variables = [
        WhatIfVariable {
            id: "dollar".to_string(),
            name: "USD exchange rate".to_string(),
            value: 61_850.0,
            min: 55_000.0,
            max: 70_000.0,
            step: 50.0,
            unit: "toman".to_string(),
        },
        WhatIfVariable {
            id: "oil".to_string(),
            name: "Brent crude".to_string(),
            value: 85.0,
            min: 70.0,
            max: 110.0,
            step: 0.5,
            unit: "USD".to_string(),
        },
        WhatIfVariable {
            id: "iron_ore".to_string(),
            name: "Iron ore".to_string(),
            value: 122.0,
            min: 100.0,
            max: 150.0,
            step: 1.0,
            unit: "USD".to_string(),
        },
        WhatIfVariable {
            id: "coking_coal".to_string(),
            name: "Coking coal".to_string(),
            value: 253.0,
            min: 200.0,
            max: 350.0,
            step: 1.0,
            unit: "USD".to_string(),
        },
    ];

    variables
        .into_iter()
        .map(|v| (v.id.clone(), v))
        .collect()
}

/// Baseline values matching [`default_variables`]; deltas are measured
/// against these.
pub fn default_baseline() -> BTreeMap<String, f64> {
    default_variables()
        .into_iter()
        .map(|(id, v)| (id, v.value))
        .collect()
}

/// Default sensitivity weights of the steel price model.
pub fn default_weights() -> ModelWeights {
    ModelWeights(BTreeMap::from([
        ("dollar".to_string(), 0.40),
        ("oil".to_string(), 0.10),
        ("iron_ore".to_string(), 0.35),
        ("coking_coal".to_string(), 0.15),
    ]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algorithm_modifiers() {
        assert_eq!(Algorithm::Hybrid.modifier(), 1.0);
        assert_eq!(Algorithm::Lstm.modifier(), 1.05);
        assert_eq!(Algorithm::Linear.modifier(), 0.95);
    }

    #[test]
    fn test_weight_range_enforced() {
        let mut weights = ModelWeights::new();
        assert!(weights.set("dollar", 0.4).is_ok());
        assert!(weights.set("dollar", 1.2).is_err());
        assert!(weights.set("dollar", -0.1).is_err());
        assert!(weights.set("dollar", f64::NAN).is_err());
    }

    #[test]
    fn test_missing_weight_contributes_nothing() {
        let model = SensitivityModel::new(ModelWeights::new(), Algorithm::Hybrid);
        let mut variables = default_variables();
        if let Some(dollar) = variables.get_mut("dollar") {
            dollar.value *= 1.5;
        }

        let factor = model.impact_factor(&variables, &default_baseline()).unwrap();
        assert_eq!(factor, 1.0);
    }

    #[test]
    fn test_default_catalog_is_consistent() {
        let variables = default_variables();
        let baseline = default_baseline();

        assert_eq!(variables.len(), baseline.len());
        for (id, variable) in &variables {
            assert_eq!(baseline[id], variable.value);
            assert!(variable.min <= variable.value && variable.value <= variable.max);
        }
    }
}
