//! Forecast confidence bands
//!
//! A forecast chart mixes a short stretch of realized history with a band
//! of predicted prices whose uncertainty widens as the horizon grows.

use crate::error::{ForecastError, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// One step of a forecast chart: a (low, mid, high) confidence band, or a
/// realized observation when `actual` is set.
///
/// For an observation the band collapses, so `low == mid == high == actual`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ForecastPoint {
    pub label: String,
    pub low: f64,
    pub mid: f64,
    pub high: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual: Option<f64>,
}

impl ForecastPoint {
    /// A realized observation; the band collapses to the observed value.
    pub fn observed(label: impl Into<String>, actual: f64) -> Self {
        Self {
            label: label.into(),
            low: actual,
            mid: actual,
            high: actual,
            actual: Some(actual),
        }
    }

    /// An open prediction with a confidence band around `mid`.
    pub fn predicted(label: impl Into<String>, low: f64, mid: f64, high: f64) -> Self {
        Self {
            label: label.into(),
            low,
            mid,
            high,
            actual: None,
        }
    }

    /// Whether this point carries a realized value rather than a prediction.
    pub fn is_observed(&self) -> bool {
        self.actual.is_some()
    }
}

/// Generate a historical-plus-forecast band of `points` steps running from
/// `start` toward `end`.
///
/// When `has_history` is set the first `points / 3` steps are realized
/// observations (linear ramp plus noise, collapsed bands, labeled counting
/// down as "N days ago"). The remaining steps are open predictions: `mid`
/// interpolates over the full range with noise that grows with progress,
/// and the band half-width `mid * volatility * (1 + progress) * 0.7` widens
/// monotonically with forecast distance. Points are ordered oldest to
/// newest, history before forecast; the first forecast step is "today".
pub fn generate_forecast<R: Rng + ?Sized>(
    rng: &mut R,
    start: f64,
    end: f64,
    points: usize,
    volatility: f64,
    has_history: bool,
) -> Result<Vec<ForecastPoint>> {
    if points == 0 {
        return Err(ForecastError::InvalidParameter(
            "Forecast needs at least one point".to_string(),
        ));
    }
    if !start.is_finite() || !end.is_finite() {
        return Err(ForecastError::InvalidParameter(
            "Forecast endpoints must be finite".to_string(),
        ));
    }
    if !volatility.is_finite() || volatility < 0.0 {
        return Err(ForecastError::InvalidParameter(format!(
            "Volatility must be finite and non-negative, got {}",
            volatility
        )));
    }

    let history_points = if has_history { points / 3 } else { 0 };
    let forecast_points = points - history_points;
    // A single-point forecast has no range to interpolate over
    let denom = (points - 1).max(1) as f64;

    let mut data = Vec::with_capacity(points);

    for i in 0..history_points {
        let progress = i as f64 / denom;
        let linear = start + (end - start) * progress;
        let noise = (rng.gen::<f64>() - 0.5) * start * (volatility / 2.0);
        data.push(ForecastPoint::observed(
            days_ago(history_points - i),
            (linear + noise).round(),
        ));
    }

    for i in 0..forecast_points {
        let progress = (i + history_points) as f64 / denom;
        let noise = (rng.gen::<f64>() - 0.5) * start * volatility * progress;
        let mid = (start + (end - start) * progress + noise).round();
        let band_size = mid * volatility * (1.0 + progress) * 0.7;
        let label = if i == 0 {
            "today".to_string()
        } else {
            days_from_now(i)
        };
        data.push(ForecastPoint::predicted(
            label,
            (mid - band_size).round(),
            mid,
            (mid + band_size).round(),
        ));
    }

    Ok(data)
}

fn days_ago(n: usize) -> String {
    if n == 1 {
        "1 day ago".to_string()
    } else {
        format!("{} days ago", n)
    }
}

fn days_from_now(n: usize) -> String {
    if n == 1 {
        "1 day from now".to_string()
    } else {
        format!("{} days from now", n)
    }
}

/// Scale every open prediction in `points` by `factor`, rounding the band
/// edges to whole prices. Realized observations pass through untouched.
///
/// The output preserves point count and label order; a factor of exactly
/// 1.0 is an identity up to rounding.
pub fn rescale_forecast(points: &[ForecastPoint], factor: f64) -> Result<Vec<ForecastPoint>> {
    if !factor.is_finite() {
        return Err(ForecastError::InvalidParameter(format!(
            "Rescale factor must be finite, got {}",
            factor
        )));
    }

    Ok(points
        .iter()
        .map(|point| {
            if point.is_observed() {
                point.clone()
            } else {
                ForecastPoint {
                    label: point.label.clone(),
                    low: (point.low * factor).round(),
                    mid: (point.mid * factor).round(),
                    high: (point.high * factor).round(),
                    actual: None,
                }
            }
        })
        .collect())
}
