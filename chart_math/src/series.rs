//! Synthetic price series generation
//!
//! The dashboard has no live feed, so chart history is fabricated between
//! two known endpoints: a linear ramp with bounded oscillation plus noise.

use crate::{MathError, Result};
use rand::Rng;
use std::f64::consts::PI;

/// Generate a smooth synthetic series of `points` values running from
/// `start` to `end`.
///
/// Values are rounded to the nearest whole price. The final element is
/// always exactly `end`; renderers anchor the chart on the quoted closing
/// price and noise must not move it.
pub fn generate_series<R: Rng + ?Sized>(
    rng: &mut R,
    start: f64,
    end: f64,
    points: usize,
) -> Result<Vec<f64>> {
    if points < 2 {
        return Err(MathError::InvalidInput(format!(
            "Series needs at least 2 points, got {}",
            points
        )));
    }
    if !start.is_finite() || !end.is_finite() {
        return Err(MathError::InvalidInput(
            "Series endpoints must be finite".to_string(),
        ));
    }

    let span = end - start;
    let mut data = Vec::with_capacity(points);

    for i in 0..points {
        let progress = i as f64 / (points - 1) as f64;
        let linear = start + span * progress;
        // Six half-waves across the range, amplitude tied to the total move
        let oscillation = (progress * PI * 6.0).sin() * span * 0.08;
        let noise = (rng.gen::<f64>() - 0.5) * end * 0.03;
        data.push((linear + oscillation + noise).round());
    }

    data[points - 1] = end;
    Ok(data)
}

/// Slide a fixed-length chart window forward by one tick: drop the oldest
/// point and append the rounded new price.
///
/// Output length equals input length. An empty window and a non-finite
/// price are rejected.
pub fn update_chart_window(data: &[f64], new_price: f64) -> Result<Vec<f64>> {
    if data.is_empty() {
        return Err(MathError::InvalidInput(
            "Chart window must not be empty".to_string(),
        ));
    }
    if !new_price.is_finite() {
        return Err(MathError::InvalidInput(format!(
            "New price must be finite, got {}",
            new_price
        )));
    }

    let mut next: Vec<f64> = data.iter().skip(1).copied().collect();
    next.push(new_price.round());
    Ok(next)
}
