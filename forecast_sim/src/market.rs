//! Mock market refresh
//!
//! Simulates one polling tick of the market feed: the headline price takes
//! a small random step and every derived figure (change percents, chart
//! window, detailed price rows, support/resistance/RSI) follows it. Inputs
//! are never mutated; each tick returns a fresh quote.

use crate::error::{ForecastError, Result};
use chart_math::series::{generate_series, update_chart_window};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Support/resistance levels and RSI shown on the technical panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TechnicalLevels {
    pub rsi: f64,
    pub support: f64,
    pub resistance: f64,
}

/// A detailed price row (per thickness/dimension spec).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceRow {
    pub spec: String,
    pub dimension: String,
    pub price: f64,
}

/// One product card on the prices page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductQuote {
    pub title: String,
    pub price: f64,
    pub change: f64,
    pub weekly_change: f64,
    pub monthly_change: f64,
    pub chart_data: Vec<f64>,
    pub detailed_prices: Vec<PriceRow>,
    pub technical: TechnicalLevels,
}

impl ProductQuote {
    /// Backfill the sparkline for a product with no recorded history by
    /// synthesizing a series from `start` up to the current price.
    pub fn with_synthetic_history<R: Rng + ?Sized>(
        mut self,
        rng: &mut R,
        start: f64,
        points: usize,
    ) -> Result<Self> {
        self.chart_data = generate_series(rng, start, self.price, points)?;
        Ok(self)
    }
}

/// Apply a uniform random step of at most ±`percent`% to `value`.
pub fn fluctuate<R: Rng + ?Sized>(rng: &mut R, value: f64, percent: f64) -> f64 {
    let change = (rng.gen::<f64>() - 0.5) * 2.0 * (percent / 100.0);
    value * (1.0 + change)
}

/// Reject quotes carrying degenerate numbers before they reach the random
/// walk; a NaN in any field would otherwise survive `fluctuate` unchanged.
fn validate_quote(quote: &ProductQuote) -> Result<()> {
    if !quote.price.is_finite() || quote.price <= 0.0 {
        return Err(ForecastError::ValidationError(format!(
            "Quote price must be positive, got {}",
            quote.price
        )));
    }

    let fields = [
        ("change", quote.change),
        ("weekly_change", quote.weekly_change),
        ("monthly_change", quote.monthly_change),
        ("rsi", quote.technical.rsi),
        ("support", quote.technical.support),
        ("resistance", quote.technical.resistance),
    ];
    for (name, value) in fields {
        if !value.is_finite() {
            return Err(ForecastError::ValidationError(format!(
                "Quote field {} must be finite, got {}",
                name, value
            )));
        }
    }

    for row in &quote.detailed_prices {
        if !row.price.is_finite() {
            return Err(ForecastError::ValidationError(format!(
                "Detailed price for {} must be finite, got {}",
                row.spec, row.price
            )));
        }
    }

    Ok(())
}

/// One refresh tick of a product quote.
///
/// The headline price fluctuates by up to ±1.5% and the derived figures
/// follow: the chart window slides, detailed rows scale by the same
/// fraction, support/resistance jitter by ±1% and RSI by ±5% clamped to
/// [15, 85]. A quote with a non-positive price or any non-finite numeric
/// field is rejected. Returns the refreshed quote plus the fractional
/// price change, which callers use to rescale any dependent forecast
/// bands.
pub fn refresh_quote<R: Rng + ?Sized>(
    rng: &mut R,
    quote: &ProductQuote,
) -> Result<(ProductQuote, f64)> {
    validate_quote(quote)?;

    let new_price = fluctuate(rng, quote.price, 1.5);
    let change = (new_price - quote.price) / quote.price;

    let technical = TechnicalLevels {
        support: fluctuate(rng, quote.technical.support, 1.0).round(),
        resistance: fluctuate(rng, quote.technical.resistance, 1.0).round(),
        rsi: fluctuate(rng, quote.technical.rsi, 5.0).clamp(15.0, 85.0),
    };

    let refreshed = ProductQuote {
        title: quote.title.clone(),
        price: new_price.round(),
        change: round2(change * 100.0),
        weekly_change: round2(fluctuate(rng, quote.weekly_change, 5.0)),
        monthly_change: round2(fluctuate(rng, quote.monthly_change, 10.0)),
        chart_data: update_chart_window(&quote.chart_data, new_price)?,
        detailed_prices: quote
            .detailed_prices
            .iter()
            .map(|row| PriceRow {
                spec: row.spec.clone(),
                dimension: row.dimension.clone(),
                price: (row.price * (1.0 + change)).round(),
            })
            .collect(),
        technical,
    };

    Ok((refreshed, change))
}

/// Round to two decimal places for displayed percent changes.
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample_quote() -> ProductQuote {
        ProductQuote {
            title: "Hot-rolled coil".to_string(),
            price: 42_100.0,
            change: 0.7,
            weekly_change: 1.8,
            monthly_change: 4.5,
            chart_data: vec![41_500.0, 41_800.0, 41_600.0, 41_900.0, 42_000.0, 41_950.0, 42_100.0],
            detailed_prices: vec![
                PriceRow {
                    spec: "2mm".to_string(),
                    dimension: "1250".to_string(),
                    price: 41_800.0,
                },
                PriceRow {
                    spec: "3mm".to_string(),
                    dimension: "1500".to_string(),
                    price: 42_000.0,
                },
            ],
            technical: TechnicalLevels {
                rsi: 68.0,
                support: 41_500.0,
                resistance: 42_800.0,
            },
        }
    }

    #[test]
    fn test_fluctuate_stays_within_bounds() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let value = fluctuate(&mut rng, 100.0, 1.5);
            assert!((98.5..=101.5).contains(&value));
        }
    }

    #[test]
    fn test_refresh_does_not_mutate_input() {
        let mut rng = StdRng::seed_from_u64(5);
        let quote = sample_quote();
        let before = quote.clone();

        let (refreshed, change) = refresh_quote(&mut rng, &quote).unwrap();

        assert_eq!(quote, before);
        assert_eq!(refreshed.chart_data.len(), quote.chart_data.len());
        assert!(change.abs() <= 0.015);
    }

    #[test]
    fn test_refresh_keeps_rsi_in_range() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut quote = sample_quote();
        for _ in 0..50 {
            let (refreshed, _) = refresh_quote(&mut rng, &quote).unwrap();
            assert!((15.0..=85.0).contains(&refreshed.technical.rsi));
            quote = refreshed;
        }
    }

    #[test]
    fn test_refresh_scales_detailed_rows_by_price_change() {
        let mut rng = StdRng::seed_from_u64(21);
        let quote = sample_quote();
        let (refreshed, change) = refresh_quote(&mut rng, &quote).unwrap();

        for (old, new) in quote.detailed_prices.iter().zip(&refreshed.detailed_prices) {
            assert_eq!(new.price, (old.price * (1.0 + change)).round());
        }
    }

    #[test]
    fn test_refresh_rejects_non_positive_price() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut quote = sample_quote();
        quote.price = 0.0;
        assert!(refresh_quote(&mut rng, &quote).is_err());
    }

    #[test]
    fn test_refresh_rejects_non_finite_fields() {
        let mut rng = StdRng::seed_from_u64(5);

        let mut quote = sample_quote();
        quote.weekly_change = f64::NAN;
        assert!(refresh_quote(&mut rng, &quote).is_err());

        let mut quote = sample_quote();
        quote.technical.rsi = f64::INFINITY;
        assert!(refresh_quote(&mut rng, &quote).is_err());

        let mut quote = sample_quote();
        quote.detailed_prices[0].price = f64::NAN;
        assert!(refresh_quote(&mut rng, &quote).is_err());
    }

    #[test]
    fn test_synthetic_history_ends_at_price() {
        let mut rng = StdRng::seed_from_u64(17);
        let quote = sample_quote()
            .with_synthetic_history(&mut rng, 40_000.0, 30)
            .unwrap();

        assert_eq!(quote.chart_data.len(), 30);
        assert_eq!(*quote.chart_data.last().unwrap(), 42_100.0);
    }
}
