//! Trailing simple moving average
//!
//! Used to derive the smoothed trend line drawn under the price series on
//! the technical-analysis charts.

use crate::{MathError, Result};

/// Compute the trailing simple moving average of `data` over `period`
/// observations.
///
/// The output is index-aligned with the input: entries before a full window
/// has accumulated are `None`, every later entry is the rounded mean of the
/// `period` values ending at that index. A period longer than the data is
/// valid and yields an all-`None` series.
pub fn sma(data: &[f64], period: usize) -> Result<Vec<Option<f64>>> {
    if period == 0 {
        return Err(MathError::InvalidInput(
            "Period must be greater than zero".to_string(),
        ));
    }

    let mut out = vec![None; data.len()];
    let mut sum = 0.0;

    for (i, &value) in data.iter().enumerate() {
        sum += value;
        if i >= period {
            sum -= data[i - period];
        }
        if i + 1 >= period {
            out[i] = Some((sum / period as f64).round());
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_sma_calculation() {
        let result = sma(&[10.0, 20.0, 30.0], 2).unwrap();
        assert_eq!(result, vec![None, Some(15.0), Some(25.0)]);
    }

    #[test]
    fn test_sma_window_slides() {
        let result = sma(&[2.0, 4.0, 6.0, 8.0], 3).unwrap();
        assert_eq!(result, vec![None, None, Some(4.0), Some(6.0)]);
    }

    #[rstest]
    #[case(&[10.0, 20.0, 30.0], 1)]
    #[case(&[10.0, 20.0, 30.0], 2)]
    #[case(&[10.0, 20.0, 30.0], 3)]
    #[case(&[42_100.0, 41_900.0, 42_000.0, 42_300.0, 42_150.0], 4)]
    fn test_length_and_prefix_invariant(#[case] data: &[f64], #[case] period: usize) {
        let result = sma(data, period).unwrap();

        assert_eq!(result.len(), data.len());
        assert!(result[..period - 1].iter().all(|v| v.is_none()));
        assert!(result[period - 1..].iter().all(|v| v.is_some()));
    }

    #[test]
    fn test_period_longer_than_data_is_all_none() {
        let result = sma(&[10.0, 20.0], 5).unwrap();
        assert_eq!(result, vec![None, None]);
    }

    #[test]
    fn test_empty_data() {
        let result = sma(&[], 3).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_zero_period_rejected() {
        assert!(sma(&[10.0, 20.0], 0).is_err());
    }

    #[test]
    fn test_mean_is_rounded() {
        // (10 + 15) / 2 = 12.5 rounds away from the window midpoint
        let result = sma(&[10.0, 15.0], 2).unwrap();
        assert_eq!(result[1], Some(13.0));
    }
}
