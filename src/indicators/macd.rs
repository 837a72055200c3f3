// =============================================================================
// Moving Average Convergence Divergence (MACD)
// =============================================================================
//
//   macd      = EMA(close, fast) - EMA(close, slow)
//   signal    = EMA(macd, signal_period)
//   histogram = macd - signal
//
// Both EMAs seed at the first close, so all three series are defined from
// index 0.

use crate::ma::ema::ema;

/// The three aligned MACD output series.
#[derive(Debug, Clone, PartialEq)]
pub struct MacdSeries {
    pub macd: Vec<f64>,
    pub signal: Vec<f64>,
    pub histogram: Vec<f64>,
}

/// Compute MACD for `closes` with the given EMA lengths.
///
/// Length-preserving across all three series.
pub fn macd(closes: &[f64], fast: usize, slow: usize, signal_period: usize) -> MacdSeries {
    let fast_ema = ema(closes, fast);
    let slow_ema = ema(closes, slow);

    let macd_line: Vec<f64> = fast_ema
        .iter()
        .zip(slow_ema.iter())
        .map(|(&f, &s)| f - s)
        .collect();

    let signal = ema(&macd_line, signal_period);

    let histogram: Vec<f64> = macd_line
        .iter()
        .zip(signal.iter())
        .map(|(&m, &s)| m - s)
        .collect();

    MacdSeries {
        macd: macd_line,
        signal,
        histogram,
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn macd_lengths_match_input() {
        let closes: Vec<f64> = (1..=50).map(|x| x as f64).collect();
        let out = macd(&closes, 12, 26, 9);
        assert_eq!(out.macd.len(), 50);
        assert_eq!(out.signal.len(), 50);
        assert_eq!(out.histogram.len(), 50);
    }

    #[test]
    fn macd_defined_from_index_zero() {
        let closes: Vec<f64> = (1..=50).map(|x| x as f64).collect();
        let out = macd(&closes, 12, 26, 9);
        assert!(!out.macd[0].is_nan());
        assert!(!out.signal[0].is_nan());
        assert!(!out.histogram[0].is_nan());
    }

    #[test]
    fn macd_starts_at_zero() {
        // Both EMAs seed with close[0], so the line starts at 0.
        let closes: Vec<f64> = (1..=50).map(|x| x as f64).collect();
        let out = macd(&closes, 12, 26, 9);
        assert!(out.macd[0].abs() < 1e-12);
    }

    #[test]
    fn macd_positive_in_uptrend() {
        // Fast EMA leads slow EMA in a sustained uptrend.
        let closes: Vec<f64> = (1..=100).map(|x| x as f64).collect();
        let out = macd(&closes, 12, 26, 9);
        assert!(out.macd[99] > 0.0);
        assert!(out.histogram[99] >= 0.0);
    }

    #[test]
    fn macd_negative_in_downtrend() {
        let closes: Vec<f64> = (1..=100).rev().map(|x| x as f64).collect();
        let out = macd(&closes, 12, 26, 9);
        assert!(out.macd[99] < 0.0);
    }

    #[test]
    fn macd_flat_market_is_zero_everywhere() {
        let out = macd(&vec![100.0; 60], 12, 26, 9);
        for i in 0..60 {
            assert!(out.macd[i].abs() < 1e-12);
            assert!(out.signal[i].abs() < 1e-12);
            assert!(out.histogram[i].abs() < 1e-12);
        }
    }

    #[test]
    fn macd_histogram_is_line_minus_signal() {
        let closes: Vec<f64> = (0..80).map(|x| 100.0 + (x as f64 * 0.2).sin() * 5.0).collect();
        let out = macd(&closes, 12, 26, 9);
        for i in 0..80 {
            assert!((out.histogram[i] - (out.macd[i] - out.signal[i])).abs() < 1e-12);
        }
    }
}
