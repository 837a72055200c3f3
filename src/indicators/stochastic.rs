// =============================================================================
// Stochastic Oscillator (%K, smoothed)
// =============================================================================
//
// Position of the close inside the trailing high/low range:
//   raw %K = (close - lowest_low) / (highest_high - lowest_low)_guarded * 100
// then smoothed by SMA(smooth_k).

use super::guard_denom;
use crate::ma::sma::sma;

/// Compute the smoothed stochastic %K series.
///
/// `highs`, `lows`, and `closes` must be aligned and of equal length.
/// Length-preserving; warm-up is `period - 1` positions for the raw %K plus
/// `smooth_k - 1` from the smoothing pass.
///
/// # Edge cases
/// - `period == 0` or `period > closes.len()` => all-NaN output
/// - A zero high/low range resolves via the epsilon guard — finite output.
pub fn stochastic(
    highs: &[f64],
    lows: &[f64],
    closes: &[f64],
    period: usize,
    smooth_k: usize,
) -> Vec<f64> {
    let n = closes.len();
    let mut raw = vec![f64::NAN; n];
    if period == 0 || period > n {
        return raw;
    }

    for i in (period - 1)..n {
        let start = i + 1 - period;
        let mut highest = f64::NEG_INFINITY;
        let mut lowest = f64::INFINITY;
        let mut defined = true;
        for j in start..=i {
            let h = highs[j];
            let l = lows[j];
            if h.is_nan() || l.is_nan() {
                defined = false;
                break;
            }
            highest = highest.max(h);
            lowest = lowest.min(l);
        }
        if !defined || closes[i].is_nan() {
            continue;
        }
        raw[i] = (closes[i] - lowest) / guard_denom(highest - lowest) * 100.0;
    }

    sma(&raw, smooth_k)
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(n: usize) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
        let closes: Vec<f64> = (0..n).map(|x| 100.0 + x as f64).collect();
        let highs: Vec<f64> = closes.iter().map(|c| c + 1.0).collect();
        let lows: Vec<f64> = closes.iter().map(|c| c - 1.0).collect();
        (highs, lows, closes)
    }

    #[test]
    fn stochastic_length_matches_input() {
        let (h, l, c) = ramp(40);
        assert_eq!(stochastic(&h, &l, &c, 14, 3).len(), 40);
    }

    #[test]
    fn stochastic_warmup_prefix() {
        // period-1 raw warm-up plus smooth_k-1 from the SMA pass.
        let (h, l, c) = ramp(40);
        let out = stochastic(&h, &l, &c, 14, 3);
        assert_eq!(out.iter().filter(|v| v.is_nan()).count(), 15);
        assert!(!out[15].is_nan());
    }

    #[test]
    fn stochastic_uptrend_is_high() {
        // Close rides the top of the trailing range on a steady ramp.
        let (h, l, c) = ramp(60);
        let out = stochastic(&h, &l, &c, 14, 3);
        assert!(out[59] > 80.0);
    }

    #[test]
    fn stochastic_downtrend_is_low() {
        let closes: Vec<f64> = (0..60).map(|x| 200.0 - x as f64).collect();
        let highs: Vec<f64> = closes.iter().map(|c| c + 1.0).collect();
        let lows: Vec<f64> = closes.iter().map(|c| c - 1.0).collect();
        let out = stochastic(&highs, &lows, &closes, 14, 3);
        assert!(out[59] < 20.0);
    }

    #[test]
    fn stochastic_stays_in_range() {
        let closes: Vec<f64> = (0..50).map(|x| 100.0 + (x as f64 * 0.7).sin() * 10.0).collect();
        let highs: Vec<f64> = closes.iter().map(|c| c + 0.5).collect();
        let lows: Vec<f64> = closes.iter().map(|c| c - 0.5).collect();
        let out = stochastic(&highs, &lows, &closes, 14, 3);
        for &v in out.iter().filter(|v| !v.is_nan()) {
            assert!((0.0..=100.0).contains(&v), "%K {v} out of range");
        }
    }

    #[test]
    fn stochastic_zero_range_is_finite() {
        let flat = vec![100.0; 30];
        let out = stochastic(&flat, &flat, &flat, 14, 3);
        for &v in out.iter().filter(|v| !v.is_nan()) {
            assert!(v.is_finite());
        }
    }
}
