// =============================================================================
// Volume-Weighted Moving Average (VWMA) and VWMACD
// =============================================================================
//
//   VWMA_t   = sum(close * volume) / sum(volume)_guarded   over the window
//   VWMACD   = VWMA(fast) - VWMA(slow)
//
// The volume-weighted MACD pairs the two windows the same way the EMA-based
// MACD does, but weights every close by traded volume.

use super::guard_denom;

/// Compute the VWMA series for aligned `closes` and `volumes` with the
/// given window `period`.
///
/// Length-preserving; the first `period - 1` positions are NaN.
///
/// # Edge cases
/// - `period == 0` or `period > closes.len()` => all-NaN output
/// - A zero-volume window resolves via the epsilon guard — finite output.
pub fn vwma(closes: &[f64], volumes: &[f64], period: usize) -> Vec<f64> {
    let n = closes.len();
    let mut out = vec![f64::NAN; n];
    if period == 0 || period > n {
        return out;
    }

    for i in (period - 1)..n {
        let start = i + 1 - period;
        let mut weighted = 0.0;
        let mut volume_sum = 0.0;
        let mut defined = true;
        for j in start..=i {
            let c = closes[j];
            let v = volumes[j];
            if c.is_nan() || v.is_nan() {
                defined = false;
                break;
            }
            weighted += c * v;
            volume_sum += v;
        }
        if defined {
            out[i] = weighted / guard_denom(volume_sum);
        }
    }

    out
}

/// Compute VWMACD: `VWMA(fast) - VWMA(slow)` over aligned closes/volumes.
///
/// Length-preserving; NaN until the slow window is full.
pub fn vwmacd(closes: &[f64], volumes: &[f64], fast: usize, slow: usize) -> Vec<f64> {
    let fast_ma = vwma(closes, volumes, fast);
    let slow_ma = vwma(closes, volumes, slow);

    fast_ma
        .iter()
        .zip(slow_ma.iter())
        .map(|(&f, &s)| f - s)
        .collect()
}
