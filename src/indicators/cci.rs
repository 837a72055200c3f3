// =============================================================================
// Commodity Channel Index (CCI)
// =============================================================================
//
// Deviation of the typical price from its own rolling mean, scaled by the
// window's mean absolute deviation:
//   CCI = (tp - SMA(tp, period)) / (0.015 * MAD)_guarded

use super::guard_denom;

/// Compute the CCI series for an aligned `typical` price series.
///
/// Length-preserving; the first `period - 1` positions are NaN.
///
/// # Edge cases
/// - `period == 0` or `period > typical.len()` => all-NaN output
/// - A constant window (zero MAD) resolves to 0 via the epsilon guard.
pub fn cci(typical: &[f64], period: usize) -> Vec<f64> {
    let n = typical.len();
    let mut out = vec![f64::NAN; n];
    if period == 0 || period > n {
        return out;
    }

    for i in (period - 1)..n {
        let window = &typical[i + 1 - period..=i];

        let mut sum = 0.0;
        let mut defined = true;
        for &v in window {
            if v.is_nan() {
                defined = false;
                break;
            }
            sum += v;
        }
        if !defined {
            continue;
        }
        let mean = sum / period as f64;

        let mut abs_dev = 0.0;
        for &v in window {
            abs_dev += (v - mean).abs();
        }
        let mad = abs_dev / period as f64;

        out[i] = (typical[i] - mean) / guard_denom(0.015 * mad);
    }

    out
}
