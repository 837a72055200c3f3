// =============================================================================
// Relative Strength Index (RSI) — window-mean variant
// =============================================================================
//
// RSI measures the speed and magnitude of recent price changes.
//
// Step 1 — Compute signed close-to-close changes.
// Step 2 — Average gains and losses with a simple mean over the trailing
//          `period` changes (not Wilder's recursive smoothing — the window
//          mean is what the divergence classifier aligns pivots against).
// Step 3 — RS  = avg_gain / avg_loss_guarded
//          RSI = 100 - 100 / (1 + RS)
//
// The first change exists at index 1, so the output carries exactly
// `period` NaN warm-up positions.

use super::guard_denom;

/// Compute the RSI series for `closes` with the given `period`.
///
/// Length-preserving; the first `period` positions are NaN.
///
/// # Edge cases
/// - `period == 0` or `closes.len() < period + 1` => all-NaN output
/// - A flat window (no gains, no losses) resolves to 0 via the epsilon
///   guard — finite, never NaN.
pub fn rsi(closes: &[f64], period: usize) -> Vec<f64> {
    let n = closes.len();
    let mut out = vec![f64::NAN; n];
    if period == 0 || n <= period {
        return out;
    }

    for i in period..n {
        let mut gain_sum = 0.0;
        let mut loss_sum = 0.0;
        let mut defined = true;
        for j in (i + 1 - period)..=i {
            let delta = closes[j] - closes[j - 1];
            if delta.is_nan() {
                defined = false;
                break;
            }
            if delta > 0.0 {
                gain_sum += delta;
            } else {
                loss_sum += -delta;
            }
        }
        if !defined {
            continue;
        }

        let avg_gain = gain_sum / period as f64;
        let avg_loss = loss_sum / period as f64;
        out[i] = 100.0 - 100.0 / (1.0 + avg_gain / guard_denom(avg_loss));
    }

    out
}
