// =============================================================================
// Chaikin Money Flow (CMF)
// =============================================================================
//
// Rolling volume-weighted accumulation/distribution:
//   mfm = ((close - low) - (high - close)) / (high - low)_guarded
//   CMF = sum(mfm * volume) / sum(volume)_guarded   over the window
//
// mfm lands in [-1, 1]: +1 when the close pins the high, -1 at the low.

use super::guard_denom;

/// Compute the CMF series for aligned `highs`, `lows`, `closes`, and
/// `volumes` with the given window `period`.
///
/// Length-preserving; the first `period - 1` positions are NaN.
///
/// # Edge cases
/// - `period == 0` or `period > closes.len()` => all-NaN output
/// - Zero bar range and zero window volume both resolve via the epsilon
///   guard — finite output.
pub fn cmf(
    highs: &[f64],
    lows: &[f64],
    closes: &[f64],
    volumes: &[f64],
    period: usize,
) -> Vec<f64> {
    let n = closes.len();
    let mut out = vec![f64::NAN; n];
    if period == 0 || period > n {
        return out;
    }

    // Per-bar money-flow volume, computed once.
    let mut flow = Vec::with_capacity(n);
    for i in 0..n {
        let multiplier =
            ((closes[i] - lows[i]) - (highs[i] - closes[i])) / guard_denom(highs[i] - lows[i]);
        flow.push(multiplier * volumes[i]);
    }

    for i in (period - 1)..n {
        let start = i + 1 - period;
        let mut flow_sum = 0.0;
        let mut volume_sum = 0.0;
        let mut defined = true;
        for j in start..=i {
            if flow[j].is_nan() || volumes[j].is_nan() {
                defined = false;
                break;
            }
            flow_sum += flow[j];
            volume_sum += volumes[j];
        }
        if defined {
            out[i] = flow_sum / guard_denom(volume_sum);
        }
    }

    out
}
