// =============================================================================
// Money Flow Index (MFI)
// =============================================================================
//
// Volume-weighted RSI analogue over the typical price:
//   raw_flow = typical * volume
// Each bar's raw flow joins the positive or negative rolling sum depending
// on the typical-price direction versus the previous bar (flat bars join
// neither), then the ratio maps to a 0-100 oscillator:
//   MFI = 100 - 100 / (1 + pos_sum / neg_sum_guarded)
//
// The first direction exists at index 1, so the output carries exactly
// `period` NaN warm-up positions.

use super::guard_denom;

/// Compute the MFI series for an aligned `typical` price series and
/// `volumes` with the given window `period`.
///
/// Length-preserving; the first `period` positions are NaN.
///
/// # Edge cases
/// - `period == 0` or `typical.len() < period + 1` => all-NaN output
/// - A constant-price window (no directional flow) resolves to 0 via the
///   epsilon guard — finite, never NaN.
pub fn mfi(typical: &[f64], volumes: &[f64], period: usize) -> Vec<f64> {
    let n = typical.len();
    let mut out = vec![f64::NAN; n];
    if period == 0 || n <= period {
        return out;
    }

    for i in period..n {
        let mut positive = 0.0;
        let mut negative = 0.0;
        let mut defined = true;
        for j in (i + 1 - period)..=i {
            let current = typical[j];
            let previous = typical[j - 1];
            let volume = volumes[j];
            if current.is_nan() || previous.is_nan() || volume.is_nan() {
                defined = false;
                break;
            }
            let raw_flow = current * volume;
            if current > previous {
                positive += raw_flow;
            } else if current < previous {
                negative += raw_flow;
            }
        }
        if !defined {
            continue;
        }

        out[i] = 100.0 - 100.0 / (1.0 + positive / guard_denom(negative));
    }

    out
}
