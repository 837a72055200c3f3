// =============================================================================
// Weighted Moving Average (WMA)
// =============================================================================
//
// Linearly-weighted trailing window: weights run 1..length with the most
// recent value carrying weight `length`.
//   WMA_t = sum(w_j * x_j) / (length * (length + 1) / 2)
//
// The first `length - 1` output positions are NaN.

/// Compute the WMA series for `series` with the given window `length`.
///
/// Length-preserving; each window is accumulated left-to-right in index
/// order. A window containing a NaN yields NaN at that position.
///
/// # Edge cases
/// - `length == 0` or `length > series.len()` => all-NaN output
pub fn wma(series: &[f64], length: usize) -> Vec<f64> {
    let n = series.len();
    let mut out = vec![f64::NAN; n];
    if length == 0 || length > n {
        return out;
    }

    let weight_sum = (length * (length + 1) / 2) as f64;

    for i in (length - 1)..n {
        let window = &series[i + 1 - length..=i];
        let mut weighted = 0.0;
        let mut defined = true;
        for (j, &v) in window.iter().enumerate() {
            if v.is_nan() {
                defined = false;
                break;
            }
            weighted += (j + 1) as f64 * v;
        }
        if defined {
            out[i] = weighted / weight_sum;
        }
    }

    out
}
