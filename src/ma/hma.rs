// =============================================================================
// Hull Moving Average (HMA)
// =============================================================================
//
// Alan Hull's low-lag average, built from three WMAs:
//   HMA = WMA(2 * WMA(x, length/2) - WMA(x, length), round(sqrt(length)))
//
// The de-lagged intermediate doubles the half-window average and subtracts
// the full-window average, then a short WMA smooths the result.

use super::wma::wma;

/// Compute the HMA series for `series` with the given `length`.
///
/// Length-preserving. Warm-up positions (NaN from either inner WMA plus the
/// outer `round(sqrt(length))` window) propagate naturally.
///
/// # Edge cases
/// - `length == 0` or `length > series.len()` => all-NaN output
pub fn hma(series: &[f64], length: usize) -> Vec<f64> {
    let n = series.len();
    if length == 0 || length > n {
        return vec![f64::NAN; n];
    }

    let half = (length / 2).max(1);
    let sqrt_len = ((length as f64).sqrt().round() as usize).max(1);

    let wma_half = wma(series, half);
    let wma_full = wma(series, length);

    let delagged: Vec<f64> = wma_half
        .iter()
        .zip(wma_full.iter())
        .map(|(&h, &f)| 2.0 * h - f)
        .collect();

    wma(&delagged, sqrt_len)
}
