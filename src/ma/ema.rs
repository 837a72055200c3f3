// =============================================================================
// Exponential Moving Average (EMA)
// =============================================================================
//
// Recursive average weighted toward recent values:
//   alpha = 2 / (length + 1)
//   EMA_t = alpha * x_t + (1 - alpha) * EMA_{t-1}
//
// Seeded with the first defined value, so on fully-defined input the series
// is defined from index 0 (no warm-up). Over an input that starts with a
// NaN warm-up run the seed moves to the first defined value and the run is
// propagated; an interior NaN is skipped without touching filter state.

/// Compute the EMA series for `series` with the given `length`.
///
/// Length-preserving; defined from the first defined input position.
///
/// # Edge cases
/// - `length == 0` => all-NaN output
/// - all-NaN input => all-NaN output
pub fn ema(series: &[f64], length: usize) -> Vec<f64> {
    let n = series.len();
    let mut out = vec![f64::NAN; n];
    if length == 0 {
        return out;
    }

    let alpha = 2.0 / (length as f64 + 1.0);
    let mut prev: Option<f64> = None;

    for i in 0..n {
        let x = series[i];
        if x.is_nan() {
            continue;
        }
        let value = match prev {
            None => x,
            Some(p) => alpha * x + (1.0 - alpha) * p,
        };
        out[i] = value;
        prev = Some(value);
    }

    out
}
