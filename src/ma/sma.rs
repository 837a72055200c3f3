// =============================================================================
// Simple Moving Average (SMA)
// =============================================================================
//
// Rolling arithmetic mean over a trailing window:
//   SMA_t = (x_{t-length+1} + ... + x_t) / length
//
// The first `length - 1` output positions are NaN (window not yet full).

/// Compute the SMA series for `series` with the given window `length`.
///
/// Length-preserving; each window is summed left-to-right in index order.
/// A window containing a NaN yields NaN at that position.
///
/// # Edge cases
/// - `length == 0` or `length > series.len()` => all-NaN output
pub fn sma(series: &[f64], length: usize) -> Vec<f64> {
    let n = series.len();
    let mut out = vec![f64::NAN; n];
    if length == 0 || length > n {
        return out;
    }

    for i in (length - 1)..n {
        let window = &series[i + 1 - length..=i];
        let mut sum = 0.0;
        let mut defined = true;
        for &v in window {
            if v.is_nan() {
                defined = false;
                break;
            }
            sum += v;
        }
        if defined {
            out[i] = sum / length as f64;
        }
    }

    out
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sma_known_values() {
        let data = vec![1.0, 2.0, 3.0, 4.0, 5.0];
        let out = sma(&data, 3);
        assert_eq!(out.len(), 5);
        assert!(out[0].is_nan());
        assert!(out[1].is_nan());
        assert!((out[2] - 2.0).abs() < 1e-10);
        assert!((out[3] - 3.0).abs() < 1e-10);
        assert!((out[4] - 4.0).abs() < 1e-10);
    }

    #[test]
    fn sma_warmup_is_exactly_length_minus_one() {
        for length in 1..=8 {
            let data: Vec<f64> = (0..20).map(|x| x as f64).collect();
            let out = sma(&data, length);
            let nan_count = out.iter().filter(|v| v.is_nan()).count();
            assert_eq!(nan_count, length - 1);
        }
    }

    #[test]
    fn sma_length_one_is_identity() {
        let data = vec![3.0, 1.0, 4.0, 1.0, 5.0];
        assert_eq!(sma(&data, 1), data);
    }

    #[test]
    fn sma_constant_input() {
        let out = sma(&vec![7.5; 10], 4);
        for &v in &out[3..] {
            assert!((v - 7.5).abs() < 1e-12);
        }
    }

    #[test]
    fn sma_zero_length_is_all_nan() {
        let out = sma(&[1.0, 2.0, 3.0], 0);
        assert!(out.iter().all(|v| v.is_nan()));
    }

    #[test]
    fn sma_length_exceeding_input_is_all_nan() {
        let out = sma(&[1.0, 2.0], 5);
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|v| v.is_nan()));
    }

    #[test]
    fn sma_nan_window_yields_nan_then_recovers() {
        let data = vec![1.0, f64::NAN, 3.0, 4.0, 5.0, 6.0];
        let out = sma(&data, 2);
        assert!(out[1].is_nan()); // window [1.0, NaN]
        assert!(out[2].is_nan()); // window [NaN, 3.0]
        assert!((out[3] - 3.5).abs() < 1e-10); // NaN left the window
        assert!((out[4] - 4.5).abs() < 1e-10);
    }
}
