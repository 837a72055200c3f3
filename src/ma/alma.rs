// =============================================================================
// Arnaud Legoux Moving Average (ALMA)
// =============================================================================
//
// Gaussian-weighted trailing window. The weight curve is centered at
// `offset * (length - 1)` with width `length / sigma`:
//   w_j = exp(-(j - m)^2 / (2 * s^2)),  m = offset*(length-1),  s = length/sigma
//   ALMA_t = sum(w_j * x_j) / sum(w_j)
//
// Offset 0.85 places the curve near the recent edge of the window; sigma 6
// is the conventional curve width. The first `length - 1` positions are NaN.

/// Conventional ALMA offset.
pub const DEFAULT_OFFSET: f64 = 0.85;
/// Conventional ALMA sigma.
pub const DEFAULT_SIGMA: f64 = 6.0;

/// Compute the ALMA series for `series` with the given window `length`,
/// `offset` in [0, 1], and `sigma > 0`.
///
/// Length-preserving; each window is accumulated left-to-right in index
/// order. A window containing a NaN yields NaN at that position.
///
/// # Edge cases
/// - `length == 0`, `length > series.len()`, or `sigma <= 0` => all-NaN output
pub fn alma(series: &[f64], length: usize, offset: f64, sigma: f64) -> Vec<f64> {
    let n = series.len();
    let mut out = vec![f64::NAN; n];
    if length == 0 || length > n || sigma <= 0.0 {
        return out;
    }

    let m = offset * (length - 1) as f64;
    let s = length as f64 / sigma;

    let weights: Vec<f64> = (0..length)
        .map(|j| {
            let diff = j as f64 - m;
            (-diff * diff / (2.0 * s * s)).exp()
        })
        .collect();
    let weight_sum: f64 = weights.iter().sum();

    for i in (length - 1)..n {
        let window = &series[i + 1 - length..=i];
        let mut weighted = 0.0;
        let mut defined = true;
        for (j, &v) in window.iter().enumerate() {
            if v.is_nan() {
                defined = false;
                break;
            }
            weighted += weights[j] * v;
        }
        if defined {
            out[i] = weighted / weight_sum;
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
    fn alma_warmup_is_exactly_length_minus_one() {
        let data: Vec<f64> = (0..20).map(|x| x as f64).collect();
        let out = alma(&data, 9, DEFAULT_OFFSET, DEFAULT_SIGMA);
        assert_eq!(out.iter().filter(|v| v.is_nan()).count(), 8);
    }

    #[test]
    fn alma_constant_input() {
        // Weight normalisation makes a constant series map to itself.
        let out = alma(&vec![12.5; 15], 9, DEFAULT_OFFSET, DEFAULT_SIGMA);
        for &v in &out[8..] {
            assert!((v - 12.5).abs() < 1e-10);
        }
    }

    #[test]
    fn alma_offset_biases_toward_recent_values() {
        // Rising ramp: with offset 0.85 the output sits above the window mean.
        let data: Vec<f64> = (0..20).map(|x| x as f64).collect();
        let out = alma(&data, 9, DEFAULT_OFFSET, DEFAULT_SIGMA);
        let window_mean = (11.0 + 19.0) / 2.0; // mean of indices 11..=19
        assert!(out[19] > window_mean);
    }

    #[test]
    fn alma_stays_within_window_bounds() {
        let data = vec![10.0, 20.0, 5.0, 25.0, 15.0, 30.0, 8.0, 22.0, 18.0, 12.0];
        let out = alma(&data, 5, DEFAULT_OFFSET, DEFAULT_SIGMA);
        for i in 4..data.len() {
            let window = &data[i - 4..=i];
            let min = window.iter().cloned().fold(f64::INFINITY, f64::min);
            let max = window.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
            assert!(out[i] >= min && out[i] <= max);
        }
    }

    #[test]
    fn alma_nan_window_yields_nan() {
        let mut data: Vec<f64> = (0..12).map(|x| x as f64).collect();
        data[6] = f64::NAN;
        let out = alma(&data, 3, DEFAULT_OFFSET, DEFAULT_SIGMA);
        assert!(out[6].is_nan());
        assert!(out[7].is_nan());
        assert!(out[8].is_nan());
        assert!(!out[9].is_nan());
    }

    #[test]
    fn alma_degenerate_parameters_are_all_nan() {
        assert!(alma(&[1.0, 2.0], 0, 0.85, 6.0).iter().all(|v| v.is_nan()));
        assert!(alma(&[1.0, 2.0], 3, 0.85, 6.0).iter().all(|v| v.is_nan()));
        assert!(alma(&[1.0, 2.0], 2, 0.85, 0.0).iter().all(|v| v.is_nan()));
    }
}
