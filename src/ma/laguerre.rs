// =============================================================================
// Laguerre Filter
// =============================================================================
//
// John Ehlers' 4-stage IIR smoother. Each stage feeds the next with a
// damping factor gamma in [0, 1] (0 = most responsive, 1 = smoothest):
//   L0 = (1 - g) * x + g * L0_prev
//   L1 = -g * L0 + L0_prev + g * L1_prev
//   L2 = -g * L1 + L1_prev + g * L2_prev
//   L3 = -g * L2 + L2_prev + g * L3_prev
//   out = (L0 + 2*L1 + 2*L2 + L3) / 6
//
// All four stages seed at the first defined sample (mirroring the EMA seed
// rule), so a constant series maps to itself and the output is defined from
// index 0 on fully-defined input. Interior NaNs are skipped without
// touching filter state.

/// Compute the Laguerre filter series for `series` with damping `gamma`.
///
/// Length-preserving; defined from the first defined input position.
///
/// # Edge cases
/// - all-NaN input => all-NaN output
pub fn laguerre(series: &[f64], gamma: f64) -> Vec<f64> {
    let n = series.len();
    let mut out = vec![f64::NAN; n];

    let g = gamma;
    let mut seeded = false;
    let (mut l0, mut l1, mut l2, mut l3) = (0.0_f64, 0.0_f64, 0.0_f64, 0.0_f64);

    for i in 0..n {
        let x = series[i];
        if x.is_nan() {
            continue;
        }
        if !seeded {
            l0 = x;
            l1 = x;
            l2 = x;
            l3 = x;
            seeded = true;
            out[i] = x;
            continue;
        }

        let l0_prev = l0;
        let l1_prev = l1;
        let l2_prev = l2;
        let l3_prev = l3;

        l0 = (1.0 - g) * x + g * l0_prev;
        l1 = -g * l0 + l0_prev + g * l1_prev;
        l2 = -g * l1 + l1_prev + g * l2_prev;
        l3 = -g * l2 + l2_prev + g * l3_prev;

        out[i] = (l0 + 2.0 * l1 + 2.0 * l2 + l3) / 6.0;
    }

    out
}
