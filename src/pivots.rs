// =============================================================================
// Pivot Detector
// =============================================================================
//
// Finds confirmed local extrema in any numeric series. Index `i` qualifies
// as a pivot high iff `series[i]` is *strictly* greater than every other
// value in the symmetric window `[i - period, i + period]`; a pivot low is
// the strict-less analogue. Strictness is the tie-break policy: plateaus
// never qualify. A pivot needs `period` bars confirmed on both sides, so
// nothing is reported within `period` positions of either end, and a window
// touching a NaN warm-up position never qualifies.

use serde::{Deserialize, Serialize};

/// A confirmed local extremum: position in the series and the value there.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pivot {
    pub index: usize,
    pub value: f64,
}

/// Find all pivot highs in `series` with the given confirmation `period`.
///
/// Returns pivots in strictly increasing index order; may be empty.
pub fn find_pivot_highs(series: &[f64], period: usize) -> Vec<Pivot> {
    find_pivots(series, period, Extremum::High)
}

/// Find all pivot lows in `series` with the given confirmation `period`.
///
/// Returns pivots in strictly increasing index order; may be empty.
pub fn find_pivot_lows(series: &[f64], period: usize) -> Vec<Pivot> {
    find_pivots(series, period, Extremum::Low)
}

#[derive(Clone, Copy)]
enum Extremum {
    High,
    Low,
}

fn find_pivots(series: &[f64], period: usize, side: Extremum) -> Vec<Pivot> {
    let n = series.len();
    let mut out = Vec::new();
    // Confirmation needs `period` bars on both sides of a candidate.
    if period == 0 || n == 0 || period > (n - 1) / 2 {
        return out;
    }

    'candidate: for i in period..(n - period) {
        let center = series[i];
        if center.is_nan() {
            continue;
        }
        for j in (i - period)..=(i + period) {
            if j == i {
                continue;
            }
            let v = series[j];
            // NaN comparisons are false, so the window must be checked
            // explicitly: an undefined neighbour disqualifies the candidate.
            if v.is_nan() {
                continue 'candidate;
            }
            let beaten = match side {
                Extremum::High => v >= center,
                Extremum::Low => v <= center,
            };
            if beaten {
                continue 'candidate;
            }
        }
        out.push(Pivot {
            index: i,
            value: center,
        });
    }

    out
}
