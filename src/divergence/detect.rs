// =============================================================================
// Pivot-pair detectors
// =============================================================================
//
// For one divergence kind, scan same-side price pivots from the most recent
// backward against all earlier pivots, comparing the indicator values at
// the two pivot indices. Distances grow as the scan walks backward, so
// crossing `max_bars_to_check` is a valid early exit. Pairs closer than
// `min_bar_distance` are noise and skipped, as is any pair whose indicator
// value is still in warm-up at either index.
//
// The detector returns the matched pivot pair itself; nothing downstream
// re-derives which pivots matched.

use crate::pivots::Pivot;

use super::types::DivergenceKind;

/// The matched (earlier, recent) pivot pair behind one divergence.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PivotPair {
    pub start: Pivot,
    pub end: Pivot,
}

impl PivotPair {
    /// Bars between the two pivots.
    pub fn bar_distance(&self) -> usize {
        self.end.index - self.start.index
    }
}

/// Find the nearest qualifying pivot pair for `kind`, or `None`.
///
/// `price_pivots` must be the same-side pivot sequence for the kind
/// (lows for positive kinds, highs for negative kinds), in increasing
/// index order. `indicator` is the full bar-aligned indicator series.
pub fn find_divergence(
    kind: DivergenceKind,
    price_pivots: &[Pivot],
    indicator: &[f64],
    max_bars_to_check: usize,
    min_bar_distance: usize,
) -> Option<PivotPair> {
    let (&recent, earlier) = price_pivots.split_last()?;
    let indicator_recent = indicator[recent.index];
    if indicator_recent.is_nan() {
        return None;
    }

    for &prior in earlier.iter().rev() {
        let distance = recent.index - prior.index;
        if distance > max_bars_to_check {
            break;
        }
        if distance < min_bar_distance {
            continue;
        }
        let indicator_prior = indicator[prior.index];
        if indicator_prior.is_nan() {
            continue;
        }

        let qualifies = match kind {
            // Price lower low, indicator higher value: bullish reversal.
            DivergenceKind::PositiveRegular => {
                recent.value < prior.value && indicator_recent > indicator_prior
            }
            // Price higher high, indicator lower value: bearish reversal.
            DivergenceKind::NegativeRegular => {
                recent.value > prior.value && indicator_recent < indicator_prior
            }
            // Price higher low, indicator lower value: bullish continuation.
            DivergenceKind::PositiveHidden => {
                recent.value > prior.value && indicator_recent < indicator_prior
            }
            // Price lower high, indicator higher value: bearish continuation.
            DivergenceKind::NegativeHidden => {
                recent.value < prior.value && indicator_recent > indicator_prior
            }
        };

        if qualifies {
            return Some(PivotPair {
                start: prior,
                end: recent,
            });
        }
    }

    None
}
