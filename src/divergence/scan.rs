// =============================================================================
// Divergence scan driver
// =============================================================================
//
// The engine's first public entry point: validates the bar sequence,
// resolves the requested indicator names against the closed catalog
// (unknown names are dropped silently — the response echoes what actually
// ran), detects close-price pivots once, then runs the kind detectors for
// every checked indicator and emits one record per indicator per
// qualifying kind.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{EngineError, Result};
use crate::pivots::{find_pivot_highs, find_pivot_lows};
use crate::types::{self, Bar};

use super::catalog::IndicatorKind;
use super::detect::find_divergence;
use super::types::{Divergence, DivergenceKind, ScanMode};

// =============================================================================
// Default-value helpers (required by serde `default = "..."` attribute)
// =============================================================================

fn default_pivot_period() -> usize {
    5
}

fn default_max_bars_to_check() -> usize {
    100
}

fn default_min_bar_distance() -> usize {
    5
}

// =============================================================================
// ScanParams
// =============================================================================

/// Tunable parameters for a divergence scan.
///
/// Every field has a serde default so the surrounding shell can hot-load
/// partial JSON without breaking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanParams {
    /// Confirmation period for price pivots (bars on each side).
    #[serde(default = "default_pivot_period")]
    pub pivot_period: usize,

    /// Furthest pivot pair considered, in bars.
    #[serde(default = "default_max_bars_to_check")]
    pub max_bars_to_check: usize,

    /// Nearest pivot pair considered, in bars (noise filter).
    #[serde(default = "default_min_bar_distance")]
    pub min_bar_distance: usize,

    /// Which detector family to run.
    #[serde(default)]
    pub mode: ScanMode,
}

impl Default for ScanParams {
    fn default() -> Self {
        Self {
            pivot_period: default_pivot_period(),
            max_bars_to_check: default_max_bars_to_check(),
            min_bar_distance: default_min_bar_distance(),
            mode: ScanMode::Both,
        }
    }
}

impl ScanParams {
    fn validate(&self) -> Result<()> {
        if self.pivot_period == 0 {
            return Err(EngineError::invalid_input("pivot_period must be >= 1"));
        }
        if self.max_bars_to_check == 0 {
            return Err(EngineError::invalid_input("max_bars_to_check must be >= 1"));
        }
        Ok(())
    }
}

// =============================================================================
// Scan result
// =============================================================================

/// Result of one divergence scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DivergenceScan {
    /// Emitted records, ordered by catalog position then kind.
    pub divergences: Vec<Divergence>,
    /// The indicators actually evaluated, after unknown-name filtering and
    /// deduplication. Callers must read this to know what ran.
    pub checked: Vec<IndicatorKind>,
}

impl DivergenceScan {
    /// The record closest to the scan's most recent pivots, if any.
    pub fn nearest(&self) -> Option<&Divergence> {
        self.divergences.iter().min_by_key(|d| d.bar_distance)
    }
}

// =============================================================================
// Driver
// =============================================================================

/// Scan `bars` for divergences across the requested indicators.
///
/// Unknown indicator names are dropped, not rejected; duplicates are
/// evaluated once. Fails with [`EngineError::InvalidInput`] on an empty or
/// non-finite bar sequence or degenerate parameters, before any
/// computation.
pub fn scan(bars: &[Bar], indicator_names: &[&str], params: &ScanParams) -> Result<DivergenceScan> {
    types::validate_bars(bars)?;
    params.validate()?;

    let mut checked: Vec<IndicatorKind> = Vec::new();
    for &name in indicator_names {
        match IndicatorKind::from_name(name) {
            Some(kind) if !checked.contains(&kind) => checked.push(kind),
            Some(_) => {}
            None => debug!(name, "unknown indicator name dropped from scan"),
        }
    }

    let closes = types::closes(bars);
    let price_lows = find_pivot_lows(&closes, params.pivot_period);
    let price_highs = find_pivot_highs(&closes, params.pivot_period);

    debug!(
        bars = bars.len(),
        pivot_lows = price_lows.len(),
        pivot_highs = price_highs.len(),
        mode = %params.mode,
        "divergence scan started"
    );

    let mut divergences = Vec::new();
    for &indicator in &checked {
        let series = indicator.compute(bars);

        for kind in DivergenceKind::ALL {
            if !params.mode.includes(kind) {
                continue;
            }
            let pivots = if kind.is_bullish() {
                &price_lows
            } else {
                &price_highs
            };
            if let Some(pair) = find_divergence(
                kind,
                pivots,
                &series,
                params.max_bars_to_check,
                params.min_bar_distance,
            ) {
                debug!(
                    indicator = %indicator,
                    kind = %kind,
                    bar_distance = pair.bar_distance(),
                    "divergence detected"
                );
                divergences.push(Divergence {
                    indicator,
                    kind,
                    bar_distance: pair.bar_distance(),
                    start_price: pair.start.value,
                    end_price: pair.end.value,
                    start_indicator_value: series[pair.start.index],
                    end_indicator_value: series[pair.end.index],
                });
            }
        }
    }

    debug!(
        total = divergences.len(),
        checked = checked.len(),
        "divergence scan complete"
    );

    Ok(DivergenceScan {
        divergences,
        checked,
    })
}
