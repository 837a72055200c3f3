// =============================================================================
// Shared types used across the Aurora TA engine
// =============================================================================
//
// A `Bar` is the sole external input: an immutable OHLCV record with a
// millisecond timestamp. An ordered chronological sequence of bars feeds
// every computation; the engine derives aligned `Vec<f64>` series from the
// bar fields and owns its output arrays exclusively.
//
// Warm-up positions in a derived series — indices where a rolling
// computation lacks sufficient history — hold `f64::NAN`. The sentinel is
// strictly internal: it must never appear in input, and `validate_bars`
// rejects any bar carrying a non-finite field before computation begins.

use serde::{Deserialize, Serialize};

use crate::error::{EngineError, Result};

/// A single OHLCV bar supplied by the surrounding data collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub timestamp: i64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: f64,
}

impl Bar {
    /// Typical price: `(high + low + close) / 3`.
    pub fn typical_price(&self) -> f64 {
        (self.high + self.low + self.close) / 3.0
    }

    /// Whether every numeric field is finite.
    pub fn is_finite(&self) -> bool {
        self.open.is_finite()
            && self.high.is_finite()
            && self.low.is_finite()
            && self.close.is_finite()
            && self.volume.is_finite()
    }
}

/// One oscillator output sample aligned to an input bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OscillatorPoint {
    pub timestamp: i64,
    pub value: f64,
}

/// Validate an input bar sequence.
///
/// Fails with [`EngineError::InvalidInput`] when the sequence is empty or
/// any bar carries a non-finite field. Runs before every public entry
/// point so that no partial output is ever produced.
pub fn validate_bars(bars: &[Bar]) -> Result<()> {
    if bars.is_empty() {
        return Err(EngineError::invalid_input("bar sequence must not be empty"));
    }
    for (i, bar) in bars.iter().enumerate() {
        if !bar.is_finite() {
            return Err(EngineError::invalid_input(format!(
                "bar at index {i} has a non-finite field"
            )));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Series extraction helpers
// ---------------------------------------------------------------------------

/// Close prices, one per bar.
pub fn closes(bars: &[Bar]) -> Vec<f64> {
    bars.iter().map(|b| b.close).collect()
}

/// High prices, one per bar.
pub fn highs(bars: &[Bar]) -> Vec<f64> {
    bars.iter().map(|b| b.high).collect()
}

/// Low prices, one per bar.
pub fn lows(bars: &[Bar]) -> Vec<f64> {
    bars.iter().map(|b| b.low).collect()
}

/// Volumes, one per bar.
pub fn volumes(bars: &[Bar]) -> Vec<f64> {
    bars.iter().map(|b| b.volume).collect()
}

/// Typical prices `(high + low + close) / 3`, one per bar.
pub fn typical_prices(bars: &[Bar]) -> Vec<f64> {
    bars.iter().map(Bar::typical_price).collect()
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    fn sample_bar(close: f64) -> Bar {
        Bar {
            timestamp: 1_700_000_000_000,
            open: close - 0.5,
            high: close + 1.0,
            low: close - 1.0,
            close,
            volume: 100.0,
        }
    }

    #[test]
    fn typical_price_is_hlc_mean() {
        let bar = sample_bar(30.0);
        assert!((bar.typical_price() - (31.0 + 29.0 + 30.0) / 3.0).abs() < 1e-12);
    }

    #[test]
    fn validate_rejects_empty() {
        assert!(validate_bars(&[]).is_err());
    }

    #[test]
    fn validate_rejects_non_finite_field() {
        let mut bar = sample_bar(10.0);
        bar.volume = f64::NAN;
        let err = validate_bars(&[sample_bar(9.0), bar]).unwrap_err();
        assert!(err.to_string().contains("index 1"));
    }

    #[test]
    fn validate_accepts_finite_bars() {
        let bars: Vec<Bar> = (0..5).map(|i| sample_bar(100.0 + i as f64)).collect();
        assert!(validate_bars(&bars).is_ok());
    }

    #[test]
    fn extraction_helpers_align_with_bars() {
        let bars: Vec<Bar> = (0..4).map(|i| sample_bar(10.0 + i as f64)).collect();
        assert_eq!(closes(&bars), vec![10.0, 11.0, 12.0, 13.0]);
        assert_eq!(highs(&bars), vec![11.0, 12.0, 13.0, 14.0]);
        assert_eq!(lows(&bars), vec![9.0, 10.0, 11.0, 12.0]);
        assert_eq!(volumes(&bars), vec![100.0; 4]);
        assert_eq!(typical_prices(&bars).len(), bars.len());
    }

    #[test]
    fn bar_serde_roundtrip() {
        let bar = sample_bar(42.0);
        let json = serde_json::to_string(&bar).unwrap();
        let back: Bar = serde_json::from_str(&json).unwrap();
        assert_eq!(bar, back);
    }
}
