// =============================================================================
// Indicator catalog — closed set of scannable indicators
// =============================================================================
//
// The scan driver dispatches on this tagged enum rather than a name-keyed
// lookup: an unsupported name fails `from_name` at the API boundary and is
// filtered there, never inside the math. Each variant knows how to derive
// its input series from the bar fields and which conventional periods to
// run with.

use serde::{Deserialize, Serialize};

use crate::indicators::{cci, cmf, macd, mfi, momentum, obv, rsi, stochastic, vwma};
use crate::types::{self, Bar};

const RSI_PERIOD: usize = 14;
const MACD_FAST: usize = 12;
const MACD_SLOW: usize = 26;
const MACD_SIGNAL: usize = 9;
const STOCH_PERIOD: usize = 14;
const STOCH_SMOOTH_K: usize = 3;
const CCI_PERIOD: usize = 20;
const MOMENTUM_PERIOD: usize = 10;
const VWMACD_FAST: usize = 12;
const VWMACD_SLOW: usize = 26;
const CMF_PERIOD: usize = 21;
const MFI_PERIOD: usize = 14;

/// The ten indicators the divergence scan can evaluate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IndicatorKind {
    Rsi,
    Macd,
    MacdHistogram,
    Stochastic,
    Cci,
    Momentum,
    Obv,
    Vwmacd,
    Cmf,
    Mfi,
}

impl IndicatorKind {
    /// Every catalog entry, in scan order.
    pub const ALL: [IndicatorKind; 10] = [
        IndicatorKind::Rsi,
        IndicatorKind::Macd,
        IndicatorKind::MacdHistogram,
        IndicatorKind::Stochastic,
        IndicatorKind::Cci,
        IndicatorKind::Momentum,
        IndicatorKind::Obv,
        IndicatorKind::Vwmacd,
        IndicatorKind::Cmf,
        IndicatorKind::Mfi,
    ];

    /// Resolve a requested indicator name against the catalog.
    ///
    /// Names are matched exactly; `None` means the request is dropped by
    /// the scan driver (policy, not an error).
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "RSI" => Some(Self::Rsi),
            "MACD" => Some(Self::Macd),
            "MACD Histogram" => Some(Self::MacdHistogram),
            "Stochastic" => Some(Self::Stochastic),
            "CCI" => Some(Self::Cci),
            "Momentum" => Some(Self::Momentum),
            "OBV" => Some(Self::Obv),
            "VWMACD" => Some(Self::Vwmacd),
            "CMF" => Some(Self::Cmf),
            "MFI" => Some(Self::Mfi),
            _ => None,
        }
    }

    /// Canonical catalog name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Rsi => "RSI",
            Self::Macd => "MACD",
            Self::MacdHistogram => "MACD Histogram",
            Self::Stochastic => "Stochastic",
            Self::Cci => "CCI",
            Self::Momentum => "Momentum",
            Self::Obv => "OBV",
            Self::Vwmacd => "VWMACD",
            Self::Cmf => "CMF",
            Self::Mfi => "MFI",
        }
    }

    /// Compute this indicator's series from `bars` with its conventional
    /// parameters. Length-preserving.
    pub fn compute(&self, bars: &[Bar]) -> Vec<f64> {
        match self {
            Self::Rsi => rsi::rsi(&types::closes(bars), RSI_PERIOD),
            Self::Macd => {
                macd::macd(&types::closes(bars), MACD_FAST, MACD_SLOW, MACD_SIGNAL).macd
            }
            Self::MacdHistogram => {
                macd::macd(&types::closes(bars), MACD_FAST, MACD_SLOW, MACD_SIGNAL).histogram
            }
            Self::Stochastic => stochastic::stochastic(
                &types::highs(bars),
                &types::lows(bars),
                &types::closes(bars),
                STOCH_PERIOD,
                STOCH_SMOOTH_K,
            ),
            Self::Cci => cci::cci(&types::typical_prices(bars), CCI_PERIOD),
            Self::Momentum => momentum::momentum(&types::closes(bars), MOMENTUM_PERIOD),
            Self::Obv => obv::obv(&types::closes(bars), &types::volumes(bars)),
            Self::Vwmacd => vwma::vwmacd(
                &types::closes(bars),
                &types::volumes(bars),
                VWMACD_FAST,
                VWMACD_SLOW,
            ),
            Self::Cmf => cmf::cmf(
                &types::highs(bars),
                &types::lows(bars),
                &types::closes(bars),
                &types::volumes(bars),
                CMF_PERIOD,
            ),
            Self::Mfi => mfi::mfi(&types::typical_prices(bars), &types::volumes(bars), MFI_PERIOD),
        }
    }
}

impl std::fmt::Display for IndicatorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    fn sample_bars(n: usize) -> Vec<Bar> {
        (0..n)
            .map(|i| {
                let close = 100.0 + (i as f64 * 0.35).sin() * 10.0;
                Bar {
                    timestamp: i as i64 * 60_000,
                    open: close - 0.3,
                    high: close + 1.0,
                    low: close - 1.0,
                    close,
                    volume: 50.0 + (i % 9) as f64,
                }
            })
            .collect()
    }

    #[test]
    fn names_roundtrip_through_the_catalog() {
        for kind in IndicatorKind::ALL {
            assert_eq!(IndicatorKind::from_name(kind.name()), Some(kind));
            assert_eq!(kind.to_string(), kind.name());
        }
    }

    #[test]
    fn unknown_names_resolve_to_none() {
        assert_eq!(IndicatorKind::from_name("ADX"), None);
        assert_eq!(IndicatorKind::from_name("rsi"), None); // exact match only
        assert_eq!(IndicatorKind::from_name(""), None);
    }

    #[test]
    fn every_indicator_preserves_length() {
        let bars = sample_bars(80);
        for kind in IndicatorKind::ALL {
            assert_eq!(kind.compute(&bars).len(), bars.len(), "{kind}");
        }
    }

    #[test]
    fn every_indicator_has_defined_tail_on_long_input() {
        let bars = sample_bars(120);
        for kind in IndicatorKind::ALL {
            let series = kind.compute(&bars);
            assert!(
                !series[119].is_nan(),
                "{kind} still undefined at the last bar"
            );
        }
    }

    #[test]
    fn macd_and_histogram_are_distinct_series() {
        let bars = sample_bars(80);
        let line = IndicatorKind::Macd.compute(&bars);
        let histogram = IndicatorKind::MacdHistogram.compute(&bars);
        assert_ne!(line, histogram);
    }
}
