// =============================================================================
// Moving-Average Library
// =============================================================================
//
// Primitive rolling and recursive averages shared by the indicator library
// and the band-filter oscillator:
// - SMA     (rolling arithmetic mean)
// - EMA     (exponential, seeded at the first value)
// - WMA     (linearly weighted, most recent weight = length)
// - HMA     (Hull: WMA of a de-lagged WMA pair)
// - ALMA    (Gaussian-weighted window, Arnaud Legoux)
// - Laguerre (4-stage IIR filter)
//
// Every function is length-preserving: the output has one value per input
// index, with `f64::NAN` marking warm-up positions where the window is not
// yet full. Windowed variants accumulate strictly left-to-right in index
// order so repeated runs are bit-identical; a window containing a NaN
// yields NaN. The recursive variants (EMA, Laguerre) seed at the first
// defined value and skip interior NaNs without touching filter state.

pub mod alma;
pub mod ema;
pub mod hma;
pub mod laguerre;
pub mod sma;
pub mod wma;

use serde::{Deserialize, Serialize};

/// Closed set of moving-average variants.
///
/// Callers select a variant by tag and dispatch through [`MaType::compute`]
/// without branching on concrete type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MaType {
    Sma,
    Ema,
    Wma,
    Hma,
    Alma,
    Laguerre,
}

impl Default for MaType {
    fn default() -> Self {
        Self::Ema
    }
}

impl std::fmt::Display for MaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sma => write!(f, "SMA"),
            Self::Ema => write!(f, "EMA"),
            Self::Wma => write!(f, "WMA"),
            Self::Hma => write!(f, "HMA"),
            Self::Alma => write!(f, "ALMA"),
            Self::Laguerre => write!(f, "Laguerre"),
        }
    }
}

impl MaType {
    /// Compute the selected average over `series`.
    ///
    /// `length` is the window length for every variant except Laguerre,
    /// which is parameterised by `laguerre_gamma` alone. ALMA uses its
    /// conventional shape parameters (offset 0.85, sigma 6).
    pub fn compute(&self, series: &[f64], length: usize, laguerre_gamma: f64) -> Vec<f64> {
        match self {
            Self::Sma => sma::sma(series, length),
            Self::Ema => ema::ema(series, length),
            Self::Wma => wma::wma(series, length),
            Self::Hma => hma::hma(series, length),
            Self::Alma => alma::alma(series, length, alma::DEFAULT_OFFSET, alma::DEFAULT_SIGMA),
            Self::Laguerre => laguerre::laguerre(series, laguerre_gamma),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    /// NaN-aware series equality (warm-up positions compare equal).
    fn assert_series_eq(a: &[f64], b: &[f64]) {
        assert_eq!(a.len(), b.len());
        for (x, y) in a.iter().zip(b.iter()) {
            assert!(
                (x.is_nan() && y.is_nan()) || x == y,
                "series diverge: {x} vs {y}"
            );
        }
    }

    #[test]
    fn dispatch_matches_direct_calls() {
        let data: Vec<f64> = (1..=20).map(|x| x as f64).collect();

        assert_series_eq(&MaType::Sma.compute(&data, 5, 0.7), &sma::sma(&data, 5));
        assert_series_eq(&MaType::Ema.compute(&data, 5, 0.7), &ema::ema(&data, 5));
        assert_series_eq(&MaType::Wma.compute(&data, 5, 0.7), &wma::wma(&data, 5));
        assert_series_eq(&MaType::Hma.compute(&data, 9, 0.7), &hma::hma(&data, 9));
        assert_series_eq(
            &MaType::Alma.compute(&data, 9, 0.7),
            &alma::alma(&data, 9, alma::DEFAULT_OFFSET, alma::DEFAULT_SIGMA),
        );
        assert_series_eq(
            &MaType::Laguerre.compute(&data, 5, 0.7),
            &laguerre::laguerre(&data, 0.7),
        );
    }

    #[test]
    fn every_variant_preserves_length() {
        let data: Vec<f64> = (0..40).map(|x| (x as f64 * 0.3).sin() * 10.0).collect();
        for ma in [
            MaType::Sma,
            MaType::Ema,
            MaType::Wma,
            MaType::Hma,
            MaType::Alma,
            MaType::Laguerre,
        ] {
            assert_eq!(ma.compute(&data, 7, 0.5).len(), data.len(), "{ma}");
        }
    }

    #[test]
    fn display_names() {
        assert_eq!(MaType::Sma.to_string(), "SMA");
        assert_eq!(MaType::Laguerre.to_string(), "Laguerre");
    }

    #[test]
    fn serde_roundtrip() {
        for ma in [MaType::Sma, MaType::Hma, MaType::Laguerre] {
            let json = serde_json::to_string(&ma).unwrap();
            let back: MaType = serde_json::from_str(&json).unwrap();
            assert_eq!(ma, back);
        }
    }
}
