// =============================================================================
// Divergence record types
// =============================================================================

use serde::{Deserialize, Serialize};

use super::catalog::IndicatorKind;

/// The four divergence kinds.
///
/// Regular kinds are reversal signals (price and indicator move oppositely
/// at two comparable extrema); hidden kinds are continuation signals (same
/// direction, different relative magnitude).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DivergenceKind {
    PositiveRegular,
    NegativeRegular,
    PositiveHidden,
    NegativeHidden,
}

impl DivergenceKind {
    /// All four kinds, in classification order.
    pub const ALL: [DivergenceKind; 4] = [
        DivergenceKind::PositiveRegular,
        DivergenceKind::NegativeRegular,
        DivergenceKind::PositiveHidden,
        DivergenceKind::NegativeHidden,
    ];

    /// Positive kinds read off price lows; negative kinds off price highs.
    pub fn is_bullish(&self) -> bool {
        matches!(self, Self::PositiveRegular | Self::PositiveHidden)
    }

    /// Hidden kinds signal continuation rather than reversal.
    pub fn is_hidden(&self) -> bool {
        matches!(self, Self::PositiveHidden | Self::NegativeHidden)
    }
}

impl std::fmt::Display for DivergenceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PositiveRegular => write!(f, "positive_regular"),
            Self::NegativeRegular => write!(f, "negative_regular"),
            Self::PositiveHidden => write!(f, "positive_hidden"),
            Self::NegativeHidden => write!(f, "negative_hidden"),
        }
    }
}

/// Which detector family a scan runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanMode {
    Regular,
    Hidden,
    Both,
}

impl Default for ScanMode {
    fn default() -> Self {
        Self::Both
    }
}

impl ScanMode {
    /// Whether this mode runs the detector for `kind`.
    pub fn includes(&self, kind: DivergenceKind) -> bool {
        match self {
            Self::Regular => !kind.is_hidden(),
            Self::Hidden => kind.is_hidden(),
            Self::Both => true,
        }
    }
}

impl std::fmt::Display for ScanMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Regular => write!(f, "regular"),
            Self::Hidden => write!(f, "hidden"),
            Self::Both => write!(f, "both"),
        }
    }
}

/// A classified divergence between two price pivots and the indicator
/// values at those pivots. Created only by the scan driver; immutable
/// after emission. `start_*` fields belong to the earlier pivot, `end_*`
/// to the more recent one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Divergence {
    pub indicator: IndicatorKind,
    pub kind: DivergenceKind,
    pub bar_distance: usize,
    pub start_price: f64,
    pub end_price: f64,
    pub start_indicator_value: f64,
    pub end_indicator_value: f64,
}
