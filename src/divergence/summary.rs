// =============================================================================
// Scan summary — directional aggregation of divergence records
// =============================================================================
//
// Collapses one scan's records into per-direction counts and an overall
// bias label so the surrounding shell can gate decisions on a single value
// instead of re-walking the record list.

use serde::{Deserialize, Serialize};

use super::scan::DivergenceScan;

/// Overall directional bias of a scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Bias {
    Bullish,
    Bearish,
    Neutral,
}

impl std::fmt::Display for Bias {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bullish => write!(f, "BULLISH"),
            Self::Bearish => write!(f, "BEARISH"),
            Self::Neutral => write!(f, "NEUTRAL"),
        }
    }
}

/// Aggregate view of one divergence scan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanSummary {
    pub bullish_count: usize,
    pub bearish_count: usize,
    pub regular_count: usize,
    pub hidden_count: usize,
    pub bias: Bias,
}

/// Summarise a scan's records.
///
/// The bias is the majority direction across all emitted records; equal
/// counts (including an empty scan) are neutral.
pub fn summarize(scan: &DivergenceScan) -> ScanSummary {
    let mut bullish_count = 0;
    let mut bearish_count = 0;
    let mut regular_count = 0;
    let mut hidden_count = 0;

    for divergence in &scan.divergences {
        if divergence.kind.is_bullish() {
            bullish_count += 1;
        } else {
            bearish_count += 1;
        }
        if divergence.kind.is_hidden() {
            hidden_count += 1;
        } else {
            regular_count += 1;
        }
    }

    let bias = if bullish_count > bearish_count {
        Bias::Bullish
    } else if bearish_count > bullish_count {
        Bias::Bearish
    } else {
        Bias::Neutral
    };

    ScanSummary {
        bullish_count,
        bearish_count,
        regular_count,
        hidden_count,
        bias,
    }
}
