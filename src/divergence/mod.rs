// =============================================================================
// Divergence Classification Module
// =============================================================================
//
// Compares price pivots against an indicator's values at those pivots and
// emits typed divergence records:
// - Closed catalog of the ten supported indicators (tagged dispatch)
// - Pivot-pair detectors for the four divergence kinds
// - Scan driver over a caller-selected indicator set
// - Aggregate summary of a scan's directional bias

pub mod catalog;
pub mod detect;
pub mod scan;
pub mod summary;
pub mod types;

pub use catalog::IndicatorKind;
pub use scan::{scan, DivergenceScan, ScanParams};
pub use summary::{summarize, Bias, ScanSummary};
pub use types::{Divergence, DivergenceKind, ScanMode};
