// =============================================================================
// Aurora TA — pure technical-analysis core
// =============================================================================
//
// Turns an ordered OHLCV bar sequence into derived indicator series,
// confirmed pivots, classified divergences, and a composite band-filter
// oscillator. The crate is purely functional: no I/O, no shared state, no
// suspension points — the surrounding shell (exchange client, rate
// limiter, API surface, notifier) supplies bars and consumes results.
//
// Public entry points:
//   - `divergence::scan`    — typed divergence records across a requested
//                             indicator set, plus the echoed checked list
//   - `oscillator::compute` — trailing (timestamp, value) samples of the
//                             hybrid trend/money-flow oscillator
//
// Everything below them is the supporting library: moving averages,
// indicators, the Heikin-Ashi transform, and the pivot detector.
// =============================================================================

pub mod divergence;
pub mod error;
pub mod heikin_ashi;
pub mod indicators;
pub mod ma;
pub mod oscillator;
pub mod pivots;
pub mod types;

pub use error::{EngineError, Result};
pub use types::{Bar, OscillatorPoint};
