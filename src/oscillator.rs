// =============================================================================
// Band-Filter Oscillator
// =============================================================================
//
// The engine's second public entry point: a length-preserving pipeline that
// blends a WaveTrend-style trend term with a money-flow term into a single
// bounded oscillator series.
//
// Stages:
//   1. Source = Heikin-Ashi typical price (default) or raw typical price
//   2. Trend term:  esa = EMA(source, len)
//                   dev = EMA(|source - esa|, len)
//                   ci  = (source - esa) / (0.015 * dev)_guarded
//                   wt1 = EMA(ci, avg_len);  wt2 = ALMA(wt1, smooth_len)
//   3. Flow term:   (MFI(source, volume, hybrid_mfi_len) - 50) * 1.5
//   4. Hybrid raw = weight * wt2 + (1 - weight) * flow
//   5. Optional sigmoid normalization of raw * mult
//   6. Final smoothing by the configured moving-average variant
//   7. Clamp to [osc_min, osc_max]
//   8. Optional step quantization, then re-clamp
//
// At a true zero deviation the trend term's numerator vanishes with its
// denominator, so the guarded quotient is exactly 0.
//
// Callers request the trailing `sample_count` outputs; the engine computes
// over a longer warm-up-inclusive trailing window (up to 500 extra bars,
// 1000 total) and slices, bounding both warm-up bias and compute cost.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{EngineError, Result};
use crate::heikin_ashi;
use crate::indicators::{guard_denom, mfi::mfi};
use crate::ma::{alma, ema::ema, MaType};
use crate::types::{self, Bar, OscillatorPoint};

/// Extra warm-up bars computed ahead of the requested sample window.
const WARMUP_CAP: usize = 500;
/// Hard cap on the total computed window.
const WINDOW_CAP: usize = 1000;

// =============================================================================
// Default-value helpers (required by serde `default = "..."` attribute)
// =============================================================================

fn default_len() -> usize {
    10
}

fn default_avg_len() -> usize {
    21
}

fn default_smooth_len() -> usize {
    4
}

fn default_mult() -> f64 {
    1.0
}

fn default_hybrid_wt_weight() -> f64 {
    0.6
}

fn default_hybrid_mfi_len() -> usize {
    14
}

fn default_true() -> bool {
    true
}

fn default_laguerre_gamma() -> f64 {
    0.7
}

fn default_sigmoid_gain() -> f64 {
    4.0
}

fn default_osc_min() -> f64 {
    -100.0
}

fn default_osc_max() -> f64 {
    100.0
}

fn default_step_size() -> f64 {
    5.0
}

// =============================================================================
// Configuration
// =============================================================================

/// How a quantized value snaps to the step grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StepQuantMethod {
    Floor,
    Round,
}

impl Default for StepQuantMethod {
    fn default() -> Self {
        Self::Round
    }
}

impl std::fmt::Display for StepQuantMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Floor => write!(f, "Floor"),
            Self::Round => write!(f, "Round"),
        }
    }
}

/// Full configuration surface of the band-filter pipeline.
///
/// Every field has a serde default so the surrounding shell can hot-load
/// partial JSON without breaking.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OscillatorConfig {
    /// Channel length for the trend term's EMAs.
    #[serde(default = "default_len")]
    pub len: usize,

    /// Averaging length for the first trend smoothing pass.
    #[serde(default = "default_avg_len")]
    pub avg_len: usize,

    /// Window for the ALMA pass and the final smoothing stage.
    #[serde(default = "default_smooth_len")]
    pub smooth_len: usize,

    /// Output scale applied before normalization.
    #[serde(default = "default_mult")]
    pub mult: f64,

    /// Trend-vs-flow blend weight in [0, 1]; 1 is pure trend.
    #[serde(default = "default_hybrid_wt_weight")]
    pub hybrid_wt_weight: f64,

    /// MFI length for the flow term.
    #[serde(default = "default_hybrid_mfi_len")]
    pub hybrid_mfi_len: usize,

    /// Source selector: Heikin-Ashi typical price vs raw typical price.
    #[serde(default = "default_true")]
    pub use_heikin_ashi: bool,

    /// Moving-average variant for the final smoothing stage.
    #[serde(default)]
    pub ma_type: MaType,

    /// Damping factor when `ma_type` is Laguerre.
    #[serde(default = "default_laguerre_gamma")]
    pub laguerre_gamma: f64,

    /// Apply sigmoid normalization before smoothing.
    #[serde(default)]
    pub use_sigmoid: bool,

    /// Sigmoid steepness.
    #[serde(default = "default_sigmoid_gain")]
    pub sigmoid_gain: f64,

    /// Lower clamp bound.
    #[serde(default = "default_osc_min")]
    pub osc_min: f64,

    /// Upper clamp bound.
    #[serde(default = "default_osc_max")]
    pub osc_max: f64,

    /// Discretize the smoothed output onto a step grid.
    #[serde(default)]
    pub enable_step_quantization: bool,

    /// Grid spacing for step quantization.
    #[serde(default = "default_step_size")]
    pub step_size: f64,

    /// Snap method for step quantization.
    #[serde(default)]
    pub step_quant_method: StepQuantMethod,
}

impl Default for OscillatorConfig {
    fn default() -> Self {
        Self {
            len: default_len(),
            avg_len: default_avg_len(),
            smooth_len: default_smooth_len(),
            mult: default_mult(),
            hybrid_wt_weight: default_hybrid_wt_weight(),
            hybrid_mfi_len: default_hybrid_mfi_len(),
            use_heikin_ashi: true,
            ma_type: MaType::default(),
            laguerre_gamma: default_laguerre_gamma(),
            use_sigmoid: false,
            sigmoid_gain: default_sigmoid_gain(),
            osc_min: default_osc_min(),
            osc_max: default_osc_max(),
            enable_step_quantization: false,
            step_size: default_step_size(),
            step_quant_method: StepQuantMethod::Round,
        }
    }
}

impl OscillatorConfig {
    /// Validate the configuration before any computation.
    pub fn validate(&self) -> Result<()> {
        if self.len == 0 || self.avg_len == 0 || self.smooth_len == 0 || self.hybrid_mfi_len == 0 {
            return Err(EngineError::invalid_input(
                "len, avg_len, smooth_len and hybrid_mfi_len must all be >= 1",
            ));
        }
        if !(0.0..=1.0).contains(&self.hybrid_wt_weight) {
            return Err(EngineError::invalid_input(
                "hybrid_wt_weight must lie in [0, 1]",
            ));
        }
        if !self.mult.is_finite() || !self.sigmoid_gain.is_finite() {
            return Err(EngineError::invalid_input(
                "mult and sigmoid_gain must be finite",
            ));
        }
        if !(0.0..=1.0).contains(&self.laguerre_gamma) {
            return Err(EngineError::invalid_input(
                "laguerre_gamma must lie in [0, 1]",
            ));
        }
        if !self.osc_min.is_finite() || !self.osc_max.is_finite() || self.osc_min > self.osc_max {
            return Err(EngineError::invalid_input(
                "osc_min/osc_max must be finite with osc_min <= osc_max",
            ));
        }
        if self.enable_step_quantization && !(self.step_size > 0.0) {
            return Err(EngineError::invalid_input(
                "step_size must be > 0 when step quantization is enabled",
            ));
        }
        Ok(())
    }
}

// =============================================================================
// Pipeline
// =============================================================================

/// Compute the oscillator over `bars` and return the trailing
/// `sample_count` points, each aligned to its source bar's timestamp.
///
/// Fails with [`EngineError::InvalidInput`] on an empty or non-finite bar
/// sequence, a degenerate configuration, or `sample_count == 0`.
pub fn compute(
    bars: &[Bar],
    config: &OscillatorConfig,
    sample_count: usize,
) -> Result<Vec<OscillatorPoint>> {
    types::validate_bars(bars)?;
    config.validate()?;
    if sample_count == 0 {
        return Err(EngineError::invalid_input("sample_count must be >= 1"));
    }

    let extra = WARMUP_CAP.min(WINDOW_CAP.saturating_sub(sample_count));
    let window = bars
        .len()
        .min(WINDOW_CAP.min(sample_count.saturating_add(extra)));
    let bars = &bars[bars.len() - window..];

    let series = compute_series(bars, config);

    let take = sample_count.min(window);
    let points: Vec<OscillatorPoint> = bars[window - take..]
        .iter()
        .zip(series[window - take..].iter())
        .map(|(bar, &value)| OscillatorPoint {
            timestamp: bar.timestamp,
            value,
        })
        .collect();

    debug!(
        window,
        returned = points.len(),
        ma_type = %config.ma_type,
        heikin_ashi = config.use_heikin_ashi,
        "oscillator computed"
    );

    Ok(points)
}

/// Run the full pipeline over `bars`. Length-preserving.
fn compute_series(bars: &[Bar], config: &OscillatorConfig) -> Vec<f64> {
    let n = bars.len();

    // --- Stage 1: source selection ------------------------------------------
    let source = if config.use_heikin_ashi {
        heikin_ashi::transform(bars).typical
    } else {
        types::typical_prices(bars)
    };
    let volumes = types::volumes(bars);

    // --- Stage 2: trend term -------------------------------------------------
    let esa = ema(&source, config.len);
    let abs_dev: Vec<f64> = source
        .iter()
        .zip(esa.iter())
        .map(|(&s, &e)| (s - e).abs())
        .collect();
    let dev = ema(&abs_dev, config.len);
    let ci: Vec<f64> = source
        .iter()
        .zip(esa.iter())
        .zip(dev.iter())
        .map(|((&s, &e), &d)| {
            if d.is_nan() {
                f64::NAN
            } else {
                (s - e) / guard_denom(0.015 * d)
            }
        })
        .collect();
    let wt1 = ema(&ci, config.avg_len);
    let wt2 = alma::alma(
        &wt1,
        config.smooth_len,
        alma::DEFAULT_OFFSET,
        alma::DEFAULT_SIGMA,
    );

    // --- Stage 3: flow term --------------------------------------------------
    let flow: Vec<f64> = mfi(&source, &volumes, config.hybrid_mfi_len)
        .iter()
        .map(|&v| (v - 50.0) * 1.5)
        .collect();

    // --- Stages 4-5: hybrid blend and normalization --------------------------
    let weight = config.hybrid_wt_weight;
    let mut blended = Vec::with_capacity(n);
    for i in 0..n {
        let raw = weight * wt2[i] + (1.0 - weight) * flow[i];
        let scaled = raw * config.mult;
        blended.push(if config.use_sigmoid {
            sigmoid_normalize(scaled, config.sigmoid_gain)
        } else {
            scaled
        });
    }

    // --- Stage 6: final smoothing --------------------------------------------
    let smoothed = config
        .ma_type
        .compute(&blended, config.smooth_len, config.laguerre_gamma);

    // --- Stages 7-8: clamp and quantize --------------------------------------
    smoothed
        .iter()
        .map(|&v| {
            let clamped = v.clamp(config.osc_min, config.osc_max);
            if config.enable_step_quantization {
                quantize_step(clamped, config.step_size, config.step_quant_method)
                    .clamp(config.osc_min, config.osc_max)
            } else {
                clamped
            }
        })
        .collect()
}

/// Squash `x` through a symmetric sigmoid spanning roughly [-100, 100].
fn sigmoid_normalize(x: f64, gain: f64) -> f64 {
    let v = x / 100.0;
    let sig = 2.0 / (1.0 + (-gain * v).exp()) - 1.0;
    sig * 100.0
}

/// Snap `value` onto a grid of `step`-sized increments, preserving sign.
fn quantize_step(value: f64, step: f64, method: StepQuantMethod) -> f64 {
    let scaled = value / step;
    let steps = match method {
        StepQuantMethod::Round => scaled.abs().round(),
        StepQuantMethod::Floor => scaled.abs().floor(),
    };
    scaled.signum() * steps * step
}
