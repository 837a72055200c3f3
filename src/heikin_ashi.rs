// =============================================================================
// Heikin-Ashi Transform
// =============================================================================
//
// Sequential smoothing of OHLC into synthetic candles. Strictly recursive:
// every synthetic bar depends on the *previous synthetic* bar, never the
// previous raw bar, so the transform carries state and cannot be
// vectorised.
//
//   ha_close[i] = (open[i] + high[i] + low[i] + close[i]) / 4
//   ha_open[0]  = (open[0] + close[0]) / 2
//   ha_open[i]  = (ha_open[i-1] + ha_close[i-1]) / 2
//   ha_high[i]  = max(high[i], ha_open[i], ha_close[i])
//   ha_low[i]   = min(low[i],  ha_open[i], ha_close[i])
//   typical[i]  = (ha_high[i] + ha_low[i] + ha_close[i]) / 3

use crate::types::Bar;

/// The synthetic candle series produced by the transform, aligned with the
/// input bars. `typical` is the smoothed typical price consumed by the
/// band-filter oscillator.
#[derive(Debug, Clone, PartialEq)]
pub struct HeikinAshiSeries {
    pub open: Vec<f64>,
    pub high: Vec<f64>,
    pub low: Vec<f64>,
    pub close: Vec<f64>,
    pub typical: Vec<f64>,
}

/// Transform raw bars into Heikin-Ashi candles.
///
/// Length-preserving; an empty input yields empty series.
pub fn transform(bars: &[Bar]) -> HeikinAshiSeries {
    let n = bars.len();
    let mut open = Vec::with_capacity(n);
    let mut high = Vec::with_capacity(n);
    let mut low = Vec::with_capacity(n);
    let mut close = Vec::with_capacity(n);
    let mut typical = Vec::with_capacity(n);

    for (i, bar) in bars.iter().enumerate() {
        let ha_close = (bar.open + bar.high + bar.low + bar.close) / 4.0;
        let ha_open = if i == 0 {
            (bar.open + bar.close) / 2.0
        } else {
            (open[i - 1] + close[i - 1]) / 2.0
        };
        let ha_high = bar.high.max(ha_open).max(ha_close);
        let ha_low = bar.low.min(ha_open).min(ha_close);

        open.push(ha_open);
        high.push(ha_high);
        low.push(ha_low);
        close.push(ha_close);
        typical.push((ha_high + ha_low + ha_close) / 3.0);
    }

    HeikinAshiSeries {
        open,
        high,
        low,
        close,
        typical,
    }
}
