//! Indicator engine: bars in, aligned indicator frame out.

use crate::services::signals::indicators::{Atr, Ema, Macd, Rsi};
use crate::services::signals::Indicator;
use crate::types::{Bar, IndicatorFrame};

/// Computes the fixed indicator set used for classification.
pub struct IndicatorEngine {
    ema_fast: Ema,
    ema_slow: Ema,
    rsi: Rsi,
    macd: Macd,
    atr: Atr,
}

impl Default for IndicatorEngine {
    fn default() -> Self {
        Self {
            ema_fast: Ema::new(5),
            ema_slow: Ema::new(20),
            rsi: Rsi::default(),
            macd: Macd::default(),
            atr: Atr::default(),
        }
    }
}

impl IndicatorEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive every series for `bars`.
    ///
    /// Short input is not an error; positions without enough history are
    /// left undefined and the caller decides whether the frame is usable.
    pub fn compute(&self, bars: &[Bar]) -> IndicatorFrame {
        let (macd, macd_signal) = self.macd.compute_lines(bars);

        IndicatorFrame {
            bars: bars.to_vec(),
            ema5: self.ema_fast.compute(bars),
            ema20: self.ema_slow.compute(bars),
            rsi: self.rsi.compute(bars),
            macd,
            macd_signal,
            atr: self.atr.compute(bars),
        }
    }
}

/// Compute the standard indicator frame.
pub fn compute_indicators(bars: &[Bar]) -> IndicatorFrame {
    IndicatorEngine::default().compute(bars)
}
