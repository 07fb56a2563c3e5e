//! MACD (Moving Average Convergence Divergence) indicator.

use crate::services::signals::indicators::ema_series;
use crate::services::signals::Indicator;
use crate::types::Bar;

/// MACD indicator.
///
/// - MACD Line = EMA(12) - EMA(26), both seeded with the first close
/// - Signal Line = EMA(9) of the MACD line, seeded with its first value
pub struct Macd {
    fast_period: usize,
    slow_period: usize,
    signal_period: usize,
}

impl Default for Macd {
    fn default() -> Self {
        Self {
            fast_period: 12,
            slow_period: 26,
            signal_period: 9,
        }
    }
}

impl Macd {
    pub fn new(fast_period: usize, slow_period: usize, signal_period: usize) -> Self {
        Self {
            fast_period,
            slow_period,
            signal_period,
        }
    }

    /// MACD line and signal line, index-aligned with `bars`.
    pub fn compute_lines(&self, bars: &[Bar]) -> (Vec<Option<f64>>, Vec<Option<f64>>) {
        let closes: Vec<Option<f64>> = bars.iter().map(|b| Some(b.close)).collect();

        let fast_ema = ema_series(&closes, self.fast_period);
        let slow_ema = ema_series(&closes, self.slow_period);

        let macd_line: Vec<Option<f64>> = fast_ema
            .iter()
            .zip(slow_ema.iter())
            .map(|(f, s)| Some((*f)? - (*s)?))
            .collect();

        let signal_line = ema_series(&macd_line, self.signal_period);

        (macd_line, signal_line)
    }
}

impl Indicator for Macd {
    fn id(&self) -> &str {
        "macd"
    }

    fn name(&self) -> &str {
        "MACD"
    }

    fn min_periods(&self) -> usize {
        1
    }

    fn compute(&self, bars: &[Bar]) -> Vec<Option<f64>> {
        self.compute_lines(bars).0
    }
}
