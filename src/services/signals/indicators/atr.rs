//! Average True Range (ATR) indicator.

use crate::services::signals::indicators::rolling_mean;
use crate::services::signals::Indicator;
use crate::types::Bar;

/// ATR (Average True Range) indicator.
///
/// Simple rolling mean of true ranges:
/// TR = max(High-Low, |High-PrevClose|, |Low-PrevClose|)
///
/// The first bar has no previous close and uses High-Low alone.
pub struct Atr {
    period: usize,
}

impl Default for Atr {
    fn default() -> Self {
        Self { period: 14 }
    }
}

impl Atr {
    pub fn new(period: usize) -> Self {
        Self { period }
    }

    /// True range for every bar.
    pub fn true_ranges(bars: &[Bar]) -> Vec<f64> {
        bars.iter()
            .enumerate()
            .map(|(i, bar)| {
                let prev_close = i.checked_sub(1).map(|p| bars[p].close);
                bar.true_range(prev_close)
            })
            .collect()
    }
}

impl Indicator for Atr {
    fn id(&self) -> &str {
        "atr"
    }

    fn name(&self) -> &str {
        "ATR (14)"
    }

    fn min_periods(&self) -> usize {
        self.period
    }

    fn compute(&self, bars: &[Bar]) -> Vec<Option<f64>> {
        let ranges: Vec<Option<f64>> = Self::true_ranges(bars).into_iter().map(Some).collect();
        rolling_mean(&ranges, self.period)
    }
}
