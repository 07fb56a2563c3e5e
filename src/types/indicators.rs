use crate::types::Bar;

/// Bars with index-aligned indicator series.
///
/// Every series has one element per bar. `None` marks positions where a
/// rolling or recursive window has not accumulated enough history.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IndicatorFrame {
    pub bars: Vec<Bar>,
    pub ema5: Vec<Option<f64>>,
    pub ema20: Vec<Option<f64>>,
    pub rsi: Vec<Option<f64>>,
    pub macd: Vec<Option<f64>>,
    pub macd_signal: Vec<Option<f64>>,
    pub atr: Vec<Option<f64>>,
}

/// Latest value of each indicator series.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct IndicatorSnapshot {
    pub ema5: Option<f64>,
    pub ema20: Option<f64>,
    pub rsi: Option<f64>,
    pub macd: Option<f64>,
    pub macd_signal: Option<f64>,
    pub atr: Option<f64>,
}

fn last(series: &[Option<f64>]) -> Option<f64> {
    series.last().copied().flatten()
}

fn tail<T: Clone>(values: &[T], n: usize) -> Vec<T> {
    values[values.len().saturating_sub(n)..].to_vec()
}

impl IndicatorFrame {
    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    /// Values at the most recent bar.
    pub fn latest(&self) -> IndicatorSnapshot {
        IndicatorSnapshot {
            ema5: last(&self.ema5),
            ema20: last(&self.ema20),
            rsi: last(&self.rsi),
            macd: last(&self.macd),
            macd_signal: last(&self.macd_signal),
            atr: last(&self.atr),
        }
    }

    /// Trailing `n` points of every series, still index-aligned.
    pub fn tail(&self, n: usize) -> IndicatorFrame {
        IndicatorFrame {
            bars: tail(&self.bars, n),
            ema5: tail(&self.ema5, n),
            ema20: tail(&self.ema20, n),
            rsi: tail(&self.rsi, n),
            macd: tail(&self.macd, n),
            macd_signal: tail(&self.macd_signal, n),
            atr: tail(&self.atr, n),
        }
    }
}
