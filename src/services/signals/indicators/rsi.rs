//! Relative Strength Index (RSI) indicator.

use crate::services::signals::indicators::rolling_mean;
use crate::services::signals::Indicator;
use crate::types::Bar;

/// RSI (Relative Strength Index) indicator.
///
/// Compares the rolling mean of gains to the rolling mean of losses over
/// the trailing `period` close-to-close deltas. Values range from 0-100.
/// Undefined until `period` deltas exist.
pub struct Rsi {
    period: usize,
}

impl Default for Rsi {
    fn default() -> Self {
        Self { period: 14 }
    }
}

impl Rsi {
    pub fn new(period: usize) -> Self {
        Self { period }
    }
}

/// RSI from mean gain and mean loss.
///
/// A zero mean loss makes RS infinite; that reads as 100.
pub fn rsi_from_means(mean_gain: f64, mean_loss: f64) -> f64 {
    if mean_loss == 0.0 {
        return 100.0;
    }

    let rs = mean_gain / mean_loss;
    100.0 - (100.0 / (1.0 + rs))
}

impl Indicator for Rsi {
    fn id(&self) -> &str {
        "rsi"
    }

    fn name(&self) -> &str {
        "RSI (14)"
    }

    fn min_periods(&self) -> usize {
        self.period + 1
    }

    fn compute(&self, bars: &[Bar]) -> Vec<Option<f64>> {
        let mut gains = Vec::with_capacity(bars.len());
        let mut losses = Vec::with_capacity(bars.len());

        for i in 0..bars.len() {
            if i == 0 {
                gains.push(None);
                losses.push(None);
                continue;
            }
            let change = bars[i].close - bars[i - 1].close;
            gains.push(Some(change.max(0.0)));
            losses.push(Some((-change).max(0.0)));
        }

        let mean_gains = rolling_mean(&gains, self.period);
        let mean_losses = rolling_mean(&losses, self.period);

        mean_gains
            .into_iter()
            .zip(mean_losses)
            .map(|(gain, loss)| Some(rsi_from_means(gain?, loss?)))
            .collect()
    }
}
