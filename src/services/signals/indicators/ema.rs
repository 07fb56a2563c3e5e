//! Exponential Moving Average (EMA) indicator.

use crate::services::signals::Indicator;
use crate::types::Bar;

/// EMA (Exponential Moving Average) indicator.
///
/// Seeded with the first close, then smoothed recursively:
/// `ema[i] = ema[i-1] + 2/(n+1) * (close[i] - ema[i-1])`.
/// Defined from the first bar onward.
pub struct Ema {
    period: usize,
    id: String,
    name: String,
}

impl Ema {
    pub fn new(period: usize) -> Self {
        Self {
            period,
            id: format!("ema{period}"),
            name: format!("EMA ({period})"),
        }
    }

    pub fn period(&self) -> usize {
        self.period
    }
}

/// EMA of a series whose leading values may be undefined.
///
/// The first defined value is the seed. An undefined value after the seed
/// leaves the running average unchanged and is itself reported undefined.
pub fn ema_series(values: &[Option<f64>], period: usize) -> Vec<Option<f64>> {
    let multiplier = 2.0 / (period as f64 + 1.0);
    let mut prev: Option<f64> = None;

    values
        .iter()
        .map(|value| {
            let x = (*value)?;
            let next = match prev {
                Some(ema) => ema + multiplier * (x - ema),
                None => x,
            };
            prev = Some(next);
            Some(next)
        })
        .collect()
}

impl Indicator for Ema {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn min_periods(&self) -> usize {
        1
    }

    fn compute(&self, bars: &[Bar]) -> Vec<Option<f64>> {
        let closes: Vec<Option<f64>> = bars.iter().map(|b| Some(b.close)).collect();
        ema_series(&closes, self.period)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::signals::indicators::make_bars;

    #[test]
    fn test_ema_id_and_name() {
        let ema = Ema::new(5);
        assert_eq!(ema.id(), "ema5");
        assert_eq!(ema.name(), "EMA (5)");
        assert_eq!(ema.period(), 5);
        assert_eq!(ema.min_periods(), 1);
    }

    #[test]
    fn test_ema_seed_is_first_close() {
        let bars = make_bars(&[1.10, 1.11, 1.09, 1.12]);
        let out = Ema::new(20).compute(&bars);
        assert_eq!(out[0], Some(1.10));
    }

    #[test]
    fn test_ema_recursion() {
        // period 3 -> multiplier 0.5
        let out = ema_series(&[Some(2.0), Some(4.0), Some(8.0)], 3);
        assert_eq!(out, vec![Some(2.0), Some(3.0), Some(5.5)]);
    }

    #[test]
    fn test_ema_same_length_as_input() {
        let bars = make_bars(&[1.0; 37]);
        assert_eq!(Ema::new(5).compute(&bars).len(), 37);
    }

    #[test]
    fn test_ema_leading_undefined() {
        let out = ema_series(&[None, None, Some(4.0), Some(6.0)], 3);
        assert_eq!(out, vec![None, None, Some(4.0), Some(5.0)]);
    }

    #[test]
    fn test_ema_gap_keeps_average() {
        let out = ema_series(&[Some(2.0), None, Some(4.0)], 3);
        assert_eq!(out, vec![Some(2.0), None, Some(3.0)]);
    }

    #[test]
    fn test_fast_ema_tracks_uptrend_closer() {
        let closes: Vec<f64> = (0..40).map(|i| 1.0 + i as f64 * 0.001).collect();
        let bars = make_bars(&closes);
        let fast = Ema::new(5).compute(&bars);
        let slow = Ema::new(20).compute(&bars);
        assert!(fast[39].unwrap() > slow[39].unwrap());
    }

    #[test]
    fn test_ema_empty() {
        assert!(Ema::new(5).compute(&[]).is_empty());
    }
}
