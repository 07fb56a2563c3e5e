//! Technical indicator implementations.

pub mod atr;
pub mod ema;
pub mod macd;
pub mod rsi;
pub mod sma;

pub use atr::Atr;
pub use ema::{ema_series, Ema};
pub use macd::Macd;
pub use rsi::{rsi_from_means, Rsi};
pub use sma::rolling_mean;

/// Synthetic one-minute bars from close prices for tests.
///
/// open = previous close (or close for the first bar),
/// high/low = max/min(open, close) -/+ 0.0005.
#[cfg(test)]
pub fn make_bars(closes: &[f64]) -> Vec<crate::types::Bar> {
    use crate::types::Bar;
    use chrono::{Duration, TimeZone, Utc};

    let start = Utc.with_ymd_and_hms(2024, 1, 2, 9, 0, 0).unwrap();
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            let open = if i == 0 { close } else { closes[i - 1] };
            Bar::new(
                start + Duration::minutes(i as i64),
                open,
                open.max(close) + 0.0005,
                open.min(close) - 0.0005,
                close,
            )
        })
        .collect()
}
