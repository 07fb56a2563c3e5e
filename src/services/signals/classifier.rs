//! Threshold classification of the latest indicator values.

use crate::types::{IndicatorSnapshot, Signal};

/// RSI midline separating bullish from bearish momentum.
pub const RSI_MIDLINE: f64 = 50.0;

/// Classify the latest indicator values.
///
/// - BUY: EMA5 > EMA20, RSI > 50, MACD > signal, ATR > 0
/// - SELL: EMA5 < EMA20, RSI < 50, MACD < signal, ATR > 0
/// - NONE: anything else, including any undefined input
pub fn classify(snapshot: &IndicatorSnapshot) -> Signal {
    let (Some(ema5), Some(ema20), Some(rsi), Some(macd), Some(macd_signal), Some(atr)) = (
        snapshot.ema5,
        snapshot.ema20,
        snapshot.rsi,
        snapshot.macd,
        snapshot.macd_signal,
        snapshot.atr,
    ) else {
        return Signal::None;
    };

    if atr.is_nan() || atr <= 0.0 {
        return Signal::None;
    }

    // NaN fails every comparison below and falls through to NONE
    if ema5 > ema20 && rsi > RSI_MIDLINE && macd > macd_signal {
        Signal::Buy
    } else if ema5 < ema20 && rsi < RSI_MIDLINE && macd < macd_signal {
        Signal::Sell
    } else {
        Signal::None
    }
}
