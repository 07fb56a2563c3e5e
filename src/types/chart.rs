use serde::{Deserialize, Serialize};

use crate::types::{IndicatorFrame, Signal, SignalStats};

/// Number of trailing points returned in chart payloads.
pub const CHART_WINDOW: usize = 50;

/// Parallel chart arrays, one element per bar.
///
/// Undefined indicator values serialize as `null`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub labels: Vec<String>,
    pub close: Vec<f64>,
    pub ema5: Vec<Option<f64>>,
    pub ema20: Vec<Option<f64>>,
    pub rsi: Vec<Option<f64>>,
    pub macd: Vec<Option<f64>>,
    pub macd_signal: Vec<Option<f64>>,
    pub atr: Vec<Option<f64>>,
}

impl ChartData {
    /// Build chart arrays from the trailing `window` points of a frame.
    pub fn from_frame(frame: &IndicatorFrame, window: usize) -> Self {
        let tail = frame.tail(window);
        Self {
            labels: tail.bars.iter().map(|b| b.label()).collect(),
            close: tail.closes(),
            ema5: tail.ema5,
            ema20: tail.ema20,
            rsi: tail.rsi,
            macd: tail.macd,
            macd_signal: tail.macd_signal,
            atr: tail.atr,
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

/// Result of one signal query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignalResponse {
    pub asset: String,
    pub signal: Signal,
    /// Newest first, formatted "HH:MM:SS - SIGNAL".
    pub history: Vec<String>,
    pub stats: SignalStats,
    pub chart: ChartData,
}

/// Supported assets and the current default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetsResponse {
    pub assets: Vec<String>,
    pub active: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_chart_serialization() {
        let json = serde_json::to_value(ChartData::default()).unwrap();
        for key in [
            "labels",
            "close",
            "ema5",
            "ema20",
            "rsi",
            "macd",
            "macd_signal",
            "atr",
        ] {
            assert!(json[key].as_array().unwrap().is_empty(), "{key} not empty");
        }
    }

    #[test]
    fn test_undefined_values_serialize_as_null() {
        let chart = ChartData {
            labels: vec!["a".to_string()],
            close: vec![1.1],
            ema5: vec![Some(1.1)],
            ema20: vec![Some(1.1)],
            rsi: vec![None],
            macd: vec![Some(0.0)],
            macd_signal: vec![Some(0.0)],
            atr: vec![None],
        };
        let json = serde_json::to_value(&chart).unwrap();
        assert!(json["rsi"][0].is_null());
        assert!(json["atr"][0].is_null());
        assert_eq!(json["ema5"][0], 1.1);
    }

    #[test]
    fn test_signal_response_shape() {
        let response = SignalResponse {
            asset: "EUR/USD".to_string(),
            signal: Signal::None,
            history: vec![],
            stats: SignalStats::new(0, 0),
            chart: ChartData::default(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["asset"], "EUR/USD");
        assert_eq!(json["signal"], "NONE");
        assert_eq!(json["stats"]["win"], 0);
        assert_eq!(json["stats"]["accuracy"], "0.00%");
        assert!(json["chart"]["labels"].is_array());
    }
}
