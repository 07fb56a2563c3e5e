use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One-minute OHLC bar.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    pub time: DateTime<Utc>,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
}

impl Bar {
    pub fn new(time: DateTime<Utc>, open: f64, high: f64, low: f64, close: f64) -> Self {
        Self {
            time,
            open,
            high,
            low,
            close,
        }
    }

    /// Chart label for this bar's timestamp.
    pub fn label(&self) -> String {
        self.time.format("%Y-%m-%d %H:%M:%S%:z").to_string()
    }

    /// True range against the previous bar's close.
    ///
    /// Without a previous close only the high-low span counts.
    pub fn true_range(&self, prev_close: Option<f64>) -> f64 {
        let hl = self.high - self.low;
        match prev_close {
            Some(pc) => {
                let hc = (self.high - pc).abs();
                let lc = (self.low - pc).abs();
                hl.max(hc).max(lc)
            }
            None => hl,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn bar(high: f64, low: f64, close: f64) -> Bar {
        let time = Utc.with_ymd_and_hms(2024, 3, 4, 14, 30, 0).unwrap();
        Bar::new(time, close, high, low, close)
    }

    #[test]
    fn test_label_format() {
        let b = bar(1.2, 1.0, 1.1);
        assert_eq!(b.label(), "2024-03-04 14:30:00+00:00");
    }

    #[test]
    fn test_true_range_first_bar() {
        let b = bar(1.2, 1.0, 1.1);
        assert!((b.true_range(None) - 0.2).abs() < 1e-12);
    }

    #[test]
    fn test_true_range_gap_up() {
        // Previous close far below the low: the gap dominates
        let b = bar(1.5, 1.4, 1.45);
        assert!((b.true_range(Some(1.0)) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_true_range_gap_down() {
        let b = bar(1.0, 0.9, 0.95);
        assert!((b.true_range(Some(1.3)) - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_bar_serialization() {
        let b = bar(1.2, 1.0, 1.1);
        let json = serde_json::to_string(&b).unwrap();
        assert!(json.contains("\"close\":1.1"));
        let parsed: Bar = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, b);
    }
}
