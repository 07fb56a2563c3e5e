use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Discrete trading signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Signal {
    Buy,
    Sell,
    #[default]
    None,
}

impl Signal {
    /// True for BUY and SELL.
    pub fn is_actionable(&self) -> bool {
        !matches!(self, Signal::None)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Signal::Buy => "BUY",
            Signal::Sell => "SELL",
            Signal::None => "NONE",
        }
    }
}

impl fmt::Display for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Scoring outcome of an outgoing signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TradeOutcome {
    /// Price moved in the signal's direction.
    Win,
    /// Price moved against the signal or stayed flat.
    Loss,
}

impl TradeOutcome {
    /// Score a signal against the close move that followed it.
    ///
    /// Returns `None` for `Signal::None`, which is never scored.
    pub fn score(signal: Signal, prior_close: f64, latest_close: f64) -> Option<Self> {
        let won = match signal {
            Signal::Buy => latest_close > prior_close,
            Signal::Sell => latest_close < prior_close,
            Signal::None => return None,
        };
        Some(if won {
            TradeOutcome::Win
        } else {
            TradeOutcome::Loss
        })
    }
}

/// One emitted signal in the history log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HistoryEntry {
    /// Local wall-clock time the signal was emitted.
    pub time: NaiveDateTime,
    pub signal: Signal,
}

impl fmt::Display for HistoryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {}", self.time.format("%H:%M:%S"), self.signal)
    }
}

/// Win/loss counters with formatted accuracy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SignalStats {
    pub win: u32,
    pub loss: u32,
    /// Percentage with two decimals and a trailing "%".
    pub accuracy: String,
}

impl SignalStats {
    pub fn new(win: u32, loss: u32) -> Self {
        Self {
            win,
            loss,
            accuracy: format!("{:.2}%", accuracy_pct(win, loss)),
        }
    }
}

/// win / (win + loss) * 100, or 0 before any scored transition.
pub fn accuracy_pct(win: u32, loss: u32) -> f64 {
    let decisive = win + loss;
    if decisive > 0 {
        win as f64 / decisive as f64 * 100.0
    } else {
        0.0
    }
}
