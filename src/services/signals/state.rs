//! Process-wide signal state: last emitted signal, history and accuracy counters.

use chrono::NaiveDateTime;
use tracing::debug;

use crate::types::{HistoryEntry, Signal, SignalStats, TradeOutcome};

/// Number of history entries exposed to clients.
pub const HISTORY_LIMIT: usize = 10;

/// Long-lived signal state for one process.
///
/// All mutation goes through [`SignalState::update`] and
/// [`SignalState::select_asset`] so that `win_count + loss_count` always
/// equals the number of transitions after the first.
#[derive(Debug, Clone)]
pub struct SignalState {
    active_asset: String,
    last_signal: Option<Signal>,
    /// Newest first.
    history: Vec<HistoryEntry>,
    win_count: u32,
    loss_count: u32,
}

impl SignalState {
    pub fn new(active_asset: impl Into<String>) -> Self {
        Self {
            active_asset: active_asset.into(),
            last_signal: None,
            history: Vec::new(),
            win_count: 0,
            loss_count: 0,
        }
    }

    pub fn active_asset(&self) -> &str {
        &self.active_asset
    }

    /// Make `asset` the default for requests that name none.
    pub fn select_asset(&mut self, asset: impl Into<String>) {
        self.active_asset = asset.into();
    }

    /// Most recently emitted BUY or SELL.
    pub fn last_signal(&self) -> Option<Signal> {
        self.last_signal
    }

    pub fn win_count(&self) -> u32 {
        self.win_count
    }

    pub fn loss_count(&self) -> u32 {
        self.loss_count
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Newest `limit` history entries.
    pub fn recent_history(&self, limit: usize) -> &[HistoryEntry] {
        &self.history[..self.history.len().min(limit)]
    }

    pub fn stats(&self) -> SignalStats {
        SignalStats::new(self.win_count, self.loss_count)
    }

    /// Feed a new classification.
    ///
    /// NONE and repeats of the last emitted signal are ignored. A genuine
    /// transition scores the outgoing signal against the move from
    /// `prior_close` to `latest_close` (skipped for the very first signal),
    /// then records the new one. Returns whether a history entry was added.
    pub fn update(
        &mut self,
        new_signal: Signal,
        latest_close: f64,
        prior_close: f64,
        now: NaiveDateTime,
    ) -> bool {
        if !new_signal.is_actionable() || self.last_signal == Some(new_signal) {
            return false;
        }

        if let Some(outgoing) = self.last_signal {
            if let Some(outcome) = TradeOutcome::score(outgoing, prior_close, latest_close) {
                self.record_outcome(outcome);
                debug!(
                    "Scored {} as {:?} ({} -> {}), accuracy now {}",
                    outgoing,
                    outcome,
                    prior_close,
                    latest_close,
                    self.stats().accuracy
                );
            }
        }

        self.last_signal = Some(new_signal);
        self.history.insert(
            0,
            HistoryEntry {
                time: now,
                signal: new_signal,
            },
        );

        true
    }

    fn record_outcome(&mut self, outcome: TradeOutcome) {
        match outcome {
            TradeOutcome::Win => self.win_count += 1,
            TradeOutcome::Loss => self.loss_count += 1,
        }
    }
}
