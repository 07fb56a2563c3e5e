//! Shared fixtures for integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{Duration, TimeZone, Utc};
use fxpulse::error::{AppError, Result};
use fxpulse::sources::BarSource;
use fxpulse::types::Bar;
use std::sync::Mutex;

/// Bar source serving a swappable, canned bar series.
pub struct FixtureSource {
    bars: Mutex<Option<Vec<Bar>>>,
    symbols: Mutex<Vec<String>>,
}

impl FixtureSource {
    pub fn new(bars: Vec<Bar>) -> Self {
        Self {
            bars: Mutex::new(Some(bars)),
            symbols: Mutex::new(Vec::new()),
        }
    }

    /// Replace the served bars.
    pub fn set_bars(&self, bars: Vec<Bar>) {
        *self.bars.lock().unwrap() = Some(bars);
    }

    /// Make every following fetch fail.
    pub fn fail(&self) {
        *self.bars.lock().unwrap() = None;
    }

    /// Provider symbols requested so far, oldest first.
    pub fn requested(&self) -> Vec<String> {
        self.symbols.lock().unwrap().clone()
    }
}

#[async_trait]
impl BarSource for FixtureSource {
    async fn fetch_bars(&self, symbol: &str, _interval: &str, _range: &str) -> Result<Vec<Bar>> {
        self.symbols.lock().unwrap().push(symbol.to_string());
        self.bars
            .lock()
            .unwrap()
            .clone()
            .ok_or_else(|| AppError::ExternalApi(format!("fixture offline for {symbol}")))
    }
}

/// One-minute bars starting 2024-01-02 09:00 UTC.
pub fn bars_from_closes(closes: &[f64]) -> Vec<Bar> {
    let start = Utc.with_ymd_and_hms(2024, 1, 2, 9, 0, 0).unwrap();
    let mut prev = None;
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            let open = prev.unwrap_or(close);
            prev = Some(close);
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

pub fn uptrend(count: usize) -> Vec<Bar> {
    let closes: Vec<f64> = (0..count).map(|i| 1.10 + i as f64 * 0.0002).collect();
    bars_from_closes(&closes)
}

pub fn downtrend(count: usize) -> Vec<Bar> {
    let closes: Vec<f64> = (0..count).map(|i| 1.10 - i as f64 * 0.0002).collect();
    bars_from_closes(&closes)
}
