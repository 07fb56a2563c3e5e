//! Trading signals service module.
//!
//! Provides technical indicator calculations, BUY/SELL classification,
//! and win/loss accuracy tracking for emitted signals.

pub mod classifier;
pub mod engine;
pub mod indicators;
pub mod service;
pub mod state;

pub use classifier::classify;
pub use engine::{compute_indicators, IndicatorEngine};
pub use service::{SignalService, MIN_BARS};
pub use state::{SignalState, HISTORY_LIMIT};

use crate::types::Bar;

/// Trait for implementing technical indicators.
pub trait Indicator: Send + Sync {
    /// Unique identifier for this indicator.
    fn id(&self) -> &str;

    /// Human-readable name.
    fn name(&self) -> &str;

    /// Minimum number of bars before the first defined value.
    fn min_periods(&self) -> usize;

    /// Compute one value per bar, aligned with the input.
    /// Positions without enough history are `None`.
    fn compute(&self, bars: &[Bar]) -> Vec<Option<f64>>;
}
