//! Market data sources for OHLC bars.

pub mod yahoo;

pub use yahoo::YahooFinanceClient;

use async_trait::async_trait;

use crate::error::Result;
use crate::types::Bar;

/// Provider of historical OHLC bars.
#[async_trait]
pub trait BarSource: Send + Sync {
    /// Fetch ordered bars for a provider symbol.
    ///
    /// `interval` and `range` use provider notation (e.g. "1m", "1d").
    async fn fetch_bars(&self, symbol: &str, interval: &str, range: &str) -> Result<Vec<Bar>>;
}
