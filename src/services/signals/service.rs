//! Per-request signal query: fetch, compute, classify, score, respond.

use chrono::{Local, NaiveDateTime};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::config::{AssetTable, Config};
use crate::error::{AppError, Result};
use crate::services::signals::classifier::classify;
use crate::services::signals::engine::IndicatorEngine;
use crate::services::signals::state::{SignalState, HISTORY_LIMIT};
use crate::sources::BarSource;
use crate::types::{AssetsResponse, ChartData, Signal, SignalResponse, CHART_WINDOW};

/// Minimum number of bars needed before classifying.
pub const MIN_BARS: usize = 30;

/// Orchestrates signal queries against shared session state.
pub struct SignalService {
    source: Arc<dyn BarSource>,
    assets: AssetTable,
    interval: String,
    range: String,
    engine: IndicatorEngine,
    /// Held for the whole query so transitions are scored exactly once.
    state: Mutex<SignalState>,
}

impl SignalService {
    /// Create a new signal service.
    pub fn new(config: &Config, source: Arc<dyn BarSource>) -> Arc<Self> {
        Arc::new(Self {
            source,
            assets: config.assets.clone(),
            interval: config.fetch_interval.clone(),
            range: config.fetch_range.clone(),
            engine: IndicatorEngine::default(),
            state: Mutex::new(SignalState::new(config.default_asset.clone())),
        })
    }

    /// Run a query using the local wall clock for history entries.
    pub async fn query(&self, asset: Option<&str>) -> Result<SignalResponse> {
        self.query_at(asset, Local::now().naive_local()).await
    }

    /// Run a query for `asset`, or the active asset when `None`.
    ///
    /// Unknown assets are rejected before anything is fetched or mutated. A
    /// known asset becomes the active asset. With fewer than [`MIN_BARS`]
    /// bars (including a failed fetch) the response carries no signal and no
    /// chart, and the signal state is left alone.
    pub async fn query_at(
        &self,
        asset: Option<&str>,
        now: NaiveDateTime,
    ) -> Result<SignalResponse> {
        let mut state = self.state.lock().await;

        let asset = asset
            .map(str::to_string)
            .unwrap_or_else(|| state.active_asset().to_string());
        let symbol = self
            .assets
            .symbol_for(&asset)
            .ok_or_else(|| AppError::UnknownAsset(asset.clone()))?
            .to_string();

        state.select_asset(asset.clone());

        let bars = match self
            .source
            .fetch_bars(&symbol, &self.interval, &self.range)
            .await
        {
            Ok(bars) => bars,
            Err(e) => {
                warn!("Bar fetch failed for {} ({}): {}", asset, symbol, e);
                Vec::new()
            }
        };

        if bars.len() < MIN_BARS {
            debug!(
                "Only {} bars for {} - need {} to classify",
                bars.len(),
                asset,
                MIN_BARS
            );
            return Ok(Self::respond(&state, asset, Signal::None, ChartData::default()));
        }

        let frame = self.engine.compute(&bars);
        let signal = classify(&frame.latest());

        let latest_close = bars[bars.len() - 1].close;
        let prior_close = bars[bars.len() - 2].close;

        if state.update(signal, latest_close, prior_close, now) {
            info!(
                "New {} signal for {} at {} (W{} / L{})",
                signal,
                asset,
                latest_close,
                state.win_count(),
                state.loss_count()
            );
        } else {
            debug!("Classified {} for {} - no transition", signal, asset);
        }

        let chart = ChartData::from_frame(&frame, CHART_WINDOW);
        Ok(Self::respond(&state, asset, signal, chart))
    }

    /// Supported assets and the current default.
    pub async fn assets(&self) -> AssetsResponse {
        let state = self.state.lock().await;
        AssetsResponse {
            assets: self.assets.names(),
            active: state.active_asset().to_string(),
        }
    }

    /// Copy of the current session state.
    pub async fn snapshot(&self) -> SignalState {
        self.state.lock().await.clone()
    }

    fn respond(
        state: &SignalState,
        asset: String,
        signal: Signal,
        chart: ChartData,
    ) -> SignalResponse {
        SignalResponse {
            asset,
            signal,
            history: state
                .recent_history(HISTORY_LIMIT)
                .iter()
                .map(ToString::to_string)
                .collect(),
            stats: state.stats(),
            chart,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::signals::indicators::make_bars;
    use crate::types::Bar;
    use async_trait::async_trait;
    use chrono::NaiveDate;

    struct FixedSource {
        bars: Vec<Bar>,
    }

    #[async_trait]
    impl BarSource for FixedSource {
        async fn fetch_bars(
            &self,
            _symbol: &str,
            _interval: &str,
            _range: &str,
        ) -> Result<Vec<Bar>> {
            Ok(self.bars.clone())
        }
    }

    struct FailingSource;

    #[async_trait]
    impl BarSource for FailingSource {
        async fn fetch_bars(
            &self,
            symbol: &str,
            _interval: &str,
            _range: &str,
        ) -> Result<Vec<Bar>> {
            Err(AppError::ExternalApi(format!("no data for {symbol}")))
        }
    }

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 2)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn uptrend(count: usize) -> Vec<Bar> {
        let closes: Vec<f64> = (0..count).map(|i| 1.1 + i as f64 * 0.0002).collect();
        make_bars(&closes)
    }

    fn service(bars: Vec<Bar>) -> Arc<SignalService> {
        SignalService::new(&Config::default(), Arc::new(FixedSource { bars }))
    }

    #[tokio::test]
    async fn test_insufficient_bars() {
        let svc = service(uptrend(29));
        let response = svc.query_at(None, now()).await.unwrap();
        assert_eq!(response.signal, Signal::None);
        assert!(response.chart.is_empty());
        assert!(response.history.is_empty());
        assert_eq!(response.stats.accuracy, "0.00%");
    }

    #[tokio::test]
    async fn test_uptrend_buy() {
        let svc = service(uptrend(60));
        let response = svc.query_at(None, now()).await.unwrap();
        assert_eq!(response.asset, "EUR/USD");
        assert_eq!(response.signal, Signal::Buy);
        assert_eq!(response.history, vec!["12:00:00 - BUY".to_string()]);
        assert_eq!(response.chart.len(), CHART_WINDOW);
    }

    #[tokio::test]
    async fn test_unknown_asset_rejected() {
        let svc = service(uptrend(60));
        let err = svc.query_at(Some("XAU/USD"), now()).await.unwrap_err();
        assert!(matches!(err, AppError::UnknownAsset(_)));
        assert_eq!(svc.snapshot().await.active_asset(), "EUR/USD");
    }

    #[tokio::test]
    async fn test_fetch_failure_is_no_signal() {
        let svc = SignalService::new(&Config::default(), Arc::new(FailingSource));
        let response = svc.query_at(Some("GBP/USD"), now()).await.unwrap();
        assert_eq!(response.signal, Signal::None);
        assert!(response.chart.is_empty());
        assert_eq!(svc.snapshot().await.active_asset(), "GBP/USD");
    }

    #[tokio::test]
    async fn test_assets_listing() {
        let svc = service(Vec::new());
        let assets = svc.assets().await;
        assert_eq!(assets.assets.len(), 5);
        assert_eq!(assets.active, "EUR/USD");
    }
}
