//! Yahoo Finance API client for intraday currency bars.
//!
//! Uses the unofficial chart endpoint, which serves 1-minute bars for the
//! current trading day.

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::error::{AppError, Result};
use crate::sources::BarSource;
use crate::types::Bar;

const CHART_URL: &str = "https://query1.finance.yahoo.com/v8/finance/chart";

/// Yahoo Finance chart response.
#[derive(Debug, Deserialize)]
struct YahooChartResponse {
    chart: YahooChart,
}

#[derive(Debug, Deserialize)]
struct YahooChart {
    result: Option<Vec<YahooResult>>,
    error: Option<YahooError>,
}

#[derive(Debug, Deserialize)]
struct YahooError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct YahooResult {
    timestamp: Option<Vec<i64>>,
    indicators: YahooIndicators,
}

#[derive(Debug, Deserialize)]
struct YahooIndicators {
    quote: Vec<YahooQuote>,
}

#[derive(Debug, Deserialize)]
struct YahooQuote {
    open: Option<Vec<Option<f64>>>,
    high: Option<Vec<Option<f64>>>,
    low: Option<Vec<Option<f64>>>,
    close: Option<Vec<Option<f64>>>,
}

/// Normalize a currency pair symbol for Yahoo Finance (e.g. "eurusd=x" -> "EURUSD=X").
fn normalize_yahoo_symbol(symbol: &str) -> String {
    symbol.trim().to_uppercase()
}

/// Convert a chart response into ordered bars.
///
/// Points without a positive close are skipped; a missing open, high or
/// low falls back to the close.
fn parse_chart(data: YahooChartResponse) -> Result<Vec<Bar>> {
    if let Some(error) = data.chart.error {
        return Err(AppError::ExternalApi(format!(
            "Yahoo API error: {} - {}",
            error.code, error.description
        )));
    }

    let result = data
        .chart
        .result
        .and_then(|results| results.into_iter().next())
        .ok_or_else(|| AppError::ExternalApi("No results in response".to_string()))?;

    // Outside market hours Yahoo returns a result without timestamps
    let Some(timestamps) = result.timestamp else {
        return Ok(Vec::new());
    };

    let quote = result
        .indicators
        .quote
        .into_iter()
        .next()
        .ok_or_else(|| AppError::ExternalApi("No quote data in response".to_string()))?;

    let opens = quote.open.unwrap_or_default();
    let highs = quote.high.unwrap_or_default();
    let lows = quote.low.unwrap_or_default();
    let closes = quote.close.unwrap_or_default();

    let mut bars = Vec::with_capacity(timestamps.len());
    for (i, &timestamp) in timestamps.iter().enumerate() {
        let Some(close) = closes.get(i).copied().flatten().filter(|c| *c > 0.0) else {
            continue;
        };
        let Some(time) = Utc.timestamp_opt(timestamp, 0).single() else {
            continue;
        };
        let pick = |series: &[Option<f64>]| series.get(i).copied().flatten().unwrap_or(close);

        bars.push(Bar::new(time, pick(&opens[..]), pick(&highs[..]), pick(&lows[..]), close));
    }

    Ok(bars)
}

/// Yahoo Finance API client.
pub struct YahooFinanceClient {
    client: Client,
}

impl YahooFinanceClient {
    /// Create a new Yahoo Finance client with a request timeout.
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36")
            .build()?;

        Ok(Self { client })
    }

    /// Fetch bars for a symbol.
    ///
    /// Arguments:
    /// - symbol: Yahoo symbol (e.g., "EURUSD=X")
    /// - range: Time range ("1d", "5d", "1mo", ...)
    /// - interval: Bar interval ("1m", "2m", "5m", ...)
    pub async fn get_historical_data(
        &self,
        symbol: &str,
        range: &str,
        interval: &str,
    ) -> Result<Vec<Bar>> {
        let yahoo_symbol = normalize_yahoo_symbol(symbol);
        let url = format!(
            "{}/{}?range={}&interval={}&includePrePost=false",
            CHART_URL, yahoo_symbol, range, interval
        );

        debug!("Fetching Yahoo Finance data: {}", url);

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(AppError::ExternalApi(format!(
                "API error: {}",
                response.status()
            )));
        }

        let data: YahooChartResponse = response.json().await?;
        let bars = parse_chart(data)?;
        debug!("Yahoo returned {} bars for {}", bars.len(), yahoo_symbol);

        Ok(bars)
    }
}

#[async_trait]
impl BarSource for YahooFinanceClient {
    async fn fetch_bars(&self, symbol: &str, interval: &str, range: &str) -> Result<Vec<Bar>> {
        self.get_historical_data(symbol, range, interval).await
    }
}
