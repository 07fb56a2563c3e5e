//! fxpulse - Forex minute-bar signal server
//!
//! Computes EMA, RSI, MACD and ATR over intraday currency bars, classifies
//! the latest values as BUY, SELL or NONE, and scores each signal change
//! against the following price move.

pub mod api;
pub mod config;
pub mod error;
pub mod services;
pub mod sources;
pub mod types;

use axum::Router;
use config::Config;
use services::SignalService;
use sources::BarSource;
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub signal_service: Arc<SignalService>,
}

impl AppState {
    pub fn new(config: Config, source: Arc<dyn BarSource>) -> Self {
        let signal_service = SignalService::new(&config, source);
        Self {
            config: Arc::new(config),
            signal_service,
        }
    }
}

/// Build the HTTP application with CORS and request tracing.
pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(api::router())
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
