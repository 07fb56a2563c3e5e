//! Signal API endpoints.

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};
use serde::Deserialize;

use crate::error::AppError;
use crate::types::{AssetsResponse, SignalResponse};
use crate::AppState;

/// Query parameters for the signal endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct SignalQuery {
    /// Display name such as "EUR/USD"; the active asset when omitted.
    /// Present but blank is rejected.
    pub asset: Option<String>,
}

/// Create the signals router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/signal", get(get_signal))
        .route("/assets", get(get_assets))
}

/// Run one signal query.
async fn get_signal(
    State(state): State<AppState>,
    Query(query): Query<SignalQuery>,
) -> Result<Json<SignalResponse>, AppError> {
    let asset = match query.asset.as_deref().map(str::trim) {
        Some("") => return Err(AppError::BadRequest("asset must not be empty".to_string())),
        other => other,
    };

    let response = state.signal_service.query(asset).await?;
    Ok(Json(response))
}

/// List supported assets.
async fn get_assets(State(state): State<AppState>) -> Json<AssetsResponse> {
    Json(state.signal_service.assets().await)
}
