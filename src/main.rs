use fxpulse::config::Config;
use fxpulse::sources::YahooFinanceClient;
use fxpulse::AppState;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "fxpulse=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    info!("Starting fxpulse server on {}:{}", config.host, config.port);
    info!(
        "Tracking {} assets, default {} ({} bars over {})",
        config.assets.len(),
        config.default_asset,
        config.fetch_interval,
        config.fetch_range
    );

    let source = Arc::new(YahooFinanceClient::new(Duration::from_secs(
        config.http_timeout_secs,
    ))?);

    let addr = format!("{}:{}", config.host, config.port);
    let app = fxpulse::app(AppState::new(config, source));

    // Start the server
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("fxpulse server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
