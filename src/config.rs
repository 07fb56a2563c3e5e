use std::env;

/// Default asset table: display name to Yahoo Finance symbol.
const DEFAULT_ASSETS: &[(&str, &str)] = &[
    ("EUR/USD", "EURUSD=X"),
    ("GBP/USD", "GBPUSD=X"),
    ("USD/JPY", "USDJPY=X"),
    ("GBP/JPY", "GBPJPY=X"),
    ("AUD/USD", "AUDUSD=X"),
];

/// One supported asset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetConfig {
    /// Display name used by clients (e.g. "EUR/USD").
    pub name: String,
    /// Provider symbol used for bar fetches (e.g. "EURUSD=X").
    pub symbol: String,
}

/// Ordered table of supported assets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetTable {
    assets: Vec<AssetConfig>,
}

impl AssetTable {
    pub fn new(assets: Vec<AssetConfig>) -> Self {
        Self { assets }
    }

    /// Parse a table from "Name|SYMBOL,Name|SYMBOL".
    ///
    /// Malformed entries are skipped.
    pub fn parse(entries: &str) -> Self {
        let assets = entries
            .split(',')
            .filter_map(|entry| {
                let parts: Vec<&str> = entry.split('|').map(str::trim).collect();
                if parts.len() >= 2 && !parts[0].is_empty() && !parts[1].is_empty() {
                    Some(AssetConfig {
                        name: parts[0].to_string(),
                        symbol: parts[1].to_string(),
                    })
                } else {
                    None
                }
            })
            .collect();
        Self { assets }
    }

    /// Look up the provider symbol for a display name.
    pub fn symbol_for(&self, name: &str) -> Option<&str> {
        self.assets
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.symbol.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.symbol_for(name).is_some()
    }

    /// Display names in table order.
    pub fn names(&self) -> Vec<String> {
        self.assets.iter().map(|a| a.name.clone()).collect()
    }

    pub fn first(&self) -> Option<&AssetConfig> {
        self.assets.first()
    }

    pub fn len(&self) -> usize {
        self.assets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }
}

impl Default for AssetTable {
    fn default() -> Self {
        Self::new(
            DEFAULT_ASSETS
                .iter()
                .map(|(name, symbol)| AssetConfig {
                    name: name.to_string(),
                    symbol: symbol.to_string(),
                })
                .collect(),
        )
    }
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host address.
    pub host: String,
    /// Server port.
    pub port: u16,
    /// Supported assets.
    pub assets: AssetTable,
    /// Asset queried when a request names none.
    pub default_asset: String,
    /// Bar interval requested from the provider.
    pub fetch_interval: String,
    /// Bar range requested from the provider.
    pub fetch_range: String,
    /// Timeout for provider requests in seconds.
    pub http_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let assets = env::var("ASSETS")
            .ok()
            .map(|s| AssetTable::parse(&s))
            .filter(|t| !t.is_empty())
            .unwrap_or_default();

        // Fall back to the first table entry when DEFAULT_ASSET is missing or unknown
        let default_asset = env::var("DEFAULT_ASSET")
            .ok()
            .filter(|name| assets.contains(name))
            .or_else(|| assets.first().map(|a| a.name.clone()))
            .unwrap_or_default();

        Self {
            host: env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(5000),
            assets,
            default_asset,
            fetch_interval: env::var("FETCH_INTERVAL").unwrap_or_else(|_| "1m".to_string()),
            fetch_range: env::var("FETCH_RANGE").unwrap_or_else(|_| "1d".to_string()),
            http_timeout_secs: env::var("HTTP_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            assets: AssetTable::default(),
            default_asset: "EUR/USD".to_string(),
            fetch_interval: "1m".to_string(),
            fetch_range: "1d".to_string(),
            http_timeout_secs: 30,
        }
    }
}
