//! Application configuration loaded from environment variables.
//!
//! - `ALPHA_VANTAGE_API_KEY` - provider API key, required by the proxy
//! - `ALPHA_VANTAGE_URL` - overrides the provider query endpoint
//! - `TICKERBOARD_BIND_ADDR` - address the proxy listens on
//! - `TICKERBOARD_API_URL` - proxy base URL used by the dashboard
//! - `TICKERBOARD_WATCHLIST` - path to a JSON watchlist file
//! - `TICKERBOARD_HTTP_TIMEOUT_SECS` - timeout for outbound provider calls

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use zeroize::Zeroizing;

use crate::TickerboardError;
use crate::watchlist::Watchlist;

/// Default provider query endpoint.
const DEFAULT_PROVIDER_URL: &str = "https://www.alphavantage.co/query";

/// Default proxy listen address.
const DEFAULT_BIND_ADDR: &str = "127.0.0.1:3000";

/// Default proxy base URL for the dashboard.
const DEFAULT_API_URL: &str = "http://127.0.0.1:3000";

/// Default outbound request timeout in seconds.
const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 10;

/// Top-level application configuration.
#[derive(Debug)]
pub struct AppConfig {
    pub provider: ProviderConfig,
    pub server: ServerConfig,
    pub dashboard: DashboardConfig,
    pub watchlist: Watchlist,
}

/// Upstream quote provider settings.
pub struct ProviderConfig {
    pub url: String,
    pub api_key: Option<Zeroizing<String>>,
    pub timeout: Duration,
}

impl std::fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("url", &self.url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .finish()
    }
}

impl ProviderConfig {
    /// Returns the API key, failing if none was configured.
    ///
    /// # Errors
    ///
    /// Returns [`TickerboardError::Config`] when `ALPHA_VANTAGE_API_KEY` is
    /// unset and no keychain entry supplied it.
    pub fn require_api_key(&self) -> crate::Result<&str> {
        self.api_key.as_ref().map(|k| k.as_str()).ok_or_else(|| {
            TickerboardError::Config(
                "ALPHA_VANTAGE_API_KEY must be set to serve live quotes".to_string(),
            )
        })
    }
}

/// Proxy server settings.
#[derive(Debug)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
}

/// Dashboard client settings.
#[derive(Debug)]
pub struct DashboardConfig {
    pub api_url: String,
}

/// Loads the application configuration from environment variables.
///
/// Everything except the API key has a default. The key is optional here
/// so the dashboard and demo can start without it; the proxy calls
/// [`ProviderConfig::require_api_key`] before serving.
///
/// # Errors
///
/// Returns [`TickerboardError::Config`] if the bind address or timeout do
/// not parse, or a watchlist error if the configured file is invalid.
pub fn fetch_config() -> crate::Result<AppConfig> {
    let url = non_empty_var("ALPHA_VANTAGE_URL").unwrap_or_else(|| DEFAULT_PROVIDER_URL.to_string());
    let api_key = non_empty_var("ALPHA_VANTAGE_API_KEY").map(Zeroizing::new);

    let timeout_secs = match non_empty_var("TICKERBOARD_HTTP_TIMEOUT_SECS") {
        Some(raw) => raw.parse::<u64>().ok().filter(|s| *s > 0).ok_or_else(|| {
            TickerboardError::Config(format!(
                "TICKERBOARD_HTTP_TIMEOUT_SECS must be a positive integer, got {raw:?}"
            ))
        })?,
        None => DEFAULT_HTTP_TIMEOUT_SECS,
    };

    let bind_raw =
        non_empty_var("TICKERBOARD_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string());
    let bind_addr = bind_raw.parse::<SocketAddr>().map_err(|e| {
        TickerboardError::Config(format!("TICKERBOARD_BIND_ADDR {bind_raw:?} is invalid: {e}"))
    })?;

    let watchlist = match non_empty_var("TICKERBOARD_WATCHLIST") {
        Some(path) => Watchlist::load(&PathBuf::from(path))?,
        None => Watchlist::bundled()?,
    };

    Ok(AppConfig {
        provider: ProviderConfig {
            url,
            api_key,
            timeout: Duration::from_secs(timeout_secs),
        },
        server: ServerConfig { bind_addr },
        dashboard: fetch_dashboard_config(),
        watchlist,
    })
}

/// Loads only the dashboard settings.
///
/// The dashboard never touches the provider, bind address or watchlist, so
/// a bad value in any of those does not stop it from starting.
pub fn fetch_dashboard_config() -> DashboardConfig {
    let api_url = non_empty_var("TICKERBOARD_API_URL")
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
        .trim_end_matches('/')
        .to_string();
    DashboardConfig { api_url }
}

/// Returns the value of an environment variable if it exists and is non-empty.
fn non_empty_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|s| !s.is_empty())
}
