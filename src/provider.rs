//! Upstream quote provider.
//!
//! [`QuoteProvider`] is the seam between the proxy and the outside world:
//! [`AlphaVantageClient`] implements it over HTTP, tests plug in scripted
//! providers.

use async_trait::async_trait;
use tracing::{debug, warn};

use crate::Result;
use crate::config::ProviderConfig;
use crate::models::{GlobalQuoteResponse, RawQuote};

/// Alpha Vantage function selector for a single latest quote.
const GLOBAL_QUOTE_FUNCTION: &str = "GLOBAL_QUOTE";

/// Fetches the latest raw quote for one symbol.
#[async_trait]
pub trait QuoteProvider: Send + Sync {
    /// Returns `Ok(None)` when the provider has no quote for `symbol`.
    async fn latest_quote(&self, symbol: &str) -> Result<Option<RawQuote>>;
}

/// [`QuoteProvider`] backed by the Alpha Vantage REST API.
pub struct AlphaVantageClient {
    http: reqwest::Client,
    url: String,
    api_key: String,
}

impl AlphaVantageClient {
    /// Builds a client with the configured endpoint, key and timeout.
    ///
    /// # Errors
    ///
    /// Returns [`TickerboardError::Config`](crate::TickerboardError::Config)
    /// if no API key is configured, or
    /// [`TickerboardError::Http`](crate::TickerboardError::Http) if the HTTP
    /// client cannot be built.
    pub fn new(config: &ProviderConfig) -> Result<Self> {
        let api_key = config.require_api_key()?.to_string();
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(concat!("tickerboard/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            url: config.url.clone(),
            api_key,
        })
    }
}

#[async_trait]
impl QuoteProvider for AlphaVantageClient {
    async fn latest_quote(&self, symbol: &str) -> Result<Option<RawQuote>> {
        let response = self
            .http
            .get(&self.url)
            .query(&[
                ("function", GLOBAL_QUOTE_FUNCTION),
                ("symbol", symbol),
                ("apikey", self.api_key.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?;

        let body: GlobalQuoteResponse = response.json().await?;
        if let Some(advisory) = body.advisory() {
            warn!(symbol, advisory, "provider returned an advisory instead of a quote");
        }

        let quote = body.into_quote();
        if quote.is_none() {
            debug!(symbol, "provider has no quote");
        }
        Ok(quote)
    }
}
