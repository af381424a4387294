//! Dashboard-side data loading.
//!
//! A load is a single request: no retry, no polling. The result is
//! delivered to the event loop as [`Message::QuotesLoaded`], which clears
//! the loading flag whether the request succeeded or not.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tracing::{info, warn};

use crate::Result;
use crate::mock::{DEMO_DELAY, mock_quotes};
use crate::models::QuoteRecord;
use crate::tui::Message;

/// Path of the proxy's quote endpoint.
const STOCKS_PATH: &str = "/api/stocks";

/// Timeout for the dashboard's request to the proxy.
const PROXY_TIMEOUT: Duration = Duration::from_secs(60);

/// HTTP client for the quote proxy.
pub struct StocksClient {
    http: reqwest::Client,
    endpoint: String,
}

impl StocksClient {
    /// Creates a client for the proxy at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns [`TickerboardError::Http`](crate::TickerboardError::Http) if
    /// the HTTP client cannot be built.
    pub fn new(base_url: &str) -> Result<Self> {
        let http = reqwest::Client::builder().timeout(PROXY_TIMEOUT).build()?;
        Ok(Self {
            http,
            endpoint: format!("{}{STOCKS_PATH}", base_url.trim_end_matches('/')),
        })
    }

    /// Requests the current quotes from the proxy.
    ///
    /// # Errors
    ///
    /// Returns an HTTP error for transport failures and non-2xx responses,
    /// including the proxy's `500` batch failure.
    pub async fn fetch_stocks(&self) -> Result<Vec<QuoteRecord>> {
        let response = self
            .http
            .get(&self.endpoint)
            .send()
            .await?
            .error_for_status()?;
        Ok(response.json().await?)
    }
}

/// Where the dashboard gets its quotes from.
pub enum QuoteSource {
    /// Live quotes through the proxy.
    Proxy(StocksClient),
    /// The static demo dataset after [`DEMO_DELAY`].
    Demo,
}

impl QuoteSource {
    /// Runs one load.
    ///
    /// # Errors
    ///
    /// Propagates [`StocksClient::fetch_stocks`] errors; the demo never fails.
    pub async fn load(&self) -> Result<Vec<QuoteRecord>> {
        match self {
            Self::Proxy(client) => client.fetch_stocks().await,
            Self::Demo => {
                tokio::time::sleep(DEMO_DELAY).await;
                Ok(mock_quotes())
            }
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Proxy(_) => "Live",
            Self::Demo => "Demo",
        }
    }
}

/// Spawns a single load and reports the outcome on `tx`.
pub fn spawn_load(source: Arc<QuoteSource>, tx: mpsc::UnboundedSender<Message>) {
    tokio::spawn(async move {
        let result = source.load().await;
        match &result {
            Ok(quotes) => info!(count = quotes.len(), "quotes loaded"),
            Err(e) => warn!(error = %e, "quote load failed"),
        }
        // The receiver is gone only if the app already quit.
        let _ = tx.send(Message::QuotesLoaded(result.map_err(|e| e.to_string())));
    });
}
