//! Live tests against the Alpha Vantage REST API.
//!
//! These require network access and `ALPHA_VANTAGE_API_KEY`.
//! Run with: `cargo test --features integration-tests`

#![cfg(feature = "integration-tests")]

mod common;

use std::sync::Arc;
use std::time::Duration;

use zeroize::Zeroizing;

use tickerboard::config::ProviderConfig;
use tickerboard::provider::{AlphaVantageClient, QuoteProvider};
use tickerboard::service::QuoteService;
use tickerboard::watchlist::Watchlist;

use common::ALPHA_VANTAGE_URL;

fn live_config() -> ProviderConfig {
    let key = std::env::var("ALPHA_VANTAGE_API_KEY").expect("ALPHA_VANTAGE_API_KEY must be set");
    ProviderConfig {
        url: ALPHA_VANTAGE_URL.to_string(),
        api_key: Some(Zeroizing::new(key)),
        timeout: Duration::from_secs(15),
    }
}

#[tokio::test]
async fn test_latest_quote_for_known_symbol() {
    let client = AlphaVantageClient::new(&live_config()).expect("Failed to build client");
    let quote = client
        .latest_quote("IBM")
        .await
        .expect("Request failed");

    // A throttled key yields no quote rather than an error.
    if let Some(quote) = quote {
        assert!(quote.price.is_some());
        assert_eq!(quote.symbol.as_deref(), Some("IBM"));
    }
}

#[tokio::test]
async fn test_unknown_symbol_has_no_quote() {
    let client = AlphaVantageClient::new(&live_config()).expect("Failed to build client");
    let quote = client
        .latest_quote("NOSUCHSYMBOLXYZ")
        .await
        .expect("Request failed");
    assert!(quote.is_none());
}

#[tokio::test]
async fn test_bundled_watchlist_report() {
    let client = AlphaVantageClient::new(&live_config()).expect("Failed to build client");
    let watchlist = Watchlist::bundled().unwrap();
    let service = QuoteService::new(Arc::new(client), watchlist);

    let report = service.fetch_report().await;
    assert!(report.quotes.len() + report.failures.len() <= 8);
    for quote in &report.quotes {
        assert!(quote.market_cap.is_some());
    }
}
