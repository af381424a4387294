//! Shared test utilities.

#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use tickerboard::models::RawQuote;
use tickerboard::provider::QuoteProvider;
use tickerboard::service::QuoteService;
use tickerboard::watchlist::{CompanyInfo, Watchlist};
use tickerboard::{Result, TickerboardError};

/// Alpha Vantage REST endpoint.
pub const ALPHA_VANTAGE_URL: &str = "https://www.alphavantage.co/query";

/// What a [`ScriptedProvider`] answers for one symbol.
#[derive(Clone)]
pub enum Reply {
    Quote(RawQuote),
    Empty,
    Fail,
}

/// Provider answering from a fixed script. Unscripted symbols have no data.
#[derive(Default)]
pub struct ScriptedProvider {
    replies: HashMap<String, Reply>,
}

impl ScriptedProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, symbol: &str, reply: Reply) -> Self {
        self.replies.insert(symbol.to_string(), reply);
        self
    }
}

#[async_trait]
impl QuoteProvider for ScriptedProvider {
    async fn latest_quote(&self, symbol: &str) -> Result<Option<RawQuote>> {
        match self.replies.get(symbol) {
            Some(Reply::Quote(quote)) => Ok(Some(quote.clone())),
            Some(Reply::Empty) | None => Ok(None),
            Some(Reply::Fail) => Err(TickerboardError::Io(format!(
                "upstream unreachable for {symbol}"
            ))),
        }
    }
}

/// A raw quote with the four fields the normalizer reads.
pub fn raw_quote(price: &str, change: &str, change_percent: &str, volume: &str) -> RawQuote {
    RawQuote {
        price: Some(price.to_string()),
        change: Some(change.to_string()),
        change_percent: Some(change_percent.to_string()),
        volume: Some(volume.to_string()),
        ..RawQuote::default()
    }
}

/// Watchlist of `symbols` with placeholder names and caps.
pub fn watchlist(symbols: &[&str]) -> Watchlist {
    Watchlist::new(
        symbols
            .iter()
            .map(|symbol| CompanyInfo {
                symbol: symbol.to_string(),
                name: format!("{symbol} Holdings"),
                market_cap: 5e11,
            })
            .collect(),
    )
    .expect("test watchlist is valid")
}

pub fn service(provider: ScriptedProvider, symbols: &[&str]) -> Arc<QuoteService> {
    Arc::new(QuoteService::new(Arc::new(provider), watchlist(symbols)))
}
