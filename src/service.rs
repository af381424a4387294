//! Fetches and normalizes a quote for every watched symbol.

use std::sync::Arc;

use futures_util::future::join_all;
use tracing::{info, warn};

use crate::models::{BatchReport, QuoteRecord, SymbolFailure};
use crate::normalize::normalize;
use crate::provider::QuoteProvider;
use crate::watchlist::Watchlist;
use crate::{Result, TickerboardError};

/// Outcome for a single symbol within a batch.
enum SymbolOutcome {
    Quote(QuoteRecord),
    NoData,
    Failed(TickerboardError),
}

/// Joins a provider with the watchlist that drives it.
pub struct QuoteService {
    provider: Arc<dyn QuoteProvider>,
    watchlist: Watchlist,
}

impl QuoteService {
    pub fn new(provider: Arc<dyn QuoteProvider>, watchlist: Watchlist) -> Self {
        Self {
            provider,
            watchlist,
        }
    }

    pub fn watchlist(&self) -> &Watchlist {
        &self.watchlist
    }

    /// Requests every symbol concurrently and collects successes and
    /// failures separately.
    ///
    /// Quotes keep watchlist order. Symbols without data are dropped.
    pub async fn fetch_report(&self) -> BatchReport {
        let tasks = self.watchlist.symbols().map(|symbol| async move {
            let outcome = self.fetch_one(symbol).await;
            (symbol, outcome)
        });

        let mut report = BatchReport::default();
        for (symbol, outcome) in join_all(tasks).await {
            match outcome {
                SymbolOutcome::Quote(quote) => report.quotes.push(quote),
                SymbolOutcome::NoData => {}
                SymbolOutcome::Failed(e) => {
                    warn!(symbol, error = %e, "quote fetch failed");
                    report.failures.push(SymbolFailure {
                        symbol: symbol.to_string(),
                        error: e.to_string(),
                    });
                }
            }
        }

        info!(
            requested = self.watchlist.len(),
            quotes = report.quotes.len(),
            failures = report.failures.len(),
            "quote batch finished"
        );
        report
    }

    /// Fetches the whole watchlist, failing if any single symbol failed.
    ///
    /// # Errors
    ///
    /// Returns the first per-symbol error, in watchlist order.
    pub async fn fetch_all(&self) -> Result<Vec<QuoteRecord>> {
        let tasks = self.watchlist.symbols().map(|symbol| self.fetch_one(symbol));

        let mut quotes = Vec::with_capacity(self.watchlist.len());
        for outcome in join_all(tasks).await {
            match outcome {
                SymbolOutcome::Quote(quote) => quotes.push(quote),
                SymbolOutcome::NoData => {}
                SymbolOutcome::Failed(e) => return Err(e),
            }
        }
        Ok(quotes)
    }

    async fn fetch_one(&self, symbol: &str) -> SymbolOutcome {
        let raw = match self.provider.latest_quote(symbol).await {
            Ok(raw) => raw,
            Err(e) => return SymbolOutcome::Failed(e),
        };
        match normalize(symbol, raw.as_ref(), self.watchlist.company(symbol)) {
            Ok(Some(quote)) => SymbolOutcome::Quote(quote),
            Ok(None) => SymbolOutcome::NoData,
            Err(e) => SymbolOutcome::Failed(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use async_trait::async_trait;

    use super::*;
    use crate::models::RawQuote;
    use crate::watchlist::CompanyInfo;

    /// Provider answering from a fixed table; symbols mapped to `None`
    /// fail with a transport-style error.
    struct TableProvider(HashMap<&'static str, Option<RawQuote>>);

    #[async_trait]
    impl QuoteProvider for TableProvider {
        async fn latest_quote(&self, symbol: &str) -> Result<Option<RawQuote>> {
            match self.0.get(symbol) {
                Some(Some(quote)) => Ok(Some(quote.clone())),
                Some(None) => Err(TickerboardError::Io("connection reset".to_string())),
                None => Ok(None),
            }
        }
    }

    fn quote(price: &str) -> RawQuote {
        RawQuote {
            price: Some(price.to_string()),
            change: Some("1.0".to_string()),
            change_percent: Some("0.5%".to_string()),
            volume: Some("10".to_string()),
            ..RawQuote::default()
        }
    }

    fn watchlist(symbols: &[&str]) -> Watchlist {
        Watchlist::new(
            symbols
                .iter()
                .map(|s| CompanyInfo {
                    symbol: s.to_string(),
                    name: format!("{s} Corp."),
                    market_cap: 1e9,
                })
                .collect(),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn report_separates_failures_from_quotes() {
        // GOOGL is absent from the table (no data); MSFT errors.
        let provider = TableProvider(HashMap::from([
            ("AAPL", Some(quote("10"))),
            ("MSFT", None),
            ("TSLA", Some(quote("30"))),
        ]));
        let service = QuoteService::new(
            Arc::new(provider),
            watchlist(&["AAPL", "GOOGL", "MSFT", "TSLA"]),
        );

        let report = service.fetch_report().await;
        let symbols: Vec<&str> = report.quotes.iter().map(|q| q.symbol.as_str()).collect();
        assert_eq!(symbols, ["AAPL", "TSLA"]);
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].symbol, "MSFT");
        assert!(!report.is_complete());
    }

    #[tokio::test]
    async fn fetch_all_fails_on_any_error() {
        let provider = TableProvider(HashMap::from([("AAPL", Some(quote("10"))), ("TSLA", None)]));
        let service = QuoteService::new(Arc::new(provider), watchlist(&["AAPL", "TSLA"]));

        let result = service.fetch_all().await;
        tokio_test::assert_err!(result);
    }

    #[tokio::test]
    async fn malformed_quote_counts_as_failure() {
        let provider = TableProvider(HashMap::from([("AAPL", Some(quote("abc")))]));
        let service = QuoteService::new(Arc::new(provider), watchlist(&["AAPL"]));

        let report = service.fetch_report().await;
        assert!(report.quotes.is_empty());
        assert!(report.failures[0].error.contains("malformed quote"));
    }
}
