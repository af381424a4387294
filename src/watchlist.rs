//! The ordered list of tracked symbols and their static company details.
//!
//! Alpha Vantage's `GLOBAL_QUOTE` carries neither a company name nor a
//! market capitalization, so both come from the watchlist. The bundled
//! default can be replaced with a JSON file of the same shape:
//!
//! ```json
//! {
//!   "companies": [
//!     { "symbol": "AAPL", "name": "Apple Inc.", "market_cap": 2800000000000.0 }
//!   ]
//! }
//! ```

use std::collections::HashSet;
use std::path::Path;

use serde::Deserialize;

use crate::{Result, TickerboardError};

/// Watchlist used when `TICKERBOARD_WATCHLIST` is not set.
const DEFAULT_WATCHLIST: &str = r#"{
  "companies": [
    { "symbol": "AAPL", "name": "Apple Inc.", "market_cap": 2800000000000.0 },
    { "symbol": "GOOGL", "name": "Alphabet Inc.", "market_cap": 1800000000000.0 },
    { "symbol": "MSFT", "name": "Microsoft Corp.", "market_cap": 2900000000000.0 },
    { "symbol": "TSLA", "name": "Tesla Inc.", "market_cap": 790000000000.0 },
    { "symbol": "AMZN", "name": "Amazon.com Inc.", "market_cap": 1500000000000.0 },
    { "symbol": "NVDA", "name": "NVIDIA Corp.", "market_cap": 2200000000000.0 },
    { "symbol": "META", "name": "Meta Platforms", "market_cap": 1200000000000.0 },
    { "symbol": "NFLX", "name": "Netflix Inc.", "market_cap": 190000000000.0 }
  ]
}"#;

/// Static details for one tracked symbol.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct CompanyInfo {
    pub symbol: String,
    pub name: String,
    pub market_cap: f64,
}

#[derive(Deserialize)]
struct WatchlistFile {
    #[serde(default)]
    companies: Vec<CompanyInfo>,
}

/// A validated, ordered set of companies.
#[derive(Clone, Debug, PartialEq)]
pub struct Watchlist {
    companies: Vec<CompanyInfo>,
}

impl Watchlist {
    /// Builds a watchlist, rejecting empty lists, blank or duplicate
    /// symbols, blank names and non-positive market caps.
    ///
    /// Symbols are upper-cased before validation.
    ///
    /// # Errors
    ///
    /// Returns [`TickerboardError::Config`] naming the first offending entry.
    pub fn new(companies: Vec<CompanyInfo>) -> Result<Self> {
        if companies.is_empty() {
            return Err(TickerboardError::Config(
                "watchlist must contain at least one symbol".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        let mut validated = Vec::with_capacity(companies.len());
        for mut company in companies {
            company.symbol = company.symbol.trim().to_uppercase();
            if company.symbol.is_empty() {
                return Err(TickerboardError::Config(
                    "watchlist contains an empty symbol".to_string(),
                ));
            }
            if !seen.insert(company.symbol.clone()) {
                return Err(TickerboardError::Config(format!(
                    "watchlist lists {} more than once",
                    company.symbol
                )));
            }
            if company.name.trim().is_empty() {
                return Err(TickerboardError::Config(format!(
                    "watchlist entry {} has no name",
                    company.symbol
                )));
            }
            if !company.market_cap.is_finite() || company.market_cap <= 0.0 {
                return Err(TickerboardError::Config(format!(
                    "watchlist entry {} has an invalid market cap",
                    company.symbol
                )));
            }
            validated.push(company);
        }

        Ok(Self {
            companies: validated,
        })
    }

    /// Parses and validates a watchlist from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`TickerboardError::Json`] if the JSON is malformed, or
    /// [`TickerboardError::Config`] if validation fails.
    pub fn from_json(text: &str) -> Result<Self> {
        let file: WatchlistFile = serde_json::from_str(text)?;
        Self::new(file.companies)
    }

    /// Reads and validates a watchlist file.
    ///
    /// # Errors
    ///
    /// Returns [`TickerboardError::Io`] if the file cannot be read, otherwise
    /// the errors of [`Watchlist::from_json`].
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            TickerboardError::Io(format!("failed to read {}: {e}", path.display()))
        })?;
        Self::from_json(&text)
    }

    /// Returns the bundled eight-symbol watchlist.
    ///
    /// # Errors
    ///
    /// Only fails if the bundled list itself is invalid.
    pub fn bundled() -> Result<Self> {
        Self::from_json(DEFAULT_WATCHLIST)
    }

    /// Tracked symbols in display order.
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.companies.iter().map(|c| c.symbol.as_str())
    }

    /// Looks up the company details for a symbol.
    pub fn company(&self, symbol: &str) -> Option<&CompanyInfo> {
        self.companies.iter().find(|c| c.symbol == symbol)
    }

    pub fn len(&self) -> usize {
        self.companies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.companies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn company(symbol: &str, name: &str, market_cap: f64) -> CompanyInfo {
        CompanyInfo {
            symbol: symbol.to_string(),
            name: name.to_string(),
            market_cap,
        }
    }

    #[test]
    fn bundled_watchlist_keeps_order() {
        let watchlist = Watchlist::bundled().unwrap();
        let symbols: Vec<&str> = watchlist.symbols().collect();
        assert_eq!(
            symbols,
            ["AAPL", "GOOGL", "MSFT", "TSLA", "AMZN", "NVDA", "META", "NFLX"]
        );
        assert_eq!(watchlist.company("NFLX").unwrap().market_cap, 190e9);
    }

    #[test]
    fn symbols_are_uppercased() {
        let watchlist = Watchlist::new(vec![company(" aapl ", "Apple Inc.", 1.0)]).unwrap();
        assert!(watchlist.company("AAPL").is_some());
    }

    #[test]
    fn rejects_empty_watchlist() {
        let err = Watchlist::new(Vec::new()).unwrap_err();
        assert!(err.to_string().contains("at least one symbol"));
    }

    #[test]
    fn rejects_duplicate_symbols() {
        let err = Watchlist::new(vec![
            company("AAPL", "Apple Inc.", 1.0),
            company("aapl", "Apple again", 2.0),
        ])
        .unwrap_err();
        assert!(err.to_string().contains("AAPL more than once"));
    }

    #[test]
    fn rejects_missing_name_and_bad_market_cap() {
        assert!(Watchlist::new(vec![company("AAPL", " ", 1.0)]).is_err());
        assert!(Watchlist::new(vec![company("AAPL", "Apple Inc.", 0.0)]).is_err());
        assert!(Watchlist::new(vec![company("AAPL", "Apple Inc.", f64::NAN)]).is_err());
    }

    #[test]
    fn rejects_entry_without_market_cap() {
        let err = Watchlist::from_json(r#"{"companies": [{"symbol": "AAPL", "name": "Apple"}]}"#)
            .unwrap_err();
        assert!(matches!(err, TickerboardError::Json(_)));
    }
}
