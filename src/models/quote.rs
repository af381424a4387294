use serde::{Deserialize, Serialize};

/// A normalized quote as served by `/api/stocks` and shown on the dashboard.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRecord {
    pub symbol: String,
    pub name: String,
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
    pub volume: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub market_cap: Option<f64>,
}

impl QuoteRecord {
    /// Returns `true` if the price moved up since the prior close.
    pub fn is_gainer(&self) -> bool {
        self.change > 0.0
    }

    /// Returns `true` if the price moved down since the prior close.
    pub fn is_loser(&self) -> bool {
        self.change < 0.0
    }
}

/// A symbol whose quote could not be fetched or normalized.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SymbolFailure {
    pub symbol: String,
    pub error: String,
}

/// Outcome of fetching every watched symbol independently.
///
/// `quotes` keeps watchlist order; symbols the provider had no data for
/// appear in neither list.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchReport {
    pub quotes: Vec<QuoteRecord>,
    pub failures: Vec<SymbolFailure>,
}

impl BatchReport {
    /// Returns `true` when every symbol was either fetched or had no data.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }
}
