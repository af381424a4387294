//! Converts the provider's string-typed quote into a [`QuoteRecord`].

use crate::models::{QuoteRecord, RawQuote};
use crate::watchlist::CompanyInfo;
use crate::{Result, TickerboardError};

/// Normalizes one provider quote.
///
/// Returns `Ok(None)` when the provider had no data for the symbol, which
/// the caller treats as "skip". Name and market cap come from `company`.
///
/// # Errors
///
/// - [`TickerboardError::UnknownSymbol`] if `company` is `None` while data
///   is present.
/// - [`TickerboardError::MalformedQuote`] if a required field is missing or
///   not numeric.
pub fn normalize(
    symbol: &str,
    raw: Option<&RawQuote>,
    company: Option<&CompanyInfo>,
) -> Result<Option<QuoteRecord>> {
    let Some(raw) = raw.filter(|r| !r.is_empty()) else {
        return Ok(None);
    };
    let company = company.ok_or_else(|| TickerboardError::UnknownSymbol(symbol.to_string()))?;

    Ok(Some(QuoteRecord {
        symbol: symbol.to_string(),
        name: company.name.clone(),
        price: parse_decimal(symbol, "05. price", raw.price.as_deref())?,
        change: parse_decimal(symbol, "09. change", raw.change.as_deref())?,
        change_percent: parse_decimal(
            symbol,
            "10. change percent",
            raw.change_percent
                .as_deref()
                .map(|v| v.trim().trim_end_matches('%')),
        )?,
        volume: parse_volume(symbol, raw.volume.as_deref())?,
        market_cap: Some(company.market_cap),
    }))
}

fn parse_decimal(symbol: &str, label: &str, value: Option<&str>) -> Result<f64> {
    let value = value.ok_or_else(|| malformed(symbol, format!("missing {label:?}")))?;
    value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .ok_or_else(|| malformed(symbol, format!("{label:?} is not a number: {value:?}")))
}

fn parse_volume(symbol: &str, value: Option<&str>) -> Result<u64> {
    let value = value.ok_or_else(|| malformed(symbol, "missing \"06. volume\"".to_string()))?;
    value
        .trim()
        .parse::<u64>()
        .map_err(|e| malformed(symbol, format!("\"06. volume\" {value:?}: {e}")))
}

fn malformed(symbol: &str, reason: String) -> TickerboardError {
    TickerboardError::MalformedQuote {
        symbol: symbol.to_string(),
        reason,
    }
}
