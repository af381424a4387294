//! Deserialization tests for provider responses and proxy records.

use tickerboard::models::{GlobalQuoteResponse, QuoteRecord};
use tickerboard::normalize::normalize;
use tickerboard::watchlist::Watchlist;

const GLOBAL_QUOTE_JSON: &str = include_str!("fixtures/global_quote.json");
const GLOBAL_QUOTE_EMPTY_JSON: &str = include_str!("fixtures/global_quote_empty.json");
const RATE_LIMIT_NOTE_JSON: &str = include_str!("fixtures/rate_limit_note.json");

#[test]
fn test_global_quote_deserializes() {
    let response: GlobalQuoteResponse =
        serde_json::from_str(GLOBAL_QUOTE_JSON).expect("Failed to deserialize global quote");

    assert!(response.advisory().is_none());
    let quote = response.into_quote().expect("quote should be present");
    assert_eq!(quote.symbol.as_deref(), Some("AAPL"));
    assert_eq!(quote.price.as_deref(), Some("178.7200"));
    assert_eq!(quote.volume.as_deref(), Some("52836400"));
    assert_eq!(quote.latest_trading_day.as_deref(), Some("2024-03-15"));
    assert_eq!(quote.change_percent.as_deref(), Some("1.2349%"));
}

#[test]
fn test_empty_global_quote_has_no_quote() {
    let response: GlobalQuoteResponse = serde_json::from_str(GLOBAL_QUOTE_EMPTY_JSON).unwrap();
    assert!(response.into_quote().is_none());

    let response: GlobalQuoteResponse = serde_json::from_str("{}").unwrap();
    assert!(response.into_quote().is_none());
}

#[test]
fn test_rate_limit_note_is_an_advisory() {
    let response: GlobalQuoteResponse = serde_json::from_str(RATE_LIMIT_NOTE_JSON).unwrap();
    assert!(response.advisory().unwrap().contains("call frequency"));
    assert!(response.into_quote().is_none());
}

#[test]
fn test_fixture_normalizes_against_bundled_watchlist() {
    let watchlist = Watchlist::bundled().unwrap();
    let response: GlobalQuoteResponse = serde_json::from_str(GLOBAL_QUOTE_JSON).unwrap();
    let raw = response.into_quote();

    let record = normalize("AAPL", raw.as_ref(), watchlist.company("AAPL"))
        .unwrap()
        .unwrap();

    assert_eq!(record.name, "Apple Inc.");
    assert_eq!(record.price, 178.72);
    assert_eq!(record.change, 2.18);
    assert_eq!(record.change_percent, 1.2349);
    assert_eq!(record.volume, 52_836_400);
    assert_eq!(record.market_cap, Some(2.8e12));
}

#[test]
fn test_quote_record_without_market_cap_deserializes() {
    let json = r#"{"symbol":"AAPL","name":"Apple Inc.","price":1.5,"change":0,"changePercent":0,"volume":3}"#;
    let record: QuoteRecord = serde_json::from_str(json).unwrap();
    assert_eq!(record.market_cap, None);
    assert!(!record.is_gainer());
    assert!(!record.is_loser());

    let back = serde_json::to_string(&record).unwrap();
    assert!(!back.contains("marketCap"));
}
