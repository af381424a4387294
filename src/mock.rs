//! Static data for the demo mode and the intraday chart.

use std::time::Duration;

use crate::models::QuoteRecord;

/// Artificial latency before the demo dataset appears.
pub const DEMO_DELAY: Duration = Duration::from_millis(1500);

/// Symbol shown on the price chart.
pub const CHART_SYMBOL: &str = "AAPL";

/// Intraday sample points for the chart: (time label, price).
pub const CHART_POINTS: [(&str, f64); 6] = [
    ("09:30", 173.28),
    ("10:00", 174.15),
    ("10:30", 173.89),
    ("11:00", 175.43),
    ("11:30", 174.92),
    ("12:00", 175.67),
];

/// Returns the y-axis bounds for the chart: one dollar of headroom on
/// either side of the observed range.
pub fn chart_bounds() -> [f64; 2] {
    let (min, max) = CHART_POINTS
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), (_, p)| {
            (min.min(*p), max.max(*p))
        });
    [min - 1.0, max + 1.0]
}

/// Eight large-cap quotes used when running without the proxy.
pub fn mock_quotes() -> Vec<QuoteRecord> {
    [
        ("AAPL", "Apple Inc.", 175.43, 2.15, 1.24, 45_234_567, 2.8e12),
        ("GOOGL", "Alphabet Inc.", 142.56, -1.23, -0.85, 23_456_789, 1.8e12),
        ("MSFT", "Microsoft Corp.", 378.85, 4.67, 1.25, 34_567_890, 2.9e12),
        ("TSLA", "Tesla Inc.", 248.42, -5.23, -2.06, 67_890_123, 7.9e11),
        ("AMZN", "Amazon.com Inc.", 145.78, 1.89, 1.31, 45_678_901, 1.5e12),
        ("NVDA", "NVIDIA Corp.", 875.28, 12.45, 1.44, 56_789_012, 2.2e12),
        ("META", "Meta Platforms", 485.32, -3.21, -0.66, 23_456_789, 1.2e12),
        ("NFLX", "Netflix Inc.", 425.67, 8.92, 2.14, 12_345_678, 1.9e11),
    ]
    .into_iter()
    .map(
        |(symbol, name, price, change, change_percent, volume, market_cap)| QuoteRecord {
            symbol: symbol.to_string(),
            name: name.to_string(),
            price,
            change,
            change_percent,
            volume,
            market_cap: Some(market_cap),
        },
    )
    .collect()
}
