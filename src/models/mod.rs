//! Data models for the quote proxy and the dashboard.
//!
//! [`global_quote`] mirrors the upstream provider's wire format;
//! [`quote`] holds the normalized records served to the dashboard.

pub mod global_quote;
pub mod quote;

pub use global_quote::{GlobalQuoteResponse, RawQuote};
pub use quote::{BatchReport, QuoteRecord, SymbolFailure};
