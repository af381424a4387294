//! Crate-level error types.
//!
//! [`TickerboardError`] unifies every error source (configuration, HTTP,
//! JSON, terminal I/O, quote normalization) behind a single enum so callers
//! can match on the variant they care about while still using the `?`
//! operator for easy propagation.

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TickerboardError>;

/// Top-level error type returned by all public APIs.
#[derive(Debug, thiserror::Error)]
pub enum TickerboardError {
    /// Configuration was missing, empty, or failed validation.
    #[error("configuration error: {0}")]
    Config(String),

    /// An outbound HTTP request failed.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization or deserialization failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Terminal or file I/O failed.
    #[error("io error: {0}")]
    Io(String),

    /// The proxy server could not bind or stopped unexpectedly.
    #[error("server error: {0}")]
    Server(String),

    /// The provider returned a quote whose fields could not be parsed.
    #[error("malformed quote for {symbol}: {reason}")]
    MalformedQuote { symbol: String, reason: String },

    /// A quote arrived for a symbol that has no company entry.
    #[error("no company information for symbol {0}")]
    UnknownSymbol(String),
}

impl From<std::io::Error> for TickerboardError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}
