use serde::Deserialize;

/// Top-level body of an Alpha Vantage `GLOBAL_QUOTE` response.
///
/// The provider answers unknown symbols with `{}` or `{"Global Quote": {}}`
/// and throttled requests with a `Note` or `Information` message instead of
/// an error status.
#[derive(Debug, Default, Deserialize)]
pub struct GlobalQuoteResponse {
    #[serde(rename = "Global Quote")]
    pub global_quote: Option<RawQuote>,
    #[serde(rename = "Note")]
    pub note: Option<String>,
    #[serde(rename = "Information")]
    pub information: Option<String>,
    #[serde(rename = "Error Message")]
    pub error_message: Option<String>,
}

impl GlobalQuoteResponse {
    /// Returns the quote if the provider actually sent one.
    pub fn into_quote(self) -> Option<RawQuote> {
        self.global_quote.filter(|q| !q.is_empty())
    }

    /// Returns whichever advisory message the provider attached, if any.
    pub fn advisory(&self) -> Option<&str> {
        self.note
            .as_deref()
            .or(self.information.as_deref())
            .or(self.error_message.as_deref())
    }
}

/// The provider's quote object, field labels kept verbatim.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct RawQuote {
    #[serde(rename = "01. symbol")]
    pub symbol: Option<String>,
    #[serde(rename = "02. open")]
    pub open: Option<String>,
    #[serde(rename = "03. high")]
    pub high: Option<String>,
    #[serde(rename = "04. low")]
    pub low: Option<String>,
    #[serde(rename = "05. price")]
    pub price: Option<String>,
    #[serde(rename = "06. volume")]
    pub volume: Option<String>,
    #[serde(rename = "07. latest trading day")]
    pub latest_trading_day: Option<String>,
    #[serde(rename = "08. previous close")]
    pub previous_close: Option<String>,
    #[serde(rename = "09. change")]
    pub change: Option<String>,
    #[serde(rename = "10. change percent")]
    pub change_percent: Option<String>,
}

impl RawQuote {
    /// An empty object carries none of the fields the normalizer needs.
    pub fn is_empty(&self) -> bool {
        self.price.is_none()
            && self.volume.is_none()
            && self.change.is_none()
            && self.change_percent.is_none()
    }
}
