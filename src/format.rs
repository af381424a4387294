//! Display formatting for prices, volumes and market caps.

/// Formats a dollar amount US-style: `$1,234.56`, `-$5.23`.
pub fn format_currency(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let fixed = format!("{:.2}", value.abs());
    let (whole, cents) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    format!("{sign}${}.{cents}", group_thousands(whole))
}

/// Formats a signed change: `+$2.15`, `-$1.23`, `$0.00`.
pub fn format_signed_currency(value: f64) -> String {
    if value > 0.0 {
        format!("+{}", format_currency(value))
    } else {
        format_currency(value)
    }
}

/// Formats a percent change with an explicit `+` for gains: `+1.24%`.
pub fn format_percent(value: f64) -> String {
    if value > 0.0 {
        format!("+{value:.2}%")
    } else {
        format!("{value:.2}%")
    }
}

/// Formats a market cap with T/B/M suffixes; smaller values are written
/// out in full with thousands separators.
pub fn format_market_cap(value: f64) -> String {
    if value >= 1e12 {
        format!("${:.2}T", value / 1e12)
    } else if value >= 1e9 {
        format!("${:.2}B", value / 1e9)
    } else if value >= 1e6 {
        format!("${:.2}M", value / 1e6)
    } else {
        format!("${}", format_plain(value))
    }
}

/// Formats an optional market cap, `N/A` when unknown.
pub fn format_optional_market_cap(value: Option<f64>) -> String {
    value.map_or_else(|| "N/A".to_string(), format_market_cap)
}

/// Formats share volume: `45.2M`, `1.5K`, `999`.
pub fn format_volume(value: u64) -> String {
    // Precision loss above 2^53 shares is irrelevant at one decimal.
    let v = value as f64;
    if v >= 1e6 {
        format!("{:.1}M", v / 1e6)
    } else if v >= 1e3 {
        format!("{:.1}K", v / 1e3)
    } else {
        group_thousands(&value.to_string())
    }
}

/// Writes a number with thousands separators and at most three decimals.
fn format_plain(value: f64) -> String {
    let sign = if value < 0.0 { "-" } else { "" };
    let fixed = format!("{:.3}", value.abs());
    let (whole, frac) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac = frac.trim_end_matches('0');
    if frac.is_empty() {
        format!("{sign}{}", group_thousands(whole))
    } else {
        format!("{sign}{}.{frac}", group_thousands(whole))
    }
}

/// Inserts `,` every three digits from the right of an unsigned digit run.
fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}
