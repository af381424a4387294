//! Dashboard view state: the quote collection, search term and sort order,
//! plus everything derived from them.
//!
//! Derived values are recomputed on every call and never written back, so
//! the raw collection stays exactly as loaded.

use std::cmp::Ordering;

use crate::models::QuoteRecord;

/// Number of entries in the top movers list.
pub const TOP_MOVERS_LIMIT: usize = 5;

/// Columns the stock table can be sorted by.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortField {
    #[default]
    Symbol,
    Name,
    Price,
    Change,
    ChangePercent,
    Volume,
}

impl SortField {
    /// All sortable fields in table column order.
    pub const ALL: [SortField; 6] = [
        Self::Symbol,
        Self::Name,
        Self::Price,
        Self::Change,
        Self::ChangePercent,
        Self::Volume,
    ];

    /// Column header label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Symbol => "Symbol",
            Self::Name => "Company",
            Self::Price => "Price",
            Self::Change => "Change",
            Self::ChangePercent => "Change %",
            Self::Volume => "Volume",
        }
    }

    fn compare(self, a: &QuoteRecord, b: &QuoteRecord) -> Ordering {
        match self {
            Self::Symbol => compare_text(&a.symbol, &b.symbol),
            Self::Name => compare_text(&a.name, &b.name),
            Self::Price => a.price.total_cmp(&b.price),
            Self::Change => a.change.total_cmp(&b.change),
            Self::ChangePercent => a.change_percent.total_cmp(&b.change_percent),
            Self::Volume => a.volume.cmp(&b.volume),
        }
    }
}

/// Sort direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    /// Arrow shown next to the active column header.
    pub fn arrow(self) -> &'static str {
        match self {
            Self::Ascending => "↑",
            Self::Descending => "↓",
        }
    }
}

/// Active sort column and direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

/// Aggregates shown on the summary cards.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Summary {
    pub total: usize,
    pub gainers: usize,
    pub losers: usize,
    /// Mean percent change; `0.0` for an empty collection.
    pub average_change_percent: f64,
}

impl Summary {
    /// Average change as shown on the card, e.g. `0.45%`.
    pub fn average_label(&self) -> String {
        format!("{:.2}%", self.average_change_percent)
    }
}

/// State behind the dashboard.
#[derive(Clone, Debug, Default)]
pub struct DashboardState {
    quotes: Vec<QuoteRecord>,
    search: String,
    sort: SortSpec,
}

impl DashboardState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the whole quote collection.
    pub fn set_quotes(&mut self, quotes: Vec<QuoteRecord>) {
        self.quotes = quotes;
    }

    pub fn quotes(&self) -> &[QuoteRecord] {
        &self.quotes
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn sort(&self) -> SortSpec {
        self.sort
    }

    /// Selects a sort column.
    ///
    /// Re-selecting the active column while ascending flips to descending;
    /// every other selection sorts ascending.
    pub fn handle_sort(&mut self, field: SortField) {
        let direction =
            if field == self.sort.field && self.sort.direction == SortDirection::Ascending {
                SortDirection::Descending
            } else {
                SortDirection::Ascending
            };
        self.sort = SortSpec { field, direction };
    }

    /// Quotes whose symbol or name contains the search term, ignoring case.
    pub fn filtered(&self) -> Vec<&QuoteRecord> {
        let needle = self.search.to_lowercase();
        self.quotes
            .iter()
            .filter(|q| {
                needle.is_empty()
                    || q.symbol.to_lowercase().contains(&needle)
                    || q.name.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Filtered quotes in the active sort order.
    pub fn visible(&self) -> Vec<&QuoteRecord> {
        let mut rows = self.filtered();
        let SortSpec { field, direction } = self.sort;
        rows.sort_unstable_by(|a, b| match direction {
            SortDirection::Ascending => field.compare(a, b),
            SortDirection::Descending => field.compare(b, a),
        });
        rows
    }

    /// Summary statistics over the filtered quotes.
    pub fn summary(&self) -> Summary {
        let rows = self.filtered();
        let total = rows.len();
        let average_change_percent = if total == 0 {
            0.0
        } else {
            rows.iter().map(|q| q.change_percent).sum::<f64>() / total as f64
        };

        Summary {
            total,
            gainers: rows.iter().filter(|q| q.is_gainer()).count(),
            losers: rows.iter().filter(|q| q.is_loser()).count(),
            average_change_percent,
        }
    }

    /// The filtered quotes with the largest absolute percent moves,
    /// regardless of the table's sort order.
    pub fn top_movers(&self) -> Vec<&QuoteRecord> {
        let mut rows = self.filtered();
        rows.sort_unstable_by(|a, b| b.change_percent.abs().total_cmp(&a.change_percent.abs()));
        rows.truncate(TOP_MOVERS_LIMIT);
        rows
    }
}

/// Case-insensitive ordering with a case-sensitive tiebreak, close to what
/// a locale collator produces for ticker symbols and company names.
fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| b.cmp(a))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::mock_quotes;

    fn state() -> DashboardState {
        let mut state = DashboardState::new();
        state.set_quotes(mock_quotes());
        state
    }

    fn symbols(rows: &[&QuoteRecord]) -> Vec<String> {
        rows.iter().map(|q| q.symbol.clone()).collect()
    }

    #[test]
    fn empty_search_matches_everything() {
        let state = state();
        assert_eq!(state.filtered().len(), state.quotes().len());
    }

    #[test]
    fn search_matches_symbol_or_name_ignoring_case() {
        let mut state = state();
        state.set_search("inc");
        let rows = state.filtered();
        assert!(!rows.is_empty());
        for q in &rows {
            assert!(
                q.symbol.to_lowercase().contains("inc") || q.name.to_lowercase().contains("inc")
            );
        }

        state.set_search("nvd");
        assert_eq!(symbols(&state.filtered()), ["NVDA"]);

        state.set_search("META PLAT");
        assert_eq!(symbols(&state.filtered()), ["META"]);
    }

    #[test]
    fn filtered_is_subset_of_raw() {
        let mut state = state();
        for term in ["", "a", "corp", "zz", "T"] {
            state.set_search(term);
            for q in state.filtered() {
                assert!(state.quotes().contains(q));
            }
        }
    }

    #[test]
    fn sort_toggles_on_same_field_and_resets_on_new_field() {
        let mut state = state();
        assert_eq!(state.sort(), SortSpec::default());

        state.handle_sort(SortField::Price);
        assert_eq!(state.sort().direction, SortDirection::Ascending);
        state.handle_sort(SortField::Price);
        assert_eq!(state.sort().direction, SortDirection::Descending);
        state.handle_sort(SortField::Price);
        assert_eq!(state.sort().direction, SortDirection::Ascending);

        state.handle_sort(SortField::Price);
        state.handle_sort(SortField::Volume);
        assert_eq!(
            state.sort(),
            SortSpec {
                field: SortField::Volume,
                direction: SortDirection::Ascending
            }
        );
    }

    #[test]
    fn initial_symbol_click_sorts_descending() {
        let mut state = state();
        state.handle_sort(SortField::Symbol);
        assert_eq!(state.sort().direction, SortDirection::Descending);
        assert_eq!(state.visible()[0].symbol, "TSLA");
    }

    #[test]
    fn visible_is_a_permutation_in_order() {
        let mut state = state();
        state.handle_sort(SortField::Price);
        let rows = state.visible();
        assert_eq!(rows.len(), state.quotes().len());
        assert!(rows.windows(2).all(|w| w[0].price <= w[1].price));

        state.handle_sort(SortField::Price);
        let rows = state.visible();
        assert!(rows.windows(2).all(|w| w[0].price >= w[1].price));

        let mut sorted = symbols(&rows);
        sorted.sort();
        let mut raw: Vec<String> = state.quotes().iter().map(|q| q.symbol.clone()).collect();
        raw.sort();
        assert_eq!(sorted, raw);
    }

    #[test]
    fn name_sort_ignores_case() {
        let mut state = DashboardState::new();
        let mut quotes = mock_quotes();
        quotes.truncate(3);
        quotes[0].name = "beta".to_string();
        quotes[1].name = "Alpha".to_string();
        quotes[2].name = "Gamma".to_string();
        state.set_quotes(quotes);
        state.handle_sort(SortField::Name);

        let names: Vec<&str> = state.visible().iter().map(|q| q.name.as_str()).collect();
        assert_eq!(names, ["Alpha", "beta", "Gamma"]);
    }

    #[test]
    fn sorting_survives_search_changes() {
        let mut state = state();
        state.handle_sort(SortField::Volume);
        state.set_search("c");
        let rows = state.visible();
        assert!(rows.windows(2).all(|w| w[0].volume <= w[1].volume));
    }

    #[test]
    fn summary_counts_filtered_rows() {
        let mut state = state();
        let summary = state.summary();
        assert_eq!(summary.total, 8);
        assert_eq!(summary.gainers, 5);
        assert_eq!(summary.losers, 3);
        assert_eq!(summary.average_label(), "0.48%");

        state.set_search("tesla");
        let summary = state.summary();
        assert_eq!(summary.total, 1);
        assert_eq!(summary.losers, 1);
        assert_eq!(summary.average_label(), "-2.06%");
    }

    #[test]
    fn empty_collection_average_is_zero() {
        let mut state = state();
        state.set_search("no such company");
        let summary = state.summary();
        assert_eq!(summary.total, 0);
        assert_eq!(summary.average_label(), "0.00%");
        assert!(!summary.average_change_percent.is_nan());
    }

    #[test]
    fn top_movers_sorted_by_absolute_percent() {
        let mut state = state();
        state.handle_sort(SortField::Symbol);
        let movers = state.top_movers();
        assert_eq!(movers.len(), TOP_MOVERS_LIMIT);
        assert_eq!(symbols(&movers), ["NFLX", "TSLA", "NVDA", "AMZN", "MSFT"]);
        assert!(
            movers
                .windows(2)
                .all(|w| w[0].change_percent.abs() >= w[1].change_percent.abs())
        );

        // The table order is untouched.
        assert_eq!(state.visible()[0].symbol, "TSLA");
        assert_eq!(state.quotes()[0].symbol, "AAPL");
    }

    #[test]
    fn top_movers_shorter_than_limit() {
        let mut state = state();
        state.set_search("corp");
        let filtered = state.filtered().len();
        assert!(filtered < TOP_MOVERS_LIMIT);
        assert_eq!(state.top_movers().len(), filtered);
    }
}
