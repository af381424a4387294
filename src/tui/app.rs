//! Application state for the TUI.

use std::time::Instant;

use crate::dashboard::{DashboardState, SortField};
use crate::models::QuoteRecord;

use super::input::TextInput;

/// Message shown in the error banner when a load fails.
pub const LOAD_FAILED_MESSAGE: &str = "Failed to fetch stock data. Please try again.";

/// Spinner frames shown while loading.
const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

/// Central application state container.
pub struct App {
    // -- Data --
    /// Quotes, search term and sort order.
    pub dashboard: DashboardState,
    /// `true` from the start of a load until its result arrives.
    pub loading: bool,
    /// Where quotes come from ("Live" or "Demo").
    pub source_label: &'static str,
    /// When the current collection arrived.
    pub last_updated: Option<Instant>,

    // -- UI State --
    /// Current input mode.
    pub mode: Mode,
    /// Search box contents.
    pub search_input: TextInput,
    /// Index into [`SortField::ALL`] of the highlighted column header.
    pub column_cursor: usize,
    /// Error banner contents.
    pub error_message: Option<String>,
    /// Advances on every tick while loading.
    pub spinner_frame: usize,

    // -- Internal --
    /// Flag to signal application should quit.
    pub should_quit: bool,
}

impl App {
    /// Creates an app that starts in the loading state.
    pub fn new(source_label: &'static str) -> Self {
        Self {
            dashboard: DashboardState::new(),
            loading: true,
            source_label,
            last_updated: None,
            mode: Mode::Normal,
            search_input: TextInput::new(),
            column_cursor: 0,
            error_message: None,
            spinner_frame: 0,
            should_quit: false,
        }
    }

    /// Discards the current collection and enters the loading state.
    pub fn begin_load(&mut self) {
        self.loading = true;
        self.error_message = None;
        self.dashboard.set_quotes(Vec::new());
    }

    /// Applies the outcome of a load.
    pub fn finish_load(&mut self, result: Result<Vec<QuoteRecord>, String>) {
        self.loading = false;
        match result {
            Ok(quotes) => {
                self.dashboard.set_quotes(quotes);
                self.last_updated = Some(Instant::now());
                self.error_message = None;
            }
            Err(_) => self.show_error(LOAD_FAILED_MESSAGE),
        }
    }

    /// Sets an error message to display.
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.error_message = Some(message.into());
    }

    /// Copies the search box into the dashboard filter.
    pub fn sync_search(&mut self) {
        self.dashboard.set_search(self.search_input.as_str());
    }

    /// Clears the search box and filter.
    pub fn clear_search(&mut self) {
        self.search_input.take();
        self.sync_search();
    }

    /// Column under the header cursor.
    pub fn cursor_field(&self) -> SortField {
        SortField::ALL[self.column_cursor]
    }

    pub fn cursor_left(&mut self) {
        self.column_cursor = self.column_cursor.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        if self.column_cursor + 1 < SortField::ALL.len() {
            self.column_cursor += 1;
        }
    }

    /// Sorts by `field` and moves the header cursor onto it.
    pub fn sort_by(&mut self, field: SortField) {
        self.dashboard.handle_sort(field);
        if let Some(index) = SortField::ALL.iter().position(|f| *f == field) {
            self.column_cursor = index;
        }
    }

    /// Advances the loading spinner.
    pub fn tick(&mut self) {
        if self.loading {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER.len();
        }
    }

    pub fn spinner(&self) -> &'static str {
        SPINNER[self.spinner_frame]
    }
}

/// Input mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Mode {
    #[default]
    Normal,
    /// Typing into the search box.
    Insert,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::mock_quotes;

    #[test]
    fn starts_loading() {
        let app = App::new("Demo");
        assert!(app.loading);
        assert!(app.dashboard.quotes().is_empty());
    }

    #[test]
    fn successful_load_replaces_quotes() {
        let mut app = App::new("Demo");
        app.finish_load(Ok(mock_quotes()));
        assert!(!app.loading);
        assert_eq!(app.dashboard.quotes().len(), 8);
        assert!(app.last_updated.is_some());

        app.begin_load();
        assert!(app.loading);
        assert!(app.dashboard.quotes().is_empty());
    }

    #[test]
    fn failed_load_shows_banner_and_stops_loading() {
        let mut app = App::new("Live");
        app.finish_load(Err("connection refused".to_string()));
        assert!(!app.loading);
        assert_eq!(app.error_message.as_deref(), Some(LOAD_FAILED_MESSAGE));

        app.finish_load(Ok(mock_quotes()));
        assert!(app.error_message.is_none());
    }

    #[test]
    fn cursor_stays_within_columns() {
        let mut app = App::new("Demo");
        app.cursor_left();
        assert_eq!(app.column_cursor, 0);
        for _ in 0..10 {
            app.cursor_right();
        }
        assert_eq!(app.cursor_field(), SortField::Volume);
    }

    #[test]
    fn sort_by_moves_cursor() {
        let mut app = App::new("Demo");
        app.sort_by(SortField::ChangePercent);
        assert_eq!(app.cursor_field(), SortField::ChangePercent);
        assert_eq!(app.dashboard.sort().field, SortField::ChangePercent);
    }
}
