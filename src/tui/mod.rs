//! Terminal User Interface for the stock dashboard.
//!
//! Provides a Ratatui-based TUI with summary cards, an intraday chart,
//! a top movers list and a searchable, sortable quote table.

pub mod app;
pub mod components;
pub mod event;
pub mod input;
pub mod runner;
pub mod terminal;
pub mod ui;

pub use app::App;
pub use event::{Action, Event, Message};
pub use runner::run;
pub use terminal::{Tui, restore_terminal, setup_terminal};
pub use ui::render;
