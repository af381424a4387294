//! Stock quote proxy and terminal dashboard.
//!
//! The proxy ([`server`]) fetches a quote per watched symbol from Alpha
//! Vantage, normalizes it ([`normalize`]) and serves the collection as
//! JSON. The dashboard ([`tui`]) loads that collection once and derives a
//! searchable, sortable view with summary statistics ([`dashboard`]).

pub mod client;
pub mod config;
pub mod credentials;
pub mod dashboard;
pub mod error;
pub mod format;
pub mod mock;
pub mod models;
pub mod normalize;
pub mod provider;
pub mod server;
pub mod service;
pub mod tui;
pub mod watchlist;

pub use error::{Result, TickerboardError};
