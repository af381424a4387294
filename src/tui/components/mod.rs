//! Dashboard panels, one module per screen region.

pub mod price_chart;
pub mod search_bar;
pub mod status_bar;
pub mod stock_table;
pub mod summary_cards;
pub mod top_movers;
