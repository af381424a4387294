//! The dashboard's main loop.

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::info;

use crate::Result;
use crate::client::{QuoteSource, spawn_load};

use super::app::App;
use super::event::{Action, spawn_event_reader, spawn_tick_timer, update};
use super::terminal::{restore_terminal, setup_terminal};
use super::ui::render;

/// Interval between UI ticks.
const TICK_INTERVAL_MS: u64 = 250;

/// Runs the dashboard until the user quits.
///
/// The first load starts immediately; later loads only happen on an
/// explicit refresh.
///
/// # Errors
///
/// Returns an error if the terminal cannot be set up, drawn to, or
/// restored.
pub async fn run(source: QuoteSource) -> Result<()> {
    let mut terminal = setup_terminal()?;
    let source = Arc::new(source);
    let mut app = App::new(source.label());

    let (tx, mut rx) = mpsc::unbounded_channel();
    spawn_event_reader(tx.clone());
    spawn_tick_timer(tx.clone(), TICK_INTERVAL_MS);
    spawn_load(Arc::clone(&source), tx.clone());
    info!(source = source.label(), "dashboard started");

    let result = loop {
        if let Err(e) = terminal.draw(|frame| render(frame, &app)) {
            break Err(e.into());
        }

        let Some(message) = rx.recv().await else {
            break Ok(());
        };
        if let Some(Action::Reload) = update(&mut app, message) {
            spawn_load(Arc::clone(&source), tx.clone());
        }
        if app.should_quit {
            break Ok(());
        }
    };

    restore_terminal(&mut terminal)?;
    info!("dashboard stopped");
    result
}
