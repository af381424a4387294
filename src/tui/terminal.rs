//! Terminal setup and teardown.

use std::io::{self, IsTerminal, Stdout};

use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::{Result, TickerboardError};

/// Terminal backend the dashboard draws to.
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Puts stdout into raw mode on the alternate screen.
///
/// If a later step fails, the steps already taken are undone before the
/// error is returned, so the shell is never left in raw mode.
///
/// # Errors
///
/// Returns [`TickerboardError::Io`] if stdout is not a TTY or any setup step
/// fails.
pub fn setup_terminal() -> Result<Tui> {
    if !io::stdout().is_terminal() {
        return Err(TickerboardError::Io(
            "the dashboard requires an interactive terminal (TTY)".to_string(),
        ));
    }

    enable_raw_mode()
        .map_err(|e| TickerboardError::Io(format!("failed to enable raw mode: {e}")))?;

    let mut stdout = io::stdout();
    if let Err(e) = execute!(stdout, EnterAlternateScreen) {
        // Raw mode is on but the screen never switched.
        let _ = disable_raw_mode();
        return Err(TickerboardError::Io(format!(
            "failed to enter alternate screen: {e}"
        )));
    }

    Terminal::new(CrosstermBackend::new(stdout)).map_err(|e| {
        abandon_setup();
        TickerboardError::Io(format!("failed to create terminal: {e}"))
    })
}

/// Best-effort undo of a fully applied setup.
fn abandon_setup() {
    let _ = execute!(io::stdout(), LeaveAlternateScreen);
    let _ = disable_raw_mode();
}

/// Leaves the alternate screen, disables raw mode and shows the cursor.
///
/// # Errors
///
/// Returns [`TickerboardError::Io`] if any restore step fails.
pub fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
