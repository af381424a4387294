//! Main UI rendering coordinator.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

use super::app::{App, Mode};
use super::components::{
    price_chart, search_bar, status_bar, stock_table, summary_cards, top_movers,
};

/// Renders the entire application UI.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();
    let banner_height = if app.error_message.is_some() { 3 } else { 0 };

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),             // Status bar
            Constraint::Length(3),             // Title + search
            Constraint::Length(4),             // Summary cards
            Constraint::Min(10),               // Chart + top movers
            Constraint::Length(banner_height), // Error banner
            Constraint::Length(14),            // Stock table
            Constraint::Length(1),             // Keybindings help
        ])
        .split(area);

    status_bar::render(frame, main_layout[0], app);
    search_bar::render(frame, main_layout[1], app);
    summary_cards::render(frame, main_layout[2], app);

    let middle = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(66), Constraint::Percentage(34)])
        .split(main_layout[3]);
    price_chart::render(frame, middle[0]);
    top_movers::render(frame, middle[1], app);

    if let Some(message) = &app.error_message {
        render_error_banner(frame, main_layout[4], message);
    }

    stock_table::render(frame, main_layout[5], app);
    render_keybindings(frame, main_layout[6], app);
}

/// Renders the error banner.
fn render_error_banner(frame: &mut Frame, area: Rect, message: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red));
    let para = Paragraph::new(message)
        .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        .block(block);
    frame.render_widget(para, area);
}

/// Renders the keybindings help line.
fn render_keybindings(frame: &mut Frame, area: Rect, app: &App) {
    let help = match app.mode {
        Mode::Normal => {
            "[/]search [x]clear [1-6]sort column [h/l]move [s]sort [r]refresh [Esc]dismiss [q]quit"
        }
        Mode::Insert => "type to filter  [Enter/Esc]done",
    };

    let para = Paragraph::new(help).style(Style::default().fg(Color::DarkGray));
    frame.render_widget(para, area);
}
