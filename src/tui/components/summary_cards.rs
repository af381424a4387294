//! Market overview cards.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::tui::app::App;

/// Renders Total Stocks, Gainers, Losers and Avg Change.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let summary = app.dashboard.summary();

    let average_color = if summary.average_change_percent > 0.0 {
        Color::Green
    } else if summary.average_change_percent < 0.0 {
        Color::Red
    } else {
        Color::White
    };

    let cards = [
        ("Total Stocks", summary.total.to_string(), Color::White, "Active symbols"),
        ("Gainers", summary.gainers.to_string(), Color::Green, "Stocks up today"),
        ("Losers", summary.losers.to_string(), Color::Red, "Stocks down today"),
        ("Avg Change", summary.average_label(), average_color, "Market average"),
    ];

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    for ((title, value, color, caption), column) in cards.into_iter().zip(columns.iter()) {
        let block = Block::default()
            .title(format!(" {title} "))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));

        let lines = vec![
            Line::from(Span::styled(
                value,
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(caption, Style::default().fg(Color::DarkGray))),
        ];

        frame.render_widget(Paragraph::new(lines).block(block), *column);
    }
}
