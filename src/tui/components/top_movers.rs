//! Biggest movers list.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
};

use crate::format::{format_currency, format_percent};
use crate::tui::app::App;

/// Renders the top movers by absolute percent change.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Top Movers ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let items: Vec<ListItem> = app
        .dashboard
        .top_movers()
        .into_iter()
        .map(|quote| {
            let badge_style = if quote.is_gainer() {
                Style::default().fg(Color::Black).bg(Color::Green)
            } else {
                Style::default().fg(Color::White).bg(Color::Red)
            };
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:<6}", quote.symbol),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("{:>12} ", format_currency(quote.price)),
                    Style::default().fg(Color::DarkGray),
                ),
                Span::styled(format!(" {} ", format_percent(quote.change_percent)), badge_style),
            ]))
        })
        .collect();

    let list = if items.is_empty() {
        List::new(vec![ListItem::new(Span::styled(
            "No movers",
            Style::default().fg(Color::DarkGray),
        ))])
    } else {
        List::new(items)
    };

    frame.render_widget(list.block(block), area);
}
