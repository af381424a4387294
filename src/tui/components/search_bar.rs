//! Title and search box.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::tui::app::{App, Mode};

/// Width of the search box including borders.
const SEARCH_WIDTH: u16 = 34;

/// Renders the dashboard title and the search box.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(SEARCH_WIDTH)])
        .split(area);

    let title = vec![
        Line::from(Span::styled(
            "Stock Market Dashboard",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Real-time stock prices and market data",
            Style::default().fg(Color::DarkGray),
        )),
    ];
    frame.render_widget(Paragraph::new(title), columns[0]);

    let is_editing = app.mode == Mode::Insert;
    let border_style = if is_editing {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let block = Block::default()
        .title(" Search ")
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(columns[1]);

    let content = if app.search_input.is_empty() && !is_editing {
        Span::styled("Search stocks... [/]", Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(app.search_input.as_str())
    };
    frame.render_widget(Paragraph::new(Line::from(content)).block(block), columns[1]);

    if is_editing {
        let x = inner
            .x
            .saturating_add(app.search_input.cursor_column())
            .min(inner.right().saturating_sub(1));
        frame.set_cursor_position((x, inner.y));
    }
}
