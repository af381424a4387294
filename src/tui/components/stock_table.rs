//! Sortable, filterable quote table.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Rect},
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Cell, Row, Table},
};

use crate::dashboard::SortField;
use crate::format::{
    format_currency, format_optional_market_cap, format_percent, format_signed_currency,
    format_volume,
};
use crate::models::QuoteRecord;
use crate::tui::app::App;

/// Placeholder rows shown while loading.
const SKELETON_ROWS: usize = 8;

const WIDTHS: [Constraint; 7] = [
    Constraint::Length(13),
    Constraint::Min(16),
    Constraint::Length(12),
    Constraint::Length(12),
    Constraint::Length(14),
    Constraint::Length(12),
    Constraint::Length(11),
];

/// Renders the stock table, or skeleton rows while loading.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Stock Prices ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));

    let rows: Vec<Row> = if app.loading {
        skeleton_rows()
    } else {
        app.dashboard.visible().into_iter().map(quote_row).collect()
    };

    let table = Table::new(rows, WIDTHS)
        .header(header_row(app).bottom_margin(1))
        .block(block)
        .column_spacing(1);

    frame.render_widget(table, area);
}

fn header_row(app: &App) -> Row<'static> {
    let sort = app.dashboard.sort();
    let mut cells: Vec<Cell> = SortField::ALL
        .iter()
        .enumerate()
        .map(|(i, field)| {
            let arrow = if *field == sort.field {
                sort.direction.arrow()
            } else {
                ""
            };
            let mut style = Style::default().add_modifier(Modifier::BOLD);
            if i == app.column_cursor {
                style = style.fg(Color::Cyan).add_modifier(Modifier::UNDERLINED);
            }
            let text = format!("[{}] {} {arrow}", i + 1, field.label());
            Cell::from(aligned(text, i >= 2)).style(style)
        })
        .collect();
    cells.push(
        Cell::from(aligned("Market Cap".to_string(), true))
            .style(Style::default().add_modifier(Modifier::BOLD)),
    );
    Row::new(cells)
}

fn quote_row(quote: &QuoteRecord) -> Row<'static> {
    Row::new(vec![
        Cell::from(quote.symbol.clone()).style(Style::default().add_modifier(Modifier::BOLD)),
        Cell::from(quote.name.clone()),
        Cell::from(aligned(format_currency(quote.price), true)),
        Cell::from(aligned(format_signed_currency(quote.change), true))
            .style(Style::default().fg(change_color(quote.change))),
        Cell::from(aligned(format_percent(quote.change_percent), true))
            .style(Style::default().fg(change_color(quote.change_percent))),
        Cell::from(aligned(format_volume(quote.volume), true))
            .style(Style::default().fg(Color::DarkGray)),
        Cell::from(aligned(format_optional_market_cap(quote.market_cap), true))
            .style(Style::default().fg(Color::DarkGray)),
    ])
}

fn skeleton_rows() -> Vec<Row<'static>> {
    let bar = |n: usize| Cell::from("░".repeat(n)).style(Style::default().fg(Color::DarkGray));
    (0..SKELETON_ROWS)
        .map(|_| Row::new(vec![bar(5), bar(14), bar(8), bar(6), bar(7), bar(6), bar(8)]))
        .collect()
}

fn change_color(value: f64) -> Color {
    if value > 0.0 {
        Color::Green
    } else if value < 0.0 {
        Color::Red
    } else {
        Color::White
    }
}

fn aligned(text: String, right: bool) -> Line<'static> {
    let alignment = if right {
        Alignment::Right
    } else {
        Alignment::Left
    };
    Line::from(text).alignment(alignment)
}
