//! Status bar component.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::tui::app::{App, Mode};

/// Renders the status bar.
pub fn render(frame: &mut Frame, area: Rect, app: &App) {
    let source_color = if app.source_label == "Live" {
        Color::Green
    } else {
        Color::Yellow
    };

    let load_span = if app.loading {
        Span::styled(
            format!(" {} Loading... ", app.spinner()),
            Style::default().fg(Color::Yellow),
        )
    } else if let Some(at) = app.last_updated {
        Span::styled(
            format!(" Updated {}s ago ", at.elapsed().as_secs()),
            Style::default().fg(Color::White),
        )
    } else {
        Span::styled(" No data ", Style::default().fg(Color::Red))
    };

    let mode_span = match app.mode {
        Mode::Normal => Span::styled(" NORMAL ", Style::default().fg(Color::White)),
        Mode::Insert => Span::styled(
            " SEARCH ",
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ),
    };

    let sort = app.dashboard.sort();
    let sort_info = format!(
        " sort: {} {} ",
        sort.field.label(),
        sort.direction.arrow()
    );

    let line = Line::from(vec![
        Span::styled(
            format!(" {} ", app.source_label),
            Style::default().fg(Color::Black).bg(source_color),
        ),
        Span::raw("│"),
        load_span,
        Span::raw("│"),
        mode_span,
        Span::raw("│"),
        Span::raw(format!(
            "{:>width$}",
            sort_info,
            width = area.width.saturating_sub(40) as usize
        )),
    ]);

    let para = Paragraph::new(line).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(para, area);
}
