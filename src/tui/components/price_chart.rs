//! Intraday line chart for a single symbol.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    symbols,
    text::Span,
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType},
};

use crate::mock::{CHART_POINTS, CHART_SYMBOL, chart_bounds};

/// Renders the price chart from the static sample points.
pub fn render(frame: &mut Frame, area: Rect) {
    let data: Vec<(f64, f64)> = CHART_POINTS
        .iter()
        .enumerate()
        .map(|(i, (_, price))| (i as f64, *price))
        .collect();

    let dataset = Dataset::default()
        .name("Price")
        .marker(symbols::Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(Color::Cyan))
        .data(&data);

    let [low, high] = chart_bounds();
    let x_labels: Vec<Span> = [0, CHART_POINTS.len() / 2, CHART_POINTS.len() - 1]
        .iter()
        .map(|&i| Span::raw(CHART_POINTS[i].0))
        .collect();
    let y_labels = vec![
        Span::raw(format!("{low:.2}")),
        Span::raw(format!("{:.2}", (low + high) / 2.0)),
        Span::raw(format!("{high:.2}")),
    ];

    let chart = Chart::new(vec![dataset])
        .block(
            Block::default()
                .title(format!(" {CHART_SYMBOL} Price Chart · Intraday "))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .x_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([0.0, (CHART_POINTS.len() - 1) as f64])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .style(Style::default().fg(Color::DarkGray))
                .bounds([low, high])
                .labels(y_labels),
        );

    frame.render_widget(chart, area);
}
