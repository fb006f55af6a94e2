//! Filter bar — mode buttons, the active range, and the series legend.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use marketdash_core::domain::local_datetime;
use marketdash_core::mode::FilterMode;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::muted())
        .title(" Filter ")
        .title_style(theme::secondary());
    let inner = block.inner(area);
    f.render_widget(block, area);

    let lines = vec![mode_line(app), legend_line(app)];
    f.render_widget(Paragraph::new(lines), inner);
}

fn mode_line(app: &AppState) -> Line<'static> {
    let mut spans: Vec<Span> = Vec::new();

    for (i, mode) in FilterMode::ALL.iter().enumerate() {
        spans.push(Span::styled(
            format!("[{}] {}", i + 1, mode.label()),
            theme::mode_button(app.filter.mode == *mode),
        ));
        spans.push(Span::raw("  "));
    }

    match app.filter.active_range() {
        Some(range) => {
            let from = format_day(range.from);
            let to = format_day(range.to);
            spans.push(Span::styled(format!("{from} → {to}"), theme::secondary()));
        }
        None => spans.push(Span::styled("streaming", theme::positive())),
    }

    Line::from(spans)
}

fn legend_line(app: &AppState) -> Line<'static> {
    let mut spans: Vec<Span> = Vec::new();

    for (i, symbol) in app.symbols.iter().enumerate() {
        let marker = if i == app.legend_cursor { "▸" } else { " " };
        spans.push(Span::styled(marker.to_string(), theme::accent()));

        let color = app
            .frame
            .series
            .get(i)
            .map(|s| s.color)
            .unwrap_or((170, 170, 170));
        spans.push(Span::styled(
            "●".to_string(),
            ratatui::style::Style::default().fg(theme::series_color(color)),
        ));
        spans.push(Span::styled(
            format!("{symbol} "),
            theme::legend_entry(app.hidden.contains(symbol)),
        ));
    }

    Line::from(spans)
}

fn format_day(timestamp_ms: i64) -> String {
    local_datetime(timestamp_ms)
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "?".to_string())
}
