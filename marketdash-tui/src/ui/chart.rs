//! Main chart — rolling live frame or day-bucketed history.
//!
//! Live mode plots the bounded frame directly. Historical modes filter
//! the tick history by the active range, bucket it into one point per
//! day, and break each series at gap days so missing data never draws
//! as an interpolated line.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, Chart, Dataset, GraphType, Paragraph};
use ratatui::Frame;

use marketdash_core::filter::{bucketize_by_day, filter_ticks};

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    if let Some(err) = &app.load_error {
        let lines = vec![
            Line::from(""),
            Line::from(Span::styled("Could not load tick data:", theme::negative())),
            Line::from(Span::styled(err.clone(), theme::muted())),
        ];
        f.render_widget(Paragraph::new(lines), area);
        return;
    }

    match app.filter.active_range() {
        None => render_live(f, area, app),
        Some(range) => render_history(f, area, app, range),
    }
}

fn render_live(f: &mut Frame, area: Rect, app: &AppState) {
    if app.frame.is_empty() {
        render_banner(f, area, "Waiting for first tick...");
        return;
    }

    // One contiguous segment per visible series.
    let mut plots: Vec<(String, (u8, u8, u8), Vec<Vec<(f64, f64)>>)> = Vec::new();
    for series in &app.frame.series {
        if series.hidden {
            continue;
        }
        let points: Vec<(f64, f64)> = series
            .points
            .iter()
            .enumerate()
            .map(|(i, &p)| (i as f64, p))
            .collect();
        plots.push((series.label.clone(), series.color, vec![points]));
    }

    render_plots(f, area, &plots, &app.frame.labels, " Live ");
}

fn render_history(
    f: &mut Frame,
    area: Rect,
    app: &AppState,
    range: marketdash_core::domain::DateRange,
) {
    let visible = app.visible_symbols();
    let filtered = filter_ticks(&app.ticks, Some(&range), &visible);
    if filtered.is_empty() {
        render_banner(f, area, "No data for the selected range.");
        return;
    }

    let table = bucketize_by_day(&filtered, &visible);

    let mut plots: Vec<(String, (u8, u8, u8), Vec<Vec<(f64, f64)>>)> = Vec::new();
    for (symbol, points) in &table.series {
        let color = app
            .symbols
            .iter()
            .position(|s| s == symbol)
            .and_then(|i| app.frame.series.get(i))
            .map(|s| s.color)
            .unwrap_or((170, 170, 170));
        plots.push((symbol.clone(), color, segments(points)));
    }

    render_plots(f, area, &plots, &table.labels, " History ");
}

/// Split a gappy series into contiguous (x, y) runs. Each `None` ends
/// the current run; single points still render as dots.
pub fn segments(points: &[Option<f64>]) -> Vec<Vec<(f64, f64)>> {
    let mut out = Vec::new();
    let mut run: Vec<(f64, f64)> = Vec::new();
    for (i, point) in points.iter().enumerate() {
        match point {
            Some(value) => run.push((i as f64, *value)),
            None => {
                if !run.is_empty() {
                    out.push(std::mem::take(&mut run));
                }
            }
        }
    }
    if !run.is_empty() {
        out.push(run);
    }
    out
}

fn render_plots(
    f: &mut Frame,
    area: Rect,
    plots: &[(String, (u8, u8, u8), Vec<Vec<(f64, f64)>>)],
    labels: &[String],
    title: &str,
) {
    let all_points = plots
        .iter()
        .flat_map(|(_, _, segs)| segs.iter().flatten());
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;
    let mut max_x: f64 = 0.0;
    for &(x, y) in all_points {
        min_y = min_y.min(y);
        max_y = max_y.max(y);
        max_x = max_x.max(x);
    }
    if !min_y.is_finite() {
        render_banner(f, area, "All series hidden.");
        return;
    }

    let padding = (max_y - min_y).abs() * 0.05;
    let y_min = min_y - padding;
    let y_max = max_y + padding;

    let mut datasets = Vec::new();
    for (label, color, segs) in plots {
        let style = Style::default().fg(theme::series_color(*color));
        for (i, seg) in segs.iter().enumerate() {
            let mut dataset = Dataset::default()
                .marker(symbols::Marker::Braille)
                .style(style)
                .graph_type(GraphType::Line)
                .data(seg);
            // Name only the first segment so the legend stays one entry.
            if i == 0 {
                dataset = dataset.name(label.clone());
            }
            datasets.push(dataset);
        }
    }

    let x_labels = match (labels.first(), labels.last()) {
        (Some(first), Some(last)) if labels.len() > 1 => vec![
            Span::styled(first.clone(), theme::muted()),
            Span::styled(last.clone(), theme::muted()),
        ],
        (Some(only), _) => vec![Span::styled(only.clone(), theme::muted())],
        _ => Vec::new(),
    };

    let chart = Chart::new(datasets)
        .x_axis(
            Axis::default()
                .title(Span::styled(title.trim().to_string(), theme::muted()))
                .style(theme::muted())
                .bounds([0.0, max_x.max(1.0)])
                .labels(x_labels),
        )
        .y_axis(
            Axis::default()
                .title(Span::styled("Price", theme::muted()))
                .style(theme::muted())
                .bounds([y_min, y_max])
                .labels(vec![
                    Span::styled(format!("{y_min:.2}"), theme::muted()),
                    Span::styled(format!("{y_max:.2}"), theme::muted()),
                ]),
        );

    f.render_widget(chart, area);
}

fn render_banner(f: &mut Frame, area: Rect, message: &str) {
    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(message.to_string(), theme::muted())),
    ];
    f.render_widget(Paragraph::new(lines), area);
}
