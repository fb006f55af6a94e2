//! Price cards row — one bordered card per selected symbol.

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use marketdash_core::domain::CardSnapshot;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    if app.cards.is_empty() {
        let msg = Paragraph::new(Span::styled("No symbols selected.", theme::muted()));
        f.render_widget(msg, area);
        return;
    }

    let constraints: Vec<Constraint> = app
        .cards
        .iter()
        .map(|_| Constraint::Ratio(1, app.cards.len() as u32))
        .collect();
    let slots = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (card, slot) in app.cards.iter().zip(slots.iter()) {
        render_card(f, *slot, card);
    }
}

fn render_card(f: &mut Frame, area: Rect, card: &CardSnapshot) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::muted())
        .title(format!(" {} ", card.symbol))
        .title_style(theme::accent());

    let delta = card.delta();
    let arrow = if delta >= 0.0 { "▲" } else { "▼" };

    let lines = vec![
        Line::from(Span::styled(
            format!("{:.2}", card.current_price),
            theme::accent(),
        )),
        Line::from(vec![
            Span::styled(format!("{arrow} {:+.2}", delta), theme::delta(delta)),
            Span::styled(
                format!("  prev {:.2}", card.previous_price),
                theme::secondary(),
            ),
        ]),
    ];

    f.render_widget(Paragraph::new(lines).block(block), area);
}
