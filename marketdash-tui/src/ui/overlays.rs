//! Overlay widgets — keyboard help.

use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use crate::theme;
use crate::ui::centered_rect;

pub fn render_help(f: &mut Frame, area: Rect) {
    let popup = centered_rect(55, 60, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Help ")
        .title_style(theme::accent().add_modifier(Modifier::BOLD));

    let text = vec![
        Line::from(""),
        Line::from(Span::styled("Filter modes", theme::accent())),
        Line::from(Span::styled("  1  trailing 7 days", theme::muted())),
        Line::from(Span::styled("  2  trailing month", theme::muted())),
        Line::from(Span::styled("  3  custom range (h/l shifts by a day)", theme::muted())),
        Line::from(Span::styled("  4  live streaming view", theme::muted())),
        Line::from(""),
        Line::from(Span::styled("Legend", theme::accent())),
        Line::from(Span::styled("  j/k    move the cursor", theme::muted())),
        Line::from(Span::styled("  space  hide/show the series", theme::muted())),
        Line::from(""),
        Line::from(Span::styled("  q  quit (preferences are saved)", theme::muted())),
        Line::from(""),
        Line::from(Span::styled("Press Esc to close.", theme::secondary())),
    ];

    let para = Paragraph::new(text).block(block).wrap(Wrap { trim: true });
    f.render_widget(para, popup);
}
