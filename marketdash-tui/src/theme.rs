//! Color tokens and style helpers.
//!
//! Neon-on-charcoal palette: cyan accent, green gains, pink losses.
//! Series lines use the core palette carried in each series buffer.

use ratatui::style::{Color, Modifier, Style};

pub const ACCENT: Color = Color::Rgb(0, 255, 255);
pub const POSITIVE: Color = Color::Rgb(0, 255, 128);
pub const NEGATIVE: Color = Color::Rgb(255, 20, 147);
pub const WARNING: Color = Color::Rgb(255, 140, 0);
pub const MUTED: Color = Color::Rgb(100, 149, 237);
pub const TEXT_SECONDARY: Color = Color::Rgb(170, 170, 170);

pub fn accent() -> Style {
    Style::default().fg(ACCENT)
}

pub fn positive() -> Style {
    Style::default().fg(POSITIVE)
}

pub fn negative() -> Style {
    Style::default().fg(NEGATIVE)
}

pub fn warning() -> Style {
    Style::default().fg(WARNING)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

pub fn secondary() -> Style {
    Style::default().fg(TEXT_SECONDARY)
}

/// Style for a price delta: green up, pink down.
pub fn delta(value: f64) -> Style {
    if value >= 0.0 {
        positive()
    } else {
        negative()
    }
}

/// Active filter-mode button vs the rest.
pub fn mode_button(active: bool) -> Style {
    if active {
        accent().add_modifier(Modifier::BOLD)
    } else {
        secondary()
    }
}

/// Legend entry: dimmed and crossed out when the series is hidden.
pub fn legend_entry(hidden: bool) -> Style {
    if hidden {
        muted().add_modifier(Modifier::CROSSED_OUT)
    } else {
        secondary()
    }
}

/// A series' own line color.
pub fn series_color((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(r, g, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_colors() {
        assert_eq!(delta(1.0), positive());
        assert_eq!(delta(0.0), positive());
        assert_eq!(delta(-0.5), negative());
    }

    #[test]
    fn hidden_legend_is_crossed_out() {
        let style = legend_entry(true);
        assert!(style.add_modifier.contains(Modifier::CROSSED_OUT));
    }
}
