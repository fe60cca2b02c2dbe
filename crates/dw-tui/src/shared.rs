//! Shared utilities for TUI views: layout helpers, colours, and popups.

use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

/// Create a centered rectangle as a percentage of the given area.
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// Convert an RGB triple to a terminal colour.
pub fn rgb((r, g, b): (u8, u8, u8)) -> Color {
    Color::Rgb(r, g, b)
}

/// Blend from `from` towards `to` by `t` in `[0, 1]`.
pub fn blend(from: (u8, u8, u8), to: (u8, u8, u8), t: f64) -> Color {
    let t = t.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| -> u8 {
        let v = f64::from(a) + (f64::from(b) - f64::from(a)) * t;
        v.round().clamp(0.0, 255.0) as u8
    };
    Color::Rgb(mix(from.0, to.0), mix(from.1, to.1), mix(from.2, to.2))
}

/// Draw a global help popup overlay.
pub fn draw_help_popup(frame: &mut Frame) {
    let area = centered_rect(60, 70, frame.area());

    let help_text = vec![
        Line::from("Keyboard Shortcuts").style(Style::default().bold()),
        Line::from(""),
        Line::from("Tabs:"),
        Line::from("  1-2 / Tab   Switch tab (dice)"),
        Line::from("  Ctrl+1..2   Switch tab (any tab)"),
        Line::from(""),
        Line::from("Dice:"),
        Line::from("  \u{2190} / \u{2192}     One die / two dice"),
        Line::from("  Enter/Space Roll (or click anywhere)"),
        Line::from("  q           Quit"),
        Line::from(""),
        Line::from("Companion:"),
        Line::from("  Tab / \u{2193}     Next field"),
        Line::from("  S-Tab / \u{2191}   Previous field"),
        Line::from("  \u{2190} / \u{2192}     Change mood or diet goal"),
        Line::from("  Enter       Get recommendations / reset"),
        Line::from("  Esc         Reset the form"),
        Line::from(""),
        Line::from("Help:"),
        Line::from("  F1          Toggle this help"),
        Line::from("  ?           Toggle this help (dice)"),
        Line::from("  Esc         Close this help"),
        Line::from(""),
        Line::from("  Ctrl+C      Quit"),
    ];

    let popup = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .style(Style::default().fg(Color::White));

    frame.render_widget(Clear, area);
    frame.render_widget(popup, area);
}
