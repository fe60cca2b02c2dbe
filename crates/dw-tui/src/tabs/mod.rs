//! Tab definitions, trait, and tab bar rendering.

pub mod companion;
pub mod dice;

use std::time::Instant;

use ratatui::prelude::*;
use serde::Deserialize;

/// Identifies which tab is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TabId {
    /// Dice roller.
    Dice,
    /// Mental health companion form.
    Companion,
}

impl TabId {
    /// All tab IDs in display order.
    pub const ALL: [TabId; 2] = [TabId::Dice, TabId::Companion];

    /// Parse a tab name from a string.
    pub fn from_name(name: &str) -> Option<TabId> {
        match name.to_lowercase().as_str() {
            "dice" | "roll" => Some(TabId::Dice),
            "companion" | "wellness" | "mental-health" => Some(TabId::Companion),
            _ => None,
        }
    }

    /// Tab bar label.
    pub fn title(self) -> &'static str {
        match self {
            TabId::Dice => "[1]Dice",
            TabId::Companion => "[2]Companion",
        }
    }

    /// Index of this tab in the tab bar.
    pub fn index(self) -> usize {
        TabId::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    /// Get the next tab (wrapping).
    pub fn next(self) -> TabId {
        let idx = (self.index() + 1) % TabId::ALL.len();
        TabId::ALL[idx]
    }

    /// Get the previous tab (wrapping).
    pub fn prev(self) -> TabId {
        let idx = if self.index() == 0 {
            TabId::ALL.len() - 1
        } else {
            self.index() - 1
        };
        TabId::ALL[idx]
    }
}

/// Whether a tab consumes keyboard input or uses vim-like navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Single-key commands. Top-level handles tab switching.
    VimNav,
    /// Text input: the tab has its own input fields. Most keys go to the tab.
    TextInput,
}

/// Trait that each tab screen implements.
pub trait Tab {
    /// Return the input mode for event routing.
    fn input_mode(&self) -> InputMode;

    /// Handle a key event. Return `true` if the app should quit.
    fn handle_key(&mut self, key: crossterm::event::KeyEvent) -> bool;

    /// Handle a mouse event.
    fn handle_mouse(&mut self, _mouse: crossterm::event::MouseEvent) {}

    /// Advance any running transition to `now`.
    fn tick(&mut self, _now: Instant) {}

    /// Draw the tab content into the given area.
    fn draw(&self, frame: &mut Frame, area: Rect);

    /// Return context-sensitive status bar text.
    fn status_hint(&self) -> &str;
}

/// Draw the tab bar.
pub fn draw_tab_bar(frame: &mut Frame, active: TabId, area: Rect) {
    let mut spans = Vec::new();

    for (i, tab) in TabId::ALL.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" | ", Style::default().fg(Color::DarkGray)));
        }

        let style = if *tab == active {
            Style::default().fg(Color::White).bold()
        } else {
            Style::default().fg(Color::DarkGray)
        };
        spans.push(Span::styled(tab.title(), style));
    }

    let paragraph = ratatui::widgets::Paragraph::new(Line::from(spans));
    frame.render_widget(paragraph, area);
}

/// Hit-test the tab bar for a click at column `col`.
pub fn tab_bar_hit_test(col: u16) -> Option<TabId> {
    let divider_len = 3u16;
    let mut x = 0u16;
    for tab in TabId::ALL {
        let end_x = x + tab.title().len() as u16;
        if col >= x && col < end_x {
            return Some(tab);
        }
        x = end_x + divider_len;
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_name() {
        assert_eq!(TabId::from_name("Dice"), Some(TabId::Dice));
        assert_eq!(TabId::from_name("wellness"), Some(TabId::Companion));
        assert_eq!(TabId::from_name("graph"), None);
    }

    #[test]
    fn next_and_prev_wrap() {
        assert_eq!(TabId::Dice.next(), TabId::Companion);
        assert_eq!(TabId::Companion.next(), TabId::Dice);
        assert_eq!(TabId::Dice.prev(), TabId::Companion);
    }

    #[test]
    fn hit_test_tab_bar() {
        // "[1]Dice | [2]Companion"
        assert_eq!(tab_bar_hit_test(0), Some(TabId::Dice));
        assert_eq!(tab_bar_hit_test(6), Some(TabId::Dice));
        assert_eq!(tab_bar_hit_test(8), None);
        assert_eq!(tab_bar_hit_test(10), Some(TabId::Companion));
        assert_eq!(tab_bar_hit_test(21), Some(TabId::Companion));
        assert_eq!(tab_bar_hit_test(22), None);
    }
}
