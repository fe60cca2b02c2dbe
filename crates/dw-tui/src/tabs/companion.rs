//! Mental health companion tab: profile form, result view, and reset.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Wrap};

use dw_wellness::{CompanionSession, Field, Phase};

use crate::shared::{blend, rgb};
use crate::transition::Transition;

use super::{InputMode, Tab};

/// Colour the result text fades in from.
const FADE_FROM: (u8, u8, u8) = (0x30, 0x30, 0x30);

/// Colour the result text fades in to.
const FADE_TO: (u8, u8, u8) = (0xFF, 0xFF, 0xFF);

/// Companion tab state.
pub struct CompanionTab {
    session: CompanionSession,
    focus: Field,
    reveal: Option<Transition>,
    reveal_duration: Duration,
}

impl CompanionTab {
    /// Create an empty companion form.
    pub fn new(reveal_duration: Duration) -> Self {
        Self {
            session: CompanionSession::new(),
            focus: Field::Name,
            reveal: None,
            reveal_duration,
        }
    }

    /// The underlying session.
    pub fn session(&self) -> &CompanionSession {
        &self.session
    }

    /// The focused form field.
    pub fn focus(&self) -> Field {
        self.focus
    }

    /// Submit the form; on success start the reveal at `now`.
    pub fn submit(&mut self, now: Instant) {
        if self.session.submit().is_ok() {
            self.reveal = Some(Transition::start(now, self.reveal_duration));
        }
    }

    /// Clear the form and return focus to the first field.
    pub fn reset(&mut self) {
        self.session.reset();
        self.focus = Field::Name;
        self.reveal = None;
    }

    fn handle_editing_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.submit(Instant::now()),
            KeyCode::Tab | KeyCode::Down => self.focus = self.focus.next(),
            KeyCode::BackTab | KeyCode::Up => self.focus = self.focus.prev(),
            KeyCode::Left if self.focus.is_choice() => self.session.cycle_choice(self.focus, false),
            KeyCode::Right if self.focus.is_choice() => self.session.cycle_choice(self.focus, true),
            KeyCode::Backspace => self.session.backspace(self.focus),
            KeyCode::Esc => self.reset(),
            KeyCode::Char(c) => {
                self.session.push_char(self.focus, c);
            }
            _ => {}
        }
    }

    fn draw_field(&self, frame: &mut Frame, field: Field, area: Rect, accent: Color) {
        let focused = field == self.focus;
        let border = if focused {
            BorderType::Thick
        } else {
            BorderType::Rounded
        };
        let value = match self.session.field_text(field) {
            Some(text) => Span::styled(text.to_string(), Style::default().fg(Color::White)),
            None => Span::styled(field.placeholder(), Style::default().fg(Color::DarkGray)),
        };
        let line = if field.is_choice() {
            Line::from(vec![
                Span::styled("\u{25C2} ", Style::default().fg(accent)),
                value,
                Span::styled(" \u{25B8}", Style::default().fg(accent)),
            ])
        } else {
            Line::from(value)
        };
        let title_style = if focused {
            Style::default().fg(Color::White).bold()
        } else {
            Style::default().fg(Color::Gray)
        };
        let input = Paragraph::new(line).block(
            Block::default()
                .title(Span::styled(field.prompt(), title_style))
                .borders(Borders::ALL)
                .border_type(border)
                .border_style(Style::default().fg(accent)),
        );
        frame.render_widget(input, area);

        if focused && !field.is_choice() {
            let typed = typed_width(self.session.field_text(field));
            let cursor_x = (area.x + 1).saturating_add(typed);
            if cursor_x < area.x + area.width.saturating_sub(1) {
                frame.set_cursor_position(Position::new(cursor_x, area.y + 1));
            }
        }
    }

    fn draw_form(&self, frame: &mut Frame, area: Rect, accent: Color) {
        let mut constraints = vec![Constraint::Length(3); Field::ALL.len()];
        constraints.push(Constraint::Length(1));
        constraints.push(Constraint::Length(1));
        constraints.push(Constraint::Min(0));
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        for (i, field) in Field::ALL.iter().enumerate() {
            self.draw_field(frame, *field, rows[i], accent);
        }

        let button = Paragraph::new(Line::from(Span::styled(
            " Get Recommendations ",
            Style::default().fg(Color::Black).bg(accent).bold(),
        )))
        .centered();
        frame.render_widget(button, rows[Field::ALL.len() + 1]);
    }

    fn draw_result(&self, frame: &mut Frame, area: Rect, accent: Color) {
        let Some(rec) = self.session.recommendation() else {
            return;
        };
        let progress = self
            .reveal
            .map_or(1.0, |t| t.progress(Instant::now()));
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(1)])
            .split(area);

        let output = Paragraph::new(rec.text.as_str())
            .style(Style::default().fg(blend(FADE_FROM, FADE_TO, progress)))
            .wrap(Wrap { trim: false })
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Thick)
                    .border_style(Style::default().fg(accent)),
            );
        frame.render_widget(output, chunks[0]);

        let button = Paragraph::new(Line::from(Span::styled(
            " Reset ",
            Style::default().fg(Color::Black).bg(accent).bold(),
        )))
        .centered();
        frame.render_widget(button, chunks[1]);
    }
}

/// Columns taken by typed text, one per character.
fn typed_width(text: Option<&str>) -> u16 {
    let chars = text.map_or(0, |t| t.chars().count());
    u16::try_from(chars).unwrap_or(u16::MAX)
}

impl Tab for CompanionTab {
    fn input_mode(&self) -> InputMode {
        InputMode::TextInput
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match self.session.phase() {
            Phase::Editing => self.handle_editing_key(key),
            Phase::Result => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char('r')) {
                    self.reset();
                }
            }
        }
        false
    }

    fn tick(&mut self, now: Instant) {
        if self.reveal.is_some_and(|t| t.is_done(now)) {
            self.reveal = None;
        }
    }

    fn draw(&self, frame: &mut Frame, area: Rect) {
        let accent = rgb(self.session.accent());
        let block = Block::default()
            .title(format!(" {} ", self.session.title()))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(accent));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Min(0)])
            .split(inner);

        if let Some(err) = self.session.error() {
            let line = Paragraph::new(Span::styled(
                err.to_string(),
                Style::default().fg(Color::Red).bold(),
            ))
            .centered();
            frame.render_widget(line, chunks[0]);
        }

        match self.session.phase() {
            Phase::Editing => self.draw_form(frame, chunks[1], accent),
            Phase::Result => self.draw_result(frame, chunks[1], accent),
        }
    }

    fn status_hint(&self) -> &str {
        match self.session.phase() {
            Phase::Editing => {
                "Tab/\u{2191}\u{2193}:field  \u{2190}/\u{2192}:choose  Enter:submit  Esc:reset  Ctrl+1:dice  F1:help  Ctrl+C:quit"
            }
            Phase::Result => "Enter/Esc/r:reset  Ctrl+1:dice  F1:help  Ctrl+C:quit",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use dw_wellness::{DietGoal, Mood, ValidationError};
    use ratatui::backend::TestBackend;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn type_str(tab: &mut CompanionTab, s: &str) {
        for c in s.chars() {
            tab.handle_key(key(KeyCode::Char(c)));
        }
    }

    fn fill(tab: &mut CompanionTab) {
        type_str(tab, "Alice");
        tab.handle_key(key(KeyCode::Tab));
        type_str(tab, "20");
        tab.handle_key(key(KeyCode::Tab));
        tab.handle_key(key(KeyCode::Right)); // Happy
        tab.handle_key(key(KeyCode::Right)); // Sad
        tab.handle_key(key(KeyCode::Tab));
        type_str(tab, "5");
        tab.handle_key(key(KeyCode::Tab));
        tab.handle_key(key(KeyCode::Right)); // Weight Loss
        tab.handle_key(key(KeyCode::Right)); // Muscle Gain
    }

    fn render(tab: &CompanionTab) -> String {
        let mut terminal = ratatui::Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| tab.draw(f, f.area())).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    #[test]
    fn keyboard_fills_form() {
        let mut t = CompanionTab::new(Duration::from_millis(500));
        fill(&mut t);
        let form = t.session().form();
        assert_eq!(form.name, "Alice");
        assert_eq!(form.age, "20");
        assert_eq!(form.mood, Some(Mood::Sad));
        assert_eq!(form.stress_level, "5");
        assert_eq!(form.diet_goal, Some(DietGoal::MuscleGain));
    }

    #[test]
    fn enter_on_blank_form_shows_error() {
        let mut t = CompanionTab::new(Duration::from_millis(500));
        t.handle_key(key(KeyCode::Enter));
        assert_eq!(t.session().error(), Some(ValidationError::MissingFields));
        assert!(render(&t).contains("Please fill out all fields."));
    }

    #[test]
    fn submit_then_reset() {
        let mut t = CompanionTab::new(Duration::from_millis(500));
        fill(&mut t);
        t.handle_key(key(KeyCode::Enter));
        assert_eq!(t.session().phase(), Phase::Result);
        let screen = render(&t);
        assert!(screen.contains("Your Virtual Mental Health Result"));
        assert!(screen.contains("Hello, Alice!"));

        t.handle_key(key(KeyCode::Char('r')));
        assert_eq!(t.session().phase(), Phase::Editing);
        assert!(t.session().form().is_blank());
        assert_eq!(t.focus(), Field::Name);
    }

    #[test]
    fn reveal_finishes_on_tick() {
        let mut t = CompanionTab::new(Duration::from_millis(500));
        fill(&mut t);
        let t0 = Instant::now();
        t.submit(t0);
        assert!(t.reveal.is_some());
        t.tick(t0 + Duration::from_millis(600));
        assert!(t.reveal.is_none());
    }

    #[test]
    fn letters_ignored_in_age() {
        let mut t = CompanionTab::new(Duration::from_millis(500));
        t.handle_key(key(KeyCode::Down));
        assert_eq!(t.focus(), Field::Age);
        type_str(&mut t, "a1b2");
        assert_eq!(t.session().form().age, "12");
    }

    #[test]
    fn cursor_counts_characters_not_bytes() {
        assert_eq!(typed_width(None), 0);
        assert_eq!(typed_width(Some("Zoë")), 3);

        let mut t = CompanionTab::new(Duration::from_millis(500));
        type_str(&mut t, "Zoë");
        let mut terminal = ratatui::Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| t.draw(f, f.area())).unwrap();
        let cursor = terminal.get_cursor_position().unwrap();
        // Outer border and field border: text starts at column 2.
        assert_eq!(cursor.x, 2 + 3);
    }

    #[test]
    fn placeholders_render_when_empty() {
        let t = CompanionTab::new(Duration::from_millis(500));
        let screen = render(&t);
        assert!(screen.contains("Virtual Mental Health Companion"));
        assert!(screen.contains("Select your mood"));
        assert!(screen.contains("Get Recommendations"));
    }
}
