//! Dice roller tab.

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use dw_dice::{DiceBoard, DiceRoller, DiceSelection, DieFace};

use crate::transition::Transition;

use super::{InputMode, Tab};

/// Glyph shown on a die while it is rolling.
const ROLLING_GLYPH: &str = "\u{1F3C0}";

/// Spinner frames shown beside the dice while rolling.
const SPIN_FRAMES: [&str; 4] = ["\u{25D0}", "\u{25D3}", "\u{25D1}", "\u{25D2}"];

/// Width and height of one drawn die.
const DIE_WIDTH: u16 = 11;
const DIE_HEIGHT: u16 = 5;

/// Dice roller tab state.
pub struct DiceTab {
    /// The dice on the table.
    board: DiceBoard,
    /// The running roll transition, if any.
    rolling: Option<Transition>,
    /// How long a roll animates.
    roll_duration: Duration,
}

impl DiceTab {
    /// Create a dice tab.
    pub fn new(roller: DiceRoller, selection: DiceSelection, roll_duration: Duration) -> Self {
        Self {
            board: DiceBoard::new(roller).with_selection(selection),
            rolling: None,
            roll_duration,
        }
    }

    /// The dice board.
    pub fn board(&self) -> &DiceBoard {
        &self.board
    }

    /// Start a roll at `now`. Ignored while a roll is in flight.
    pub fn roll(&mut self, now: Instant) {
        if self.board.begin_roll() {
            self.rolling = Some(Transition::start(now, self.roll_duration));
        }
    }

    fn spinner(&self) -> &'static str {
        let progress = self
            .rolling
            .map(|t| t.progress(Instant::now()))
            .unwrap_or(0.0);
        let turns = (progress * 3.0 * SPIN_FRAMES.len() as f64) as usize;
        SPIN_FRAMES[turns % SPIN_FRAMES.len()]
    }
}

/// Lines drawn inside one die: pip rows, or the placeholder while rolling.
fn die_lines(face: Option<DieFace>) -> Vec<Line<'static>> {
    match face {
        Some(face) => {
            let rows = face.pip_rows();
            let pad = (3 - rows.len()) / 2;
            let mut lines: Vec<Line<'static>> = vec![Line::from(""); pad];
            for &pips in rows {
                let text = vec!["\u{25CF}"; usize::from(pips)].join(" ");
                lines.push(Line::from(text).centered());
            }
            lines
        }
        None => vec![
            Line::from(""),
            Line::from(Span::styled(
                ROLLING_GLYPH,
                Style::default().add_modifier(Modifier::DIM),
            ))
            .centered(),
        ],
    }
}

impl Tab for DiceTab {
    fn input_mode(&self) -> InputMode {
        InputMode::VimNav
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => self.board.select(DiceSelection::One),
            KeyCode::Right | KeyCode::Char('l') => self.board.select(DiceSelection::Two),
            KeyCode::Enter | KeyCode::Char(' ') => self.roll(Instant::now()),
            _ => {}
        }
        false
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) {
        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            self.roll(Instant::now());
        }
    }

    fn tick(&mut self, now: Instant) {
        if let Some(t) = self.rolling
            && t.is_done(now)
        {
            self.rolling = None;
            self.board.complete_roll();
        }
    }

    fn draw(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(" Dice Roller ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Magenta));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        if inner.height < DIE_HEIGHT + 6 || inner.width < 2 * DIE_WIDTH + 4 {
            frame.render_widget(Paragraph::new("Window too small"), inner);
            return;
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Selector
                Constraint::Length(1),
                Constraint::Length(DIE_HEIGHT), // Dice
                Constraint::Length(1),
                Constraint::Length(1), // Total or spinner
                Constraint::Length(1), // Prompt
                Constraint::Min(0),
            ])
            .split(inner);

        // Selector buttons
        let selected = self.board.selection();
        let buttons: Vec<Span<'static>> = DiceSelection::ALL
            .iter()
            .flat_map(|s| {
                let style = if *s == selected {
                    Style::default().fg(Color::Black).bg(Color::Yellow).bold()
                } else {
                    Style::default().fg(Color::White)
                };
                vec![Span::styled(format!(" {} ", s.label()), style), Span::raw("  ")]
            })
            .collect();
        frame.render_widget(Paragraph::new(Line::from(buttons)).centered(), chunks[0]);

        // Dice
        let count = selected.count() as u16;
        let row_width = count * DIE_WIDTH + (count - 1) * 2;
        let start_x = chunks[2].x + chunks[2].width.saturating_sub(row_width) / 2;
        let faces = self.board.visible_faces();
        for i in 0..selected.count() {
            let x = start_x + i as u16 * (DIE_WIDTH + 2);
            let die_area = Rect::new(x, chunks[2].y, DIE_WIDTH, DIE_HEIGHT);
            let face = faces.and_then(|f| f.get(i).copied());
            let die = Paragraph::new(die_lines(face)).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_type(BorderType::Rounded)
                    .border_style(Style::default().fg(Color::White)),
            );
            frame.render_widget(die, die_area);
        }

        // Total while resolved, spinner while rolling
        let status = match self.board.visible_total() {
            Some(total) => Line::from(vec![
                Span::styled("Total: ", Style::default().fg(Color::DarkGray)),
                Span::styled(total.to_string(), Style::default().fg(Color::Green).bold()),
            ]),
            None => Line::from(Span::styled(
                format!("{} rolling...", self.spinner()),
                Style::default().fg(Color::Yellow),
            )),
        };
        frame.render_widget(Paragraph::new(status).centered(), chunks[4]);

        let prompt = Paragraph::new(Line::from(Span::styled(
            "Tap anywhere to roll!",
            Style::default().fg(Color::Green),
        )))
        .centered();
        frame.render_widget(prompt, chunks[5]);
    }

    fn status_hint(&self) -> &str {
        "\u{2190}/\u{2192}:1 or 2 dice  Enter/Space/click:roll  Tab:switch  ?:help  q:quit"
    }
}
