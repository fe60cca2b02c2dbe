//! Terminal setup, teardown, and main event loop.

use std::io;
use std::time::{Duration, Instant};

use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    MouseButton, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use crate::app::TuiApp;
use crate::tabs::{self, InputMode, TabId};

/// Launch the TUI application, waking every `tick_rate` to advance transitions.
pub fn run(mut app: TuiApp, tick_rate: Duration) -> Result<(), String> {
    enable_raw_mode().map_err(|e| format!("terminal error: {e}"))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .map_err(|e| format!("terminal error: {e}"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| format!("terminal error: {e}"))?;

    tracing::info!(tab = ?app.active_tab, "tui started");
    let result = run_loop(&mut terminal, &mut app, tick_rate);

    disable_raw_mode().ok();
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .ok();
    terminal.show_cursor().ok();

    tracing::info!("tui stopped");
    result
}

/// Main event loop.
fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut TuiApp,
    tick_rate: Duration,
) -> Result<(), String> {
    loop {
        app.tick(Instant::now());

        terminal
            .draw(|frame| draw(frame, app))
            .map_err(|e| format!("draw error: {e}"))?;

        if app.should_quit {
            return Ok(());
        }

        if event::poll(tick_rate).map_err(|e| format!("event error: {e}"))? {
            let event = event::read().map_err(|e| format!("event error: {e}"))?;
            handle_event(app, event);
        }
    }
}

/// Handle a crossterm event.
fn handle_event(app: &mut TuiApp, event: Event) {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(app, key),
        Event::Mouse(mouse) => handle_mouse(app, mouse),
        _ => {}
    }
}

/// Handle keyboard input with mode-aware tab switching.
fn handle_key(app: &mut TuiApp, key: crossterm::event::KeyEvent) {
    // Ctrl+C always quits
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    // Ctrl+number switches tabs from any mode
    if key.modifiers.contains(KeyModifiers::CONTROL)
        && let Some(tab) = ctrl_number_to_tab(key.code)
    {
        app.switch_tab(tab);
        return;
    }

    if key.code == KeyCode::F(1) {
        app.show_help = !app.show_help;
        return;
    }

    // Esc closes the help popup before reaching any tab
    if key.code == KeyCode::Esc && app.show_help {
        app.show_help = false;
        return;
    }

    match app.active_input_mode() {
        InputMode::VimNav => {
            match key.code {
                KeyCode::Char('q') => {
                    app.should_quit = true;
                    return;
                }
                KeyCode::Char('?') => {
                    app.show_help = !app.show_help;
                    return;
                }
                KeyCode::Tab => {
                    app.switch_tab(app.active_tab.next());
                    return;
                }
                KeyCode::BackTab => {
                    app.switch_tab(app.active_tab.prev());
                    return;
                }
                _ => {}
            }
            if let KeyCode::Char(c) = key.code
                && let Some(idx) = c.to_digit(10)
                && (1..=TabId::ALL.len() as u32).contains(&idx)
            {
                app.switch_tab(TabId::ALL[idx as usize - 1]);
                return;
            }
            if app.active_tab_mut().handle_key(key) {
                app.should_quit = true;
            }
        }
        InputMode::TextInput => {
            if app.active_tab_mut().handle_key(key) {
                app.should_quit = true;
            }
        }
    }
}

/// Map Ctrl+digit to a tab.
fn ctrl_number_to_tab(code: KeyCode) -> Option<TabId> {
    match code {
        KeyCode::Char('1') => Some(TabId::Dice),
        KeyCode::Char('2') => Some(TabId::Companion),
        _ => None,
    }
}

/// Handle mouse events.
fn handle_mouse(app: &mut TuiApp, mouse: crossterm::event::MouseEvent) {
    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
        if mouse.row == 0
            && let Some(tab) = tabs::tab_bar_hit_test(mouse.column)
        {
            app.switch_tab(tab);
            return;
        }
        app.active_tab_mut().handle_mouse(mouse);
    }
}

/// Main draw function.
fn draw(frame: &mut Frame, app: &TuiApp) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Tab bar
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    tabs::draw_tab_bar(frame, app.active_tab, chunks[0]);

    app.active_tab_ref().draw(frame, chunks[1]);

    let hint = app.active_tab_ref().status_hint();
    let status = Paragraph::new(hint).style(Style::default().fg(Color::Black).bg(Color::White));
    frame.render_widget(status, chunks[2]);

    if app.show_help {
        crate::shared::draw_help_popup(frame);
    }
}
