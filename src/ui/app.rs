//! Main TUI application state and logic

use crate::session::{LineKind, OutputLine, Session};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;

/// Which scrollable pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Students,
    Output,
}

impl FocusedPane {
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Students => FocusedPane::Output,
            FocusedPane::Output => FocusedPane::Students,
        }
    }
}

/// The main application state
pub struct App {
    /// The menu session driving the roster
    pub session: Session,

    /// Everything printed so far, prompts included
    pub transcript: Vec<OutputLine>,

    /// Line being typed
    pub input: String,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub students_scroll: usize,
    pub output_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether the status message reports a failure
    pub status_is_error: bool,
}

impl App {
    /// Create a new app around the given session
    pub fn new(session: Session) -> Self {
        App {
            session,
            transcript: Session::greeting(),
            input: String::new(),
            focused_pane: FocusedPane::Output,
            students_scroll: 0,
            output_scroll: usize::MAX,
            should_quit: false,
            status_message: String::from("Ready!"),
            status_is_error: false,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key_event(key);
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes, input line, status bar
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(3),
                Constraint::Length(1),
            ])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(65), Constraint::Percentage(35)])
            .split(main_chunks[0]);

        // Left column: Students (top) | Output (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(columns[0]);

        // Right column: Menu (top) | Statistics (bottom)
        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(9), Constraint::Min(0)])
            .split(columns[1]);

        super::panes::render_students_pane(
            frame,
            left_rows[0],
            self.session.roster().list(),
            self.focused_pane == FocusedPane::Students,
            &mut self.students_scroll,
        );

        super::panes::render_output_pane(
            frame,
            left_rows[1],
            &self.transcript,
            self.focused_pane == FocusedPane::Output,
            &mut self.output_scroll,
        );

        super::panes::render_menu_pane(frame, right_rows[0], self.session.active_choice());

        super::panes::render_stats_pane(
            frame,
            right_rows[1],
            &self.session.roster().statistics(),
        );

        super::panes::render_input_line(
            frame,
            main_chunks[1],
            &self.session.prompt(),
            &self.input,
        );

        super::panes::render_status_bar(
            frame,
            main_chunks[2],
            super::panes::StatusRenderData {
                message: &self.status_message,
                active: self.session.active_choice(),
                is_finished: self.session.is_finished(),
                is_error: self.status_is_error,
            },
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        // After Exit the farewell stays up until the next key
        if self.session.is_finished() {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Enter => self.submit(),
            KeyCode::Esc => {
                let lines = self.session.cancel();
                if lines.is_empty() {
                    self.set_status("Nothing to cancel", false);
                } else {
                    self.set_status("Cancelled", false);
                    self.append(lines);
                }
            }
            KeyCode::Backspace => {
                self.input.pop();
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Students => {
                    self.students_scroll = self.students_scroll.saturating_sub(1);
                }
                FocusedPane::Output => {
                    self.output_scroll = self.output_scroll.saturating_sub(1);
                }
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Students => {
                    self.students_scroll = self.students_scroll.saturating_add(1);
                }
                FocusedPane::Output => {
                    self.output_scroll = self.output_scroll.saturating_add(1);
                }
            },
            KeyCode::Char(c) => {
                if !key.modifiers.contains(KeyModifiers::CONTROL) {
                    self.input.push(c);
                }
            }
            _ => {}
        }
    }

    /// Send the typed line to the session
    fn submit(&mut self) {
        let line = std::mem::take(&mut self.input);
        let echo = format!("{}{}", self.session.prompt(), line);
        self.transcript.push(OutputLine::new(LineKind::Text, echo));

        let lines = self.session.submit(&line);

        if self.session.is_finished() {
            self.set_status("Goodbye! Press any key to leave", false);
        } else if let Some(error) = lines.iter().find(|l| l.kind == LineKind::Error) {
            self.set_status(error.text.clone(), true);
        } else if let Some(success) = lines.iter().find(|l| l.kind == LineKind::Success) {
            self.set_status(success.text.clone(), false);
        } else {
            self.set_status("Ready!", false);
        }

        self.append(lines);
    }

    fn append(&mut self, lines: Vec<OutputLine>) {
        self.transcript.extend(lines);
        // Auto-scroll output to bottom
        self.output_scroll = usize::MAX;
    }

    fn set_status(&mut self, message: impl Into<String>, is_error: bool) {
        self.status_message = message.into();
        self.status_is_error = is_error;
    }
}
