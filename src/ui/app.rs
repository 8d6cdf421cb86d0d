//! Terminal display: a [`DisplaySink`] that paints the screen with ratatui

use crate::display::{DisplayError, DisplaySink, ErrorReport};
use crate::interpreter::engine::Breakpoint;
use crate::memory::grid::Grid;
use crate::ui::panes::{self, LogEntry, RunState, CANVAS_HEIGHT, CANVAS_WIDTH};
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io::{self, Stdout};
use std::time::{Duration, Instant};

/// Minimum time between two repaints while the program is running
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// How long `await_quit` waits for a key before repainting
const QUIT_POLL: Duration = Duration::from_millis(50);

/// Everything the panes need to draw one frame
struct View {
    screen: Grid,
    commits: usize,
    log: Vec<LogEntry>,
    log_scroll: usize,
    state: RunState,
    status_message: String,
}

impl View {
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes on top, status bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        // Canvas (left) | Diagnostics (right)
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(CANVAS_WIDTH), Constraint::Min(0)])
            .split(main_chunks[0]);

        let canvas_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(CANVAS_HEIGHT), Constraint::Min(0)])
            .split(columns[0]);

        panes::render_canvas_pane(frame, canvas_rows[0], &self.screen);
        panes::render_log_pane(frame, columns[1], &self.log, &mut self.log_scroll);
        panes::render_status_bar(
            frame,
            main_chunks[1],
            &self.status_message,
            self.commits,
            self.state,
        );
    }
}

/// Display sink backed by a ratatui terminal
pub struct TerminalDisplay<B: Backend> {
    terminal: Terminal<B>,
    view: View,
    /// Read crossterm key events (off for test backends)
    key_input: bool,
    quit: bool,
    last_draw: Option<Instant>,
}

impl<B: Backend> TerminalDisplay<B> {
    pub fn new(terminal: Terminal<B>) -> Self {
        TerminalDisplay {
            terminal,
            view: View {
                screen: Grid::initial_screen(),
                commits: 0,
                log: Vec::new(),
                log_scroll: 0,
                state: RunState::Running,
                status_message: String::from("Running..."),
            },
            key_input: true,
            quit: false,
            last_draw: None,
        }
    }

    /// Never read key events; `await_quit` returns after one repaint
    pub fn without_key_input(mut self) -> Self {
        self.key_input = false;
        self
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<B> {
        &mut self.terminal
    }

    /// The screen as last committed
    pub fn screen(&self) -> &Grid {
        &self.view.screen
    }

    pub fn log(&self) -> &[LogEntry] {
        &self.view.log
    }

    pub fn draw(&mut self) -> Result<(), DisplayError> {
        let view = &mut self.view;
        self.terminal.draw(|f| view.render(f))?;
        self.last_draw = Some(Instant::now());
        Ok(())
    }

    fn draw_if_due(&mut self) -> Result<(), DisplayError> {
        let due = self
            .last_draw
            .map_or(true, |at| at.elapsed() >= FRAME_INTERVAL);
        if due {
            self.draw()?;
        }
        Ok(())
    }

    /// Drain pending key events without blocking
    fn poll_keys(&mut self, timeout: Duration) -> Result<(), DisplayError> {
        if !self.key_input {
            return Ok(());
        }
        while event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key_event(key);
                }
            }
            if self.quit {
                break;
            }
        }
        Ok(())
    }

    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.quit = true;
            }
            KeyCode::Up => {
                self.view.log_scroll = self.view.log_scroll.saturating_sub(1);
            }
            KeyCode::Down => {
                self.view.log_scroll = self.view.log_scroll.saturating_add(1);
            }
            KeyCode::End => {
                self.view.log_scroll = usize::MAX;
            }
            KeyCode::Home => {
                self.view.log_scroll = 0;
            }
            _ => {}
        }
    }
}

impl<B: Backend> DisplaySink for TerminalDisplay<B> {
    fn commit(&mut self, frame: &Grid) -> Result<(), DisplayError> {
        self.view.screen = *frame;
        self.view.commits += 1;
        self.poll_keys(Duration::ZERO)?;
        self.draw_if_due()
    }

    fn await_quit(&mut self) -> Result<(), DisplayError> {
        self.view.state = RunState::Finished;
        self.view.status_message = String::from("Finished. Press Esc or q to exit");
        loop {
            self.draw()?;
            if self.quit || !self.key_input {
                return Ok(());
            }
            self.poll_keys(QUIT_POLL)?;
        }
    }

    fn on_error(&mut self, report: &ErrorReport) {
        self.view.state = RunState::Failed;
        self.view.status_message = report.kind.to_string();
        self.view.log.push(LogEntry::Error(report.clone()));
        self.view.log_scroll = usize::MAX;
        if let Err(err) = self.draw() {
            tracing::warn!("failed to draw error report: {}", err);
        }
    }

    fn breakpoint(&mut self, report: &Breakpoint) {
        self.view.log.push(LogEntry::Breakpoint(*report));
        self.view.log_scroll = usize::MAX;
        if let Err(err) = self.draw_if_due() {
            tracing::warn!("failed to draw breakpoint report: {}", err);
        }
    }

    fn quit_requested(&mut self) -> bool {
        if let Err(err) = self.poll_keys(Duration::ZERO) {
            tracing::warn!("failed to read key events: {}", err);
        }
        self.quit
    }
}

/// Put the real terminal into raw mode on the alternate screen
pub fn init_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>, DisplayError> {
    enable_raw_mode()
        .map_err(|err| DisplayError::Unavailable(format!("cannot enter raw mode: {err}")))?;

    let terminal = enter_alternate_screen();
    if terminal.is_err() {
        // Leave the shell usable even though the canvas never came up
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
    terminal
}

fn enter_alternate_screen() -> Result<Terminal<CrosstermBackend<Stdout>>, DisplayError> {
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

/// Undo [`init_terminal`]
pub fn restore_terminal(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
) -> Result<(), DisplayError> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
