//! Terminal UI for Strictly Noughts.

mod app;
mod input;
mod ui;

pub use app::{App, Control};
pub use input::move_cursor;

use crate::session::Session;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::{error, info, instrument, warn};

/// Runs the terminal UI until the player quits.
///
/// The session must already have its players. Logging should go to a file
/// while this runs so it does not tear the screen.
#[instrument(skip_all)]
pub fn run_tui(session: Session) -> Result<()> {
    let mut app = App::new(session)?;

    info!("Starting terminal UI");
    enable_raw_mode()?;
    let _guard = TerminalGuard::new(restore_terminal);
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_loop(&mut terminal, &mut app);
    terminal.show_cursor()?;

    if let Err(err) = &res {
        error!(error = ?err, "Terminal UI loop failed");
    }
    info!("Terminal UI closed");
    res
}

fn run_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
            && app.handle_key(key.code) == Control::Quit
        {
            return Ok(());
        }
    }
}

/// Runs `restore` when dropped, so every exit path after raw mode is
/// enabled hands the terminal back.
struct TerminalGuard<F: FnMut()> {
    restore: F,
}

impl<F: FnMut()> TerminalGuard<F> {
    fn new(restore: F) -> Self {
        Self { restore }
    }
}

impl<F: FnMut()> Drop for TerminalGuard<F> {
    fn drop(&mut self) {
        (self.restore)();
    }
}

fn restore_terminal() {
    if let Err(err) = disable_raw_mode() {
        warn!(error = %err, "Failed to disable raw mode");
    }
    if let Err(err) = execute!(io::stdout(), LeaveAlternateScreen) {
        warn!(error = %err, "Failed to leave alternate screen");
    }
}
