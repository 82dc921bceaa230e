//! Terminal user interface for the commu boards
//!
//! Screens mirror the web app's pages: a board picker, one generic list
//! screen shared by every board, and a post detail view.

pub mod app;
pub mod screens;
pub mod ui;

pub use app::{App, Screen};

use std::io;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::info;

use crate::config::Config;
use crate::models::BoardKind;

/// Run the TUI, optionally opening straight into a board.
pub fn run_tui(config: &Config, start_board: Option<BoardKind>) -> Result<()> {
    info!("Starting TUI interface");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run the application
    let mut app = App::new(config.clone(), start_board)?;
    let result = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(ref err) = result {
        info!("TUI exited with error: {}", err);
    }

    result
}
