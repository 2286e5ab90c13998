//! # Terminal User Interface Module
//!
//! The mouse-driven front end, built with crossterm and ratatui. Each input
//! event produces at most one placement, which is fully applied before the
//! next event is read.
//!
//! ## Key Components
//! - **Terminal Management**: raw mode, alternate screen and mouse capture
//! - **Event Loop**: input polling and rendering at 10 FPS
//! - **Input Processing**: [`input`] for keys, [`mouse`] for pointer-to-grid mapping
//! - **Widget Rendering**: [`widgets`] laid out by [`layout`]

use crate::app::App;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::{io, time::Duration};

pub mod input;
pub mod layout;
pub mod mouse;
pub mod widgets;

/// Main entry point for the terminal user interface
///
/// Initializes the terminal, runs the event loop until the user quits and
/// restores the terminal even if the loop failed.
///
/// # Errors
/// Returns an error if terminal initialization, event handling, or cleanup fails
pub fn run(app: &mut App) -> io::Result<()> {
    let mut terminal = init_terminal()?;
    let result = run_loop(&mut terminal, app);
    restore_terminal(&mut terminal)?;
    result
}

fn run_loop(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        if app.should_quit {
            app.shutdown();
            return Ok(());
        }

        app.update();

        terminal.draw(|f| widgets::render(app, f))?;

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind == KeyEventKind::Press {
                        input::handle_key_press(app, key.code);
                    }
                }
                Event::Mouse(mouse) => {
                    let terminal_size = terminal.size()?;
                    let terminal_rect = Rect::new(0, 0, terminal_size.width, terminal_size.height);
                    input::handle_mouse_event(app, mouse.kind, mouse.column, mouse.row, terminal_rect);
                }
                _ => {}
            }
        }
    }
}

/// Initializes the terminal for raw mode operation
fn init_terminal() -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
    log::debug!("Entering raw mode");
    enable_raw_mode()?;
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    execute!(
        handle,
        EnterAlternateScreen,
        EnableMouseCapture,
        crossterm::cursor::Hide
    )?;
    Terminal::new(CrosstermBackend::new(stdout))
}

/// Restores the terminal to normal operation mode
fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>) -> io::Result<()> {
    terminal.show_cursor()?;
    disable_raw_mode()?;
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    execute!(
        handle,
        LeaveAlternateScreen,
        DisableMouseCapture,
        crossterm::cursor::Show
    )?;
    log::debug!("Terminal restored");
    Ok(())
}
