//! Terminal setup and teardown
//!
//! Initializes and restores the terminal, with a panic hook so a crash
//! never leaves the terminal in raw mode.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;

use crate::config::Settings;
use crate::models::MonthPeriod;
use crate::review::ReviewOutcome;
use crate::services::Classification;

use super::app::App;
use super::event::EventHandler;
use super::handler::handle_event;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal_impl();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    Ok(terminal)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    restore_terminal_impl()?;
    Ok(())
}

fn restore_terminal_impl() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the interactive review and return the user's decisions
pub fn run_review(
    classification: &Classification,
    period: MonthPeriod,
    settings: &Settings,
) -> Result<ReviewOutcome> {
    let mut app = App::new(classification, period, settings);

    // log output would draw over the alternate screen
    let log_level = log::max_level();
    log::set_max_level(log::LevelFilter::Off);

    let result = init_terminal().and_then(|mut terminal| {
        let result = event_loop(&mut terminal, &mut app);
        restore_terminal()?;
        result
    });
    log::set_max_level(log_level);
    result?;

    Ok(app.outcome())
}

fn event_loop(terminal: &mut Tui, app: &mut App) -> Result<()> {
    let events = EventHandler::new();

    while !app.should_quit {
        terminal.draw(|frame| super::views::render(frame, app))?;
        handle_event(app, events.next()?)?;
    }
    Ok(())
}
