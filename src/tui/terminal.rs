//! Terminal setup and teardown
//!
//! Handles entering and leaving raw mode, including a panic hook that
//! restores the terminal on crash.

use std::io::{self, Stdout};
use std::panic;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, DisableBracketedPaste, EnableBracketedPaste, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::debug;

use super::app::{App, EntryOutcome};
use super::handler::handle_key;

/// Type alias for our terminal
pub type Tui = Terminal<CrosstermBackend<Stdout>>;

const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Initialize the terminal for TUI mode
pub fn init_terminal() -> Result<Tui> {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;

    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

/// Restore the terminal to its original state
pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), DisableBracketedPaste, LeaveAlternateScreen)?;
    Ok(())
}

/// Run an amount entry session until the user confirms or cancels
pub fn run_amount_entry(label: &str, initial: Option<f64>) -> Result<EntryOutcome> {
    let mut terminal = init_terminal()?;
    let mut app = App::new(label, initial);

    let result = event_loop(&mut terminal, &mut app);
    restore_terminal()?;
    result?;

    let outcome = app.outcome.unwrap_or(EntryOutcome::Cancelled);
    debug!(?outcome, "amount entry finished");
    Ok(outcome)
}

fn event_loop(terminal: &mut Tui, app: &mut App) -> Result<()> {
    while !app.should_quit() {
        terminal.draw(|frame| super::view::render(frame, app))?;

        if !event::poll(POLL_INTERVAL)? {
            continue;
        }
        match event::read()? {
            Event::Key(key) => handle_key(app, key),
            Event::Paste(text) => app.paste(&text),
            // Resize redraws on the next pass
            _ => {}
        }
    }
    Ok(())
}
