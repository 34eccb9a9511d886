//! Raw mode and alternate screen handling for the real terminal.

use log::warn;
use ratatui::crossterm::{
    cursor::Show,
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use std::io;

/// Puts the terminal back to normal when dropped, including while a panic
/// unwinds or when setup fails halfway.
pub struct TerminalGuard {
    restore: fn() -> io::Result<()>,
}

impl TerminalGuard {
    /// Enables raw mode and switches to the alternate screen.
    pub fn enter() -> io::Result<TerminalGuard> {
        enable_raw_mode()?;
        // Created before the screen switch so a failure there still restores
        let guard = TerminalGuard {
            restore: restore_terminal,
        };
        execute!(io::stdout(), EnterAlternateScreen)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(err) = (self.restore)() {
            warn!("event=terminal_restore_failed error={err}");
        }
    }
}

fn restore_terminal() -> io::Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, Show)
}
