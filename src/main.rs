use log::info;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tasklist::config::Config;
use tasklist::error::AppError;
use tasklist::logging;
use tasklist::terminal::TerminalGuard;
use tasklist::todo::{self, App};

fn main() -> Result<(), AppError> {
    let config = Config::from_env()?;
    // Keep the handle alive until exit so buffered records get flushed
    let _logger = logging::init_logging(&config)?;
    info!("event=app_start title={:?}", config.title);

    // Terminal setup; the guard restores it on every exit path
    let guard = TerminalGuard::enter()?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    // Create app and run it
    let app = App::new(&config.title);
    let res = todo::run_app(&mut terminal, app);

    // Restore terminal
    drop(guard);

    res.map_err(AppError::from)
}
