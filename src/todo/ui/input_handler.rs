use crate::todo::app::{App, InputMode};
use log::info;
use ratatui::{
    Terminal,
    backend::Backend,
    crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use std::io;

/// Runs the main event loop for the application.
pub fn run_app<B: Backend>(terminal: &mut Terminal<B>, mut app: App) -> io::Result<()> {
    let mut last_key: Option<KeyCode> = None;

    loop {
        terminal.draw(|f| crate::todo::ui::render::draw_ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            if key.kind != KeyEventKind::Press {
                continue;
            }
            if handle_key(&mut app, key, &mut last_key) {
                info!(
                    "event=app_quit tasks={} completed={}",
                    app.store.len(),
                    app.store.completed_count()
                );
                return Ok(());
            }
        }
    }
}

/// Applies one key press to the app. Returns `true` when the user quits.
///
/// `last_key` carries the first half of the `dd` delete chord between calls.
pub fn handle_key(app: &mut App, key: KeyEvent, last_key: &mut Option<KeyCode>) -> bool {
    // Ctrl+C quits from every mode
    if key.code == KeyCode::Char('c') && key.modifiers == KeyModifiers::CONTROL {
        return true;
    }

    match app.input_mode {
        InputMode::Normal => {
            // Double-tap 'd' deletes the selected task
            if key.modifiers.is_empty() && key.code == KeyCode::Char('d') {
                if let Some(KeyCode::Char('d')) = last_key {
                    *last_key = None;
                    app.delete_selected();
                } else {
                    *last_key = Some(KeyCode::Char('d'));
                }
                return false;
            }

            *last_key = None;
            match key.code {
                KeyCode::Char('q') => return true,
                KeyCode::Char('a') | KeyCode::Char('i') => app.input_mode = InputMode::EditingText,
                KeyCode::Enter => app.submit_draft(),
                KeyCode::Char('c') => app.cycle_category(),
                KeyCode::Char('p') => app.cycle_priority(),
                KeyCode::Char('D') => app.begin_due_date(),
                KeyCode::Char('j') | KeyCode::Down => app.select_next_task(),
                KeyCode::Char('k') | KeyCode::Up => app.select_prev_task(),
                KeyCode::Char(' ') | KeyCode::Char('x') => app.toggle_selected(),
                _ => {}
            }
        }
        InputMode::EditingText => match key.code {
            // Stay in the mode so several tasks can be typed in a row
            KeyCode::Enter => app.submit_draft(),
            KeyCode::Esc => app.input_mode = InputMode::Normal,
            // Other control chords are not text
            KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => {}
            KeyCode::Char(c) => app.push_draft_char(c),
            KeyCode::Backspace => app.pop_draft_char(),
            _ => {}
        },
        InputMode::EditingDueDate => match key.code {
            KeyCode::Enter => app.commit_due_date(),
            KeyCode::Esc => app.cancel_due_date(),
            KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => {}
            KeyCode::Char(c) => app.date_input.push(c),
            KeyCode::Backspace => {
                app.date_input.pop();
            }
            _ => {}
        },
    }
    false
}
