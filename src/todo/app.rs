use crate::todo::models::Task;
use crate::todo::store::TaskStore;
use chrono::NaiveDate;
use log::debug;

pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

// Define input modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    EditingText,
    EditingDueDate,
}

// Define the application structure
pub struct App {
    pub title: String,
    pub store: TaskStore,
    pub selected: Option<usize>,
    pub input_mode: InputMode,
    pub date_input: String,
    pub status: Option<String>,
}

impl App {
    pub fn new(title: &str) -> App {
        App {
            title: title.to_string(),
            store: TaskStore::new(),
            selected: None,
            input_mode: InputMode::Normal,
            date_input: String::new(),
            status: None,
        }
    }

    pub fn selected_task(&self) -> Option<&Task> {
        self.selected.and_then(|i| self.store.tasks().get(i))
    }

    /// Submits the draft. Blank text leaves everything as it was.
    pub fn submit_draft(&mut self) {
        if self.store.add_task().is_some() {
            // Select the newly added task
            self.selected = Some(self.store.len() - 1);
            self.status = None;
        }
    }

    pub fn toggle_selected(&mut self) {
        if let Some(id) = self.selected_task().map(|t| t.id) {
            self.store.toggle_complete(id);
        }
    }

    pub fn delete_selected(&mut self) {
        let Some(task_idx) = self.selected else {
            return;
        };
        let Some(id) = self.store.tasks().get(task_idx).map(|t| t.id) else {
            return;
        };
        self.store.remove_task(id);

        // Adjust the selection
        if self.store.is_empty() {
            self.selected = None;
        } else if task_idx >= self.store.len() {
            // If we removed the last task, select the new last task
            self.selected = Some(self.store.len() - 1);
        }
    }

    // Task navigation methods
    pub fn select_prev_task(&mut self) {
        if self.store.is_empty() {
            self.selected = None;
            return;
        }

        match self.selected {
            Some(current) if current > 0 => self.selected = Some(current - 1),
            None => self.selected = Some(self.store.len() - 1),
            _ => {} // Already at the first task
        }
    }

    pub fn select_next_task(&mut self) {
        if self.store.is_empty() {
            self.selected = None;
            return;
        }

        match self.selected {
            Some(current) if current < self.store.len() - 1 => self.selected = Some(current + 1),
            None => self.selected = Some(0),
            _ => {} // Already at the last task
        }
    }

    pub fn push_draft_char(&mut self, c: char) {
        let mut text = self.store.draft().text.clone();
        text.push(c);
        self.store.set_draft_text(text);
    }

    pub fn pop_draft_char(&mut self) {
        let mut text = self.store.draft().text.clone();
        text.pop();
        self.store.set_draft_text(text);
    }

    pub fn cycle_category(&mut self) {
        let next = self.store.draft().category.next();
        self.store.set_draft_category(next);
    }

    pub fn cycle_priority(&mut self) {
        let next = self.store.draft().priority.next();
        self.store.set_draft_priority(next);
    }

    /// Opens the due date popup, prefilled with the draft's current date.
    pub fn begin_due_date(&mut self) {
        self.date_input = self
            .store
            .draft()
            .due_date
            .map(|d| d.format(DATE_INPUT_FORMAT).to_string())
            .unwrap_or_default();
        self.status = None;
        self.input_mode = InputMode::EditingDueDate;
    }

    /// Applies the date typed into the popup.
    ///
    /// An empty input clears the date. Input that is not a valid
    /// `YYYY-MM-DD` date keeps the popup open with a status message.
    pub fn commit_due_date(&mut self) {
        let input = self.date_input.trim();
        let due_date = if input.is_empty() {
            None
        } else {
            match NaiveDate::parse_from_str(input, DATE_INPUT_FORMAT) {
                Ok(date) => Some(date),
                Err(err) => {
                    debug!("event=due_date_rejected reason={err}");
                    self.status = Some(format!("'{input}' is not a date (use YYYY-MM-DD)"));
                    return;
                }
            }
        };

        self.store.set_draft_due_date(due_date);
        self.date_input.clear();
        self.status = None;
        self.input_mode = InputMode::Normal;
    }

    pub fn cancel_due_date(&mut self) {
        self.date_input.clear();
        self.status = None;
        self.input_mode = InputMode::Normal;
    }
}
