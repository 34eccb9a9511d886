use crate::todo::app::{App, InputMode};
use crate::todo::ui::popups::{draw_due_date_popup, visible_input_tail};
use crate::todo::ui::task_formatter::{
    badge, category_color, format_due_date, format_task, priority_color,
};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

const EMPTY_LIST_HINT: &str = "No tasks yet. Press 'a' to add one.";

/// Draws the overall UI: title, draft form, task rows, status and help
/// lines, and the due date popup when it is open.
pub fn draw_ui(f: &mut Frame, app: &App) {
    let size = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // Title
            Constraint::Length(3), // Draft text input
            Constraint::Length(1), // Draft fields
            Constraint::Length(1), // Spacer
            Constraint::Min(1),    // Tasks
            Constraint::Length(1), // Status
            Constraint::Length(1), // Help
        ])
        .split(size);

    draw_title(f, app, chunks[0]);
    draw_draft_input(f, app, chunks[1]);
    draw_draft_fields(f, app, chunks[2]);
    draw_tasks(f, app, chunks[4]);

    if let Some(status) = &app.status {
        let status = Paragraph::new(status.clone())
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Center);
        f.render_widget(status, chunks[5]);
    }

    let help_text = match app.input_mode {
        InputMode::Normal => {
            "'a' to type a task | Enter to add | 'c'/'p' category/priority | 'D' due date | 'j'/'k' to navigate | space to toggle | 'dd' to delete | 'q' to quit"
        }
        InputMode::EditingText => "Type the task | Enter to add | Esc to stop typing",
        InputMode::EditingDueDate => "Enter date as YYYY-MM-DD | Enter to confirm | Esc to cancel",
    };
    let help = Paragraph::new(help_text)
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center);
    f.render_widget(help, chunks[6]);

    if app.input_mode == InputMode::EditingDueDate {
        draw_due_date_popup(f, app, size);
    }
}

fn draw_title(f: &mut Frame, app: &App, area: Rect) {
    let summary = format!(
        "{}  ({}/{} done)",
        app.title,
        app.store.completed_count(),
        app.store.len()
    );
    let title = Paragraph::new(summary)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center);
    f.render_widget(title, area);
}

fn draw_draft_input(f: &mut Frame, app: &App, area: Rect) {
    let editing = app.input_mode == InputMode::EditingText;
    let border_style = if editing {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::Blue)
    };
    let block = Block::default()
        .title("New Task")
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);

    let draft_text = &app.store.draft().text;
    let (visible, cursor_offset) = visible_input_tail(draft_text, inner.width);
    let input = if draft_text.is_empty() && !editing {
        Paragraph::new("Add a new task...").style(Style::default().fg(Color::DarkGray))
    } else {
        Paragraph::new(visible.to_string())
    };
    f.render_widget(input.block(block), area);

    if editing {
        f.set_cursor_position(Position {
            x: inner.x + cursor_offset,
            y: inner.y,
        });
    }
}

fn draw_draft_fields(f: &mut Frame, app: &App, area: Rect) {
    let draft = app.store.draft();
    let label = Style::default().fg(Color::Gray);
    let due = match draft.due_date {
        Some(date) => Span::styled(format_due_date(date), Style::default().fg(Color::Cyan)),
        None => Span::styled("none", Style::default().fg(Color::DarkGray)),
    };

    let line = Line::from(vec![
        Span::styled(" Category: ", label),
        badge(draft.category.as_str(), category_color(draft.category)),
        Span::styled("  Priority: ", label),
        badge(draft.priority.as_str(), priority_color(draft.priority)),
        Span::styled("  Due: ", label),
        due,
    ]);
    f.render_widget(Paragraph::new(line), area);
}

fn draw_tasks(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .borders(Borders::TOP)
        .border_style(Style::default().fg(Color::Blue));

    if app.store.is_empty() {
        let hint = Paragraph::new(EMPTY_LIST_HINT)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(block);
        f.render_widget(hint, area);
        return;
    }

    let items: Vec<ListItem> = app
        .store
        .tasks()
        .iter()
        .map(|task| ListItem::new(format_task(task)))
        .collect();

    let list = List::new(items).block(block).highlight_style(
        Style::default()
            .bg(Color::Rgb(38, 38, 38))
            .add_modifier(Modifier::BOLD),
    );

    let mut state = ListState::default().with_selected(app.selected);
    f.render_stateful_widget(list, area, &mut state);
}
