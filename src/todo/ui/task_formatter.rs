use crate::todo::models::{Category, Priority, Task};
use chrono::NaiveDate;
use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};

pub const DUE_DATE_DISPLAY_FORMAT: &str = "%b %-d, %Y";

pub fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::High => Color::Red,
        Priority::Medium => Color::Yellow,
        Priority::Low => Color::Green,
    }
}

pub fn category_color(category: Category) -> Color {
    match category {
        Category::Personal => Color::Magenta,
        Category::Work => Color::Blue,
        Category::Shopping => Color::LightMagenta,
    }
}

pub fn format_due_date(date: NaiveDate) -> String {
    date.format(DUE_DATE_DISPLAY_FORMAT).to_string()
}

/// A coloured badge such as ` work ` on a blue background.
pub fn badge(label: &str, color: Color) -> Span<'static> {
    Span::styled(
        format!(" {label} "),
        Style::default()
            .fg(Color::Black)
            .bg(color)
            .add_modifier(Modifier::BOLD),
    )
}

/// Formats one task row: checkbox, text, category and priority badges, and
/// the due date when there is one. Completed tasks are dimmed and crossed out.
pub fn format_task(task: &Task) -> Line<'static> {
    let checkbox = if task.completed { "[x] " } else { "[ ] " };
    let text_style = if task.completed {
        Style::default()
            .fg(Color::DarkGray)
            .add_modifier(Modifier::CROSSED_OUT)
    } else {
        Style::default()
    };

    let mut spans = vec![
        Span::raw(" "),
        Span::raw(checkbox),
        Span::styled(task.text.clone(), text_style),
        Span::raw("  "),
        badge(task.category.as_str(), category_color(task.category)),
        Span::raw(" "),
        badge(task.priority.as_str(), priority_color(task.priority)),
    ];

    if let Some(date) = task.due_date {
        spans.push(Span::raw(" "));
        spans.push(Span::styled(
            format!("due {}", format_due_date(date)),
            Style::default().fg(Color::Cyan),
        ));
    }

    let line = Line::from(spans);
    if task.completed {
        line.style(Style::default().add_modifier(Modifier::DIM))
    } else {
        line
    }
}
