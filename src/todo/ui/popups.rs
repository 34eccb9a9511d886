use crate::todo::app::App;
use ratatui::{
    Frame,
    layout::{Alignment, Position, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph},
};

const POPUP_BG: Color = Color::Rgb(38, 38, 38);

/// Returns a rectangle of at most `width` x `height` centred in `area`.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    Rect::new(
        area.x + (area.width.saturating_sub(width)) / 2,
        area.y + (area.height.saturating_sub(height)) / 2,
        width.min(area.width),
        height.min(area.height),
    )
}

/// The part of `text` that fits in a one-line input `width` cells wide,
/// with room left for the cursor, and the cursor's offset from the left edge.
///
/// Long input scrolls so its tail stays visible.
pub fn visible_input_tail(text: &str, width: u16) -> (&str, u16) {
    let count = text.chars().count();
    let max_visible = width.saturating_sub(1) as usize;
    let skip = count.saturating_sub(max_visible);
    let tail = match text.char_indices().nth(skip) {
        Some((start, _)) => &text[start..],
        None => "",
    };
    (tail, (count - skip) as u16)
}

/// Draw the due date input popup
pub fn draw_due_date_popup(f: &mut Frame, app: &App, size: Rect) {
    let popup_area = centered_rect(size, 40, 5);

    f.render_widget(Clear, popup_area);

    let popup_block = Block::default()
        .title("Due Date (YYYY-MM-DD)")
        .borders(Borders::ALL)
        .style(Style::default().bg(POPUP_BG));

    f.render_widget(&popup_block, popup_area);

    let inner = popup_block.inner(popup_area);
    let input_area = Rect::new(inner.x, inner.y, inner.width, inner.height.min(1));

    let (visible, cursor_offset) = visible_input_tail(&app.date_input, input_area.width);
    let input = Paragraph::new(visible.to_string()).style(Style::default().bg(POPUP_BG));
    f.render_widget(input, input_area);

    if inner.height > 2 {
        let hint = Paragraph::new("Enter to set | empty clears | Esc to cancel")
            .style(Style::default().fg(Color::Gray).bg(POPUP_BG))
            .alignment(Alignment::Center);
        f.render_widget(hint, Rect::new(inner.x, inner.y + 2, inner.width, 1));
    }

    f.set_cursor_position(Position {
        x: input_area.x + cursor_offset,
        y: input_area.y,
    });
}
