//! Input line rendering

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the prompt and typed text, placing the cursor after the text
pub fn render_input_line(frame: &mut Frame, area: Rect, prompt: &str, buffer: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.secondary))
        .title(" Input ");

    let line = Line::from(vec![
        Span::styled(
            prompt,
            Style::default()
                .fg(DEFAULT_THEME.secondary)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(buffer, Style::default().fg(DEFAULT_THEME.fg)),
    ]);

    frame.render_widget(Paragraph::new(line).block(block), area);

    // Inside the left border, clamped to the right border
    let typed = (prompt.chars().count() + buffer.chars().count()) as u16;
    let max_x = area.x + area.width.saturating_sub(2);
    let x = (area.x + 1).saturating_add(typed).min(max_x);
    frame.set_cursor_position((x, area.y + 1));
}
