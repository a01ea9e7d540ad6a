//! Output transcript pane rendering

use super::utils::{clamp_scroll, pane_block, visible_rows};
use crate::session::{LineKind, OutputLine};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    widgets::{List, ListItem, Padding, Paragraph},
    Frame,
};

fn line_style(kind: LineKind) -> Style {
    match kind {
        LineKind::Heading => Style::default()
            .fg(DEFAULT_THEME.heading)
            .add_modifier(Modifier::BOLD),
        LineKind::Text => Style::default().fg(DEFAULT_THEME.fg),
        LineKind::Record => Style::default().fg(DEFAULT_THEME.primary),
        LineKind::Success => Style::default().fg(DEFAULT_THEME.success),
        LineKind::Error => Style::default().fg(DEFAULT_THEME.error),
        LineKind::Rule => Style::default().fg(DEFAULT_THEME.comment),
    }
}

/// Render the transcript pane
pub fn render_output_pane(
    frame: &mut Frame,
    area: Rect,
    transcript: &[OutputLine],
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let block = pane_block(" Output ", is_focused);

    if transcript.is_empty() {
        let paragraph = Paragraph::new("(no output)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let visible_height = visible_rows(area, 0);
    clamp_scroll(scroll_offset, transcript.len(), visible_height);

    let items: Vec<ListItem> = transcript
        .iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|line| ListItem::new(line.text.as_str()).style(line_style(line.kind)))
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
