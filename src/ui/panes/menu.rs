//! Main menu pane rendering

use super::utils::pane_block;
use crate::session::MenuChoice;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{List, ListItem},
    Frame,
};

/// Render the numbered menu, highlighting the operation in progress
pub fn render_menu_pane(frame: &mut Frame, area: Rect, active: Option<MenuChoice>) {
    let block = pane_block(" Menu ", false);

    let items: Vec<ListItem> = MenuChoice::ALL
        .iter()
        .map(|choice| {
            let is_active = active == Some(*choice);
            let (num_style, label_style) = if is_active {
                (
                    Style::default()
                        .bg(DEFAULT_THEME.secondary)
                        .fg(Color::Black)
                        .add_modifier(Modifier::BOLD),
                    Style::default()
                        .fg(DEFAULT_THEME.secondary)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                (
                    Style::default().fg(DEFAULT_THEME.number),
                    Style::default().fg(DEFAULT_THEME.fg),
                )
            };

            ListItem::new(Line::from(vec![
                Span::styled(format!(" {} ", choice.number()), num_style),
                Span::styled(format!(" {}", choice.label()), label_style),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}
