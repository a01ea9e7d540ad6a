//! Statistics pane rendering

use super::utils::pane_block;
use crate::manager::Statistics;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Padding, Paragraph},
    Frame,
};

/// Render the live statistics summary
pub fn render_stats_pane(frame: &mut Frame, area: Rect, stats: &Statistics) {
    let block = pane_block(" Statistics ", false).padding(Padding::new(1, 0, 0, 0));

    let Some(average) = stats.average_gpa else {
        let paragraph = Paragraph::new("No data available.")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    };

    let label = Style::default().fg(DEFAULT_THEME.comment);
    let value = Style::default()
        .fg(DEFAULT_THEME.number)
        .add_modifier(Modifier::BOLD);

    let mut lines = vec![
        Line::from(vec![
            Span::styled("Total Students: ", label),
            Span::styled(stats.count.to_string(), value),
        ]),
        Line::from(vec![
            Span::styled("Average GPA:    ", label),
            Span::styled(format!("{:.2}", average), value),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "Course Distribution",
            Style::default()
                .fg(DEFAULT_THEME.heading)
                .add_modifier(Modifier::BOLD),
        )),
    ];

    for (course, count) in stats.course_distribution() {
        lines.push(Line::from(vec![
            Span::styled(format!("  {}: ", course), Style::default().fg(DEFAULT_THEME.fg)),
            Span::styled(count.to_string(), Style::default().fg(DEFAULT_THEME.number)),
        ]));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
