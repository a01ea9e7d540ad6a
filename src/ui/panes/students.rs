//! Students table pane rendering
//!
//! One row per record in insertion order, with a fixed header row. The
//! scroll offset is clamped so the last page stays full.

use super::utils::{clamp_scroll, pane_block, visible_rows};
use crate::record::Student;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    widgets::{Cell, Paragraph, Row, Table},
    Frame,
};

const COLUMN_WIDTHS: [Constraint; 6] = [
    Constraint::Length(4),
    Constraint::Percentage(24),
    Constraint::Percentage(30),
    Constraint::Length(4),
    Constraint::Percentage(26),
    Constraint::Length(5),
];

/// Render the students table
pub fn render_students_pane(
    frame: &mut Frame,
    area: Rect,
    students: &[Student],
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let title = format!(" Students ({}) ", students.len());
    let block = pane_block(&title, is_focused);

    if students.is_empty() {
        let paragraph = Paragraph::new("No students found in the system.")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    // One row reserved for the header
    let visible_height = visible_rows(area, 1);
    clamp_scroll(scroll_offset, students.len(), visible_height);

    let header = Row::new(["ID", "Name", "Email", "Age", "Course", "GPA"]).style(
        Style::default()
            .bg(DEFAULT_THEME.header_bg)
            .fg(DEFAULT_THEME.fg)
            .add_modifier(Modifier::BOLD),
    );

    let rows: Vec<Row> = students
        .iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|student| {
            Row::new(vec![
                Cell::from(student.id().to_string())
                    .style(Style::default().fg(DEFAULT_THEME.number)),
                Cell::from(student.name()),
                Cell::from(student.email()).style(Style::default().fg(DEFAULT_THEME.primary)),
                Cell::from(student.age().to_string()),
                Cell::from(student.course()),
                Cell::from(format!("{:.2}", student.gpa()))
                    .style(Style::default().fg(DEFAULT_THEME.number)),
            ])
            .style(Style::default().fg(DEFAULT_THEME.fg))
        })
        .collect();

    let table = Table::new(rows, COLUMN_WIDTHS)
        .header(header)
        .block(block)
        .column_spacing(1);
    frame.render_widget(table, area);
}
