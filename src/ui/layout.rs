//! Layout components (header, status bar)

use crate::app::{App, Focus};
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::SubmissionStatus;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Screen regions for the single contact view
pub struct ScreenAreas {
    pub header: Rect,
    pub info: Rect,
    pub form: Rect,
    pub status_bar: Rect,
}

/// Split the screen into header, info column, form column and status bar
pub fn create_layout(area: Rect) -> ScreenAreas {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(38), Constraint::Percentage(62)])
        .split(rows[1]);

    ScreenAreas {
        header: rows[0],
        info: columns[0],
        form: columns[1],
        status_bar: rows[2],
    }
}

/// Draw the section title and subtitle
pub fn draw_header(frame: &mut Frame, area: Rect, app: &App) {
    let lines = vec![
        Line::from(Span::styled(
            &app.content.subtitle,
            Style::default().fg(Color::Cyan),
        )),
        Line::from(Span::styled(
            &app.content.section_title,
            Style::default().add_modifier(Modifier::BOLD),
        )),
    ];

    let header = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::BOTTOM)
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    frame.render_widget(header, area);
}

/// Key hints for the focused control
fn focus_hints(focus: Focus) -> String {
    let enter = match focus {
        Focus::Submit => "Enter:send",
        Focus::Field(field) if field.is_multiline() => "Enter:newline",
        Focus::Field(_) => "Enter:next",
    };
    format!("Tab/S-Tab:move  {enter}  {SUBMIT_SHORTCUT}:send")
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let status = app.form.status();
    let indicator = match status {
        SubmissionStatus::Idle => Span::styled(" ○ ", Style::default().fg(Color::Gray)),
        SubmissionStatus::Submitting => Span::styled(" ◌ ", Style::default().fg(Color::Yellow)),
        SubmissionStatus::Success => Span::styled(" ● ", Style::default().fg(Color::Green)),
        SubmissionStatus::Error { .. } => Span::styled(" ● ", Style::default().fg(Color::Red)),
    };

    let session = app.form.session_id().to_string();
    let spans = vec![
        indicator,
        Span::raw(status.label()),
        Span::raw(" | "),
        Span::styled(focus_hints(app.focus), Style::default().fg(Color::Gray)),
        Span::raw(" | "),
        Span::styled(
            format!("session {}", &session[..8]),
            Style::default().fg(Color::Blue),
        ),
    ];

    let status_line = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status_line, area);

    // Quit hint on the right
    let quit_hint = " Esc:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        y: area.y,
        width: (quit_hint.len() as u16).min(area.width),
        height: 1,
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ContactField;

    #[test]
    fn test_layout_reserves_header_and_status_rows() {
        let areas = create_layout(Rect::new(0, 0, 100, 40));
        assert_eq!(areas.header.height, 4);
        assert_eq!(areas.status_bar.y, 39);
        assert_eq!(areas.info.height, 35);
        assert_eq!(areas.info.width + areas.form.width, 100);
    }

    #[test]
    fn test_enter_hint_depends_on_focus() {
        assert!(focus_hints(Focus::Submit).contains("Enter:send"));
        assert!(focus_hints(Focus::Field(ContactField::Message)).contains("Enter:newline"));
        assert!(focus_hints(Focus::Field(ContactField::Name)).contains("Enter:next"));
    }
}
