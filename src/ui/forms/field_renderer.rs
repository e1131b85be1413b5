//! Field rendering utilities for forms

use crate::state::FieldDisplay;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// One row under the box for the validation message
pub const ERROR_LINE_HEIGHT: u16 = 1;

/// Everything needed to draw one form field
pub struct FieldView<'a> {
    pub label: &'a str,
    pub value: &'a str,
    pub display: FieldDisplay,
    /// Message shown under the box, if any
    pub error: Option<&'a str>,
    pub is_active: bool,
    pub is_multiline: bool,
}

fn border_color(display: FieldDisplay, is_active: bool) -> Color {
    match display {
        FieldDisplay::Invalid => Color::Red,
        FieldDisplay::Valid => Color::Green,
        FieldDisplay::Untouched if is_active => Color::Cyan,
        FieldDisplay::Untouched => Color::DarkGray,
    }
}

/// Draw a bordered input box with its error line underneath
pub fn draw_field(frame: &mut Frame, area: Rect, field: &FieldView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(ERROR_LINE_HEIGHT)])
        .split(area);

    let text_style = if field.is_active {
        Style::default()
    } else {
        Style::default().fg(Color::Gray)
    };
    let cursor = Span::styled(
        if field.is_active { "▌" } else { "" },
        Style::default().fg(Color::Cyan),
    );

    let content = if field.value.is_empty() && !field.is_active {
        Paragraph::new(Span::styled("(empty)", Style::default().fg(Color::DarkGray)))
    } else if field.is_multiline {
        let mut lines: Vec<Line> = field
            .value
            .split('\n')
            .map(|l| Line::from(Span::styled(l, text_style)))
            .collect();
        if let Some(last) = lines.last_mut() {
            last.spans.push(cursor);
        }
        Paragraph::new(lines)
    } else {
        Paragraph::new(Line::from(vec![Span::styled(field.value, text_style), cursor]))
    };

    let mut title = vec![Span::raw(format!(" {} ", field.label))];
    if field.display == FieldDisplay::Valid {
        title.push(Span::styled("✓ ", Style::default().fg(Color::Green)));
    }

    let block = Block::default()
        .title(Line::from(title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color(field.display, field.is_active)));

    frame.render_widget(content.wrap(Wrap { trim: false }).block(block), chunks[0]);

    if let Some(error) = field.error {
        let line = Paragraph::new(Span::styled(
            format!(" {error}"),
            Style::default().fg(Color::Red),
        ));
        frame.render_widget(line, chunks[1]);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_border_color_follows_display_state() {
        assert_eq!(border_color(FieldDisplay::Invalid, true), Color::Red);
        assert_eq!(border_color(FieldDisplay::Valid, false), Color::Green);
        assert_eq!(border_color(FieldDisplay::Untouched, true), Color::Cyan);
        assert_eq!(border_color(FieldDisplay::Untouched, false), Color::DarkGray);
    }
}
