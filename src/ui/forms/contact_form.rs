//! Contact form view

use super::field_renderer::{draw_field, FieldView, ERROR_LINE_HEIGHT};
use crate::app::{App, Focus};
use crate::state::{ContactField, SubmissionStatus};
use crate::ui::components::{
    banner_height, render_banner, render_button, BannerConfig, BUTTON_HEIGHT,
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders},
    Frame,
};

/// Single-line input: borders plus one text row
const INPUT_HEIGHT: u16 = 3;
/// Smallest message box that still shows a few lines
const MESSAGE_MIN_HEIGHT: u16 = 6;

/// Banner shown under the button for the current submission status
fn status_banner<'a>(app: &'a App, detail: &'a str) -> Option<BannerConfig<'a>> {
    let status_text = &app.content.form_status;
    match app.form.status() {
        SubmissionStatus::Success => Some(BannerConfig {
            title: &status_text.success,
            color: Color::Green,
            message: detail,
        }),
        SubmissionStatus::Error { .. } => Some(BannerConfig {
            title: "Error",
            color: Color::Red,
            message: detail,
        }),
        SubmissionStatus::Idle | SubmissionStatus::Submitting => None,
    }
}

/// Body text for the status banner
fn status_detail(app: &App) -> String {
    match app.form.status() {
        SubmissionStatus::Success => app
            .form
            .sent_at()
            .map(|sent_at| format!("Sent at {}", sent_at.format("%H:%M:%S")))
            .unwrap_or_default(),
        status => status
            .error_message()
            .map(|message| format!("{message}\n{}", app.content.form_status.retry_hint))
            .unwrap_or_default(),
    }
}

/// Draw the contact form
pub fn draw_contact_form(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let incomplete = app.form.show_incomplete_banner().then(|| BannerConfig {
        title: &app.content.form_status.incomplete,
        color: Color::Yellow,
        message: "",
    });
    let detail = status_detail(app);
    let status = status_banner(app, &detail);

    let field_row = INPUT_HEIGHT + ERROR_LINE_HEIGHT;
    let mut constraints = vec![
        Constraint::Length(field_row),
        Constraint::Length(field_row),
        Constraint::Min(MESSAGE_MIN_HEIGHT + ERROR_LINE_HEIGHT),
    ];
    if let Some(banner) = &incomplete {
        constraints.push(Constraint::Length(banner_height(banner, inner.width)));
    }
    constraints.push(Constraint::Length(BUTTON_HEIGHT));
    if let Some(banner) = &status {
        constraints.push(Constraint::Length(banner_height(banner, inner.width)));
    }

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (idx, field) in ContactField::ALL.into_iter().enumerate() {
        let view = FieldView {
            label: app.content.field_label(field),
            value: app.form.value(field),
            display: app.form.field_display(field),
            error: app.form.visible_error(field),
            is_active: app.focus == Focus::Field(field),
            is_multiline: field.is_multiline(),
        };
        draw_field(frame, chunks[idx], &view);
    }

    let mut next = ContactField::ALL.len();
    if let Some(banner) = &incomplete {
        render_banner(frame, chunks[next], banner);
        next += 1;
    }

    let submitting = app.form.status().is_submitting();
    let label = if submitting {
        &app.content.submitting_text
    } else {
        &app.content.form_labels.submit
    };
    render_button(
        frame,
        chunks[next],
        label,
        app.focus == Focus::Submit,
        !submitting,
    );
    next += 1;

    if let Some(banner) = &status {
        render_banner(frame, chunks[next], banner);
    }
}
