//! Contact details panel

use crate::app::App;
use crate::state::InfoItem;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

fn info_line(item: &InfoItem) -> Line<'_> {
    Line::from(vec![
        Span::styled(format!("{:<10}", item.label), Style::default().fg(Color::DarkGray)),
        Span::raw(&item.value),
    ])
}

fn heading(text: &str) -> Line<'_> {
    Line::from(Span::styled(
        text,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    ))
}

/// Draw description, contact details and social links
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let content = &app.content;
    let info = &content.contact_info;

    let mut lines = vec![
        Line::from(content.description.as_str()),
        Line::from(""),
        heading(&info.title),
        info_line(&info.email),
        info_line(&info.phone),
        info_line(&info.location),
    ];

    if !content.social_links.is_empty() {
        lines.push(Line::from(""));
        lines.push(heading(&content.social_heading));
        for link in &content.social_links {
            lines.push(Line::from(vec![
                Span::styled(format!("{:<10}", link.name), Style::default().fg(Color::DarkGray)),
                Span::styled(&link.url, Style::default().fg(Color::Blue)),
            ]));
        }
    }

    let panel = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(panel, area);
}
