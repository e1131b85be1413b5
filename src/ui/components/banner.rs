//! Inline status banner

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Configuration for rendering a banner
pub struct BannerConfig<'a> {
    /// Bold first line
    pub title: &'a str,
    /// Title and border color
    pub color: Color,
    /// Body text (can be multi-line with \n)
    pub message: &'a str,
}

/// Rows needed to show `config` inside `width` columns
pub fn banner_height(config: &BannerConfig, width: u16) -> u16 {
    let inner = width.saturating_sub(2).max(1) as usize;
    let body = if config.message.is_empty() {
        0
    } else {
        wrap_text(config.message, inner).len()
    };
    // title + body + borders
    (1 + body + 2) as u16
}

/// Render a bordered banner with a title line and wrapped body
pub fn render_banner(frame: &mut Frame, area: Rect, config: &BannerConfig) {
    let inner = area.width.saturating_sub(2).max(1) as usize;

    let mut content = vec![Line::from(Span::styled(
        config.title,
        Style::default()
            .fg(config.color)
            .add_modifier(Modifier::BOLD),
    ))];
    if !config.message.is_empty() {
        content.extend(wrap_text(config.message, inner).into_iter().map(Line::from));
    }

    let banner = Paragraph::new(content).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(config.color)),
    );

    frame.render_widget(banner, area);
}

/// Wrap text to fit within a maximum width, counting characters
pub fn wrap_text(text: &str, max_width: usize) -> Vec<String> {
    let mut lines = Vec::new();

    for paragraph in text.split('\n') {
        if paragraph.is_empty() {
            lines.push(String::new());
            continue;
        }

        let mut current_line = String::new();
        let mut current_len = 0;
        for word in paragraph.split_whitespace() {
            let word_len = word.chars().count();
            if current_len + word_len + 1 > max_width && current_len > 0 {
                lines.push(std::mem::take(&mut current_line));
                current_len = 0;
            }
            if current_len > 0 {
                current_line.push(' ');
                current_len += 1;
            }
            current_line.push_str(word);
            current_len += word_len;
        }
        if !current_line.is_empty() {
            lines.push(current_line);
        }
    }

    if lines.is_empty() {
        lines.push(String::new());
    }

    lines
}
