//! Base dialog component

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Configuration for rendering a dialog
pub struct DialogConfig<'a> {
    pub title: &'a str,
    /// Title and border color
    pub accent: Color,
    /// Message content (can be multi-line with \n)
    pub message: &'a str,
    /// Hint line shown under the message
    pub hint: Option<Vec<Span<'a>>>,
    pub max_width: u16,
}

/// Render a centered dialog overlay
pub fn render_dialog(frame: &mut Frame, config: DialogConfig) {
    let area = frame.area();
    // 2 borders + 1 column of padding on each side
    let inner_width = config.max_width.min(area.width).saturating_sub(4).max(1);

    let message_lines = wrapped_line_count(config.message, inner_width as usize);
    let hint_lines = if config.hint.is_some() { 2 } else { 0 };
    // title + blank + message + hint + borders
    let height = (2 + message_lines + hint_lines + 2).min(area.height);
    let width = (inner_width + 4).min(area.width);

    let dialog_area = centered_rect(area, width, height);
    frame.render_widget(Clear, dialog_area);

    let mut content = vec![
        Line::from(Span::styled(
            config.title,
            Style::default()
                .fg(config.accent)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    content.extend(config.message.split('\n').map(Line::from));
    if let Some(hint) = config.hint {
        content.push(Line::from(""));
        content.push(Line::from(hint));
    }

    let dialog = Paragraph::new(content)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(config.accent))
                .style(Style::default().bg(Color::Black)),
        );

    frame.render_widget(dialog, dialog_area);
}

/// Rectangle of the given size centered in `area`
fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Number of rows `text` needs when word-wrapped at `max_width`
fn wrapped_line_count(text: &str, max_width: usize) -> u16 {
    let max_width = max_width.max(1);
    let mut count = 0u16;

    for paragraph in text.split('\n') {
        let mut line_len = 0usize;
        let mut lines = 1u16;
        for word in paragraph.split_whitespace() {
            let word_len = word.chars().count();
            if line_len > 0 && line_len + 1 + word_len > max_width {
                lines += 1;
                line_len = word_len;
            } else if line_len > 0 {
                line_len += 1 + word_len;
            } else {
                line_len = word_len;
            }
        }
        count = count.saturating_add(lines);
    }

    count
}
