//! Field rendering utilities for forms

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// What to show for one input box
pub struct FieldView<'a> {
    pub label: &'a str,
    /// Kind hint appended to the label, e.g. "number"
    pub hint: Option<&'a str>,
    pub value: &'a str,
    pub is_active: bool,
    pub is_multiline: bool,
    /// False when the value does not fit the field kind; shown as a warning
    pub is_valid: bool,
}

/// Draw a bordered input box with a cursor when active
pub fn draw_field(frame: &mut Frame, area: Rect, field: FieldView) {
    let accent = if !field.is_valid {
        Color::Yellow
    } else if field.is_active {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let text_style = if field.is_active {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::Gray)
    };

    let display_value = if field.value.is_empty() && !field.is_active {
        "(empty)"
    } else {
        field.value
    };
    let cursor = Span::styled(
        if field.is_active { "▌" } else { "" },
        Style::default().fg(Color::Cyan),
    );

    let mut lines: Vec<Line> = if field.is_multiline {
        display_value
            .split('\n')
            .map(|l| Line::from(Span::styled(l.to_string(), text_style)))
            .collect()
    } else {
        vec![Line::from(Span::styled(display_value.to_string(), text_style))]
    };
    if let Some(last) = lines.last_mut() {
        last.spans.push(cursor);
    }

    let title = match field.hint {
        Some(hint) => format!(" {} ({}) ", field.label, hint),
        None => format!(" {} ", field.label),
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(accent));

    // Keep the cursor line in view once the text outgrows the box
    let scroll = if field.is_multiline {
        let inner_width = area.width.saturating_sub(2);
        let inner_height = area.height.saturating_sub(2);
        wrapped_rows(display_value, inner_width).saturating_sub(inner_height)
    } else {
        0
    };

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0))
            .block(block),
        area,
    );
}

/// Rows `value` takes when wrapped to `width`, counting the trailing cursor
fn wrapped_rows(value: &str, width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let mut lines = value.split('\n').peekable();
    let mut rows = 0usize;
    while let Some(line) = lines.next() {
        let cursor = usize::from(lines.peek().is_none());
        rows += (line.chars().count() + cursor).max(1).div_ceil(width);
    }
    u16::try_from(rows).unwrap_or(u16::MAX)
}
