//! Layout components (header, panels, status bar)

use crate::app::App;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Key hints shown in the status bar
const HINTS: &str = " Tab:next  Enter/Space:select  ^S:generate  ^Y:copy plan";

/// Screen regions
pub struct ScreenAreas {
    pub header: Rect,
    pub form: Rect,
    pub plan: Rect,
    pub status: Rect,
}

/// Split the screen into header, form (left), plan (right) and status bar
pub fn create_layout(area: Rect) -> ScreenAreas {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Header
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(55), // Form
            Constraint::Percentage(45), // Plan
        ])
        .split(rows[1]);

    ScreenAreas {
        header: rows[0],
        form: columns[0],
        plan: columns[1],
        status: rows[2],
    }
}

/// Draw the title line
pub fn draw_header(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            " Diet Planner ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " Tell us about yourself",
            Style::default().fg(Color::DarkGray),
        ),
    ]));
    frame.render_widget(title, area);
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let submission = app.form.state().submission();
    let indicator = if submission.is_pending() {
        Span::styled(" ◌ ", Style::default().fg(Color::Yellow))
    } else if submission.error_message().is_some() {
        Span::styled(" ○ ", Style::default().fg(Color::Red))
    } else {
        Span::styled(" ● ", Style::default().fg(Color::Green))
    };

    let mut spans = vec![
        indicator,
        Span::styled(HINTS, Style::default().fg(Color::Gray)),
    ];

    if let Some(msg) = &app.state.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Yellow)));
    }

    if let Some(msg) = &app.state.copy_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Green)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);
}
