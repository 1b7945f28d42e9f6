//! Generated plan panel

use crate::app::App;
use crate::state::SubmissionState;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Draw the plan returned by the endpoint, or the request status
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let form = app.form.state();
    let mut content: Vec<Line> = Vec::new();

    match form.submission() {
        SubmissionState::Idle => {
            content.push(Line::from(Span::styled(
                "Fill in your details and press Ctrl+S to generate a plan.",
                Style::default().fg(Color::DarkGray),
            )));
        }
        SubmissionState::Pending { started_at, .. } => {
            content.push(Line::from(Span::styled(
                format!(
                    "Generating... (started {})",
                    started_at.with_timezone(&chrono::Local).format("%H:%M:%S")
                ),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            )));
            if let Some(plan) = form.displayed_plan() {
                content.push(Line::from(""));
                let dimmed = Style::default().fg(Color::DarkGray);
                content.extend(
                    plan.lines()
                        .map(|l| Line::from(Span::styled(l.to_string(), dimmed))),
                );
            }
        }
        SubmissionState::Succeeded { plan, completed_at } => {
            content.push(Line::from(Span::styled(
                format!(
                    "Generated at {}",
                    completed_at.with_timezone(&chrono::Local).format("%H:%M:%S")
                ),
                Style::default().fg(Color::Green),
            )));
            content.push(Line::from(""));
            content.extend(plan.lines().map(|l| Line::from(l.to_string())));
        }
        SubmissionState::Failed { message, .. } => {
            content.push(Line::from(Span::styled(
                message.as_str(),
                Style::default().fg(Color::Red),
            )));
        }
    }

    let title = if form.is_plan_stale() {
        " Diet plan (refreshing) "
    } else {
        " Diet plan "
    };
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(
        Paragraph::new(content)
            .wrap(Wrap { trim: false })
            .block(block),
        area,
    );
}
