//! Diet form rendering
//!
//! Layout is driven entirely by the field catalogs: base fields, then the
//! fields of active groups, the ingredients and email inputs, buttons for
//! groups not yet added, allergy checkboxes and the generate button.

use super::field_renderer::{draw_field, FieldView};
use crate::app::App;
use crate::state::{FocusTarget, ALLERGIES, OPTIONAL_GROUPS};
use crate::ui::components::{render_button, render_checkbox, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Visible text rows of the ingredients box; it grows with the text up to
/// the maximum and scrolls after that
const MIN_INGREDIENT_ROWS: usize = 3;
const MAX_INGREDIENT_ROWS: usize = 8;

/// Draw the whole form
pub fn draw_diet_form(frame: &mut Frame, area: Rect, app: &App) {
    let form = app.form.state();
    let focused = app.focused();

    let block = Block::default()
        .title(" Your details ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let fields = form.visible_fields();
    let inactive_groups: Vec<_> = OPTIONAL_GROUPS
        .iter()
        .filter(|g| !form.is_group_active(g.key))
        .collect();

    let mut constraints: Vec<Constraint> = fields.iter().map(|_| Constraint::Length(3)).collect();
    let ingredient_rows = form
        .ingredients()
        .split('\n')
        .count()
        .clamp(MIN_INGREDIENT_ROWS, MAX_INGREDIENT_ROWS) as u16;
    constraints.push(Constraint::Length(ingredient_rows + 2)); // Ingredients
    constraints.push(Constraint::Length(3)); // Email
    if !inactive_groups.is_empty() {
        constraints.push(Constraint::Length(BUTTON_HEIGHT)); // Add group buttons
    }
    constraints.push(Constraint::Length(1)); // Allergy heading
    constraints.push(Constraint::Length(1)); // Allergy checkboxes
    constraints.push(Constraint::Length(BUTTON_HEIGHT)); // Generate
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);
    let mut row = 0;

    for field in &fields {
        let value = form.value(field.name).unwrap_or_default();
        draw_field(
            frame,
            chunks[row],
            FieldView {
                label: field.label,
                hint: Some(field.kind.hint()),
                value,
                is_active: focused == FocusTarget::Field(field.name),
                is_multiline: false,
                is_valid: field.accepts(value),
            },
        );
        row += 1;
    }

    draw_field(
        frame,
        chunks[row],
        FieldView {
            label: "Ingredients on hand",
            hint: None,
            value: form.ingredients(),
            is_active: focused == FocusTarget::Ingredients,
            is_multiline: true,
            is_valid: true,
        },
    );
    row += 1;

    draw_field(
        frame,
        chunks[row],
        FieldView {
            label: "Email (optional)",
            hint: None,
            value: form.email_address().unwrap_or_default(),
            is_active: focused == FocusTarget::Email,
            is_multiline: false,
            is_valid: true,
        },
    );
    row += 1;

    if !inactive_groups.is_empty() {
        let button_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(
                inactive_groups
                    .iter()
                    .map(|_| Constraint::Ratio(1, inactive_groups.len() as u32)),
            )
            .split(chunks[row]);
        for (group, chunk) in inactive_groups.iter().zip(button_chunks.iter()) {
            render_button(
                frame,
                *chunk,
                &format!("+ {}", group.label),
                focused == FocusTarget::AddGroup(group.key),
                true,
                None,
            );
        }
        row += 1;
    }

    frame.render_widget(
        Paragraph::new("Any food allergies?").style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ),
        chunks[row],
    );
    row += 1;

    let allergy_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(
            ALLERGIES
                .iter()
                .map(|_| Constraint::Ratio(1, ALLERGIES.len() as u32)),
        )
        .split(chunks[row]);
    for (tag, chunk) in ALLERGIES.iter().copied().zip(allergy_chunks.iter()) {
        render_checkbox(
            frame,
            *chunk,
            tag,
            form.is_allergy_selected(tag),
            focused == FocusTarget::Allergy(tag),
        );
    }
    row += 1;

    let pending = form.submission().is_pending();
    let label = if pending {
        "Generating..."
    } else {
        "Generate diet plan"
    };
    render_button(
        frame,
        chunks[row],
        label,
        focused == FocusTarget::Generate,
        !pending,
        Some(Color::Green),
    );
}
