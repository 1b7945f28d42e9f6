//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod plan_panel;

use crate::app::App;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let areas = layout::create_layout(frame.area());

    layout::draw_header(frame, areas.header);
    forms::draw_diet_form(frame, areas.form, app);
    plan_panel::draw(frame, areas.plan, app);
    layout::draw_status_bar(frame, areas.status, app);

    // Error dialog renders last so it overlays everything
    if let Some(message) = app.state.current_error() {
        components::render_error_dialog(frame, message);
    }
}
