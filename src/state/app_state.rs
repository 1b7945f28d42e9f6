//! Application state definitions

use super::forms::{FormState, ALLERGIES, EMAIL_FIELD, INGREDIENTS_FIELD, OPTIONAL_GROUPS};
use std::collections::VecDeque;
use std::time::Instant;

/// Something on the form that can hold keyboard focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusTarget {
    /// A descriptor-driven input field
    Field(&'static str),
    Ingredients,
    Email,
    /// Button that activates an optional group
    AddGroup(&'static str),
    /// Allergy checkbox
    Allergy(&'static str),
    /// The generate (submit) button
    Generate,
}

impl FocusTarget {
    /// Controller field name edited by typing into this target
    pub fn field_name(&self) -> Option<&'static str> {
        match self {
            FocusTarget::Field(name) => Some(name),
            FocusTarget::Ingredients => Some(INGREDIENTS_FIELD),
            FocusTarget::Email => Some(EMAIL_FIELD),
            FocusTarget::AddGroup(_) | FocusTarget::Allergy(_) | FocusTarget::Generate => None,
        }
    }
}

/// Focus ring for the current form: visible fields, scalars, buttons for
/// inactive groups, allergy checkboxes, then the generate button
pub fn focus_targets(form: &FormState) -> Vec<FocusTarget> {
    let mut targets: Vec<FocusTarget> = form
        .visible_fields()
        .iter()
        .map(|f| FocusTarget::Field(f.name))
        .collect();

    targets.push(FocusTarget::Ingredients);
    targets.push(FocusTarget::Email);

    targets.extend(
        OPTIONAL_GROUPS
            .iter()
            .filter(|g| !form.is_group_active(g.key))
            .map(|g| FocusTarget::AddGroup(g.key)),
    );
    targets.extend(ALLERGIES.iter().copied().map(FocusTarget::Allergy));
    targets.push(FocusTarget::Generate);
    targets
}

/// UI-only state: focus, transient messages, queued errors
#[derive(Debug, Default)]
pub struct AppState {
    /// Index into the focus ring
    pub focus_index: usize,
    /// Transient status bar message
    pub status_message: Option<String>,
    /// Copy feedback message
    pub copy_message: Option<String>,
    /// Errors waiting to be shown, oldest first
    error_queue: VecDeque<String>,
    /// Timestamp of last Ctrl+C press for double-tap quit
    pub last_ctrl_c: Option<Instant>,
}

impl AppState {
    /// Target currently holding focus
    pub fn focused(&self, form: &FormState) -> FocusTarget {
        let targets = focus_targets(form);
        targets
            .get(self.focus_index.min(targets.len() - 1))
            .copied()
            .unwrap_or(FocusTarget::Generate)
    }

    pub fn next_focus(&mut self, form: &FormState) {
        let count = focus_targets(form).len();
        self.focus_index = (self.focus_index.min(count - 1) + 1) % count;
    }

    pub fn prev_focus(&mut self, form: &FormState) {
        let count = focus_targets(form).len();
        let current = self.focus_index.min(count - 1);
        self.focus_index = if current == 0 { count - 1 } else { current - 1 };
    }

    /// Move focus to `target` if it is in the ring
    pub fn focus_on(&mut self, form: &FormState, target: FocusTarget) {
        if let Some(index) = focus_targets(form).iter().position(|t| *t == target) {
            self.focus_index = index;
        }
    }

    /// Push an error message to the queue for display
    pub fn push_error(&mut self, message: String) {
        self.error_queue.push_back(message);
    }

    /// Error currently shown, if any
    pub fn current_error(&self) -> Option<&str> {
        self.error_queue.front().map(String::as_str)
    }

    /// Dismiss the error currently shown
    pub fn dismiss_error(&mut self) {
        self.error_queue.pop_front();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::forms::FormStateController;

    #[test]
    fn test_initial_focus_ring() {
        let form = FormStateController::new();
        let targets = focus_targets(form.state());

        assert_eq!(targets[0], FocusTarget::Field("age"));
        assert_eq!(targets[3], FocusTarget::Ingredients);
        assert_eq!(targets[4], FocusTarget::Email);
        assert_eq!(targets[5], FocusTarget::AddGroup("gender"));
        assert_eq!(targets.last(), Some(&FocusTarget::Generate));
        assert_eq!(
            targets.len(),
            3 + 2 + OPTIONAL_GROUPS.len() + ALLERGIES.len() + 1
        );
    }

    #[test]
    fn test_activated_group_replaces_button_with_field() {
        let mut form = FormStateController::new();
        form.activate_group("goal");
        let targets = focus_targets(form.state());

        assert_eq!(targets[3], FocusTarget::Field("goal"));
        assert!(!targets.contains(&FocusTarget::AddGroup("goal")));
        assert!(targets.contains(&FocusTarget::AddGroup("gender")));
    }

    #[test]
    fn test_next_focus_wraps() {
        let form = FormStateController::new();
        let mut state = AppState::default();
        let count = focus_targets(form.state()).len();
        for _ in 0..count {
            state.next_focus(form.state());
        }
        assert_eq!(state.focus_index, 0);
    }

    #[test]
    fn test_prev_focus_wraps() {
        let form = FormStateController::new();
        let mut state = AppState::default();
        state.prev_focus(form.state());
        assert_eq!(state.focused(form.state()), FocusTarget::Generate);
    }

    #[test]
    fn test_focused_clamps_out_of_range_index() {
        let form = FormStateController::new();
        let state = AppState {
            focus_index: 1000,
            ..Default::default()
        };
        assert_eq!(state.focused(form.state()), FocusTarget::Generate);
    }

    #[test]
    fn test_focus_on() {
        let form = FormStateController::new();
        let mut state = AppState::default();
        state.focus_on(form.state(), FocusTarget::Allergy("Soy"));
        assert_eq!(state.focused(form.state()), FocusTarget::Allergy("Soy"));

        // Targets outside the ring leave focus alone
        state.focus_on(form.state(), FocusTarget::Field("goal"));
        assert_eq!(state.focused(form.state()), FocusTarget::Allergy("Soy"));
    }

    #[test]
    fn test_error_queue_order() {
        let mut state = AppState::default();
        assert!(state.current_error().is_none());
        state.push_error("first".to_string());
        state.push_error("second".to_string());
        assert_eq!(state.current_error(), Some("first"));
        state.dismiss_error();
        assert_eq!(state.current_error(), Some("second"));
        state.dismiss_error();
        assert!(state.current_error().is_none());
    }

    #[test]
    fn test_text_input_targets() {
        assert_eq!(FocusTarget::Field("age").field_name(), Some("age"));
        assert_eq!(FocusTarget::Ingredients.field_name(), Some(INGREDIENTS_FIELD));
        assert_eq!(FocusTarget::Email.field_name(), Some(EMAIL_FIELD));
        assert_eq!(FocusTarget::AddGroup("goal").field_name(), None);
        assert_eq!(FocusTarget::Allergy("Soy").field_name(), None);
        assert_eq!(FocusTarget::Generate.field_name(), None);
    }
}
