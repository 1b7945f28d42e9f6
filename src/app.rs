//! Application state and core logic

use crate::api::{DietPlanApi, DietPlanClient};
use crate::config::PlannerConfig;
use crate::state::{
    find_group, AppState, FocusTarget, FormStateController, SubmissionResult, SubmissionState,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::mpsc;

/// Window for the second Ctrl+C press
const QUIT_WINDOW: Duration = Duration::from_secs(1);

/// Main application struct
pub struct App {
    /// The form and its submission lifecycle
    pub form: FormStateController,
    /// UI-only state
    pub state: AppState,
    /// Client for the diet plan endpoint
    api: Arc<dyn DietPlanApi>,
    /// Finished submissions are sent back to the UI loop over this channel
    results_tx: mpsc::UnboundedSender<SubmissionResult>,
    results_rx: mpsc::UnboundedReceiver<SubmissionResult>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App talking to the configured endpoint
    pub fn new(config: &PlannerConfig) -> Result<Self> {
        let client = DietPlanClient::from_config(config)?;
        tracing::info!(endpoint = client.endpoint(), "using diet plan endpoint");
        Ok(Self::with_api(Arc::new(client)))
    }

    /// Create an App around any client implementation
    pub fn with_api(api: Arc<dyn DietPlanApi>) -> Self {
        let (results_tx, results_rx) = mpsc::unbounded_channel();
        Self {
            form: FormStateController::new(),
            state: AppState::default(),
            api,
            results_tx,
            results_rx,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Target currently holding focus
    pub fn focused(&self) -> FocusTarget {
        self.state.focused(self.form.state())
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        // Error dialog swallows input until dismissed
        if self.state.current_error().is_some() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        if ctrl {
            match key.code {
                KeyCode::Char('c') => self.handle_ctrl_c(),
                KeyCode::Char('s') => self.submit(),
                KeyCode::Char('y') => self.copy_plan(),
                _ => {}
            }
            return Ok(());
        }

        match key.code {
            KeyCode::Tab | KeyCode::Down => self.state.next_focus(self.form.state()),
            KeyCode::BackTab | KeyCode::Up => self.state.prev_focus(self.form.state()),
            KeyCode::Esc => {
                self.state.status_message = None;
                self.state.copy_message = None;
            }
            _ => self.handle_focused_key(key),
        }

        Ok(())
    }

    fn handle_focused_key(&mut self, key: KeyEvent) {
        let target = self.focused();

        if let Some(name) = target.field_name() {
            match key.code {
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::ALT) => {
                    self.edit_field(name, |value| value.push(c));
                }
                KeyCode::Backspace => {
                    self.edit_field(name, |value| {
                        value.pop();
                    });
                }
                KeyCode::Enter if target == FocusTarget::Ingredients => {
                    self.edit_field(name, |value| value.push('\n'));
                }
                KeyCode::Enter => self.state.next_focus(self.form.state()),
                _ => {}
            }
            return;
        }

        if !matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
            return;
        }

        match target {
            FocusTarget::AddGroup(key) => {
                self.form.activate_group(key);
                if let Some(first) = find_group(key).and_then(|g| g.fields.first()) {
                    self.state
                        .focus_on(self.form.state(), FocusTarget::Field(first.name));
                }
            }
            FocusTarget::Allergy(tag) => {
                let selected = self.form.state().is_allergy_selected(tag);
                self.form.toggle_allergy(tag, !selected);
            }
            FocusTarget::Generate => self.submit(),
            _ => {}
        }
    }

    fn edit_field(&mut self, name: &str, edit: impl FnOnce(&mut String)) {
        let mut value = self.form.field_text(name).unwrap_or_default().to_string();
        edit(&mut value);
        self.form.set_field_value(name, value);
    }

    fn handle_ctrl_c(&mut self) {
        let now = Instant::now();
        match self.state.last_ctrl_c {
            Some(last) if now.duration_since(last) < QUIT_WINDOW => self.quit = true,
            _ => {
                self.state.last_ctrl_c = Some(now);
                self.state.status_message = Some("Press Ctrl+C again to quit".to_string());
            }
        }
    }

    /// Start a submission in the background. The result is applied by
    /// `poll_submissions`.
    pub fn submit(&mut self) {
        match self.form.submit() {
            Ok(pending) => {
                tracing::debug!(id = %pending.id(), "dispatching diet plan request");
                let api = Arc::clone(&self.api);
                let tx = self.results_tx.clone();
                tokio::spawn(async move {
                    let result = pending.send(api.as_ref()).await;
                    // Receiver only goes away on shutdown
                    let _ = tx.send(result);
                });
                self.state.status_message = Some("Generating diet plan...".to_string());
            }
            Err(err) => {
                self.state.status_message = Some(err.to_string());
            }
        }
    }

    /// Apply finished submissions. Returns how many were applied.
    pub fn poll_submissions(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(result) = self.results_rx.try_recv() {
            if !self.form.resolve(result) {
                continue;
            }
            applied += 1;

            match self.form.state().submission() {
                SubmissionState::Failed { message, .. } => {
                    let message = message.clone();
                    self.state.status_message = None;
                    self.state.push_error(message);
                }
                SubmissionState::Succeeded { .. } => {
                    self.state.status_message = Some("Diet plan ready".to_string());
                }
                _ => {}
            }
        }
        applied
    }

    fn copy_plan(&mut self) {
        let Some(plan) = self.form.state().displayed_plan() else {
            self.state.copy_message = Some("No plan to copy".to_string());
            return;
        };

        self.state.copy_message = match self.copy_to_clipboard(plan) {
            Ok(()) => Some("Plan copied".to_string()),
            Err(err) => {
                tracing::warn!(error = %err, "clipboard unavailable");
                Some("Copy failed".to_string())
            }
        };
    }

    fn copy_to_clipboard(&self, text: &str) -> Result<()> {
        use arboard::Clipboard;
        let mut clipboard = Clipboard::new()?;
        clipboard.set_text(text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{ApiError, MockDietPlanApi};
    use crate::state::SUBMISSION_FAILED_MESSAGE;
    use reqwest::StatusCode;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.handle_key(key(KeyCode::Char(c))).unwrap();
        }
    }

    fn app_with(api: MockDietPlanApi) -> App {
        App::with_api(Arc::new(api))
    }

    fn idle_app() -> App {
        let mut api = MockDietPlanApi::new();
        api.expect_generate_plan().times(0);
        app_with(api)
    }

    /// Wait for the background submission and feed it through the normal
    /// polling path
    async fn finish_submission(app: &mut App) {
        let result = app.results_rx.recv().await.unwrap();
        app.results_tx.send(result).unwrap();
        assert_eq!(app.poll_submissions(), 1);
    }

    mod editing {
        use super::*;

        #[test]
        fn test_typing_edits_focused_field() {
            let mut app = idle_app();
            type_text(&mut app, "34");
            assert_eq!(app.form.state().value("age"), Some("34"));
        }

        #[test]
        fn test_tab_moves_to_next_field() {
            let mut app = idle_app();
            app.handle_key(key(KeyCode::Tab)).unwrap();
            type_text(&mut app, "180");
            assert_eq!(app.form.state().value("weight"), Some("180"));
            assert_eq!(app.form.state().value("age"), Some(""));
        }

        #[test]
        fn test_backspace() {
            let mut app = idle_app();
            type_text(&mut app, "345");
            app.handle_key(key(KeyCode::Backspace)).unwrap();
            assert_eq!(app.form.state().value("age"), Some("34"));
        }

        #[test]
        fn test_enter_advances_single_line_field() {
            let mut app = idle_app();
            app.handle_key(key(KeyCode::Enter)).unwrap();
            assert_eq!(app.focused(), FocusTarget::Field("weight"));
        }

        #[test]
        fn test_ingredients_is_multiline() {
            let mut app = idle_app();
            app.state
                .focus_on(app.form.state(), FocusTarget::Ingredients);
            type_text(&mut app, "eggs");
            app.handle_key(key(KeyCode::Enter)).unwrap();
            type_text(&mut app, "rice");
            assert_eq!(app.form.state().ingredients(), "eggs\nrice");
        }

        #[test]
        fn test_email_field() {
            let mut app = idle_app();
            app.state.focus_on(app.form.state(), FocusTarget::Email);
            type_text(&mut app, "a@b.c");
            assert_eq!(app.form.state().email_address(), Some("a@b.c"));
        }
    }

    mod groups_and_allergies {
        use super::*;

        #[test]
        fn test_add_group_button_activates_and_focuses_field() {
            let mut app = idle_app();
            app.state
                .focus_on(app.form.state(), FocusTarget::AddGroup("goal"));
            app.handle_key(key(KeyCode::Enter)).unwrap();

            assert_eq!(app.form.state().active_groups(), &["goal"]);
            assert_eq!(app.focused(), FocusTarget::Field("goal"));

            type_text(&mut app, "lose weight");
            assert_eq!(app.form.state().value("goal"), Some("lose weight"));
        }

        #[test]
        fn test_space_toggles_allergy() {
            let mut app = idle_app();
            app.state
                .focus_on(app.form.state(), FocusTarget::Allergy("Dairy"));

            app.handle_key(key(KeyCode::Char(' '))).unwrap();
            assert!(app.form.state().is_allergy_selected("Dairy"));

            app.handle_key(key(KeyCode::Char(' '))).unwrap();
            assert!(!app.form.state().is_allergy_selected("Dairy"));
        }

        #[test]
        fn test_other_keys_on_buttons_are_ignored() {
            let mut app = idle_app();
            app.state
                .focus_on(app.form.state(), FocusTarget::AddGroup("medical"));
            app.handle_key(key(KeyCode::Char('x'))).unwrap();
            assert!(app.form.state().active_groups().is_empty());
        }
    }

    mod submission {
        use super::*;

        #[tokio::test]
        async fn test_generate_button_submits_and_applies_plan() {
            let mut api = MockDietPlanApi::new();
            api.expect_generate_plan()
                .times(1)
                .withf(|req| req.age == "34")
                .returning(|_| Ok("Eat more fiber.".to_string()));
            let mut app = app_with(api);

            type_text(&mut app, "34");
            app.state.focus_on(app.form.state(), FocusTarget::Generate);
            app.handle_key(key(KeyCode::Enter)).unwrap();
            assert!(app.form.state().submission().is_pending());

            finish_submission(&mut app).await;

            assert_eq!(app.form.state().displayed_plan(), Some("Eat more fiber."));
            assert_eq!(
                app.state.status_message.as_deref(),
                Some("Diet plan ready")
            );
        }

        #[tokio::test]
        async fn test_failure_shows_error_dialog() {
            let mut api = MockDietPlanApi::new();
            api.expect_generate_plan()
                .times(1)
                .returning(|_| Err(ApiError::Status(StatusCode::INTERNAL_SERVER_ERROR)));
            let mut app = app_with(api);

            app.handle_key(ctrl('s')).unwrap();
            finish_submission(&mut app).await;

            assert_eq!(app.state.current_error(), Some(SUBMISSION_FAILED_MESSAGE));

            // Typing is swallowed until the dialog is dismissed
            app.handle_key(key(KeyCode::Char('9'))).unwrap();
            assert_eq!(app.form.state().value("age"), Some(""));

            app.handle_key(key(KeyCode::Esc)).unwrap();
            assert!(app.state.current_error().is_none());
        }

        #[tokio::test]
        async fn test_second_submit_while_pending_is_rejected() {
            let mut api = MockDietPlanApi::new();
            api.expect_generate_plan()
                .times(1)
                .returning(|_| Ok("plan".to_string()));
            let mut app = app_with(api);

            app.handle_key(ctrl('s')).unwrap();
            app.handle_key(ctrl('s')).unwrap();
            assert_eq!(
                app.state.status_message.as_deref(),
                Some("a diet plan request is already in progress")
            );

            finish_submission(&mut app).await;
            assert_eq!(app.form.state().displayed_plan(), Some("plan"));
        }

        #[tokio::test]
        async fn test_edits_while_pending_do_not_change_payload() {
            let mut api = MockDietPlanApi::new();
            api.expect_generate_plan()
                .times(1)
                .withf(|req| req.age == "3")
                .returning(|_| Ok("plan".to_string()));
            let mut app = app_with(api);

            type_text(&mut app, "3");
            app.handle_key(ctrl('s')).unwrap();
            type_text(&mut app, "4");

            finish_submission(&mut app).await;
            assert_eq!(app.form.state().value("age"), Some("34"));
        }

        #[test]
        fn test_poll_with_nothing_pending() {
            let mut app = idle_app();
            assert_eq!(app.poll_submissions(), 0);
        }
    }

    mod global_keys {
        use super::*;

        #[test]
        fn test_double_ctrl_c_quits() {
            let mut app = idle_app();
            app.handle_key(ctrl('c')).unwrap();
            assert!(!app.should_quit());
            app.handle_key(ctrl('c')).unwrap();
            assert!(app.should_quit());
        }

        #[test]
        fn test_stale_ctrl_c_does_not_quit() {
            let mut app = idle_app();
            app.state.last_ctrl_c = Instant::now().checked_sub(Duration::from_secs(5));
            app.handle_key(ctrl('c')).unwrap();
            assert!(!app.should_quit());
        }

        #[test]
        fn test_copy_without_plan() {
            let mut app = idle_app();
            app.handle_key(ctrl('y')).unwrap();
            assert_eq!(app.state.copy_message.as_deref(), Some("No plan to copy"));
        }

        #[test]
        fn test_up_from_first_wraps_to_generate() {
            let mut app = idle_app();
            app.handle_key(key(KeyCode::Up)).unwrap();
            assert_eq!(app.focused(), FocusTarget::Generate);
        }

        #[test]
        fn test_esc_clears_status() {
            let mut app = idle_app();
            app.state.status_message = Some("hello".to_string());
            app.handle_key(key(KeyCode::Esc)).unwrap();
            assert!(app.state.status_message.is_none());
        }
    }
}
