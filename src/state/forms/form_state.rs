//! Form state and the controller that owns it
//!
//! `FormState` is a plain value: the field values keyed by name, the optional
//! groups that have been activated, the allergy selection and the submission
//! lifecycle. `FormStateController` is the only writer.

use super::field::{find_allergy, find_group, FieldDescriptor, ALLERGIES, BASE_FIELDS};
use super::submission::{
    PendingSubmission, SubmissionOutcome, SubmissionResult, SubmissionState, SubmitError,
};
use crate::api::{DietPlanApi, DietPlanRequest};
use chrono::Utc;
use std::collections::{HashMap, HashSet};
use uuid::Uuid;

/// Field name of the free-text ingredients scalar
pub const INGREDIENTS_FIELD: &str = "ingredients";

/// Field name of the email scalar
pub const EMAIL_FIELD: &str = "email";

/// Snapshot of everything the user has entered
#[derive(Debug, Clone, Default)]
pub struct FormState {
    values: HashMap<String, String>,
    active_groups: Vec<&'static str>,
    selected_allergies: HashSet<&'static str>,
    ingredients: String,
    email_address: Option<String>,
    submission: SubmissionState,
    /// Last successful plan, kept visible while a new request is Pending
    stale_plan: Option<String>,
}

impl FormState {
    /// Current value of a descriptor-driven field
    pub fn value(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    #[allow(dead_code)]
    pub fn values(&self) -> &HashMap<String, String> {
        &self.values
    }

    /// Activated group keys, in activation order
    #[allow(dead_code)]
    pub fn active_groups(&self) -> &[&'static str] {
        &self.active_groups
    }

    pub fn is_group_active(&self, key: &str) -> bool {
        self.active_groups.iter().any(|g| *g == key)
    }

    /// Selected allergy tags, in catalog order
    pub fn selected_allergies(&self) -> Vec<&'static str> {
        ALLERGIES
            .iter()
            .copied()
            .filter(|a| self.selected_allergies.contains(a))
            .collect()
    }

    pub fn is_allergy_selected(&self, tag: &str) -> bool {
        self.selected_allergies.contains(tag)
    }

    pub fn ingredients(&self) -> &str {
        &self.ingredients
    }

    pub fn email_address(&self) -> Option<&str> {
        self.email_address.as_deref()
    }

    pub fn submission(&self) -> &SubmissionState {
        &self.submission
    }

    /// Base fields followed by the fields of each active group
    pub fn visible_fields(&self) -> Vec<&'static FieldDescriptor> {
        let optional = self
            .active_groups
            .iter()
            .filter_map(|key| find_group(key))
            .flat_map(|group| group.fields.iter());
        BASE_FIELDS.iter().chain(optional).collect()
    }

    /// Plan to show: the current result, or the previous one while a new
    /// request is in flight
    pub fn displayed_plan(&self) -> Option<&str> {
        if self.submission.is_pending() {
            self.stale_plan.as_deref()
        } else {
            self.submission.plan()
        }
    }

    /// Whether `displayed_plan` is a leftover from an earlier request
    pub fn is_plan_stale(&self) -> bool {
        self.submission.is_pending() && self.stale_plan.is_some()
    }

    /// Project the state into the request schema. Fields of groups that were
    /// never activated are sent as empty strings.
    pub fn build_payload(&self) -> DietPlanRequest {
        let value = |name: &str| self.values.get(name).cloned().unwrap_or_default();

        DietPlanRequest {
            age: value("age"),
            weight: value("weight"),
            height: value("height"),
            gender: value("gender"),
            goals: value("goal"),
            medical_condition: value("medical_condition"),
            dietary: value("dietary"),
            ingredients: self.ingredients.clone(),
            allergies: self
                .selected_allergies()
                .into_iter()
                .map(str::to_string)
                .collect(),
            email: self.email_address.clone().unwrap_or_default(),
        }
    }
}

/// Owner of `FormState` and the only path that mutates it
#[derive(Debug, Clone)]
pub struct FormStateController {
    state: FormState,
}

impl FormStateController {
    /// Start a session with every base field seeded to ""
    pub fn new() -> Self {
        let values = BASE_FIELDS
            .iter()
            .map(|f| (f.name.to_string(), String::new()))
            .collect();

        Self {
            state: FormState {
                values,
                ..Default::default()
            },
        }
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    /// Make an optional group visible. Unknown keys are ignored; already
    /// entered values are never reset. Returns true on first activation.
    pub fn activate_group(&mut self, key: &str) -> bool {
        let Some(group) = find_group(key) else {
            tracing::debug!(group = key, "ignoring unknown field group");
            return false;
        };

        for field in group.fields {
            self.state
                .values
                .entry(field.name.to_string())
                .or_default();
        }

        if self.state.is_group_active(group.key) {
            return false;
        }
        self.state.active_groups.push(group.key);
        tracing::debug!(group = group.key, "activated field group");
        true
    }

    /// Overwrite a visible field, or the ingredients/email scalars.
    /// Returns false when the name is not currently editable.
    pub fn set_field_value(&mut self, name: &str, value: impl Into<String>) -> bool {
        let value = value.into();
        match name {
            INGREDIENTS_FIELD => self.state.ingredients = value,
            EMAIL_FIELD | "emailAddress" => self.state.email_address = Some(value),
            _ => match self.state.values.get_mut(name) {
                Some(slot) => *slot = value,
                None => {
                    tracing::debug!(field = name, "ignoring edit of hidden or unknown field");
                    return false;
                }
            },
        }
        true
    }

    /// Current text of any editable field, including the scalars
    pub fn field_text(&self, name: &str) -> Option<&str> {
        match name {
            INGREDIENTS_FIELD => Some(self.state.ingredients()),
            EMAIL_FIELD | "emailAddress" => Some(self.state.email_address().unwrap_or("")),
            _ => self.state.value(name),
        }
    }

    /// Set whether `tag` is selected. Tags outside the catalog are ignored.
    pub fn toggle_allergy(&mut self, tag: &str, present: bool) {
        let Some(tag) = find_allergy(tag) else {
            tracing::debug!(tag, "ignoring unknown allergy tag");
            return;
        };

        if present {
            self.state.selected_allergies.insert(tag);
        } else {
            self.state.selected_allergies.remove(tag);
        }
    }

    /// Snapshot the payload and enter Pending. Rejected while another
    /// submission is in flight.
    pub fn submit(&mut self) -> Result<PendingSubmission, SubmitError> {
        if let Some(id) = self.state.submission.pending_id() {
            tracing::warn!(%id, "submit rejected, request already in flight");
            return Err(SubmitError::AlreadyPending(id));
        }

        let payload = self.state.build_payload();
        let id = Uuid::new_v4();
        let previous = std::mem::replace(
            &mut self.state.submission,
            SubmissionState::Pending {
                id,
                started_at: Utc::now(),
            },
        );
        self.state.stale_plan = match previous {
            SubmissionState::Succeeded { plan, .. } => Some(plan),
            _ => None,
        };

        tracing::info!(%id, "submitting diet plan request");
        Ok(PendingSubmission { id, payload })
    }

    /// Apply the result of the in-flight submission. Results for any other
    /// submission are dropped and false is returned.
    pub fn resolve(&mut self, result: SubmissionResult) -> bool {
        if self.state.submission.pending_id() != Some(result.id) {
            tracing::warn!(id = %result.id, "dropping result of unknown submission");
            return false;
        }

        let completed_at = Utc::now();
        self.state.stale_plan = None;
        self.state.submission = match result.outcome {
            SubmissionOutcome::Succeeded(plan) => SubmissionState::Succeeded { plan, completed_at },
            SubmissionOutcome::Failed(message) => SubmissionState::Failed {
                message,
                completed_at,
            },
        };
        tracing::info!(id = %result.id, state = self.state.submission.label(), "submission resolved");
        true
    }

    /// Submit and wait for the result in one step
    #[allow(dead_code)]
    pub async fn submit_with(
        &mut self,
        api: &dyn DietPlanApi,
    ) -> Result<&SubmissionState, SubmitError> {
        let pending = self.submit()?;
        let result = pending.send(api).await;
        self.resolve(result);
        Ok(&self.state.submission)
    }
}

impl Default for FormStateController {
    fn default() -> Self {
        Self::new()
    }
}
