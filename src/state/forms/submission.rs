//! Submission lifecycle types

use crate::api::{DietPlanApi, DietPlanRequest};
use chrono::{DateTime, Utc};
use thiserror::Error;
use uuid::Uuid;

/// Message shown for every failed submission, whatever the cause
pub const SUBMISSION_FAILED_MESSAGE: &str = "Failed to generate diet plan.";

/// Lifecycle of the form submission
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Pending {
        id: Uuid,
        started_at: DateTime<Utc>,
    },
    Succeeded {
        plan: String,
        completed_at: DateTime<Utc>,
    },
    Failed {
        message: String,
        completed_at: DateTime<Utc>,
    },
}

impl SubmissionState {
    pub fn is_pending(&self) -> bool {
        matches!(self, SubmissionState::Pending { .. })
    }

    /// Id of the in-flight submission, if any
    pub fn pending_id(&self) -> Option<Uuid> {
        match self {
            SubmissionState::Pending { id, .. } => Some(*id),
            _ => None,
        }
    }

    /// Plan text of a successful submission
    pub fn plan(&self) -> Option<&str> {
        match self {
            SubmissionState::Succeeded { plan, .. } => Some(plan),
            _ => None,
        }
    }

    /// Failure message of a failed submission
    pub fn error_message(&self) -> Option<&str> {
        match self {
            SubmissionState::Failed { message, .. } => Some(message),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SubmissionState::Idle => "Idle",
            SubmissionState::Pending { .. } => "Generating",
            SubmissionState::Succeeded { .. } => "Done",
            SubmissionState::Failed { .. } => "Failed",
        }
    }
}

/// Rejection of a submit request
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("a diet plan request is already in progress")]
    AlreadyPending(Uuid),
}

/// Terminal result of one remote call
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Succeeded(String),
    Failed(String),
}

/// Outcome tagged with the submission it belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubmissionResult {
    pub id: Uuid,
    pub outcome: SubmissionOutcome,
}

/// A submission that has entered Pending and owns its payload snapshot
#[derive(Debug, Clone)]
pub struct PendingSubmission {
    pub(super) id: Uuid,
    pub(super) payload: DietPlanRequest,
}

impl PendingSubmission {
    pub fn id(&self) -> Uuid {
        self.id
    }

    #[allow(dead_code)]
    pub fn payload(&self) -> &DietPlanRequest {
        &self.payload
    }

    /// Perform the remote call. Never fails: every error becomes a
    /// `Failed` outcome carrying the fixed message.
    pub async fn send(self, api: &dyn DietPlanApi) -> SubmissionResult {
        let outcome = match api.generate_plan(&self.payload).await {
            Ok(plan) => {
                tracing::info!(id = %self.id, "diet plan generated");
                SubmissionOutcome::Succeeded(plan)
            }
            Err(err) => {
                tracing::error!(id = %self.id, error = %err, "error generating diet plan");
                SubmissionOutcome::Failed(SUBMISSION_FAILED_MESSAGE.to_string())
            }
        };

        SubmissionResult {
            id: self.id,
            outcome,
        }
    }
}
