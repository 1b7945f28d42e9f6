//! Form domain layer
//!
//! This module provides the field catalogs, the form state value and the
//! controller that mediates every change to it, including the submission
//! lifecycle.

mod field;
mod form_state;
mod submission;

pub use field::{find_group, ALLERGIES, OPTIONAL_GROUPS};
pub use form_state::{FormState, FormStateController, EMAIL_FIELD, INGREDIENTS_FIELD};
pub use submission::{SubmissionResult, SubmissionState};

#[cfg(test)]
pub use submission::{SubmissionOutcome, SUBMISSION_FAILED_MESSAGE};
