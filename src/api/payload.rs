//! Wire types for the diet plan endpoint

use serde::{Deserialize, Serialize};

/// Request body sent to the endpoint.
///
/// Every key is always serialized; unset values are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DietPlanRequest {
    pub age: String,
    pub weight: String,
    pub height: String,
    pub gender: String,
    pub goals: String,
    pub medical_condition: String,
    pub dietary: String,
    pub ingredients: String,
    pub allergies: Vec<String>,
    pub email: String,
}

/// Successful response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DietPlanResponse {
    pub diet_plan: String,
}
