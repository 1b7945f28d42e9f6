//! Trait abstraction for the diet plan client to enable mocking in tests

use super::{ApiError, DietPlanRequest};
use async_trait::async_trait;

/// Remote diet plan generation, enabling mocking in tests
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait DietPlanApi: Send + Sync {
    /// Send the form payload and return the generated plan text
    async fn generate_plan(&self, request: &DietPlanRequest) -> Result<String, ApiError>;
}
