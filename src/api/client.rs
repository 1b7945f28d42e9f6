//! HTTP client for the diet plan endpoint
//!
//! Posts the form payload as JSON and extracts `diet_plan` from the
//! response body.

use super::{ApiError, DietPlanApi, DietPlanRequest, DietPlanResponse};
use crate::config::PlannerConfig;
use async_trait::async_trait;
use std::time::Duration;

/// Client for the remote diet plan service
#[derive(Debug, Clone)]
pub struct DietPlanClient {
    /// Shared reqwest client (connection pool)
    http: reqwest::Client,
    /// Endpoint URL the payload is posted to
    endpoint: String,
}

impl DietPlanClient {
    /// Create a client for the given endpoint
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            http,
            endpoint: endpoint.into(),
        })
    }

    /// Create a client from user configuration
    pub fn from_config(config: &PlannerConfig) -> Result<Self, ApiError> {
        Self::new(config.endpoint(), config.request_timeout())
    }

    /// The endpoint this client posts to
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl DietPlanApi for DietPlanClient {
    async fn generate_plan(&self, request: &DietPlanRequest) -> Result<String, ApiError> {
        let response = self.http.post(&self.endpoint).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status(status));
        }

        let body = response.bytes().await?;
        let parsed: DietPlanResponse = serde_json::from_slice(&body)?;
        Ok(parsed.diet_plan)
    }
}
