//! HTTP client module for the diet plan endpoint

mod client;
mod error;
mod payload;
mod traits;

pub use client::DietPlanClient;
pub use error::ApiError;
pub use payload::{DietPlanRequest, DietPlanResponse};
pub use traits::DietPlanApi;

#[cfg(test)]
pub use traits::MockDietPlanApi;
