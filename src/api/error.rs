//! Errors raised while talking to the diet plan endpoint

use reqwest::StatusCode;
use thiserror::Error;

/// Failure of a single request to the endpoint.
///
/// These never reach the user directly: the form controller collapses every
/// variant into one failed submission and only logs the detail.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("endpoint returned {0}")]
    Status(StatusCode),

    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_display() {
        let err = ApiError::Status(StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.to_string(), "endpoint returned 500 Internal Server Error");
    }

    #[test]
    fn test_decode_from_serde() {
        let serde_err = serde_json::from_str::<u32>("nope").unwrap_err();
        let err: ApiError = serde_err.into();
        assert!(matches!(err, ApiError::Decode(_)));
        assert!(err.to_string().starts_with("malformed response body"));
    }
}
