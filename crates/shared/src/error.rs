use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure body returned by the recommendation service.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    #[serde(default)]
    pub error: Option<String>,
}

impl ApiError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: Some(message.into()),
        }
    }

    /// Reads an error body leniently; anything unreadable counts as "no message".
    pub fn from_body(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }
}

#[derive(Debug, Error)]
#[error("service returned {status}: {}", .message.as_deref().unwrap_or("no error message"))]
pub struct ApiException {
    pub status: u16,
    pub message: Option<String>,
}

impl ApiException {
    pub fn new(status: u16, body: ApiError) -> Self {
        Self {
            status,
            message: body.error,
        }
    }
}

impl From<ApiException> for ApiError {
    fn from(value: ApiException) -> Self {
        Self {
            error: value.message,
        }
    }
}
