use shared::error::ApiException;
use thiserror::Error;

/// Shown when the service fails without saying why.
pub const SERVER_ERROR_FALLBACK: &str = "Server error occurred";

/// Shown when a report is requested before any successful submission.
pub const NO_RESULT_MESSAGE: &str = "No data found. Submit the form first.";

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("{}", .0.message.as_deref().unwrap_or(SERVER_ERROR_FALLBACK))]
    Service(#[from] ApiException),
    #[error("{0}")]
    Transport(String),
    #[error("malformed recommendation response: {0}")]
    MalformedResponse(String),
    #[error("No data found. Submit the form first.")]
    MissingResult,
    #[error("missing form field `{0}`")]
    MissingField(&'static str),
    #[error("invalid service url: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),
    #[error("session storage: {0}")]
    Storage(String),
    #[error("failed to save report: {0}")]
    Download(String),
    #[error("failed to display result: {0}")]
    Display(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(value: reqwest::Error) -> Self {
        ClientError::Transport(value.to_string())
    }
}

impl ClientError {
    /// Status code reported by the service, if the failure came from it.
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Service(err) => Some(err.status),
            _ => None,
        }
    }
}
