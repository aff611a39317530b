//! Remote recommendation service.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{header, Client, Response};
use shared::{
    domain::{RecommendationRequest, RecommendationResult},
    error::{ApiError, ApiException},
    protocol::{GENERATE_REPORT_PATH, RECOMMEND_PATH},
};
use tracing::{info, warn};
use url::Url;

use crate::error::ClientError;

/// A decoded result plus the exact body it came from.
///
/// The body is what gets cached and later replayed to the report endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    pub result: RecommendationResult,
    pub body: String,
}

impl Recommendation {
    pub fn from_body(body: String) -> Result<Self, ClientError> {
        let result = serde_json::from_str(&body)
            .map_err(|err| ClientError::MalformedResponse(err.to_string()))?;
        Ok(Self { result, body })
    }
}

#[async_trait]
pub trait RecommendationApi: Send + Sync {
    /// Sends one recommendation request.
    async fn recommend(
        &self,
        request: &RecommendationRequest,
    ) -> Result<Recommendation, ClientError>;

    /// Sends a cached result JSON verbatim and returns the report bytes.
    async fn generate_report(&self, result_json: &str) -> Result<Vec<u8>, ClientError>;
}

pub struct HttpRecommendationApi {
    http: Client,
    base_url: Url,
}

impl HttpRecommendationApi {
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Self::with_timeout(base_url, None)
    }

    /// `None` waits for the service indefinitely.
    pub fn with_timeout(base_url: &str, timeout: Option<Duration>) -> Result<Self, ClientError> {
        let mut base_url = Url::parse(base_url)?;
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self {
            http: builder.build()?,
            base_url,
        })
    }

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        Ok(self.base_url.join(path.trim_start_matches('/'))?)
    }
}

/// Turns a non-2xx response into a service error carrying its `error` text.
async fn reject_failure(response: Response) -> Result<Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.bytes().await?;
    let err = ApiException::new(status.as_u16(), ApiError::from_body(&body));
    warn!(status = err.status, message = ?err.message, "api: service reported failure");
    Err(err.into())
}

#[async_trait]
impl RecommendationApi for HttpRecommendationApi {
    async fn recommend(
        &self,
        request: &RecommendationRequest,
    ) -> Result<Recommendation, ClientError> {
        let url = self.endpoint(RECOMMEND_PATH)?;
        info!(%url, "api: requesting recommendation");
        let response = self.http.post(url).json(request).send().await?;
        let response = reject_failure(response).await?;
        let recommendation = Recommendation::from_body(response.text().await?)?;
        info!(
            crop = %recommendation.result.crop,
            confidence = recommendation.result.confidence,
            "api: recommendation received"
        );
        Ok(recommendation)
    }

    async fn generate_report(&self, result_json: &str) -> Result<Vec<u8>, ClientError> {
        let url = self.endpoint(GENERATE_REPORT_PATH)?;
        info!(%url, "api: requesting report");
        let response = self
            .http
            .post(url)
            .header(header::CONTENT_TYPE, "application/json")
            .body(result_json.to_owned())
            .send()
            .await?;
        let response = reject_failure(response).await?;
        let bytes = response.bytes().await?;
        info!(size_bytes = bytes.len(), "api: report received");
        Ok(bytes.to_vec())
    }
}

#[cfg(test)]
#[path = "tests/api_tests.rs"]
mod tests;
