//! Progression providers - where derived results come from.
//!
//! The cache never computes anything itself; a consumer asks a
//! `ProgressionProvider` on a miss and stores whatever comes back.
//! `LocalProvider` derives the result in-process, `HttpProvider` asks
//! the planning backend.

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;

use crate::models::{FormSnapshot, TrainingProgression};
use crate::progression;

/// HTTP request timeout in seconds.
/// 30s allows for slow API responses while failing fast enough for good UX.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Backend endpoint deriving a progression from a snapshot
const PROGRESSION_PATH: &str = "/api/v1/training/progression";

/// Maximum length for error response bodies in error messages
const MAX_ERROR_BODY_LENGTH: usize = 500;

#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("Unauthorized - token may be expired")]
    Unauthorized,

    #[error("Access denied: {0}")]
    AccessDenied(String),

    #[error("Resource not found: {0}")]
    NotFound(String),

    #[error("Rate limited - please wait before retrying")]
    RateLimited,

    #[error("Server error: {0}")]
    ServerError(String),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl ProviderError {
    /// Truncate a response body to avoid logging excessive data
    fn truncate_body(body: &str) -> String {
        if body.len() <= MAX_ERROR_BODY_LENGTH {
            return body.to_string();
        }
        // Byte 500 may fall inside a multibyte character; back up to
        // the nearest char boundary instead of panicking on the slice
        let mut end = MAX_ERROR_BODY_LENGTH;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!(
            "{}... (truncated, {} total bytes)",
            &body[..end],
            body.len()
        )
    }

    pub fn from_status(status: reqwest::StatusCode, body: &str) -> Self {
        let truncated = Self::truncate_body(body);
        match status.as_u16() {
            401 => ProviderError::Unauthorized,
            403 => ProviderError::AccessDenied(truncated),
            404 => ProviderError::NotFound(truncated),
            429 => ProviderError::RateLimited,
            500..=599 => ProviderError::ServerError(truncated),
            _ => ProviderError::InvalidResponse(format!("Status {}: {}", status, truncated)),
        }
    }
}

/// Something that can turn onboarding answers into a progression.
/// May involve a network round trip; failures surface to the consumer,
/// which applies `progression::fallback` rather than crashing.
#[async_trait]
pub trait ProgressionProvider {
    async fn fetch(&self, snapshot: &FormSnapshot) -> Result<TrainingProgression, ProviderError>;
}

/// In-process derivation; never fails.
pub struct LocalProvider;

#[async_trait]
impl ProgressionProvider for LocalProvider {
    async fn fetch(&self, snapshot: &FormSnapshot) -> Result<TrainingProgression, ProviderError> {
        Ok(progression::compute(snapshot))
    }
}

/// Remote derivation via the planning backend.
/// Clone is cheap - reqwest::Client uses Arc internally for connection pooling.
#[derive(Clone)]
pub struct HttpProvider {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl HttpProvider {
    pub fn new(base_url: impl Into<String>) -> Result<Self, ProviderError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            token: None,
        })
    }

    /// Set the bearer token for authenticated requests
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }
}

#[async_trait]
impl ProgressionProvider for HttpProvider {
    async fn fetch(&self, snapshot: &FormSnapshot) -> Result<TrainingProgression, ProviderError> {
        let url = format!("{}{}", self.base_url, PROGRESSION_PATH);

        let mut request = self.client.post(&url).json(snapshot);
        if let Some(ref token) = self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::from_status(status, &body));
        }

        response
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_local_provider_derives_in_process() {
        let provider = LocalProvider;
        let progression = provider.fetch(&FormSnapshot::default()).await.unwrap();
        assert_eq!(progression, progression::compute(&FormSnapshot::default()));
    }

    #[test]
    fn test_from_status_mapping() {
        let status = reqwest::StatusCode::from_u16(401).unwrap();
        assert!(matches!(
            ProviderError::from_status(status, ""),
            ProviderError::Unauthorized
        ));

        let status = reqwest::StatusCode::from_u16(429).unwrap();
        assert!(matches!(
            ProviderError::from_status(status, ""),
            ProviderError::RateLimited
        ));

        let status = reqwest::StatusCode::from_u16(503).unwrap();
        assert!(matches!(
            ProviderError::from_status(status, "boom"),
            ProviderError::ServerError(body) if body == "boom"
        ));
    }

    #[test]
    fn test_truncation_respects_char_boundaries() {
        // Byte 500 lands mid-character: 499 ASCII bytes then two-byte chars
        let status = reqwest::StatusCode::from_u16(500).unwrap();
        let body = format!("{}{}", "x".repeat(499), "é".repeat(100));
        match ProviderError::from_status(status, &body) {
            ProviderError::ServerError(msg) => {
                assert!(msg.contains("truncated"));
                assert!(msg.starts_with(&"x".repeat(499)));
            }
            other => panic!("unexpected error variant: {other:?}"),
        }
    }

    #[test]
    fn test_error_bodies_are_truncated() {
        let status = reqwest::StatusCode::from_u16(500).unwrap();
        let body = "x".repeat(2000);
        match ProviderError::from_status(status, &body) {
            ProviderError::ServerError(msg) => {
                assert!(msg.len() < body.len());
                assert!(msg.contains("truncated"));
            }
            other => panic!("unexpected error variant: {other:?}"),
        }
    }
}
