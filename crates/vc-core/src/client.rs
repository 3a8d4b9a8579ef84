//! Detection service client

use crate::{ApiConfig, CoreError, CoreResult, DetectionRequest, DetectionResult};
use async_trait::async_trait;
use url::Url;

/// Anything that can answer a detection request.
///
/// Browser futures are not `Send`, so on wasm the trait drops that bound.
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
pub trait DetectionClient {
    /// Issue exactly one request and return the decoded result
    async fn detect(&self, request: &DetectionRequest) -> CoreResult<DetectionResult>;
}

/// Validate `text` and, if it is non-blank, send it to `client`.
///
/// Blank text fails with [`CoreError::EmptyText`] before any request is made.
pub async fn check<C>(client: &C, text: &str) -> CoreResult<DetectionResult>
where
    C: DetectionClient + ?Sized,
{
    let request = DetectionRequest::new(text)?;
    client.detect(&request).await
}

/// reqwest-backed client for `POST /api/check-plagiarism`
#[derive(Debug, Clone)]
pub struct HttpDetectionClient {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpDetectionClient {
    /// No timeout is configured; a request runs until the service answers or the connection fails.
    pub fn new(config: &ApiConfig) -> CoreResult<Self> {
        let endpoint = config.endpoint()?;
        let client = build_client(config)?;

        Ok(Self { client, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn build_client(config: &ApiConfig) -> CoreResult<reqwest::Client> {
    Ok(reqwest::Client::builder()
        .user_agent(&config.user_agent)
        .build()?)
}

#[cfg(target_arch = "wasm32")]
fn build_client(_config: &ApiConfig) -> CoreResult<reqwest::Client> {
    Ok(reqwest::Client::new())
}

#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
impl DetectionClient for HttpDetectionClient {
    async fn detect(&self, request: &DetectionRequest) -> CoreResult<DetectionResult> {
        tracing::debug!(
            "POST {} ({} bytes of text)",
            self.endpoint,
            request.text().len()
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CoreError::Status(status.as_u16()));
        }

        // Decode separately so a bad body surfaces as a parse error rather than an HTTP one.
        let body = response.text().await?;
        let result: DetectionResult = serde_json::from_str(&body)?;

        tracing::debug!(
            "Detection service answered: flagged={}, confidence={}",
            result.is_flagged,
            result.confidence
        );

        Ok(result)
    }
}
