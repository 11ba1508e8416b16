use async_trait::async_trait;
use log::{debug, error};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::app_config::{RemoteConfig, SummaryLength};
use crate::errors::ProviderError;
use crate::providers::Provider;

/// Largest doubling applied to the retry backoff
const MAX_BACKOFF_SHIFT: u32 = 16;

/// HuggingFace client for the hosted inference API
#[derive(Debug)]
pub struct HuggingFace {
    /// HTTP client for API requests
    client: Client,
    /// API token for authentication
    api_key: String,
    /// API endpoint URL
    endpoint: String,
    /// Model to run
    model: String,
    /// Maximum number of retry attempts
    max_retries: u32,
    /// Base backoff time in milliseconds for exponential backoff
    backoff_base_ms: u64,
}

/// Generation parameters for the summarization pipeline
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SummarizationParameters {
    /// Maximum summary length in tokens
    pub max_length: u32,
    /// Minimum summary length in tokens
    pub min_length: u32,
    /// Whether to sample instead of greedy decoding
    pub do_sample: bool,
}

/// Summarization request
#[derive(Debug, Clone, Serialize)]
pub struct HuggingFaceRequest {
    /// Text to summarize
    inputs: String,
    /// Generation parameters
    parameters: SummarizationParameters,
}

impl HuggingFaceRequest {
    /// Create a new request with greedy decoding
    pub fn new(inputs: impl Into<String>, max_length: u32, min_length: u32) -> Self {
        Self {
            inputs: inputs.into(),
            parameters: SummarizationParameters {
                max_length,
                min_length,
                do_sample: false,
            },
        }
    }

    /// Create a request sized for the given summary length
    pub fn for_length(inputs: impl Into<String>, length: SummaryLength) -> Self {
        let (max_length, min_length) = length.remote_bounds();
        Self::new(inputs, max_length, min_length)
    }

    /// Generation parameters of this request
    pub fn parameters(&self) -> &SummarizationParameters {
        &self.parameters
    }
}

/// A successful summarization response
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct HuggingFaceResponse {
    /// Generated summary
    pub summary_text: String,
}

/// Shapes the inference API is known to answer with
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawResponse {
    List(Vec<HuggingFaceResponse>),
    Single(HuggingFaceResponse),
    Error { error: String },
}

/// Parse a response body into a summary.
///
/// Accepts `[{"summary_text": ...}]` and `{"summary_text": ...}`; an
/// `{"error": ...}` body is reported as a request failure.
pub fn parse_response(body: &str) -> Result<HuggingFaceResponse, ProviderError> {
    let raw: RawResponse = serde_json::from_str(body)
        .map_err(|_| ProviderError::ParseError("Unexpected API response format".to_string()))?;

    match raw {
        RawResponse::List(items) => items
            .into_iter()
            .next()
            .ok_or_else(|| ProviderError::ParseError("Unexpected API response format".to_string())),
        RawResponse::Single(response) => Ok(response),
        RawResponse::Error { error } => Err(ProviderError::RequestFailed(format!("API Error: {}", error))),
    }
}

/// Map a non-success HTTP status to a provider error
fn status_error(status: StatusCode, body: &str) -> ProviderError {
    let message = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
        .unwrap_or_else(|| body.to_string());

    match status {
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => ProviderError::AuthenticationError(message),
        StatusCode::TOO_MANY_REQUESTS => ProviderError::RateLimitExceeded(message),
        _ => ProviderError::ApiError {
            status_code: status.as_u16(),
            message,
        },
    }
}

impl HuggingFace {
    /// Create a new HuggingFace client
    pub fn new(api_key: impl Into<String>, endpoint: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(60))
                .build()
                .unwrap_or_default(),
            api_key: api_key.into(),
            endpoint: endpoint.into(),
            model: model.into(),
            max_retries: 0,
            backoff_base_ms: 1000,
        }
    }

    /// Create a new client from the remote configuration
    pub fn from_config(config: &RemoteConfig) -> Self {
        Self {
            client: Client::builder()
                .timeout(Duration::from_secs(config.timeout_secs))
                .build()
                .unwrap_or_default(),
            api_key: config.api_key.clone(),
            endpoint: config.endpoint.clone(),
            model: config.model.clone(),
            max_retries: config.retry_count,
            backoff_base_ms: config.retry_backoff_ms,
        }
    }

    /// Full URL of the model's inference route
    pub fn model_url(&self) -> String {
        format!("{}/models/{}", self.endpoint.trim_end_matches('/'), self.model)
    }

    /// Delay before retry number `attempt` (1-based), doubling each time
    fn backoff_delay(&self, attempt: u32) -> Duration {
        let shift = attempt.saturating_sub(1).min(MAX_BACKOFF_SHIFT);
        Duration::from_millis(self.backoff_base_ms.saturating_mul(1u64 << shift))
    }

    async fn send_once(&self, url: &str, request: &HuggingFaceRequest) -> Result<HuggingFaceResponse, ProviderError> {
        let response = self.client.post(url)
            .bearer_auth(&self.api_key)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() || e.is_connect() {
                    ProviderError::ConnectionError(e.to_string())
                } else {
                    ProviderError::RequestFailed(e.to_string())
                }
            })?;

        let status = response.status();
        let body = response.text().await
            .map_err(|e| ProviderError::RequestFailed(format!("Failed to read response body: {}", e)))?;

        if !status.is_success() {
            error!("HuggingFace API error ({}): {}", status, body);
            return Err(status_error(status, &body));
        }

        debug!("HuggingFace API response: {}", body);
        parse_response(&body)
    }
}

#[async_trait]
impl Provider for HuggingFace {
    type Request = HuggingFaceRequest;
    type Response = HuggingFaceResponse;

    fn build_request(&self, text: &str, length: SummaryLength) -> Self::Request {
        HuggingFaceRequest::for_length(text, length)
    }

    /// Complete a summarization request, retrying server and network errors
    async fn complete(&self, request: Self::Request) -> Result<Self::Response, ProviderError> {
        let url = self.model_url();
        debug!(
            "Making API request with params: max_length={}, min_length={}",
            request.parameters.max_length, request.parameters.min_length
        );

        let mut attempt = 0;
        loop {
            match self.send_once(&url, &request).await {
                Ok(response) => return Ok(response),
                Err(e) => {
                    let retryable = matches!(
                        e,
                        ProviderError::ConnectionError(_) | ProviderError::ApiError { status_code: 500..=599, .. }
                    );
                    if !retryable || attempt >= self.max_retries {
                        return Err(e);
                    }
                    error!("HuggingFace request failed: {} - attempt {}/{}", e, attempt + 1, self.max_retries + 1);
                }
            }

            attempt += 1;
            tokio::time::sleep(self.backoff_delay(attempt)).await;
        }
    }

    async fn test_connection(&self) -> Result<(), ProviderError> {
        let request = HuggingFaceRequest::new("Hello there, this is a connection test.", 10, 1);
        self.complete(request).await?;
        Ok(())
    }

    fn extract_text(response: &Self::Response) -> String {
        response.summary_text.trim().to_string()
    }
}
