//! HTTP backend abstraction for the Monday.com GraphQL API.
//!
//! This module provides a trait-based HTTP backend that allows for
//! dependency injection and easy testing. The production implementation
//! uses reqwest with optional retry logic for transient errors.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use crate::error::{MondayError, MondayResult};
use crate::models::{GraphqlEnvelope, GraphqlRequest, MondayConfig};

/// Longest response body excerpt kept in an error message.
const ERROR_BODY_LIMIT: usize = 512;

// ============================================================================
// HTTP Backend Trait
// ============================================================================

/// Trait for backends that can execute a GraphQL request.
///
/// Implementations return the decoded `data` member; error payloads are
/// turned into [`MondayError::Graphql`] by [`unwrap_envelope`].
///
/// This is an implementation detail - external code should use the
/// `BoardSource` trait.
#[async_trait]
pub trait HttpBackend: Send + Sync {
    /// Execute a GraphQL request and deserialize its `data` member.
    async fn post_graphql<T: DeserializeOwned + Send>(
        &self,
        request: &GraphqlRequest,
    ) -> MondayResult<T>;
}

/// Decode a GraphQL response body, surfacing error payloads as errors.
pub fn unwrap_envelope<T: DeserializeOwned>(body: serde_json::Value) -> MondayResult<T> {
    let envelope: GraphqlEnvelope<T> = serde_json::from_value(body)?;

    let mut messages: Vec<String> = envelope
        .errors
        .unwrap_or_default()
        .into_iter()
        .map(|e| e.message)
        .collect();
    if let Some(message) = envelope.error_message {
        messages.push(message);
    }
    if !messages.is_empty() {
        return Err(MondayError::Graphql { messages });
    }

    envelope.data.ok_or_else(|| MondayError::InvalidResponse {
        message: "response carried neither data nor errors".to_string(),
    })
}

// ============================================================================
// Reqwest Backend
// ============================================================================

/// Production HTTP backend using reqwest.
///
/// Server errors (5xx) and network errors are retried with exponential
/// backoff up to `max_retries` times; the default of zero makes every
/// failure final.
pub struct ReqwestBackend {
    client: reqwest::Client,
    config: MondayConfig,
}

impl ReqwestBackend {
    /// Create a new reqwest backend with the given configuration.
    pub fn new(config: MondayConfig) -> MondayResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { client, config })
    }

    /// Build a request with authentication and version headers.
    fn build_request(&self, body: &GraphqlRequest) -> reqwest::RequestBuilder {
        self.client
            .post(self.config.api_url.as_str())
            .header("Authorization", &self.config.token)
            .header("API-Version", &self.config.api_version)
            .json(body)
    }

    /// Send a request with automatic retry for transient errors.
    async fn send_with_retry(&self, body: &GraphqlRequest) -> MondayResult<reqwest::Response> {
        let max_retries = self.config.max_retries;
        let mut attempt: u8 = 0;

        loop {
            if attempt > 0 {
                let delay = backoff_delay(self.config.retry_base_delay_ms, attempt);
                tracing::debug!(attempt, ?delay, "Retrying Monday.com request");
                tokio::time::sleep(delay).await;
            }

            match self.build_request(body).send().await {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        return Ok(response);
                    }

                    // 5xx errors are retryable (server-side issues)
                    if status.is_server_error() && attempt < max_retries {
                        attempt += 1;
                        continue;
                    }

                    // 4xx errors or final attempt - fail immediately
                    let text = response.text().await.unwrap_or_default();
                    return Err(MondayError::ApiRequestFailed {
                        status: status.as_u16(),
                        body: truncate_body(&text),
                    });
                }
                Err(e) => {
                    // Network errors are retryable
                    if attempt < max_retries {
                        tracing::debug!(error = %e, "Monday.com request failed");
                        attempt += 1;
                        continue;
                    }
                    return Err(e.into());
                }
            }
        }
    }
}

/// Exponential backoff before retry `attempt` (1-based), saturating
/// instead of overflowing for large retry counts.
fn backoff_delay(base_ms: u64, attempt: u8) -> Duration {
    let factor = 2u64.saturating_pow(u32::from(attempt.saturating_sub(1)));
    Duration::from_millis(base_ms.saturating_mul(factor))
}

/// Keep error bodies short enough for a log line.
fn truncate_body(text: &str) -> String {
    if text.len() <= ERROR_BODY_LIMIT {
        return text.to_string();
    }
    let mut end = ERROR_BODY_LIMIT;
    while !text.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...", &text[..end])
}

#[async_trait]
impl HttpBackend for ReqwestBackend {
    async fn post_graphql<T: DeserializeOwned + Send>(
        &self,
        request: &GraphqlRequest,
    ) -> MondayResult<T> {
        let response = self.send_with_retry(request).await?;
        let body: serde_json::Value = response.json().await?;
        unwrap_envelope(body)
    }
}

// ============================================================================
// Fake Backend for Testing
// ============================================================================
