// crates/foodgrid-advisor/src/llm/http_client.rs
// Shared HTTP client configuration for LLM requests

use anyhow::{Result, anyhow};
use reqwest::Client;
use std::time::Duration;
use tracing::warn;

/// Default connect timeout
const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 10;

/// Shared HTTP client for the completion endpoint.
///
/// Exactly one attempt per call: a failed or timed-out request is reported to the
/// caller immediately, which degrades to the offline generator.
pub struct LlmHttpClient {
    client: Client,
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
}

impl LlmHttpClient {
    pub fn new(request_timeout: Duration) -> Self {
        let connect_timeout =
            Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS).min(request_timeout);
        let client = Client::builder()
            .timeout(request_timeout)
            .connect_timeout(connect_timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            request_timeout,
            connect_timeout,
        }
    }

    /// POST a JSON body with Bearer auth and return the response body as text.
    ///
    /// Non-2xx statuses are errors; the body is logged, not returned.
    pub async fn execute(
        &self,
        request_id: &str,
        url: &str,
        api_key: &str,
        body: String,
    ) -> Result<String> {
        let response = self
            .client
            .post(url)
            .header("Authorization", format!("Bearer {}", api_key))
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    anyhow!("Request timed out after {:?}", self.request_timeout)
                } else {
                    anyhow!("Request failed: {}", e)
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            warn!(
                request_id = %request_id,
                status = %status,
                error = %error_body,
                "Completion endpoint returned an error status"
            );
            return Err(anyhow!("API error {}", status));
        }

        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    #[test]
    fn test_connect_timeout_never_exceeds_request_timeout() {
        let client = LlmHttpClient::new(Duration::from_secs(3));
        assert_eq!(client.request_timeout, Duration::from_secs(3));
        assert_eq!(client.connect_timeout, Duration::from_secs(3));

        let client = LlmHttpClient::new(Duration::from_secs(60));
        assert_eq!(
            client.connect_timeout,
            Duration::from_secs(DEFAULT_CONNECT_TIMEOUT_SECS)
        );
    }

    #[tokio::test]
    async fn test_execute_sends_bearer_and_returns_body() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/chat/completions")
                    .header("Authorization", "Bearer gsk_test")
                    .body("{}");
                then.status(200).body("ok-body");
            })
            .await;

        let client = LlmHttpClient::new(Duration::from_secs(5));
        let body = client
            .execute("req-1", &server.url("/chat/completions"), "gsk_test", "{}".into())
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(body, "ok-body");
    }

    #[tokio::test]
    async fn test_execute_makes_single_attempt_on_server_error() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(POST).path("/chat/completions");
                then.status(503).body("overloaded");
            })
            .await;

        let client = LlmHttpClient::new(Duration::from_secs(5));
        let err = client
            .execute("req-2", &server.url("/chat/completions"), "k", "{}".into())
            .await
            .unwrap_err();

        assert_eq!(mock.calls_async().await, 1);
        assert!(err.to_string().contains("503"));
    }
}
