// Gemini API provider implementation

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use super::types::{GenerateRequest, GenerateResponse};
use super::GenerativeProvider;
use crate::config::DEFAULT_BASE_URL;
use crate::errors::{GenerationError, Result};

const API_VERSION: &str = "v1beta";
const REQUEST_TIMEOUT_SECS: u64 = 120;

/// Gemini REST provider
///
/// Sends one generateContent call per `generate_content`; retrying is the
/// caller's concern.
#[derive(Clone)]
pub struct GeminiProvider {
    client: Client,
    api_key: String,
    base_url: String,
}

impl GeminiProvider {
    /// Create a new Gemini provider against the public endpoint
    pub fn new(api_key: String) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
        })
    }

    /// Point the provider at a different host (proxy, test server)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    fn endpoint(&self, model: &str) -> String {
        format!(
            "{}/{}/models/{}:generateContent",
            self.base_url, API_VERSION, model
        )
    }
}

#[async_trait]
impl GenerativeProvider for GeminiProvider {
    async fn generate_content(&self, request: &GenerateRequest) -> Result<GenerateResponse> {
        tracing::debug!("Sending request to Gemini model {}: {:?}", request.model, request);

        let response = self
            .client
            .post(self.endpoint(&request.model))
            .header("x-goog-api-key", &self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let generate_response: GenerateResponse = response.json().await?;

        tracing::debug!("Received response: {:?}", generate_response);

        Ok(generate_response)
    }

    fn name(&self) -> &str {
        "gemini"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::types::Content;

    #[test]
    fn test_provider_creation() {
        let provider = GeminiProvider::new("test-key".to_string());
        assert!(provider.is_ok());
    }

    #[test]
    fn test_provider_name() {
        let provider = GeminiProvider::new("test-key".to_string()).unwrap();
        assert_eq!(provider.name(), "gemini");
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let provider = GeminiProvider::new("test-key".to_string())
            .unwrap()
            .with_base_url("http://localhost:1234/");
        assert_eq!(
            provider.endpoint("gemini-2.5-flash"),
            "http://localhost:1234/v1beta/models/gemini-2.5-flash:generateContent"
        );
    }

    #[tokio::test]
    async fn test_generate_content_round_trip() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1beta/models/gemini-2.5-flash:generateContent")
            .match_header("x-goog-api-key", "test-key")
            .match_body(mockito::Matcher::PartialJsonString(
                r#"{"contents":[{"role":"user","parts":[{"text":"Hello"}]}]}"#.to_string(),
            ))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"candidates":[{"content":{"role":"model","parts":[{"text":"Hi there"}]}}]}"#)
            .create_async()
            .await;

        let provider = GeminiProvider::new("test-key".to_string())
            .unwrap()
            .with_base_url(server.url());
        let request = GenerateRequest::new("gemini-2.5-flash", vec![Content::user("Hello")]);

        let response = provider.generate_content(&request).await.unwrap();

        mock.assert_async().await;
        assert_eq!(response.text().as_deref(), Some("Hi there"));
    }

    #[tokio::test]
    async fn test_error_status_maps_to_api_error() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/v1beta/models/gemini-2.5-flash:generateContent")
            .with_status(429)
            .with_body("quota exceeded")
            .create_async()
            .await;

        let provider = GeminiProvider::new("test-key".to_string())
            .unwrap()
            .with_base_url(server.url());
        let request = GenerateRequest::from_prompt("gemini-2.5-flash", "Hello");

        let err = provider.generate_content(&request).await.unwrap_err();

        mock.assert_async().await;
        match err {
            GenerationError::Api { status, body } => {
                assert_eq!(status, 429);
                assert_eq!(body, "quota exceeded");
            }
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_undecodable_body_is_transport_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/v1beta/models/gemini-2.5-flash:generateContent")
            .with_status(200)
            .with_body("<html>not json</html>")
            .create_async()
            .await;

        let provider = GeminiProvider::new("test-key".to_string())
            .unwrap()
            .with_base_url(server.url());
        let request = GenerateRequest::from_prompt("gemini-2.5-flash", "Hello");

        let err = provider.generate_content(&request).await.unwrap_err();
        assert!(matches!(err, GenerationError::Transport(_)));
    }
}
