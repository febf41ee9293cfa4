// Generative content providers
//
// Requesters talk to the generation service through the GenerativeProvider
// trait. GeminiProvider is the live REST implementation; tests substitute
// scripted providers.

use async_trait::async_trait;

use crate::errors::Result;

pub mod types;

// Provider implementations
pub mod gemini;

// Provider factory
pub mod factory;

pub mod retry;

// Re-export commonly used types
pub use factory::create_provider;
pub use gemini::GeminiProvider;
pub use retry::{with_retry, RetryPolicy};
pub use types::{Content, GenerateRequest, GenerateResponse, GenerationConfig, Part, Tool};

/// Trait for generation backends
///
/// One call per invocation: providers do not retry. A single
/// `generate_content` covers text, JSON, image and audio output; the request's
/// generation config selects which.
#[async_trait]
pub trait GenerativeProvider: Send + Sync {
    /// Send a generateContent request and return the full response
    async fn generate_content(&self, request: &GenerateRequest) -> Result<GenerateResponse>;

    /// Get the provider name (e.g., "gemini")
    fn name(&self) -> &str;
}
