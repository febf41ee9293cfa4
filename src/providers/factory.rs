// Provider factory
//
// Creates the generation provider from configuration

use std::sync::Arc;

use super::gemini::GeminiProvider;
use super::GenerativeProvider;
use crate::config::Config;

/// Create a provider from the configured credential
///
/// Returns `None` when no API key is configured. Never fails: a provider that
/// cannot be constructed is logged and treated as absent.
pub fn create_provider(config: &Config) -> Option<Arc<dyn GenerativeProvider>> {
    let api_key = config.api_key()?;

    match GeminiProvider::new(api_key.to_string()) {
        Ok(provider) => {
            let provider = provider.with_base_url(config.gemini.base_url.clone());
            Some(Arc::new(provider))
        }
        Err(e) => {
            tracing::error!("Failed to create Gemini provider: {}", e);
            None
        }
    }
}
