// Configuration loader
// Loads settings from ~/.medtutor/config.toml, then lets the environment supply the API key

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use super::settings::Config;

/// Environment variables checked for the credential, in priority order
pub const API_KEY_ENV_VARS: [&str; 2] = ["GEMINI_API_KEY", "API_KEY"];

/// Load configuration from the medtutor config file and environment
///
/// A missing config file is not an error: the defaults apply and, without a
/// key in the environment either, the service runs in mock mode.
pub fn load_config() -> Result<Config> {
    let mut config = match dirs::home_dir() {
        Some(home) => load_from_path(&home.join(".medtutor/config.toml"))?.unwrap_or_default(),
        None => {
            tracing::debug!("Could not determine home directory, using default config");
            Config::default()
        }
    };

    apply_env_overrides(&mut config, |name| std::env::var(name).ok());

    Ok(config)
}

/// Parse a TOML config file, returning `None` when it does not exist
pub fn load_from_path(path: &Path) -> Result<Option<Config>> {
    if !path.exists() {
        return Ok(None);
    }

    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let config: Config = toml::from_str(&contents)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    tracing::debug!("Loaded config from {}", path.display());

    Ok(Some(config))
}

fn apply_env_overrides(config: &mut Config, lookup: impl Fn(&str) -> Option<String>) {
    let env_key = API_KEY_ENV_VARS
        .iter()
        .filter_map(|name| lookup(name))
        .find(|value| !value.trim().is_empty());

    if let Some(api_key) = env_key {
        config.gemini.api_key = Some(api_key);
    }
}
