// Configuration module
// Public interface for configuration loading

mod loader;
mod settings;

pub use loader::{load_config, load_from_path, API_KEY_ENV_VARS};
pub use settings::{Config, GeminiSettings, RetrySettings, DEFAULT_BASE_URL};
