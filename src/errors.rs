// Generation errors
//
// Every failure a requester can surface, plus helpers that turn the
// credential error into an actionable message for the terminal.

use thiserror::Error;

use crate::config::API_KEY_ENV_VARS;

/// Failure of a content request
///
/// Errors are not translated between layers: whatever the last retry
/// attempt produced is what the caller receives.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// The response carried no text payload
    #[error("Failed to generate {0}: response contained no text")]
    NoTextPayload(&'static str),

    /// No candidate part carried inline image data
    #[error("No image generated")]
    NoImageGenerated,

    /// The text payload did not match the expected structure
    #[error("Response did not match the expected structure: {0}")]
    ParseFailure(#[from] serde_json::Error),

    /// The payload parsed but broke an invariant of the content type
    #[error("Invalid generated content: {0}")]
    InvalidContent(String),

    /// The operation needs a live credential and none is configured
    #[error("{0} requires a Gemini API key")]
    MissingCredential(&'static str),

    /// The API answered with a non-success status
    #[error("Gemini API request failed\n\nStatus: {status}\nBody: {body}")]
    Api { status: u16, body: String },

    /// The request could not be sent or the response body not decoded
    #[error("Failed to reach Gemini API: {0}")]
    Transport(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, GenerationError>;

/// Format a missing API key error with helpful suggestions
pub fn api_key_missing_error(operation: &str) -> String {
    format!(
        "{} needs a Gemini API key\n\n\
        \x1b[1;33mPossible causes:\x1b[0m\n\
        • No key in ~/.medtutor/config.toml\n\
        • {} not exported in this shell\n\n\
        \x1b[1;32mTry:\x1b[0m\n\
        1. Export a key:\n\
           \x1b[36mexport {}=\"AI...\"\x1b[0m\n\n\
        2. Or add it to the config file:\n\
           \x1b[36m[gemini]\x1b[0m\n\
           \x1b[36mapi_key = \"AI...\"\x1b[0m\n\n\
        3. Get a key:\n\
           • https://aistudio.google.com/app/apikey",
        operation,
        API_KEY_ENV_VARS.join(" / "),
        API_KEY_ENV_VARS[0]
    )
}
