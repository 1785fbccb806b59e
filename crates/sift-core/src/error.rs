//! Classifier error types.

use thiserror::Error;

/// Errors that can occur while configuring or running classification.
#[derive(Debug, Error)]
pub enum ClassifierError {
    /// No API key in the environment or `.env` file.
    #[error("OPENAI_API_KEY not found in .env file or environment variables")]
    MissingApiKey,

    /// Invalid configuration value.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Transport-level HTTP error from reqwest.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The model endpoint answered with a non-success status.
    #[error("API error {status}: {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Response body as returned by the endpoint.
        body: String,
    },

    /// The model returned no message content.
    #[error("Model returned an empty response")]
    EmptyResponse,

    /// The model output did not match the expected structure.
    #[error("Failed to parse model output: {0}")]
    Parse(String),
}

/// Result type for classifier operations.
pub type Result<T> = std::result::Result<T, ClassifierError>;
