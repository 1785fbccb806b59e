//! Classifier configuration.

use std::time::Duration;

use crate::error::{ClassifierError, Result};

/// Environment variable holding the API key.
pub const API_KEY_VAR: &str = "OPENAI_API_KEY";
/// Environment variable overriding the model name.
pub const MODEL_VAR: &str = "OPENAI_MODEL";
/// Environment variable overriding the API base URL.
pub const BASE_URL_VAR: &str = "OPENAI_BASE_URL";
/// Environment variable overriding the sampling temperature.
pub const TEMPERATURE_VAR: &str = "SIFT_TEMPERATURE";
/// Environment variable setting a request timeout in seconds.
pub const TIMEOUT_VAR: &str = "SIFT_TIMEOUT_SECS";

/// Configuration for the sensitive data classifier.
#[derive(Clone)]
pub struct ClassifierConfig {
    /// Bearer token for the chat-completion endpoint.
    pub api_key: String,

    /// Model identifier.
    /// Default: "gpt-4o"
    pub model: String,

    /// Sampling temperature. Kept low so the model picks a category
    /// literally rather than creatively.
    /// Default: 0.3
    pub temperature: f32,

    /// Base URL of the OpenAI-compatible API, without trailing slash.
    pub base_url: String,

    /// Request timeout. `None` leaves the HTTP client default in place.
    pub timeout: Option<Duration>,

    /// Whether to ask the endpoint for a JSON object response.
    pub json_mode: bool,
}

impl std::fmt::Debug for ClassifierConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClassifierConfig")
            .field("api_key", &"<redacted>")
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("base_url", &self.base_url)
            .field("timeout", &self.timeout)
            .field("json_mode", &self.json_mode)
            .finish()
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: "gpt-4o".to_string(),
            temperature: 0.3,
            base_url: "https://api.openai.com/v1".to_string(),
            timeout: None,
            json_mode: true,
        }
    }
}

impl ClassifierConfig {
    /// Creates a config with defaults and the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            ..Self::default()
        }
    }

    /// Loads config from process environment variables.
    ///
    /// Fails with [`ClassifierError::MissingApiKey`] when no key is set.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads config through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |name: &str| {
            lookup(name)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let api_key = get(API_KEY_VAR).ok_or(ClassifierError::MissingApiKey)?;
        let mut config = Self::new(api_key);

        if let Some(model) = get(MODEL_VAR) {
            config.model = model;
        }
        if let Some(base_url) = get(BASE_URL_VAR) {
            config = config.with_base_url(base_url);
        }
        if let Some(raw) = get(TEMPERATURE_VAR) {
            let temperature = raw.parse::<f32>().map_err(|_| {
                ClassifierError::Config(format!("{} must be a number, got {:?}", TEMPERATURE_VAR, raw))
            })?;
            config.temperature = temperature;
        }
        if let Some(raw) = get(TIMEOUT_VAR) {
            let secs = raw.parse::<u64>().map_err(|_| {
                ClassifierError::Config(format!(
                    "{} must be a whole number of seconds, got {:?}",
                    TIMEOUT_VAR, raw
                ))
            })?;
            config.timeout = Some(Duration::from_secs(secs));
        }

        config.validate()?;
        Ok(config)
    }

    /// Sets the model identifier.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = temperature;
        self
    }

    /// Sets the API base URL.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }

    /// Sets a request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Enables or disables JSON response mode.
    pub fn with_json_mode(mut self, json_mode: bool) -> Self {
        self.json_mode = json_mode;
        self
    }

    /// Checks that the config can be used to make requests.
    pub fn validate(&self) -> Result<()> {
        if self.api_key.trim().is_empty() {
            return Err(ClassifierError::MissingApiKey);
        }
        if self.model.trim().is_empty() {
            return Err(ClassifierError::Config("model must not be empty".to_string()));
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(ClassifierError::Config(format!(
                "temperature must be between 0 and 2, got {}",
                self.temperature
            )));
        }
        Ok(())
    }

    /// Full URL of the chat completions endpoint.
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn defaults_match_classifier_settings() {
        let config = ClassifierConfig::new("sk-test");
        assert_eq!(config.model, "gpt-4o");
        assert_eq!(config.temperature, 0.3);
        assert_eq!(config.timeout, None);
        assert!(config.json_mode);
        assert_eq!(
            config.completions_url(),
            "https://api.openai.com/v1/chat/completions"
        );
    }

    #[test]
    fn missing_key_fails() {
        let err = ClassifierConfig::from_lookup(lookup(&[])).unwrap_err();
        assert!(matches!(err, ClassifierError::MissingApiKey));
    }

    #[test]
    fn blank_key_fails() {
        let err = ClassifierConfig::from_lookup(lookup(&[(API_KEY_VAR, "  ")])).unwrap_err();
        assert!(matches!(err, ClassifierError::MissingApiKey));
    }

    #[test]
    fn overrides_are_applied() {
        let config = ClassifierConfig::from_lookup(lookup(&[
            (API_KEY_VAR, "sk-test"),
            (MODEL_VAR, "gpt-4o-mini"),
            (BASE_URL_VAR, "http://localhost:8080/v1/"),
            (TEMPERATURE_VAR, "0"),
            (TIMEOUT_VAR, "30"),
        ]))
        .unwrap();
        assert_eq!(config.api_key, "sk-test");
        assert_eq!(config.model, "gpt-4o-mini");
        assert_eq!(config.temperature, 0.0);
        assert_eq!(config.timeout, Some(Duration::from_secs(30)));
        assert_eq!(
            config.completions_url(),
            "http://localhost:8080/v1/chat/completions"
        );
    }

    #[test]
    fn bad_temperature_is_a_config_error() {
        let err = ClassifierConfig::from_lookup(lookup(&[
            (API_KEY_VAR, "sk-test"),
            (TEMPERATURE_VAR, "warm"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ClassifierError::Config(_)));

        let err = ClassifierConfig::from_lookup(lookup(&[
            (API_KEY_VAR, "sk-test"),
            (TEMPERATURE_VAR, "5"),
        ]))
        .unwrap_err();
        assert!(matches!(err, ClassifierError::Config(_)));
    }

    #[test]
    fn bad_timeout_is_a_config_error() {
        let err = ClassifierConfig::from_lookup(lookup(&[
            (API_KEY_VAR, "sk-test"),
            (TIMEOUT_VAR, "soon"),
        ]))
        .unwrap_err();
        assert!(err.to_string().contains(TIMEOUT_VAR));
    }

    #[test]
    fn debug_redacts_api_key() {
        let config = ClassifierConfig::new("sk-secret");
        let printed = format!("{:?}", config);
        assert!(!printed.contains("sk-secret"));
    }
}
