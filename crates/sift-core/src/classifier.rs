//! Sensitive data classifier.
//!
//! Builds the prompt, asks the chat model, parses the answer. [`classify`]
//! never fails: any error along the way becomes a "Non-Sensitive" result
//! with a confidence of 0.0 and the error message as explanation.
//!
//! [`classify`]: SensitiveDataClassifier::classify

use std::sync::Arc;

use crate::category::ClassificationResult;
use crate::config::ClassifierConfig;
use crate::error::Result;
use crate::llm::{ChatModel, OpenAiChatModel};
use crate::parser::parse_classification;
use crate::prompt::build_prompt;

/// Classifies text into sensitive data categories using a chat model.
#[derive(Clone)]
pub struct SensitiveDataClassifier {
    model: Arc<dyn ChatModel>,
}

impl SensitiveDataClassifier {
    /// Creates a classifier using the given chat model.
    pub fn new(model: Arc<dyn ChatModel>) -> Self {
        Self { model }
    }

    /// Creates a classifier talking to an OpenAI-compatible endpoint.
    pub fn from_config(config: &ClassifierConfig) -> Result<Self> {
        let model = OpenAiChatModel::new(config)?;
        tracing::info!(model = %config.model, temperature = config.temperature, "Classifier ready");
        Ok(Self::new(Arc::new(model)))
    }

    /// Creates a classifier from environment configuration.
    ///
    /// Fails before any request is made if `OPENAI_API_KEY` is missing.
    pub fn from_env() -> Result<Self> {
        Self::from_config(&ClassifierConfig::from_env()?)
    }

    /// Returns the model identifier in use.
    pub fn model_name(&self) -> &str {
        self.model.model_name()
    }

    /// Classifies the given text, falling back to "Non-Sensitive" on error.
    pub async fn classify(&self, text: &str) -> ClassificationResult {
        match self.try_classify(text).await {
            Ok(result) => result,
            Err(e) => {
                tracing::warn!(model = %self.model_name(), "Classification failed: {}", e);
                ClassificationResult::fallback(e)
            }
        }
    }

    /// Classifies the given text, returning any failure to the caller.
    pub async fn try_classify(&self, text: &str) -> Result<ClassificationResult> {
        let prompt = build_prompt(text);
        let raw = self.model.complete(&prompt).await?;
        let result = parse_classification(&raw)?;

        tracing::debug!(
            category = %result.category,
            confidence = result.confidence,
            "Classified text"
        );
        Ok(result)
    }
}
