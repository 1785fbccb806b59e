//! Chat-completion model client.
//!
//! [`ChatModel`] is the seam between the classifier and the hosted model so
//! that classification can be exercised against canned responses.
//! [`OpenAiChatModel`] speaks the OpenAI chat completions protocol and works
//! with any compatible endpoint.

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::ClassifierConfig;
use crate::error::{ClassifierError, Result};

/// A text-generation model that answers a single prompt.
#[async_trait]
pub trait ChatModel: Send + Sync {
    /// Sends the prompt and returns the raw text of the reply.
    async fn complete(&self, prompt: &str) -> Result<String>;

    /// Returns the model identifier for logging.
    fn model_name(&self) -> &str;
}

#[derive(Debug, Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    temperature: f32,
    messages: Vec<ChatMessage<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    response_format: Option<ResponseFormat>,
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

/// Chat model backed by an OpenAI-compatible HTTP API.
pub struct OpenAiChatModel {
    client: Client,
    api_key: String,
    model: String,
    temperature: f32,
    url: String,
    json_mode: bool,
}

impl OpenAiChatModel {
    /// Creates a client from the classifier configuration.
    pub fn new(config: &ClassifierConfig) -> Result<Self> {
        config.validate()?;

        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            api_key: config.api_key.clone(),
            model: config.model.clone(),
            temperature: config.temperature,
            url: config.completions_url(),
            json_mode: config.json_mode,
        })
    }
}

#[async_trait]
impl ChatModel for OpenAiChatModel {
    async fn complete(&self, prompt: &str) -> Result<String> {
        let body = ChatCompletionRequest {
            model: &self.model,
            temperature: self.temperature,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            response_format: self.json_mode.then_some(ResponseFormat {
                kind: "json_object",
            }),
        };

        tracing::debug!(model = %self.model, url = %self.url, "Sending chat completion request");

        let response = self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClassifierError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let completion: ChatCompletionResponse = response.json().await?;
        let content = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .filter(|content| !content.trim().is_empty())
            .ok_or(ClassifierError::EmptyResponse)?;

        tracing::debug!(chars = content.len(), "Received chat completion");
        Ok(content)
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
