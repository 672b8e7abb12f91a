//! Client for hosted models that speak the OpenAI chat completions protocol.
//!
//! The default endpoint is the Hugging Face inference router, which fronts the
//! medical model this assistant is tuned for.

mod builder;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use crate::chat::{ChatMessage, ChatProvider, ChatResponse, Usage};
use crate::error::ChatError;

pub use builder::OpenAICompatibleBuilder;

pub const PROVIDER_NAME: &str = "OpenAI-compatible";
pub const DEFAULT_BASE_URL: &str = "https://router.huggingface.co/nebius/v1";
pub const DEFAULT_MODEL: &str = "aaditya/Llama3-OpenBioLLM-70B";
const CHAT_ENDPOINT: &str = "chat/completions";

/// Configuration for the OpenAI-compatible client.
#[derive(Debug)]
pub struct OpenAICompatibleConfig {
    /// Bearer credential for the endpoint.
    pub api_key: SecretString,
    /// Base URL; always ends with `/`.
    pub base_url: Url,
    /// Model identifier.
    pub model: String,
    /// Request timeout in seconds. `None` waits indefinitely.
    pub timeout_seconds: Option<u64>,
    pub temperature: Option<f32>,
    pub max_tokens: Option<u32>,
    pub top_p: Option<f32>,
    pub presence_penalty: Option<f32>,
    pub frequency_penalty: Option<f32>,
}

/// Client for an OpenAI-compatible chat completions endpoint.
///
/// The client uses `Arc` internally for configuration, making cloning cheap.
#[derive(Debug, Clone)]
pub struct OpenAICompatible {
    pub config: Arc<OpenAICompatibleConfig>,
    pub client: Client,
}

#[derive(Serialize, Debug)]
struct ApiChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

/// Request payload for the chat completions endpoint.
#[derive(Serialize, Debug)]
struct ApiChatRequest<'a> {
    model: &'a str,
    messages: Vec<ApiChatMessage<'a>>,
    stream: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    presence_penalty: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    frequency_penalty: Option<f32>,
}

/// Decoded chat completions response.
#[derive(Deserialize, Debug)]
pub struct OpenAICompatibleChatResponse {
    pub choices: Vec<OpenAICompatibleChoice>,
    pub usage: Option<Usage>,
}

#[derive(Deserialize, Debug)]
pub struct OpenAICompatibleChoice {
    pub message: OpenAICompatibleChatMsg,
}

#[derive(Deserialize, Debug)]
pub struct OpenAICompatibleChatMsg {
    pub role: Option<String>,
    pub content: Option<String>,
}

impl ChatResponse for OpenAICompatibleChatResponse {
    fn text(&self) -> Option<String> {
        self.choices.first().and_then(|c| c.message.content.clone())
    }

    fn usage(&self) -> Option<Usage> {
        self.usage.clone()
    }
}

impl std::fmt::Display for OpenAICompatibleChatResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.text() {
            Some(text) => write!(f, "{text}"),
            None => write!(f, "No response content"),
        }
    }
}

impl OpenAICompatible {
    /// Starts a builder preloaded with the default endpoint and model.
    pub fn builder() -> OpenAICompatibleBuilder {
        OpenAICompatibleBuilder::new()
    }

    pub fn model(&self) -> &str {
        &self.config.model
    }

    pub fn base_url(&self) -> &Url {
        &self.config.base_url
    }

    pub fn timeout_seconds(&self) -> Option<u64> {
        self.config.timeout_seconds
    }

    fn chat_url(&self) -> Result<Url, ChatError> {
        self.config
            .base_url
            .join(CHAT_ENDPOINT)
            .map_err(|e| ChatError::HttpError(e.to_string()))
    }

    fn build_request<'a>(&'a self, messages: &'a [ChatMessage]) -> ApiChatRequest<'a> {
        ApiChatRequest {
            model: &self.config.model,
            messages: messages
                .iter()
                .map(|m| ApiChatMessage {
                    role: m.role.as_str(),
                    content: &m.content,
                })
                .collect(),
            stream: false,
            temperature: self.config.temperature,
            max_tokens: self.config.max_tokens,
            top_p: self.config.top_p,
            presence_penalty: self.config.presence_penalty,
            frequency_penalty: self.config.frequency_penalty,
        }
    }

    async fn ensure_success_response(
        &self,
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ChatError> {
        log::debug!("{PROVIDER_NAME} HTTP status: {}", response.status());
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let error_text = response.text().await?;
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(ChatError::AuthError(
                format!("{PROVIDER_NAME} API rejected credential ({status}): {error_text}"),
            )),
            _ => Err(ChatError::ProviderError(format!(
                "{PROVIDER_NAME} API returned error status {status}: {error_text}"
            ))),
        }
    }
}

#[async_trait]
impl ChatProvider for OpenAICompatible {
    /// Sends the full conversation to the chat completions endpoint.
    async fn chat(&self, messages: &[ChatMessage]) -> Result<Box<dyn ChatResponse>, ChatError> {
        if self.config.api_key.expose_secret().is_empty() {
            return Err(ChatError::AuthError(format!(
                "Missing {PROVIDER_NAME} API key"
            )));
        }

        let body = self.build_request(messages);
        if log::log_enabled!(log::Level::Trace) {
            if let Ok(json) = serde_json::to_string(&body) {
                log::trace!("{PROVIDER_NAME} request payload: {json}");
            }
        }

        let mut request = self
            .client
            .post(self.chat_url()?)
            .bearer_auth(self.config.api_key.expose_secret())
            .json(&body);
        if let Some(timeout) = self.config.timeout_seconds {
            request = request.timeout(Duration::from_secs(timeout));
        }

        let response = request.send().await?;
        let response = self.ensure_success_response(response).await?;
        let resp_text = response.text().await?;
        let parsed: OpenAICompatibleChatResponse =
            serde_json::from_str(&resp_text).map_err(|e| ChatError::ResponseFormatError {
                message: format!("Failed to decode {PROVIDER_NAME} chat response: {e}"),
                raw_response: resp_text,
            })?;
        Ok(Box::new(parsed))
    }
}

#[cfg(test)]
mod tests;
