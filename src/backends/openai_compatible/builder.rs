use std::sync::Arc;

use reqwest::{Client, Url};
use secrecy::SecretString;

use crate::error::ChatError;

use super::{OpenAICompatible, OpenAICompatibleConfig, DEFAULT_BASE_URL, DEFAULT_MODEL};

/// Builder for configuring and instantiating an [`OpenAICompatible`] client.
#[derive(Debug)]
pub struct OpenAICompatibleBuilder {
    api_key: Option<SecretString>,
    base_url: String,
    model: String,
    timeout_seconds: Option<u64>,
    temperature: Option<f32>,
    max_tokens: Option<u32>,
    top_p: Option<f32>,
    presence_penalty: Option<f32>,
    frequency_penalty: Option<f32>,
}

impl Default for OpenAICompatibleBuilder {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_seconds: None,
            temperature: None,
            max_tokens: None,
            top_p: None,
            presence_penalty: None,
            frequency_penalty: None,
        }
    }
}

impl OpenAICompatibleBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key for authentication.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(SecretString::new(key.into()));
        self
    }

    /// Sets the base URL for API requests.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the model identifier to use.
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the request timeout in seconds.
    pub fn timeout_seconds(mut self, timeout_seconds: u64) -> Self {
        self.timeout_seconds = Some(timeout_seconds);
        self
    }

    /// Sets the temperature for controlling response randomness.
    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Sets the maximum number of tokens to generate.
    pub fn max_tokens(mut self, max_tokens: u32) -> Self {
        self.max_tokens = Some(max_tokens);
        self
    }

    pub fn top_p(mut self, top_p: f32) -> Self {
        self.top_p = Some(top_p);
        self
    }

    pub fn presence_penalty(mut self, penalty: f32) -> Self {
        self.presence_penalty = Some(penalty);
        self
    }

    pub fn frequency_penalty(mut self, penalty: f32) -> Self {
        self.frequency_penalty = Some(penalty);
        self
    }

    /// Builds the client.
    ///
    /// A missing API key is accepted here and reported as an auth error on
    /// the first exchange instead.
    pub fn build(self) -> Result<OpenAICompatible, ChatError> {
        let base_url = parse_base_url(&self.base_url)?;
        let client = Client::builder().build()?;
        Ok(OpenAICompatible {
            config: Arc::new(OpenAICompatibleConfig {
                api_key: self
                    .api_key
                    .unwrap_or_else(|| SecretString::new(String::new())),
                base_url,
                model: self.model,
                timeout_seconds: self.timeout_seconds,
                temperature: self.temperature,
                max_tokens: self.max_tokens,
                top_p: self.top_p,
                presence_penalty: self.presence_penalty,
                frequency_penalty: self.frequency_penalty,
            }),
            client,
        })
    }
}

// `Url::join` replaces the last path segment unless the base ends with `/`.
fn parse_base_url(raw: &str) -> Result<Url, ChatError> {
    let trimmed = raw.trim();
    let normalized = if trimmed.ends_with('/') {
        trimmed.to_string()
    } else {
        format!("{trimmed}/")
    };
    Url::parse(&normalized)
        .map_err(|e| ChatError::InvalidRequest(format!("invalid base URL {raw:?}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_gains_trailing_slash() {
        let url = parse_base_url("https://router.huggingface.co/nebius/v1").unwrap();
        assert_eq!(url.as_str(), "https://router.huggingface.co/nebius/v1/");
        assert_eq!(
            url.join("chat/completions").unwrap().as_str(),
            "https://router.huggingface.co/nebius/v1/chat/completions"
        );
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let err = OpenAICompatibleBuilder::new()
            .base_url("not a url")
            .build()
            .unwrap_err();
        assert!(matches!(err, ChatError::InvalidRequest(_)));
    }

    #[test]
    fn defaults_point_at_medical_model() {
        let client = OpenAICompatibleBuilder::new().api_key("k").build().unwrap();
        assert_eq!(client.model(), DEFAULT_MODEL);
        assert_eq!(client.base_url().as_str(), "https://router.huggingface.co/nebius/v1/");
        assert_eq!(client.timeout_seconds(), None);
    }
}
