use doctor_ai::backends::{OpenAICompatible, OpenAICompatibleBuilder};
use doctor_ai::ChatError;

use crate::config::{AppConfig, ChatConfig, ProviderConfig};

pub(super) fn build_provider(config: &AppConfig) -> Result<OpenAICompatible, ChatError> {
    let builder = OpenAICompatible::builder()
        .base_url(&config.provider.base_url)
        .model(&config.provider.model)
        .api_key(config.provider.resolved_api_key());
    let builder = apply_timeout(builder, &config.provider);
    apply_sampling(builder, &config.chat).build()
}

fn apply_timeout(
    builder: OpenAICompatibleBuilder,
    provider: &ProviderConfig,
) -> OpenAICompatibleBuilder {
    match provider.timeout_seconds {
        Some(timeout) => builder.timeout_seconds(timeout),
        None => builder,
    }
}

fn apply_sampling(
    mut builder: OpenAICompatibleBuilder,
    chat: &ChatConfig,
) -> OpenAICompatibleBuilder {
    if let Some(temperature) = chat.temperature {
        builder = builder.temperature(temperature);
    }
    if let Some(max_tokens) = chat.max_tokens {
        builder = builder.max_tokens(max_tokens);
    }
    if let Some(top_p) = chat.top_p {
        builder = builder.top_p(top_p);
    }
    if let Some(penalty) = chat.presence_penalty {
        builder = builder.presence_penalty(penalty);
    }
    if let Some(penalty) = chat.frequency_penalty {
        builder = builder.frequency_penalty(penalty);
    }
    builder
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_build_hugging_face_client() {
        let provider = build_provider(&AppConfig::default()).unwrap();
        assert_eq!(provider.model(), doctor_ai::backends::DEFAULT_MODEL);
        assert_eq!(
            provider.base_url().as_str(),
            "https://router.huggingface.co/nebius/v1/"
        );
        assert_eq!(provider.timeout_seconds(), None);
        assert_eq!(provider.config.temperature, None);
    }

    #[test]
    fn config_values_reach_the_client() {
        let mut config = AppConfig::default();
        config.provider.base_url = "http://localhost:8080/v1".to_string();
        config.provider.timeout_seconds = Some(20);
        config.chat.temperature = Some(0.7);
        config.chat.presence_penalty = Some(0.6);

        let provider = build_provider(&config).unwrap();

        assert_eq!(provider.base_url().as_str(), "http://localhost:8080/v1/");
        assert_eq!(provider.timeout_seconds(), Some(20));
        assert_eq!(provider.config.temperature, Some(0.7));
        assert_eq!(provider.config.presence_penalty, Some(0.6));
        assert_eq!(provider.config.max_tokens, None);
    }

    #[test]
    fn bad_base_url_fails_at_startup() {
        let mut config = AppConfig::default();
        config.provider.base_url = "::nope::".to_string();
        assert!(matches!(
            build_provider(&config),
            Err(ChatError::InvalidRequest(_))
        ));
    }
}
