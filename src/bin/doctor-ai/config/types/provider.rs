use doctor_ai::backends::{DEFAULT_BASE_URL, DEFAULT_MODEL};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

/// Credential compiled into the binary.
const BUILT_IN_API_KEY: Option<&str> = option_env!("DOCTOR_AI_API_KEY");

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    pub base_url: String,
    pub model: String,
    pub api_key: Option<SecretString>,
    pub timeout_seconds: Option<u64>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            api_key: None,
            timeout_seconds: None,
        }
    }
}

impl ProviderConfig {
    /// The configured key, else the built-in one, else empty.
    pub fn resolved_api_key(&self) -> String {
        match &self.api_key {
            Some(key) => key.expose_secret().clone(),
            None => BUILT_IN_API_KEY.unwrap_or_default().to_string(),
        }
    }
}
