use serde::Deserialize;

use super::{ChatConfig, LoggingConfig, ProviderConfig};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub provider: ProviderConfig,
    pub chat: ChatConfig,
    pub logging: LoggingConfig,
}
