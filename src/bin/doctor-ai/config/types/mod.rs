mod app;
mod chat;
mod logging;
mod provider;

const DEFAULT_LOG_ROTATE_SIZE: u64 = 10 * 1024 * 1024;
const DEFAULT_LOG_ROTATE_KEEP: usize = 5;

pub use app::AppConfig;
pub use chat::ChatConfig;
pub use logging::LoggingConfig;
pub use provider::ProviderConfig;
