use std::path::{Path, PathBuf};

use super::error::ConfigError;

const APP_DIR: &str = "doctor-ai";

#[derive(Debug, Clone)]
pub struct ConfigPaths {
    pub config_file: PathBuf,
    pub logs_dir: PathBuf,
}

impl ConfigPaths {
    pub fn resolve() -> Result<Self, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::MissingHome)?;
        Ok(Self::under_home(&home))
    }

    /// `~/.config/doctor-ai/config.toml` and `~/.local/share/doctor-ai/logs`.
    pub fn under_home(home: &Path) -> Self {
        Self {
            config_file: home.join(".config").join(APP_DIR).join("config.toml"),
            logs_dir: home
                .join(".local")
                .join("share")
                .join(APP_DIR)
                .join("logs"),
        }
    }
}
