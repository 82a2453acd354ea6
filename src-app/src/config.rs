//! Application configuration storage
//!
//! Persists auth collaborator, verification and theme settings as JSON in
//! the data directory.

use std::path::{Path, PathBuf};

use prompthub_auth::{AuthClientConfig, VerificationConfig};
use prompthub_catalog::ThemePreference;
use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::constants::paths;

/// Full application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Auth collaborator selection and timings
    #[serde(default)]
    pub auth: AuthClientConfig,
    /// Verification countdown settings
    #[serde(default)]
    pub verification: VerificationConfig,
    /// Theme preference restored at startup
    #[serde(default)]
    pub theme: ThemePreference,
}

impl AppConfig {
    /// Load configuration from disk, falling back to defaults when the file
    /// does not exist yet
    pub async fn load(data_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = data_dir.join(paths::CONFIG_FILE);

        if !fs::try_exists(&config_path).await? {
            log::debug!("No config at {:?}, using defaults", config_path);
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&config_path).await?;
        serde_json::from_str(&contents).map_err(ConfigError::Parse)
    }

    /// Save configuration to disk
    pub async fn save(&self, data_dir: &Path) -> Result<(), ConfigError> {
        // Ensure directory exists
        fs::create_dir_all(data_dir).await?;

        let config_path = data_dir.join(paths::CONFIG_FILE);
        let contents = serde_json::to_string_pretty(self).map_err(ConfigError::Serialize)?;

        fs::write(&config_path, contents).await?;

        log::info!("Configuration saved to {:?}", config_path);
        Ok(())
    }
}

/// `$PROMPTHUB_DATA_DIR`, else `<platform config dir>/prompthub`
pub fn data_dir() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os(paths::DATA_DIR_ENV).filter(|d| !d.is_empty()) {
        return Some(PathBuf::from(dir));
    }
    dirs::config_dir().map(|dir| dir.join(paths::APP_DIR))
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(serde_json::Error),
    #[error("Failed to serialize config: {0}")]
    Serialize(serde_json::Error),
}
