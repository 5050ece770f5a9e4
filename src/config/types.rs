use crate::error::ConfigError;
use crate::share::ShareConfig;
use crate::store::DEFAULT_STORAGE_KEY;
use directories::UserDirs;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use url::Url;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the answer slot - computed from home, not serialized
    #[serde(skip)]
    pub data_dir: PathBuf,
    /// Path to config.toml - computed from home, not serialized
    #[serde(skip)]
    pub config_path: PathBuf,

    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Question bank JSON to use instead of the built-in one.
    #[serde(default)]
    pub question_bank: Option<PathBuf>,

    /// Type descriptor JSON to use instead of the built-in one.
    #[serde(default)]
    pub type_catalog: Option<PathBuf>,

    #[serde(default)]
    pub nickname: Option<String>,

    #[serde(default)]
    pub share: ShareConfig,
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.into()
}

impl Default for Config {
    fn default() -> Self {
        let home =
            UserDirs::new().map_or_else(|| PathBuf::from("."), |u| u.home_dir().to_path_buf());
        let fsmbti_dir = home.join(".fsmbti");

        Self {
            data_dir: fsmbti_dir.join("data"),
            config_path: fsmbti_dir.join("config.toml"),
            storage_key: default_storage_key(),
            question_bank: None,
            type_catalog: None,
            nickname: None,
            share: ShareConfig::default(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage_key.is_empty() {
            return Err(ConfigError::Validation("storage_key must not be empty".into()));
        }
        if !self
            .storage_key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
        {
            return Err(ConfigError::Validation(format!(
                "storage_key {:?} may only contain letters, digits, '_', '-' and '.'",
                self.storage_key
            )));
        }
        if !(50..=1000).contains(&self.share.qr_size) {
            return Err(ConfigError::Validation(format!(
                "share.qr_size must be between 50 and 1000, got {}",
                self.share.qr_size
            )));
        }
        Url::parse(&self.share.qr_endpoint).map_err(|e| {
            ConfigError::Validation(format!(
                "share.qr_endpoint {:?} is not a URL: {e}",
                self.share.qr_endpoint
            ))
        })?;
        Ok(())
    }

    /// Nickname trimmed, with blanks treated as unset.
    pub fn display_nickname(&self) -> Option<&str> {
        self.nickname
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }
}
