//! # lumen-config
//!
//! Layered configuration loading for Lumen using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`LUMEN_*` prefix, `__` as separator)
//! 2. Project-level `.lumen/config.toml`
//! 3. User-level `~/.config/lumen/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `LUMEN_BROWSE__REFERENCE_DATE` -> `browse.reference_date`,
//! `LUMEN_GENERAL__DEFAULT_LIMIT` -> `general.default_limit`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use lumen_config::LumenConfig;
//!
//! let config = LumenConfig::load_with_dotenv().expect("config");
//! println!("showing {} tags", config.browse.tag_cloud_size);
//! ```

mod browse;
mod error;
mod general;

pub use browse::BrowseConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct LumenConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub browse: BrowseConfig,
}

impl LumenConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`load_with_dotenv`](Self::load_with_dotenv)
    /// if you need `.env` file loading.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration after reading `.env` from the current directory.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        if let Err(error) = dotenvy::dotenv() {
            if !error.not_found() {
                tracing::warn!(%error, "ignoring unreadable .env file");
            }
        }
        Self::load()
    }

    /// Build the figment provider chain.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".lumen/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("LUMEN_").split("__"))
    }

    /// Reject values that extract cleanly but cannot be used.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.browse.reference_date()?;
        if self.general.default_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "general.default_limit".to_string(),
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("lumen").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_validates() {
        let config = LumenConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.general.default_limit, 20);
        assert_eq!(config.browse.tag_cloud_size, 6);
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config: LumenConfig = LumenConfig::figment().extract()?;
            assert!(config.browse.reference_date.is_empty());
            assert_eq!(config.general.default_limit, 20);
            Ok(())
        });
    }

    #[test]
    fn zero_limit_is_rejected() {
        let mut config = LumenConfig::default();
        config.general.default_limit = 0;
        assert!(config.validate().is_err());
    }
}
