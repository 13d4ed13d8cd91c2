//! # erpx-config
//!
//! Layered configuration loading for ERPx using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`ERPX_*` prefix, `__` as separator)
//! 2. Project-level `.erpx/config.toml`
//! 3. User-level `~/.config/erpx/config.toml`
//! 4. Built-in defaults
//!
//! Figment maps `ERPX_GENERAL__COMPANY_NAME` -> `general.company_name` and
//! `ERPX_THRESHOLDS__REORDER_MULTIPLIER` -> `thresholds.reorder_multiplier`.
//!
//! ```no_run
//! use erpx_config::ErpxConfig;
//!
//! let config = ErpxConfig::load_with_dotenv().expect("config");
//! println!("{} has a budget of {}", config.general.company_name, config.general.budget_usd);
//! ```

mod error;
mod general;
mod thresholds;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use thresholds::ThresholdsConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ErpxConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub thresholds: ThresholdsConfig,
}

impl ErpxConfig {
    /// Load configuration from all sources, resolving the project file
    /// against the current directory.
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` if a source cannot be parsed and
    /// `ConfigError::InvalidValue` if a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Path::new("."))
    }

    /// Load configuration with `project_root/.erpx/config.toml` as the project layer.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_from(project_root: &Path) -> Result<Self, ConfigError> {
        Self::extract(&Self::figment_in(project_root))
    }

    /// Load `.env` first, then all other sources.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_dotenv();
        Self::load()
    }

    /// Extract and validate a configuration from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn extract(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Check every section for out-of-range values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` naming the offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.general.budget_usd.is_finite() || self.general.budget_usd < 0.0 {
            return Err(ConfigError::InvalidValue {
                field: "general.budget_usd".to_string(),
                reason: format!("{} is not a non-negative amount", self.general.budget_usd),
            });
        }
        self.thresholds.validate()
    }

    /// Provider chain rooted at the current directory.
    pub fn figment() -> Figment {
        Self::figment_in(Path::new("."))
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can add providers on top.
    pub fn figment_in(project_root: &Path) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            tracing::debug!(path = %global_path.display(), "merging user config");
            figment = figment.merge(Toml::file(global_path));
        }

        let local_path = project_root.join(".erpx").join("config.toml");
        if local_path.exists() {
            tracing::debug!(path = %local_path.display(), "merging project config");
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("ERPX_").split("__"))
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("erpx").join("config.toml"))
    }

    /// Load `.env` from the current directory or its ancestors. Missing files are ignored.
    fn load_dotenv() {
        if let Ok(path) = dotenvy::dotenv() {
            tracing::debug!(path = %path.display(), "loaded .env");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = ErpxConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.general.company_name, "My Company");
        assert_eq!(config.thresholds.reorder_multiplier, 2);
    }

    #[test]
    fn negative_budget_rejected() {
        let mut config = ErpxConfig::default();
        config.general.budget_usd = -1.0;
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("general.budget_usd"));
    }

    #[test]
    fn figment_extracts_defaults_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config = ErpxConfig::extract(&ErpxConfig::figment_in(Path::new(".")))
                .expect("defaults extract");
            assert!((config.thresholds.cost_alert_ratio - 0.8).abs() < f64::EPSILON);
            Ok(())
        });
    }
}
