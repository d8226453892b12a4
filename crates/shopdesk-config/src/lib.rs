//! # shopdesk-config
//!
//! Layered configuration loading for Shopdesk using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SHOPDESK_*` prefix, `__` as separator)
//! 2. Project-level `.shopdesk/config.toml`
//! 3. User-level `~/.config/shopdesk/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `SHOPDESK_API__BASE_URL` -> `api.base_url`,
//! `SHOPDESK_TENANT__DEFAULT_SHOP_ID` -> `tenant.default_shop_id`, etc.
//! The `__` (double underscore) separates nested config sections.

mod api;
mod error;
mod tenant;

pub use api::ApiConfig;
pub use error::ConfigError;
pub use tenant::TenantConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ShopdeskConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub tenant: TenantConfig,
}

impl ShopdeskConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` — use [`Self::load_with_dotenv`] if `.env`
    /// loading is wanted.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if figment extraction fails or a field fails
    /// validation.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// Calls `dotenvy` before building the figment. This is the typical entry
    /// point for the CLI and for integration tests.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if figment extraction fails or a field fails
    /// validation.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add additional
    /// providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".shopdesk/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("SHOPDESK_").split("__"))
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.api.base_url.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "api.base_url".into(),
                reason: "must not be empty".into(),
            });
        }
        if self.api.timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                field: "api.timeout_secs".into(),
                reason: "must be at least 1".into(),
            });
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("shopdesk").join("config.toml"))
    }
}
