//! # align-config
//!
//! Layered configuration for the alignment API client using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`ALIGNPRO_*` prefix, `__` as separator)
//! 2. Project-level `.alignpro/config.toml`
//! 3. User-level `~/.config/alignpro/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `ALIGNPRO_API__BASE_URL` -> `api.base_url` and
//! `ALIGNPRO_BUILD__ENVIRONMENT` -> `build.environment`.
//!
//! # Usage
//!
//! ```no_run
//! use align_config::AlignConfig;
//!
//! let config = AlignConfig::load_with_dotenv().expect("config");
//! println!("talking to {}", config.api.normalized_base_url());
//! ```

mod api;
mod build;
mod error;

pub use api::ApiConfig;
pub use build::BuildConfig;
pub use error::ConfigError;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AlignConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub build: BuildConfig,
}

impl AlignConfig {
    /// Load configuration from TOML files and environment variables, then
    /// validate it.
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if a source cannot be parsed or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        // A missing .env is normal.
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can extract from it directly or layer more providers.
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
        let local_path = PathBuf::from(".alignpro/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("ALIGNPRO_").split("__"))
    }

    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] for the first invalid field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.api.validate()
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("alignpro").join("config.toml"))
    }
}
