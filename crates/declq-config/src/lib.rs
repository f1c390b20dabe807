//! # declq-config
//!
//! Layered configuration loading for declq using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`DECLQ_*` prefix, `__` as separator)
//! 2. An explicit file passed with `--config`
//! 3. Project-level `./.declq.toml`
//! 4. User-level `~/.config/declq/config.toml`
//! 5. Built-in defaults
//!
//! Figment maps `DECLQ_RENDER__STYLE` -> `render.style`,
//! `DECLQ_LOG__FILTER` -> `log.filter`, and so on.
//!
//! # Usage
//!
//! ```no_run
//! use declq_config::DeclqConfig;
//!
//! let config = DeclqConfig::load(None).expect("config");
//! println!("indent: {}", config.render.indent_width);
//! ```

mod error;
mod log;
mod render;

pub use error::ConfigError;
pub use log::LogConfig;
pub use render::{MAX_INDENT_WIDTH, RenderConfig};

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};

/// Project-local configuration file name, looked up in the working directory.
pub const PROJECT_CONFIG_FILE: &str = ".declq.toml";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DeclqConfig {
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub log: LogConfig,
}

impl DeclqConfig {
    /// Load and validate configuration from every layer.
    ///
    /// # Errors
    /// Returns [`ConfigError::MissingFile`] if `extra` does not exist,
    /// [`ConfigError::Figment`] for malformed sources, and
    /// [`ConfigError::InvalidValue`] for out-of-range values.
    pub fn load(extra: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = extra.filter(|path| !path.exists()) {
            return Err(ConfigError::MissingFile(path.to_path_buf()));
        }
        let config: Self = Self::figment(extra).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or layer providers on top.
    #[must_use]
    pub fn figment(extra: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: user-global config
        if let Some(global_path) = Self::global_config_path().filter(|path| path.exists()) {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: project-local config
        let local_path = PathBuf::from(PROJECT_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: explicit --config file
        if let Some(path) = extra {
            figment = figment.merge(Toml::file(path));
        }

        // Layer 4: environment variables (highest priority). `DECLQ_LOG` is
        // the log filter read by the CLI, not a config section.
        figment.merge(Env::prefixed("DECLQ_").split("__").ignore(&["log"]))
    }

    /// # Errors
    /// Returns the first invalid section value.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.render.validate()
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("declq").join("config.toml"))
    }
}
