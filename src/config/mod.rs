//! Configuration management module.
//!
//! Supports loading configuration from:
//! - A `.env` file (environment variables only)
//! - TOML files (config/default.toml, config/{profile}.toml)
//! - Environment variables with `IDGEN_FORM__<SECTION>__<KEY>` pattern

mod form;
mod server;

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

pub use form::FormConfig;
pub use server::ServerConfig;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration.
    #[serde(default)]
    pub server: ServerConfig,

    /// Initial form values and edit limits.
    #[serde(default)]
    pub form: FormConfig,

    /// Observability configuration.
    #[serde(default)]
    pub observability: ObservabilityConfig,

    /// Static asset configuration.
    #[serde(default)]
    pub assets: AssetsConfig,
}

impl AppConfig {
    /// Load configuration from files and environment.
    ///
    /// Configuration is loaded in the following order (later sources override earlier):
    /// 1. `config/default.toml`
    /// 2. `config/{IDGEN_PROFILE}.toml` (if `IDGEN_PROFILE` is set)
    /// 3. Environment variables with `IDGEN_FORM__` prefix
    ///
    /// A `.env` file in the working directory is read first, so its variables
    /// take part in steps 2 and 3.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        // Missing .env is fine
        let _ = dotenvy::dotenv();

        Self::load_from(Path::new("config"))
    }

    /// Load configuration using `dir` as the directory holding the TOML files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded or is invalid.
    pub fn load_from(dir: &Path) -> Result<Self, ConfigError> {
        let profile =
            std::env::var("IDGEN_PROFILE").unwrap_or_else(|_| "development".to_string());

        let default_file: PathBuf = dir.join("default");
        let profile_file: PathBuf = dir.join(&profile);

        let config = Config::builder()
            .add_source(File::from(default_file).required(false))
            .add_source(File::from(profile_file).required(false))
            // IDGEN_FORM__SERVER__PORT=8080 -> server.port = 8080
            .add_source(
                Environment::with_prefix("IDGEN_FORM")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let app_config: Self = config.try_deserialize()?;
        app_config.validate()?;

        Ok(app_config)
    }

    /// Validate the configuration.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Message("server.port cannot be 0".to_string()));
        }

        self.form.validate()?;

        if !matches!(self.observability.log_format.as_str(), "text" | "json") {
            return Err(ConfigError::Message(format!(
                "observability.log_format must be \"text\" or \"json\", got \"{}\"",
                self.observability.log_format
            )));
        }

        Ok(())
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ObservabilityConfig {
    /// Log level.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log format: "text" or "json".
    #[serde(default = "default_log_format")]
    pub log_format: String,

    /// Install the Prometheus recorder behind `/metrics`.
    #[serde(default = "default_metrics_enabled")]
    pub metrics_enabled: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

const fn default_metrics_enabled() -> bool {
    true
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: default_log_format(),
            metrics_enabled: default_metrics_enabled(),
        }
    }
}

/// Static asset (stylesheet) configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct AssetsConfig {
    /// Serve files under `/static`.
    #[serde(default = "default_assets_enabled")]
    pub enabled: bool,

    /// Directory the files are served from.
    #[serde(default = "default_assets_path")]
    pub path: String,
}

const fn default_assets_enabled() -> bool {
    true
}

fn default_assets_path() -> String {
    "./static".to_string()
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            enabled: default_assets_enabled(),
            path: default_assets_path(),
        }
    }
}
