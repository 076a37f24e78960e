//! Configuration module for the command-line client.
//!
//! Handles loading configuration from a TOML file and applying
//! command-line/environment overrides for the terminal credentials.

pub mod file;

use std::path::{Path, PathBuf};

use thiserror::Error;
use tinkoff_sdk::config::TerminalConfig;
use tinkoff_sdk::objects::status::is_known_pay_type;
use url::Url;

use crate::config::file::{DefaultsConfig, FileConfig};

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("validation error: {0}")]
    ValidationError(String),
}

/// Credentials given on the command line or through the environment.
#[derive(Debug, Clone, Default)]
pub struct CredentialOverrides {
    pub terminal_key: Option<String>,
    pub password: Option<String>,
}

/// Loaded configuration result containing all parts.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
    pub terminal: TerminalConfig,
    pub defaults: DefaultsConfig,
}

/// Configuration loader that handles the complete loading process.
pub struct ConfigLoader {
    config_path: PathBuf,
    overrides: CredentialOverrides,
}

impl ConfigLoader {
    /// Create a new config loader.
    pub fn new(config_path: impl AsRef<Path>, overrides: CredentialOverrides) -> Self {
        Self {
            config_path: config_path.as_ref().to_path_buf(),
            overrides,
        }
    }

    /// Load and process the configuration.
    ///
    /// This will:
    /// 1. Read the TOML file
    /// 2. Apply credential overrides
    /// 3. Validate the configuration
    /// 4. Build the loaded configuration
    pub fn load(&self) -> Result<LoadedConfig, ConfigError> {
        let config_content = std::fs::read_to_string(&self.config_path)?;
        self.load_str(&config_content)
    }

    fn load_str(&self, config_content: &str) -> Result<LoadedConfig, ConfigError> {
        let mut file_config: FileConfig = toml::from_str(config_content)?;

        if let Some(key) = &self.overrides.terminal_key {
            file_config.terminal.key = key.clone();
        }
        if let Some(password) = &self.overrides.password {
            file_config.terminal.password = password.clone();
        }

        validate(&file_config)?;
        Ok(build_loaded_config(file_config))
    }
}

fn validate(config: &FileConfig) -> Result<(), ConfigError> {
    if config.terminal.key.trim().is_empty() {
        return Err(ConfigError::ValidationError(
            "terminal key is not set".to_string(),
        ));
    }
    if config.terminal.password.is_empty() {
        return Err(ConfigError::ValidationError(
            "terminal password is not set".to_string(),
        ));
    }

    let defaults = &config.defaults;
    if let Some(pay_type) = &defaults.pay_type {
        if !is_known_pay_type(pay_type) {
            return Err(ConfigError::ValidationError(format!(
                "unknown pay type {pay_type:?}, expected \"O\" or \"T\""
            )));
        }
    }
    for (name, value) in [
        ("notification_url", &defaults.notification_url),
        ("success_url", &defaults.success_url),
        ("fail_url", &defaults.fail_url),
    ] {
        if let Some(value) = value {
            Url::parse(value).map_err(|e| {
                ConfigError::ValidationError(format!("defaults.{name} is not a valid url: {e}"))
            })?;
        }
    }
    Ok(())
}

fn build_loaded_config(file_config: FileConfig) -> LoadedConfig {
    let mut terminal = TerminalConfig::new(file_config.terminal.key, file_config.terminal.password);
    if let Some(base_url) = file_config.terminal.base_url {
        terminal = terminal.with_base_url(base_url);
    }

    LoadedConfig {
        terminal,
        defaults: file_config.defaults,
    }
}
