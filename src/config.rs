//! Configuration loading and management.

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Server identity.
    pub server: ServerConfig,
    /// Command dispatch settings.
    #[serde(default)]
    pub commands: CommandConfig,
}

/// Server identity configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Server name (e.g., "play.straylight.net").
    pub name: String,
    /// Server description.
    #[serde(default)]
    pub description: String,
}

/// Command dispatch configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CommandConfig {
    /// Prefix character that marks a line of text as a command.
    #[serde(default = "default_prefix")]
    pub prefix: char,
}

fn default_prefix() -> char {
    '/'
}

impl Default for CommandConfig {
    fn default() -> Self {
        Self {
            prefix: default_prefix(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "localhost".to_string(),
                description: String::new(),
            },
            commands: CommandConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate settings the parser cannot act on.
    ///
    /// Whitespace and alphanumeric prefixes would make command lines
    /// indistinguishable from chat text, so they are rejected outright.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let prefix = self.commands.prefix;
        if prefix.is_whitespace() || prefix.is_alphanumeric() {
            return Err(ConfigError::Invalid(format!(
                "command prefix '{prefix}' must be a punctuation character"
            )));
        }
        Ok(())
    }
}
