//! Core configuration types and loading.

use super::validation::{ValidationError, validate};
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
    #[error("invalid config: {}", format_errors(.0))]
    Invalid(Vec<ValidationError>),
}

fn format_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Gateway configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Server identity used as the source of numeric replies.
    pub server: ServerConfig,
    /// The connected IRC client.
    pub session: SessionConfig,
    #[serde(default)]
    pub commands: CommandsConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    /// Chat-service users known to the gateway.
    #[serde(default)]
    pub users: Vec<UserBlock>,
    /// Flows mapped to IRC channels.
    #[serde(default)]
    pub channels: Vec<ChannelBlock>,
}

impl Config {
    /// Load and validate configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        content.parse()
    }
}

impl std::str::FromStr for Config {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let config: Config = toml::from_str(s)?;
        validate(&config).map_err(ConfigError::Invalid)?;
        Ok(config)
    }
}

/// Server identity configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Server name (e.g., "irc.flowgate.local").
    pub name: String,
    /// Network name.
    pub network: String,
}

/// Client session configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionConfig {
    pub nick: String,
    /// Whether the client has authenticated with the chat service.
    #[serde(default)]
    pub authenticated: bool,
}

/// IRC command behaviour.
#[derive(Debug, Clone, Deserialize)]
pub struct CommandsConfig {
    /// Service account nick that unauthenticated clients may always see via ISON.
    #[serde(default = "default_reserved_nick")]
    pub reserved_nick: String,
    /// Answer ISON from channel membership instead of an empty list.
    #[serde(default)]
    pub ison_membership_lookup: bool,
}

impl Default for CommandsConfig {
    fn default() -> Self {
        Self {
            reserved_nick: default_reserved_nick(),
            ison_membership_lookup: false,
        }
    }
}

fn default_reserved_nick() -> String {
    "NickServ".to_string()
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Logging configuration. `RUST_LOG` takes precedence over `level`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default)]
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: LogFormat::default(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// A chat-service user.
#[derive(Debug, Clone, Deserialize)]
pub struct UserBlock {
    pub id: String,
    pub nick: String,
    pub name: String,
    pub email: Option<String>,
}

/// A flow mapped to an IRC channel.
#[derive(Debug, Clone, Deserialize)]
pub struct ChannelBlock {
    /// Flow id.
    pub id: String,
    /// IRC channel name.
    pub name: String,
    #[serde(default = "default_true")]
    pub open: bool,
    /// User ids of members.
    #[serde(default)]
    pub members: Vec<String>,
}

fn default_true() -> bool {
    true
}
