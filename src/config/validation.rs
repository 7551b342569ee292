//! Configuration validation.
//!
//! Validates configuration at startup to catch common errors early.

use super::Config;
use std::collections::HashSet;
use thiserror::Error;

/// Validation errors for configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("server.name is required")]
    MissingServerName,
    #[error("server.network is required")]
    MissingNetworkName,
    #[error("session.nick is required")]
    MissingNick,
    #[error("commands.reserved_nick is required")]
    MissingReservedNick,
    #[error("duplicate user id: {0}")]
    DuplicateUserId(String),
    #[error("duplicate channel id: {0}")]
    DuplicateChannelId(String),
    #[error("channel name must start with '#' or '&', got '{0}'")]
    InvalidChannelName(String),
    #[error("channel {channel} lists unknown member id {user_id}")]
    UnknownMember { channel: String, user_id: String },
}

/// Validate a configuration, returning all errors found.
pub fn validate(config: &Config) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.server.name.trim().is_empty() {
        errors.push(ValidationError::MissingServerName);
    }
    if config.server.network.trim().is_empty() {
        errors.push(ValidationError::MissingNetworkName);
    }
    if config.session.nick.trim().is_empty() {
        errors.push(ValidationError::MissingNick);
    }
    if config.commands.reserved_nick.trim().is_empty() {
        errors.push(ValidationError::MissingReservedNick);
    }

    let mut user_ids = HashSet::new();
    for user in &config.users {
        if !user_ids.insert(user.id.as_str()) {
            errors.push(ValidationError::DuplicateUserId(user.id.clone()));
        }
    }

    let mut channel_ids = HashSet::new();
    for channel in &config.channels {
        if !channel_ids.insert(channel.id.as_str()) {
            errors.push(ValidationError::DuplicateChannelId(channel.id.clone()));
        }
        if !channel.name.starts_with(['#', '&']) {
            errors.push(ValidationError::InvalidChannelName(channel.name.clone()));
        }
        for member in &channel.members {
            if !user_ids.contains(member.as_str()) {
                errors.push(ValidationError::UnknownMember {
                    channel: channel.name.clone(),
                    user_id: member.clone(),
                });
            }
        }
    }

    if errors.is_empty() { Ok(()) } else { Err(errors) }
}
