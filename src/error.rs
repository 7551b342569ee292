//! Unified error handling for flowgate.
//!
//! Each concern gets its own `thiserror` enum. Nothing here is retried: a
//! failure ends processing of the single inbound item that produced it.

use thiserror::Error;

// ============================================================================
// Reply errors (outbound stream)
// ============================================================================

/// Failure to hand a reply to the connection's outbound stream.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplyError {
    #[error("reply stream closed")]
    Closed,
}

// ============================================================================
// Handler errors (IRC command processing)
// ============================================================================

/// Errors that can occur during command handling.
#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("reply failed: {0}")]
    Reply(#[from] ReplyError),
}

impl HandlerError {
    /// Get a static error code string for log labeling.
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Reply(_) => "reply_error",
        }
    }
}

/// Result type for command handlers.
pub type HandlerResult = Result<(), HandlerError>;

// ============================================================================
// Event errors (chat-service payload processing)
// ============================================================================

/// Errors raised while turning a chat-service payload into IRC output.
///
/// A closed target channel is not represented here: that outcome is a
/// silent drop, reported as "no event" by the factory.
#[derive(Debug, Error)]
pub enum EventError {
    /// No handler is registered for the payload's `event` tag.
    #[error("event '{0}' is not supported")]
    UnsupportedMessage(String),

    /// The payload passed tag lookup but its body is unusable.
    #[error("invalid message: {0}")]
    InvalidMessage(String),

    #[error("reply failed: {0}")]
    Reply(#[from] ReplyError),
}

impl EventError {
    #[inline]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::UnsupportedMessage(_) => "unsupported_message",
            Self::InvalidMessage(_) => "invalid_message",
            Self::Reply(_) => "reply_error",
        }
    }
}

// ============================================================================
// Registry errors (startup)
// ============================================================================

/// Errors raised while building a tag registry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("{registry} registry: tag '{tag}' is already registered")]
    DuplicateTag {
        registry: &'static str,
        tag: &'static str,
    },
}

/// Errors that prevent the gateway from starting.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("failed to build sanitizer: {0}")]
    Sanitizer(#[from] regex::Error),
}
