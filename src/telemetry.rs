//! Logging setup and span helpers.

use crate::config::{LogFormat, LoggingConfig};
use std::time::Instant;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// Output goes to stderr; stdout is reserved for the IRC reply stream.
pub fn init(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.level));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr);

    match config.format {
        LogFormat::Pretty => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

/// Guard for timing command execution.
///
/// Logs the command latency when dropped.
pub struct CommandTimer {
    command: String,
    start: Instant,
}

impl CommandTimer {
    /// Start timing a command.
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            start: Instant::now(),
        }
    }
}

impl Drop for CommandTimer {
    fn drop(&mut self) {
        let micros = self.start.elapsed().as_micros() as u64;
        debug!(command = %self.command, elapsed_us = micros, "Command finished");
    }
}

/// Standardized span constructors for gateway dispatch.
pub mod spans {
    use tracing::{Span, debug_span};

    /// Span for one IRC command dispatch.
    pub fn command(name: &str, nick: &str) -> Span {
        debug_span!("irc.command", command = %name, nick = %nick)
    }

    /// Span for one chat-service event dispatch.
    pub fn event(tag: &str, flow: Option<&str>) -> Span {
        debug_span!("flow.event", event = %tag, flow = flow)
    }
}
