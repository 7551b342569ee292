//! Gateway driver.
//!
//! Owns both registries and the client session, and routes each inbound
//! line to the right one. Every line is handled start to finish before the
//! next; a failure is logged and never affects later lines.

use crate::config::{CommandsConfig, Config};
use crate::error::{EventError, HandlerError, StartupError};
use crate::events::{EventRegistry, HtmlStripper, RawPayload};
use crate::handlers::{CommandRegistry, Context, Outcome};
use crate::proto::parse_line;
use crate::render;
use crate::state::Session;
use crate::telemetry::spans;
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// What happened to a chat-service payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Sent,
    /// The target channel is closed.
    Dropped,
    /// The event was built but had nothing worth sending.
    Skipped,
}

pub struct Gateway {
    commands: CommandRegistry,
    events: EventRegistry,
    session: Session,
    settings: CommandsConfig,
}

impl Gateway {
    /// Build a gateway from config. The receiver yields every reply line.
    pub fn new(config: &Config) -> Result<(Self, mpsc::UnboundedReceiver<String>), StartupError> {
        let (session, replies) = Session::from_config(config);
        let gateway = Self::with_session(session, config.commands.clone())?;
        Ok((gateway, replies))
    }

    pub fn with_session(session: Session, settings: CommandsConfig) -> Result<Self, StartupError> {
        let commands = CommandRegistry::new()?;
        let events = EventRegistry::new(Box::new(HtmlStripper::new()?))?;
        debug!(commands = ?commands.tags(), events = ?events.tags(), "Registries built");
        Ok(Self {
            commands,
            events,
            session,
            settings,
        })
    }

    /// Handle one raw inbound line. Bytes that are not UTF-8 are replaced
    /// so a single bad line cannot stall the stream.
    pub fn handle_raw(&self, raw: &[u8]) {
        match std::str::from_utf8(raw) {
            Ok(line) => self.handle_line(line),
            Err(e) => {
                warn!(error = %e, "Inbound line is not valid UTF-8, decoding lossily");
                self.handle_line(&String::from_utf8_lossy(raw));
            }
        }
    }

    /// Handle one inbound line: a JSON object is a chat-service payload,
    /// anything else an IRC command line.
    pub fn handle_line(&self, line: &str) {
        let line = line.trim();
        if line.is_empty() {
            return;
        }

        if line.starts_with('{') {
            match self.handle_event(line) {
                Ok(delivery) => debug!(?delivery, "Event handled"),
                Err(e @ EventError::UnsupportedMessage(_)) => {
                    warn!(error = %e, code = e.error_code(), "Unsupported event")
                }
                Err(e) => warn!(error = %e, code = e.error_code(), "Event failed"),
            }
        } else if let Err(e) = self.handle_command(line) {
            warn!(error = %e, code = e.error_code(), "Command failed");
        }
    }

    /// Dispatch an IRC command line. Unknown commands get ERR_UNKNOWNCOMMAND.
    pub fn handle_command(&self, line: &str) -> Result<Outcome, HandlerError> {
        let Some(parsed) = parse_line(line) else {
            return Ok(Outcome::Skipped);
        };
        let name = parsed.command.to_ascii_uppercase();
        let ctx = Context::new(&self.session, &self.settings);

        let outcome = self.commands.dispatch(&ctx, &name, parsed.args)?;
        if outcome == Outcome::Unknown {
            let reply = render::unknown_command(ctx.server_name(), &ctx.nick(), &name);
            ctx.send_reply(&reply)?;
        }
        Ok(outcome)
    }

    /// Dispatch a chat-service payload given as JSON.
    pub fn handle_event(&self, json: &str) -> Result<Delivery, EventError> {
        let payload: RawPayload = serde_json::from_str(json)
            .map_err(|e| EventError::InvalidMessage(format!("malformed payload: {e}")))?;
        let _span = spans::event(&payload.event, payload.flow.as_deref()).entered();

        let Some(event) = self.events.from_message(&self.session, payload)? else {
            return Ok(Delivery::Dropped);
        };
        if !event.is_valid() {
            debug!("Event has nothing to send, skipping");
            return Ok(Delivery::Skipped);
        }
        event.process()?;
        Ok(Delivery::Sent)
    }

    /// Command usage statistics, most used first.
    pub fn command_stats(&self) -> Vec<(&'static str, u64)> {
        self.commands.command_stats()
    }
}
