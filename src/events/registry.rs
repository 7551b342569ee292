//! Event registry and the `from_message` factory.
//!
//! Unlike IRC commands, the event stream is defined by the chat service, so
//! an unregistered tag is always an error.

use super::kinds;
use super::payload::RawPayload;
use super::sanitize::{MessageProcessor, Sanitizer};
use super::target::{Resolution, resolve};
use super::traits::{Event, EventContext, EventFactory};
use crate::error::{EventError, RegistryError};
use crate::registry::TagRegistry;
use crate::state::Connection;
use tracing::debug;

/// Every event kind the gateway understands.
const EVENTS: &[(&str, EventFactory)] = &[
    ("message", kinds::message::build),
    ("comment", kinds::comment::build),
    ("action", kinds::action::build),
    ("status", kinds::status::build),
    ("file", kinds::file::build),
    ("mail", kinds::mail::build),
    ("activity", kinds::activity::build),
    ("discussion", kinds::discussion::build),
];

/// Registry of event kinds plus the sanitizer applied to every payload.
pub struct EventRegistry {
    events: TagRegistry<EventFactory>,
    sanitizer: Box<dyn Sanitizer>,
}

impl EventRegistry {
    /// Create a registry with all built-in event kinds registered.
    pub fn new(sanitizer: Box<dyn Sanitizer>) -> Result<Self, RegistryError> {
        Self::with_events(sanitizer, EVENTS.iter().copied())
    }

    pub fn with_events(
        sanitizer: Box<dyn Sanitizer>,
        entries: impl IntoIterator<Item = (&'static str, EventFactory)>,
    ) -> Result<Self, RegistryError> {
        Ok(Self {
            events: TagRegistry::from_entries("event", entries)?,
            sanitizer,
        })
    }

    pub fn tags(&self) -> Vec<&'static str> {
        self.events.tags()
    }

    /// Build the event for `payload`.
    ///
    /// Returns `Ok(None)` when the payload targets a closed channel; the
    /// caller must not reply in that case.
    pub fn from_message<'a>(
        &self,
        connection: &'a dyn Connection,
        payload: RawPayload,
    ) -> Result<Option<Box<dyn Event + 'a>>, EventError> {
        let factory = *self
            .events
            .lookup(&payload.event)
            .ok_or_else(|| EventError::UnsupportedMessage(payload.event.clone()))?;

        let (target, user) = match resolve(connection, &payload) {
            Resolution::Drop => {
                debug!(event = %payload.event, flow = ?payload.flow, "Target channel closed, dropping event");
                return Ok(None);
            }
            Resolution::Deliver { target, user } => (target, user),
        };

        let message = MessageProcessor::new(self.sanitizer.as_ref()).perform(payload);
        let ctx = EventContext {
            connection,
            target,
            user,
            message,
        };
        factory(ctx).map(Some)
    }
}
