//! The chat-service event contract.

use super::sanitize::SanitizedMessage;
use super::target::Target;
use crate::error::EventError;
use crate::render;
use crate::state::{Connection, User};
use std::sync::Arc;

/// Everything an event needs, resolved before it is built.
pub struct EventContext<'a> {
    pub connection: &'a dyn Connection,
    pub target: Target,
    /// The originating user; absent for system events.
    pub user: Option<Arc<User>>,
    pub message: SanitizedMessage,
}

impl EventContext<'_> {
    /// Source prefix for lines sent on behalf of the originating user.
    pub fn source(&self) -> String {
        let server_name = self.connection.server_name();
        self.user
            .as_ref()
            .map_or_else(|| server_name.to_string(), |u| u.irc_prefix(server_name))
    }

    /// Name used for the author in formatted text.
    pub fn author(&self) -> &str {
        self.user.as_ref().map_or("unknown", |u| u.nick.as_str())
    }

    /// IRC recipient: the channel name, or the client's own nick for private
    /// and untargeted events.
    pub fn recipient(&self) -> String {
        match &self.target {
            Target::Channel(channel) => channel.name.clone(),
            Target::User(_) | Target::None => self.connection.nick(),
        }
    }

    /// Render text as a message to the recipient. Untargeted events go out
    /// as NOTICEs from the server.
    pub fn deliver(&self, text: &str) -> String {
        match self.target {
            Target::None => render::notice(self.connection.server_name(), &self.recipient(), text),
            _ => render::privmsg(&self.source(), &self.recipient(), text),
        }
    }

    /// Render text as a CTCP ACTION to the recipient.
    pub fn deliver_action(&self, text: &str) -> String {
        match self.target {
            Target::None => render::notice(
                self.connection.server_name(),
                &self.recipient(),
                &format!("{} {}", self.author(), text),
            ),
            _ => render::action(&self.source(), &self.recipient(), text),
        }
    }
}

/// A chat-service event handler instance.
///
/// Built by the event registry's `from_message`, processed once, dropped.
pub trait Event {
    fn context(&self) -> &EventContext<'_>;

    /// Whether the event is worth sending. Kinds override this to reject
    /// bodies that parsed but carry nothing to show.
    fn is_valid(&self) -> bool {
        true
    }

    /// Render the event to IRC text. May be empty.
    fn render(&self) -> String;

    /// Render and send through the connection.
    fn process(&self) -> Result<(), EventError> {
        let text = self.render();
        if !text.is_empty() {
            self.context().connection.send_reply(&text)?;
        }
        Ok(())
    }
}

/// Builds a concrete event from its resolved context.
pub type EventFactory = for<'a> fn(EventContext<'a>) -> Result<Box<dyn Event + 'a>, EventError>;

/// Read a required string field of object content.
pub(crate) fn required_field<'m>(
    message: &'m SanitizedMessage,
    key: &str,
) -> Result<&'m str, EventError> {
    message.field(key).ok_or_else(|| {
        EventError::InvalidMessage(format!("{} event without content.{key}", message.event()))
    })
}
