//! Command execution context.

use crate::config::CommandsConfig;
use crate::error::HandlerResult;
use crate::state::Connection;

/// Context passed to each command's `execute`.
pub struct Context<'a> {
    /// The client connection the command arrived on.
    pub connection: &'a dyn Connection,
    /// Command behaviour settings.
    pub settings: &'a CommandsConfig,
}

impl<'a> Context<'a> {
    pub fn new(connection: &'a dyn Connection, settings: &'a CommandsConfig) -> Self {
        Self {
            connection,
            settings,
        }
    }

    pub fn authenticated(&self) -> bool {
        self.connection.is_authenticated()
    }

    pub fn nick(&self) -> String {
        self.connection.nick()
    }

    pub fn server_name(&self) -> &str {
        self.connection.server_name()
    }

    /// Send a rendered reply to the client.
    #[inline]
    pub fn send_reply(&self, text: &str) -> HandlerResult {
        self.connection.send_reply(text)?;
        Ok(())
    }
}
