//! USERHOST handler for resolving user@host pairs.

use super::requested_nicks;
use crate::error::HandlerResult;
use crate::handlers::{Command, Context};
use crate::proto::irc_eq;
use crate::render;

/// At most this many nicknames are answered per request (RFC 2812).
const MAX_NICKS: usize = 5;

/// Handler for USERHOST command.
///
/// `USERHOST nick [nick ...]`
///
/// Returns `nick=+ident@host` for requested nicknames visible in joined
/// channels. Gateway users are never away, so the flag is always `+`.
#[derive(Debug, Default)]
pub struct UserhostCommand {
    data: Vec<String>,
}

impl UserhostCommand {
    pub fn boxed() -> Box<dyn Command> {
        Box::new(Self::default())
    }
}

impl Command for UserhostCommand {
    fn set_data(&mut self, args: Vec<String>) {
        self.data = args;
    }

    fn is_valid(&self) -> bool {
        requested_nicks(&self.data).next().is_some()
    }

    fn execute(&mut self, ctx: &Context<'_>) -> HandlerResult {
        let server_name = ctx.server_name();
        let channels = ctx.connection.channels();

        let mut replies = Vec::new();
        for target_nick in requested_nicks(&self.data).take(MAX_NICKS) {
            let found = channels
                .iter()
                .flat_map(|channel| channel.members())
                .find(|member| irc_eq(&member.nick, target_nick));
            if let Some(user) = found {
                let (ident, host) = user.ident_host(server_name);
                replies.push(format!("{}=+{}@{}", user.nick, ident, host));
            }
        }

        ctx.send_reply(&render::userhost(server_name, &ctx.nick(), &replies))
    }
}
