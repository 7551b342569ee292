//! ISON handler for online status queries.

use super::requested_nicks;
use crate::error::HandlerResult;
use crate::handlers::{Command, Context};
use crate::proto::irc_to_lower;
use crate::render;
use std::collections::BTreeSet;

/// Handler for ISON command.
///
/// `ISON nick [nick ...]`
///
/// Replies with the subset of the requested nicknames that are available,
/// case-folded. The reply is always sent, even when nobody matches.
#[derive(Debug, Default)]
pub struct IsonCommand {
    data: Option<Vec<String>>,
}

impl IsonCommand {
    pub fn boxed() -> Box<dyn Command> {
        Box::new(Self::default())
    }

    fn available(&self, ctx: &Context<'_>) -> Vec<String> {
        let requested: BTreeSet<String> = self
            .data
            .as_deref()
            .map(requested_nicks)
            .into_iter()
            .flatten()
            .map(irc_to_lower)
            .collect();

        // Unauthenticated clients can always see the services account.
        let reserved = irc_to_lower(&ctx.settings.reserved_nick);
        if !ctx.authenticated() && requested.contains(&reserved) {
            return vec![reserved];
        }

        if !ctx.settings.ison_membership_lookup {
            return Vec::new();
        }

        let mut available = BTreeSet::new();
        for channel in ctx.connection.channels() {
            for member in channel.members() {
                let nick = irc_to_lower(&member.nick);
                if requested.contains(&nick) {
                    available.insert(nick);
                }
            }
        }
        available.into_iter().collect()
    }
}

impl Command for IsonCommand {
    fn set_data(&mut self, args: Vec<String>) {
        self.data = Some(args);
    }

    fn is_valid(&self) -> bool {
        self.data
            .as_deref()
            .is_some_and(|args| requested_nicks(args).next().is_some())
    }

    fn execute(&mut self, ctx: &Context<'_>) -> HandlerResult {
        let available = self.available(ctx);
        let reply = render::ison(ctx.server_name(), &ctx.nick(), &available);
        ctx.send_reply(&reply)
    }
}
