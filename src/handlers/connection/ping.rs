//! PING handler.

use crate::error::HandlerResult;
use crate::handlers::{Command, Context};
use crate::render;

/// Handler for PING command.
///
/// `PING token` is answered with `PONG server :token`.
#[derive(Debug, Default)]
pub struct PingCommand {
    data: Vec<String>,
}

impl PingCommand {
    pub fn boxed() -> Box<dyn Command> {
        Box::new(Self::default())
    }
}

impl Command for PingCommand {
    fn set_data(&mut self, args: Vec<String>) {
        self.data = args;
    }

    fn is_valid(&self) -> bool {
        self.data.first().is_some_and(|token| !token.is_empty())
    }

    fn execute(&mut self, ctx: &Context<'_>) -> HandlerResult {
        let token = self.data.first().map(String::as_str).unwrap_or_default();
        ctx.send_reply(&render::pong(ctx.server_name(), token))
    }
}
