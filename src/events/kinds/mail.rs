//! Team inbox email.

use crate::error::EventError;
use crate::events::format::team_inbox_event;
use crate::events::traits::{Event, EventContext, required_field};
use serde_json::Value;

const INTEGRATION: &str = "Email";

/// An email delivered to the team inbox: content `{subject, from: [{name?, address}]}`.
pub struct MailEvent<'a> {
    ctx: EventContext<'a>,
}

pub fn build(ctx: EventContext<'_>) -> Result<Box<dyn Event + '_>, EventError> {
    required_field(&ctx.message, "subject")?;
    Ok(Box::new(MailEvent { ctx }))
}

impl MailEvent<'_> {
    /// Display name of the first sender, else their address.
    fn sender(&self) -> &str {
        let first = self
            .ctx
            .message
            .content()
            .get("from")
            .and_then(Value::as_array)
            .and_then(|from| from.first());

        first
            .and_then(|f| {
                f.get("name")
                    .and_then(Value::as_str)
                    .filter(|name| !name.is_empty())
                    .or_else(|| f.get("address").and_then(Value::as_str))
            })
            .unwrap_or("unknown sender")
    }
}

impl Event for MailEvent<'_> {
    fn context(&self) -> &EventContext<'_> {
        &self.ctx
    }

    fn render(&self) -> String {
        let subject = self.ctx.message.field("subject").unwrap_or_default();
        let line = format!("{}: {}", self.sender(), subject);
        self.ctx.deliver(&team_inbox_event(INTEGRATION, &[&line]))
    }
}
