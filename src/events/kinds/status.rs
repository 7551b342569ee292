//! User status updates.

use crate::error::EventError;
use crate::events::traits::{Event, EventContext};

/// A status change. Content is the new status text.
pub struct StatusEvent<'a> {
    ctx: EventContext<'a>,
}

pub fn build(ctx: EventContext<'_>) -> Result<Box<dyn Event + '_>, EventError> {
    Ok(Box::new(StatusEvent { ctx }))
}

impl StatusEvent<'_> {
    fn status(&self) -> &str {
        self.ctx.message.text().unwrap_or_default().trim()
    }
}

impl Event for StatusEvent<'_> {
    fn context(&self) -> &EventContext<'_> {
        &self.ctx
    }

    fn is_valid(&self) -> bool {
        !self.status().is_empty()
    }

    fn render(&self) -> String {
        self.ctx
            .deliver_action(&format!("changed status to: {}", self.status()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::kinds::test_support::{context, session};
    use serde_json::json;

    #[test]
    fn renders_status_action() {
        let (session, _rx) = session();
        let event = build(context(&session, json!({
            "event": "status", "flow": "main", "user": "2", "content": " lunch "
        })))
        .unwrap();
        assert_eq!(
            event.render(),
            ":bob!bob@irc.test PRIVMSG #main :\u{1}ACTION changed status to: lunch\u{1}"
        );
    }

    #[test]
    fn untargeted_status_is_notice_naming_author() {
        let (session, _rx) = session();
        let event = build(context(&session, json!({
            "event": "status", "user": "2", "content": "away"
        })))
        .unwrap();
        assert_eq!(event.render(), ":irc.test NOTICE me :bob changed status to: away");
    }

    #[test]
    fn blank_status_is_invalid() {
        let (session, _rx) = session();
        let event = build(context(&session, json!({
            "event": "status", "flow": "main", "content": ""
        })))
        .unwrap();
        assert!(!event.is_valid());
    }
}
