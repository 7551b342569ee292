//! Chat messages.

use crate::error::EventError;
use crate::events::traits::{Event, EventContext};

/// A plain chat message. Content is the message text; a leading `/me `
/// turns it into an action.
pub struct MessageEvent<'a> {
    ctx: EventContext<'a>,
}

pub fn build(ctx: EventContext<'_>) -> Result<Box<dyn Event + '_>, EventError> {
    let content = ctx.message.content();
    if !(content.is_string() || content.is_null()) {
        return Err(EventError::InvalidMessage(
            "message content must be text".to_string(),
        ));
    }
    Ok(Box::new(MessageEvent { ctx }))
}

impl MessageEvent<'_> {
    fn text(&self) -> &str {
        self.ctx.message.text().unwrap_or_default()
    }
}

impl Event for MessageEvent<'_> {
    fn context(&self) -> &EventContext<'_> {
        &self.ctx
    }

    fn is_valid(&self) -> bool {
        !self.text().trim().is_empty()
    }

    fn render(&self) -> String {
        let text = self.text();
        match text.strip_prefix("/me ") {
            Some(action) => self.ctx.deliver_action(action),
            None => self.ctx.deliver(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::kinds::test_support::{context, session};
    use serde_json::json;

    #[test]
    fn channel_message_is_privmsg_from_author() {
        let (session, mut rx) = session();
        let event = build(context(&session, json!({
            "event": "message", "flow": "main", "user": "1", "content": "hello\nworld"
        })))
        .unwrap();
        assert!(event.is_valid());
        event.process().unwrap();
        assert_eq!(rx.try_recv().unwrap(), ":alice!alice@example.com PRIVMSG #main :hello");
        assert_eq!(rx.try_recv().unwrap(), ":alice!alice@example.com PRIVMSG #main :world");
    }

    #[test]
    fn private_message_goes_to_own_nick() {
        let (session, _rx) = session();
        let event = build(context(&session, json!({
            "event": "message", "to": "2", "user": "2", "content": "psst"
        })))
        .unwrap();
        assert_eq!(event.render(), ":bob!bob@irc.test PRIVMSG me :psst");
    }

    #[test]
    fn untargeted_message_is_server_notice() {
        let (session, _rx) = session();
        let event = build(context(&session, json!({
            "event": "message", "flow": "unknown", "content": "heads up"
        })))
        .unwrap();
        assert_eq!(event.render(), ":irc.test NOTICE me :heads up");
    }

    #[test]
    fn slash_me_becomes_action() {
        let (session, _rx) = session();
        let event = build(context(&session, json!({
            "event": "message", "flow": "main", "user": "1", "content": "/me waves"
        })))
        .unwrap();
        assert_eq!(
            event.render(),
            ":alice!alice@example.com PRIVMSG #main :\u{1}ACTION waves\u{1}"
        );
    }

    #[test]
    fn empty_message_is_invalid() {
        let (session, _rx) = session();
        let event = build(context(&session, json!({
            "event": "message", "flow": "main", "content": "<p> </p>"
        })))
        .unwrap();
        assert!(!event.is_valid());
    }

    #[test]
    fn object_content_is_rejected() {
        let (session, _rx) = session();
        let result = build(context(&session, json!({
            "event": "message", "flow": "main", "content": {"text": "hi"}
        })));
        assert!(matches!(result, Err(EventError::InvalidMessage(_))));
    }
}
