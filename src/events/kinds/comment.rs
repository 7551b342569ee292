//! Comments on flow items.

use crate::error::EventError;
use crate::events::format::single_line;
use crate::events::traits::{Event, EventContext, required_field};

/// A comment on an item: content `{title, text}`.
pub struct CommentEvent<'a> {
    ctx: EventContext<'a>,
}

pub fn build(ctx: EventContext<'_>) -> Result<Box<dyn Event + '_>, EventError> {
    required_field(&ctx.message, "text")?;
    Ok(Box::new(CommentEvent { ctx }))
}

impl CommentEvent<'_> {
    fn title(&self) -> String {
        single_line(self.ctx.message.field("title").unwrap_or_default())
    }

    fn text(&self) -> &str {
        self.ctx.message.field("text").unwrap_or_default()
    }
}

impl Event for CommentEvent<'_> {
    fn context(&self) -> &EventContext<'_> {
        &self.ctx
    }

    fn is_valid(&self) -> bool {
        !self.text().trim().is_empty()
    }

    fn render(&self) -> String {
        let title = self.title();
        let text = self
            .text()
            .lines()
            .map(|line| format!("[{title}] << {line}"))
            .collect::<Vec<_>>()
            .join("\n");
        self.ctx.deliver(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::kinds::test_support::{context, session};
    use serde_json::json;

    #[test]
    fn renders_title_and_each_line() {
        let (session, _rx) = session();
        let event = build(context(&session, json!({
            "event": "comment", "flow": "main", "user": "2",
            "content": {"title": "Roadmap", "text": "<p>looks good</p><p>ship it</p>"}
        })))
        .unwrap();
        assert_eq!(
            event.render(),
            ":bob!bob@irc.test PRIVMSG #main :[Roadmap] << looks good\n\
             :bob!bob@irc.test PRIVMSG #main :[Roadmap] << ship it"
        );
    }

    #[test]
    fn title_with_breaks_stays_on_each_line() {
        let (session, _rx) = session();
        let event = build(context(&session, json!({
            "event": "comment", "flow": "main", "user": "2",
            "content": {"title": "Road<br>map", "text": "ok"}
        })))
        .unwrap();
        assert_eq!(event.render(), ":bob!bob@irc.test PRIVMSG #main :[Road map] << ok");
    }

    #[test]
    fn missing_text_is_invalid_message() {
        let (session, _rx) = session();
        let result = build(context(&session, json!({
            "event": "comment", "flow": "main", "content": {"title": "x"}
        })));
        match result {
            Err(EventError::InvalidMessage(reason)) => {
                assert_eq!(reason, "comment event without content.text")
            }
            _ => panic!("expected InvalidMessage"),
        }
    }
}
