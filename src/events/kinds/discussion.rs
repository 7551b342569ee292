//! Discussion replies inside threads.

use crate::error::EventError;
use crate::events::format::{first_line, thread_event};
use crate::events::traits::{Event, EventContext, required_field};

/// A reply in a thread: content `{title, body?}`. Only the first line of
/// the body is shown.
pub struct DiscussionEvent<'a> {
    ctx: EventContext<'a>,
}

pub fn build(ctx: EventContext<'_>) -> Result<Box<dyn Event + '_>, EventError> {
    required_field(&ctx.message, "title")?;
    if ctx.message.thread().is_none() {
        return Err(EventError::InvalidMessage(
            "discussion event without thread".to_string(),
        ));
    }
    Ok(Box::new(DiscussionEvent { ctx }))
}

impl Event for DiscussionEvent<'_> {
    fn context(&self) -> &EventContext<'_> {
        &self.ctx
    }

    fn render(&self) -> String {
        let Some(thread) = self.ctx.message.thread() else {
            return String::new();
        };
        let summary = self
            .ctx
            .message
            .field("body")
            .map(first_line)
            .filter(|line| !line.trim().is_empty())
            .or_else(|| self.ctx.message.field("title"))
            .unwrap_or_default();
        self.ctx
            .deliver(&thread_event(self.ctx.author(), thread, &[summary]))
    }
}
