//! Thread activity from integrations.

use crate::error::EventError;
use crate::events::format::{first_line, thread_event};
use crate::events::traits::{Event, EventContext, required_field};

/// Integration activity on a thread: content `{title, description?}`.
pub struct ActivityEvent<'a> {
    ctx: EventContext<'a>,
}

pub fn build(ctx: EventContext<'_>) -> Result<Box<dyn Event + '_>, EventError> {
    required_field(&ctx.message, "title")?;
    if ctx.message.thread().is_none() {
        return Err(EventError::InvalidMessage(
            "activity event without thread".to_string(),
        ));
    }
    Ok(Box::new(ActivityEvent { ctx }))
}

impl Event for ActivityEvent<'_> {
    fn context(&self) -> &EventContext<'_> {
        &self.ctx
    }

    fn render(&self) -> String {
        let Some(thread) = self.ctx.message.thread() else {
            return String::new();
        };
        let title = self.ctx.message.field("title").unwrap_or_default();
        let mut description = vec![title];
        if let Some(details) = self.ctx.message.field("description") {
            let details = first_line(details);
            if !details.trim().is_empty() {
                description.push(details);
            }
        }
        let text = thread_event(self.ctx.author(), thread, &description);
        self.ctx.deliver(&text)
    }
}
