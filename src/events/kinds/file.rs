//! File uploads.

use crate::error::EventError;
use crate::events::traits::{Event, EventContext, required_field};

/// An uploaded file: content `{file_name, path?}`.
pub struct FileEvent<'a> {
    ctx: EventContext<'a>,
}

pub fn build(ctx: EventContext<'_>) -> Result<Box<dyn Event + '_>, EventError> {
    required_field(&ctx.message, "file_name")?;
    Ok(Box::new(FileEvent { ctx }))
}

impl Event for FileEvent<'_> {
    fn context(&self) -> &EventContext<'_> {
        &self.ctx
    }

    fn render(&self) -> String {
        let name = self.ctx.message.field("file_name").unwrap_or_default();
        let text = match self.ctx.message.field("path") {
            Some(path) if !path.is_empty() => format!("uploaded file {name} ({path})"),
            _ => format!("uploaded file {name}"),
        };
        self.ctx.deliver_action(&text)
    }
}
