//! Flow membership and housekeeping actions.

use crate::error::EventError;
use crate::events::target::Target;
use crate::events::traits::{Event, EventContext, required_field};
use crate::proto::irc_eq;
use crate::render;
use serde_json::Value;
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
enum ActionKind {
    Join,
    Leave,
    AddPeople(Vec<String>),
    Rename(String),
    Other(Option<String>),
}

/// A flow action: content `{type, ...}`.
pub struct ActionEvent<'a> {
    ctx: EventContext<'a>,
    kind: ActionKind,
}

pub fn build(ctx: EventContext<'_>) -> Result<Box<dyn Event + '_>, EventError> {
    let kind = match required_field(&ctx.message, "type")? {
        "join" => ActionKind::Join,
        "leave" | "block" => ActionKind::Leave,
        "add_people" => {
            let people = ctx
                .message
                .content()
                .get("message")
                .and_then(Value::as_array)
                .map(|names| {
                    names
                        .iter()
                        .filter_map(Value::as_str)
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default();
            ActionKind::AddPeople(people)
        }
        "rename" => ActionKind::Rename(required_field(&ctx.message, "name")?.to_string()),
        _ => ActionKind::Other(ctx.message.field("description").map(str::to_string)),
    };
    Ok(Box::new(ActionEvent { ctx, kind }))
}

impl ActionEvent<'_> {
    /// Whether the action was taken by the gateway's own user.
    fn by_self(&self) -> bool {
        let nick = self.ctx.connection.nick();
        self.ctx.user.as_ref().is_some_and(|user| irc_eq(&user.nick, &nick))
    }
}

impl Event for ActionEvent<'_> {
    fn context(&self) -> &EventContext<'_> {
        &self.ctx
    }

    fn is_valid(&self) -> bool {
        match &self.kind {
            // Only channels have membership.
            ActionKind::Join | ActionKind::Leave => self.ctx.target.is_channel(),
            ActionKind::AddPeople(people) => !people.is_empty(),
            ActionKind::Rename(name) => !name.is_empty(),
            ActionKind::Other(description) => description.is_some(),
        }
    }

    fn render(&self) -> String {
        let channel = match &self.ctx.target {
            Target::Channel(channel) => Some(channel.name.as_str()),
            _ => None,
        };

        match (&self.kind, channel) {
            (ActionKind::Join, Some(channel)) => render::join(&self.ctx.source(), channel),
            (ActionKind::Leave, Some(channel)) => {
                render::part(&self.ctx.source(), channel, "Left the flow")
            }
            (ActionKind::Join | ActionKind::Leave, None) => String::new(),
            (ActionKind::AddPeople(people), _) => self
                .ctx
                .deliver_action(&format!("added {} to the flow", people.join(", "))),
            (ActionKind::Rename(name), _) => self
                .ctx
                .deliver_action(&format!("renamed the flow to {name}")),
            (ActionKind::Other(description), _) => description
                .as_deref()
                .map(|d| self.ctx.deliver_action(d))
                .unwrap_or_default(),
        }
    }

    fn process(&self) -> Result<(), EventError> {
        let text = self.render();
        if !text.is_empty() {
            self.ctx.connection.send_reply(&text)?;
        }

        // Leaving a flow ourselves closes its channel; later events for it drop.
        match (&self.kind, &self.ctx.target) {
            (ActionKind::Leave, Target::Channel(channel)) if self.by_self() => {
                channel.set_open(false);
                debug!(channel = %channel.name, "Left channel");
            }
            _ => {}
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::kinds::test_support::{context, session};
    use crate::state::{Connection, User};
    use serde_json::json;

    #[test]
    fn join_renders_irc_join() {
        let (session, _rx) = session();
        let event = build(context(&session, json!({
            "event": "action", "flow": "main", "user": "2", "content": {"type": "join"}
        })))
        .unwrap();
        assert!(event.is_valid());
        assert_eq!(event.render(), ":bob!bob@irc.test JOIN #main");
    }

    #[test]
    fn leave_renders_part() {
        let (session, _rx) = session();
        let event = build(context(&session, json!({
            "event": "action", "flow": "main", "user": "2", "content": {"type": "leave"}
        })))
        .unwrap();
        assert_eq!(event.render(), ":bob!bob@irc.test PART #main :Left the flow");
    }

    #[test]
    fn own_leave_closes_channel() {
        let (session, mut rx) = session();
        let own = session.add_user(User::new("9", "Me", "Gateway User"));
        let main = session.find_channel_by_id("main").unwrap();
        main.add_member(own);

        let event = build(context(&session, json!({
            "event": "action", "flow": "main", "user": "9", "content": {"type": "leave"}
        })))
        .unwrap();
        event.process().unwrap();

        assert_eq!(rx.try_recv().unwrap(), ":Me!me@irc.test PART #main :Left the flow");
        assert!(!main.open());
        assert!(session.channels().is_empty());
    }

    #[test]
    fn other_user_leave_keeps_channel_open() {
        let (session, _rx) = session();
        let event = build(context(&session, json!({
            "event": "action", "flow": "main", "user": "2", "content": {"type": "leave"}
        })))
        .unwrap();
        event.process().unwrap();
        assert!(session.find_channel_by_id("main").unwrap().open());
    }

    #[test]
    fn join_without_channel_is_invalid() {
        let (session, _rx) = session();
        let event = build(context(&session, json!({
            "event": "action", "to": "2", "content": {"type": "join"}
        })))
        .unwrap();
        assert!(!event.is_valid());
        assert_eq!(event.render(), "");
    }

    #[test]
    fn add_people_lists_names() {
        let (session, _rx) = session();
        let event = build(context(&session, json!({
            "event": "action", "flow": "main", "user": "1",
            "content": {"type": "add_people", "message": ["carol", "dave"]}
        })))
        .unwrap();
        assert_eq!(
            event.render(),
            ":alice!alice@example.com PRIVMSG #main :\u{1}ACTION added carol, dave to the flow\u{1}"
        );
    }

    #[test]
    fn rename_requires_name() {
        let (session, _rx) = session();
        let result = build(context(&session, json!({
            "event": "action", "flow": "main", "content": {"type": "rename"}
        })));
        assert!(matches!(result, Err(EventError::InvalidMessage(_))));
    }

    #[test]
    fn missing_type_is_invalid_message() {
        let (session, _rx) = session();
        let result = build(context(&session, json!({
            "event": "action", "flow": "main", "content": {}
        })));
        assert!(matches!(result, Err(EventError::InvalidMessage(_))));
    }

    #[test]
    fn unknown_type_without_description_is_invalid() {
        let (session, _rx) = session();
        let event = build(context(&session, json!({
            "event": "action", "flow": "main", "content": {"type": "add_rss_feed"}
        })))
        .unwrap();
        assert!(!event.is_valid());
    }
}
