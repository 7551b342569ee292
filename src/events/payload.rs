//! Chat-service payload types.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// An inbound chat-service event, as received.
///
/// Everything except `event` is optional. Ids may arrive as JSON strings or
/// numbers and are normalised to strings; empty ids count as absent.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawPayload {
    /// Tag selecting the event handler.
    pub event: String,
    /// Flow (channel) id.
    #[serde(default, deserialize_with = "optional_id")]
    pub flow: Option<String>,
    /// Recipient user id for private events.
    #[serde(default, deserialize_with = "optional_id")]
    pub to: Option<String>,
    /// Originating user id.
    #[serde(default, deserialize_with = "optional_id")]
    pub user: Option<String>,
    /// Originating user id, older field name.
    #[serde(default, deserialize_with = "optional_id")]
    pub user_id: Option<String>,
    /// Event body. Shape depends on the event kind.
    #[serde(default)]
    pub content: Value,
    /// Thread the event belongs to, for threaded activity.
    #[serde(default)]
    pub thread: Option<Thread>,
}

impl RawPayload {
    /// Id of the user who caused the event.
    pub fn author_id(&self) -> Option<&str> {
        self.user.as_deref().or(self.user_id.as_deref())
    }
}

/// A discussion thread.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct Thread {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub source: Option<ThreadSource>,
}

/// The integration a thread came from.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ThreadSource {
    pub name: String,
    #[serde(default)]
    pub application: Option<Application>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Application {
    pub name: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(serde_json::Number),
}

fn optional_id<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let id = Option::<RawId>::deserialize(deserializer)?.map(|id| match id {
        RawId::Text(text) => text,
        RawId::Number(number) => number.to_string(),
    });
    Ok(id.filter(|id| !id.is_empty()))
}
