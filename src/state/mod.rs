//! Live connection state.
//!
//! The gateway core only ever reads from this state while resolving a
//! dispatch. `Connection` is the seam: handlers and events see the trait,
//! `Session` is the in-process implementation.

mod channel;
mod dashmap_ext;
mod session;
mod user;

pub use channel::IrcChannel;
pub use dashmap_ext::DashMapExt;
pub use session::Session;
pub use user::User;

use crate::error::ReplyError;
use std::sync::Arc;

/// The connection collaborator consumed by commands and events.
pub trait Connection: Send + Sync {
    /// Look up a channel by its chat-service flow id.
    fn find_channel_by_id(&self, id: &str) -> Option<Arc<IrcChannel>>;

    /// Look up a user by chat-service user id.
    fn find_user_by_id(&self, id: &str) -> Option<Arc<User>>;

    /// Channels the client has joined. Closed channels have been left and
    /// are not included.
    fn channels(&self) -> Vec<Arc<IrcChannel>>;

    /// Queue text for the client. Multi-line text goes out one line at a time.
    fn send_reply(&self, text: &str) -> Result<(), ReplyError>;

    /// The connected client's nickname.
    fn nick(&self) -> String;

    fn server_name(&self) -> &str;

    fn is_authenticated(&self) -> bool;
}
