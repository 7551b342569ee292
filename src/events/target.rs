//! Target resolution.
//!
//! Turns a payload's addressing fields into live handles from the
//! connection. Targets are re-resolved for every payload; nothing is copied
//! out of the connection.

use super::payload::RawPayload;
use crate::state::{Connection, IrcChannel, User};
use std::sync::Arc;

/// Where an event is addressed.
#[derive(Debug, Clone)]
pub enum Target {
    Channel(Arc<IrcChannel>),
    User(Arc<User>),
    None,
}

impl Target {
    pub fn is_channel(&self) -> bool {
        matches!(self, Self::Channel(_))
    }
}

/// Targets compare by identity: two targets are equal when they refer to
/// the same live channel or user.
impl PartialEq for Target {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Channel(a), Self::Channel(b)) => Arc::ptr_eq(a, b),
            (Self::User(a), Self::User(b)) => Arc::ptr_eq(a, b),
            (Self::None, Self::None) => true,
            _ => false,
        }
    }
}

/// Result of resolving a payload.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// Build and process the event.
    Deliver {
        target: Target,
        /// The originating user, when known.
        user: Option<Arc<User>>,
    },
    /// The target channel is closed; produce nothing.
    Drop,
}

/// Resolve a payload's target and originating user.
///
/// A `flow` id wins over a `to` id. A flow that resolves to a closed
/// channel drops the event; an unknown flow or recipient yields
/// `Target::None`.
pub fn resolve(connection: &dyn Connection, payload: &RawPayload) -> Resolution {
    let target = if let Some(flow) = payload.flow.as_deref() {
        match connection.find_channel_by_id(flow) {
            Some(channel) if !channel.open() => return Resolution::Drop,
            Some(channel) => Target::Channel(channel),
            None => Target::None,
        }
    } else if let Some(to) = payload.to.as_deref() {
        connection
            .find_user_by_id(to)
            .map_or(Target::None, Target::User)
    } else {
        Target::None
    };

    let user = payload
        .author_id()
        .and_then(|id| connection.find_user_by_id(id));

    Resolution::Deliver { target, user }
}
