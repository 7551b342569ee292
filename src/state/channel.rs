//! Channel-related types and state.

use super::User;
use parking_lot::RwLock;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// An IRC channel backed by a chat-service flow.
///
/// Handles to a channel are shared (`Arc`), so open/closed status and
/// membership changes are visible to every holder.
#[derive(Debug)]
pub struct IrcChannel {
    /// Chat-service flow id.
    pub id: String,
    /// IRC channel name, including the `#`/`&` sigil.
    pub name: String,
    open: AtomicBool,
    members: RwLock<Vec<Arc<User>>>,
}

impl IrcChannel {
    pub fn new(id: impl Into<String>, name: impl Into<String>, open: bool) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            open: AtomicBool::new(open),
            members: RwLock::new(Vec::new()),
        }
    }

    /// Whether the gateway currently considers the channel active.
    pub fn open(&self) -> bool {
        self.open.load(Ordering::Acquire)
    }

    pub fn set_open(&self, open: bool) {
        self.open.store(open, Ordering::Release);
    }

    /// Snapshot of the current members.
    pub fn members(&self) -> Vec<Arc<User>> {
        self.members.read().clone()
    }

    /// Add a member unless a user with the same id is already present.
    pub fn add_member(&self, user: Arc<User>) {
        let mut members = self.members.write();
        if !members.iter().any(|m| m.id == user.id) {
            members.push(user);
        }
    }
}
