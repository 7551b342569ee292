//! In-process connection state for one IRC client.

use super::{Connection, DashMapExt, IrcChannel, User};
use crate::config::Config;
use crate::error::ReplyError;
use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, warn};

/// One client's view of the chat service: joined channels, known users,
/// and the outbound reply stream.
pub struct Session {
    server_name: String,
    nick: String,
    authenticated: bool,
    /// Channels keyed by flow id.
    channels: DashMap<String, Arc<IrcChannel>>,
    /// Users keyed by user id.
    users: DashMap<String, Arc<User>>,
    sender: mpsc::UnboundedSender<String>,
}

impl Session {
    /// Create an empty session. The receiver yields every reply line.
    pub fn new(
        server_name: impl Into<String>,
        nick: impl Into<String>,
        authenticated: bool,
    ) -> (Self, mpsc::UnboundedReceiver<String>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        let session = Self {
            server_name: server_name.into(),
            nick: nick.into(),
            authenticated,
            channels: DashMap::new(),
            users: DashMap::new(),
            sender,
        };
        (session, receiver)
    }

    /// Create a session seeded with the users and channels from `config`.
    ///
    /// Expects a validated config; unknown member ids are skipped.
    pub fn from_config(config: &Config) -> (Self, mpsc::UnboundedReceiver<String>) {
        let (session, receiver) = Self::new(
            &config.server.name,
            &config.session.nick,
            config.session.authenticated,
        );

        for block in &config.users {
            let user = User::new(&block.id, &block.nick, &block.name);
            session.add_user(match &block.email {
                Some(email) => user.with_email(email),
                None => user,
            });
        }

        for block in &config.channels {
            let channel = session.add_channel(IrcChannel::new(&block.id, &block.name, block.open));
            for member_id in &block.members {
                match session.users.get_cloned(member_id.as_str()) {
                    Some(user) => channel.add_member(user),
                    None => warn!(channel = %block.name, user_id = %member_id, "Unknown channel member"),
                }
            }
        }

        debug!(
            users = session.users.len(),
            channels = session.channels.len(),
            "Session state loaded"
        );
        (session, receiver)
    }

    pub fn add_user(&self, user: User) -> Arc<User> {
        let user = Arc::new(user);
        self.users.insert(user.id.clone(), Arc::clone(&user));
        user
    }

    pub fn add_channel(&self, channel: IrcChannel) -> Arc<IrcChannel> {
        let channel = Arc::new(channel);
        self.channels.insert(channel.id.clone(), Arc::clone(&channel));
        channel
    }
}

impl Connection for Session {
    fn find_channel_by_id(&self, id: &str) -> Option<Arc<IrcChannel>> {
        self.channels.get_cloned(id)
    }

    fn find_user_by_id(&self, id: &str) -> Option<Arc<User>> {
        self.users.get_cloned(id)
    }

    fn channels(&self) -> Vec<Arc<IrcChannel>> {
        let mut channels: Vec<_> = self
            .channels
            .values_cloned()
            .into_iter()
            .filter(|channel| channel.open())
            .collect();
        channels.sort_by(|a, b| a.name.cmp(&b.name));
        channels
    }

    fn send_reply(&self, text: &str) -> Result<(), ReplyError> {
        for line in text.lines().filter(|l| !l.is_empty()) {
            self.sender
                .send(line.to_string())
                .map_err(|_| ReplyError::Closed)?;
        }
        Ok(())
    }

    fn nick(&self) -> String {
        self.nick.clone()
    }

    fn server_name(&self) -> &str {
        &self.server_name
    }

    fn is_authenticated(&self) -> bool {
        self.authenticated
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn send_reply_splits_lines() {
        let (session, mut rx) = Session::new("irc.test", "me", false);
        session.send_reply("one\r\ntwo\n\nthree").unwrap();
        assert_eq!(rx.try_recv().unwrap(), "one");
        assert_eq!(rx.try_recv().unwrap(), "two");
        assert_eq!(rx.try_recv().unwrap(), "three");
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn send_reply_fails_when_receiver_dropped() {
        let (session, rx) = Session::new("irc.test", "me", false);
        drop(rx);
        assert_eq!(session.send_reply("lost"), Err(ReplyError::Closed));
    }

    #[test]
    fn lookups_return_shared_handles() {
        let (session, _rx) = Session::new("irc.test", "me", false);
        let channel = session.add_channel(IrcChannel::new("f1", "#main", true));
        let found = session.find_channel_by_id("f1").unwrap();
        channel.set_open(false);
        assert!(!found.open());
        assert!(session.find_channel_by_id("missing").is_none());
    }

    #[test]
    fn channels_sorted_by_name() {
        let (session, _rx) = Session::new("irc.test", "me", false);
        session.add_channel(IrcChannel::new("f2", "#zeta", true));
        session.add_channel(IrcChannel::new("f1", "#alpha", true));
        let names: Vec<_> = session.channels().iter().map(|c| c.name.clone()).collect();
        assert_eq!(names, vec!["#alpha", "#zeta"]);
    }

    #[test]
    fn closed_channels_are_not_joined() {
        let (session, _rx) = Session::new("irc.test", "me", false);
        session.add_channel(IrcChannel::new("f1", "#main", true));
        session.add_channel(IrcChannel::new("f2", "#archive", false));
        let names: Vec<_> = session.channels().iter().map(|c| c.name.clone()).collect();
        assert_eq!(names, vec!["#main"]);
        assert!(session.find_channel_by_id("f2").is_some());
    }
}
