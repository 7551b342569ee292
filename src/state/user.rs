//! User-related types.

/// A chat-service user as seen through the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    /// Chat-service user id.
    pub id: String,
    pub nick: String,
    /// Display name.
    pub name: String,
    pub email: Option<String>,
}

impl User {
    pub fn new(id: impl Into<String>, nick: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            nick: nick.into(),
            name: name.into(),
            email: None,
        }
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    /// Build the `nick!ident@host` source for lines sent on this user's behalf.
    ///
    /// The email address supplies ident and host; without one the nick and
    /// the gateway's server name are used.
    pub fn irc_prefix(&self, server_name: &str) -> String {
        let (ident, host) = self.ident_host(server_name);
        format!("{}!{}@{}", self.nick, ident, host)
    }

    /// `ident@host` part of the prefix (used by USERHOST).
    pub fn ident_host(&self, server_name: &str) -> (String, String) {
        match self.email.as_deref().and_then(|e| e.split_once('@')) {
            Some((ident, host)) if !ident.is_empty() && !host.is_empty() => {
                (ident.to_string(), host.to_string())
            }
            _ => (self.nick.to_lowercase(), server_name.to_string()),
        }
    }
}
