//! IRC command handlers.
//!
//! Each inbound line is tokenized, its command name upper-cased, and the
//! matching `Command` built fresh from the [`CommandRegistry`].

pub mod connection;
pub mod core;
pub mod user_query;

pub use self::core::{Command, CommandRegistry, Context, Outcome};
