//! The IRC command contract.

use super::Context;
use crate::error::HandlerResult;

/// An IRC command handler instance.
///
/// A fresh instance is built for every inbound line and dropped afterwards:
/// `set_data`, then `is_valid`, then `execute` only if valid.
pub trait Command: Send {
    /// Store the raw arguments without interpreting them.
    fn set_data(&mut self, args: Vec<String>);

    /// Whether the stored arguments allow the command to run.
    fn is_valid(&self) -> bool;

    /// Perform the command. The only place a command may reply.
    fn execute(&mut self, ctx: &Context<'_>) -> HandlerResult;
}

/// Builds a fresh, empty command instance.
pub type CommandFactory = fn() -> Box<dyn Command>;
