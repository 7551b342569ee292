//! Command registry and dispatch.
//!
//! Unknown commands are not an error here: typed IRC input is free-form, so
//! the registry reports `Outcome::Unknown` and the caller decides how to
//! answer it.

use super::{Command, CommandFactory, Context};
use crate::error::{HandlerError, HandlerResult, RegistryError};
use crate::handlers::connection::PingCommand;
use crate::handlers::user_query::{IsonCommand, UserhostCommand};
use crate::registry::TagRegistry;
use crate::telemetry::{CommandTimer, spans};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::debug;

/// Every command the gateway understands.
const COMMANDS: &[(&str, CommandFactory)] = &[
    ("ISON", IsonCommand::boxed),
    ("USERHOST", UserhostCommand::boxed),
    ("PING", PingCommand::boxed),
];

/// What happened to a dispatched command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The command ran.
    Executed,
    /// The command was recognised but its arguments were unusable.
    Skipped,
    /// No command is registered under that name.
    Unknown,
}

/// Registry of IRC command handlers.
pub struct CommandRegistry {
    commands: TagRegistry<CommandFactory>,
    /// Usage counters, one per registered command.
    command_counts: HashMap<&'static str, AtomicU64>,
}

impl CommandRegistry {
    /// Create a registry with all built-in commands registered.
    pub fn new() -> Result<Self, RegistryError> {
        Self::with_commands(COMMANDS.iter().copied())
    }

    pub fn with_commands(
        entries: impl IntoIterator<Item = (&'static str, CommandFactory)>,
    ) -> Result<Self, RegistryError> {
        let commands = TagRegistry::from_entries("command", entries)?;
        let command_counts = commands
            .tags()
            .into_iter()
            .map(|tag| (tag, AtomicU64::new(0)))
            .collect();
        Ok(Self {
            commands,
            command_counts,
        })
    }

    /// Build a fresh handler for `tag`, if one is registered.
    pub fn build(&self, tag: &str) -> Option<Box<dyn Command>> {
        self.commands.lookup(tag).map(|factory| factory())
    }

    pub fn tags(&self) -> Vec<&'static str> {
        self.commands.tags()
    }

    /// Dispatch one command.
    ///
    /// `name` must already be upper-cased; tags are case-sensitive.
    pub fn dispatch(
        &self,
        ctx: &Context<'_>,
        name: &str,
        args: Vec<String>,
    ) -> Result<Outcome, HandlerError> {
        let Some(mut command) = self.build(name) else {
            debug!(command = %name, "Unknown command");
            return Ok(Outcome::Unknown);
        };

        if let Some(counter) = self.command_counts.get(name) {
            counter.fetch_add(1, Ordering::Relaxed);
        }

        let nick = ctx.nick();
        let _span = spans::command(name, &nick).entered();

        command.set_data(args);
        if !command.is_valid() {
            debug!(command = %name, "Invalid command arguments, skipping");
            return Ok(Outcome::Skipped);
        }

        let _timer = CommandTimer::new(name);
        let result: HandlerResult = command.execute(ctx);
        if let Err(ref e) = result {
            debug!(command = %name, error = %e, code = e.error_code(), "Command error");
        }
        result.map(|()| Outcome::Executed)
    }

    /// Command usage statistics, most used first. Unused commands are omitted.
    pub fn command_stats(&self) -> Vec<(&'static str, u64)> {
        let mut stats: Vec<_> = self
            .command_counts
            .iter()
            .map(|(cmd, count)| (*cmd, count.load(Ordering::Relaxed)))
            .filter(|(_, count)| *count > 0)
            .collect();

        stats.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
        stats
    }
}
