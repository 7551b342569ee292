//! Core command infrastructure: the `Command` contract, the per-dispatch
//! context, and the command registry.

pub mod context;
pub mod registry;
pub mod traits;

pub use context::Context;
pub use registry::{CommandRegistry, Outcome};
pub use traits::{Command, CommandFactory};
