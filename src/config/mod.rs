//! Configuration loading and management.
//!
//! - [`types`]: config struct definitions and file loading
//! - [`validation`]: startup checks over a parsed config

mod types;
mod validation;

pub use types::{CommandsConfig, Config, LogFormat, LoggingConfig};
