//! Concrete event kinds, one module per chat-service event tag.
//!
//! Each module exposes `build`, the factory registered for its tag.

pub mod action;
pub mod activity;
pub mod comment;
pub mod discussion;
pub mod file;
pub mod mail;
pub mod message;
pub mod status;
