//! Chat-service events.
//!
//! A payload flows through [`EventRegistry::from_message`]: tag lookup,
//! target resolution (closed channels drop the event), sanitization, then
//! construction of the concrete [`Event`], which renders and sends itself.

pub mod format;
pub mod kinds;
pub mod payload;
pub mod registry;
pub mod sanitize;
pub mod target;
pub mod traits;

pub use payload::RawPayload;
pub use registry::EventRegistry;
pub use sanitize::HtmlStripper;
