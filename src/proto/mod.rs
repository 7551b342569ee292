//! IRC protocol helpers used by the gateway.
//!
//! Only the pieces the dispatch core needs: RFC 1459 case mapping, the
//! numerics the gateway replies with, and a minimal line tokenizer.

mod casemap;
mod line;
mod response;

pub use casemap::{irc_eq, irc_to_lower};
pub use line::parse_line;
pub use response::Response;
