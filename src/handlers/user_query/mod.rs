//! User query commands: ISON, USERHOST
//!
//! RFC 2812 §4.8 - Optional features

mod ison;
mod userhost;

pub use ison::IsonCommand;
pub use userhost::UserhostCommand;

/// Split arguments into nicknames. Clients may send them as one trailing
/// parameter (`ISON :a b c`) or as separate middle parameters.
fn requested_nicks(args: &[String]) -> impl Iterator<Item = &str> {
    args.iter().flat_map(|arg| arg.split_ascii_whitespace())
}
