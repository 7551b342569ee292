//! Reply templates.
//!
//! Every function returns finished IRC text. Multi-line input produces one
//! protocol line per input line, joined with `\n`; the connection splits
//! them again when sending. Nothing here sanitizes its input.

use crate::proto::Response;

/// `:server NNN nick params... :trailing`
pub fn numeric(server: &str, response: Response, nick: &str, params: &[&str], trailing: &str) -> String {
    let mut line = format!(":{server} {response} {nick}");
    for param in params {
        line.push(' ');
        line.push_str(param);
    }
    line.push_str(" :");
    line.push_str(trailing);
    line
}

/// RPL_ISON. An empty list is a valid answer.
pub fn ison(server: &str, nick: &str, available: &[String]) -> String {
    numeric(server, Response::RPL_ISON, nick, &[], &available.join(" "))
}

/// RPL_USERHOST with pre-formatted `nick=+ident@host` entries.
pub fn userhost(server: &str, nick: &str, entries: &[String]) -> String {
    numeric(server, Response::RPL_USERHOST, nick, &[], &entries.join(" "))
}

pub fn unknown_command(server: &str, nick: &str, command: &str) -> String {
    numeric(server, Response::ERR_UNKNOWNCOMMAND, nick, &[command], "Unknown command")
}

pub fn pong(server: &str, token: &str) -> String {
    format!(":{server} PONG {server} :{token}")
}

/// One PRIVMSG per line of `text`. Blank lines are dropped.
pub fn privmsg(source: &str, target: &str, text: &str) -> String {
    per_line(text, |line| format!(":{source} PRIVMSG {target} :{line}"))
}

/// One NOTICE per line of `text`.
pub fn notice(source: &str, target: &str, text: &str) -> String {
    per_line(text, |line| format!(":{source} NOTICE {target} :{line}"))
}

/// CTCP ACTION (`/me`) per line of `text`.
pub fn action(source: &str, target: &str, text: &str) -> String {
    per_line(text, |line| {
        format!(":{source} PRIVMSG {target} :\u{1}ACTION {line}\u{1}")
    })
}

pub fn join(source: &str, channel: &str) -> String {
    format!(":{source} JOIN {channel}")
}

pub fn part(source: &str, channel: &str, reason: &str) -> String {
    format!(":{source} PART {channel} :{reason}")
}

fn per_line(text: &str, render: impl Fn(&str) -> String) -> String {
    text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(render)
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ison_lists_space_separated() {
        let line = ison("irc.test", "me", &["alice".into(), "bob".into()]);
        assert_eq!(line, ":irc.test 303 me :alice bob");
    }

    #[test]
    fn empty_ison_keeps_trailing() {
        assert_eq!(ison("irc.test", "me", &[]), ":irc.test 303 me :");
    }

    #[test]
    fn unknown_command_names_command() {
        assert_eq!(
            unknown_command("irc.test", "me", "FOO"),
            ":irc.test 421 me FOO :Unknown command"
        );
    }

    #[test]
    fn privmsg_splits_lines() {
        let text = privmsg("a!a@h", "#main", "one\n\ntwo");
        assert_eq!(text, ":a!a@h PRIVMSG #main :one\n:a!a@h PRIVMSG #main :two");
    }

    #[test]
    fn action_wraps_ctcp() {
        assert_eq!(
            action("a!a@h", "#main", "waves"),
            ":a!a@h PRIVMSG #main :\u{1}ACTION waves\u{1}"
        );
    }

    #[test]
    fn pong_echoes_token() {
        assert_eq!(pong("irc.test", "abc"), ":irc.test PONG irc.test :abc");
    }
}
