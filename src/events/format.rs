//! Text formatting helpers shared by event kinds.

use super::payload::Thread;

/// Prefix each description line with the integration name:
/// `[Email] subject`. Each entry is flattened onto one line.
pub fn team_inbox_event(integration: &str, description: &[&str]) -> String {
    description
        .iter()
        .map(|line| format!("[{integration}] {}", single_line(line)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Prefix each description line with the thread header and the author:
/// `[Issues (GitHub): Bug] alice: opened`. Each entry is flattened onto
/// one line.
pub fn thread_event(author: &str, thread: &Thread, description: &[&str]) -> String {
    let header = thread_header(thread);
    description
        .iter()
        .map(|line| format!("{header} {author}: {}", single_line(line)))
        .collect::<Vec<_>>()
        .join("\n")
}

/// `[Application (Source): Title]`, or `[Title]` for threads without a
/// source. A source with no application renders as `[Source: Title]`.
pub fn thread_header(thread: &Thread) -> String {
    let title = single_line(&thread.title);
    match &thread.source {
        Some(source) => match &source.application {
            Some(app) => format!("[{} ({}): {title}]", app.name, source.name),
            None => format!("[{}: {title}]", source.name),
        },
        None => format!("[{title}]"),
    }
}

/// Join the lines of `text` with single spaces, for labels that must stay
/// on one IRC line.
pub fn single_line(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Text up to the first newline or carriage return, literal or escaped
/// (`\n`, `\r`, `\\n`, `\\r`).
pub fn first_line(text: &str) -> &str {
    let end = ["\\n", "\\r", "\n", "\r"]
        .iter()
        .filter_map(|sep| text.find(sep))
        .min()
        .unwrap_or(text.len());
    &text[..end]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::payload::{Application, ThreadSource};

    fn thread(source: Option<(&str, Option<&str>)>) -> Thread {
        Thread {
            title: "Bug".into(),
            source: source.map(|(name, app)| ThreadSource {
                name: name.into(),
                application: app.map(|a| Application { name: a.into() }),
            }),
        }
    }

    #[test]
    fn first_line_stops_at_any_newline() {
        assert_eq!(first_line("hello\\nworld"), "hello");
        assert_eq!(first_line("hello\nworld"), "hello");
        assert_eq!(first_line("hello\r\nworld"), "hello");
        assert_eq!(first_line("hello\\rworld\nmore"), "hello");
        assert_eq!(first_line("single"), "single");
        assert_eq!(first_line(""), "");
    }

    #[test]
    fn thread_header_with_source() {
        let header = thread_header(&thread(Some(("GitHub", Some("Issues")))));
        assert_eq!(header, "[Issues (GitHub): Bug]");
    }

    #[test]
    fn thread_header_without_source() {
        assert_eq!(thread_header(&thread(None)), "[Bug]");
    }

    #[test]
    fn thread_header_without_application() {
        assert_eq!(thread_header(&thread(Some(("GitHub", None)))), "[GitHub: Bug]");
    }

    #[test]
    fn multiline_title_stays_in_header() {
        let thread = Thread {
            title: "Release\nplan ".into(),
            source: None,
        };
        assert_eq!(
            thread_event("alice", &thread, &["opened"]),
            "[Release plan] alice: opened"
        );
    }

    #[test]
    fn single_line_joins_lines() {
        assert_eq!(single_line("a\n\n b \r\nc"), "a b c");
        assert_eq!(single_line("plain"), "plain");
    }

    #[test]
    fn thread_event_prefixes_every_line() {
        let text = thread_event("alice", &thread(None), &["opened", "assigned to bob"]);
        assert_eq!(text, "[Bug] alice: opened\n[Bug] alice: assigned to bob");
    }

    #[test]
    fn team_inbox_prefixes_every_line() {
        let text = team_inbox_event("Email", &["a", "b"]);
        assert_eq!(text, "[Email] a\n[Email] b");
    }

    #[test]
    fn team_inbox_flattens_multiline_subject() {
        let text = team_inbox_event("Email", &["bob: Quarterly\nreport"]);
        assert_eq!(text, "[Email] bob: Quarterly report");
    }
}
