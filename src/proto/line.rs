//! Minimal client line tokenizer.
//!
//! Splits `[:prefix] COMMAND arg arg :trailing` into a command name and its
//! arguments. Tags, encoding and length limits belong to the transport.

/// A tokenized client line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine {
    pub command: String,
    pub args: Vec<String>,
}

/// Tokenize a single line. Returns `None` for blank lines.
pub fn parse_line(line: &str) -> Option<ParsedLine> {
    let mut rest = line.trim_end_matches(['\r', '\n']).trim_start();

    if let Some(stripped) = rest.strip_prefix(':') {
        // Client-supplied prefixes carry no meaning for us.
        rest = stripped.split_once(' ').map(|(_, r)| r).unwrap_or("").trim_start();
    }

    let (head, trailing) = match rest.split_once(" :") {
        Some((head, trailing)) => (head, Some(trailing)),
        None => (rest, None),
    };

    let mut words = head.split_ascii_whitespace();
    let command = words.next()?.to_string();
    let mut args: Vec<String> = words.map(str::to_string).collect();
    if let Some(trailing) = trailing {
        args.push(trailing.to_string());
    }

    Some(ParsedLine { command, args })
}
