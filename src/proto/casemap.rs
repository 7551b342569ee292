//! RFC 1459 case mapping.
//!
//! Nicknames compare case-insensitively, and `[]\~` fold onto `{}|^`.

#[inline]
const fn fold_char(c: char) -> char {
    match c {
        '[' => '{',
        ']' => '}',
        '\\' => '|',
        '~' => '^',
        'A'..='Z' => c.to_ascii_lowercase(),
        _ => c,
    }
}

/// Fold a nickname or channel name to its canonical lowercase form.
pub fn irc_to_lower(s: &str) -> String {
    s.chars().map(fold_char).collect()
}

/// Case-insensitive comparison under RFC 1459 rules.
pub fn irc_eq(a: &str, b: &str) -> bool {
    a.len() == b.len() && a.chars().zip(b.chars()).all(|(x, y)| fold_char(x) == fold_char(y))
}
