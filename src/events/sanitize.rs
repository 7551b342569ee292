//! Message body sanitization.
//!
//! Raw chat-service bodies may contain HTML. They pass through the
//! [`MessageProcessor`] exactly once, before any event is built; events only
//! ever see a [`SanitizedMessage`].

use super::payload::{RawPayload, Thread};
use regex::{Captures, Regex};
use serde_json::Value;

/// Turns raw markup into plain text.
pub trait Sanitizer: Send + Sync {
    fn strip(&self, raw: &str) -> String;
}

/// Regex-based HTML stripper.
///
/// Line-breaking tags become newlines, every other tag is removed, then the
/// common named entities and all numeric character references are decoded.
/// Entities are decoded after tag removal, so escaped markup survives as text.
pub struct HtmlStripper {
    breaks: Regex,
    tags: Regex,
    numeric: Regex,
}

impl HtmlStripper {
    pub fn new() -> Result<Self, regex::Error> {
        Ok(Self {
            breaks: Regex::new(r"(?i)<br\s*/?>|</(?:p|div|li|h[1-6])\s*>")?,
            tags: Regex::new(r"(?s)<[^>]*>")?,
            numeric: Regex::new(r"&#(?:[xX]([0-9a-fA-F]{1,6})|([0-9]{1,7}));")?,
        })
    }

    fn decode_entities(&self, text: &str) -> String {
        let text = text
            .replace("&lt;", "<")
            .replace("&gt;", ">")
            .replace("&quot;", "\"")
            .replace("&apos;", "'")
            .replace("&nbsp;", " ");

        let text = self.numeric.replace_all(&text, |caps: &Captures<'_>| {
            let code = match (caps.get(1), caps.get(2)) {
                (Some(hex), _) => u32::from_str_radix(hex.as_str(), 16).ok(),
                (None, Some(dec)) => dec.as_str().parse().ok(),
                (None, None) => None,
            };
            // Control characters other than line breaks and tabs stay escaped
            // so they cannot reach the IRC stream.
            match code.and_then(char::from_u32) {
                Some(c) if !c.is_control() || c == '\n' || c == '\t' => c.to_string(),
                _ => caps[0].to_string(),
            }
        });

        // last, so "&amp;lt;" decodes to "&lt;" and not "<"
        text.replace("&amp;", "&")
    }
}

impl Sanitizer for HtmlStripper {
    fn strip(&self, raw: &str) -> String {
        let text = self.breaks.replace_all(raw, "\n");
        let text = self.tags.replace_all(&text, "");
        let text = self.decode_entities(&text);

        text.lines()
            .map(str::trim_end)
            .collect::<Vec<_>>()
            .join("\n")
            .trim_matches('\n')
            .to_string()
    }
}

/// A payload whose text has been sanitized.
///
/// Only [`MessageProcessor::perform`] can build one.
#[derive(Debug, Clone)]
pub struct SanitizedMessage {
    event: String,
    content: Value,
    thread: Option<Thread>,
}

impl SanitizedMessage {
    pub fn event(&self) -> &str {
        &self.event
    }

    pub fn content(&self) -> &Value {
        &self.content
    }

    /// The content when it is a plain string.
    pub fn text(&self) -> Option<&str> {
        self.content.as_str()
    }

    /// A string field of object content.
    pub fn field(&self, key: &str) -> Option<&str> {
        self.content.get(key).and_then(Value::as_str)
    }

    pub fn thread(&self) -> Option<&Thread> {
        self.thread.as_ref()
    }
}

/// Applies a [`Sanitizer`] to every piece of text in a payload.
pub struct MessageProcessor<'s> {
    sanitizer: &'s dyn Sanitizer,
}

impl<'s> MessageProcessor<'s> {
    pub fn new(sanitizer: &'s dyn Sanitizer) -> Self {
        Self { sanitizer }
    }

    /// Sanitize the content strings and thread title.
    pub fn perform(&self, payload: RawPayload) -> SanitizedMessage {
        let mut content = payload.content;
        self.strip_value(&mut content);

        let thread = payload.thread.map(|mut thread| {
            thread.title = self.sanitizer.strip(&thread.title);
            thread
        });

        SanitizedMessage {
            event: payload.event,
            content,
            thread,
        }
    }

    fn strip_value(&self, value: &mut Value) {
        match value {
            Value::String(text) => *text = self.sanitizer.strip(text),
            Value::Array(items) => items.iter_mut().for_each(|item| self.strip_value(item)),
            Value::Object(map) => map.values_mut().for_each(|item| self.strip_value(item)),
            Value::Null | Value::Bool(_) | Value::Number(_) => {}
        }
    }
}
