//! Tag registries.
//!
//! A `TagRegistry` maps a case-sensitive string tag to a handler factory.
//! Both the IRC command registry and the chat-service event registry are
//! instances of it. Each is built once at startup from a fixed list of
//! factories and is read-only afterwards.

use crate::error::RegistryError;
use std::collections::HashMap;

/// Append-only mapping from tag to handler factory.
pub struct TagRegistry<F> {
    name: &'static str,
    entries: HashMap<&'static str, F>,
}

impl<F> TagRegistry<F> {
    /// Create an empty registry. `name` only appears in errors and logs.
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            entries: HashMap::new(),
        }
    }

    /// Build a registry from a fixed list of `(tag, factory)` pairs.
    pub fn from_entries(
        name: &'static str,
        entries: impl IntoIterator<Item = (&'static str, F)>,
    ) -> Result<Self, RegistryError> {
        let mut registry = Self::new(name);
        for (tag, factory) in entries {
            registry.register(tag, factory)?;
        }
        Ok(registry)
    }

    /// Register `factory` under `tag`. A tag can only be registered once.
    pub fn register(&mut self, tag: &'static str, factory: F) -> Result<(), RegistryError> {
        if self.entries.contains_key(tag) {
            return Err(RegistryError::DuplicateTag {
                registry: self.name,
                tag,
            });
        }
        self.entries.insert(tag, factory);
        Ok(())
    }

    pub fn lookup(&self, tag: &str) -> Option<&F> {
        self.entries.get(tag)
    }

    /// Registered tags, sorted.
    pub fn tags(&self) -> Vec<&'static str> {
        let mut tags: Vec<_> = self.entries.keys().copied().collect();
        tags.sort_unstable();
        tags
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_sensitive() {
        let registry = TagRegistry::from_entries("test", [("ISON", 1u8), ("PING", 2)]).unwrap();
        assert_eq!(registry.lookup("ISON"), Some(&1));
        assert_eq!(registry.lookup("ison"), None);
        assert_eq!(registry.lookup("PING"), Some(&2));
    }

    #[test]
    fn duplicate_tag_is_rejected() {
        let result = TagRegistry::from_entries("test", [("message", 1u8), ("message", 2)]);
        assert_eq!(
            result.err(),
            Some(RegistryError::DuplicateTag {
                registry: "test",
                tag: "message",
            })
        );
    }

    #[test]
    fn first_registration_survives_rejected_duplicate() {
        let mut registry = TagRegistry::new("test");
        registry.register("comment", 1u8).unwrap();
        assert!(registry.register("comment", 9).is_err());
        assert_eq!(registry.lookup("comment"), Some(&1));
    }

    #[test]
    fn tags_are_sorted() {
        let registry =
            TagRegistry::from_entries("test", [("status", ()), ("action", ()), ("mail", ())])
                .unwrap();
        assert_eq!(registry.tags(), vec!["action", "mail", "status"]);
    }
}
