//! Substitution table type.

use serde::Deserialize;
use std::collections::HashMap;

/// Project-wide lookup from short symbolic keys (e.g. `open01`) to literal
/// replacement strings (commonly dates shared across many documents).
///
/// Read-only from this crate's perspective; it lives for the whole build.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Substitutions {
    entries: HashMap<String, String>,
}

impl Substitutions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<HashMap<String, String>> for Substitutions {
    fn from(entries: HashMap<String, String>) -> Self {
        Self { entries }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_from_map() {
        let subs: Substitutions =
            HashMap::from([("open01".to_string(), "2020-01-03 12:00".to_string())]).into();
        assert_eq!(subs.get("open01"), Some("2020-01-03 12:00"));
        assert_eq!(subs.get("open02"), None);
        assert!(subs.contains_key("open01"));
        assert_eq!(subs.len(), 1);
    }

    #[test]
    fn empty_table() {
        let subs = Substitutions::new();
        assert!(subs.is_empty());
        assert_eq!(subs.get("anything"), None);
    }
}
