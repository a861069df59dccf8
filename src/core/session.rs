//! Per-session intro flag
//!
//! The browser keeps a single key in `sessionStorage`. Everything here goes
//! through [`SessionStore`] so the rules can be exercised without a window.

use std::collections::HashMap;

/// Session storage key recording that the intro has played
pub const INTRO_SHOWN_KEY: &str = "introShown";

/// Minimal view of a string key/value session store
pub trait SessionStore {
    fn get_item(&self, key: &str) -> Option<String>;
    fn set_item(&mut self, key: &str, value: &str);
}

/// In-memory store, used for SSR and tests
#[derive(Debug, Clone, Default)]
pub struct MemorySession {
    items: HashMap<String, String>,
}

impl MemorySession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl SessionStore for MemorySession {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    fn set_item(&mut self, key: &str, value: &str) {
        self.items.insert(key.to_string(), value.to_string());
    }
}

/// Any stored value counts as "seen", matching a truthy storage read.
pub fn has_seen_intro(store: &impl SessionStore) -> bool {
    store
        .get_item(INTRO_SHOWN_KEY)
        .is_some_and(|value| !value.is_empty())
}

pub fn mark_intro_shown(store: &mut impl SessionStore) {
    store.set_item(INTRO_SHOWN_KEY, "true");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_session_has_not_seen_intro() {
        let store = MemorySession::new();
        assert!(!has_seen_intro(&store));
        assert!(store.is_empty());
    }

    #[test]
    fn test_mark_intro_shown() {
        let mut store = MemorySession::new();
        mark_intro_shown(&mut store);

        assert!(has_seen_intro(&store));
        assert_eq!(store.get_item(INTRO_SHOWN_KEY), Some("true".to_string()));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_marking_twice_keeps_single_key() {
        let mut store = MemorySession::new();
        mark_intro_shown(&mut store);
        mark_intro_shown(&mut store);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_empty_value_is_not_seen() {
        let mut store = MemorySession::new();
        store.set_item(INTRO_SHOWN_KEY, "");
        assert!(!has_seen_intro(&store));
    }

    #[test]
    fn test_unrelated_keys_are_ignored() {
        let mut store = MemorySession::new();
        store.set_item("theme", "dark");
        assert!(!has_seen_intro(&store));
    }
}
