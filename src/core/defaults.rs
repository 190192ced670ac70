//! src/core/defaults.rs
//!
//! Default-keys index
//!
//! The game ships a default keybind list in the same `bind <key> <action>`
//! grammar as uikeys.txt. This module indexes it per action (an action may
//! have several default chords; order matters, the first is primary) and
//! implements the reset policy.

use std::collections::HashMap;

use crate::core::normalizer::normalize;
use crate::core::parser::parse_lines;
use crate::core::types::{ConfigLine, Keybind};

/// Ordered default key candidates per action, first-seen order.
#[derive(Clone, Debug, Default)]
pub struct DefaultsIndex {
    by_action: HashMap<String, Vec<String>>,
}

impl DefaultsIndex {
    /// Creates an empty index (no defaults file available).
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds an index from the content of a defaults file.
    ///
    /// Non-bind lines are ignored; bind lines accumulate per action in
    /// file order.
    pub fn from_content(content: &str) -> Self {
        let mut index = Self::new();
        for line in parse_lines(content) {
            if let ConfigLine::Bind { key, action } = line {
                index.insert(action, key);
            }
        }
        index
    }

    /// Appends a default key candidate for an action.
    pub fn insert(&mut self, action: String, key: String) {
        self.by_action.entry(action).or_default().push(key);
    }

    /// The primary (first-listed) default key for an action, if any.
    pub fn primary_key(&self, action: &str) -> Option<&str> {
        self.by_action
            .get(action)
            .and_then(|keys| keys.first())
            .map(String::as_str)
    }

    /// All default key candidates for an action, in listed order.
    pub fn keys_for(&self, action: &str) -> &[String] {
        self.by_action
            .get(action)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Actions named by the defaults list.
    pub fn actions(&self) -> impl Iterator<Item = &str> {
        self.by_action.keys().map(String::as_str)
    }

    /// Whether the index holds any defaults at all.
    pub fn is_empty(&self) -> bool {
        self.by_action.is_empty()
    }

    /// The key a reset should restore for this keybind.
    ///
    /// Candidate order when the action has defaults: the default whose
    /// canonical form matches the canonical original key, then one
    /// matching the current key, then the primary default. Without
    /// defaults the original key is restored, and a synthetic keybind
    /// with no defaults resets to `unbound`.
    pub fn resolve_reset_target(&self, keybind: &Keybind) -> String {
        if let Some(candidates) = self.by_action.get(&keybind.action) {
            if let Some(original) = keybind.original_key.as_deref() {
                let canonical = normalize(original);
                if let Some(hit) = candidates.iter().find(|c| normalize(c) == canonical) {
                    return hit.clone();
                }
            }

            let current = normalize(&keybind.key);
            if let Some(hit) = candidates.iter().find(|c| normalize(c) == current) {
                return hit.clone();
            }

            if let Some(primary) = candidates.first() {
                return primary.clone();
            }
        }

        keybind
            .original_key
            .clone()
            .unwrap_or_else(|| "unbound".to_string())
    }
}
