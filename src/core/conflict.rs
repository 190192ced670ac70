//! Duplicate keybinding detection
//!
//! Two actions bound to the equivalent key combination shadow each other
//! in-game, so duplicates are flagged for the user to resolve. Equality is
//! over canonical combo strings, never literal text: `Ctrl+1` and
//! `1+ctrl` collide.
//!
//! Detection uses HashMap-based indexing keyed by the canonical form.
//! Unbound keybinds are excluded entirely - an empty key field is never a
//! duplicate of another empty key field.

use std::collections::{HashMap, HashSet};

use crate::core::normalizer::normalize;
use crate::core::types::Keybind;

/// Detects duplicate keybinds by canonical combo string.
///
/// Maps each canonical combo to every bound keybind using it. A duplicate
/// exists when any bucket holds 2 or more keybinds.
pub struct DuplicateDetector {
    /// Canonical combo string -> all bound keybinds using it.
    by_combo: HashMap<String, Vec<Keybind>>,
}

/// One detected duplicate: a canonical combo claimed by several actions.
#[derive(Clone, Debug, PartialEq)]
pub struct Duplicate {
    /// The canonical combo string that is claimed more than once
    pub key: String,

    /// All keybinds using this combo (always 2 or more)
    pub keybinds: Vec<Keybind>,
}

impl DuplicateDetector {
    /// Creates a new empty detector.
    pub fn new() -> Self {
        Self {
            by_combo: HashMap::new(),
        }
    }

    /// Builds a detector over a full keybind set.
    pub fn from_keybinds(keybinds: &[Keybind]) -> Self {
        let mut detector = Self::new();
        for keybind in keybinds {
            detector.add_keybind(keybind.clone());
        }
        detector
    }

    /// Adds a keybind to the detector. Unbound keybinds are ignored.
    pub fn add_keybind(&mut self, keybind: Keybind) {
        if !keybind.is_bound() {
            return;
        }
        self.by_combo
            .entry(normalize(&keybind.key))
            .or_default()
            .push(keybind);
    }

    /// Finds all duplicates (canonical combos with 2 or more keybinds).
    pub fn find_duplicates(&self) -> Vec<Duplicate> {
        let mut duplicates: Vec<Duplicate> = self
            .by_combo
            .iter()
            .filter(|(_, keybinds)| keybinds.len() > 1)
            .map(|(key, keybinds)| Duplicate {
                key: key.clone(),
                keybinds: keybinds.clone(),
            })
            .collect();

        // HashMap iteration order is arbitrary; report deterministically
        duplicates.sort_by(|a, b| a.key.cmp(&b.key));
        duplicates
    }

    /// The set of canonical combos claimed by 2 or more keybinds.
    pub fn duplicate_keys(&self) -> HashSet<String> {
        self.by_combo
            .iter()
            .filter(|(_, keybinds)| keybinds.len() > 1)
            .map(|(key, _)| key.clone())
            .collect()
    }

    /// Checks whether a specific canonical combo is duplicated.
    pub fn has_duplicate(&self, canonical_key: &str) -> bool {
        self.by_combo
            .get(canonical_key)
            .map(|keybinds| keybinds.len() > 1)
            .unwrap_or(false)
    }

    /// Total number of bound keybinds tracked.
    pub fn total_keybinds(&self) -> usize {
        self.by_combo.values().map(|v| v.len()).sum()
    }
}

impl Default for DuplicateDetector {
    fn default() -> Self {
        Self::new()
    }
}

/// Computes the duplicate set for a keybind collection from scratch.
///
/// Rebuilt on every call rather than maintained incrementally, so the
/// result can never go stale after an unbind/reset/edit. Linear in the
/// number of keybinds.
pub fn duplicate_keys_of(keybinds: &[Keybind]) -> HashSet<String> {
    DuplicateDetector::from_keybinds(keybinds).duplicate_keys()
}
