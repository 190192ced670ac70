// Copyright 2025 Eric Jingryd (tidynest@proton.me)
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! src/core/document.rs
//!
//! In-memory keybind document
//!
//! A [`KeybindDocument`] is the full editing state for one uikeys.txt
//! file: the keybinds (including synthetic entries injected for default
//! actions the file doesn't mention), every non-bind line verbatim, the
//! defaults index, and the current duplicate set.
//!
//! All mutations go through `set_key`/`unbind`/`reset`, each of which
//! recomputes the duplicate set from scratch. Recomputation is linear in
//! the keybind count and keybind counts are small, so there is no
//! incremental index to fall out of sync.

use std::collections::HashSet;

use crate::core::conflict::duplicate_keys_of;
use crate::core::defaults::DefaultsIndex;
use crate::core::normalizer::normalize;
use crate::core::parser::parse_line;
use crate::core::types::{ConfigLine, Keybind};

/// Editable state of one loaded uikeys.txt file.
#[derive(Clone, Debug)]
pub struct KeybindDocument {
    /// All keybinds: one per bind line, plus synthetic entries for
    /// default actions absent from the file.
    keybinds: Vec<Keybind>,

    /// Non-bind lines in original order, written back verbatim on save.
    other_lines: Vec<ConfigLine>,

    /// Default key candidates per action.
    defaults: DefaultsIndex,

    /// Canonical combos currently claimed by 2+ bound keybinds.
    duplicate_keys: HashSet<String>,
}

impl KeybindDocument {
    /// Parses file content into a document.
    ///
    /// Bind lines become keybinds with their source line index as id;
    /// everything else is kept aside verbatim. Each default action with no
    /// bind line in the file gets a synthetic unbound keybind (sorted by
    /// action name, ids continuing past the last line).
    pub fn parse(content: &str, defaults: DefaultsIndex) -> Self {
        let mut keybinds = Vec::new();
        let mut other_lines = Vec::new();
        let mut current_actions: HashSet<String> = HashSet::new();
        let mut line_count = 0;

        for (index, line) in content.lines().enumerate() {
            line_count = index + 1;
            match parse_line(line) {
                ConfigLine::Bind { key, action } => {
                    current_actions.insert(action.clone());
                    keybinds.push(Keybind {
                        id: index,
                        action,
                        original_key: Some(key.clone()),
                        key,
                        is_synthetic: false,
                    });
                }
                other => other_lines.push(other),
            }
        }

        let mut missing: Vec<String> = defaults
            .actions()
            .filter(|action| !current_actions.contains(*action))
            .map(str::to_string)
            .collect();
        missing.sort();

        for (offset, action) in missing.into_iter().enumerate() {
            keybinds.push(Keybind {
                id: line_count + offset,
                action,
                key: "unbound".to_string(),
                original_key: None,
                is_synthetic: true,
            });
        }

        let mut document = Self {
            keybinds,
            other_lines,
            defaults,
            duplicate_keys: HashSet::new(),
        };
        document.refresh_duplicates();
        document
    }

    /// All keybinds, in load order (file order, then synthetic entries).
    pub fn keybinds(&self) -> &[Keybind] {
        &self.keybinds
    }

    /// The keybind at `index`, if in range.
    pub fn keybind(&self, index: usize) -> Option<&Keybind> {
        self.keybinds.get(index)
    }

    /// Index of the first keybind for `action`.
    pub fn find_action(&self, action: &str) -> Option<usize> {
        self.keybinds.iter().position(|kb| kb.action == action)
    }

    /// The defaults index this document was loaded with.
    pub fn defaults(&self) -> &DefaultsIndex {
        &self.defaults
    }

    /// Non-bind lines, in original order.
    pub fn other_lines(&self) -> &[ConfigLine] {
        &self.other_lines
    }

    /// Canonical combos currently claimed by 2+ bound keybinds.
    pub fn duplicate_keys(&self) -> &HashSet<String> {
        &self.duplicate_keys
    }

    /// Whether this keybind participates in a duplicate.
    pub fn is_duplicate(&self, keybind: &Keybind) -> bool {
        keybind.is_bound() && self.duplicate_keys.contains(&normalize(&keybind.key))
    }

    /// Replaces the key of the keybind at `index`.
    ///
    /// Returns false (and does nothing) when `index` is out of range.
    pub fn set_key(&mut self, index: usize, key: impl Into<String>) -> bool {
        let Some(keybind) = self.keybinds.get_mut(index) else {
            return false;
        };
        keybind.key = key.into();
        self.refresh_duplicates();
        true
    }

    /// Unbinds the keybind at `index` (sets the literal `unbound`).
    pub fn unbind(&mut self, index: usize) -> bool {
        self.set_key(index, "unbound")
    }

    /// Resets the keybind at `index` per the defaults policy and returns
    /// the restored key, or `None` when `index` is out of range.
    pub fn reset(&mut self, index: usize) -> Option<String> {
        let target = self
            .defaults
            .resolve_reset_target(self.keybinds.get(index)?);
        self.set_key(index, target.clone());
        Some(target)
    }

    /// Renders the document back to file content.
    ///
    /// Format: an `unbindall` header, then every non-bind line verbatim
    /// (skipping pre-existing `unbindall` lines so the header stays
    /// unique), then one `bind` line per bound keybind. Unbound keybinds
    /// are omitted; the header leaves them unbound in-game.
    pub fn render(&self) -> String {
        let mut out = String::from("unbindall\n");

        for line in &self.other_lines {
            if let Some(raw) = line.raw() {
                if raw.trim().to_lowercase().starts_with("unbindall") {
                    continue;
                }
                out.push_str(raw);
                out.push('\n');
            }
        }

        for keybind in &self.keybinds {
            if keybind.is_bound() {
                out.push_str(&format!(
                    "bind          {:<15}  {}\n",
                    keybind.key, keybind.action
                ));
            }
        }

        out
    }

    fn refresh_duplicates(&mut self) {
        self.duplicate_keys = duplicate_keys_of(&self.keybinds);
    }
}
