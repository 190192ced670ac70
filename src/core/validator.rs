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

//! Key-field linting
//!
//! The normalizer is total: a misspelled modifier like `cttrl` passes
//! through unchanged, the file saves cleanly, and the game silently binds
//! nothing. This module catches that class of mistake before it reaches
//! disk.
//!
//! Linting is advisory. Every issue is a warning - unknown tokens stay
//! legal (forward-compatible with keys and actions the tool doesn't know),
//! so nothing here ever blocks a save.

use regex::Regex;

use crate::core::normalizer::normalize_token;
use crate::core::types::{Keybind, Modifier};

/// Named keys the capture surface can produce.
const KNOWN_KEYS: &[&str] = &[
    "backspace", "enter", "tab", "esc", "space", "delete", "home", "end",
    "pageup", "pagedown", "up", "down", "left", "right", "insert", "pause",
];

/// One advisory finding about a keybind's key field or action name.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LintIssue {
    /// Index of the keybind in the document
    pub keybind_index: usize,

    /// Action name, for report readability
    pub action: String,

    /// Human-readable description of the issue
    pub message: String,
}

/// Lints key fields against the token shapes the engine understands.
///
/// Token-shape patterns are compiled once at construction and reused
/// across every keybind checked.
pub struct KeyFieldLinter {
    function_key: Regex,
    scancode: Regex,
    numpad: Regex,
    printable_action: Regex,
}

impl KeyFieldLinter {
    /// Creates a linter with all token-shape patterns compiled.
    pub fn new() -> Self {
        Self {
            function_key: Regex::new(r"^f\d+$")
                .expect("function-key pattern should be valid regex"),
            scancode: Regex::new(r"^sc_\p{Alphabetic}$")
                .expect("scan-code pattern should be valid regex"),
            numpad: Regex::new(r"^numpad\S{1,2}$")
                .expect("numpad pattern should be valid regex"),
            printable_action: Regex::new(r"^[!-~][ -~]*$")
                .expect("printable-action pattern should be valid regex"),
        }
    }

    /// Whether a normalized token matches any shape the engine knows.
    fn is_known_token(&self, token: &str) -> bool {
        token == "any"
            || Modifier::from_token(token).is_some()
            || KNOWN_KEYS.contains(&token)
            || self.function_key.is_match(token)
            || self.scancode.is_match(token)
            || self.numpad.is_match(token)
            || is_single_printable(token)
    }

    /// Lints one raw key field, returning a message per problem found.
    pub fn lint_key_field(&self, raw: &str) -> Vec<String> {
        let mut messages = Vec::new();

        if raw.trim().is_empty() {
            messages.push("empty key field".to_string());
            return messages;
        }

        for segment in raw.split(',') {
            if segment.trim().is_empty() {
                messages.push("empty chord segment in multi-tap sequence".to_string());
                continue;
            }
            for fragment in segment.split('+') {
                if fragment.trim().is_empty() {
                    continue;
                }
                let token = normalize_token(fragment);
                if !self.is_known_token(&token) {
                    messages.push(format!(
                        "unrecognized token '{}' (normalizes to '{}')",
                        fragment.trim(),
                        token
                    ));
                }
            }
        }

        messages
    }

    /// Lints every bound keybind in a collection.
    ///
    /// Unbound keybinds are skipped - there is nothing to check until the
    /// user captures a key for them.
    pub fn lint_keybinds(&self, keybinds: &[Keybind]) -> Vec<LintIssue> {
        let mut issues = Vec::new();

        for (index, keybind) in keybinds.iter().enumerate() {
            if !keybind.is_bound() {
                continue;
            }

            for message in self.lint_key_field(&keybind.key) {
                issues.push(LintIssue {
                    keybind_index: index,
                    action: keybind.action.clone(),
                    message,
                });
            }

            if !self.printable_action.is_match(&keybind.action) {
                issues.push(LintIssue {
                    keybind_index: index,
                    action: keybind.action.clone(),
                    message: "action name contains non-printable characters".to_string(),
                });
            }
        }

        issues
    }
}

impl Default for KeyFieldLinter {
    fn default() -> Self {
        Self::new()
    }
}

/// A single printable character: digit, symbol, or anything else the
/// keyboard produces as one glyph. Letters never reach this check - they
/// normalize to `sc_<letter>` first.
fn is_single_printable(token: &str) -> bool {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(ch), None) => !ch.is_whitespace() && !ch.is_control(),
        _ => false,
    }
}
