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

//! src/core/normalizer.rs
//!
//! Key-combo canonicalization
//!
//! The engine compares keybindings by their canonical string form, not by
//! the literal text a user typed. This module turns a raw key field
//! (`"Shift+Ctrl+1"`, `"Any+shift"`, `"1,1"`) into that canonical form:
//!
//! - Tokens are case-folded and alias-resolved (`ctl` → `ctrl`,
//!   `cmd` → `meta`, `return` → `enter`, ...)
//! - Named modifiers are deduplicated and emitted in the fixed order
//!   `ctrl, alt, shift, meta`, so `Shift+Ctrl+1` and `Ctrl+Shift+1`
//!   compare equal
//! - The `any` wildcard swallows every named modifier; a bare `Any+shift`
//!   keeps `shift` as its key so the combo still names a trigger
//! - Single letters become `sc_<letter>`, the engine's scan-code
//!   identifier for letter keys
//! - Comma-separated multi-tap segments are normalized independently and
//!   kept in order (tap 1 then tap 2 is not the same binding as the
//!   reverse)
//!
//! Normalization is total and idempotent. Tokens the table doesn't know
//! pass through case-folded rather than failing, so a config written for a
//! newer engine build still loads.

use crate::core::types::Modifier;

/// Normalize a full key field: one or more comma-separated chord segments.
///
/// Empty segments are dropped; segment order is preserved. An empty or
/// all-whitespace input normalizes to `""`.
///
/// # Example
/// ```
/// use bar_keybind_manager::core::normalizer::normalize;
///
/// assert_eq!(normalize("Shift+Ctrl+1"), "ctrl+shift+1");
/// assert_eq!(normalize("Any+shift"), "any+shift");
/// assert_eq!(normalize("1,1"), "1,1");
/// ```
pub fn normalize(raw: &str) -> String {
    raw.split(',')
        .map(normalize_chord)
        .filter(|segment| !segment.is_empty())
        .collect::<Vec<_>>()
        .join(",")
}

/// Normalize an optional key field, treating `None` as unbound.
pub fn normalize_opt(raw: Option<&str>) -> String {
    raw.map(normalize).unwrap_or_default()
}

/// Normalize a single chord segment (`+`-joined tokens, no commas).
pub fn normalize_chord(segment: &str) -> String {
    let tokens: Vec<String> = segment
        .split('+')
        .filter(|fragment| !fragment.trim().is_empty())
        .map(normalize_token)
        .collect();

    let mut any = false;
    let mut named: Vec<Modifier> = Vec::new();
    let mut keys: Vec<String> = Vec::new();

    for token in tokens {
        if token == "any" {
            any = true;
        } else if let Some(modifier) = Modifier::from_token(&token) {
            // Deduplicate, keeping first-encounter order for the any-rule
            if !named.contains(&modifier) {
                named.push(modifier);
            }
        } else {
            keys.push(token);
        }
    }

    let modifiers: Vec<String> = if any {
        // The wildcard swallows every named modifier. If that leaves the
        // combo without a key, the first named modifier becomes the key:
        // "Any+shift" means "shift pressed, other modifiers ignored".
        if keys.is_empty() {
            if let Some(first) = named.first() {
                keys.push(first.to_string());
            }
        }
        vec!["any".to_string()]
    } else {
        named.sort_by_key(|m| m.rank());
        named.iter().map(|m| m.to_string()).collect()
    };

    let mods = modifiers.join("+");
    let key = keys.join("+");
    match (mods.is_empty(), key.is_empty()) {
        (true, true) => String::new(),
        (true, false) => key,
        (false, true) => mods,
        (false, false) => format!("{}+{}", mods, key),
    }
}

/// Normalize one token: case-fold, resolve aliases, rewrite single letters
/// to the engine's `sc_<letter>` form. Unknown tokens pass through
/// case-folded.
pub fn normalize_token(raw: &str) -> String {
    let token = raw.trim().to_lowercase();

    let aliased = match token.as_str() {
        "control" | "ctl" => "ctrl",
        "option" => "alt",
        "super" | "win" | "cmd" => "meta",
        "escape" => "esc",
        "return" => "enter",
        "del" => "delete",
        "pgup" => "pageup",
        "pgdn" => "pagedown",
        // US digit-row symbols fold to their base key, so a captured
        // Shift+2 ("@") and a hand-typed "shift+2" compare equal
        "!" => "1",
        "@" => "2",
        "#" => "3",
        "$" => "4",
        "%" => "5",
        "^" => "6",
        "&" => "7",
        "*" => "8",
        "(" => "9",
        ")" => "0",
        other => other,
    };

    if is_function_key(aliased) {
        return aliased.to_string();
    }

    // A bare letter becomes a scan-code key ("sc_a"), keeping literal
    // letter keys distinct from symbolic key names
    let mut chars = aliased.chars();
    if let (Some(ch), None) = (chars.next(), chars.next()) {
        if ch.is_alphabetic() {
            return format!("sc_{}", ch);
        }
    }

    aliased.to_string()
}

/// `f` followed by one or more digits (f1, f12, ...).
fn is_function_key(token: &str) -> bool {
    let mut chars = token.chars();
    chars.next() == Some('f')
        && token.len() > 1
        && chars.all(|c| c.is_ascii_digit())
}
