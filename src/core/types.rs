//! src/core/types.rs
//!
//! Core type definitions for keybind editing
//!
//! This module defines the fundamental types used throughout the application:
//! - `Modifier`: Named modifier keys (ctrl, alt, shift, meta)
//! - `ConfigLine`: One classified line of a uikeys.txt file
//! - `Keybind`: One action's editable binding state
//!
//! All types implement serialization for persistence, and comparisons that
//! matter for correctness (changed detection) go through the canonical
//! combo form rather than literal text.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::core::normalizer::{normalize, normalize_opt};

/// Named keyboard modifier keys
///
/// These are the four modifiers the engine recognizes. Aliases from other
/// conventions (`control`, `win`, `cmd`, ...) are folded onto them during
/// normalization.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub enum Modifier {
    /// Control key
    Ctrl,
    /// Alt/Option key
    Alt,
    /// Shift key
    Shift,
    /// Meta/Super/Windows/Command key
    Meta,
}

impl Modifier {
    /// Position in the fixed canonical ordering `ctrl, alt, shift, meta`.
    ///
    /// Canonical combos list modifiers in this order regardless of how the
    /// user typed them, so `Shift+Ctrl+1` and `Ctrl+Shift+1` render the
    /// same.
    pub fn rank(self) -> u8 {
        match self {
            Modifier::Ctrl => 0,
            Modifier::Alt => 1,
            Modifier::Shift => 2,
            Modifier::Meta => 3,
        }
    }

    /// Look up a modifier from an already case-folded token.
    ///
    /// Accepts the canonical names and their aliases. Returns `None` for
    /// anything that isn't a named modifier (including the `any`
    /// wildcard, which is handled separately by the normalizer).
    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "ctrl" | "control" | "ctl" => Some(Modifier::Ctrl),
            "alt" | "option" => Some(Modifier::Alt),
            "shift" => Some(Modifier::Shift),
            "meta" | "super" | "win" | "cmd" => Some(Modifier::Meta),
            _ => None,
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Modifier::Ctrl => write!(f, "ctrl"),
            Modifier::Alt => write!(f, "alt"),
            Modifier::Shift => write!(f, "shift"),
            Modifier::Meta => write!(f, "meta"),
        }
    }
}

/// One classified line of a uikeys.txt file
///
/// Only `Bind` lines are editable. Every other kind keeps its raw text and
/// is written back verbatim on save, so an edit session never disturbs
/// comments, blank lines, or directives the editor doesn't understand.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub enum ConfigLine {
    /// Blank or whitespace-only line
    Empty(String),
    /// `// ...` comment line
    Comment(String),
    /// `bind <key> <action>` line
    Bind {
        /// Raw key field, exactly as written (possibly comma-joined for
        /// multi-tap sequences)
        key: String,
        /// Action identifier; may contain spaces
        action: String,
    },
    /// Any other directive (including `unbindall`), preserved verbatim
    Other(String),
}

impl ConfigLine {
    /// Raw text for line kinds that are preserved verbatim.
    ///
    /// `Bind` lines are reformatted on save, so they have no raw text.
    pub fn raw(&self) -> Option<&str> {
        match self {
            ConfigLine::Empty(raw) | ConfigLine::Comment(raw) | ConfigLine::Other(raw) => {
                Some(raw)
            }
            ConfigLine::Bind { .. } => None,
        }
    }
}

/// One action's current editable binding state
///
/// Created at load time (one per bind line, plus one synthetic entry per
/// default action missing from the file), mutated in place by
/// unbind/reset/set operations, and replaced wholesale on reload.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct Keybind {
    /// Stable identifier: the source line index, or past the last line for
    /// synthetic entries. Used for original-order sorting only.
    pub id: usize,

    /// Action identifier (e.g. "moveforward"). Duplicate action lines in
    /// the source each get their own Keybind.
    pub action: String,

    /// Live, possibly-edited raw key string (non-normalized)
    pub key: String,

    /// Key string as first loaded; `None` for synthetic entries
    pub original_key: Option<String>,

    /// True if this entry was injected from the defaults list rather than
    /// read from the file
    pub is_synthetic: bool,
}

impl Keybind {
    /// Whether this keybind currently has a real key attached.
    ///
    /// The literal token `unbound` (any case) and the empty string both
    /// count as not bound.
    pub fn is_bound(&self) -> bool {
        let key = self.key.trim().to_lowercase();
        !key.is_empty() && key != "unbound"
    }

    /// Whether this keybind differs from its loaded state.
    ///
    /// Synthetic entries had no loaded key, so they are changed exactly
    /// when they are bound. For everything else the comparison is over
    /// canonical forms: reordering modifiers or switching an alias is not
    /// a change.
    pub fn is_changed(&self) -> bool {
        if self.is_synthetic {
            return self.is_bound();
        }
        normalize(&self.key) != normalize_opt(self.original_key.as_deref())
    }
}

impl fmt::Display for Keybind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.key, self.action)
    }
}
