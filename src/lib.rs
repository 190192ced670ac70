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

//! BAR Keybind Manager
//!
//! An editor for Beyond All Reason's `uikeys.txt` keybinding file with
//! canonical-form duplicate detection.
//!
//! # Features
//!
//! - **Canonical combos:** `Shift+Ctrl+1`, `ctl+shift+1`, and
//!   `Ctrl+Shift+1` are the same binding, and every comparison knows it
//! - **Duplicate detection:** two actions on equivalent combos are
//!   flagged before they shadow each other in-game
//! - **Defaults-aware resets:** reset restores the default the file
//!   already encoded, not blindly the first one listed
//! - **Verbatim preservation:** comments, blank lines, and unknown
//!   directives survive every save byte-for-byte
//! - **Automatic backups:** timestamped backups before every change
//! - **Atomic operations:** safe file writes, no partial states
//!
//! # Architecture
//!
//! - **`core`:** Business logic (normalization, parsing, duplicate
//!   detection, defaults, the editable document)
//! - **`config`:** File operations (reading, atomic writes, backups)
//!
//! The CLI in `src/main.rs` is a thin adapter over these modules; the
//! core never touches the filesystem.
//!
//! # Examples
//!
//! ## Loading a file and checking duplicates
//!
//! ```no_run
//! use bar_keybind_manager::core::{DefaultsIndex, KeybindDocument};
//!
//! let content = std::fs::read_to_string("uikeys.txt")?;
//! let doc = KeybindDocument::parse(&content, DefaultsIndex::new());
//!
//! for key in doc.duplicate_keys() {
//!     println!("duplicate: {}", key);
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Canonicalizing a combo
//!
//! ```
//! use bar_keybind_manager::core::normalize;
//!
//! assert_eq!(normalize("Shift+Ctrl+1"), "ctrl+shift+1");
//! assert_eq!(normalize("Ctrl+Alt+Any+F"), "any+sc_f");
//! ```

pub mod config;
pub mod core;

// Re-export commonly used types for convenience
pub use self::core::{ConfigLine, DefaultsIndex, Keybind, KeybindDocument, Modifier};
