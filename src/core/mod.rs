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

//! src/core/mod.rs
//!
//! Core business logic module
//!
//! This module contains the fundamental data structures and algorithms
//! for keybind editing, including:
//! - Type definitions for keybinds and classified config lines
//! - Key-combo canonicalization (the basis of every comparison)
//! - Duplicate detection using HashMap-based lookup over canonical forms
//! - The uikeys.txt line grammar
//! - Default-key resolution and the reset policy
//! - The in-memory document with verbatim-preserving save
//!
//! All business logic is isolated from CLI and I/O concerns to enable
//! comprehensive unit testing on plain strings.

pub mod conflict;
pub mod defaults;
pub mod document;
pub mod normalizer;
pub mod parser;
pub mod types;
pub mod validator;

pub use conflict::{duplicate_keys_of, Duplicate, DuplicateDetector};
pub use defaults::DefaultsIndex;
pub use document::KeybindDocument;
pub use normalizer::normalize;
pub use types::*;
pub use validator::{KeyFieldLinter, LintIssue};

#[cfg(test)]
mod tests;
