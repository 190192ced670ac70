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

//! src/core/parser.rs
//!
//! uikeys.txt line parser
//!
//! The Spring engine's keybind file is line oriented:
//!
//! ```text
//! // comment
//! unbindall
//! bind  Ctrl+1      group1
//! bind  sc_w        moveforward
//! ```
//!
//! A `bind` line is `bind <key> <action>` with whitespace separation; the
//! key field is a single token, and everything after it is the action (so
//! action names may contain spaces). `//` starts a comment, blank lines
//! are blank, and anything else is an unrecognized directive.
//!
//! # Graceful degradation
//! Classifying a line never fails. A malformed bind line (missing key or
//! action) and every directive the editor doesn't understand fall back to
//! [`ConfigLine::Other`] with the raw text preserved, so a partially
//! understood file loads, edits, and saves without losing a byte of the
//! lines the editor didn't touch.
//!
//! # Architecture
//! The bind-line grammar is expressed with nom combinators; the
//! line-kind dispatch on top is plain string inspection. The parser only
//! reads and structures data - interpretation of key fields happens in
//! the normalizer.

use nom::{
    bytes::complete::{tag, take_while1},
    character::complete::space1,
    IResult, Parser,
};

use crate::core::types::ConfigLine;

/// Classify one physical line of a uikeys.txt file.
///
/// # Example
/// ```
/// use bar_keybind_manager::core::parser::parse_line;
/// use bar_keybind_manager::core::types::ConfigLine;
///
/// assert_eq!(
///     parse_line("bind Ctrl+1 group1"),
///     ConfigLine::Bind { key: "Ctrl+1".into(), action: "group1".into() }
/// );
/// assert_eq!(parse_line("unbindall"), ConfigLine::Other("unbindall".into()));
/// ```
pub fn parse_line(line: &str) -> ConfigLine {
    let trimmed = line.trim();

    if trimmed.is_empty() {
        return ConfigLine::Empty(line.to_string());
    }

    if trimmed.starts_with("//") {
        return ConfigLine::Comment(line.to_string());
    }

    match parse_bind_line(trimmed) {
        Ok((_, (key, action))) => ConfigLine::Bind { key, action },
        Err(_) => ConfigLine::Other(line.to_string()),
    }
}

/// Classify every line of a file, in order.
pub fn parse_lines(content: &str) -> Vec<ConfigLine> {
    content.lines().map(parse_line).collect()
}

/// Parse a trimmed `bind <key> <action>` line.
///
/// The key field is the first whitespace-free token after `bind`; the
/// action is the remainder of the line, trimmed. Fails (for the caller to
/// degrade to `Other`) when the keyword, key, or action is missing -
/// including near-misses like `bindX` where `bind` is only a prefix.
pub fn parse_bind_line(input: &str) -> IResult<&str, (String, String)> {
    let (input, _) = tag("bind").parse(input)?;
    let (input, _) = space1(input)?;
    let (input, key) = take_while1(|c: char| !c.is_whitespace()).parse(input)?;
    let (input, _) = space1(input)?;
    let (input, action) = take_while1(|c: char| c != '\n').parse(input)?;

    Ok((input, (key.to_string(), action.trim().to_string())))
}
