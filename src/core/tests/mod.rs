//! Core module tests
//!
//! Contains test suites for core functionality:
//! - Normalizer canonical-form tests
//! - Line parser tests
//! - Duplicate detection tests
//! - Defaults / reset policy tests
//! - Document load, edit, and round-trip tests
//! - Key-field lint tests

#[cfg(test)]
mod defaults_tests;
#[cfg(test)]
mod document_tests;
#[cfg(test)]
mod parser_tests;
#[cfg(test)]
mod validator_tests;
