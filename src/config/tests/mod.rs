//! Config module tests
//!
//! Contains test suites for file management:
//! - ConfigManager creation, reading, and backups
//! - Transaction begin/commit/rollback
