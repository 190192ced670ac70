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

//! Keybind file transaction management with automatic backups
//!
//! Provides atomic write operations with ACID guarantees.

use atomic_write_file::AtomicWriteFile;
use std::{fs, io::Write, path::PathBuf};

use crate::config::{ConfigError, ConfigManager};

/// Atomic keybind file transaction with automatic backup.
///
/// Provides ACID guarantees:
/// - **Atomic**: Changes are all-or-nothing (atomic file operations)
/// - **Consistent**: The file is never in a half-written state
/// - **Isolated**: No race conditions (OS-level atomic rename)
/// - **Durable**: Backup created before any modifications
///
/// # Lifecycle
///
/// 1. `begin()` - Creates timestamped backup immediately
/// 2. User prepares new content (in memory)
/// 3. `commit()` - Writes atomically, or `rollback()` - Restores original
///
/// # Example
///
/// ```no_run
/// use bar_keybind_manager::config::{ConfigManager, ConfigTransaction};
/// use std::path::PathBuf;
///
/// let manager = ConfigManager::new(PathBuf::from("uikeys.txt"))?;
/// let tx = ConfigTransaction::begin(&manager)?;
///
/// let new_content = "unbindall\nbind          sc_w             moveforward\n";
///
/// match tx.commit(new_content) {
///     Ok(()) => println!("Changes applied successfully"),
///     Err(e) => eprintln!("Commit failed: {}", e),
/// }
/// # Ok::<(), bar_keybind_manager::config::ConfigError>(())
/// ```
pub struct ConfigTransaction<'a> {
    manager: &'a ConfigManager,
    backup_path: Option<PathBuf>,
}

impl<'a> ConfigTransaction<'a> {
    /// Begins a new transaction by creating a timestamped backup.
    ///
    /// The backup is created immediately when `begin()` is called, ensuring
    /// that a rollback point exists before any modifications are attempted.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The keybind file cannot be read
    /// - The backup file cannot be written
    pub fn begin(manager: &'a ConfigManager) -> Result<Self, ConfigError> {
        // Create backup immediately - this is our rollback point
        let backup_path = manager.create_timestamped_backup()?;

        Ok(Self {
            manager,
            backup_path: Some(backup_path),
        })
    }

    /// Path of the backup created when this transaction began.
    pub fn backup_path(&self) -> Option<&PathBuf> {
        self.backup_path.as_ref()
    }

    /// Commits the transaction by atomically writing new content to the
    /// keybind file.
    ///
    /// The write operation is atomic at the filesystem level (temp file +
    /// rename), ensuring the file is never in a partially-written state.
    /// The backup created during `begin()` remains available for manual
    /// rollback if needed.
    ///
    /// This method consumes the transaction, preventing accidental
    /// double-commits.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Temporary file cannot be created
    /// - Content cannot be written to the temp file
    /// - Atomic rename operation fails
    ///
    /// If an error occurs, the original file remains unchanged and the
    /// backup created during `begin()` is still available for rollback.
    pub fn commit(self, new_content: &str) -> Result<(), ConfigError> {
        let mut file = AtomicWriteFile::options()
            .open(&self.manager.config_path)
            .map_err(|e| {
                ConfigError::WriteFailed(format!("Failed to open for atomic write: {}", e))
            })?;

        file.write_all(new_content.as_bytes())
            .map_err(|e| ConfigError::WriteFailed(format!("Failed to write content: {}", e)))?;

        file.commit().map_err(|e| {
            ConfigError::WriteFailed(format!("Failed to commit atomic write: {}", e))
        })?;

        // Backup remains in the backup directory for later rollback
        Ok(())
    }

    /// Rolls back to the backup created during `begin()`.
    ///
    /// Atomically restores the keybind file to its state when the
    /// transaction began. This can be called after a failed commit or to
    /// manually undo changes.
    ///
    /// Unlike `commit()`, this method borrows `self` immutably, allowing
    /// multiple rollback attempts if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No backup path is available (should not happen in normal usage)
    /// - Backup file cannot be read
    /// - Atomic write of backup content fails
    pub fn rollback(&self) -> Result<(), ConfigError> {
        if let Some(backup_path) = &self.backup_path {
            let backup_content = fs::read_to_string(backup_path)?;

            let mut file = AtomicWriteFile::options()
                .open(&self.manager.config_path)
                .map_err(|e| {
                    ConfigError::WriteFailed(format!("Failed to open for atomic write: {}", e))
                })?;

            file.write_all(backup_content.as_bytes())
                .map_err(|e| ConfigError::WriteFailed(format!("Failed to write content: {}", e)))?;

            file.commit()
                .map_err(|e| ConfigError::WriteFailed(format!("Failed to commit: {}", e)))?;

            Ok(())
        } else {
            // This should not happen in normal usage (begin() always creates backup)
            Err(ConfigError::BackupFailed(
                "No backup available for rollback".to_string(),
            ))
        }
    }
}
