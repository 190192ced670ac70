//! Keybind file management with atomic writes and backup support.
//!
//! This module provides safe, transactional operations for managing the
//! game's uikeys.txt file. Key features:
//!
//! - **Atomic writes**: Uses temp-file-then-rename to prevent corruption
//! - **Automatic backups**: Every transaction starts with a timestamped backup
//! - **Rollback safety**: Failed transactions leave the original file untouched
//! - **Symlink warnings**: Alerts user but allows symlinked files
//!
//! # Example
//!
//! ```no_run
//! use bar_keybind_manager::config::{ConfigManager, ConfigTransaction};
//!
//! let manager = ConfigManager::new("/home/user/Beyond-All-Reason/data/uikeys.txt".into())?;
//!
//! let tx = ConfigTransaction::begin(&manager)?;
//! tx.commit("unbindall\nbind          sc_w             moveforward\n")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use std::fs;
use std::path::PathBuf;
use chrono::Local;

mod error;
pub mod transaction;

pub use error::ConfigError;
pub use transaction::ConfigTransaction;

/// Manages the uikeys.txt file with safe atomic operations.
///
/// The ConfigManager provides read-only access and transactional writes
/// with automatic backup creation. All writes go through the transaction
/// API to ensure atomicity and recoverability.
#[derive(Debug)]
pub struct ConfigManager {
    /// Path to the keybind file.
    config_path: PathBuf,
    backup_dir: PathBuf,
}

impl ConfigManager {
    /// Creates a new ConfigManager for the given keybind file.
    ///
    /// This validates that the file exists and creates the backup
    /// directory if it doesn't exist. If the file is a symlink, a warning
    /// is printed to stderr but the operation continues.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NotFound` if the keybind file doesn't exist.
    /// Returns `ConfigError::BackupDirNotWritable` if the backup directory
    /// cannot be created.
    pub fn new(config_path: PathBuf) -> Result<Self, ConfigError> {
        if !config_path.exists() {
            return Err(ConfigError::NotFound(config_path));
        }

        // Warn if the file is a symlink (but allow it per user preference)
        if config_path.read_link().is_ok() {
            eprintln!("⚠ Warning: Keybind file is a symlink: {}", config_path.display());
            eprintln!("  This is allowed, but be aware of what it points to.");
        }

        // Create backup directory next to the keybind file
        // e.g., .../data/uikeys.txt → .../data/backups/
        let backup_dir = config_path
            .parent()
            .ok_or_else(|| {
                ConfigError::BackupDirNotWritable(
                    PathBuf::from("Keybind file has no parent directory")
                )
            })?
            .join("backups");

        if !backup_dir.exists() {
            fs::create_dir_all(&backup_dir).map_err(|_| {
                ConfigError::BackupDirNotWritable(backup_dir.clone())
            })?;
        }

        // Verify backup directory is writable
        if backup_dir.metadata()?.permissions().readonly() {
            return Err(ConfigError::BackupDirNotWritable(backup_dir));
        }

        Ok(Self {
            config_path,
            backup_dir,
        })
    }

    /// The managed keybind file path.
    pub fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    /// Reads the current keybind file content.
    ///
    /// This is a read-only operation that does not require a transaction.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Io` if the file cannot be read.
    pub fn read_config(&self) -> Result<String, ConfigError> {
        Ok(fs::read_to_string(&self.config_path)?)
    }

    /// Copies the current file content to a timestamped file in the
    /// backup directory and returns its path.
    pub(crate) fn create_timestamped_backup(&self) -> Result<PathBuf, ConfigError> {
        let content = fs::read_to_string(&self.config_path)?;

        // Timestamp in YYYY-MM-DD_HHMMSS format
        let timestamp = Local::now().format("%Y-%m-%d_%H%M%S");

        let original_name = self.config_path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| {
                ConfigError::BackupFailed("Keybind file name is not valid UTF-8".to_string())
            })?;

        let backup_filename = format!("{}.{}", original_name, timestamp);
        let backup_path = self.backup_dir.join(&backup_filename);

        fs::write(&backup_path, &content)?;

        Ok(backup_path)
    }
}

#[cfg(test)]
mod tests;
