//! Path management for receipt-cli
//!
//! ## Path Resolution Order
//!
//! 1. `RECEIPT_CLI_DATA_DIR` environment variable (if set)
//! 2. The platform configuration directory for `receipt-cli`
//!    (`~/.config/receipt-cli` on Linux, `%APPDATA%\receipt-cli\config` on Windows)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::ReceiptError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "RECEIPT_CLI_DATA_DIR";

/// Manages all paths used by receipt-cli
#[derive(Debug, Clone)]
pub struct ReceiptPaths {
    /// Base directory for all receipt-cli data
    base_dir: PathBuf,
}

impl ReceiptPaths {
    /// Create a new ReceiptPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no platform configuration directory can be determined.
    pub fn new() -> Result<Self, ReceiptError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create ReceiptPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Get the data directory (`<base>/data/`)
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the audit log
    pub fn audit_log(&self) -> PathBuf {
        self.base_dir.join("audit.log")
    }

    /// Get the path to counter.json (next receipt sequence number)
    pub fn counter_file(&self) -> PathBuf {
        self.data_dir().join("counter.json")
    }

    /// Get the path to receipts.json (issued receipts)
    pub fn receipts_file(&self) -> PathBuf {
        self.data_dir().join("receipts.json")
    }

    /// Ensure the base and data directories exist
    pub fn ensure_directories(&self) -> Result<(), ReceiptError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ReceiptError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| ReceiptError::Io(format!("Failed to create data directory: {}", e)))?;

        Ok(())
    }

    /// Check if receipt-cli has been initialized (config file exists)
    pub fn is_initialized(&self) -> bool {
        self.settings_file().exists()
    }
}

fn resolve_default_path() -> Result<PathBuf, ReceiptError> {
    ProjectDirs::from("", "", "receipt-cli")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or_else(|| ReceiptError::Config("Could not determine a home directory".into()))
}
