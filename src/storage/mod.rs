//! Storage layer for receipt-cli
//!
//! Provides JSON file storage with atomic writes, the persisted receipt
//! counter, and the audit trail.

pub mod counter;
pub mod file_io;
pub mod receipts;

pub use counter::FileCounterStore;
pub use file_io::{read_json, write_json_atomic};
pub use receipts::ReceiptRepository;

use serde::Serialize;

use crate::audit::{AuditEntry, AuditLogger, EntityType};
use crate::config::paths::ReceiptPaths;
use crate::error::ReceiptError;

/// Main storage coordinator
pub struct Storage {
    paths: ReceiptPaths,
    pub counter: FileCounterStore,
    pub receipts: ReceiptRepository,
    audit: AuditLogger,
}

impl Storage {
    /// Create a new Storage instance, creating directories as needed
    pub fn new(paths: ReceiptPaths) -> Result<Self, ReceiptError> {
        paths.ensure_directories()?;

        Ok(Self {
            counter: FileCounterStore::new(paths.counter_file()),
            receipts: ReceiptRepository::new(paths.receipts_file()),
            audit: AuditLogger::new(paths.audit_log()),
            paths,
        })
    }

    pub fn paths(&self) -> &ReceiptPaths {
        &self.paths
    }

    /// Load all data from disk
    pub fn load_all(&mut self) -> Result<(), ReceiptError> {
        self.receipts.load()
    }

    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Record a created entity in the audit log
    pub fn log_create<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        entity_name: Option<String>,
        entity: &T,
    ) -> Result<(), ReceiptError> {
        self.audit
            .log(&AuditEntry::create(entity_type, entity_id, entity_name, entity))
    }

    /// Record an updated entity in the audit log
    pub fn log_update<T: Serialize>(
        &self,
        entity_type: EntityType,
        entity_id: impl Into<String>,
        before: &T,
        after: &T,
        diff_summary: Option<String>,
    ) -> Result<(), ReceiptError> {
        self.audit.log(&AuditEntry::update(
            entity_type,
            entity_id,
            before,
            after,
            diff_summary,
        ))
    }
}
