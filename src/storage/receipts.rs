//! Receipt repository for JSON storage
//!
//! Manages loading and saving issued receipts to receipts.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::ReceiptError;
use crate::models::{ReceiptId, ReceiptRecord};

use super::file_io::{read_json, write_json_atomic};

/// Serializable receipt data structure
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct ReceiptData {
    receipts: Vec<ReceiptRecord>,
}

/// Repository for issued receipts
pub struct ReceiptRepository {
    path: PathBuf,
    data: RwLock<HashMap<ReceiptId, ReceiptRecord>>,
}

impl ReceiptRepository {
    /// Create a new receipt repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load receipts from disk
    pub fn load(&self) -> Result<(), ReceiptError> {
        let file_data: ReceiptData = read_json(&self.path)?;

        let mut data = self.data.write().map_err(|e| {
            ReceiptError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        data.clear();
        for receipt in file_data.receipts {
            data.insert(receipt.id, receipt);
        }

        Ok(())
    }

    /// Save receipts to disk, oldest first
    pub fn save(&self) -> Result<(), ReceiptError> {
        let receipts = self.get_all()?;
        write_json_atomic(&self.path, &ReceiptData { receipts })
    }

    /// All receipts, oldest first
    pub fn get_all(&self) -> Result<Vec<ReceiptRecord>, ReceiptError> {
        let data = self.data.read().map_err(|e| {
            ReceiptError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        let mut receipts: Vec<_> = data.values().cloned().collect();
        receipts.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.receipt_number.cmp(&b.receipt_number))
        });
        Ok(receipts)
    }

    /// Find a receipt by its receipt number (case-insensitive)
    pub fn get_by_number(&self, number: &str) -> Result<Option<ReceiptRecord>, ReceiptError> {
        let data = self.data.read().map_err(|e| {
            ReceiptError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;

        Ok(data
            .values()
            .find(|r| r.receipt_number.matches(number))
            .cloned())
    }

    /// Insert a newly issued receipt
    ///
    /// Fails if another receipt already carries the same number, which
    /// happens when the counter was moved backwards.
    pub fn insert(&self, receipt: ReceiptRecord) -> Result<(), ReceiptError> {
        let mut data = self.data.write().map_err(|e| {
            ReceiptError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;

        if data
            .values()
            .any(|r| r.receipt_number == receipt.receipt_number)
        {
            return Err(ReceiptError::Duplicate {
                entity_type: "Receipt",
                identifier: receipt.receipt_number.to_string(),
            });
        }

        data.insert(receipt.id, receipt);
        Ok(())
    }

    /// Remove a receipt from memory, returning it if it was present
    pub fn remove(&self, id: &ReceiptId) -> Result<Option<ReceiptRecord>, ReceiptError> {
        let mut data = self.data.write().map_err(|e| {
            ReceiptError::Storage(format!("Failed to acquire write lock: {}", e))
        })?;
        Ok(data.remove(id))
    }

    /// Number of stored receipts
    pub fn count(&self) -> Result<usize, ReceiptError> {
        let data = self.data.read().map_err(|e| {
            ReceiptError::Storage(format!("Failed to acquire read lock: {}", e))
        })?;
        Ok(data.len())
    }
}
