//! JSON export of issued receipts

use std::io::Write;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ReceiptError, ReceiptResult};
use crate::models::{Money, ReceiptRecord};
use crate::numbering::CounterStore;
use crate::storage::Storage;

/// Current export schema version
pub const EXPORT_SCHEMA_VERSION: &str = "1.0.0";

/// Full export structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FullExport {
    pub schema_version: String,

    pub exported_at: DateTime<Utc>,

    /// Application version that created the export
    pub app_version: String,

    /// Counter value the next receipt will be issued under
    pub next_counter: u64,

    pub receipts: Vec<ReceiptRecord>,

    pub metadata: ExportMetadata,
}

/// Export metadata for reference
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportMetadata {
    pub receipt_count: usize,

    /// Sum of all receipt totals
    pub total_amount: Money,

    pub first_receipt: Option<String>,

    pub last_receipt: Option<String>,
}

impl FullExport {
    /// Create a new full export from storage
    pub fn from_storage(storage: &Storage) -> ReceiptResult<Self> {
        let receipts = storage.receipts.get_all()?;

        let metadata = ExportMetadata {
            receipt_count: receipts.len(),
            total_amount: receipts.iter().map(|r| r.total_amount()).sum(),
            first_receipt: receipts.first().map(|r| r.receipt_number.to_string()),
            last_receipt: receipts.last().map(|r| r.receipt_number.to_string()),
        };

        Ok(Self {
            schema_version: EXPORT_SCHEMA_VERSION.to_string(),
            exported_at: Utc::now(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            next_counter: storage.counter.read()?,
            receipts,
            metadata,
        })
    }
}

/// Export everything to JSON
pub fn export_full_json<W: Write>(storage: &Storage, writer: W, pretty: bool) -> ReceiptResult<()> {
    let export = FullExport::from_storage(storage)?;

    let result = if pretty {
        serde_json::to_writer_pretty(writer, &export)
    } else {
        serde_json::to_writer(writer, &export)
    };

    result.map_err(|e| ReceiptError::Export(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ReceiptPaths, Settings};
    use crate::models::{DonationCategory, DonorDetails, ReceiptDraft};
    use crate::services::ReceiptService;
    use tempfile::TempDir;

    #[test]
    fn test_export_full_json() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ReceiptPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        let settings = Settings::default();
        let service = ReceiptService::new(&storage, &settings);

        for amount in ["100", "250"] {
            let mut draft = ReceiptDraft::new(DonorDetails::new("A", "2024-01-01", "B", "C"));
            draft.select_with_amount(DonationCategory::Utsav, amount).unwrap();
            service.generate(&draft).unwrap();
        }

        let mut buffer = Vec::new();
        export_full_json(&storage, &mut buffer, true).unwrap();
        let export: FullExport = serde_json::from_slice(&buffer).unwrap();

        assert_eq!(export.schema_version, EXPORT_SCHEMA_VERSION);
        assert_eq!(export.next_counter, 3);
        assert_eq!(export.metadata.receipt_count, 2);
        assert_eq!(export.metadata.total_amount, Money::from_rupees(350));
        assert_eq!(export.metadata.first_receipt.as_deref(), Some("RN-0001"));
        assert_eq!(export.metadata.last_receipt.as_deref(), Some("RN-0002"));
    }
}
