//! Receipt service
//!
//! Turns a validated draft into an issued receipt: takes the next receipt
//! number, stores the receipt and records both in the audit log.

use crate::audit::EntityType;
use crate::config::Settings;
use crate::error::{ReceiptError, ReceiptResult};
use crate::models::{ReceiptDraft, ReceiptRecord};
use crate::numbering::{self, CounterStore};
use crate::storage::Storage;
use crate::validation;

use super::counter::COUNTER_ENTITY_ID;

/// Service for issuing and looking up receipts
pub struct ReceiptService<'a> {
    storage: &'a Storage,
    settings: &'a Settings,
}

impl<'a> ReceiptService<'a> {
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> Self {
        Self { storage, settings }
    }

    fn ensure_submittable(draft: &ReceiptDraft) -> ReceiptResult<()> {
        let issues = validation::check(&draft.donor, &draft.lines);
        if issues.is_empty() {
            return Ok(());
        }

        let reasons: Vec<String> = issues.iter().map(ToString::to_string).collect();
        Err(ReceiptError::Validation(reasons.join("; ")))
    }

    /// Build the receipt the draft would produce, without consuming a number
    pub fn preview(&self, draft: &ReceiptDraft) -> ReceiptResult<ReceiptRecord> {
        Self::ensure_submittable(draft)?;
        let number =
            numbering::peek_next(&self.storage.counter, &self.settings.numbering_policy())?;
        Ok(ReceiptRecord::from_draft(number, draft))
    }

    /// Issue a receipt for the draft
    ///
    /// Nothing is consumed when the draft is not submittable, when the next
    /// number is already taken or when the receipt cannot be saved. The
    /// counter only advances once the receipt is on disk.
    pub fn generate(&self, draft: &ReceiptDraft) -> ReceiptResult<ReceiptRecord> {
        Self::ensure_submittable(draft)?;

        let policy = self.settings.numbering_policy();
        let next = numbering::peek_next(&self.storage.counter, &policy)?;
        if self.storage.receipts.get_by_number(next.as_str())?.is_some() {
            return Err(ReceiptError::Duplicate {
                entity_type: "Receipt",
                identifier: next.to_string(),
            });
        }

        let record = ReceiptRecord::from_draft(next, draft);
        self.storage.receipts.insert(record.clone())?;
        if let Err(e) = self.storage.receipts.save() {
            self.storage.receipts.remove(&record.id)?;
            return Err(e);
        }

        let before = self.storage.counter.read()?;
        let issued = numbering::issue_next(&self.storage.counter, &policy)?;
        let after = self.storage.counter.read()?;
        if issued != record.receipt_number {
            return Err(ReceiptError::Counter(format!(
                "counter moved while issuing {}",
                record.receipt_number
            )));
        }

        self.storage.log_create(
            EntityType::Receipt,
            record.receipt_number.to_string(),
            Some(record.donor.donor_name.clone()),
            &record,
        )?;
        self.storage.log_update(
            EntityType::Counter,
            COUNTER_ENTITY_ID,
            &before,
            &after,
            Some(format!("next: {} -> {}", before, after)),
        )?;

        Ok(record)
    }

    /// All issued receipts, oldest first
    pub fn list(&self) -> ReceiptResult<Vec<ReceiptRecord>> {
        self.storage.receipts.get_all()
    }

    /// Find a receipt by receipt number
    pub fn find(&self, number: &str) -> ReceiptResult<ReceiptRecord> {
        self.storage
            .receipts
            .get_by_number(number)?
            .ok_or_else(|| ReceiptError::receipt_not_found(number.trim()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::Operation;
    use crate::config::paths::ReceiptPaths;
    use crate::models::{DonationCategory, DonorDetails, Money};
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = ReceiptPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn valid_draft() -> ReceiptDraft {
        let mut draft = ReceiptDraft::new(DonorDetails::new(
            "Asha Patel",
            "2024-01-01",
            "Surat",
            "Mahesh",
        ));
        draft
            .select_with_amount(DonationCategory::ThalBhet, "100")
            .unwrap();
        draft
    }

    #[test]
    fn test_generate_issues_sequential_numbers() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let service = ReceiptService::new(&storage, &settings);

        let first = service.generate(&valid_draft()).unwrap();
        let second = service.generate(&valid_draft()).unwrap();

        assert_eq!(first.receipt_number.as_str(), "RN-0001");
        assert_eq!(second.receipt_number.as_str(), "RN-0002");
        assert_eq!(first.total_amount(), Money::from_rupees(100));
        assert_eq!(storage.counter.read().unwrap(), 3);
        assert_eq!(service.list().unwrap().len(), 2);
    }

    #[test]
    fn test_generate_writes_audit_entries() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let service = ReceiptService::new(&storage, &settings);

        service.generate(&valid_draft()).unwrap();

        let entries = storage.audit().read_all().unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].entity_type, EntityType::Receipt);
        assert_eq!(entries[0].entity_id, "RN-0001");
        assert_eq!(entries[1].operation, Operation::Update);
        assert_eq!(entries[1].diff_summary.as_deref(), Some("next: 1 -> 2"));
    }

    #[test]
    fn test_invalid_draft_consumes_nothing() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let service = ReceiptService::new(&storage, &settings);

        let mut draft = valid_draft();
        draft.donor.city = "  ".into();

        let err = service.generate(&draft).unwrap_err();
        assert!(err.is_validation());
        assert!(err.to_string().contains("City is required"));
        assert_eq!(storage.counter.read().unwrap(), 1);
        assert!(service.list().unwrap().is_empty());
    }

    #[test]
    fn test_preview_does_not_advance() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let service = ReceiptService::new(&storage, &settings);

        let preview = service.preview(&valid_draft()).unwrap();
        assert_eq!(preview.receipt_number.as_str(), "RN-0001");
        assert_eq!(storage.counter.read().unwrap(), 1);
        assert!(service.list().unwrap().is_empty());
    }

    #[test]
    fn test_rewound_counter_is_rejected() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let service = ReceiptService::new(&storage, &settings);

        service.generate(&valid_draft()).unwrap();
        storage.counter.write(1).unwrap();

        let err = service.generate(&valid_draft()).unwrap_err();
        assert!(matches!(err, ReceiptError::Duplicate { .. }));
        assert_eq!(storage.counter.read().unwrap(), 1);
    }

    #[test]
    fn test_find() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let service = ReceiptService::new(&storage, &settings);

        service.generate(&valid_draft()).unwrap();

        assert_eq!(service.find("rn-0001").unwrap().donor.city, "Surat");
        assert!(service.find("RN-0099").unwrap_err().is_not_found());
    }

    #[test]
    fn test_failed_save_consumes_nothing() {
        let (_temp_dir, storage) = create_test_storage();
        let settings = Settings::default();
        let service = ReceiptService::new(&storage, &settings);

        // A directory where the temp file should go makes the save fail
        let receipts_file = storage.paths().receipts_file();
        std::fs::create_dir_all(receipts_file.with_extension("json.tmp")).unwrap();

        let err = service.generate(&valid_draft()).unwrap_err();
        assert!(matches!(err, ReceiptError::Storage(_)));
        assert_eq!(storage.counter.read().unwrap(), 1);
        assert!(service.list().unwrap().is_empty());
        assert!(storage.audit().read_all().unwrap().is_empty());

        std::fs::remove_dir(receipts_file.with_extension("json.tmp")).unwrap();
        let record = service.generate(&valid_draft()).unwrap();
        assert_eq!(record.receipt_number.as_str(), "RN-0001");
        assert_eq!(storage.counter.read().unwrap(), 2);
    }
}
