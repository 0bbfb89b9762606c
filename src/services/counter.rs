//! Counter service
//!
//! Inspects and resets the persisted receipt counter.

use crate::audit::EntityType;
use crate::config::Settings;
use crate::error::ReceiptResult;
use crate::numbering::{self, CounterStore, ReceiptNumber};
use crate::storage::Storage;

/// Audit entity id of the receipt counter
pub const COUNTER_ENTITY_ID: &str = "receipt-counter";

pub struct CounterService<'a> {
    storage: &'a Storage,
    settings: &'a Settings,
}

impl<'a> CounterService<'a> {
    pub fn new(storage: &'a Storage, settings: &'a Settings) -> Self {
        Self { storage, settings }
    }

    /// The counter value the next receipt will be issued under
    pub fn current(&self) -> ReceiptResult<u64> {
        self.storage.counter.read()
    }

    /// The receipt number the next receipt will carry
    pub fn next_number(&self) -> ReceiptResult<ReceiptNumber> {
        numbering::peek_next(&self.storage.counter, &self.settings.numbering_policy())
    }

    /// Move the counter to `value`, returning the previous value
    pub fn set(&self, value: u64) -> ReceiptResult<u64> {
        let before = self.storage.counter.read()?;
        self.storage.counter.write(value)?;

        self.storage.log_update(
            EntityType::Counter,
            COUNTER_ENTITY_ID,
            &before,
            &value,
            Some(format!("next: {} -> {} (manual)", before, value)),
        )?;

        Ok(before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::ReceiptPaths;
    use tempfile::TempDir;

    #[test]
    fn test_set_and_next_number() {
        let temp_dir = TempDir::new().unwrap();
        let storage = Storage::new(ReceiptPaths::with_base_dir(temp_dir.path().to_path_buf())).unwrap();
        let settings = Settings::default();
        let service = CounterService::new(&storage, &settings);

        assert_eq!(service.current().unwrap(), 1);
        assert_eq!(service.set(7).unwrap(), 1);
        assert_eq!(service.current().unwrap(), 7);
        assert_eq!(service.next_number().unwrap().as_str(), "RN-0007");

        let entries = storage.audit().read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].entity_id, COUNTER_ENTITY_ID);
    }
}
