//! Receipt counter persisted in counter.json

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::ReceiptResult;
use crate::numbering::{CounterStore, INITIAL_COUNTER};

use super::file_io::{read_json, write_json_atomic};

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CounterData {
    next: u64,
}

impl Default for CounterData {
    fn default() -> Self {
        Self {
            next: INITIAL_COUNTER,
        }
    }
}

/// File-backed [`CounterStore`]
///
/// Every read goes to disk, so separate handles on the same file agree.
/// Concurrent writers are not coordinated.
pub struct FileCounterStore {
    path: PathBuf,
}

impl FileCounterStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Whether a counter has ever been written
    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

impl CounterStore for FileCounterStore {
    fn read(&self) -> ReceiptResult<u64> {
        let data: CounterData = read_json(&self.path)?;
        Ok(data.next)
    }

    fn write(&self, value: u64) -> ReceiptResult<()> {
        write_json_atomic(&self.path, &CounterData { next: value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::numbering::{issue_next, NumberingPolicy};
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_reads_initial_value() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileCounterStore::new(temp_dir.path().join("counter.json"));

        assert!(!store.exists());
        assert_eq!(store.read().unwrap(), 1);
    }

    #[test]
    fn test_counter_survives_reopen() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("counter.json");
        let policy = NumberingPolicy::default();

        let store = FileCounterStore::new(path.clone());
        assert_eq!(issue_next(&store, &policy).unwrap().as_str(), "RN-0001");
        assert_eq!(issue_next(&store, &policy).unwrap().as_str(), "RN-0002");

        let reopened = FileCounterStore::new(path);
        assert_eq!(reopened.read().unwrap(), 3);
    }

    #[test]
    fn test_write_sets_value() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileCounterStore::new(temp_dir.path().join("counter.json"));

        store.write(7).unwrap();
        assert_eq!(
            issue_next(&store, &NumberingPolicy::default()).unwrap().as_str(),
            "RN-0007"
        );
        assert_eq!(store.read().unwrap(), 8);
    }
}
