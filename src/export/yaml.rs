//! YAML export of issued receipts

use std::io::Write;

use crate::error::{ReceiptError, ReceiptResult};
use crate::export::json::FullExport;
use crate::storage::Storage;

/// Export everything to YAML, preceded by a comment header
pub fn export_full_yaml<W: Write>(storage: &Storage, mut writer: W) -> ReceiptResult<()> {
    let export = FullExport::from_storage(storage)?;
    let export_err = |e: std::io::Error| ReceiptError::Export(e.to_string());

    writeln!(writer, "# receipt-cli export").map_err(export_err)?;
    writeln!(writer, "# Generated: {}", export.exported_at).map_err(export_err)?;
    writeln!(writer, "# App Version: {}", export.app_version).map_err(export_err)?;
    writeln!(writer).map_err(export_err)?;

    serde_yaml::to_writer(writer, &export).map_err(|e| ReceiptError::Export(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ReceiptPaths;
    use tempfile::TempDir;

    #[test]
    fn test_export_empty_yaml() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ReceiptPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();

        let mut buffer = Vec::new();
        export_full_yaml(&storage, &mut buffer).unwrap();
        let output = String::from_utf8(buffer).unwrap();

        assert!(output.starts_with("# receipt-cli export"));
        assert!(output.contains("receipts: []"));
        assert!(output.contains("next_counter: 1"));
        assert!(output.contains("receipt_count: 0"));
    }
}
