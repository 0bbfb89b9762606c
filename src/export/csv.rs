//! CSV export of issued receipts

use std::io::Write;

use crate::error::{ReceiptError, ReceiptResult};
use crate::storage::Storage;
use crate::submission::donations_summary;

const HEADER: [&str; 9] = [
    "Receipt No",
    "Date",
    "Name",
    "City",
    "Received By",
    "Total",
    "Amount In Words",
    "Donations",
    "Created At",
];

/// Export all receipts to CSV, oldest first
pub fn export_receipts_csv<W: Write>(storage: &Storage, writer: W) -> ReceiptResult<()> {
    let export_err = |e: ::csv::Error| ReceiptError::Export(e.to_string());
    let mut csv_writer = ::csv::Writer::from_writer(writer);

    csv_writer.write_record(HEADER).map_err(export_err)?;

    for receipt in storage.receipts.get_all()? {
        csv_writer
            .write_record([
                receipt.receipt_number.to_string(),
                receipt.donor.date.clone(),
                receipt.donor.donor_name.clone(),
                receipt.donor.city.clone(),
                receipt.donor.received_by.clone(),
                receipt.total_amount().to_decimal_string(),
                receipt.total_amount_words()?,
                donations_summary(&receipt),
                receipt.created_at.to_rfc3339(),
            ])
            .map_err(export_err)?;
    }

    csv_writer
        .flush()
        .map_err(|e| ReceiptError::Export(e.to_string()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ReceiptPaths, Settings};
    use crate::models::{DonationCategory, DonorDetails, ReceiptDraft};
    use crate::services::ReceiptService;
    use tempfile::TempDir;

    #[test]
    fn test_export_receipts_csv() {
        let temp_dir = TempDir::new().unwrap();
        let paths = ReceiptPaths::with_base_dir(temp_dir.path().to_path_buf());
        let storage = Storage::new(paths).unwrap();
        let settings = Settings::default();

        let mut draft = ReceiptDraft::new(DonorDetails::new("Patel, Asha", "2024-01-01", "Surat", "M"));
        draft.select_with_amount(DonationCategory::Rasoi, "1500").unwrap();
        ReceiptService::new(&storage, &settings).generate(&draft).unwrap();

        let mut buffer = Vec::new();
        export_receipts_csv(&storage, &mut buffer).unwrap();
        let output = String::from_utf8(buffer).unwrap();

        let mut lines = output.lines();
        assert!(lines.next().unwrap().starts_with("Receipt No,Date,Name"));
        let row = lines.next().unwrap();
        assert!(row.starts_with("RN-0001,2024-01-01,\"Patel, Asha\",Surat,M,1500,"));
        assert!(row.contains("One Thousand Five Hundred Only"));
        assert!(lines.next().is_none());
    }
}
