//! Receipt display formatting
//!
//! Renders an issued receipt the way it is printed: header, donor block,
//! donation table, total and amount in words, and the receiver's name.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::config::Settings;
use crate::error::ReceiptResult;
use crate::models::ReceiptRecord;

/// Placeholder printed when nobody is named as receiver
const BLANK_SIGNATURE: &str = "______________";

#[derive(Tabled)]
struct LineRow {
    #[tabled(rename = "Donation Detail")]
    detail: String,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Note")]
    note: String,
}

#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "Receipt No")]
    number: String,
    #[tabled(rename = "Date")]
    date: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "City")]
    city: String,
    #[tabled(rename = "Total")]
    total: String,
}

/// Format a single receipt
pub fn format_receipt(record: &ReceiptRecord, settings: &Settings) -> ReceiptResult<String> {
    let symbol = settings.currency_prefix.as_str();
    let mut output = String::new();

    if let Some(org) = &settings.organization_name {
        output.push_str(&format!("{}\n\n", org));
    }

    output.push_str(&format!(
        "Date: {:<24}Receipt No: {}\n",
        record.donor.date, record.receipt_number
    ));
    output.push_str(&format!("Name: {}\n", record.donor.donor_name));
    output.push_str(&format!("City: {}\n\n", record.donor.city));

    let rows = record.lines.iter().map(|line| LineRow {
        detail: line.label().to_string(),
        amount: line.amount.format_with_symbol(symbol),
        note: line.note.clone().unwrap_or_default(),
    });
    let mut table = Table::new(rows);
    table.with(Style::ascii());
    output.push_str(&table.to_string());
    output.push('\n');

    output.push_str(&format!(
        "Total:           {}\n",
        record.total_amount().format_with_symbol(symbol)
    ));
    output.push_str(&format!(
        "Amount in words: {}\n\n",
        record.total_amount_words()?
    ));

    let received_by = match record.donor.received_by.trim() {
        "" => BLANK_SIGNATURE,
        name => name,
    };
    output.push_str(&format!("{:>48}\n", format!("Received By: {}", received_by)));

    Ok(output)
}

/// Format a list of receipts as a table
pub fn format_receipt_list(records: &[ReceiptRecord], settings: &Settings) -> String {
    if records.is_empty() {
        return "No receipts issued yet.".to_string();
    }

    let rows = records.iter().map(|r| SummaryRow {
        number: r.receipt_number.to_string(),
        date: r.donor.date.clone(),
        name: r.donor.donor_name.clone(),
        city: r.donor.city.clone(),
        total: r.total_amount().format_with_symbol(&settings.currency_prefix),
    });

    let mut table = Table::new(rows);
    table.with(Style::ascii());

    let grand_total: crate::models::Money = records.iter().map(|r| r.total_amount()).sum();
    format!(
        "{}\nReceipts: {}  Total: {}\n",
        table,
        records.len(),
        grand_total.format_with_symbol(&settings.currency_prefix)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DonationCategory, DonorDetails, ReceiptDraft};
    use crate::numbering::NumberingPolicy;

    fn record(received_by: &str) -> ReceiptRecord {
        let mut draft = ReceiptDraft::new(DonorDetails::new(
            "Asha Patel",
            "2024-01-01",
            "Surat",
            received_by,
        ));
        draft
            .select_with_amount(DonationCategory::ThalBhet, "100000")
            .unwrap();
        draft.set_note(DonationCategory::ThalBhet, "annual").unwrap();
        ReceiptRecord::from_draft(NumberingPolicy::default().format(1), &draft)
    }

    #[test]
    fn test_format_receipt() {
        let mut settings = Settings::default();
        settings.organization_name = Some("Shree Mandir".into());

        let text = format_receipt(&record("Mahesh"), &settings).unwrap();

        assert!(text.starts_with("Shree Mandir\n"));
        assert!(text.contains("Receipt No: RN-0001"));
        assert!(text.contains("Name: Asha Patel"));
        assert!(text.contains("Donation Detail"));
        assert!(text.contains("થાળ ભેટ"));
        assert!(text.contains("annual"));
        assert!(text.contains("Total:           Rs.1,00,000.00"));
        assert!(text.contains("Amount in words: One Lakh Only"));
        assert!(text.contains("Received By: Mahesh"));
    }

    #[test]
    fn test_blank_receiver_gets_signature_line() {
        let text = format_receipt(&record(""), &Settings::default()).unwrap();
        assert!(text.contains("Received By: ______________"));
    }

    #[test]
    fn test_format_receipt_list() {
        let settings = Settings::default();
        assert_eq!(format_receipt_list(&[], &settings), "No receipts issued yet.");

        let text = format_receipt_list(&[record("M")], &settings);
        assert!(text.contains("RN-0001"));
        assert!(text.contains("Receipts: 1  Total: Rs.1,00,000.00"));
    }
}
