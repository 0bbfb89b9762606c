//! Spreadsheet form submission payload
//!
//! An issued receipt is flattened into name/value pairs keyed by the form
//! field names from settings and encoded as
//! `application/x-www-form-urlencoded`. Sending the body is left to the
//! caller.

use url::form_urlencoded;

use crate::config::Settings;
use crate::error::ReceiptResult;
use crate::models::ReceiptRecord;

/// Form fields ready to be posted to the configured endpoint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSubmission {
    pub endpoint: Option<String>,
    pub fields: Vec<(String, String)>,
}

impl FormSubmission {
    /// Build the submission for an issued receipt
    pub fn from_receipt(record: &ReceiptRecord, settings: &Settings) -> ReceiptResult<Self> {
        let names = &settings.submission.fields;
        let amount_words = format!("{} {}", settings.currency_prefix, record.total_amount_words()?);

        let fields = vec![
            (names.receipt_number.clone(), record.receipt_number.to_string()),
            (names.donor_name.clone(), record.donor.donor_name.clone()),
            (names.date.clone(), record.donor.date.clone()),
            (names.city.clone(), record.donor.city.clone()),
            (names.amount.clone(), record.total_amount().to_decimal_string()),
            (names.amount_words.clone(), amount_words),
            (names.received_by.clone(), record.donor.received_by.clone()),
            (names.donations.clone(), donations_summary(record)),
        ];

        Ok(Self {
            endpoint: settings.submission.endpoint.clone(),
            fields,
        })
    }

    /// URL-encoded request body
    pub fn encode(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (name, value) in &self.fields {
            serializer.append_pair(name, value);
        }
        serializer.finish()
    }

    /// Value submitted under `name`
    pub fn value(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.as_str())
    }
}

/// One entry per line: `label: ₹amount (note)`, joined with ", "
pub fn donations_summary(record: &ReceiptRecord) -> String {
    record
        .lines
        .iter()
        .map(|line| {
            let amount = format!("{}: ₹{}", line.label(), line.amount.to_decimal_string());
            match &line.note {
                Some(note) => format!("{} ({})", amount, note),
                None => amount,
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}
