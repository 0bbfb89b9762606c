//! User settings for receipt-cli
//!
//! Manages receipt numbering, currency presentation and the field layout of
//! the spreadsheet form that receipts are submitted to.

use std::fmt::Write;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::paths::ReceiptPaths;
use crate::error::ReceiptError;
use crate::numbering::NumberingPolicy;

/// Form field names used when building a submission payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmissionFields {
    pub receipt_number: String,
    pub donor_name: String,
    pub date: String,
    pub city: String,
    pub amount: String,
    pub amount_words: String,
    pub received_by: String,
    pub donations: String,
}

impl Default for SubmissionFields {
    fn default() -> Self {
        Self {
            receipt_number: "receipt_no".into(),
            donor_name: "name".into(),
            date: "date".into(),
            city: "city".into(),
            amount: "amount".into(),
            amount_words: "amount_words".into(),
            received_by: "received_by".into(),
            donations: "donations".into(),
        }
    }
}

/// Spreadsheet form submission settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SubmissionSettings {
    /// Form endpoint the payload is meant for
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,

    /// Field names for each receipt value
    #[serde(default)]
    pub fields: SubmissionFields,
}

/// User settings for receipt-cli
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Schema version for migration support
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,

    /// Organization name printed above each receipt
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization_name: Option<String>,

    /// Currency prefix placed before amounts and amounts in words
    #[serde(default = "default_currency")]
    pub currency_prefix: String,

    /// Literal prefix of every receipt number
    #[serde(default = "default_receipt_prefix")]
    pub receipt_prefix: String,

    /// Minimum digit count of the receipt sequence (zero padded)
    #[serde(default = "default_receipt_width")]
    pub receipt_number_width: usize,

    /// Date format used when no date is given (strftime format)
    #[serde(default = "default_date_format")]
    pub date_format: String,

    /// Spreadsheet submission form
    #[serde(default)]
    pub submission: SubmissionSettings,
}

fn default_schema_version() -> u32 {
    1
}

fn default_currency() -> String {
    "Rs.".to_string()
}

fn default_receipt_prefix() -> String {
    "RN-".to_string()
}

fn default_receipt_width() -> usize {
    4
}

fn default_date_format() -> String {
    "%Y-%m-%d".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            schema_version: default_schema_version(),
            organization_name: None,
            currency_prefix: default_currency(),
            receipt_prefix: default_receipt_prefix(),
            receipt_number_width: default_receipt_width(),
            date_format: default_date_format(),
            submission: SubmissionSettings::default(),
        }
    }
}

impl Settings {
    /// Numbering policy built from the prefix and width settings
    pub fn numbering_policy(&self) -> NumberingPolicy {
        NumberingPolicy::new(self.receipt_prefix.clone(), self.receipt_number_width)
    }

    /// Format `date` with the configured date format
    ///
    /// The format is user-editable, so a malformed one is reported as a
    /// configuration error.
    pub fn format_date(&self, date: NaiveDate) -> Result<String, ReceiptError> {
        let mut formatted = String::new();
        write!(formatted, "{}", date.format(&self.date_format)).map_err(|_| {
            ReceiptError::Config(format!("Invalid date format: {}", self.date_format))
        })?;
        Ok(formatted)
    }

    /// Today's date in the configured format
    pub fn today(&self) -> Result<String, ReceiptError> {
        self.format_date(chrono::Local::now().date_naive())
    }

    /// Load settings from disk, or create default settings if file doesn't exist
    pub fn load_or_create(paths: &ReceiptPaths) -> Result<Self, ReceiptError> {
        let settings_path = paths.settings_file();

        if settings_path.exists() {
            let contents = std::fs::read_to_string(&settings_path).map_err(|e| {
                ReceiptError::Io(format!("Failed to read settings file: {}", e))
            })?;

            let settings: Settings = serde_json::from_str(&contents).map_err(|e| {
                ReceiptError::Config(format!("Failed to parse settings file: {}", e))
            })?;

            Ok(settings)
        } else {
            // Don't save yet - let caller decide when to persist
            Ok(Settings::default())
        }
    }

    /// Save settings to disk
    pub fn save(&self, paths: &ReceiptPaths) -> Result<(), ReceiptError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self).map_err(|e| {
            ReceiptError::Config(format!("Failed to serialize settings: {}", e))
        })?;

        std::fs::write(paths.settings_file(), contents).map_err(|e| {
            ReceiptError::Io(format!("Failed to write settings file: {}", e))
        })?;

        Ok(())
    }
}
