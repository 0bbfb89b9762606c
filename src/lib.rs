//! receipt-cli - donation receipts from the terminal
//!
//! Donors pick from a fixed set of donation categories; a validated form is
//! issued a sequential receipt number (`RN-0001`), rendered with its total in
//! words (Indian numbering: lakh, crore), stored, and can be exported or
//! turned into a spreadsheet form submission.
//!
//! # Architecture
//!
//! - `words`: amounts in words
//! - `validation`: submittability rules and totals
//! - `numbering`: receipt numbers and the counter store abstraction
//! - `models`: money, donation lines, drafts and issued receipts
//! - `config`: paths and settings
//! - `storage`: JSON file storage, the persisted counter
//! - `audit`: append-only audit log
//! - `services`: issuing receipts, managing the counter
//! - `display`, `export`, `submission`: output formats
//! - `cli`: command handlers for the `receipt` binary
//!
//! # Example
//!
//! ```
//! use receipt_cli::models::{DonationCategory, DonorDetails, ReceiptDraft};
//! use receipt_cli::numbering::{issue_next, MemoryCounterStore, NumberingPolicy};
//! use receipt_cli::models::ReceiptRecord;
//!
//! let mut draft = ReceiptDraft::new(DonorDetails::new("Asha", "2024-01-01", "Surat", "Mahesh"));
//! draft.select_with_amount(DonationCategory::Rasoi, "105").unwrap();
//! assert!(draft.is_submittable());
//!
//! let counter = MemoryCounterStore::new(7);
//! let number = issue_next(&counter, &NumberingPolicy::default()).unwrap();
//! let receipt = ReceiptRecord::from_draft(number, &draft);
//!
//! assert_eq!(receipt.receipt_number.as_str(), "RN-0007");
//! assert_eq!(receipt.total_amount_words().unwrap(), "One Hundred and Five Only");
//! ```

pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod numbering;
pub mod services;
pub mod storage;
pub mod submission;
pub mod validation;
pub mod words;

pub use error::{ReceiptError, ReceiptResult};
