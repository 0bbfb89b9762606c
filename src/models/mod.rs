//! Core data models for receipt-cli
//!
//! This module contains the data structures of the receipt domain: donation
//! categories and lines, donor details, drafts and issued receipts.

pub mod donation;
pub mod ids;
pub mod money;
pub mod receipt;

pub use donation::{DonationCategory, DonationLine};
pub use ids::ReceiptId;
pub use money::{Money, MoneyParseError};
pub use receipt::{DonorDetails, ReceiptDraft, ReceiptLine, ReceiptRecord};
