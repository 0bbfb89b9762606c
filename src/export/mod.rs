//! Export module for receipt-cli
//!
//! Provides export of issued receipts in multiple formats:
//! - CSV: one row per receipt (spreadsheet-compatible)
//! - JSON: full machine-readable export
//! - YAML: full human-readable export

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::export_receipts_csv;
pub use self::json::{export_full_json, FullExport, EXPORT_SCHEMA_VERSION};
pub use self::yaml::export_full_yaml;
