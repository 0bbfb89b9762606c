//! Configuration module for receipt-cli
//!
//! This module provides configuration management including:
//! - Data directory resolution
//! - User settings persistence (receipt numbering, currency, submission form)

pub mod paths;
pub mod settings;

pub use paths::ReceiptPaths;
pub use settings::Settings;
