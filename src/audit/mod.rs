//! Audit logging for receipt-cli
//!
//! Records every issued receipt and every counter change in an append-only,
//! line-delimited JSON log (`audit.log`).
//!
//! - `AuditEntry`: one timestamped operation on an entity, with optional
//!   before/after values.
//! - `AuditLogger`: appends entries to the log file and reads them back.

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
