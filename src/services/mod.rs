//! Service layer for receipt-cli
//!
//! The service layer provides business logic on top of the storage layer,
//! handling validation, numbering and audit logging.

pub mod counter;
pub mod receipt;

pub use counter::CounterService;
pub use receipt::ReceiptService;
