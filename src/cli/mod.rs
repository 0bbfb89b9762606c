//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod counter;
pub mod export;
pub mod init;
pub mod receipt;

pub use counter::{handle_counter_command, CounterCommands};
pub use export::{handle_export_command, ExportArgs};
pub use init::handle_init;
pub use receipt::{
    handle_categories, handle_generate, handle_list, handle_payload, handle_show, handle_words,
    GenerateArgs,
};
