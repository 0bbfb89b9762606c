//! Receipt counter CLI commands

use clap::Subcommand;

use crate::config::Settings;
use crate::error::ReceiptResult;
use crate::services::CounterService;
use crate::storage::Storage;

/// Counter subcommands
#[derive(Subcommand, Debug)]
pub enum CounterCommands {
    /// Show the counter and the next receipt number
    Show,
    /// Set the counter value the next receipt is issued under
    Set {
        value: u64,
    },
}

/// Handle a counter command
pub fn handle_counter_command(
    storage: &Storage,
    settings: &Settings,
    cmd: CounterCommands,
) -> ReceiptResult<()> {
    let service = CounterService::new(storage, settings);

    match cmd {
        CounterCommands::Show => {
            println!("Counter:             {}", service.current()?);
            println!("Next receipt number: {}", service.next_number()?);
        }
        CounterCommands::Set { value } => {
            let previous = service.set(value)?;
            println!("Counter moved from {} to {}", previous, value);
            println!("Next receipt number: {}", service.next_number()?);
        }
    }

    Ok(())
}
