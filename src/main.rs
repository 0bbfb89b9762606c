use anyhow::Result;
use clap::{Parser, Subcommand};

use receipt_cli::cli::{
    handle_categories, handle_counter_command, handle_export_command, handle_generate,
    handle_init, handle_list, handle_payload, handle_show, handle_words, CounterCommands, ExportArgs,
    GenerateArgs,
};
use receipt_cli::config::{ReceiptPaths, Settings};
use receipt_cli::storage::Storage;

#[derive(Parser)]
#[command(
    name = "receipt",
    version,
    about = "Terminal-based donation receipt generator",
    long_about = "receipt-cli records donations against a fixed set of categories, \
                  issues sequentially numbered receipts (RN-0001, RN-0002, ...), \
                  renders them with the total in words, and exports them."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the data directory and default settings
    Init,

    /// Show current configuration and paths
    Config,

    /// List the donation categories
    Categories,

    /// Print an amount in words
    Words {
        /// Amount, e.g. 1500 or 10.50
        amount: String,
    },

    /// Validate a donation and issue a receipt
    #[command(alias = "gen")]
    Generate(GenerateArgs),

    /// List issued receipts
    List,

    /// Show an issued receipt
    Show {
        /// Receipt number, e.g. RN-0001
        number: String,
    },

    /// Print the spreadsheet form submission body for a receipt
    Payload {
        /// Receipt number, e.g. RN-0001
        number: String,
    },

    /// Inspect or reset the receipt counter
    #[command(subcommand)]
    Counter(CounterCommands),

    /// Export issued receipts
    Export(ExportArgs),

    /// Show recent audit log entries
    Audit {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}

fn open_storage(paths: &ReceiptPaths) -> Result<Storage> {
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;
    Ok(storage)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let paths = ReceiptPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Init) => {
            let storage = open_storage(&paths)?;
            handle_init(&storage, &settings)?;
        }
        Some(Commands::Config) => {
            println!("receipt-cli Configuration");
            println!("=========================");
            println!("Base directory:  {}", paths.base_dir().display());
            println!("Data directory:  {}", paths.data_dir().display());
            println!("Audit log:       {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!(
                "  Organization:    {}",
                settings.organization_name.as_deref().unwrap_or("(none)")
            );
            println!("  Currency prefix: {}", settings.currency_prefix);
            println!(
                "  Receipt format:  {}",
                settings.numbering_policy().format(1)
            );
            println!(
                "  Submission form: {}",
                settings
                    .submission
                    .endpoint
                    .as_deref()
                    .unwrap_or("(not configured)")
            );
        }
        Some(Commands::Categories) => handle_categories(),
        Some(Commands::Words { amount }) => handle_words(&settings, &amount)?,
        Some(Commands::Generate(args)) => {
            let storage = open_storage(&paths)?;
            handle_generate(&storage, &settings, args)?;
        }
        Some(Commands::List) => {
            let storage = open_storage(&paths)?;
            handle_list(&storage, &settings)?;
        }
        Some(Commands::Show { number }) => {
            let storage = open_storage(&paths)?;
            handle_show(&storage, &settings, &number)?;
        }
        Some(Commands::Payload { number }) => {
            let storage = open_storage(&paths)?;
            handle_payload(&storage, &settings, &number)?;
        }
        Some(Commands::Counter(cmd)) => {
            let storage = open_storage(&paths)?;
            handle_counter_command(&storage, &settings, cmd)?;
        }
        Some(Commands::Export(args)) => {
            let storage = open_storage(&paths)?;
            handle_export_command(&storage, args)?;
        }
        Some(Commands::Audit { limit }) => {
            let storage = open_storage(&paths)?;
            let entries = storage.audit().read_recent(limit)?;
            if entries.is_empty() {
                println!("No audit entries.");
            }
            for entry in entries {
                println!("{}", entry.format_human_readable());
            }
        }
        None => {
            println!("receipt-cli - donation receipts from the terminal");
            println!();
            println!("Run 'receipt --help' for usage information.");
        }
    }

    Ok(())
}
