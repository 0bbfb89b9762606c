//! CLI command for data export

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::{Args, ValueEnum};

use crate::error::{ReceiptError, ReceiptResult};
use crate::export::{export_full_json, export_full_yaml, export_receipts_csv};
use crate::storage::Storage;

/// Export format options
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// CSV, one row per receipt
    Csv,
    /// JSON, full export
    Json,
    /// YAML, full export, human-readable
    Yaml,
}

/// Arguments of `receipt export`
#[derive(Args, Debug)]
pub struct ExportArgs {
    /// Output file path
    pub output: PathBuf,

    /// Export format
    #[arg(short, long, value_enum, default_value = "json")]
    pub format: ExportFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

/// Handle `receipt export`
pub fn handle_export_command(storage: &Storage, args: ExportArgs) -> ReceiptResult<()> {
    let file = File::create(&args.output).map_err(|e| {
        ReceiptError::Export(format!(
            "Failed to create file {}: {}",
            args.output.display(),
            e
        ))
    })?;
    let mut writer = BufWriter::new(file);

    match args.format {
        ExportFormat::Csv => export_receipts_csv(storage, &mut writer)?,
        ExportFormat::Json => export_full_json(storage, &mut writer, args.pretty)?,
        ExportFormat::Yaml => export_full_yaml(storage, &mut writer)?,
    }
    writer
        .flush()
        .map_err(|e| ReceiptError::Export(e.to_string()))?;

    println!(
        "Exported {} receipts to {}",
        storage.receipts.count()?,
        args.output.display()
    );
    Ok(())
}
