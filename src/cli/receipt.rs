//! Receipt CLI commands

use clap::Args;

use crate::config::Settings;
use crate::display::{format_receipt, format_receipt_list};
use crate::error::{ReceiptError, ReceiptResult};
use crate::models::{DonationCategory, DonorDetails, Money, ReceiptDraft};
use crate::services::ReceiptService;
use crate::storage::Storage;
use crate::submission::FormSubmission;
use crate::words;

/// Arguments of `receipt generate`
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Donor name
    #[arg(short, long)]
    pub name: Option<String>,

    /// Donation date (defaults to today)
    #[arg(short, long)]
    pub date: Option<String>,

    /// Donor city
    #[arg(short, long)]
    pub city: Option<String>,

    /// Name of the person receiving the donation
    #[arg(short, long)]
    pub received_by: Option<String>,

    /// Select a category with an amount, e.g. `--donation rasoi=500`
    #[arg(long = "donation", value_name = "CATEGORY=AMOUNT", value_parser = parse_assignment)]
    pub donations: Vec<(DonationCategory, String)>,

    /// Attach a note to a category, e.g. `--note rasoi="Sunday meal"`
    #[arg(long = "note", value_name = "CATEGORY=TEXT", value_parser = parse_assignment)]
    pub notes: Vec<(DonationCategory, String)>,

    /// Show the receipt without issuing a number or saving it
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateArgs {
    /// Fill a fresh draft from the arguments
    pub fn to_draft(&self, settings: &Settings) -> ReceiptResult<ReceiptDraft> {
        let date = match &self.date {
            Some(date) => date.clone(),
            None => settings.today()?,
        };

        let mut draft = ReceiptDraft::new(DonorDetails::new(
            self.name.clone().unwrap_or_default(),
            date,
            self.city.clone().unwrap_or_default(),
            self.received_by.clone().unwrap_or_default(),
        ));

        for (category, amount) in &self.donations {
            draft.select_with_amount(*category, amount.as_str())?;
        }
        for (category, note) in &self.notes {
            draft.set_note(*category, note.as_str())?;
        }

        Ok(draft)
    }
}

/// Parse `CATEGORY=VALUE`
fn parse_assignment(s: &str) -> Result<(DonationCategory, String), String> {
    let (category, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected CATEGORY=VALUE, got '{}'", s))?;
    Ok((category.parse()?, value.to_string()))
}

/// Handle `receipt generate`
pub fn handle_generate(storage: &Storage, settings: &Settings, args: GenerateArgs) -> ReceiptResult<()> {
    let draft = args.to_draft(settings)?;
    let service = ReceiptService::new(storage, settings);

    if args.dry_run {
        let preview = service.preview(&draft)?;
        println!("{}", format_receipt(&preview, settings)?);
        println!("(dry run: receipt not issued, counter unchanged)");
        return Ok(());
    }

    let record = service.generate(&draft)?;
    println!("{}", format_receipt(&record, settings)?);
    println!("Issued receipt {}", record.receipt_number);
    Ok(())
}

/// Handle `receipt list`
pub fn handle_list(storage: &Storage, settings: &Settings) -> ReceiptResult<()> {
    let receipts = ReceiptService::new(storage, settings).list()?;
    println!("{}", format_receipt_list(&receipts, settings));
    Ok(())
}

/// Handle `receipt show`
pub fn handle_show(storage: &Storage, settings: &Settings, number: &str) -> ReceiptResult<()> {
    let record = ReceiptService::new(storage, settings).find(number)?;
    println!("{}", format_receipt(&record, settings)?);
    Ok(())
}

/// Handle `receipt payload`
pub fn handle_payload(storage: &Storage, settings: &Settings, number: &str) -> ReceiptResult<()> {
    let record = ReceiptService::new(storage, settings).find(number)?;
    let submission = FormSubmission::from_receipt(&record, settings)?;

    if let Some(endpoint) = &submission.endpoint {
        println!("POST {}", endpoint);
        println!("Content-Type: application/x-www-form-urlencoded");
        println!();
    }
    println!("{}", submission.encode());
    Ok(())
}

/// Handle `receipt words`
pub fn handle_words(settings: &Settings, amount: &str) -> ReceiptResult<()> {
    let money = Money::parse(amount).map_err(|e| ReceiptError::InvalidAmount(e.to_string()))?;
    println!("{} {}", settings.currency_prefix, words::amount_in_words(money)?);
    Ok(())
}

/// Handle `receipt categories`
pub fn handle_categories() {
    println!("{:14} {:18} {}", "Key", "Label", "Description");
    println!("{}", "-".repeat(56));
    for category in DonationCategory::ALL {
        println!(
            "{:14} {:18} {}",
            category.key(),
            category.label(),
            category.description()
        );
    }
}
