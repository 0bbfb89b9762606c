//! `receipt init`

use crate::audit::EntityType;
use crate::config::Settings;
use crate::error::ReceiptResult;
use crate::storage::Storage;

/// Audit entity id of the settings file
pub const SETTINGS_ENTITY_ID: &str = "settings";

/// Create the data directories and write the settings file
///
/// Returns whether the settings file was newly created. Only a new settings
/// file is recorded in the audit log.
pub fn handle_init(storage: &Storage, settings: &Settings) -> ReceiptResult<bool> {
    let paths = storage.paths();
    println!("Initializing receipt-cli at: {}", paths.base_dir().display());

    paths.ensure_directories()?;
    let created = !paths.settings_file().exists();
    settings.save(paths)?;

    if created {
        storage.log_create(
            EntityType::Settings,
            SETTINGS_ENTITY_ID,
            settings.organization_name.clone(),
            settings,
        )?;
    }

    println!("Initialization complete!");
    println!(
        "Edit {} to set the organization name and submission form.",
        paths.settings_file().display()
    );
    Ok(created)
}
