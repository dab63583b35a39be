//! Export CLI commands

use std::path::PathBuf;

use clap::Subcommand;

use crate::error::FleetResult;
use crate::export::export_usage_csv;
use crate::storage::Storage;

/// Export subcommands
#[derive(Subcommand)]
pub enum ExportCommands {
    /// Export the usage log to CSV
    Usage {
        /// Output file path
        file: PathBuf,
    },
}

/// Handle an export command
pub fn handle_export_command(storage: &Storage, cmd: ExportCommands) -> FleetResult<()> {
    match cmd {
        ExportCommands::Usage { file } => {
            let records = storage.usage_log.get_all()?;
            let vehicles = storage.vehicles.get_all()?;
            let count = export_usage_csv(&file, &records, &vehicles)?;
            println!("Exported {} record(s) to {}", count, file.display());
        }
    }

    Ok(())
}
