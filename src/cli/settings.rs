//! Settings CLI commands
//!
//! The administrative path over the key/value settings table. Writes take
//! effect on the next session load.

use clap::Subcommand;

use crate::config::settings::{
    SettingsStore, DAILY_TRIP_LIMIT_KEY, DEFAULT_DAILY_TRIP_LIMIT_KM,
    DEFAULT_SERVICE_INTERVAL_KM, SERVICE_INTERVAL_KEY,
};
use crate::error::FleetResult;
use crate::storage::Storage;

/// Settings subcommands
#[derive(Subcommand)]
pub enum SettingsCommands {
    /// Show the effective settings
    Show,
    /// Set a raw setting value
    Set {
        /// Setting key (e.g. SERVICE_INTERVAL_KM)
        key: String,
        /// Raw value
        value: String,
    },
}

/// Handle a settings command
pub fn handle_settings_command(storage: &Storage, cmd: SettingsCommands) -> FleetResult<()> {
    match cmd {
        SettingsCommands::Show => {
            let settings = SettingsStore::load(storage);
            println!("Effective settings:");
            println!(
                "  {}: {} km (default {})",
                SERVICE_INTERVAL_KEY,
                settings.service_interval_km(),
                DEFAULT_SERVICE_INTERVAL_KM
            );
            println!(
                "  {}: {} km (default {})",
                DAILY_TRIP_LIMIT_KEY,
                settings.daily_trip_limit_km(),
                DEFAULT_DAILY_TRIP_LIMIT_KM
            );

            let stored = storage.settings.get_all()?;
            if !stored.is_empty() {
                println!();
                println!("Stored values:");
                for (key, value) in stored {
                    println!("  {} = {}", key, value);
                }
            }
        }
        SettingsCommands::Set { key, value } => {
            storage.settings.set(key.clone(), value.clone())?;
            storage.settings.save()?;
            println!("Set {} = {}", key, value);
            println!("The new value takes effect on the next run.");
        }
    }

    Ok(())
}
