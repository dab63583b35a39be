//! Usage CLI commands

use chrono::{Local, NaiveDate};
use clap::Subcommand;

use crate::config::settings::SettingsStore;
use crate::display::usage::{format_usage_details, format_usage_register};
use crate::error::{FleetError, FleetResult};
use crate::models::UsageRecordId;
use crate::services::{CreateUsageInput, UsageRecorder, VehicleRegistry};
use crate::storage::Storage;

/// Usage log subcommands
#[derive(Subcommand)]
pub enum UsageCommands {
    /// Record a trip
    Add {
        /// Plate or vehicle ID
        vehicle: String,
        /// Odometer reading at the end of the trip, in kilometers
        odo_end: u32,
        /// Override the starting odometer (must not be below the vehicle's
        /// current reading)
        #[arg(short, long)]
        start: Option<u32>,
        /// Driver name
        #[arg(short, long)]
        driver: Option<String>,
        /// Trip purpose
        #[arg(short, long)]
        purpose: Option<String>,
        /// Trip date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
    },
    /// Show a recorded trip in full
    Show {
        /// Record ID (full UUID, with or without the log- prefix)
        record: String,
    },
    /// List recorded trips
    List {
        /// Filter by plate or vehicle ID
        #[arg(short, long)]
        vehicle: Option<String>,
        /// Number of records to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },
}

/// Handle a usage command
pub fn handle_usage_command(
    storage: &Storage,
    settings: SettingsStore,
    cmd: UsageCommands,
) -> FleetResult<()> {
    let registry = VehicleRegistry::new(storage);
    let recorder = UsageRecorder::new(storage, settings);

    match cmd {
        UsageCommands::Add {
            vehicle,
            odo_end,
            start,
            driver,
            purpose,
            date,
        } => {
            let found = registry
                .find(&vehicle)?
                .ok_or_else(|| FleetError::vehicle_not_found(&vehicle))?;

            let date = match date {
                Some(raw) => NaiveDate::parse_from_str(&raw, "%Y-%m-%d").map_err(|e| {
                    FleetError::Validation(format!(
                        "Invalid date '{}': {}. Use YYYY-MM-DD.",
                        raw, e
                    ))
                })?,
                None => Local::now().date_naive(),
            };

            let record = recorder.create(CreateUsageInput {
                vehicle_id: found.id,
                odo_end_km: odo_end,
                date,
                driver,
                purpose,
                odo_start_override_km: start,
            })?;

            println!(
                "Recorded trip for '{}': {} -> {} km ({} km).",
                found.plate,
                record.odo_start_km,
                record.odo_end_km,
                record.distance_km()
            );
            if let Some(flag) = record.flag {
                println!("Note: trip flagged {}.", flag);
            }
        }
        UsageCommands::Show { record } => {
            let record_id: UsageRecordId = record
                .parse()
                .map_err(|_| FleetError::usage_record_not_found(&record))?;
            let found = recorder.get(record_id)?;

            // A record can outlive its vehicle's store; fall back to the id
            let plate = registry
                .get(found.vehicle_id)
                .map(|v| v.plate)
                .unwrap_or_else(|_| found.vehicle_id.to_string());
            print!("{}", format_usage_details(&found, &plate));
        }
        UsageCommands::List { vehicle, limit } => {
            let vehicle_id = match vehicle {
                Some(identifier) => Some(
                    registry
                        .find(&identifier)?
                        .ok_or_else(|| FleetError::vehicle_not_found(&identifier))?
                        .id,
                ),
                None => None,
            };

            let records = recorder.list(vehicle_id, limit)?;
            print!("{}", format_usage_register(&records));
        }
    }

    Ok(())
}
