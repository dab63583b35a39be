//! Vehicle CLI commands

use clap::Subcommand;

use crate::display::vehicle::{format_vehicle_details, format_vehicle_list};
use crate::error::{FleetError, FleetResult};
use crate::services::VehicleRegistry;
use crate::storage::Storage;

/// Vehicle subcommands
#[derive(Subcommand)]
pub enum VehicleCommands {
    /// Register a new vehicle
    Add {
        /// License plate or fleet code
        plate: String,
        /// Current odometer reading in kilometers
        #[arg(short, long, default_value = "0")]
        odometer: u32,
        /// Odometer reading at the last service (defaults to the current reading)
        #[arg(short, long)]
        last_service: Option<u32>,
        /// Free-form notes
        #[arg(short, long)]
        notes: Option<String>,
    },
    /// List registered vehicles
    List,
    /// Show vehicle details
    Show {
        /// Plate or vehicle ID
        vehicle: String,
    },
    /// Record that a service was performed
    Service {
        /// Plate or vehicle ID
        vehicle: String,
    },
}

/// Handle a vehicle command
pub fn handle_vehicle_command(storage: &Storage, cmd: VehicleCommands) -> FleetResult<()> {
    let registry = VehicleRegistry::new(storage);

    match cmd {
        VehicleCommands::Add {
            plate,
            odometer,
            last_service,
            notes,
        } => {
            let last_service = last_service.unwrap_or(odometer);
            let vehicle = registry.register(&plate, odometer, last_service, notes)?;
            println!("Registered vehicle '{}' ({})", vehicle.plate, vehicle.id);
            println!("  Odometer:     {} km", vehicle.current_odometer_km);
            println!("  Last service: {} km", vehicle.last_service_odometer_km);
        }
        VehicleCommands::List => {
            let vehicles = registry.list()?;
            print!("{}", format_vehicle_list(&vehicles));
        }
        VehicleCommands::Show { vehicle } => {
            let vehicle = registry
                .find(&vehicle)?
                .ok_or_else(|| FleetError::vehicle_not_found(&vehicle))?;
            print!("{}", format_vehicle_details(&vehicle));
        }
        VehicleCommands::Service { vehicle } => {
            let found = registry
                .find(&vehicle)?
                .ok_or_else(|| FleetError::vehicle_not_found(&vehicle))?;
            let serviced = registry.record_service(found.id)?;
            println!(
                "Service recorded for '{}' at {} km.",
                serviced.plate, serviced.last_service_odometer_km
            );
        }
    }

    Ok(())
}
