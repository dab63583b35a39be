use anyhow::Result;
use clap::{Parser, Subcommand};

use fleetlog::cli::{
    handle_dashboard_command, handle_export_command, handle_settings_command,
    handle_usage_command, handle_vehicle_command, ExportCommands, SettingsCommands,
    UsageCommands, VehicleCommands,
};
use fleetlog::config::{paths::FleetPaths, settings::SettingsStore};
use fleetlog::storage::Storage;

#[derive(Parser)]
#[command(
    name = "fleetlog",
    version,
    about = "Terminal-based vehicle usage logbook",
    long_about = "FleetLog is a terminal-based vehicle usage logbook. Record trips \
                  per vehicle with automatic odometer carry-forward, and see which \
                  vehicles are overdue for service based on distance traveled since \
                  their last service."
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Vehicle management commands
    #[command(subcommand, alias = "veh")]
    Vehicle(VehicleCommands),

    /// Usage log commands
    #[command(subcommand, alias = "log")]
    Usage(UsageCommands),

    /// Show the service alert dashboard
    #[command(alias = "alerts")]
    Dashboard,

    /// Settings commands
    #[command(subcommand)]
    Settings(SettingsCommands),

    /// Export commands
    #[command(subcommand)]
    Export(ExportCommands),

    /// Initialize the data directory
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize paths and storage
    let paths = FleetPaths::new()?;
    let mut storage = Storage::new(paths.clone())?;
    storage.load_all()?;

    // Thresholds are resolved once per session
    let settings = SettingsStore::load(&storage);

    match cli.command {
        Some(Commands::Vehicle(cmd)) => {
            handle_vehicle_command(&storage, cmd)?;
        }
        Some(Commands::Usage(cmd)) => {
            handle_usage_command(&storage, settings, cmd)?;
        }
        Some(Commands::Dashboard) => {
            handle_dashboard_command(&storage, settings)?;
        }
        Some(Commands::Settings(cmd)) => {
            handle_settings_command(&storage, cmd)?;
        }
        Some(Commands::Export(cmd)) => {
            handle_export_command(&storage, cmd)?;
        }
        Some(Commands::Init) => {
            println!("Initializing FleetLog at: {}", paths.data_dir().display());
            storage.save_all()?;
            println!("Initialization complete!");
            println!();
            println!("Register a vehicle with 'fleetlog vehicle add <plate> --odometer <km>'.");
            println!("Record a trip with 'fleetlog usage add <plate> <odo-end>'.");
        }
        Some(Commands::Config) => {
            println!("FleetLog Configuration");
            println!("======================");
            println!("Data directory:   {}", paths.data_dir().display());
            println!();
            println!("Settings:");
            println!("  Service interval: {} km", settings.service_interval_km());
            println!("  Daily trip limit: {} km", settings.daily_trip_limit_km());
        }
        None => {
            println!("FleetLog - Terminal-based vehicle usage logbook");
            println!();
            println!("Run 'fleetlog --help' for usage information.");
            println!("Run 'fleetlog dashboard' to see service alerts.");
        }
    }

    Ok(())
}
