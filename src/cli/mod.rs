//! CLI command handlers
//!
//! This module contains the implementation of CLI commands,
//! bridging the clap argument parsing with the service layer.

pub mod dashboard;
pub mod export;
pub mod settings;
pub mod usage;
pub mod vehicle;

pub use dashboard::handle_dashboard_command;
pub use export::{handle_export_command, ExportCommands};
pub use settings::{handle_settings_command, SettingsCommands};
pub use usage::{handle_usage_command, UsageCommands};
pub use vehicle::{handle_vehicle_command, VehicleCommands};
