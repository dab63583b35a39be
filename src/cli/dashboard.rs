//! Dashboard CLI command
//!
//! Evaluates every registered vehicle and renders the service alert
//! dashboard.

use crate::config::settings::SettingsStore;
use crate::display::alerts::format_dashboard;
use crate::error::FleetResult;
use crate::services::{ServiceAlertEvaluator, VehicleRegistry};
use crate::storage::Storage;

/// Handle the dashboard command
pub fn handle_dashboard_command(storage: &Storage, settings: SettingsStore) -> FleetResult<()> {
    let registry = VehicleRegistry::new(storage);
    let evaluator = ServiceAlertEvaluator::new(storage, settings);

    let vehicles = registry.list()?;
    let verdicts = evaluator.evaluate_all(vehicles.iter().map(|v| v.id));

    let rows: Vec<_> = vehicles
        .into_iter()
        .zip(verdicts)
        .map(|(vehicle, (_, result))| (vehicle, result))
        .collect();

    println!("Service interval: {} km", settings.service_interval_km());
    println!();
    print!("{}", format_dashboard(&rows));

    Ok(())
}
