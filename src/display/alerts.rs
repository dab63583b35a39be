//! Service alert dashboard formatting

use crate::error::FleetResult;
use crate::models::Vehicle;
use crate::services::ServiceAlert;

use super::truncate;

/// One dashboard line per vehicle: verdict, distance since service, overdue
pub fn format_alert_row(vehicle: &Vehicle, alert: &ServiceAlert) -> String {
    let verdict = if alert.due { "SERVICE DUE" } else { "ok" };
    format!(
        "{:12} {:>12} {:>11} {:>10} {}",
        truncate(&vehicle.plate, 12),
        vehicle.current_odometer_km,
        alert.distance_since_service_km,
        alert.overdue_km,
        verdict
    )
}

/// Format the dashboard for all evaluated vehicles.
///
/// Per-vehicle evaluation failures are rendered inline rather than
/// suppressing the rest of the dashboard.
pub fn format_dashboard(rows: &[(Vehicle, FleetResult<ServiceAlert>)]) -> String {
    if rows.is_empty() {
        return "No vehicles registered.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:12} {:>12} {:>11} {:>10} Status\n",
        "Plate", "Odometer", "Since svc", "Overdue"
    ));
    output.push_str(&"-".repeat(55));
    output.push('\n');

    let mut due_count = 0;
    for (vehicle, result) in rows {
        match result {
            Ok(alert) => {
                if alert.due {
                    due_count += 1;
                }
                output.push_str(&format_alert_row(vehicle, alert));
            }
            Err(e) => {
                output.push_str(&format!("{:12} evaluation failed: {}", vehicle.plate, e));
            }
        }
        output.push('\n');
    }

    output.push('\n');
    if due_count == 0 {
        output.push_str("No vehicles require service.\n");
    } else {
        output.push_str(&format!(
            "{} vehicle(s) need service.\n",
            due_count
        ));
    }

    output
}
