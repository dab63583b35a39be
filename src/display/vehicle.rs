//! Vehicle display formatting

use crate::models::Vehicle;

use super::truncate;

/// Format a single vehicle as a table row
pub fn format_vehicle_row(vehicle: &Vehicle) -> String {
    format!(
        "{:12} {:12} {:>12} {:>14} {:>10}",
        truncate(&vehicle.plate, 12),
        vehicle.id,
        vehicle.current_odometer_km,
        vehicle.last_service_odometer_km,
        vehicle.distance_since_service_km()
    )
}

/// Format a list of vehicles as a table
pub fn format_vehicle_list(vehicles: &[Vehicle]) -> String {
    if vehicles.is_empty() {
        return "No vehicles registered.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:12} {:12} {:>12} {:>14} {:>10}\n",
        "Plate", "ID", "Odometer", "Last service", "Since svc"
    ));
    output.push_str(&"-".repeat(64));
    output.push('\n');

    for vehicle in vehicles {
        output.push_str(&format_vehicle_row(vehicle));
        output.push('\n');
    }

    output
}

/// Format full vehicle details
pub fn format_vehicle_details(vehicle: &Vehicle) -> String {
    let mut output = String::new();

    output.push_str(&format!("Vehicle:          {}\n", vehicle.id));
    output.push_str(&format!("Plate:            {}\n", vehicle.plate));
    output.push_str(&format!("Odometer:         {} km\n", vehicle.current_odometer_km));
    output.push_str(&format!(
        "Last service:     {} km\n",
        vehicle.last_service_odometer_km
    ));
    output.push_str(&format!(
        "Since service:    {} km\n",
        vehicle.distance_since_service_km()
    ));

    if !vehicle.notes.is_empty() {
        output.push_str(&format!("Notes:            {}\n", vehicle.notes));
    }

    output.push_str(&format!(
        "Registered:       {}\n",
        vehicle.created_at.format("%Y-%m-%d")
    ));

    output
}
