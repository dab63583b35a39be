//! CSV export of the usage log

use std::collections::HashMap;
use std::path::Path;

use crate::error::{FleetError, FleetResult};
use crate::models::{UsageRecord, Vehicle, VehicleId};

/// Write usage records to a CSV file.
///
/// Vehicle ids are resolved to plates for readability; unknown ids (a
/// record whose vehicle was registered in another store) fall back to the
/// raw id.
pub fn export_usage_csv(
    path: &Path,
    records: &[UsageRecord],
    vehicles: &[Vehicle],
) -> FleetResult<usize> {
    let plates: HashMap<VehicleId, &str> = vehicles
        .iter()
        .map(|v| (v.id, v.plate.as_str()))
        .collect();

    let mut writer = csv::Writer::from_path(path)
        .map_err(|e| FleetError::Export(format!("Failed to create {}: {}", path.display(), e)))?;

    writer
        .write_record([
            "date",
            "vehicle",
            "odo_start_km",
            "odo_end_km",
            "distance_km",
            "driver",
            "purpose",
            "flag",
        ])
        .map_err(|e| FleetError::Export(format!("Failed to write header: {}", e)))?;

    for record in records {
        let vehicle_display = plates
            .get(&record.vehicle_id)
            .map(|p| p.to_string())
            .unwrap_or_else(|| record.vehicle_id.to_string());
        let flag_display = record.flag.map(|f| f.to_string()).unwrap_or_default();

        writer
            .write_record([
                record.date.format("%Y-%m-%d").to_string(),
                vehicle_display,
                record.odo_start_km.to_string(),
                record.odo_end_km.to_string(),
                record.distance_km().to_string(),
                record.driver.clone(),
                record.purpose.clone(),
                flag_display,
            ])
            .map_err(|e| FleetError::Export(format!("Failed to write record: {}", e)))?;
    }

    writer
        .flush()
        .map_err(|e| FleetError::Export(format!("Failed to flush export: {}", e)))?;

    Ok(records.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    #[test]
    fn test_export_resolves_plates() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("usage.csv");

        let vehicle = Vehicle::new("ABC-123", 50_000, 45_000).unwrap();
        let mut record = UsageRecord::new(
            vehicle.id,
            50_000,
            56_000,
            NaiveDate::from_ymd_opt(2025, 6, 15).unwrap(),
        );
        record.driver = "M. Okafor".into();

        let count = export_usage_csv(&path, &[record], &[vehicle]).unwrap();
        assert_eq!(count, 1);

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.starts_with("date,vehicle,odo_start_km"));
        assert!(contents.contains("2025-06-15,ABC-123,50000,56000,6000,M. Okafor"));
    }

    #[test]
    fn test_export_empty_log_writes_header_only() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("usage.csv");

        let count = export_usage_csv(&path, &[], &[]).unwrap();
        assert_eq!(count, 0);

        let contents = std::fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 1);
    }
}
