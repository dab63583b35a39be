//! Usage register display formatting

use crate::models::UsageRecord;

use super::truncate;

/// Format a single usage record for display (register row)
pub fn format_usage_row(record: &UsageRecord) -> String {
    let flag_indicator = match record.flag {
        Some(flag) => format!(" [{}]", flag),
        None => String::new(),
    };

    let driver_display = if record.driver.is_empty() {
        "(no driver)".to_string()
    } else {
        record.driver.clone()
    };

    format!(
        "{} {:16} {:>9} {:>9} {:>8}{}",
        record.date.format("%Y-%m-%d"),
        truncate(&driver_display, 16),
        record.odo_start_km,
        record.odo_end_km,
        record.distance_km(),
        flag_indicator
    )
}

/// Format a list of usage records as a register
pub fn format_usage_register(records: &[UsageRecord]) -> String {
    if records.is_empty() {
        return "No usage records found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:10} {:16} {:>9} {:>9} {:>8}\n",
        "Date", "Driver", "Start", "End", "Distance"
    ));
    output.push_str(&"-".repeat(56));
    output.push('\n');

    for record in records {
        output.push_str(&format_usage_row(record));
        output.push('\n');
    }

    output
}

/// Format usage record details
pub fn format_usage_details(record: &UsageRecord, plate: &str) -> String {
    let mut output = String::new();

    output.push_str(&format!("Record:    {}\n", record.id));
    output.push_str(&format!("Vehicle:   {}\n", plate));
    output.push_str(&format!("Date:      {}\n", record.date.format("%Y-%m-%d")));
    output.push_str(&format!("Start:     {} km\n", record.odo_start_km));
    output.push_str(&format!("End:       {} km\n", record.odo_end_km));
    output.push_str(&format!("Distance:  {} km\n", record.distance_km()));

    if !record.driver.is_empty() {
        output.push_str(&format!("Driver:    {}\n", record.driver));
    }
    if !record.purpose.is_empty() {
        output.push_str(&format!("Purpose:   {}\n", record.purpose));
    }
    if let Some(flag) = record.flag {
        output.push_str(&format!("Flag:      {}\n", flag));
    }

    output
}
