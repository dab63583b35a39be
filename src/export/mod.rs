//! Export functionality for FleetLog
//!
//! Exports the usage log for use outside the application.

pub mod csv;

pub use csv::export_usage_csv;
