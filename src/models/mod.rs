//! Core data models for FleetLog
//!
//! This module contains the data structures that represent the logbook
//! domain: vehicles and usage records.

pub mod ids;
pub mod usage;
pub mod vehicle;

pub use ids::{UsageRecordId, VehicleId};
pub use usage::{TripFlag, UsageRecord};
pub use vehicle::Vehicle;
