//! FleetLog - Terminal-based vehicle usage logbook
//!
//! This library provides the core functionality for the FleetLog application.
//! Operators record trips (odometer start/end) per vehicle, the system carries
//! the ending odometer forward as the next trip's starting value, and a
//! dashboard flags vehicles overdue for service based on distance traveled
//! since the last recorded service.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Path management and the session settings store
//! - `error`: Custom error types
//! - `models`: Core data models (vehicles, usage records)
//! - `storage`: JSON file storage layer with an exclusive store lock
//! - `services`: Business logic (registry, recorder, alert evaluator)
//! - `display`: Terminal rendering of records and alerts
//! - `export`: CSV export of the usage log
//! - `cli`: Command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use fleetlog::config::{paths::FleetPaths, settings::SettingsStore};
//! use fleetlog::storage::Storage;
//!
//! let paths = FleetPaths::new()?;
//! let mut storage = Storage::new(paths)?;
//! storage.load_all()?;
//! let settings = SettingsStore::load(&storage);
//! ```

pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod models;
pub mod services;
pub mod storage;

pub use error::FleetError;
