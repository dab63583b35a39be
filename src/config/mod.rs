//! Configuration for FleetLog
//!
//! Path resolution for the data directory and the session-scoped settings
//! store that resolves thresholds from the persisted settings table.

pub mod paths;
pub mod settings;

pub use paths::FleetPaths;
pub use settings::SettingsStore;
