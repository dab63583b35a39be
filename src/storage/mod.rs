//! Storage layer for FleetLog
//!
//! Provides JSON file storage with atomic writes, an exclusive store lock
//! for the usage-recording critical section, and automatic directory
//! creation. Three logical tables are persisted: vehicles, the append-only
//! usage log, and key/value settings.

pub mod file_io;
pub mod lock;
pub mod settings_values;
pub mod usage_log;
pub mod vehicles;

pub use file_io::{read_json, write_json_atomic};
pub use lock::StoreLock;
pub use settings_values::SettingsRepository;
pub use usage_log::UsageLogRepository;
pub use vehicles::VehicleRepository;

use crate::config::paths::FleetPaths;
use crate::error::FleetError;

/// Main storage coordinator that provides access to all repositories
pub struct Storage {
    paths: FleetPaths,
    pub vehicles: VehicleRepository,
    pub usage_log: UsageLogRepository,
    pub settings: SettingsRepository,
}

impl Storage {
    /// Create a new Storage instance
    pub fn new(paths: FleetPaths) -> Result<Self, FleetError> {
        // Ensure directories exist
        paths.ensure_directories()?;

        Ok(Self {
            vehicles: VehicleRepository::new(paths.vehicles_file()),
            usage_log: UsageLogRepository::new(paths.usage_log_file()),
            settings: SettingsRepository::new(paths.settings_file()),
            paths,
        })
    }

    /// Get the paths configuration
    pub fn paths(&self) -> &FleetPaths {
        &self.paths
    }

    /// Load all tables from disk
    pub fn load_all(&mut self) -> Result<(), FleetError> {
        self.vehicles.load()?;
        self.usage_log.load()?;
        self.settings.load()?;
        Ok(())
    }

    /// Save all tables to disk
    pub fn save_all(&self) -> Result<(), FleetError> {
        self.vehicles.save()?;
        self.usage_log.save()?;
        self.settings.save()?;
        Ok(())
    }

    /// Acquire the exclusive store lock for a read-modify-write sequence
    pub fn lock(&self) -> Result<StoreLock, FleetError> {
        StoreLock::acquire(self.paths.lock_file())
    }

    /// Check if storage has been initialized (has any data)
    pub fn is_initialized(&self) -> bool {
        self.paths.is_initialized()
    }
}
