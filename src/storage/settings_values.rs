//! Settings repository for JSON storage
//!
//! Manages the key/value Settings table in settings.json. Values are kept
//! as raw strings; interpretation (parsing, default substitution) belongs
//! to the session settings store.

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::FleetError;

use super::file_io::{read_json, write_json_atomic};

/// Repository for the key/value settings table
pub struct SettingsRepository {
    path: PathBuf,
    data: RwLock<BTreeMap<String, String>>,
}

impl SettingsRepository {
    /// Create a new settings repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(BTreeMap::new()),
        }
    }

    /// Load the settings table from disk
    pub fn load(&self) -> Result<(), FleetError> {
        let file_data: BTreeMap<String, String> = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| FleetError::Persist(format!("Failed to acquire write lock: {}", e)))?;

        *data = file_data;
        Ok(())
    }

    /// Save the settings table to disk
    pub fn save(&self) -> Result<(), FleetError> {
        let data = self
            .data
            .read()
            .map_err(|e| FleetError::Persist(format!("Failed to acquire read lock: {}", e)))?;

        write_json_atomic(&self.path, &*data)
    }

    /// Get the raw value for a key
    pub fn get(&self, key: &str) -> Option<String> {
        self.data
            .read()
            .ok()
            .and_then(|data| data.get(key).cloned())
    }

    /// Set the raw value for a key
    pub fn set(&self, key: impl Into<String>, value: impl Into<String>) -> Result<(), FleetError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| FleetError::Persist(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(key.into(), value.into());
        Ok(())
    }

    /// All key/value pairs, sorted by key
    pub fn get_all(&self) -> Result<Vec<(String, String)>, FleetError> {
        let data = self
            .data
            .read()
            .map_err(|e| FleetError::Persist(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
    }
}
