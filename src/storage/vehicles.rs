//! Vehicle repository for JSON storage
//!
//! Manages loading and saving the Vehicles table to vehicles.json

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::FleetError;
use crate::models::{Vehicle, VehicleId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable vehicles table
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct VehicleData {
    vehicles: Vec<Vehicle>,
}

/// Repository for vehicle persistence
pub struct VehicleRepository {
    path: PathBuf,
    data: RwLock<HashMap<VehicleId, Vehicle>>,
}

impl VehicleRepository {
    /// Create a new vehicle repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(HashMap::new()),
        }
    }

    /// Load vehicles from disk.
    ///
    /// Rows from the external table are not trusted: each loaded vehicle is
    /// re-validated against the model invariants.
    pub fn load(&self) -> Result<(), FleetError> {
        let file_data: VehicleData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| FleetError::Persist(format!("Failed to acquire write lock: {}", e)))?;

        data.clear();
        for vehicle in file_data.vehicles {
            vehicle.validate()?;
            data.insert(vehicle.id, vehicle);
        }

        Ok(())
    }

    /// Save vehicles to disk
    pub fn save(&self) -> Result<(), FleetError> {
        let data = self
            .data
            .read()
            .map_err(|e| FleetError::Persist(format!("Failed to acquire read lock: {}", e)))?;

        let mut vehicles: Vec<_> = data.values().cloned().collect();
        vehicles.sort_by(|a, b| a.plate.cmp(&b.plate));

        let file_data = VehicleData { vehicles };
        write_json_atomic(&self.path, &file_data)
    }

    /// Get a vehicle by ID
    pub fn get(&self, id: VehicleId) -> Result<Option<Vehicle>, FleetError> {
        let data = self
            .data
            .read()
            .map_err(|e| FleetError::Persist(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.get(&id).cloned())
    }

    /// Find a vehicle by plate (case-insensitive)
    pub fn get_by_plate(&self, plate: &str) -> Result<Option<Vehicle>, FleetError> {
        let data = self
            .data
            .read()
            .map_err(|e| FleetError::Persist(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data
            .values()
            .find(|v| v.plate.eq_ignore_ascii_case(plate))
            .cloned())
    }

    /// Get all vehicles sorted by plate
    pub fn get_all(&self) -> Result<Vec<Vehicle>, FleetError> {
        let data = self
            .data
            .read()
            .map_err(|e| FleetError::Persist(format!("Failed to acquire read lock: {}", e)))?;

        let mut vehicles: Vec<_> = data.values().cloned().collect();
        vehicles.sort_by(|a, b| a.plate.cmp(&b.plate));
        Ok(vehicles)
    }

    /// Insert or update a vehicle
    pub fn upsert(&self, vehicle: Vehicle) -> Result<(), FleetError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| FleetError::Persist(format!("Failed to acquire write lock: {}", e)))?;

        data.insert(vehicle.id, vehicle);
        Ok(())
    }

    /// Count vehicles
    pub fn count(&self) -> Result<usize, FleetError> {
        let data = self
            .data
            .read()
            .map_err(|e| FleetError::Persist(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}
