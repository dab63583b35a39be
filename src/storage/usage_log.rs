//! Usage log repository for JSON storage
//!
//! Manages the UsageRecords table in usage_log.json. The log is append-only
//! from the core's perspective: there is no update or delete operation.

use std::path::PathBuf;
use std::sync::RwLock;

use crate::error::FleetError;
use crate::models::{UsageRecord, UsageRecordId, VehicleId};

use super::file_io::{read_json, write_json_atomic};

/// Serializable usage log table
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
struct UsageLogData {
    records: Vec<UsageRecord>,
}

/// Append-only repository for usage records
pub struct UsageLogRepository {
    path: PathBuf,
    data: RwLock<Vec<UsageRecord>>,
}

impl UsageLogRepository {
    /// Create a new usage log repository
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            data: RwLock::new(Vec::new()),
        }
    }

    /// Load the usage log from disk
    pub fn load(&self) -> Result<(), FleetError> {
        let file_data: UsageLogData = read_json(&self.path)?;

        let mut data = self
            .data
            .write()
            .map_err(|e| FleetError::Persist(format!("Failed to acquire write lock: {}", e)))?;

        *data = file_data.records;
        Ok(())
    }

    /// Save the usage log to disk
    pub fn save(&self) -> Result<(), FleetError> {
        let data = self
            .data
            .read()
            .map_err(|e| FleetError::Persist(format!("Failed to acquire read lock: {}", e)))?;

        let file_data = UsageLogData {
            records: data.clone(),
        };
        write_json_atomic(&self.path, &file_data)
    }

    /// Append a record to the log
    pub fn append(&self, record: UsageRecord) -> Result<(), FleetError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| FleetError::Persist(format!("Failed to acquire write lock: {}", e)))?;

        data.push(record);
        Ok(())
    }

    /// Remove the most recently appended record, if it matches the given id.
    ///
    /// Only used to roll back a failed create; the log has no general
    /// delete operation.
    pub fn remove_last(&self, id: UsageRecordId) -> Result<bool, FleetError> {
        let mut data = self
            .data
            .write()
            .map_err(|e| FleetError::Persist(format!("Failed to acquire write lock: {}", e)))?;

        if data.last().map(|r| r.id) == Some(id) {
            data.pop();
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Get a record by ID
    pub fn get(&self, id: UsageRecordId) -> Result<Option<UsageRecord>, FleetError> {
        let data = self
            .data
            .read()
            .map_err(|e| FleetError::Persist(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.iter().find(|r| r.id == id).cloned())
    }

    /// Get all records, newest first
    pub fn get_all(&self) -> Result<Vec<UsageRecord>, FleetError> {
        let data = self
            .data
            .read()
            .map_err(|e| FleetError::Persist(format!("Failed to acquire read lock: {}", e)))?;

        let mut records = data.clone();
        records.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));
        Ok(records)
    }

    /// Get records for a vehicle, newest first
    pub fn get_by_vehicle(&self, vehicle_id: VehicleId) -> Result<Vec<UsageRecord>, FleetError> {
        let all = self.get_all()?;
        Ok(all
            .into_iter()
            .filter(|r| r.vehicle_id == vehicle_id)
            .collect())
    }

    /// Count records
    pub fn count(&self) -> Result<usize, FleetError> {
        let data = self
            .data
            .read()
            .map_err(|e| FleetError::Persist(format!("Failed to acquire read lock: {}", e)))?;

        Ok(data.len())
    }
}
