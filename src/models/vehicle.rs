//! Vehicle model
//!
//! Represents a vehicle in the fleet with its current odometer and the
//! odometer reading at the last recorded service. Both readings are in
//! kilometers and the invariant `last_service_odometer_km <=
//! current_odometer_km` holds for every constructed value.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::VehicleId;
use crate::error::{FleetError, FleetResult};

/// A vehicle in the fleet
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Vehicle {
    /// Unique identifier
    pub id: VehicleId,

    /// License plate or fleet code (unique, human-facing key)
    pub plate: String,

    /// Current odometer reading in kilometers
    pub current_odometer_km: u32,

    /// Odometer reading at the last recorded service
    pub last_service_odometer_km: u32,

    /// Free-form notes
    #[serde(default)]
    pub notes: String,

    /// When the vehicle was registered
    pub created_at: DateTime<Utc>,

    /// When the vehicle was last modified
    pub updated_at: DateTime<Utc>,
}

impl Vehicle {
    /// Create a new vehicle, checking the service/odometer invariant.
    pub fn new(
        plate: impl Into<String>,
        current_odometer_km: u32,
        last_service_odometer_km: u32,
    ) -> FleetResult<Self> {
        if last_service_odometer_km > current_odometer_km {
            return Err(FleetError::Validation(format!(
                "Last service odometer ({} km) cannot exceed current odometer ({} km)",
                last_service_odometer_km, current_odometer_km
            )));
        }

        let now = Utc::now();
        Ok(Self {
            id: VehicleId::new(),
            plate: plate.into(),
            current_odometer_km,
            last_service_odometer_km,
            notes: String::new(),
            created_at: now,
            updated_at: now,
        })
    }

    /// Create a new vehicle with notes
    pub fn with_notes(
        plate: impl Into<String>,
        current_odometer_km: u32,
        last_service_odometer_km: u32,
        notes: impl Into<String>,
    ) -> FleetResult<Self> {
        let mut vehicle = Self::new(plate, current_odometer_km, last_service_odometer_km)?;
        vehicle.notes = notes.into();
        Ok(vehicle)
    }

    /// Advance the odometer to a new reading.
    ///
    /// The odometer is monotonic non-decreasing; a lower reading is a
    /// validation error.
    pub fn advance_odometer(&mut self, new_odo_km: u32) -> FleetResult<()> {
        if new_odo_km < self.current_odometer_km {
            return Err(FleetError::Validation(format!(
                "Odometer cannot decrease: {} km is below the current reading of {} km",
                new_odo_km, self.current_odometer_km
            )));
        }
        self.current_odometer_km = new_odo_km;
        self.updated_at = Utc::now();
        Ok(())
    }

    /// Record a completed service: the last-service odometer becomes the
    /// current reading.
    pub fn record_service(&mut self) {
        self.last_service_odometer_km = self.current_odometer_km;
        self.updated_at = Utc::now();
    }

    /// Kilometers traveled since the last recorded service
    pub fn distance_since_service_km(&self) -> u32 {
        self.current_odometer_km - self.last_service_odometer_km
    }

    /// Validate the invariants on a loaded vehicle.
    ///
    /// The external table is not trusted: values read from disk go through
    /// the same check as constructed ones.
    pub fn validate(&self) -> FleetResult<()> {
        if self.plate.trim().is_empty() {
            return Err(FleetError::Validation("Vehicle plate cannot be empty".into()));
        }
        if self.last_service_odometer_km > self.current_odometer_km {
            return Err(FleetError::Validation(format!(
                "Vehicle {}: last service odometer ({} km) exceeds current odometer ({} km)",
                self.plate, self.last_service_odometer_km, self.current_odometer_km
            )));
        }
        Ok(())
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} km)", self.plate, self.current_odometer_km)
    }
}
