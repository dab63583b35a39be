//! Vehicle registry service
//!
//! Holds per-vehicle odometer state: the current reading and the reading at
//! the last recorded service. The current odometer only moves through
//! `advance_odometer` and is monotonic non-decreasing.

use crate::error::{FleetError, FleetResult};
use crate::models::{Vehicle, VehicleId};
use crate::storage::Storage;

/// Service for vehicle registration and odometer state
pub struct VehicleRegistry<'a> {
    storage: &'a Storage,
}

impl<'a> VehicleRegistry<'a> {
    /// Create a new vehicle registry
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Register a new vehicle
    pub fn register(
        &self,
        plate: &str,
        current_odometer_km: u32,
        last_service_odometer_km: u32,
        notes: Option<String>,
    ) -> FleetResult<Vehicle> {
        let plate = plate.trim();
        if self.storage.vehicles.get_by_plate(plate)?.is_some() {
            return Err(FleetError::vehicle_exists(plate));
        }

        let vehicle = Vehicle::with_notes(
            plate,
            current_odometer_km,
            last_service_odometer_km,
            notes.unwrap_or_default(),
        )?;
        vehicle.validate()?;

        self.storage.vehicles.upsert(vehicle.clone())?;
        self.storage.vehicles.save()?;

        Ok(vehicle)
    }

    /// Get a vehicle by ID
    pub fn get(&self, id: VehicleId) -> FleetResult<Vehicle> {
        self.storage
            .vehicles
            .get(id)?
            .ok_or_else(|| FleetError::vehicle_not_found(id.to_string()))
    }

    /// Find a vehicle by plate or ID string
    pub fn find(&self, identifier: &str) -> FleetResult<Option<Vehicle>> {
        if let Some(vehicle) = self.storage.vehicles.get_by_plate(identifier)? {
            return Ok(Some(vehicle));
        }
        if let Ok(id) = identifier.parse::<VehicleId>() {
            return self.storage.vehicles.get(id);
        }
        Ok(None)
    }

    /// List all vehicles
    pub fn list(&self) -> FleetResult<Vec<Vehicle>> {
        self.storage.vehicles.get_all()
    }

    /// Get the current odometer reading for a vehicle
    pub fn current_odometer(&self, id: VehicleId) -> FleetResult<u32> {
        Ok(self.get(id)?.current_odometer_km)
    }

    /// Get the odometer reading at the last recorded service
    pub fn last_service_odometer(&self, id: VehicleId) -> FleetResult<u32> {
        Ok(self.get(id)?.last_service_odometer_km)
    }

    /// Advance a vehicle's odometer to a new reading and persist it.
    ///
    /// Fails with a validation error if the new reading is below the
    /// current one.
    pub fn advance_odometer(&self, id: VehicleId, new_odo_km: u32) -> FleetResult<Vehicle> {
        let mut vehicle = self.get(id)?;
        vehicle.advance_odometer(new_odo_km)?;

        self.storage.vehicles.upsert(vehicle.clone())?;
        self.storage.vehicles.save()?;

        Ok(vehicle)
    }

    /// Record that a service was performed: the last-service odometer is
    /// set to the current reading and persisted.
    pub fn record_service(&self, id: VehicleId) -> FleetResult<Vehicle> {
        let mut vehicle = self.get(id)?;
        vehicle.record_service();

        self.storage.vehicles.upsert(vehicle.clone())?;
        self.storage.vehicles.save()?;

        Ok(vehicle)
    }

    /// Count registered vehicles
    pub fn count(&self) -> FleetResult<usize> {
        self.storage.vehicles.count()
    }
}
