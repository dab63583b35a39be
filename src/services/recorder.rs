//! Usage recorder service
//!
//! Creates usage records with odometer carry-forward: the starting reading
//! for a new trip is the vehicle's current odometer, pre-filled by the core
//! rather than trusted from caller input. Recording a trip and advancing
//! the vehicle odometer form one logical unit under the store lock.

use chrono::NaiveDate;

use crate::config::settings::SettingsStore;
use crate::error::{FleetError, FleetResult};
use crate::models::{TripFlag, UsageRecord, UsageRecordId, VehicleId};
use crate::storage::Storage;

use super::registry::VehicleRegistry;

/// Input for recording a trip
#[derive(Debug, Clone)]
pub struct CreateUsageInput {
    pub vehicle_id: VehicleId,
    pub odo_end_km: u32,
    pub date: NaiveDate,
    pub driver: Option<String>,
    pub purpose: Option<String>,
    /// Optional starting-odometer override. Must not be below the
    /// vehicle's current odometer; backdated entries cannot silently lower
    /// the odometer.
    pub odo_start_override_km: Option<u32>,
}

/// Service for validating and creating usage records
pub struct UsageRecorder<'a> {
    storage: &'a Storage,
    settings: SettingsStore,
}

impl<'a> UsageRecorder<'a> {
    /// Create a new usage recorder
    pub fn new(storage: &'a Storage, settings: SettingsStore) -> Self {
        Self { storage, settings }
    }

    /// Record a trip.
    ///
    /// Carries the vehicle's current odometer forward as the starting
    /// reading (or validates a caller-supplied override against it),
    /// checks `odo_end >= odo_start`, persists the record, and advances
    /// the vehicle odometer to the ending reading. The whole sequence runs
    /// under the exclusive store lock; a persistence failure after the
    /// record was appended rolls the record back so nothing is left
    /// partially visible.
    pub fn create(&self, input: CreateUsageInput) -> FleetResult<UsageRecord> {
        let registry = VehicleRegistry::new(self.storage);

        // Critical section: read current odometer -> append record ->
        // advance odometer. The guard releases on every exit path.
        let _guard = self.storage.lock()?;

        let current_odo = registry.current_odometer(input.vehicle_id)?;

        let start = match input.odo_start_override_km {
            Some(override_km) => {
                if override_km < current_odo {
                    return Err(FleetError::Validation(format!(
                        "Starting odometer override ({} km) is below the vehicle's current reading ({} km)",
                        override_km, current_odo
                    )));
                }
                override_km
            }
            None => current_odo,
        };

        if input.odo_end_km < start {
            return Err(FleetError::Validation(format!(
                "Ending odometer ({} km) cannot be below starting odometer ({} km)",
                input.odo_end_km, start
            )));
        }

        let mut record = UsageRecord::new(input.vehicle_id, start, input.odo_end_km, input.date);
        if let Some(driver) = input.driver {
            record.driver = driver.trim().to_string();
        }
        if let Some(purpose) = input.purpose {
            record.purpose = purpose.trim().to_string();
        }
        if record.distance_km() > self.settings.daily_trip_limit_km() {
            record.flag = Some(TripFlag::DailyHigh);
        }

        record
            .validate()
            .map_err(|e| FleetError::Validation(e.to_string()))?;

        // Persist the record, then advance the odometer. A failure in the
        // second step rolls the first back.
        self.storage.usage_log.append(record.clone())?;
        self.storage.usage_log.save()?;

        if let Err(advance_err) = registry.advance_odometer(input.vehicle_id, input.odo_end_km) {
            self.storage.usage_log.remove_last(record.id)?;
            self.storage.usage_log.save()?;
            return Err(match advance_err {
                FleetError::Persist(msg) => FleetError::Persist(msg),
                other => FleetError::Persist(format!(
                    "Odometer advance failed after record append, rolled back: {}",
                    other
                )),
            });
        }

        Ok(record)
    }

    /// Get a recorded trip by ID
    pub fn get(&self, id: UsageRecordId) -> FleetResult<UsageRecord> {
        self.storage
            .usage_log
            .get(id)?
            .ok_or_else(|| FleetError::usage_record_not_found(id.to_string()))
    }

    /// List recorded trips, newest first
    pub fn list(&self, vehicle_id: Option<VehicleId>, limit: usize) -> FleetResult<Vec<UsageRecord>> {
        let mut records = match vehicle_id {
            Some(id) => {
                // Surface NotFound for unknown vehicles instead of an empty list
                VehicleRegistry::new(self.storage).get(id)?;
                self.storage.usage_log.get_by_vehicle(id)?
            }
            None => self.storage.usage_log.get_all()?,
        };
        records.truncate(limit);
        Ok(records)
    }

    /// Count recorded trips
    pub fn count(&self) -> FleetResult<usize> {
        self.storage.usage_log.count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::FleetPaths;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FleetPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn test_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()
    }

    fn input(vehicle_id: VehicleId, odo_end_km: u32) -> CreateUsageInput {
        CreateUsageInput {
            vehicle_id,
            odo_end_km,
            date: test_date(),
            driver: None,
            purpose: None,
            odo_start_override_km: None,
        }
    }

    #[test]
    fn test_carry_forward_autofills_start() {
        let (_temp_dir, storage) = create_test_storage();
        let registry = VehicleRegistry::new(&storage);
        let recorder = UsageRecorder::new(&storage, SettingsStore::default());

        let vehicle = registry.register("ABC-123", 50_000, 45_000, None).unwrap();
        let record = recorder.create(input(vehicle.id, 56_000)).unwrap();

        assert_eq!(record.odo_start_km, 50_000);
        assert_eq!(record.odo_end_km, 56_000);
        assert_eq!(registry.current_odometer(vehicle.id).unwrap(), 56_000);
    }

    #[test]
    fn test_sequence_of_records_chains_odometer() {
        let (_temp_dir, storage) = create_test_storage();
        let registry = VehicleRegistry::new(&storage);
        let recorder = UsageRecorder::new(&storage, SettingsStore::default());

        let vehicle = registry.register("ABC-123", 0, 0, None).unwrap();

        let mut previous_end = 0;
        for end in [120, 340, 340, 900] {
            let before = registry.current_odometer(vehicle.id).unwrap();
            let record = recorder.create(input(vehicle.id, end)).unwrap();

            // Carry-forward law: start equals the odometer observed
            // immediately before creation
            assert_eq!(record.odo_start_km, before);
            // Monotonicity across the history
            assert!(record.odo_end_km >= previous_end);
            previous_end = record.odo_end_km;
        }

        assert_eq!(registry.current_odometer(vehicle.id).unwrap(), 900);
        assert_eq!(recorder.count().unwrap(), 4);
    }

    #[test]
    fn test_end_below_start_rejected() {
        let (_temp_dir, storage) = create_test_storage();
        let registry = VehicleRegistry::new(&storage);
        let recorder = UsageRecorder::new(&storage, SettingsStore::default());

        let vehicle = registry.register("ABC-123", 50_000, 45_000, None).unwrap();
        let result = recorder.create(input(vehicle.id, 48_000));
        assert!(matches!(result, Err(FleetError::Validation(_))));

        // Nothing partially visible
        assert_eq!(recorder.count().unwrap(), 0);
        assert_eq!(registry.current_odometer(vehicle.id).unwrap(), 50_000);
    }

    #[test]
    fn test_override_above_current_accepted() {
        let (_temp_dir, storage) = create_test_storage();
        let registry = VehicleRegistry::new(&storage);
        let recorder = UsageRecorder::new(&storage, SettingsStore::default());

        let vehicle = registry.register("ABC-123", 50_000, 45_000, None).unwrap();
        let mut req = input(vehicle.id, 52_500);
        req.odo_start_override_km = Some(52_000);

        let record = recorder.create(req).unwrap();
        assert_eq!(record.odo_start_km, 52_000);
        assert_eq!(record.distance_km(), 500);
        assert_eq!(registry.current_odometer(vehicle.id).unwrap(), 52_500);
    }

    #[test]
    fn test_override_below_current_rejected() {
        let (_temp_dir, storage) = create_test_storage();
        let registry = VehicleRegistry::new(&storage);
        let recorder = UsageRecorder::new(&storage, SettingsStore::default());

        let vehicle = registry.register("ABC-123", 50_000, 45_000, None).unwrap();
        let mut req = input(vehicle.id, 51_000);
        req.odo_start_override_km = Some(49_000);

        let result = recorder.create(req);
        assert!(matches!(result, Err(FleetError::Validation(_))));
        assert_eq!(recorder.count().unwrap(), 0);
    }

    #[test]
    fn test_unknown_vehicle_not_found() {
        let (_temp_dir, storage) = create_test_storage();
        let recorder = UsageRecorder::new(&storage, SettingsStore::default());

        let result = recorder.create(input(VehicleId::new(), 1_000));
        assert!(matches!(result, Err(FleetError::NotFound { .. })));
    }

    #[test]
    fn test_daily_trip_flagging() {
        let (_temp_dir, storage) = create_test_storage();
        let registry = VehicleRegistry::new(&storage);
        let settings = SettingsStore::with_values(10_000, 1_000);
        let recorder = UsageRecorder::new(&storage, settings);

        let vehicle = registry.register("ABC-123", 0, 0, None).unwrap();

        // At the limit: no flag
        let record = recorder.create(input(vehicle.id, 1_000)).unwrap();
        assert!(record.flag.is_none());

        // Over the limit: flagged
        let record = recorder.create(input(vehicle.id, 2_500)).unwrap();
        assert_eq!(record.flag, Some(TripFlag::DailyHigh));
    }

    #[test]
    fn test_lock_released_after_validation_failure() {
        let (_temp_dir, storage) = create_test_storage();
        let registry = VehicleRegistry::new(&storage);
        let recorder = UsageRecorder::new(&storage, SettingsStore::default());

        let vehicle = registry.register("ABC-123", 50_000, 45_000, None).unwrap();
        assert!(recorder.create(input(vehicle.id, 48_000)).is_err());

        // A second attempt must be able to take the lock again
        let record = recorder.create(input(vehicle.id, 51_000)).unwrap();
        assert_eq!(record.odo_start_km, 50_000);
    }

    #[test]
    fn test_get_by_id() {
        let (_temp_dir, storage) = create_test_storage();
        let registry = VehicleRegistry::new(&storage);
        let recorder = UsageRecorder::new(&storage, SettingsStore::default());

        let vehicle = registry.register("ABC-123", 0, 0, None).unwrap();
        let created = recorder.create(input(vehicle.id, 100)).unwrap();

        let fetched = recorder.get(created.id).unwrap();
        assert_eq!(fetched.odo_end_km, 100);

        let missing = recorder.get(UsageRecordId::new());
        assert!(matches!(missing, Err(FleetError::NotFound { .. })));
    }

    #[test]
    fn test_list_with_limit_and_filter() {
        let (_temp_dir, storage) = create_test_storage();
        let registry = VehicleRegistry::new(&storage);
        let recorder = UsageRecorder::new(&storage, SettingsStore::default());

        let vehicle = registry.register("ABC-123", 0, 0, None).unwrap();
        for end in [100, 200, 300] {
            recorder.create(input(vehicle.id, end)).unwrap();
        }

        assert_eq!(recorder.list(None, 2).unwrap().len(), 2);
        assert_eq!(recorder.list(Some(vehicle.id), 10).unwrap().len(), 3);

        let missing = recorder.list(Some(VehicleId::new()), 10);
        assert!(matches!(missing, Err(FleetError::NotFound { .. })));
    }
}
