//! Service alert evaluator
//!
//! Computes the service-due verdict per vehicle: distance traveled since
//! the last recorded service compared against the configured interval.
//! Evaluation is a pure function of current state, with no side effects
//! and no persistence.

use crate::config::settings::SettingsStore;
use crate::error::FleetResult;
use crate::models::VehicleId;
use crate::storage::Storage;

use super::registry::VehicleRegistry;

/// Per-vehicle service verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceAlert {
    /// Whether the vehicle has reached the service interval
    pub due: bool,
    /// Kilometers past the interval (0 when not due)
    pub overdue_km: u32,
    /// Kilometers traveled since the last recorded service
    pub distance_since_service_km: u32,
}

/// Service for evaluating service-due status
pub struct ServiceAlertEvaluator<'a> {
    storage: &'a Storage,
    settings: SettingsStore,
}

impl<'a> ServiceAlertEvaluator<'a> {
    /// Create a new evaluator
    pub fn new(storage: &'a Storage, settings: SettingsStore) -> Self {
        Self { storage, settings }
    }

    /// Evaluate one vehicle. Fails with NotFound for unknown ids.
    pub fn evaluate(&self, id: VehicleId) -> FleetResult<ServiceAlert> {
        let registry = VehicleRegistry::new(self.storage);
        let vehicle = registry.get(id)?;

        let interval = self.settings.service_interval_km();
        let distance = vehicle.distance_since_service_km();

        Ok(ServiceAlert {
            due: distance >= interval,
            overdue_km: distance.saturating_sub(interval),
            distance_since_service_km: distance,
        })
    }

    /// Evaluate every id independently, in input order. A NotFound for one
    /// id never aborts evaluation of the others; per-id failures are
    /// collected alongside successes.
    pub fn evaluate_all(
        &self,
        ids: impl IntoIterator<Item = VehicleId>,
    ) -> Vec<(VehicleId, FleetResult<ServiceAlert>)> {
        ids.into_iter()
            .map(|id| (id, self.evaluate(id)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::FleetPaths;
    use crate::error::FleetError;
    use crate::services::recorder::{CreateUsageInput, UsageRecorder};
    use crate::services::registry::VehicleRegistry;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = FleetPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn settings() -> SettingsStore {
        SettingsStore::with_values(10_000, 1_000)
    }

    #[test]
    fn test_not_due_below_interval() {
        // Scenario: 50000 current, 45000 last service, interval 10000
        let (_temp_dir, storage) = create_test_storage();
        let registry = VehicleRegistry::new(&storage);
        let evaluator = ServiceAlertEvaluator::new(&storage, settings());

        let vehicle = registry.register("ABC-123", 50_000, 45_000, None).unwrap();
        let alert = evaluator.evaluate(vehicle.id).unwrap();

        assert!(!alert.due);
        assert_eq!(alert.overdue_km, 0);
        assert_eq!(alert.distance_since_service_km, 5_000);
    }

    #[test]
    fn test_due_after_recording_usage() {
        // Scenario: usage to 56000 pushes distance since service to 11000
        let (_temp_dir, storage) = create_test_storage();
        let registry = VehicleRegistry::new(&storage);
        let recorder = UsageRecorder::new(&storage, settings());
        let evaluator = ServiceAlertEvaluator::new(&storage, settings());

        let vehicle = registry.register("ABC-123", 50_000, 45_000, None).unwrap();
        let record = recorder
            .create(CreateUsageInput {
                vehicle_id: vehicle.id,
                odo_end_km: 56_000,
                date: NaiveDate::from_ymd_opt(2025, 6, 15).unwrap(),
                driver: None,
                purpose: None,
                odo_start_override_km: None,
            })
            .unwrap();
        assert_eq!(record.odo_start_km, 50_000);

        let alert = evaluator.evaluate(vehicle.id).unwrap();
        assert!(alert.due);
        assert_eq!(alert.overdue_km, 1_000);
        assert_eq!(alert.distance_since_service_km, 11_000);
    }

    #[test]
    fn test_due_exactly_at_interval() {
        let (_temp_dir, storage) = create_test_storage();
        let registry = VehicleRegistry::new(&storage);
        let evaluator = ServiceAlertEvaluator::new(&storage, settings());

        let vehicle = registry.register("ABC-123", 30_000, 20_000, None).unwrap();
        let alert = evaluator.evaluate(vehicle.id).unwrap();

        assert!(alert.due);
        assert_eq!(alert.overdue_km, 0);
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let (_temp_dir, storage) = create_test_storage();
        let registry = VehicleRegistry::new(&storage);
        let evaluator = ServiceAlertEvaluator::new(&storage, settings());

        let vehicle = registry.register("ABC-123", 62_000, 45_000, None).unwrap();
        let first = evaluator.evaluate(vehicle.id).unwrap();
        let second = evaluator.evaluate(vehicle.id).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_service_resets_verdict() {
        let (_temp_dir, storage) = create_test_storage();
        let registry = VehicleRegistry::new(&storage);
        let evaluator = ServiceAlertEvaluator::new(&storage, settings());

        let vehicle = registry.register("ABC-123", 62_000, 45_000, None).unwrap();
        assert!(evaluator.evaluate(vehicle.id).unwrap().due);

        registry.record_service(vehicle.id).unwrap();
        let alert = evaluator.evaluate(vehicle.id).unwrap();
        assert!(!alert.due);
        assert_eq!(alert.distance_since_service_km, 0);
    }

    #[test]
    fn test_evaluate_all_collects_failures() {
        let (_temp_dir, storage) = create_test_storage();
        let registry = VehicleRegistry::new(&storage);
        let evaluator = ServiceAlertEvaluator::new(&storage, settings());

        let known = registry.register("ABC-123", 50_000, 45_000, None).unwrap();
        let unknown = VehicleId::new();

        let results = evaluator.evaluate_all([known.id, unknown, known.id]);
        assert_eq!(results.len(), 3);

        // Input order preserved, unknown id fails without aborting the rest
        assert_eq!(results[0].0, known.id);
        assert!(results[0].1.is_ok());
        assert!(matches!(results[1].1, Err(FleetError::NotFound { .. })));
        assert!(results[2].1.is_ok());
    }
}
